pub mod clock;
pub mod session_gate;
pub mod token_codec;
