pub mod inspect;
pub mod print_output;
pub mod telemetry;
