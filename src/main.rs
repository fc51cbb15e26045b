use clap::{App, Arg};
use std::error::Error;
use colored::*;

use rusty_session::helpers::inspect::inspect;
use rusty_session::helpers::print_output::print_output;
use rusty_session::helpers::telemetry::init_tracing;
use rusty_session::{GateConfig, SessionGate};

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let matches = App::new("Session Credential Inspector")
        .version("1.0")
        .about("Decodes a session JWT without verifying it and reports whether it is still usable")
        .arg(
            Arg::with_name("token")
                .help("The session credential to inspect")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("skew")
                .help("Seconds subtracted from the expiry to absorb clock drift")
                .short("s")
                .long("skew")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("warn")
                .help("Report the session as expiring when fewer seconds than this remain")
                .short("w")
                .long("warn")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("format")
                .help("The output format of the report (text, json)")
                .short("f")
                .long("format")
                .takes_value(true)
                .possible_values(&["text", "json"])
                .default_value("text"),
        )
        .get_matches();

    let token = matches.value_of("token").unwrap_or_default();
    let format = matches.value_of("format").unwrap_or("text");
    let config = GateConfig::from_matches(&matches)?;
    let gate = SessionGate::new(config);

    let output = inspect(&gate, token);

    print_output(format, &output);

    let exit_code = output.exit_code();
    if exit_code != 0 {
        if format != "json" {
            eprintln!("{} {}", "[-]".yellow(), "Session is not usable".yellow());
        }
        std::process::exit(exit_code);
    }

    Ok(())
}
