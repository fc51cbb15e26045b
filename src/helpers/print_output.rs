use crate::types::{ClaimSet, Output, SessionState};
use chrono::{DateTime, Utc};
use colored::*;
use serde_json::json;

pub fn print_output(format: &str, output: &Output) {
    println!("{}", render_output(format, output));
}

pub fn render_output(format: &str, output: &Output) -> String {
    match format {
        "json" => serde_json::to_string(output).unwrap_or_else(|e| error_report(&e)),
        _ => render_text(output),
    }
}

fn error_report(error: &dyn std::fmt::Display) -> String {
    json!({ "status": "error", "detail": error.to_string() }).to_string()
}

fn decode_timestamp(timestamp: u64) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|utc| utc.format("%Y-%m-%d %H:%M:%S (UTC)").to_string())
        .unwrap_or_else(|| "out of range".to_string())
}

fn render_text(output: &Output) -> String {
    let mut report = String::new();
    report.push_str(&"Session Credential Report\n".green().bold());
    report.push_str("=========================\n\n");

    match &output.claims {
        Some(claims) => push_claims(&mut report, claims),
        None => report.push_str(&format!("{} {}\n", "[!]".red(), "Credential could not be decoded".red())),
    }

    report.push_str(&"\nVerdict:\n".yellow());
    let status = format!("{}", output.status);
    let status = match output.status {
        SessionState::Valid => status.green(),
        SessionState::Expiring => status.yellow(),
        _ => status.red(),
    };
    report.push_str(&format!("[+] state = {}\n", status.bold()));
    report.push_str(&format!("[+] expired = {}\n", output.verdict.expired));
    report.push_str(&format!(
        "[+] seconds remaining = {}\n",
        output.verdict.seconds_remaining.to_string().bright_blue()
    ));
    report.push_str(&format!("[+] skew = {}s\n", output.skew_seconds));

    if !output.detail.is_empty() {
        report.push_str(&format!("\n{}\n", output.detail));
    }

    report
}

fn push_claims(report: &mut String, claims: &ClaimSet) {
    report.push_str(&"Token payload values:\n".yellow());

    for (field, value) in [
        ("sub", &claims.subject_id),
        ("name", &claims.display_name),
        ("email", &claims.contact_address),
    ] {
        if let Some(value) = value {
            report.push_str(&format!("[+] {} = \"{}\"\n", field, value.bright_blue()));
        }
    }

    for (field, value) in [("iat", claims.issued_at), ("exp", claims.expires_at)] {
        match value {
            Some(timestamp) => report.push_str(&format!(
                "[+] {} = {}    ==> TIMESTAMP = {}\n",
                field,
                timestamp.to_string().bright_blue(),
                decode_timestamp(timestamp).bright_blue()
            )),
            None => report.push_str(&format!("[-] {} is missing\n", field)),
        }
    }

    let mut extra: Vec<_> = claims.extra.iter().collect();
    extra.sort_by(|a, b| a.0.cmp(b.0));
    for (key, value) in extra {
        report.push_str(&format!("[+] {} = {}\n", key, value.to_string().bright_blue()));
    }
}
