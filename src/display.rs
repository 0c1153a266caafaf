use console::style;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::error::Error;

pub const SEPARATOR: &str = "---------------";

/// Print the banner that opens one probe path
pub fn display_section(title: &str) {
    println!("{}", style(format!("---[{}]------------", title)).bold().cyan());
}

pub fn display_separator() {
    println!("{}", style(SEPARATOR).dim());
}

pub fn display_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

/// Render headers as `name: value` lines, keeping repeated names
pub fn format_headers(headers: &HeaderMap) -> Vec<String> {
    headers
        .iter()
        .map(|(name, value)| format!("{}: {}", name, String::from_utf8_lossy(value.as_bytes())))
        .collect()
}

pub fn format_status_line(version: reqwest::Version, status: StatusCode) -> String {
    format!("{:?} {}", version, status)
}

pub fn display_status(version: reqwest::Version, status: StatusCode) {
    let line = format_status_line(version, status);
    if status.is_success() {
        println!("{}", style(line).bold().green());
    } else {
        println!("{}", style(line).bold().red());
    }
}

/// Print the generated text returned by the typed client
pub fn display_generated(text: &str) {
    println!("{}", style(text).bold().white());
}

/// Walk an error and its sources, outermost first
pub fn error_chain(err: &dyn Error) -> Vec<String> {
    let mut lines = vec![err.to_string()];
    let mut cause = err.source();
    while let Some(inner) = cause {
        lines.push(inner.to_string());
        cause = inner.source();
    }
    lines
}

/// Print an error to stderr, followed by each underlying cause
pub fn report_error(err: &dyn Error) {
    let chain = error_chain(err);
    eprintln!("{} {}", style("❌ Error:").bold().red(), chain[0]);
    for cause in &chain[1..] {
        eprintln!("{}", style("Error caused by:").yellow());
        eprintln!("    {}", cause);
    }
}
