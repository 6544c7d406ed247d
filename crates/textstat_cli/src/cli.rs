use std::path::PathBuf;

use clap::Parser;

/// Compute simple text statistics and top words.
///
/// Reads inline text, a file, or standard input when neither is given.
#[derive(Debug, Parser)]
#[command(name = "textstat-mini", version)]
pub(crate) struct Args {
    /// Inline text to analyze
    #[arg(long, allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Path to a text file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Number of top words to display
    #[arg(
        long,
        default_value = "5",
        value_parser = parse_top,
        allow_negative_numbers = true
    )]
    pub top: usize,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse `--top` as an integer of any size.
///
/// Zero and negative values mean no words; values past `usize::MAX` saturate.
fn parse_top(value: &str) -> Result<usize, String> {
    let trimmed = value.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("'{value}' is not an integer"));
    }
    if negative {
        return Ok(0);
    }
    Ok(digits.parse::<usize>().unwrap_or(usize::MAX))
}

/// Print a parse failure and return the exit code for it.
///
/// `--help` and `--version` go to stdout with success; real argument errors
/// are reported as `Error: <message>` and exit with 2.
pub(crate) fn report_parse_error(err: &clap::Error) -> u8 {
    if !err.use_stderr() {
        let _ = err.print();
        return 0;
    }
    eprintln!("Error: {}", parse_error_message(err));
    2
}

fn parse_error_message(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    rendered
        .trim()
        .strip_prefix("error: ")
        .unwrap_or(rendered.trim())
        .to_string()
}
