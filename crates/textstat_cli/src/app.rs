use std::io::{Read, Write};

use anyhow::Context;
use textstat_engine::{render_json, render_text, resolve_input, Report};
use textstat_logging::{textstat_debug, textstat_info};

use crate::cli::Args;

/// Resolve the input, analyse it and write the report to `out`.
pub(crate) fn run<R: Read, W: Write>(args: Args, stdin: R, out: &mut W) -> anyhow::Result<()> {
    let top = args.top;
    let text = resolve_input(args.text, args.file, stdin)?;

    let report = Report::build(&text, top);
    textstat_info!(
        "Analysed {} chars, {} words, {} lines; {} top words",
        report.stats.chars,
        report.stats.words,
        report.stats.lines,
        report.top_words.len()
    );

    let rendered = if args.json {
        render_json(&report)?
    } else {
        render_text(&report)
    };
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write report")?;
    Ok(())
}

/// Run and translate the outcome to a process exit code.
///
/// Failures are written to `err` as `Error: <message>` and yield 1.
pub(crate) fn execute<R: Read, W: Write, E: Write>(
    args: Args,
    stdin: R,
    out: &mut W,
    err: &mut E,
) -> u8 {
    match run(args, stdin, out) {
        Ok(()) => 0,
        Err(error) => {
            textstat_debug!("Run failed: {error:#}");
            let _ = writeln!(err, "Error: {error}");
            1
        }
    }
}
