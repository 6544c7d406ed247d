//! `textstat-mini`: character, word and line counts plus top words.
mod app;
mod cli;
mod logging;

use std::io;
use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(err) => return ExitCode::from(cli::report_parse_error(&err)),
    };

    logging::initialize(args.verbose);

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    ExitCode::from(app::execute(args, stdin, &mut stdout, &mut stderr))
}
