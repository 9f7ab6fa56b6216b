use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use tlx_cli::cli::Args;
use tlx_cli::cli::commands::translate;
use tlx_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            // Arity errors exit with 1 rather than clap's 2
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    let options = translate::TranslateOptions::from(args);

    match translate::run_translate(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::report_fatal(&e);
            ExitCode::FAILURE
        }
    }
}
