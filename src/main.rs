use std::process::ExitCode;

use ad_i18n::cli::{Arguments, ExitStatus};
use clap::Parser;

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match ad_i18n::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Warnings only by default; `RUST_LOG` overrides, `--verbose` adds debug
/// output for this crate.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,ad_i18n=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
