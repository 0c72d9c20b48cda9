mod cli;

use cli::report::{self, Reporter};
use raktest::test_runner::{self, TestEnvironment};
use std::io::{self, IsTerminal};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse();

    init_logging(args.verbose);

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let environment = match TestEnvironment::new(&args.executable) {
        Ok(environment) => environment,
        Err(err) => {
            eprintln!("Error: {}. Please build project first.", err);
            process::exit(1);
        }
    };

    let test_files = match cli::file::find_test_files(&args.root) {
        Ok(test_files) => cli::file::filter_test_files(test_files, args.filter.as_deref()),
        Err(err) => {
            eprintln!("Error: Failed to search for test files: {}", err);
            process::exit(1);
        }
    };

    if test_files.is_empty() {
        report::report_no_test_files();
        process::exit(1);
    }

    let mut reporter = Reporter::new(args.output_format, args.quiet);
    reporter.report_start(test_files.len());

    let summary = test_runner::run_test_files(&test_files, &environment, |verdict| {
        reporter.report_verdict(verdict)
    });

    reporter.report_summary(&summary);

    if summary.is_success() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
