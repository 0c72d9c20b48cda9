use crate::cli::OutputFormat;
use colored::Colorize;
use raktest::formats::tap;
use raktest::test_result::{RunSummary, Verdict};

pub struct Reporter {
    format: OutputFormat,
    quiet: bool,
    tests_reported: usize,
}

impl Reporter {
    pub fn new(format: OutputFormat, quiet: bool) -> Reporter {
        Reporter {
            format,
            quiet,
            tests_reported: 0,
        }
    }

    pub fn report_start(&self, number_of_files: usize) {
        match self.format {
            OutputFormat::Summary => {
                if !self.quiet {
                    println!("Running {} testfiles:", number_of_files)
                }
            }
            OutputFormat::Tap => tap::print_version(),
        }
    }

    pub fn report_verdict(&mut self, verdict: &Verdict) {
        self.tests_reported += 1;

        match self.format {
            OutputFormat::Summary => {
                if !self.quiet {
                    summary_print_verdict(verdict)
                }
            }
            OutputFormat::Tap => {
                if verdict.passed {
                    tap::print_ok(self.tests_reported, &verdict.test_id)
                } else {
                    tap::print_not_ok(self.tests_reported, &verdict.test_id, &verdict.message)
                }
            }
        }
    }

    pub fn report_summary(&self, summary: &RunSummary) {
        match self.format {
            OutputFormat::Summary => summary_print_summary(summary),
            OutputFormat::Tap => tap::print_plan(1, summary.total),
        }
    }
}

pub fn report_no_test_files() {
    println!(" :-|   No testfiles found.")
}

// SUMMARY HELPERS

fn summary_print_verdict(verdict: &Verdict) {
    if verdict.passed {
        println!("{} {}", "OK".green(), verdict.test_id)
    } else {
        println!("{} {}", ":(".red(), verdict.test_id)
    }
}

fn summary_print_summary(summary: &RunSummary) {
    if summary.is_success() {
        println!(":D   All {} tests OK.", summary.total);
        return;
    }

    println!();
    println!("********************* Failed tests *********************");
    for (test_id, message) in &summary.failures {
        println!("   {}", test_id);
        println!("{}", message);
    }
    println!(
        ">:(   {} of {} tests failed.",
        summary.failed(),
        summary.total
    );
}
