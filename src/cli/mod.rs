pub mod file;
pub mod report;

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

pub fn parse() -> Args {
    Args::parse()
}

/// Integration test runner for executables
#[derive(Parser)]
#[clap(bin_name = "raktest")]
pub struct Args {
    /// Path to executable to test
    #[arg(short, long)]
    pub executable: PathBuf,

    /// Print only summary and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Only run test files whose path contains this string
    pub filter: Option<String>,

    /// Directory to search for test files (recursively)
    #[arg(long, default_value = "tests")]
    pub root: PathBuf,

    /// Options: summary, tap
    #[arg(long, default_value = "summary")]
    pub output_format: OutputFormat,

    /// Print debug logging to standard error
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    Summary,
    Tap,
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        match format {
            "summary" => Ok(Self::Summary),
            "tap" => Ok(Self::Tap),
            _ => Err("Invalid output format"),
        }
    }
}
