use crate::test_case::{self, TestCase, DEFAULT_NAME};
use crate::test_result::Verdict;
use crate::test_runner::{self, TestEnvironment};
use crate::utils::file;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

// READ TEST FILE

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0}")]
    Read(#[from] io::Error),
    #[error("{0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("expected a list of test cases at the top level")]
    NotASequence,
    #[error("test case at index {index} is not a mapping")]
    EntryNotAMapping { index: usize },
}

/// Reads a test file into its raw entries, in document order
pub fn load_entries(path: &Path) -> Result<Vec<Mapping>, LoadError> {
    let content = fs::read_to_string(path)?;
    let document: Value = serde_yaml::from_str(&content)?;

    let entries = match document {
        Value::Null => {
            warn!("test file '{}' is empty", path.display());
            vec![]
        }
        Value::Sequence(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Mapping(entry) => Ok(entry),
                _ => Err(LoadError::EntryNotAMapping { index }),
            })
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err(LoadError::NotASequence),
    };

    debug!(
        "loaded {} test cases from '{}'",
        entries.len(),
        path.display()
    );

    Ok(entries)
}

// RUN TEST FILE

/// Runs all test cases of a test file, producing one verdict per entry
///
/// A file that cannot be loaded produces a single failed verdict named
/// after the file itself.
pub fn run_test_file(path: &Path, environment: &TestEnvironment) -> Vec<Verdict> {
    let display_path = file::display_path(path);

    match load_entries(path) {
        Ok(entries) => entries
            .into_iter()
            .map(|entry| run_entry(&display_path, entry, environment))
            .collect(),
        Err(err) => vec![Verdict::fail(
            display_path.clone(),
            format!("Error reading {}: {}", display_path, err),
        )],
    }
}

fn run_entry(display_path: &str, entry: Mapping, environment: &TestEnvironment) -> Verdict {
    let name = entry
        .get("test")
        .and_then(test_case::name_from_value)
        .unwrap_or_else(|| String::from(DEFAULT_NAME));
    let test_id = format!("{} -> {}", display_path, name);

    let test_case = match serde_yaml::from_value::<TestCase>(Value::Mapping(entry)) {
        Ok(test_case) => test_case,
        Err(err) => return Verdict::fail(test_id, format!("Invalid test case: {}", err)),
    };

    match test_runner::run(&test_case, environment) {
        Ok(result) => Verdict::from_result(test_id, &result),
        Err(err) => Verdict::fail(test_id, format!("Failed to run test: {}", err)),
    }
}

// TESTS
