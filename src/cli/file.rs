use itertools::Itertools;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

const TEST_FILE_PATTERN: &str = "**/*.yaml";

#[derive(Debug, Error)]
pub enum LocateFileError {
    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),
    #[error("{0}")]
    InvalidEntry(#[from] glob::GlobError),
}

/// Find test files below `root` (recursively), sorted by path
pub fn find_test_files(root: &Path) -> Result<Vec<PathBuf>, LocateFileError> {
    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    let pattern = Path::new(&escaped_root).join(TEST_FILE_PATTERN);

    let mut output = vec![];
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry?;
        if path.is_file() {
            output.push(path);
        }
    }

    info!("found {} test files in '{}'", output.len(), root.display());

    Ok(output.into_iter().sorted().collect())
}

/// Keep only test files whose path contains `filter`
pub fn filter_test_files(test_files: Vec<PathBuf>, filter: Option<&str>) -> Vec<PathBuf> {
    match filter {
        Some(filter) => test_files
            .into_iter()
            .filter(|path| path.to_string_lossy().contains(filter))
            .collect(),
        None => test_files,
    }
}
