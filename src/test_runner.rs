use crate::test_case::{Expectation, TestCase};
use crate::test_file;
use crate::test_result::{RunSummary, TestResult, Verdict};
use crate::utils::string;
use regex::RegexBuilder;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use thiserror::Error;
use tracing::debug;

/// Everything a test case needs from the outside world
pub struct TestEnvironment {
    pub executable: PathBuf,
}

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("Executable file '{}' does not exist", .0.display())]
    ExecutableNotFound(PathBuf),
}

impl TestEnvironment {
    /// Resolves `executable` to an absolute path, so a bare name like
    /// `rak` runs the file in the current directory rather than a `PATH` match
    pub fn new<P>(executable: P) -> Result<TestEnvironment, EnvironmentError>
    where
        P: Into<PathBuf>,
    {
        let executable = executable.into();
        if !executable.is_file() {
            return Err(EnvironmentError::ExecutableNotFound(executable));
        }

        if executable.is_absolute() {
            return Ok(TestEnvironment { executable });
        }

        match env::current_dir() {
            Ok(current_dir) => {
                let resolved = current_dir.join(&executable);
                debug!("resolved executable to '{}'", resolved.display());
                Ok(TestEnvironment {
                    executable: resolved,
                })
            }
            Err(_) => Err(EnvironmentError::ExecutableNotFound(executable)),
        }
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to launch '{}': {source}", program.display())]
    FailedToSpawn { program: PathBuf, source: io::Error },
    #[error("failed to write standard input: {0}")]
    FailedToWriteStdin(io::Error),
    #[error("failed to wait for process: {0}")]
    FailedToWait(io::Error),
    #[error("{0} is not valid UTF-8")]
    FailedToDecodeUtf8(&'static str),
    #[error("process terminated without an exit code")]
    MissingExitCode,
    #[error("invalid regex: {0}")]
    InvalidPattern(#[from] regex::Error),
}

// RUN A SINGLE TEST CASE

pub fn run(test_case: &TestCase, environment: &TestEnvironment) -> Result<TestResult, RunError> {
    let mut cmd = Command::new(&environment.executable);
    cmd.args(test_case.arguments());
    cmd.stdin(Stdio::piped());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    debug!(command = ?cmd, "running test case '{}'", test_case.name);

    let mut child = cmd.spawn().map_err(|source| RunError::FailedToSpawn {
        program: environment.executable.clone(),
        source,
    })?;

    // Feed stdin from a separate thread while the pipes are drained below
    let mut stdin = child
        .stdin
        .take()
        .expect("Stdin should be configured to pipe");
    let source = test_case.source.clone().into_bytes();
    let writer = thread::spawn(move || -> io::Result<()> {
        match stdin.write_all(&source) {
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            result => result,
        }
        // `stdin` is dropped here, closing the pipe
    });

    let output = child.wait_with_output().map_err(RunError::FailedToWait)?;

    match writer.join() {
        Ok(result) => result.map_err(RunError::FailedToWriteStdin)?,
        Err(_) => {
            return Err(RunError::FailedToWriteStdin(io::Error::new(
                io::ErrorKind::Other,
                "writer thread panicked",
            )))
        }
    }

    let exit_code = exit_code(output.status)?;
    debug!(exit_code, "test case '{}' finished", test_case.name);

    let stdout = decode(output.stdout, "standard output")?;
    let stderr = decode(output.stderr, "standard error")?;
    let combined_output = stdout + &stderr;

    compare(test_case, exit_code, combined_output)
}

fn compare(
    test_case: &TestCase,
    exit_code: i32,
    output: String,
) -> Result<TestResult, RunError> {
    if exit_code != test_case.expected_exit_code {
        return Ok(TestResult::WrongExitCode {
            expected: test_case.expected_exit_code,
            got: exit_code,
            output,
        });
    }

    match &test_case.expected_output {
        Expectation::Exact(expected) => {
            if &output == expected {
                Ok(TestResult::Passed)
            } else {
                Ok(TestResult::OutputMismatch {
                    expected: expected.clone(),
                    output,
                })
            }
        }
        Expectation::Pattern { regex } => {
            let pattern = RegexBuilder::new(regex)
                .multi_line(true)
                .dot_matches_new_line(true)
                .build()?;

            if pattern.is_match(&output) {
                Ok(TestResult::Passed)
            } else {
                Ok(TestResult::PatternMismatch {
                    pattern: regex.clone(),
                    output,
                })
            }
        }
    }
}

fn decode(bytes: Vec<u8>, stream: &'static str) -> Result<String, RunError> {
    let text = String::from_utf8(bytes).map_err(|_err| RunError::FailedToDecodeUtf8(stream))?;
    Ok(string::normalize_newlines(&text))
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> Result<i32, RunError> {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| -signal))
        .ok_or(RunError::MissingExitCode)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> Result<i32, RunError> {
    status.code().ok_or(RunError::MissingExitCode)
}

// RUN MANY TEST FILES

/// Runs every test file in order and folds the verdicts into one summary
///
/// `on_verdict` is called for each verdict once the file it belongs to has
/// finished running.
pub fn run_test_files<P, F>(
    test_files: &[P],
    environment: &TestEnvironment,
    mut on_verdict: F,
) -> RunSummary
where
    P: AsRef<Path>,
    F: FnMut(&Verdict),
{
    test_files
        .iter()
        .map(|test_file| test_file::run_test_file(test_file.as_ref(), environment))
        .fold(RunSummary::default(), |summary, verdicts| {
            verdicts.iter().for_each(&mut on_verdict);
            summary.merge(verdicts.into_iter().collect())
        })
}
