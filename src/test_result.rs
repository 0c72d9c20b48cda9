const RULER: &str = "**********************************";

/// Outcome of running a test case to completion
#[derive(Debug, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    WrongExitCode {
        expected: i32,
        got: i32,
        output: String,
    },
    OutputMismatch {
        expected: String,
        output: String,
    },
    PatternMismatch {
        pattern: String,
        output: String,
    },
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn message(&self) -> String {
        match self {
            Self::Passed => String::new(),
            Self::WrongExitCode {
                expected,
                got,
                output,
            } => format!(
                "Wrong exit code: expected {}, got {}.\n{}\n{}",
                expected, got, output, RULER
            ),
            Self::OutputMismatch { expected, output } => format!(
                "** Expected: *********************\n{}\n** Got: **************************\n{}\n{}",
                expected, output, RULER
            ),
            Self::PatternMismatch { pattern, output } => format!(
                "** Expected pattern: *************\n{}\n** Got: **************************\n{}\n{}",
                pattern, output, RULER
            ),
        }
    }
}

/// Pass/fail verdict for one test case, or for a test file that failed to load
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    pub test_id: String,
    pub message: String,
}

impl Verdict {
    pub fn pass(test_id: String) -> Verdict {
        Verdict {
            passed: true,
            test_id,
            message: String::new(),
        }
    }

    pub fn fail(test_id: String, message: String) -> Verdict {
        Verdict {
            passed: false,
            test_id,
            message,
        }
    }

    pub fn from_result(test_id: String, result: &TestResult) -> Verdict {
        if result.is_success() {
            Self::pass(test_id)
        } else {
            Self::fail(test_id, result.message())
        }
    }
}

/// Running totals across all test files
#[derive(Default, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failures: Vec<(String, String)>,
}

impl RunSummary {
    pub fn record(mut self, verdict: Verdict) -> RunSummary {
        self.total += 1;
        if verdict.passed {
            self.passed += 1;
        } else {
            self.failures.push((verdict.test_id, verdict.message));
        }
        self
    }

    pub fn merge(mut self, other: RunSummary) -> RunSummary {
        self.total += other.total;
        self.passed += other.passed;
        self.failures.extend(other.failures);
        self
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl FromIterator<Verdict> for RunSummary {
    fn from_iter<I: IntoIterator<Item = Verdict>>(verdicts: I) -> Self {
        verdicts.into_iter().fold(RunSummary::default(), RunSummary::record)
    }
}

// TESTS
