use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// A single test case read from one entry of a test file
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    #[serde(rename = "test", default = "default_name", deserialize_with = "deserialize_name")]
    pub name: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub args: String,
    #[serde(rename = "out", default)]
    pub expected_output: Expectation,
    #[serde(rename = "exit_code", default)]
    pub expected_exit_code: i32,
}

/// What the combined output of the target must look like
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum Expectation {
    Exact(String),
    Pattern { regex: String },
}

impl Default for Expectation {
    fn default() -> Self {
        Self::Exact(String::new())
    }
}

pub const DEFAULT_NAME: &str = "No description";

fn default_name() -> String {
    String::from(DEFAULT_NAME)
}

/// Render a scalar test name as text, e.g. `test: 42` is named "42"
pub fn name_from_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(default_name()),
        Value::Bool(value) => Some(value.to_string()),
        Value::Number(value) => Some(value.to_string()),
        Value::String(value) => Some(value.clone()),
        _ => None,
    }
}

fn deserialize_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    name_from_value(&value).ok_or_else(|| D::Error::custom("expected a scalar test name"))
}

impl TestCase {
    pub fn arguments(&self) -> impl Iterator<Item = &str> {
        self.args.split_whitespace()
    }
}

// TESTS

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn parse(yaml: &str) -> TestCase {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_defaults() {
        let test_case = parse("{}");

        assert_eq!(test_case.name, "No description");
        assert_eq!(test_case.source, "");
        assert_eq!(test_case.args, "");
        assert_eq!(test_case.expected_output, Expectation::Exact(String::new()));
        assert_eq!(test_case.expected_exit_code, 0);
    }

    #[test]
    fn test_exact_expectation() {
        let test_case = parse(indoc! {r#"
            test: print
            source: print("hi")
            out: "hi\n"
        "#});

        assert_eq!(test_case.name, "print");
        assert_eq!(test_case.source, "print(\"hi\")");
        assert_eq!(
            test_case.expected_output,
            Expectation::Exact(String::from("hi\n"))
        );
    }

    #[test]
    fn test_pattern_expectation() {
        let test_case = parse(indoc! {r#"
            test: error
            exit_code: 1
            out: { regex: "^error:.*$" }
        "#});

        assert_eq!(test_case.expected_exit_code, 1);
        assert_eq!(
            test_case.expected_output,
            Expectation::Pattern {
                regex: String::from("^error:.*$")
            }
        );
    }

    #[test]
    fn test_block_scalar_output() {
        let test_case = parse(indoc! {"
            out: |
              line 1
              line 2
        "});

        assert_eq!(
            test_case.expected_output,
            Expectation::Exact(String::from("line 1\nline 2\n"))
        );
    }

    #[test]
    fn test_arguments_split_on_whitespace() {
        let test_case = parse("args: \"  -c   --dump\tfoo \"");

        assert_eq!(test_case.arguments().collect::<Vec<_>>(), ["-c", "--dump", "foo"]);
    }

    #[test]
    fn test_empty_arguments() {
        let test_case = parse("args: \"\"");

        assert_eq!(test_case.arguments().count(), 0);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let test_case = parse("{ test: t, skip: true }");

        assert_eq!(test_case.name, "t");
    }

    #[test]
    fn test_scalar_names() {
        assert_eq!(parse("test: 42").name, "42");
        assert_eq!(parse("test: 1.5").name, "1.5");
        assert_eq!(parse("test: true").name, "true");
        assert_eq!(parse("test: ~").name, "No description");
    }

    #[test]
    fn test_name_must_be_scalar() {
        let result = serde_yaml::from_str::<TestCase>("test: [a, b]");

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_output_shape() {
        let result = serde_yaml::from_str::<TestCase>("out: 42");

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_exit_code() {
        let result = serde_yaml::from_str::<TestCase>("exit_code: not a number");

        assert!(result.is_err());
    }
}
