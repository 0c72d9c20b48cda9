use crate::utils::string;

pub fn print_version() {
    println!("TAP version 14")
}

pub fn print_plan(start: usize, end: usize) {
    println!("{}..{}", start, end)
}

pub fn print_ok(test_number: usize, message: &str) {
    println!("ok {} - {}", test_number, message)
}

pub fn print_not_ok(test_number: usize, message: &str, diagnostics: &str) {
    println!("not ok {} - {}", test_number, message);
    if !diagnostics.is_empty() {
        print!("{}", diagnostics_block(diagnostics))
    }
}

/// Format diagnostics as an indented YAML block
///
/// The explicit indentation indicator keeps lines that start with spaces valid.
pub fn diagnostics_block(diagnostics: &str) -> String {
    let mut body = String::from("---\nmessage: |2\n");
    body.push_str(&string::indent_lines(diagnostics, 2));
    if !diagnostics.ends_with('\n') {
        body.push('\n');
    }
    body.push_str("...\n");

    string::indent_lines(&body, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_block() {
        let expected = concat!(
            "  ---\n",
            "  message: |2\n",
            "    Wrong exit code\n",
            "    hello\n",
            "  ...\n",
        );

        assert_eq!(diagnostics_block("Wrong exit code\nhello"), expected);
    }

    #[test]
    fn test_diagnostics_block_with_trailing_newline() {
        let expected = concat!("  ---\n", "  message: |2\n", "    boom\n", "  ...\n");

        assert_eq!(diagnostics_block("boom\n"), expected);
    }

    #[test]
    fn test_diagnostics_block_with_indented_first_line() {
        let block = diagnostics_block("    indented output\nnext");
        let yaml = block
            .strip_prefix("  ---\n")
            .and_then(|rest| rest.strip_suffix("  ...\n"))
            .unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            value.get("message").and_then(serde_yaml::Value::as_str),
            Some("    indented output\nnext\n")
        );
    }
}
