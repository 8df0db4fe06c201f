//! Parsing of test-case files.
//!
//! Each line which is neither blank nor a comment (a `#` as its first
//! non-blank character) holds one test case made of
//! whitespace-separated tokens:
//!
//! ```text
//! function_name input [input2] expected_output
//! ```

/// A test case read from one line of a test file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub function: String,
    pub input: String,
    /// None of the current conversions takes a second input, so this
    /// is recorded but otherwise unused.
    pub input2: Option<String>,
    pub expected: String,
}

/// The classification of a single line of a test file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A blank line or a comment.
    Ignored,
    /// A line which has fewer than the three tokens needed for a test
    /// case.
    Incomplete,
    Case(TestCase),
}

const SEPARATORS: &[char] = &[' ', '\t', '\r', '\n'];

pub fn parse_line(line: &str) -> Line {
    let trimmed = line.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B');
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Line::Ignored;
    }
    let tokens: Vec<&str> = trimmed
        .split(SEPARATORS)
        .filter(|token| !token.is_empty())
        .collect();
    match tokens.as_slice() {
        [] => Line::Ignored,
        [function, input, expected] => Line::Case(TestCase {
            function: function.to_string(),
            input: input.to_string(),
            input2: None,
            expected: expected.to_string(),
        }),
        // Tokens after the expected output are ignored.
        [function, input, input2, expected, ..] => Line::Case(TestCase {
            function: function.to_string(),
            input: input.to_string(),
            input2: Some(input2.to_string()),
            expected: expected.to_string(),
        }),
        _ => Line::Incomplete,
    }
}
