//! Runs the cases of a test file against the conversions and keeps
//! count of the results.
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{event, Level};

use convert::prelude::*;

use super::decimal::parse_leading_i32;
use super::report::Reporter;
use super::testfile::{parse_line, Line, TestCase};
use super::Fail;

#[derive(Debug, Default, Clone, Copy)]
pub struct Options {
    /// Reject digit sequences containing characters which are not
    /// digits in the input radix, instead of converting them
    /// permissively.
    pub strict: bool,
}

/// The outcome of running a single test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    /// Test cases are numbered from 1.  Unknown functions use up a
    /// number too.
    pub number: usize,
    pub function: Operation,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input2: Option<String>,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
    /// Set only when a strict conversion rejected the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<InvalidDigit>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub total: usize,
    /// Cases naming an unknown function.  These are not included in
    /// `total`.
    pub skipped: usize,
}

impl Summary {
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

fn evaluate(op: Operation, input: &str, options: &Options) -> (String, Option<InvalidDigit>) {
    match op {
        Operation::Mapping(mapping) if options.strict => match mapping.apply_strict(input) {
            Ok(actual) => (actual, None),
            Err(e) => (format!("error: {e}"), Some(e)),
        },
        Operation::Mapping(mapping) => (mapping.apply(input), None),
        Operation::Encoding(encoding) => (encoding.encode(parse_leading_i32(input)), None),
    }
}

fn run_case(number: usize, op: Operation, case: TestCase, options: &Options) -> CaseReport {
    let (actual, error) = evaluate(op, &case.input, options);
    let passed = actual == case.expected;
    if !passed {
        event!(
            Level::DEBUG,
            "case {number} failed: {op}({}) gave {actual:?}, expected {:?}",
            case.input,
            case.expected
        );
    }
    CaseReport {
        number,
        function: op,
        input: case.input,
        input2: case.input2,
        expected: case.expected,
        actual,
        passed,
        error,
    }
}

/// Reads test cases from `input`, runs each of them and passes the
/// results to `reporter`.  Finally the summary is reported too, and
/// returned.
pub fn run_cases<R: BufRead, P: Reporter>(
    mut input: R,
    options: &Options,
    reporter: &mut P,
) -> Result<Summary, Fail> {
    let mut summary = Summary::default();
    let mut number: usize = 0;
    let mut buf: Vec<u8> = Vec::new();
    let mut line_number: usize = 0;
    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => (),
            Err(e) => {
                return Err(Fail::ReadFailed(e.to_string()));
            }
        }
        line_number += 1;
        let line = String::from_utf8_lossy(&buf);
        let case = match parse_line(&line) {
            Line::Ignored => continue,
            Line::Incomplete => {
                event!(
                    Level::DEBUG,
                    "ignoring line {line_number}, which has too few fields: {:?}",
                    line.trim_end()
                );
                continue;
            }
            Line::Case(case) => case,
        };
        number += 1;
        match case.function.parse::<Operation>() {
            Ok(op) => {
                let report = run_case(number, op, case, options);
                summary.total += 1;
                if report.passed {
                    summary.passed += 1;
                }
                reporter.case(&report).map_err(Fail::from)?;
            }
            Err(e) => {
                event!(Level::WARN, "line {line_number}: {e}");
                summary.skipped += 1;
                reporter
                    .unknown_function(number, &case.function)
                    .map_err(Fail::from)?;
            }
        }
    }
    reporter.summary(&summary).map_err(Fail::from)?;
    event!(
        Level::INFO,
        "{} of {} cases passed ({} skipped)",
        summary.passed,
        summary.total,
        summary.skipped
    );
    Ok(summary)
}

/// Like [`run_cases`], reading the cases from the file at `path`.
pub fn run_file<P: Reporter>(
    path: &Path,
    options: &Options,
    reporter: &mut P,
) -> Result<Summary, Fail> {
    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(|e| Fail::OpenFailed {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
    event!(Level::INFO, "reading test cases from {}", path.display());
    run_cases(BufReader::new(file), options, reporter)
}
