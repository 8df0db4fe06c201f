//! Output of test results, either as human-readable text or as JSON
//! lines.
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;
use termcolor::{self, ColorChoice, ColorSpec, WriteColor};

use convert::prelude::*;

use super::harness::{CaseReport, Summary};

/// Receives the results of a test run, in order.
pub trait Reporter {
    fn case(&mut self, report: &CaseReport) -> io::Result<()>;

    /// Called for a test case naming a function we don't know about.
    fn unknown_function(&mut self, number: usize, name: &str) -> io::Result<()>;

    /// Called once, after all the cases.
    fn summary(&mut self, summary: &Summary) -> io::Result<()>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Colour {
    /// Use colour when standard output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

pub fn get_colour_choice(colour: Colour) -> ColorChoice {
    match colour {
        Colour::Always => ColorChoice::Always,
        Colour::Never => ColorChoice::Never,
        Colour::Auto => {
            if atty::is(atty::Stream::Stdout) {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
    }
}

/// Writes one line per test case, plus a summary line, in the format
///
/// ```text
/// Test 1: oct_to_bin("725") -> Expected: "111010101", Got: "111010101" [PASS]
/// Summary: 1/1 tests passed
/// ```
///
/// The PASS or FAIL verdict is coloured when the stream supports it.
pub struct TextReporter<W: WriteColor> {
    stream: W,
}

impl<W: WriteColor> TextReporter<W> {
    pub fn new(stream: W) -> TextReporter<W> {
        TextReporter { stream }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.stream
    }

    fn write_verdict(&mut self, passed: bool) -> io::Result<()> {
        let (text, colour) = if passed {
            ("PASS", termcolor::Color::Green)
        } else {
            ("FAIL", termcolor::Color::Red)
        };
        let mut new_colour = ColorSpec::new();
        new_colour.set_fg(Some(colour)).set_bold(true);
        self.stream.write_all(b"[")?;
        self.stream.set_color(&new_colour)?;
        self.stream.write_all(text.as_bytes())?;
        self.stream.reset()?;
        self.stream.write_all(b"]\n")
    }
}

impl<W: WriteColor> Reporter for TextReporter<W> {
    fn case(&mut self, report: &CaseReport) -> io::Result<()> {
        // Digit sequences are quoted but integers are not.
        match report.function.operand() {
            Operand::Digits => write!(
                self.stream,
                "Test {}: {}(\"{}\")",
                report.number, report.function, report.input
            )?,
            Operand::Integer => write!(
                self.stream,
                "Test {}: {}({})",
                report.number, report.function, report.input
            )?,
        }
        write!(
            self.stream,
            " -> Expected: \"{}\", Got: \"{}\" ",
            report.expected, report.actual
        )?;
        self.write_verdict(report.passed)
    }

    fn unknown_function(&mut self, number: usize, name: &str) -> io::Result<()> {
        writeln!(self.stream, "Test {number}: Unknown function \"{name}\" (skipped)")
    }

    fn summary(&mut self, summary: &Summary) -> io::Result<()> {
        writeln!(
            self.stream,
            "Summary: {}/{} tests passed",
            summary.passed, summary.total
        )?;
        self.stream.flush()
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum JsonRecord<'a> {
    Case(&'a CaseReport),
    UnknownFunction { number: usize, function: &'a str },
    Summary(&'a Summary),
}

/// Writes each result as a single-line JSON object, distinguished by
/// its `kind` field.
pub struct JsonReporter<W: Write> {
    stream: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(stream: W) -> JsonReporter<W> {
        JsonReporter { stream }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.stream
    }

    fn emit(&mut self, record: &JsonRecord<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.stream, record)?;
        self.stream.write_all(b"\n")
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn case(&mut self, report: &CaseReport) -> io::Result<()> {
        self.emit(&JsonRecord::Case(report))
    }

    fn unknown_function(&mut self, number: usize, name: &str) -> io::Result<()> {
        self.emit(&JsonRecord::UnknownFunction {
            number,
            function: name,
        })
    }

    fn summary(&mut self, summary: &Summary) -> io::Result<()> {
        self.emit(&JsonRecord::Summary(summary))?;
        self.stream.flush()
    }
}
