#![deny(unsafe_code)]

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io::{self, stdout};
use std::path::PathBuf;

use clap::ArgAction::{Set, SetTrue};
use clap::Parser;
use termcolor::StandardStream;
use tracing::{span, Level};
use tracing_subscriber::prelude::*;

mod decimal;
mod harness;
mod report;
mod testfile;

use harness::{run_file, Options, Summary};
use report::{get_colour_choice, Colour, JsonReporter, TextReporter};

const ABOUT: &str = "Checks radix and signed-representation conversions against a file of expected results";

/// Test runner for the radix and signed-representation conversions
#[derive(Parser, Debug)]
#[clap(version, about = ABOUT, long_about = None)]
struct Cli {
    /// File from which test cases are read.  Each line has the form
    /// `function_name input [input2] expected_output`.
    #[clap(action = Set, default_value = "a2_test.txt")]
    testfile: PathBuf,

    /// When to colour the PASS/FAIL verdicts.
    #[clap(action = Set, long, value_enum, default_value_t = Colour::Auto)]
    colour: Colour,

    /// Report results as JSON lines instead of text.
    #[clap(action = SetTrue, long)]
    json: bool,

    /// Treat characters which are not digits in the input radix as
    /// errors, instead of dropping them (octal) or reading them as
    /// zero (hexadecimal).
    #[clap(action = SetTrue, long)]
    strict: bool,
}

#[derive(Debug)]
pub(crate) enum Fail {
    /// The test file could not be opened.
    OpenFailed { path: PathBuf, error: String },
    ReadFailed(String),
    WriteFailed(String),
    /// We were not able to correctly initialise the runner.
    InitialisationFailure(String),
}

impl Display for Fail {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Fail::OpenFailed { path, error } => {
                write!(f, "Failed to open test file: {}: {error}", path.display())
            }
            Fail::ReadFailed(msg) => write!(f, "failed to read test file: {msg}"),
            Fail::WriteFailed(msg) => write!(f, "failed to write report: {msg}"),
            Fail::InitialisationFailure(msg) => f.write_str(msg.as_str()),
        }
    }
}

impl Error for Fail {}

impl From<io::Error> for Fail {
    fn from(e: io::Error) -> Fail {
        Fail::WriteFailed(e.to_string())
    }
}

fn run_tests() -> Result<Summary, Fail> {
    let cli = Cli::parse();

    // See
    // https://docs.rs/tracing-subscriber/0.2.19/tracing_subscriber/fmt/index.html#filtering-events-with-environment-variables
    // for instructions on how to select which trace messages get
    // printed.  Standard output carries the report, so diagnostics
    // go to standard error.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(io::stderr);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))
    {
        Err(e) => {
            return Err(Fail::InitialisationFailure(format!(
                "failed to initialise tracing filter (perhaps there is a problem with environment variables): {e}"
            )));
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let span = span!(Level::ERROR, "run", testfile=?cli.testfile, strict=cli.strict);
    let _enter = span.enter();
    let options = Options { strict: cli.strict };
    if cli.json {
        let mut reporter = JsonReporter::new(stdout().lock());
        run_file(&cli.testfile, &options, &mut reporter)
    } else {
        let stream = StandardStream::stdout(get_colour_choice(cli.colour));
        let mut reporter = TextReporter::new(stream.lock());
        run_file(&cli.testfile, &options, &mut reporter)
    }
}

fn main() {
    match run_tests() {
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Ok(summary) if summary.all_passed() => {
            std::process::exit(0);
        }
        Ok(_) => {
            std::process::exit(2);
        }
    }
}
