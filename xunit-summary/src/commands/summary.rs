use std::io::Read;
use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches};
use log::{debug, info};

use crate::command::Command;
use crate::commands::{APP_NAME, RESULTS_FILE, STDIN_PATH, SUCCESS_STATUS_CODE, VERBOSE};
use crate::report::errors::Error;
use crate::report::loader::{DocumentLoader, XunitLoader};
use crate::report::renderer::render;
use crate::report::Result;
use crate::utils::writer::Writer;

pub struct Summary {
    loader: Box<dyn DocumentLoader>,
}

#[allow(clippy::new_without_default)]
impl Summary {
    pub fn new() -> Self {
        Summary::with_loader(Box::new(XunitLoader::new()))
    }

    pub fn with_loader(loader: Box<dyn DocumentLoader>) -> Self {
        Summary { loader }
    }
}

impl Command for Summary {
    fn name(&self) -> &'static str {
        APP_NAME
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(APP_NAME)
            .about(
                r#"
  Prints a colorized summary of an xUnit/JUnit XML results document: one line
  per test case with its status and duration, followed by passed, skipped and
  failed totals."#,
            )
            .arg(
                Arg::new(RESULTS_FILE)
                    .value_name("FILE")
                    .help("Path to the results document, or - to read it from stdin")
                    .action(ArgAction::Set)
                    .required(true),
            )
            .arg(
                Arg::new(VERBOSE.0)
                    .long(VERBOSE.0)
                    .short(VERBOSE.1)
                    .action(ArgAction::Count)
                    .help("Log progress to stderr, repeat for more detail"),
            )
            .arg_required_else_help(true)
    }

    fn execute(&self, args: &ArgMatches, writer: &mut Writer, input: &mut dyn Read) -> Result<i32> {
        let file = args.get_one::<String>(RESULTS_FILE).ok_or_else(|| {
            Error::IllegalArguments(String::from("a results document is required"))
        })?;

        let run = match file.as_str() {
            STDIN_PATH => self.loader.load_from(input)?,
            path => self.loader.load(Path::new(path))?,
        };
        info!("Rendering {} test cases from {}", run.cases.len(), file);

        // The layout always carries the ANSI sequences, terminal or not.
        colored::control::set_override(true);
        let summary = render(&run, writer)?;
        debug!(
            "{} passed, {} skipped, {} failed",
            summary.passed, summary.skipped, summary.failed
        );

        Ok(SUCCESS_STATUS_CODE)
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;
