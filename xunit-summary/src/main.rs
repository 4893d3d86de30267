use std::process::exit;

use log::debug;
use simple_logger::SimpleLogger;

use xunit_summary::commands::{log_level, APP_VERSION, INTERNAL_FAILURE_STATUS_CODE, VERBOSE};
use xunit_summary::utils;
use xunit_summary::utils::writer::{WriteBuffer::Stderr, WriteBuffer::Stdout, Writer};

fn main() {
    let command = utils::get_summary_command();
    let app = command.command().version(APP_VERSION).get_matches();

    if let Err(e) = SimpleLogger::new()
        .with_level(log_level(app.get_count(VERBOSE.0)))
        .init()
    {
        eprintln!("Unable to initialise logging {e}");
    }
    debug!("Parameters are {:#?}", app);

    let mut output_writer = Writer::new(Stdout(std::io::stdout()), Stderr(std::io::stderr()));

    match command.execute(
        &app,
        &mut output_writer,
        &mut std::io::stdin(),
    ) {
        Err(e) => {
            output_writer
                .write_err(format!("Error occurred {e}"))
                .expect("failed to write to stderr");

            exit(INTERNAL_FAILURE_STATUS_CODE);
        }
        Ok(code) => exit(code),
    }
}
