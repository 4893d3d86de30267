use crate::command::Command;
use crate::commands;

pub mod writer;

pub fn get_summary_command() -> Box<dyn Command> {
    Box::new(commands::summary::Summary::new())
}
