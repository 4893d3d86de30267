// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub mod errors;
pub mod loader;
pub mod renderer;

use std::fmt::Formatter;
use std::time::Duration;

use enumflags2::{bitflags, BitFlags};

use errors::Error;

pub type Result<R> = std::result::Result<R, Error>;

/// Status signals a results document attached to a single test case.
///
/// A case normally carries exactly one mark, but nothing in the document
/// format prevents several, so classification goes through
/// [`TestCase::outcome`] which applies a fixed precedence.
#[bitflags]
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mark {
    Success = 0b0001,
    Skipped = 0b0010,
    Errored = 0b0100,
    Failed = 0b1000,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    Passed,
    Skipped,
    Errored,
    Failed,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Passed => f.write_str("passed")?,
            Outcome::Skipped => f.write_str("skipped")?,
            Outcome::Errored => f.write_str("errored")?,
            Outcome::Failed => f.write_str("failed")?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub class_name: String,
    pub method_name: String,
    pub time: Duration,
    pub marks: BitFlags<Mark>,
    pub detail: Option<String>,
}

impl TestCase {
    pub fn new(class_name: &str, method_name: &str, time: Duration, marks: BitFlags<Mark>) -> Self {
        TestCase {
            class_name: class_name.to_string(),
            method_name: method_name.to_string(),
            time,
            marks,
            detail: None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        if self.marks.contains(Mark::Success) {
            Outcome::Passed
        } else if self.marks.contains(Mark::Skipped) {
            Outcome::Skipped
        } else if self.marks.contains(Mark::Errored) {
            Outcome::Errored
        } else {
            Outcome::Failed
        }
    }

    /// Trailing segment of the dotted class name, `pkg.sub.Suite` -> `Suite`.
    pub fn short_name(&self) -> &str {
        short_name(&self.class_name)
    }
}

pub(crate) fn short_name(qualified: &str) -> &str {
    match qualified.rsplit_once('.') {
        Some((_, last)) => last,
        None => qualified,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestRun {
    pub cases: Vec<TestCase>,
    pub time: Duration,
}
