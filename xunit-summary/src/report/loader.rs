// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::Duration;

use enumflags2::BitFlags;
use log::{debug, trace};
use quick_xml::events::{BytesStart, Event};

use crate::report::errors::Error;
use crate::report::{Mark, Result, TestCase, TestRun};

const TEST_SUITES: &[u8] = b"testsuites";
const TEST_SUITE: &[u8] = b"testsuite";
const TEST_CASE: &[u8] = b"testcase";
const FAILURE: &[u8] = b"failure";
const ERROR: &[u8] = b"error";
const SKIPPED: &[u8] = b"skipped";

/// Source of a [`TestRun`]. The renderer only ever sees the run, so tests can
/// substitute a loader that never touches XML.
pub trait DocumentLoader {
    fn load(&self, path: &Path) -> Result<TestRun>;
    fn load_from(&self, input: &mut dyn Read) -> Result<TestRun>;
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct XunitLoader {}

impl XunitLoader {
    pub fn new() -> Self {
        XunitLoader {}
    }
}

impl DocumentLoader for XunitLoader {
    fn load(&self, path: &Path) -> Result<TestRun> {
        let file = File::open(path).map_err(|source| Error::FileAccessError {
            path: path.display().to_string(),
            source,
        })?;
        debug!("Loading results document {}", path.display());
        parse_document(BufReader::new(file))
    }

    fn load_from(&self, input: &mut dyn Read) -> Result<TestRun> {
        debug!("Loading results document from stdin");
        parse_document(BufReader::new(input))
    }
}

#[derive(Debug)]
struct CaseBuilder {
    case: TestCase,
    depth: usize,
}

impl CaseBuilder {
    fn new(tag: &BytesStart<'_>, depth: usize, suite_name: Option<&str>) -> Result<Self> {
        let method_name = match attribute(tag, "name")? {
            Some(name) => name,
            None => {
                return Err(Error::ParseError(String::from(
                    "testcase element without a name attribute",
                )))
            }
        };
        let class_name = attribute(tag, "classname")?
            .filter(|name| !name.is_empty())
            .or_else(|| suite_name.map(String::from))
            .unwrap_or_default();
        let time = match attribute(tag, "time")? {
            Some(time) => parse_seconds(&time, &method_name)?,
            None => Duration::ZERO,
        };

        Ok(CaseBuilder {
            case: TestCase {
                class_name,
                method_name,
                time,
                marks: BitFlags::empty(),
                detail: None,
            },
            depth,
        })
    }

    fn mark(&mut self, mark: Mark, tag: &BytesStart<'_>) -> Result<()> {
        if self.case.detail.is_none() {
            self.case.detail = attribute(tag, "message")?;
        }
        self.case.marks.insert(mark);
        Ok(())
    }

    fn finish(mut self) -> TestCase {
        if self.case.marks.is_empty() {
            self.case.marks = BitFlags::from(Mark::Success);
        }
        trace!(
            "{}.{} marked {:?}",
            self.case.class_name,
            self.case.method_name,
            self.case.marks
        );
        self.case
    }
}

fn status_mark(name: &[u8]) -> Option<Mark> {
    match name {
        FAILURE => Some(Mark::Failed),
        ERROR => Some(Mark::Errored),
        SKIPPED => Some(Mark::Skipped),
        _ => None,
    }
}

fn attribute(tag: &BytesStart<'_>, key: &str) -> Result<Option<String>> {
    match tag.try_get_attribute(key)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

/// Converts an xUnit `time` attribute (seconds) into a duration rounded to
/// the nearest microsecond.
pub(crate) fn parse_seconds(value: &str, owner: &str) -> Result<Duration> {
    let seconds = value.trim().parse::<f64>().map_err(|_| {
        Error::ParseError(format!("invalid time `{value}` for `{owner}`"))
    })?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(Error::ParseError(format!(
            "invalid time `{value}` for `{owner}`"
        )));
    }
    Ok(Duration::from_micros((seconds * 1_000_000.0).round() as u64))
}

#[derive(Debug, Default)]
struct DocumentState {
    depth: usize,
    seen_root: bool,
    root_time: Option<Duration>,
    current: Option<CaseBuilder>,
    cases: Vec<TestCase>,
    // (depth, name) of each open <testsuite>, innermost last
    suites: Vec<(usize, String)>,
}

impl DocumentState {
    fn open(&mut self, tag: &BytesStart<'_>, empty: bool) -> Result<()> {
        let name = tag.name();
        if name.as_ref() == TEST_SUITE && !empty {
            let suite_name = attribute(tag, "name")?.unwrap_or_default();
            self.suites.push((self.depth, suite_name));
        }

        if !self.seen_root {
            if name.as_ref() != TEST_SUITES && name.as_ref() != TEST_SUITE {
                return Err(Error::ParseError(format!(
                    "unexpected root element `{}`, expected testsuites or testsuite",
                    String::from_utf8_lossy(name.as_ref())
                )));
            }
            self.seen_root = true;
            if let Some(time) = attribute(tag, "time")? {
                self.root_time = Some(parse_seconds(&time, "test run")?);
            }
        } else if self.depth == 0 {
            return Err(Error::ParseError(String::from(
                "content found after the root element",
            )));
        } else if name.as_ref() == TEST_CASE && self.current.is_none() {
            let suite_name = self
                .suites
                .iter()
                .rev()
                .map(|(_, name)| name.as_str())
                .find(|name| !name.is_empty());
            let builder = CaseBuilder::new(tag, self.depth, suite_name)?;
            if empty {
                self.cases.push(builder.finish());
            } else {
                self.current = Some(builder);
            }
        } else if let Some(builder) = self.current.as_mut() {
            if self.depth == builder.depth + 1 {
                if let Some(mark) = status_mark(name.as_ref()) {
                    builder.mark(mark, tag)?;
                }
            }
        }

        if !empty {
            self.depth += 1;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.depth = self.depth.checked_sub(1).ok_or_else(|| {
            Error::ParseError(String::from("closing tag without a matching start"))
        })?;
        if self.suites.last().map_or(false, |(depth, _)| *depth == self.depth) {
            self.suites.pop();
        }
        let closes_case = self
            .current
            .as_ref()
            .map_or(false, |builder| builder.depth == self.depth);
        if closes_case {
            if let Some(builder) = self.current.take() {
                self.cases.push(builder.finish());
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<TestRun> {
        if !self.seen_root {
            return Err(Error::ParseError(String::from(
                "document does not contain a root element",
            )));
        }
        if self.depth != 0 {
            return Err(Error::ParseError(String::from(
                "unexpected end of document, unclosed elements remain",
            )));
        }

        let cases = self.cases;
        let time = self
            .root_time
            .unwrap_or_else(|| cases.iter().map(|case| case.time).sum());
        debug!("Loaded {} test cases", cases.len());

        Ok(TestRun { cases, time })
    }
}

/// Reads an xUnit document rooted at `<testsuites>` or `<testsuite>`. Every
/// `<testcase>` below the root is collected in document order, however deeply
/// the suites are nested.
pub fn parse_document<R: BufRead>(input: R) -> Result<TestRun> {
    let mut reader = quick_xml::Reader::from_reader(input);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut state = DocumentState::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(tag) => state.open(&tag, false)?,
            Event::Empty(tag) => state.open(&tag, true)?,
            Event::End(_) => state.close()?,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    state.finish()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
