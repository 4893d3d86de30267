// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use colored::{Color, Colorize};
use lazy_static::lazy_static;
use log::debug;

use crate::report::{Outcome, Result, TestCase, TestRun};

pub(crate) const SEPARATOR: &str = "------------------------------";

pub(crate) const CHECKMARK: &str = "\u{2714}";
pub(crate) const ELLIPSIS: &str = "\u{2026}";
pub(crate) const EXCLAMATION: &str = "\u{2757}";
pub(crate) const CANCEL: &str = "\u{2717}";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Color,
    pub glyph: &'static str,
}

lazy_static! {
    static ref STYLES: HashMap<Outcome, Style> = {
        let mut styles = HashMap::with_capacity(4);
        styles.insert(Outcome::Passed, Style { color: Color::Green, glyph: CHECKMARK });
        styles.insert(Outcome::Skipped, Style { color: Color::Yellow, glyph: ELLIPSIS });
        styles.insert(Outcome::Errored, Style { color: Color::Red, glyph: EXCLAMATION });
        styles.insert(Outcome::Failed, Style { color: Color::Red, glyph: CANCEL });
        styles
    };
}

pub fn style(outcome: Outcome) -> Style {
    STYLES[&outcome]
}

/// Formats the sub-second part of `time` with two decimals. Whole seconds are
/// dropped, so 1.25s renders as `0.25`.
pub fn fractional_seconds(time: Duration) -> String {
    format!("{:.2}", f64::from(time.subsec_micros()) / 1_000_000.0)
}

pub fn format_line(case: &TestCase, style: Style) -> String {
    format!(
        "    {} {}.{}  {}s",
        style.glyph.color(style.color),
        case.short_name(),
        case.method_name,
        fractional_seconds(case.time)
    )
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Errored | Outcome::Failed => self.failed += 1,
        }
    }
}

fn write_footer(writer: &mut dyn Write, summary: &Summary, time: Duration) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{SEPARATOR}")?;
    writeln!(writer)?;
    writeln!(
        writer,
        "  {:>3} test cases in {}s",
        summary.total,
        fractional_seconds(time)
    )?;
    writeln!(writer, "{}", format!("  {:>3} passed", summary.passed).as_str().green())?;
    writeln!(writer, "{}", format!("  {:>3} skipped", summary.skipped).as_str().yellow())?;
    writeln!(writer, "{}", format!("  {:>3} failed", summary.failed).as_str().red())?;
    writeln!(writer)?;
    writeln!(writer, "{SEPARATOR}")?;
    Ok(())
}

/// Writes one line per case in document order followed by the totals footer.
pub fn render(run: &TestRun, writer: &mut dyn Write) -> Result<Summary> {
    writeln!(writer, "{SEPARATOR}")?;
    writeln!(writer)?;

    let summary = run.cases.iter().try_fold(
        Summary::default(),
        |mut summary, case| -> Result<Summary> {
            let outcome = case.outcome();
            if let Some(detail) = &case.detail {
                debug!("{}.{} {outcome}: {detail}", case.class_name, case.method_name);
            }
            writeln!(writer, "{}", format_line(case, style(outcome)))?;
            summary.record(outcome);
            Ok(summary)
        },
    )?;

    write_footer(writer, &summary, run.time)?;
    Ok(summary)
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod renderer_tests;
