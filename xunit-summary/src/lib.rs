// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub mod command;
pub mod commands;
pub mod report;
pub mod utils;

pub use crate::report::errors::Error;
pub use crate::report::{Mark, Outcome, TestCase, TestRun};
