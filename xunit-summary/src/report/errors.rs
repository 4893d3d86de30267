// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to open results file `{path}`: {source}")]
    FileAccessError {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Parser Error when parsing results document `{0}`")]
    ParseError(String),
    #[error("I/O error when writing {0}")]
    IoError(#[from] std::io::Error),
    #[error("{0}")]
    IllegalArguments(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::ParseError(err.to_string())
    }
}

impl From<AttrError> for Error {
    fn from(err: AttrError) -> Self {
        Error::ParseError(format!("malformed attribute, {err}"))
    }
}
