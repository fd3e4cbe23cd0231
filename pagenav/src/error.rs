use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("Page {0} is out of range, pages start at 1")]
    PageOutOfRange(u32),
    #[error("Results per page must be greater than zero")]
    ZeroPageSize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigateError {
    #[error("Navigation button is missing its goto attribute")]
    MissingGoto,
    #[error("Invalid goto attribute {value:?}: {source}")]
    InvalidGoto {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Goto attribute points at page 0")]
    ZeroPage,
    /// Raised by the browser binding, holds the stringified JS value
    #[error("DOM error {0}")]
    Js(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to parse {key}={value}: {source}")]
    ParseInt {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}
