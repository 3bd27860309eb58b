//! The error module defines the crate-wide error enum and the `Result` alias
//! everything in here returns.

use thiserror::Error;

/// An error type for when decoding or resolving currencies goes awry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A builder (config, etc) was missing a required field
    #[error("error building object {0}")]
    BuilderFailed(String),
    /// The currency id doesn't look like `<chain>-<network>:<address>`
    #[error("malformed currency id: {0}")]
    MalformedCurrencyID(String),
    /// The color list wasn't exactly two parsable hex colors
    #[error("invalid/missing color values for {0}")]
    InvalidColors(String),
    /// A single hex color failed to parse
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),
    /// The catalog document itself could not be parsed
    #[error("malformed currency list: {0}")]
    MalformedDocument(String),
    /// One record in the catalog failed to decode
    #[error("malformed currency record at index {index}: {reason}")]
    MalformedRecord {
        index: usize,
        reason: String,
    },
    /// A record's fields failed to deserialize
    #[error("failed to decode currency metadata: {0}")]
    DecodeFailed(String),
    /// The catalog already holds a record with this id
    #[error("duplicate currency id: {0}")]
    DuplicateCurrency(String),
    /// The native currency and its metadata disagree on identity
    #[error("currency id mismatch: core {core} != metadata {metadata}")]
    IdentityMismatch {
        core: String,
        metadata: String,
    },
    /// No metadata record exists for a native currency
    #[error("no metadata for currency {0}")]
    MissingMetadata(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::DecodeFailed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
