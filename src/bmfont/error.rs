use std::error::Error as StdError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("truncated input: {what} needs {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        what: &'static str,
        needed: usize,
        remaining: usize,
    },
    #[error("malformed {block} block: {reason}")]
    MalformedBlock { block: &'static str, reason: String },
    #[error("failed to decode page image '{file_name}': {source}")]
    ImageDecode {
        file_name: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
    #[error("texture creation failed: {0}")]
    ResourceCreation(String),
    #[error("failed to read font stream: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

impl FontError {
    pub fn truncated(what: &'static str, needed: usize, remaining: usize) -> Self {
        FontError::TruncatedInput {
            what,
            needed,
            remaining,
        }
    }

    pub fn malformed(block: &'static str, reason: impl Into<String>) -> Self {
        FontError::MalformedBlock {
            block,
            reason: reason.into(),
        }
    }

    pub fn image_decode(
        file_name: &str,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        FontError::ImageDecode {
            file_name: file_name.to_owned(),
            source: source.into(),
        }
    }
}

/// Font load failure as seen by callers. Always wraps the root cause.
#[derive(Error, Debug)]
#[error("failed to load bitmap font")]
pub struct LoadError(#[from] FontError);

impl LoadError {
    pub fn kind(&self) -> &FontError {
        &self.0
    }

    pub fn into_inner(self) -> FontError {
        self.0
    }
}
