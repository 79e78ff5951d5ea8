//! Load failures raised while building a translator or language table.
//!
//! Every variant names the resource that failed so the message alone is
//! enough to find the bad file. Lookup misses are not errors and never
//! show up here; they are `None` or an empty `Vec` at the call site.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("resource '{resource}' not found")]
    NotFound { resource: String },

    #[error("failed to read resource '{resource}'")]
    Read {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse resource '{resource}'")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed line {line} in resource '{resource}': {reason}")]
    Malformed {
        resource: String,
        line: usize,
        reason: String,
    },

    #[error("invalid record #{index} in resource '{resource}': {reason}")]
    InvalidRecord {
        resource: String,
        index: usize,
        reason: String,
    },
}

impl LoadError {
    /// Name of the resource this failure refers to.
    pub fn resource(&self) -> &str {
        match self {
            Self::NotFound { resource }
            | Self::Read { resource, .. }
            | Self::Parse { resource, .. }
            | Self::Malformed { resource, .. }
            | Self::InvalidRecord { resource, .. } => resource,
        }
    }
}
