//! Resource resolution and the two on-disk formats.
//!
//! A [`Resource`] says where the bytes come from (compiled-in, a file, or an
//! in-memory fixture). Parsing never cares which one it got: the translator
//! and language table ask for records or rows and get back a [`LoadError`]
//! naming the resource when anything goes wrong.

use crate::error::LoadError;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default country translation resource.
pub const DEFAULT_COUNTRY_RESOURCE: &str = "sample.json";

/// Default language code resource.
pub const DEFAULT_LANGUAGE_RESOURCE: &str = "language-codes.txt";

/// Resources compiled into the binary, by name.
const BUILTINS: &[(&str, &str)] = &[
    (
        DEFAULT_COUNTRY_RESOURCE,
        include_str!("../resources/sample.json"),
    ),
    (
        DEFAULT_LANGUAGE_RESOURCE,
        include_str!("../resources/language-codes.txt"),
    ),
];

/// Where a resource's contents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// Compiled into the binary
    Embedded {
        name: &'static str,
        contents: &'static str,
    },
    /// Read from disk on load
    File(PathBuf),
    /// Held in memory (fixtures, data fetched by the caller)
    Inline { name: String, contents: String },
}

impl Resource {
    /// Look up a built-in resource by name.
    pub fn builtin(name: &str) -> Option<Resource> {
        BUILTINS
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|&(name, contents)| Resource::Embedded { name, contents })
    }

    /// Create an in-memory resource.
    pub fn inline(name: impl Into<String>, contents: impl Into<String>) -> Resource {
        Resource::Inline {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Resolve a resource name.
    ///
    /// Order: `search_dir/name` when a directory is given and the file
    /// exists, then the built-in of that name, then `name` as a path.
    pub fn locate(name: &str, search_dir: Option<&Path>) -> Result<Resource, LoadError> {
        if let Some(path) = search_dir.map(|dir| dir.join(name)).filter(|p| p.is_file()) {
            debug!("Resolved resource '{}' to {}", name, path.display());
            return Ok(Resource::File(path));
        }

        if let Some(builtin) = Resource::builtin(name) {
            debug!("Resolved resource '{}' to built-in data", name);
            return Ok(builtin);
        }

        let path = Path::new(name);
        if path.is_file() {
            debug!("Resolved resource '{}' as a path", name);
            return Ok(Resource::File(path.to_path_buf()));
        }

        Err(LoadError::NotFound {
            resource: name.to_string(),
        })
    }

    /// Name used in logs and error messages.
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Resource::Embedded { name, .. } => Cow::Borrowed(*name),
            Resource::File(path) => path.to_string_lossy(),
            Resource::Inline { name, .. } => Cow::Borrowed(name.as_str()),
        }
    }

    /// Read the whole resource as UTF-8 text.
    pub fn read(&self) -> Result<Cow<'_, str>, LoadError> {
        match self {
            Resource::Embedded { contents, .. } => Ok(Cow::Borrowed(*contents)),
            Resource::Inline { contents, .. } => Ok(Cow::Borrowed(contents.as_str())),
            Resource::File(path) => std::fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|source| match source.kind() {
                    std::io::ErrorKind::NotFound => LoadError::NotFound {
                        resource: self.name().into_owned(),
                    },
                    _ => LoadError::Read {
                        resource: self.name().into_owned(),
                        source,
                    },
                }),
        }
    }
}

/// Parse a resource holding a JSON array of records.
pub fn parse_records<T: DeserializeOwned>(resource: &Resource) -> Result<Vec<T>, LoadError> {
    let text = resource.read()?;
    serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        resource: resource.name().into_owned(),
        source,
    })
}

/// Data rows of a tab-separated resource.
///
/// The first line is a header and is always dropped. Empty lines are
/// skipped. Each item is the 1-based source line number and the row's
/// fields.
pub fn data_rows(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> + '_ {
    text.lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| (index + 1, line.split('\t').collect()))
}
