#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The fixed, ordered list of subjects a student can be graded in.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{
    config::{CatalogConfig, MissingSource},
    error::{CatalogError, RecordError},
    parsers::parser,
};

/// Subject names read once from the first record of a comma separated file.
///
/// The list never changes after construction. Share it between students with
/// an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubjectCatalog {
    /// Subject names, in file order.
    subjects: Vec<String>,
}

impl SubjectCatalog {
    /// Loads the catalog from `path`. A missing file yields an empty catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::load_with(path, MissingSource::Empty)
    }

    /// Loads the catalog from the configured path and policy.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::load_with(config.path(), config.missing_source())
    }

    /// Loads the catalog from `path`, applying `missing` when the file does
    /// not exist. Only the first record is read.
    pub fn load_with(
        path: impl AsRef<Path>,
        missing: MissingSource,
    ) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return match missing {
                    MissingSource::Empty => {
                        tracing::warn!(
                            "Subject file {} not found, no subjects will be available",
                            path.display()
                        );
                        Ok(Self::default())
                    }
                    MissingSource::Error => Err(CatalogError::Missing {
                        path: path.to_path_buf(),
                    }),
                };
            }
            Err(source) => {
                return Err(CatalogError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let catalog = Self::parse_from(&contents, path)?;
        tracing::debug!(
            "Loaded {} subject(s) from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parses in-memory CSV text the same way `load` parses a file.
    pub fn parse(contents: &str) -> Result<Self, CatalogError> {
        Self::parse_from(contents, Path::new("<memory>"))
    }

    /// Shared parsing path; `origin` only shows up in error messages.
    fn parse_from(contents: &str, origin: &Path) -> Result<Self, CatalogError> {
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
        let subjects = parser::first_record(contents).map_err(|e| CatalogError::Malformed {
            path:    PathBuf::from(origin),
            message: e.to_string(),
        })?;
        Ok(Self { subjects })
    }

    /// Builds a catalog directly from subject names.
    pub fn from_subjects<I, S>(subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subjects: subjects.into_iter().map(Into::into).collect(),
        }
    }

    /// Subject names, in file order.
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Always fails: the subject list is fixed once loaded. Results are
    /// recorded through `Student::add_score` instead.
    pub fn set_subjects<I, S>(&self, subjects: I) -> Result<(), RecordError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let attempted = subjects.into_iter().count();
        tracing::warn!("Rejected an attempt to replace the subject list with {attempted} entries");
        Err(RecordError::ReadOnlyViolation)
    }

    /// Whether `subject` is one of the catalog's names.
    pub fn contains(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }

    /// Number of subjects.
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// True if no subjects were loaded.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Iterates the subject names in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.subjects.iter()
    }
}

impl<'a> IntoIterator for &'a SubjectCatalog {
    type IntoIter = std::slice::Iter<'a, String>;
    type Item = &'a String;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
