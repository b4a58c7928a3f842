//! Error types produced while flattening action contexts.

use thiserror::Error;

use crate::field::{FieldAccessError, ValueKind};

/// Errors that can occur while building an argument vector.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ActionError {
    /// A required field had no value.
    #[error("{key} can not be null")]
    MissingValue {
        /// Key of the offending field.
        key: String,
    },

    /// Reading a field failed and the style asks for failures to propagate.
    #[error("failed to read '{key}': {source}")]
    FieldAccess {
        /// Key of the field whose reader failed.
        key: String,
        /// Failure reported by the reader.
        #[source]
        source: FieldAccessError,
    },

    /// A reader produced a value whose shape disagrees with the field's
    /// declared kind.
    #[error("'{key}' is declared {expected:?} but its reader produced {found:?}")]
    KindMismatch {
        /// Key of the offending field.
        key: String,
        /// Kind recorded in the descriptor table.
        expected: ValueKind,
        /// Kind of the value the reader returned.
        found: ValueKind,
    },

    /// The argument style could not be loaded from its providers.
    #[error("failed to load argument style: {0}")]
    Style(#[from] Box<figment::Error>),
}

impl ActionError {
    /// Construct a missing-value error for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use action_conf::ActionError;
    /// let err = ActionError::missing("jar");
    /// assert_eq!(err.to_string(), "jar can not be null");
    /// ```
    #[must_use]
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingValue { key: key.into() }
    }

    /// Key of the field that triggered the error, if the error concerns one.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingValue { key }
            | Self::FieldAccess { key, .. }
            | Self::KindMismatch { key, .. } => Some(key),
            Self::Style(_) => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type ActionResult<T> = Result<T, ActionError>;
