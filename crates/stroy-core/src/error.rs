//! Error types for the StroyCRM entity toolkit.

use std::path::{Path, PathBuf};

use crate::types::EntityId;

/// Errors raised by stores, forms, and the application shell.
///
/// Every variant is recoverable: none of them leave a store or a form in an
/// inconsistent state.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No record with the given identifier exists in the store.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity kind the store holds
        kind: &'static str,
        /// Identifier that was looked up
        id: EntityId,
    },

    /// The store's guard refused to remove or demote the record.
    #[error("{kind} {id} is protected: {reason}")]
    ProtectedEntity {
        /// Entity kind the store holds
        kind: &'static str,
        /// Identifier of the protected record
        id: EntityId,
        /// Why the guard refused
        reason: String,
    },

    /// A draft failed validation at submit time.
    #[error("Validation error on '{field}': {message}")]
    Validation {
        /// Name of the offending field
        field: String,
        /// What went wrong
        message: String,
    },

    /// A field name that is not part of the kind's schema.
    #[error("Unknown field '{field}' for {kind}")]
    UnknownField {
        /// Entity kind whose schema was consulted
        kind: &'static str,
        /// The unrecognised field name
        field: String,
    },

    /// A draft operation was attempted while no form is open.
    #[error("No form is open")]
    FormClosed,

    /// Attribute map could not be converted to or from a record.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store has no identifiers left to allocate.
    #[error("No {kind} identifiers left after {last}")]
    IdsExhausted {
        /// Entity kind the store holds
        kind: &'static str,
        /// Largest identifier already allocated
        last: EntityId,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error tied to a file path.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File the operation touched
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Convenience `Result` type alias for StroyCRM operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether the user can fix this error by correcting their input.
    ///
    /// Validation failures keep the form open for correction; protected
    /// deletions are surfaced as a disabled action. Everything else points at
    /// a programming or environment problem.
    pub fn is_user_correctable(&self) -> bool {
        match self {
            Error::Validation { .. } => true,
            Error::ProtectedEntity { .. } => true,
            Error::NotFound { .. } => false,
            Error::UnknownField { .. } => false,
            Error::FormClosed => false,
            Error::IdsExhausted { .. } => false,
            Error::Serialization(_) => false,
            Error::Config { .. } => false,
            Error::Io { .. } => false,
        }
    }

    /// Creates a not-found error.
    pub fn not_found(kind: &'static str, id: EntityId) -> Self {
        Error::NotFound { kind, id }
    }

    /// Creates a protected-entity error.
    pub fn protected<S: Into<String>>(kind: &'static str, id: EntityId, reason: S) -> Self {
        Error::ProtectedEntity {
            kind,
            id,
            reason: reason.into(),
        }
    }

    /// Creates a validation error for a field.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates the validation error reported for an empty required field.
    pub fn missing_field<F: Into<String>>(field: F) -> Self {
        Self::validation_field(field, "is required")
    }

    /// Creates an unknown-field error.
    pub fn unknown_field<S: Into<String>>(kind: &'static str, field: S) -> Self {
        Error::UnknownField {
            kind,
            field: field.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it concerns.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns the field name for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
