//! Error types for recordbook
//!
//! Every failure is reported to the immediate caller. Name lists carried by
//! the variants are kept in a stable order so messages are deterministic.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Discriminant of an [`Error`], convenient for matching in callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// More positional values than schema attributes
    TooManyArguments,
    /// Same attribute bound twice
    DuplicateArgument,
    /// Schema attributes left unbound
    MissingAttributes,
    /// Supplied names outside the schema
    UnexpectedAttributes,
    /// Post-construction write outside the schema
    ForbiddenAttributeSet,
    /// Read or search on a name outside the schema
    UnknownAttribute,
    /// Collection position past the last entry
    IndexOutOfRange,
    /// Shape declaration repeats an inherited or own attribute
    RedeclaredAttribute,
    /// Shape name not registered
    UnknownShape,
    /// Shape name registered twice
    DuplicateShape,
    /// Malformed shape declaration document
    Config,
}

/// recordbook error types
#[derive(Error, Debug)]
pub enum Error {
    /// More positional values were supplied than the schema declares
    #[error("{shape}'s constructor received too many positional arguments: {given} given, {max} accepted")]
    TooManyArguments {
        /// Record shape being constructed
        shape: String,
        /// Number of positional values supplied
        given: usize,
        /// Number of schema attributes
        max: usize,
    },

    /// An attribute was bound both positionally and by keyword (or by two keywords)
    #[error("{shape}'s constructor got multiple values for argument(s): {}", .names.join(", "))]
    DuplicateArgument {
        /// Record shape being constructed
        shape: String,
        /// Colliding attribute names
        names: Vec<String>,
    },

    /// Schema attributes were left unbound
    #[error("{shape}'s constructor is missing the following argument(s): {}", .names.join(", "))]
    MissingAttributes {
        /// Record shape being constructed
        shape: String,
        /// Unbound attribute names, in schema order
        names: Vec<String>,
    },

    /// Names outside the schema were supplied
    #[error("{shape}'s constructor received unexpected argument(s): {}", .names.join(", "))]
    UnexpectedAttributes {
        /// Record shape being constructed
        shape: String,
        /// Extra names, in the order supplied
        names: Vec<String>,
    },

    /// Assignment to a name outside the schema of a locked record
    #[error("Unable to set '{name}' for record {shape}")]
    ForbiddenAttributeSet {
        /// Record shape
        shape: String,
        /// Rejected attribute name
        name: String,
    },

    /// Lookup of a name outside the schema
    #[error("'{shape}' has no attribute '{name}'")]
    UnknownAttribute {
        /// Record shape
        shape: String,
        /// Requested attribute name
        name: String,
    },

    /// Positional collection access past the stored entries
    #[error("Index {index} out of range for collection with {len} entries")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Number of stored entries
        len: usize,
    },

    /// A shape declaration repeats an attribute name
    #[error("Shape '{shape}' redeclares attribute '{name}'")]
    RedeclaredAttribute {
        /// Shape being declared
        shape: String,
        /// Repeated attribute name
        name: String,
    },

    /// Shape name not found in the registry
    #[error("Unknown record shape '{0}'")]
    UnknownShape(String),

    /// Shape name already present in the registry
    #[error("Record shape '{0}' is already declared")]
    DuplicateShape(String),

    /// Shape declaration document could not be parsed
    #[error("Invalid shape configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TooManyArguments { .. } => ErrorKind::TooManyArguments,
            Self::DuplicateArgument { .. } => ErrorKind::DuplicateArgument,
            Self::MissingAttributes { .. } => ErrorKind::MissingAttributes,
            Self::UnexpectedAttributes { .. } => ErrorKind::UnexpectedAttributes,
            Self::ForbiddenAttributeSet { .. } => ErrorKind::ForbiddenAttributeSet,
            Self::UnknownAttribute { .. } => ErrorKind::UnknownAttribute,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::RedeclaredAttribute { .. } => ErrorKind::RedeclaredAttribute,
            Self::UnknownShape(_) => ErrorKind::UnknownShape,
            Self::DuplicateShape(_) => ErrorKind::DuplicateShape,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_argument_lists_names() {
        let error = Error::DuplicateArgument {
            shape: "PhoneEntry".to_string(),
            names: vec!["phone".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "PhoneEntry's constructor got multiple values for argument(s): phone"
        );
        assert_eq!(error.kind(), ErrorKind::DuplicateArgument);
    }

    #[test]
    fn test_missing_attributes_joins_names() {
        let error = Error::MissingAttributes {
            shape: "PhoneEntry".to_string(),
            names: vec!["name".to_string(), "phone".to_string()],
        };
        assert!(error.to_string().ends_with("name, phone"));
    }

    #[test]
    fn test_config_error_from_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = Error::from(parse);
        assert_eq!(error.kind(), ErrorKind::Config);
        assert!(error.to_string().starts_with("Invalid shape configuration"));
    }
}
