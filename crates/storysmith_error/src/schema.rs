//! Story schema validation errors.

/// Constraint a candidate story violated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SchemaErrorKind {
    /// The candidate value is not a JSON object
    #[display("expected a JSON object, found {}", found)]
    NotAnObject {
        /// JSON type that was found instead
        found: String,
    },

    /// A required field is absent or null
    #[display("field '{}' is required", field)]
    MissingField {
        /// Name of the missing field
        field: String,
    },

    /// A field holds the wrong JSON type
    #[display("field '{}' must be {}, found {}", field, expected, found)]
    WrongType {
        /// Name of the field (array items are named `field[i]`)
        field: String,
        /// Expected type description
        expected: String,
        /// JSON type that was found
        found: String,
    },

    /// A text field is shorter than its minimum length
    #[display(
        "field '{}' must be at least {} characters, found {}",
        field,
        min,
        actual
    )]
    TooShort {
        /// Name of the field
        field: String,
        /// Minimum length in characters
        min: usize,
        /// Actual length in characters
        actual: usize,
    },
}

impl SchemaErrorKind {
    /// Name of the offending field, if the violation concerns a single field.
    pub fn field(&self) -> Option<&str> {
        match self {
            SchemaErrorKind::NotAnObject { .. } => None,
            SchemaErrorKind::MissingField { field }
            | SchemaErrorKind::WrongType { field, .. }
            | SchemaErrorKind::TooShort { field, .. } => Some(field),
        }
    }
}

/// Schema validation error with location tracking.
///
/// # Examples
///
/// ```
/// use storysmith_error::{SchemaError, SchemaErrorKind};
///
/// let err = SchemaError::new(SchemaErrorKind::MissingField {
///     field: "title".to_string(),
/// });
/// assert_eq!(err.kind().field(), Some("title"));
/// assert!(format!("{}", err).contains("'title' is required"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
#[display("Schema Error: {} at line {} in {}", kind, line, file)]
pub struct SchemaError {
    kind: SchemaErrorKind,
    line: u32,
    file: &'static str,
}

impl SchemaError {
    /// Create a new schema error with caller location tracking.
    #[track_caller]
    pub fn new(kind: SchemaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SchemaErrorKind {
        &self.kind
    }
}
