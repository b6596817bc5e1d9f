#![deny(missing_docs)]

//! # Validation Outcome
//!
//! A failed validation is a value, not an error path: the engine returns a
//! `ValidationOutcome` and adapters decide how to surface it.

use crate::params::ParamType;
use derive_more::Display;
use serde::Serialize;

/// The first contract violation found in a request.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationError {
    /// A required parameter has no field in the request.
    #[display("Field \"{name}\" required by Schema is not present")]
    MissingRequiredField {
        /// Parameter name.
        name: String,
    },

    /// A present value does not fit the declared primitive type.
    #[display("Value for field \"{name}\" is not a valid {expected}")]
    TypeMismatch {
        /// Parameter name.
        name: String,
        /// Declared type.
        expected: ParamType,
    },

    /// Request fields that no parameter declares, sorted by name.
    #[display(
        "Fields {} present in request are not expected according to Schema",
        render_names(names)
    )]
    UnexpectedFields {
        /// Offending field names.
        names: Vec<String>,
    },
}

impl ValidationError {
    /// Names of the fields this error is about.
    pub fn field_names(&self) -> Vec<&str> {
        match self {
            ValidationError::MissingRequiredField { name }
            | ValidationError::TypeMismatch { name, .. } => vec![name.as_str()],
            ValidationError::UnexpectedFields { names } => names.iter().map(String::as_str).collect(),
        }
    }
}

fn render_names(names: &[String]) -> String {
    serde_json::to_string(names).unwrap_or_else(|_| format!("{:?}", names))
}

/// Result of one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Every declared and present field conforms.
    Valid,
    /// The first violation found.
    Invalid(ValidationError),
}

impl ValidationOutcome {
    /// True when the request conforms.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// The violation, if any.
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(e) => Some(e),
        }
    }

    /// Converts into a plain `Result`.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(e) => Err(e),
        }
    }
}

impl From<ValidationError> for ValidationOutcome {
    fn from(e: ValidationError) -> Self {
        ValidationOutcome::Invalid(e)
    }
}

impl Serialize for ValidationOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ValidationOutcome", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("error", &self.error())?;
        state.end()
    }
}
