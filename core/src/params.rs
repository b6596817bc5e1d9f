#![deny(missing_docs)]

//! # Parameter Declarations
//!
//! The declared side of a validation call: one `ParameterSpec` per entry of an
//! OpenAPI 2.x `parameters` list. Deserializes straight from the document shape
//! (`name`, `in`, `type`, `required`), ignoring keys the engine does not use.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A declared contract for one named request input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Field name, unique per location within one operation.
    pub name: String,
    /// Where the field is expected to appear.
    #[serde(rename = "in")]
    pub location: ParamLocation,
    /// Primitive kind of the value. `None` for `body` parameters, which carry a `schema`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub param_type: Option<ParamType>,
    /// Whether the field must be present.
    #[serde(default)]
    pub required: bool,
}

impl ParameterSpec {
    /// Creates an optional parameter.
    pub fn new(name: impl Into<String>, location: ParamLocation, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            location,
            param_type: Some(param_type),
            required: false,
        }
    }

    /// Shorthand for an optional `query` parameter.
    pub fn query(name: impl Into<String>, param_type: ParamType) -> Self {
        Self::new(name, ParamLocation::Query, param_type)
    }

    /// Shorthand for an optional `formData` parameter.
    pub fn form(name: impl Into<String>, param_type: ParamType) -> Self {
        Self::new(name, ParamLocation::FormData, param_type)
    }

    /// Marks the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Identity of the parameter inside one operation: `(name, in)`.
    pub fn key(&self) -> (&str, &str) {
        (&self.name, self.location.as_str())
    }
}

/// The `in` of a parameter.
///
/// Unrecognised values are kept verbatim in `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParamLocation {
    /// Path segment, e.g. `/pets/{id}`.
    Path,
    /// Query string field.
    Query,
    /// Form field or multipart upload.
    FormData,
    /// Whole structured payload.
    Body,
    /// HTTP header.
    Header,
    /// Anything else.
    Other(String),
}

impl ParamLocation {
    /// Returns the wire tag.
    pub fn as_str(&self) -> &str {
        match self {
            ParamLocation::Path => "path",
            ParamLocation::Query => "query",
            ParamLocation::FormData => "formData",
            ParamLocation::Body => "body",
            ParamLocation::Header => "header",
            ParamLocation::Other(s) => s,
        }
    }

    /// Only flat request fields are reconciled; path and header values are
    /// guaranteed by routing, and `body` is a single structured payload.
    pub fn is_checked(&self) -> bool {
        matches!(self, ParamLocation::Query | ParamLocation::FormData)
    }
}

impl From<&str> for ParamLocation {
    fn from(s: &str) -> Self {
        match s {
            "path" => ParamLocation::Path,
            "query" => ParamLocation::Query,
            "formData" => ParamLocation::FormData,
            "body" => ParamLocation::Body,
            "header" => ParamLocation::Header,
            other => ParamLocation::Other(other.to_string()),
        }
    }
}

impl From<String> for ParamLocation {
    fn from(s: String) -> Self {
        ParamLocation::from(s.as_str())
    }
}

impl From<ParamLocation> for String {
    fn from(l: ParamLocation) -> Self {
        match l {
            ParamLocation::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The primitive `type` of a parameter.
///
/// Unknown tags survive as `Other` so newer documents never fail to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParamType {
    /// `string`
    String,
    /// `integer`
    Integer,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `file` (multipart upload)
    File,
    /// `array`
    Array,
    /// `object`
    Object,
    /// Unrecognised tag.
    Other(String),
}

impl ParamType {
    /// Returns the wire tag.
    pub fn as_str(&self) -> &str {
        match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::File => "file",
            ParamType::Array => "array",
            ParamType::Object => "object",
            ParamType::Other(s) => s,
        }
    }
}

impl From<&str> for ParamType {
    fn from(s: &str) -> Self {
        match s {
            "string" => ParamType::String,
            "integer" => ParamType::Integer,
            "number" => ParamType::Number,
            "boolean" => ParamType::Boolean,
            "file" => ParamType::File,
            "array" => ParamType::Array,
            "object" => ParamType::Object,
            other => ParamType::Other(other.to_string()),
        }
    }
}

impl From<String> for ParamType {
    fn from(s: String) -> Self {
        ParamType::from(s.as_str())
    }
}

impl From<ParamType> for String {
    fn from(t: ParamType) -> Self {
        match t {
            ParamType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
