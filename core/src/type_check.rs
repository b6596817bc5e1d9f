#![deny(missing_docs)]

//! # Type Check Policy
//!
//! Maps each declared `ParamType` to the rule its value must satisfy.
//!
//! - **integer / number**: value must be numeric. Wire strings are accepted
//!   when they spell a decimal number (`"42"`, `"3.14"`, `"1e3"`).
//! - **boolean**: value must not be a string. `"true"` fails, `true` or an
//!   already-decoded `1` passes.
//! - everything else: unchecked.

use crate::params::ParamType;
use regex::Regex;
use serde_json::Value as JsonValue;
use std::sync::OnceLock;

/// Rule applied to a present, non-empty field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRule {
    /// A number or a string spelling one.
    Numeric,
    /// Anything except a string.
    NotString,
    /// No constraint.
    Unchecked,
}

impl TypeRule {
    /// Selects the rule for a declared type.
    pub fn for_type(param_type: &ParamType) -> Self {
        match param_type {
            ParamType::Integer | ParamType::Number => TypeRule::Numeric,
            ParamType::Boolean => TypeRule::NotString,
            ParamType::String
            | ParamType::File
            | ParamType::Array
            | ParamType::Object
            | ParamType::Other(_) => TypeRule::Unchecked,
        }
    }

    /// Returns true when `value` satisfies the rule.
    pub fn accepts(self, value: &JsonValue) -> bool {
        match self {
            TypeRule::Numeric => is_numeric(value),
            TypeRule::NotString => !value.is_string(),
            TypeRule::Unchecked => true,
        }
    }
}

/// Values that count as present for the required check but are never type checked.
pub fn is_empty_value(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(a) => a.is_empty(),
        JsonValue::Object(o) => o.is_empty(),
        JsonValue::Bool(_) | JsonValue::Number(_) => false,
    }
}

/// True for JSON numbers and for strings holding a decimal literal.
pub fn is_numeric(value: &JsonValue) -> bool {
    match value {
        JsonValue::Number(_) => true,
        JsonValue::String(s) => numeric_literal().is_match(s),
        _ => false,
    }
}

fn numeric_literal() -> &'static Regex {
    static NUMERIC_RE: OnceLock<Regex> = OnceLock::new();
    NUMERIC_RE.get_or_init(|| {
        Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?\s*$").expect("Invalid regex")
    })
}
