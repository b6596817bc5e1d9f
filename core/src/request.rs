#![deny(missing_docs)]

//! # Request Fields
//!
//! The actual side of a validation call: the request already decomposed into
//! flat field maps per location. Values are kept as `serde_json::Value` so that
//! wire strings and already-typed values (booleans, numbers) can both be
//! represented.

use crate::params::ParamLocation;
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, BTreeSet};

/// A file received as part of a multipart `formData` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Client supplied file name.
    #[serde(rename = "fileName", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Declared media type.
    #[serde(rename = "contentType", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
}

/// Request fields grouped by location. Absent maps are empty maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestFields {
    /// Decoded query string.
    #[serde(default)]
    pub query: BTreeMap<String, JsonValue>,
    /// Scalar form fields.
    #[serde(rename = "formData", default)]
    pub form_data: BTreeMap<String, JsonValue>,
    /// Uploaded files, which are `formData` fields too.
    #[serde(default)]
    pub files: BTreeMap<String, UploadedFile>,
}

impl RequestFields {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query field.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Adds a scalar form field.
    pub fn with_form(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.form_data.insert(name.into(), value.into());
        self
    }

    /// Adds an uploaded file.
    pub fn with_file(mut self, name: impl Into<String>, file: UploadedFile) -> Self {
        self.files.insert(name.into(), file);
        self
    }

    /// Builds a request whose query map is decoded from a raw query string.
    ///
    /// Accepts an optional leading `?`. Later duplicates replace earlier ones.
    pub fn from_query_string(raw: &str) -> Self {
        Self {
            query: decode_query_string(raw),
            ..Self::default()
        }
    }

    /// Looks up a scalar field in the map that belongs to `location`.
    ///
    /// Locations without a field map always answer `None`.
    pub fn field(&self, location: &ParamLocation, name: &str) -> Option<&JsonValue> {
        match location {
            ParamLocation::Query => self.query.get(name),
            ParamLocation::FormData => self.form_data.get(name),
            _ => None,
        }
    }

    /// Looks up an uploaded file.
    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name)
    }

    /// All field names present across query, form and file maps.
    pub fn present_names(&self) -> BTreeSet<&str> {
        self.query
            .keys()
            .chain(self.form_data.keys())
            .chain(self.files.keys())
            .map(String::as_str)
            .collect()
    }

    /// True when no field is present at any location.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.form_data.is_empty() && self.files.is_empty()
    }
}

/// Decodes `application/x-www-form-urlencoded` pairs into a string map.
pub fn decode_query_string(raw: &str) -> BTreeMap<String, JsonValue> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let mut out = BTreeMap::new();
    for pair in raw.split('&').filter(|p| !p.is_empty()) {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(k);
        if key.is_empty() {
            continue;
        }
        out.insert(key, JsonValue::String(decode_component(v)));
    }
    out
}

fn decode_component(s: &str) -> String {
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
