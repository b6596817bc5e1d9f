#![deny(missing_docs)]

//! # Swagger 2.0 Support
//!
//! - **document**: loading and per-operation parameter lookup.
//! - **templates**: matching request paths to path templates.
//! - **ref_utils**: local `$ref` decoding.

pub mod document;
pub(crate) mod ref_utils;
pub mod templates;

pub use document::{Operation, PathItem, SwaggerDocument};
