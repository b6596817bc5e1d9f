#![deny(missing_docs)]

//! # Parameter Resolution Interface
//!
//! Trait decoupling validation adapters from the document format that
//! declares the parameters.

use crate::error::AppResult;
use crate::params::ParameterSpec;

/// Produces the ordered parameter declarations of one operation.
pub trait ParameterResolver {
    /// Returns the parameters declared for `method` on `path_template`.
    ///
    /// # Arguments
    ///
    /// * `path_template` - Template as written in the document, e.g. `/pets/{id}`.
    /// * `method` - HTTP method, case-insensitive.
    fn resolve_parameters(&self, path_template: &str, method: &str)
        -> AppResult<Vec<ParameterSpec>>;
}

/// A fixed list answers every lookup with itself.
impl ParameterResolver for [ParameterSpec] {
    fn resolve_parameters(&self, _: &str, _: &str) -> AppResult<Vec<ParameterSpec>> {
        Ok(self.to_vec())
    }
}

impl ParameterResolver for Vec<ParameterSpec> {
    fn resolve_parameters(&self, path_template: &str, method: &str) -> AppResult<Vec<ParameterSpec>> {
        self.as_slice().resolve_parameters(path_template, method)
    }
}

impl<R: ParameterResolver + ?Sized> ParameterResolver for &R {
    fn resolve_parameters(&self, path_template: &str, method: &str) -> AppResult<Vec<ParameterSpec>> {
        (**self).resolve_parameters(path_template, method)
    }
}
