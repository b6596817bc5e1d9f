#![deny(missing_docs)]

//! # Request Parameters Constraint
//!
//! Test-harness adapter: binds a resolver to one operation and turns a
//! validation outcome into an assertion failure message.
//!
//! ```ignore
//! let doc = SwaggerDocument::from_path(Path::new("docs/swagger.yaml"))?;
//! let fields = RequestFields::new().with_query("limit", "10");
//! assert_request_parameters(&doc, "/pets", "GET", &fields);
//! ```

use crate::engine::validate;
use crate::error::AppResult;
use crate::outcome::ValidationOutcome;
use crate::request::RequestFields;
use crate::resolver::ParameterResolver;

/// Asserts that request fields conform to the parameters of one operation.
#[derive(Debug, Clone)]
pub struct RequestParametersConstraint<R> {
    resolver: R,
    path_template: String,
    method: String,
}

impl<R: ParameterResolver> RequestParametersConstraint<R> {
    /// Binds `resolver` to the operation `method path_template`.
    pub fn new(resolver: R, path_template: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            resolver,
            path_template: path_template.into(),
            method: method.into(),
        }
    }

    /// Resolves the operation's parameters and validates `fields` against them.
    ///
    /// Errors only when the operation cannot be resolved.
    pub fn evaluate(&self, fields: &RequestFields) -> AppResult<ValidationOutcome> {
        let specs = self
            .resolver
            .resolve_parameters(&self.path_template, &self.method)?;
        Ok(validate(&specs, fields))
    }

    /// Convenience for [`Self::evaluate`] collapsing to a boolean.
    pub fn matches(&self, fields: &RequestFields) -> AppResult<bool> {
        Ok(self.evaluate(fields)?.is_valid())
    }

    /// Human-readable failure text for `fields`, or `None` when they conform.
    pub fn failure_description(&self, fields: &RequestFields) -> AppResult<Option<String>> {
        let outcome = self.evaluate(fields)?;
        Ok(outcome.error().map(|err| {
            format!(
                "Failed asserting that request {} is valid for {} {}\n{}",
                render_fields(fields),
                self.method.to_ascii_uppercase(),
                self.path_template,
                err
            )
        }))
    }

    /// Panics with [`Self::failure_description`] unless `fields` conform.
    ///
    /// # Panics
    ///
    /// On a validation failure, and when the operation cannot be resolved.
    pub fn assert_matches(&self, fields: &RequestFields) {
        match self.failure_description(fields) {
            Ok(None) => {}
            Ok(Some(description)) => panic!("{}", description),
            Err(e) => panic!("Cannot validate request parameters: {}", e),
        }
    }
}

fn render_fields(fields: &RequestFields) -> String {
    serde_json::to_string(fields).unwrap_or_else(|_| format!("{:?}", fields))
}

/// Asserts that `fields` conform to the parameters of `method path_template`.
///
/// # Panics
///
/// See [`RequestParametersConstraint::assert_matches`].
pub fn assert_request_parameters<R: ParameterResolver>(
    resolver: R,
    path_template: &str,
    method: &str,
    fields: &RequestFields,
) {
    RequestParametersConstraint::new(resolver, path_template, method).assert_matches(fields);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::ValidationError;
    use crate::params::{ParamType, ParameterSpec};
    use crate::swagger::SwaggerDocument;

    const SCHEMA: &str = r#"
swagger: "2.0"
paths:
  /search:
    get:
      parameters:
        - {name: q, in: query, type: string, required: true}
        - {name: page, in: query, type: integer}
"#;

    fn constraint() -> RequestParametersConstraint<SwaggerDocument> {
        let doc = SwaggerDocument::from_yaml_str(SCHEMA).unwrap();
        RequestParametersConstraint::new(doc, "/search", "get")
    }

    #[test]
    fn test_evaluate_valid() {
        let fields = RequestFields::new().with_query("q", "rust").with_query("page", "2");
        assert_eq!(constraint().evaluate(&fields).unwrap(), ValidationOutcome::Valid);
        assert!(constraint().matches(&fields).unwrap());
        assert!(constraint().failure_description(&fields).unwrap().is_none());
    }

    #[test]
    fn test_failure_description() {
        let fields = RequestFields::new().with_query("page", "2");
        let text = constraint().failure_description(&fields).unwrap().unwrap();
        assert_eq!(
            text,
            "Failed asserting that request {\"query\":{\"page\":\"2\"},\"formData\":{},\"files\":{}} \
             is valid for GET /search\nField \"q\" required by Schema is not present"
        );
    }

    #[test]
    #[should_panic(expected = "Value for field \"page\" is not a valid integer")]
    fn test_assert_panics_on_mismatch() {
        let fields = RequestFields::new().with_query("q", "rust").with_query("page", "two");
        constraint().assert_matches(&fields);
    }

    #[test]
    #[should_panic(expected = "Cannot validate request parameters")]
    fn test_assert_panics_on_unknown_operation() {
        let doc = SwaggerDocument::from_yaml_str(SCHEMA).unwrap();
        assert_request_parameters(&doc, "/search", "POST", &RequestFields::new());
    }

    #[test]
    fn test_static_resolver() {
        let specs = vec![ParameterSpec::form("name", ParamType::String).required()];
        let c = RequestParametersConstraint::new(specs, "/anything", "post");
        let outcome = c.evaluate(&RequestFields::new().with_form("nick", "x")).unwrap();
        assert_eq!(
            outcome.error(),
            Some(&ValidationError::MissingRequiredField { name: "name".into() })
        );
        assert_request_parameters(
            vec![ParameterSpec::form("name", ParamType::String)],
            "/anything",
            "post",
            &RequestFields::new().with_form("name", "x"),
        );
    }
}
