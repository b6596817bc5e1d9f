#![deny(missing_docs)]

//! # Param Contract Core
//!
//! Checks the fields of a concrete request against the parameters an
//! OpenAPI 2.x operation declares: required fields present, primitive types
//! respected, no undeclared fields.
//!
//! ```
//! use param_contract_core::{validate, ParamType, ParameterSpec, RequestFields};
//!
//! let specs = vec![ParameterSpec::query("id", ParamType::Integer).required()];
//! let fields = RequestFields::new().with_query("id", "7");
//! assert!(validate(&specs, &fields).is_valid());
//! ```

/// Shared error types.
pub mod error;

/// Declared parameters.
pub mod params;

/// Actual request fields.
pub mod request;

/// Type rule per declared type.
pub mod type_check;

/// Validation result values.
pub mod outcome;

/// The reconciliation algorithm.
pub mod engine;

/// Resolver interface.
pub mod resolver;

/// Swagger 2.0 document lookup.
pub mod swagger;

/// Assertion adapter for test suites.
pub mod constraint;

pub use constraint::{assert_request_parameters, RequestParametersConstraint};
pub use engine::validate;
pub use error::{AppError, AppResult};
pub use outcome::{ValidationError, ValidationOutcome};
pub use params::{ParamLocation, ParamType, ParameterSpec};
pub use request::{RequestFields, UploadedFile};
pub use resolver::ParameterResolver;
pub use swagger::SwaggerDocument;
