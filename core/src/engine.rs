#![deny(missing_docs)]

//! # Parameter Validation Engine
//!
//! Reconciles declared parameters with the fields of a concrete request.
//!
//! 1. **Per-spec pass** (in declaration order, fail-fast): required fields must
//!    be present in the map of their own location, present values must satisfy
//!    the type rule of their declared type.
//! 2. **Closure pass**: every present field must be accounted for by a checked
//!    spec. Runs only once the per-spec pass succeeded.
//!
//! The engine is a pure function of its inputs.

use crate::outcome::{ValidationError, ValidationOutcome};
use crate::params::{ParamLocation, ParamType, ParameterSpec};
use crate::request::RequestFields;
use crate::type_check::{is_empty_value, TypeRule};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Validates `fields` against `specs`, reporting the first violation.
pub fn validate(specs: &[ParameterSpec], fields: &RequestFields) -> ValidationOutcome {
    match check(specs, fields) {
        Ok(()) => ValidationOutcome::Valid,
        Err(e) => {
            debug!(error = %e, "request parameters rejected");
            ValidationOutcome::Invalid(e)
        }
    }
}

fn check(specs: &[ParameterSpec], fields: &RequestFields) -> Result<(), ValidationError> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();

    for spec in specs {
        if !spec.location.is_checked() {
            trace!(name = %spec.name, location = %spec.location, "skipping unchecked location");
            continue;
        }

        check_spec(spec, fields)?;
        seen.insert(spec.name.as_str());
    }

    let extra: Vec<String> = fields
        .present_names()
        .into_iter()
        .filter(|name| !seen.contains(name))
        .map(str::to_string)
        .collect();

    if extra.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::UnexpectedFields { names: extra })
    }
}

fn check_spec(spec: &ParameterSpec, fields: &RequestFields) -> Result<(), ValidationError> {
    // Form uploads live in their own map and have no scalar value to type check.
    if spec.location == ParamLocation::FormData && spec.param_type == Some(ParamType::File) {
        if spec.required && fields.file(&spec.name).is_none() {
            return Err(missing(spec));
        }
        return Ok(());
    }

    let Some(value) = fields.field(&spec.location, &spec.name) else {
        if spec.required {
            return Err(missing(spec));
        }
        trace!(name = %spec.name, "optional field absent");
        return Ok(());
    };

    let Some(param_type) = &spec.param_type else {
        return Ok(());
    };
    if is_empty_value(value) {
        trace!(name = %spec.name, "empty value, type check skipped");
        return Ok(());
    }
    if !TypeRule::for_type(param_type).accepts(value) {
        return Err(ValidationError::TypeMismatch {
            name: spec.name.clone(),
            expected: param_type.clone(),
        });
    }

    Ok(())
}

fn missing(spec: &ParameterSpec) -> ValidationError {
    ValidationError::MissingRequiredField {
        name: spec.name.clone(),
    }
}
