use param_contract_core::{
    validate, ParamLocation, ParamType, ParameterSpec, RequestFields, RequestParametersConstraint,
    SwaggerDocument, UploadedFile, ValidationError, ValidationOutcome,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use std::thread;

fn petstore() -> SwaggerDocument {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/petstore.yaml");
    SwaggerDocument::from_path(&path).unwrap()
}

fn id_query(required: bool) -> Vec<ParameterSpec> {
    vec![ParameterSpec {
        name: "id".into(),
        location: ParamLocation::Query,
        param_type: Some(ParamType::Integer),
        required,
    }]
}

#[test]
fn test_scenario_valid_integer() {
    let fields = RequestFields::new().with_query("id", "7");
    assert_eq!(validate(&id_query(true), &fields), ValidationOutcome::Valid);
}

#[test]
fn test_scenario_missing_required() {
    assert_eq!(
        validate(&id_query(true), &RequestFields::new()),
        ValidationOutcome::Invalid(ValidationError::MissingRequiredField { name: "id".into() })
    );
}

#[test]
fn test_scenario_type_mismatch() {
    let fields = RequestFields::new().with_query("id", "x");
    assert_eq!(
        validate(&id_query(true), &fields),
        ValidationOutcome::Invalid(ValidationError::TypeMismatch {
            name: "id".into(),
            expected: ParamType::Integer,
        })
    );
}

#[test]
fn test_scenario_unexpected_field() {
    let fields = RequestFields::new().with_query("id", "7").with_query("extra", "1");
    assert_eq!(
        validate(&id_query(false), &fields),
        ValidationOutcome::Invalid(ValidationError::UnexpectedFields {
            names: vec!["extra".into()],
        })
    );
}

#[test]
fn test_closure_single_extra() {
    let specs = vec![ParameterSpec::query("a", ParamType::String).required()];
    let fields = RequestFields::new().with_query("a", "x").with_query("b", "y");
    let outcome = validate(&specs, &fields);
    assert_eq!(
        outcome.error().map(|e| e.to_string()),
        Some(r#"Fields ["b"] present in request are not expected according to Schema"#.into())
    );
}

#[test]
fn test_request_fields_from_json() {
    let fields: RequestFields = serde_json::from_value(json!({
        "formData": {"name": "rex", "vaccinated": true},
        "files": {"photo": {"fileName": "rex.jpg", "contentType": "image/jpeg", "size": 2048}}
    }))
    .unwrap();

    let specs = petstore().parameters("/pets", "post").unwrap();
    assert_eq!(validate(&specs, &fields), ValidationOutcome::Valid);
    assert_eq!(
        fields.file("photo"),
        Some(&UploadedFile {
            file_name: Some("rex.jpg".into()),
            content_type: Some("image/jpeg".into()),
            size: 2048,
        })
    );
}

#[test]
fn test_petstore_form_post() {
    let c = RequestParametersConstraint::new(petstore(), "/pets", "POST");

    let ok = RequestFields::new().with_form("name", "rex").with_form("age", "3");
    assert!(c.matches(&ok).unwrap());

    let textual_bool = ok.clone().with_form("vaccinated", "true");
    assert_eq!(
        c.evaluate(&textual_bool).unwrap().error(),
        Some(&ValidationError::TypeMismatch {
            name: "vaccinated".into(),
            expected: ParamType::Boolean,
        })
    );

    // The upload is declared but optional; a stray upload is not.
    let stray = ok.with_file("resume", UploadedFile::default());
    assert_eq!(
        c.evaluate(&stray).unwrap().error(),
        Some(&ValidationError::UnexpectedFields {
            names: vec!["resume".into()],
        })
    );
}

#[test]
fn test_petstore_header_and_path_params_are_not_checked() {
    let doc = petstore();

    let listing = RequestFields::from_query_string("?tags=dog&limit=10");
    assert!(RequestParametersConstraint::new(&doc, "/pets", "get")
        .matches(&listing)
        .unwrap());

    let by_id = RequestFields::new();
    assert!(RequestParametersConstraint::new(&doc, "/pets/{id}", "get")
        .matches(&by_id)
        .unwrap());
}

#[test]
fn test_petstore_template_lookup_and_validation() {
    let doc = petstore();
    let template = doc.find_path_template("/v2/pets/42?reason=old").unwrap();
    assert_eq!(template, "/pets/{id}");

    let fields = RequestFields::from_query_string("reason=old");
    let specs = doc.parameters(template, "DELETE").unwrap();
    assert_eq!(validate(&specs, &fields), ValidationOutcome::Valid);

    let specs = doc.parameters(template, "DELETE").unwrap();
    assert_eq!(
        validate(&specs, &RequestFields::new()),
        ValidationOutcome::Invalid(ValidationError::MissingRequiredField {
            name: "reason".into()
        })
    );
}

#[test]
fn test_concurrent_validation_on_shared_inputs() {
    let specs = Arc::new(vec![
        ParameterSpec::query("page", ParamType::Integer).required(),
        ParameterSpec::query("q", ParamType::String),
    ]);
    let fields = Arc::new(RequestFields::new().with_query("page", "1").with_query("q", "x"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let specs = Arc::clone(&specs);
            let fields = Arc::clone(&fields);
            thread::spawn(move || validate(&specs, &fields))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), ValidationOutcome::Valid);
    }
}
