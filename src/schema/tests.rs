//! Tests for the schema registry and document validation.
//!
//! Covers registration invariants, introspection, per-field validation
//! including boundary values, default filling, coercion, and violation
//! accumulation across fields.

use super::registry::SchemaRegistry;
use super::types::{FieldDescriptor, FieldType, KindDescriptor};
use crate::error::{RegistrationError, SchemaError, Violation, ViolationCode};
use serde_json::{Value, json};

/// Unwrap the violation list out of a failed validation.
fn violations(result: Result<Value, SchemaError>) -> Vec<Violation> {
    match result {
        Err(SchemaError::Validation(failed)) => failed.violations,
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_registry_creation_with_builtin_kinds() {
    let registry = SchemaRegistry::new().expect("Failed to create registry");
    assert_eq!(
        registry.kind_names(),
        vec!["user", "product", "project", "message"]
    );
}

#[test]
fn test_describe_unknown_kind() {
    let registry = SchemaRegistry::new().unwrap();
    let result = registry.describe("invoice");
    assert!(matches!(
        result,
        Err(SchemaError::UnknownKind { kind }) if kind == "invoice"
    ));
}

#[test]
fn test_validate_unknown_kind() {
    let registry = SchemaRegistry::new().unwrap();
    let result = registry.validate("invoice", &json!({}));
    assert!(matches!(result, Err(SchemaError::UnknownKind { .. })));
}

#[test]
fn test_field_names_pairwise_distinct() {
    let registry = SchemaRegistry::new().unwrap();
    for kind in registry.kind_names() {
        let descriptor = registry.describe(kind).unwrap();
        let mut names: Vec<_> = descriptor.fields.iter().map(|f| &f.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), descriptor.fields.len(), "kind {kind}");
    }
}

#[test]
fn test_collection_identifier_defaults_to_lowercased_kind() {
    let descriptor = KindDescriptor::new(
        "BlogPost",
        vec![FieldDescriptor::required(
            "title",
            FieldType::String,
            "Post title",
        )],
    );
    assert_eq!(descriptor.collection, "blogpost");
}

#[test]
fn test_collection_identifier_override() {
    let mut registry = SchemaRegistry::empty();
    let descriptor = KindDescriptor::new(
        "BlogPost",
        vec![FieldDescriptor::required(
            "title",
            FieldType::String,
            "Post title",
        )],
    )
    .with_collection("blogs");
    registry.register(descriptor).unwrap();
    assert_eq!(registry.collection_for("BlogPost").unwrap(), "blogs");
}

#[test]
fn test_register_duplicate_kind_rejected() {
    let mut registry = SchemaRegistry::new().unwrap();
    let result = registry.register(super::builtin::user_kind());
    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateKind { kind }) if kind == "user"
    ));
}

#[test]
fn test_register_duplicate_field_rejected() {
    let mut registry = SchemaRegistry::empty();
    let descriptor = KindDescriptor::new(
        "thing",
        vec![
            FieldDescriptor::required("name", FieldType::String, ""),
            FieldDescriptor::required("name", FieldType::Integer, ""),
        ],
    );
    assert!(matches!(
        registry.register(descriptor),
        Err(RegistrationError::DuplicateField { field, .. }) if field == "name"
    ));
}

#[test]
fn test_required_field_with_default_rejected() {
    let mut registry = SchemaRegistry::empty();
    let mut field = FieldDescriptor::required("name", FieldType::String, "");
    field.default = Some(json!("anonymous"));
    let descriptor = KindDescriptor::new("thing", vec![field]);
    assert!(matches!(
        registry.register(descriptor),
        Err(RegistrationError::DefaultOnRequiredField { .. })
    ));
}

#[test]
fn test_optional_field_without_default_rejected() {
    let mut registry = SchemaRegistry::empty();
    let mut field = FieldDescriptor::optional("nick", FieldType::String, Value::Null, "");
    field.default = None;
    let descriptor = KindDescriptor::new("thing", vec![field]);
    assert!(matches!(
        registry.register(descriptor),
        Err(RegistrationError::MissingDefault { .. })
    ));
}

#[test]
fn test_valid_message_fills_defaults() {
    let registry = SchemaRegistry::new().unwrap();
    let normalized = registry
        .validate(
            "message",
            &json!({
                "name": "Jo",
                "email": "jo@example.com",
                "message": "Hi there",
            }),
        )
        .expect("document should validate");

    assert_eq!(normalized["name"], "Jo");
    assert_eq!(normalized["email"], "jo@example.com");
    assert_eq!(normalized["message"], "Hi there");
    assert_eq!(normalized["subject"], Value::Null);
    assert_eq!(normalized["source_page"], Value::Null);
}

#[test]
fn test_message_accumulates_email_and_length_violations() {
    let registry = SchemaRegistry::new().unwrap();
    let found = violations(registry.validate(
        "message",
        &json!({
            "name": "Jo",
            "email": "bad",
            "message": "Hi",
        }),
    ));

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].field, "email");
    assert_eq!(found[0].code, ViolationCode::InvalidEmail);
    assert_eq!(found[1].field, "message");
    assert_eq!(found[1].code, ViolationCode::TooShort);
}

#[test]
fn test_all_missing_required_fields_reported() {
    let registry = SchemaRegistry::new().unwrap();
    let found = violations(registry.validate("user", &json!({})));

    let fields: Vec<_> = found.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "email", "address"]);
    assert!(
        found
            .iter()
            .all(|v| v.code == ViolationCode::MissingRequired)
    );
}

#[test]
fn test_explicit_null_on_required_field_is_missing() {
    let registry = SchemaRegistry::new().unwrap();
    let found = violations(registry.validate(
        "product",
        &json!({
            "title": null,
            "price": 9.99,
            "category": "tools",
        }),
    ));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].field, "title");
    assert_eq!(found[0].code, ViolationCode::MissingRequired);
}

fn user_with_age(age: Value) -> Value {
    json!({
        "name": "Ada",
        "email": "ada@example.com",
        "address": "12 Engine St",
        "age": age,
    })
}

#[test]
fn test_numeric_boundaries_inclusive() {
    let registry = SchemaRegistry::new().unwrap();

    assert!(registry.validate("user", &user_with_age(json!(0))).is_ok());
    assert!(registry.validate("user", &user_with_age(json!(120))).is_ok());

    let below = violations(registry.validate("user", &user_with_age(json!(-1))));
    assert_eq!(below[0].field, "age");
    assert_eq!(below[0].code, ViolationCode::BelowMinimum);

    let above = violations(registry.validate("user", &user_with_age(json!(121))));
    assert_eq!(above[0].field, "age");
    assert_eq!(above[0].code, ViolationCode::AboveMaximum);
}

#[test]
fn test_price_minimum_zero() {
    let registry = SchemaRegistry::new().unwrap();
    let product = |price: Value| {
        json!({
            "title": "Widget",
            "price": price,
            "category": "tools",
        })
    };

    assert!(registry.validate("product", &product(json!(0.0))).is_ok());
    let found = violations(registry.validate("product", &product(json!(-0.01))));
    assert_eq!(found[0].code, ViolationCode::BelowMinimum);
}

fn message_with_body(body: &str) -> Value {
    json!({
        "name": "Jo",
        "email": "jo@example.com",
        "message": body,
    })
}

#[test]
fn test_string_length_boundaries_inclusive() {
    let registry = SchemaRegistry::new().unwrap();

    assert!(registry.validate("message", &message_with_body("12345")).is_ok());

    let short = violations(registry.validate("message", &message_with_body("1234")));
    assert_eq!(short[0].code, ViolationCode::TooShort);

    let exact_max = "x".repeat(5000);
    assert!(
        registry
            .validate("message", &message_with_body(&exact_max))
            .is_ok()
    );

    let long = violations(registry.validate("message", &message_with_body(&"x".repeat(5001))));
    assert_eq!(long[0].code, ViolationCode::TooLong);
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let registry = SchemaRegistry::new().unwrap();
    // Five characters, more than five bytes.
    assert!(registry.validate("message", &message_with_body("héllo")).is_ok());
}

#[test]
fn test_email_grammar() {
    assert!(SchemaRegistry::is_valid_email_format("a@b.com"));
    assert!(SchemaRegistry::is_valid_email_format("jo.doe@mail.example.org"));
    assert!(!SchemaRegistry::is_valid_email_format("not-an-email"));
    assert!(!SchemaRegistry::is_valid_email_format("@example.com"));
    assert!(!SchemaRegistry::is_valid_email_format("jo@"));
    assert!(!SchemaRegistry::is_valid_email_format("jo@nodot"));
    assert!(!SchemaRegistry::is_valid_email_format("jo@example."));
    assert!(!SchemaRegistry::is_valid_email_format("jo@@example.com"));
}

#[test]
fn test_invalid_email_violation() {
    let registry = SchemaRegistry::new().unwrap();
    let found = violations(registry.validate(
        "message",
        &json!({
            "name": "Jo",
            "email": "not-an-email",
            "message": "Hi there",
        }),
    ));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].code, ViolationCode::InvalidEmail);
}

#[test]
fn test_defaults_for_absent_optional_fields() {
    let registry = SchemaRegistry::new().unwrap();
    let normalized = registry
        .validate(
            "user",
            &json!({
                "name": "Ada",
                "email": "ada@example.com",
                "address": "12 Engine St",
            }),
        )
        .unwrap();

    assert_eq!(normalized["age"], Value::Null);
    assert_eq!(normalized["is_active"], json!(true));
}

#[test]
fn test_list_defaults_for_project() {
    let registry = SchemaRegistry::new().unwrap();
    let normalized = registry
        .validate(
            "project",
            &json!({
                "title": "Registry",
                "summary": "A schema registry",
            }),
        )
        .unwrap();

    assert_eq!(normalized["tags"], json!([]));
    assert_eq!(normalized["tech_stack"], json!([]));
    assert_eq!(normalized["role"], Value::Null);
    assert_eq!(normalized["year"], Value::Null);
}

#[test]
fn test_numeric_string_coercion() {
    let registry = SchemaRegistry::new().unwrap();

    let user = registry.validate("user", &user_with_age(json!("42"))).unwrap();
    assert_eq!(user["age"], json!(42));

    let product = registry
        .validate(
            "product",
            &json!({
                "title": "Widget",
                "price": "3.50",
                "category": "tools",
            }),
        )
        .unwrap();
    assert_eq!(product["price"], json!(3.5));
}

#[test]
fn test_boolean_string_coercion() {
    let registry = SchemaRegistry::new().unwrap();
    let normalized = registry
        .validate(
            "user",
            &json!({
                "name": "Ada",
                "email": "ada@example.com",
                "address": "12 Engine St",
                "is_active": "false",
            }),
        )
        .unwrap();
    assert_eq!(normalized["is_active"], json!(false));
}

#[test]
fn test_integer_accepted_for_float_field() {
    let registry = SchemaRegistry::new().unwrap();
    let normalized = registry
        .validate(
            "product",
            &json!({
                "title": "Widget",
                "price": 4,
                "category": "tools",
            }),
        )
        .unwrap();
    assert_eq!(normalized["price"], json!(4));
}

#[test]
fn test_whole_float_accepted_for_integer_field() {
    let registry = SchemaRegistry::new().unwrap();
    let normalized = registry.validate("user", &user_with_age(json!(42.0))).unwrap();
    assert_eq!(normalized["age"], json!(42));
}

#[test]
fn test_wrong_type_violations() {
    let registry = SchemaRegistry::new().unwrap();

    let found = violations(registry.validate("user", &user_with_age(json!("forty-two"))));
    assert_eq!(found[0].field, "age");
    assert_eq!(found[0].code, ViolationCode::WrongType);

    let found = violations(registry.validate(
        "project",
        &json!({
            "title": "Registry",
            "summary": "A schema registry",
            "tags": ["rust", 7],
        }),
    ));
    assert_eq!(found[0].field, "tags");
    assert_eq!(found[0].code, ViolationCode::WrongType);
}

#[test]
fn test_fractional_value_rejected_for_integer_field() {
    let registry = SchemaRegistry::new().unwrap();
    let found = violations(registry.validate("user", &user_with_age(json!(41.5))));
    assert_eq!(found[0].code, ViolationCode::WrongType);
}

#[test]
fn test_unknown_fields_pass_through() {
    let registry = SchemaRegistry::new().unwrap();
    let normalized = registry
        .validate(
            "message",
            &json!({
                "name": "Jo",
                "email": "jo@example.com",
                "message": "Hi there",
                "user_agent": "Mozilla/5.0",
            }),
        )
        .unwrap();
    assert_eq!(normalized["user_agent"], "Mozilla/5.0");
}

#[test]
fn test_non_object_document_rejected() {
    let registry = SchemaRegistry::new().unwrap();
    let found = violations(registry.validate("message", &json!(["not", "an", "object"])));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].code, ViolationCode::WrongType);
}

#[test]
fn test_validation_is_idempotent() {
    let registry = SchemaRegistry::new().unwrap();
    let input = json!({
        "name": "Jo",
        "email": "jo@example.com",
        "message": "Hi there",
        "age_note": "extra field",
    });

    let once = registry.validate("message", &input).unwrap();
    let twice = registry.validate("message", &once).unwrap();
    assert_eq!(once, twice);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn age_within_bounds_always_accepted(age in 0i64..=120) {
            let registry = SchemaRegistry::new().unwrap();
            let normalized = registry
                .validate("user", &user_with_age(json!(age)))
                .unwrap();
            prop_assert_eq!(&normalized["age"], &json!(age));
        }

        #[test]
        fn age_outside_bounds_always_rejected(age in prop_oneof![-1000i64..0, 121i64..2000]) {
            let registry = SchemaRegistry::new().unwrap();
            let found = violations(registry.validate("user", &user_with_age(json!(age))));
            prop_assert_eq!(found.len(), 1);
            let expected = if age < 0 {
                ViolationCode::BelowMinimum
            } else {
                ViolationCode::AboveMaximum
            };
            prop_assert_eq!(found[0].code, expected);
        }

        #[test]
        fn normalization_is_idempotent_for_valid_messages(
            name in "[A-Za-z]{1,16}",
            body in "[A-Za-z ]{5,80}",
        ) {
            let registry = SchemaRegistry::new().unwrap();
            let input = json!({
                "name": name,
                "email": "jo@example.com",
                "message": body,
            });
            let once = registry.validate("message", &input).unwrap();
            let twice = registry.validate("message", &once).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
