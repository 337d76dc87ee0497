//! Built-in record kind declarations.
//!
//! These descriptors are compiled into the library so a registry works
//! without any external schema files. They cover the collections the
//! external viewer tool manages out of the box: users, products, portfolio
//! projects, and contact messages.
//!
//! Declarations are plain literal data fed through the builder API; the
//! registry checks the declaration invariants once at registration.

use super::types::{FieldDescriptor, FieldType, KindDescriptor};
use serde_json::{Value, json};

/// Users collection. Collection name: "user".
pub fn user_kind() -> KindDescriptor {
    KindDescriptor::new(
        "user",
        vec![
            FieldDescriptor::required("name", FieldType::String, "Full name"),
            FieldDescriptor::required("email", FieldType::String, "Email address"),
            FieldDescriptor::required("address", FieldType::String, "Address"),
            FieldDescriptor::optional("age", FieldType::Integer, Value::Null, "Age in years")
                .with_minimum(0.0)
                .with_maximum(120.0),
            FieldDescriptor::optional(
                "is_active",
                FieldType::Boolean,
                json!(true),
                "Whether user is active",
            ),
        ],
    )
}

/// Products collection. Collection name: "product".
pub fn product_kind() -> KindDescriptor {
    KindDescriptor::new(
        "product",
        vec![
            FieldDescriptor::required("title", FieldType::String, "Product title"),
            FieldDescriptor::optional(
                "description",
                FieldType::String,
                Value::Null,
                "Product description",
            ),
            FieldDescriptor::required("price", FieldType::Float, "Price in dollars")
                .with_minimum(0.0),
            FieldDescriptor::required("category", FieldType::String, "Product category"),
            FieldDescriptor::optional(
                "in_stock",
                FieldType::Boolean,
                json!(true),
                "Whether product is in stock",
            ),
        ],
    )
}

/// Portfolio projects. Collection name: "project".
pub fn project_kind() -> KindDescriptor {
    KindDescriptor::new(
        "project",
        vec![
            FieldDescriptor::required("title", FieldType::String, "Project title"),
            FieldDescriptor::required(
                "summary",
                FieldType::String,
                "Short description of the project",
            ),
            FieldDescriptor::optional("tags", FieldType::StringList, json!([]), "Keywords/skills"),
            FieldDescriptor::optional(
                "tech_stack",
                FieldType::StringList,
                json!([]),
                "Technologies used",
            ),
            FieldDescriptor::optional(
                "role",
                FieldType::String,
                Value::Null,
                "Your role on the project",
            ),
            FieldDescriptor::optional(
                "outcomes",
                FieldType::String,
                Value::Null,
                "Impact, metrics, or results",
            ),
            FieldDescriptor::optional(
                "image_url",
                FieldType::String,
                Value::Null,
                "Preview image URL",
            ),
            FieldDescriptor::optional(
                "repo_url",
                FieldType::String,
                Value::Null,
                "Source code repository URL",
            ),
            FieldDescriptor::optional(
                "demo_url",
                FieldType::String,
                Value::Null,
                "Live demo or report link",
            ),
            FieldDescriptor::optional("year", FieldType::Integer, Value::Null, "Year completed"),
        ],
    )
}

/// Contact messages from the portfolio. Collection name: "message".
pub fn message_kind() -> KindDescriptor {
    KindDescriptor::new(
        "message",
        vec![
            FieldDescriptor::required("name", FieldType::String, "Sender name"),
            FieldDescriptor::required("email", FieldType::Email, "Sender email"),
            FieldDescriptor::optional("subject", FieldType::String, Value::Null, "Subject line"),
            FieldDescriptor::required("message", FieldType::String, "Message body")
                .with_min_length(5)
                .with_max_length(5000),
            FieldDescriptor::optional(
                "source_page",
                FieldType::String,
                Value::Null,
                "Where the message was sent from",
            ),
        ],
    )
}

/// All built-in kinds, in declaration order.
pub fn builtin_kinds() -> Vec<KindDescriptor> {
    vec![user_kind(), product_kind(), project_kind(), message_kind()]
}
