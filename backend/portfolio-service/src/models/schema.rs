//! Insert schemas for the portfolio entities.
//!
//! Every insertable type declares its fields as a static table of
//! [`FieldRule`]s. [`validate_insert`] checks a raw JSON payload against that
//! table, collects every violation, and only then deserializes the accepted
//! fields into the typed record. Keys that are not in the table (`id`,
//! `submittedAt`, anything else) are dropped.
//!
//! Violation codes and messages follow the shape the frontend already
//! understands (`invalid_type`, `invalid_enum_value`, `too_small`, `too_big`).

use super::{
    AspectRatio, MediaType, NewBlogPost, NewContactSubmission, NewMediaItem,
    NewTimelineMilestone,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use utoipa::ToSchema;

/// Semantic type of a payload field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    /// 32-bit signed integer; `60` and `60.0` are both accepted
    Integer,
    /// String restricted to a fixed set of values
    Enum(&'static [&'static str]),
}

impl FieldType {
    fn expected(&self) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::Integer => "integer".to_string(),
            Self::Enum(options) => quoted_options(options),
        }
    }
}

/// One field of an insert schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub field_type: FieldType,
    /// Nullable fields may be omitted or sent as `null`
    pub nullable: bool,
}

impl FieldRule {
    pub const fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            nullable: false,
        }
    }

    pub const fn nullable(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            nullable: true,
        }
    }

    /// Check a single field, returning the normalized value to deserialize.
    fn check(&self, value: Option<&Value>) -> Result<Value, FieldViolation> {
        let value = match value {
            None | Some(Value::Null) if self.nullable => return Ok(Value::Null),
            None => return Err(FieldViolation::required(self)),
            Some(value) => value,
        };

        match self.field_type {
            FieldType::String => match value {
                Value::String(_) => Ok(value.clone()),
                other => Err(FieldViolation::invalid_type(self, json_type_name(other))),
            },
            FieldType::Integer => self.check_integer(value),
            FieldType::Enum(options) => match value {
                Value::String(s) if options.contains(&s.as_str()) => Ok(value.clone()),
                Value::String(s) => Err(FieldViolation::invalid_enum(self, options, s)),
                other => Err(FieldViolation::invalid_type(self, json_type_name(other))),
            },
        }
    }

    fn check_integer(&self, value: &Value) -> Result<Value, FieldViolation> {
        let Value::Number(number) = value else {
            return Err(FieldViolation::invalid_type(self, json_type_name(value)));
        };

        let integer = match number.as_i64() {
            Some(integer) => integer,
            None => {
                let float = number.as_f64().unwrap_or(f64::NAN);
                if !float.is_finite() || float.fract() != 0.0 {
                    return Err(FieldViolation::invalid_type(self, "float"));
                }
                if float < f64::from(i32::MIN) {
                    return Err(FieldViolation::too_small(self));
                }
                if float > f64::from(i32::MAX) {
                    return Err(FieldViolation::too_big(self));
                }
                float as i64
            }
        };

        if integer < i64::from(i32::MIN) {
            Err(FieldViolation::too_small(self))
        } else if integer > i64::from(i32::MAX) {
            Err(FieldViolation::too_big(self))
        } else {
            Ok(Value::from(integer))
        }
    }
}

/// Machine-readable violation code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    InvalidType,
    InvalidEnumValue,
    TooSmall,
    TooBig,
    InvalidJson,
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    pub code: ViolationCode,
    /// Field path; empty when the payload as a whole is rejected
    pub path: Vec<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl FieldViolation {
    /// Top-level field this violation refers to, if any
    pub fn field(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self {
            code: ViolationCode::InvalidJson,
            path: Vec::new(),
            message: message.into(),
            expected: None,
            received: None,
            options: None,
        }
    }

    fn not_an_object(value: &Value) -> Self {
        let received = json_type_name(value);
        Self {
            code: ViolationCode::InvalidType,
            path: Vec::new(),
            message: format!("Expected object, received {received}"),
            expected: Some("object".to_string()),
            received: Some(received.to_string()),
            options: None,
        }
    }

    fn required(rule: &FieldRule) -> Self {
        Self {
            code: ViolationCode::InvalidType,
            path: vec![rule.name.to_string()],
            message: "Required".to_string(),
            expected: Some(rule.field_type.expected()),
            received: Some("undefined".to_string()),
            options: None,
        }
    }

    fn invalid_type(rule: &FieldRule, received: &str) -> Self {
        let expected = rule.field_type.expected();
        Self {
            code: ViolationCode::InvalidType,
            path: vec![rule.name.to_string()],
            message: format!("Expected {expected}, received {received}"),
            expected: Some(expected),
            received: Some(received.to_string()),
            options: None,
        }
    }

    fn invalid_enum(rule: &FieldRule, options: &[&str], received: &str) -> Self {
        Self {
            code: ViolationCode::InvalidEnumValue,
            path: vec![rule.name.to_string()],
            message: format!(
                "Invalid enum value. Expected {}, received '{received}'",
                quoted_options(options)
            ),
            expected: None,
            received: Some(received.to_string()),
            options: Some(options.iter().map(|o| o.to_string()).collect()),
        }
    }

    fn too_small(rule: &FieldRule) -> Self {
        Self {
            code: ViolationCode::TooSmall,
            path: vec![rule.name.to_string()],
            message: format!("Number must be greater than or equal to {}", i32::MIN),
            expected: None,
            received: None,
            options: None,
        }
    }

    fn too_big(rule: &FieldRule) -> Self {
        Self {
            code: ViolationCode::TooBig,
            path: vec![rule.name.to_string()],
            message: format!("Number must be less than or equal to {}", i32::MAX),
            expected: None,
            received: None,
            options: None,
        }
    }
}

/// Which entity collection a payload targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    BlogPost,
    TimelineMilestone,
    MediaItem,
    ContactSubmission,
}

impl EntityKind {
    /// Error message returned alongside the violation details
    pub fn invalid_message(self) -> &'static str {
        match self {
            Self::BlogPost => "Invalid blog post data",
            Self::TimelineMilestone => "Invalid milestone data",
            Self::MediaItem => "Invalid media item data",
            Self::ContactSubmission => "Invalid contact submission data",
        }
    }

    /// Collection label used in logs and metrics
    pub fn collection(self) -> &'static str {
        match self {
            Self::BlogPost => "blog",
            Self::TimelineMilestone => "timeline",
            Self::MediaItem => "media",
            Self::ContactSubmission => "contact",
        }
    }

    pub fn rules(self) -> &'static [FieldRule] {
        match self {
            Self::BlogPost => NewBlogPost::RULES,
            Self::TimelineMilestone => NewTimelineMilestone::RULES,
            Self::MediaItem => NewMediaItem::RULES,
            Self::ContactSubmission => NewContactSubmission::RULES,
        }
    }

    /// Validate a raw payload for this kind into its insertable record.
    pub fn validate(self, raw: &Value) -> Result<InsertableRecord, ValidationError> {
        Ok(match self {
            Self::BlogPost => InsertableRecord::BlogPost(validate_insert(raw)?),
            Self::TimelineMilestone => InsertableRecord::TimelineMilestone(validate_insert(raw)?),
            Self::MediaItem => InsertableRecord::MediaItem(validate_insert(raw)?),
            Self::ContactSubmission => InsertableRecord::ContactSubmission(validate_insert(raw)?),
        })
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BlogPost => "blog post",
            Self::TimelineMilestone => "milestone",
            Self::MediaItem => "media item",
            Self::ContactSubmission => "contact submission",
        };
        f.write_str(name)
    }
}

/// A validated payload, tagged by entity kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertableRecord {
    BlogPost(NewBlogPost),
    TimelineMilestone(NewTimelineMilestone),
    MediaItem(NewMediaItem),
    ContactSubmission(NewContactSubmission),
}

/// Payload rejected by an insert schema
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} payload ({} violation(s))", .violations.len())]
pub struct ValidationError {
    pub kind: EntityKind,
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(kind: EntityKind, violations: Vec<FieldViolation>) -> Self {
        Self { kind, violations }
    }

    pub fn message(&self) -> &'static str {
        self.kind.invalid_message()
    }

    /// Whether any violation points at `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field() == Some(field))
    }
}

/// Insertable record with a declarative schema
pub trait Insertable: DeserializeOwned {
    const KIND: EntityKind;
    const RULES: &'static [FieldRule];
}

impl Insertable for NewBlogPost {
    const KIND: EntityKind = EntityKind::BlogPost;
    const RULES: &'static [FieldRule] = &[
        FieldRule::required("title", FieldType::String),
        FieldRule::required("excerpt", FieldType::String),
        FieldRule::required("content", FieldType::String),
        FieldRule::required("tempo", FieldType::String),
        FieldRule::required("tempoValue", FieldType::Integer),
        FieldRule::nullable("imageUrl", FieldType::String),
        FieldRule::required("readTime", FieldType::Integer),
        FieldRule::required("publishedAt", FieldType::String),
    ];
}

impl Insertable for NewTimelineMilestone {
    const KIND: EntityKind = EntityKind::TimelineMilestone;
    const RULES: &'static [FieldRule] = &[
        FieldRule::required("company", FieldType::String),
        FieldRule::required("role", FieldType::String),
        FieldRule::required("startDate", FieldType::String),
        FieldRule::nullable("endDate", FieldType::String),
        FieldRule::required("impact", FieldType::String),
        FieldRule::required("insight", FieldType::String),
        FieldRule::nullable("logoUrl", FieldType::String),
        FieldRule::required("order", FieldType::Integer),
    ];
}

impl Insertable for NewMediaItem {
    const KIND: EntityKind = EntityKind::MediaItem;
    const RULES: &'static [FieldRule] = &[
        FieldRule::required("title", FieldType::String),
        FieldRule::nullable("description", FieldType::String),
        FieldRule::required("type", FieldType::Enum(MediaType::VALUES)),
        FieldRule::required("url", FieldType::String),
        FieldRule::nullable("musicalKey", FieldType::String),
        FieldRule::nullable("mood", FieldType::String),
        FieldRule::nullable("thumbnailUrl", FieldType::String),
        FieldRule::nullable("aspectRatio", FieldType::Enum(AspectRatio::VALUES)),
    ];
}

impl Insertable for NewContactSubmission {
    const KIND: EntityKind = EntityKind::ContactSubmission;
    const RULES: &'static [FieldRule] = &[
        FieldRule::required("name", FieldType::String),
        FieldRule::required("email", FieldType::String),
        FieldRule::required("message", FieldType::String),
    ];
}

/// Validate `raw` against the schema of `T`.
///
/// Pure: the payload is never modified and nothing outside the schema is
/// consulted, so it is safe to call speculatively.
pub fn validate_insert<T: Insertable>(raw: &Value) -> Result<T, ValidationError> {
    let Some(object) = raw.as_object() else {
        return Err(ValidationError::new(
            T::KIND,
            vec![FieldViolation::not_an_object(raw)],
        ));
    };

    let mut accepted = Map::with_capacity(T::RULES.len());
    let mut violations = Vec::new();
    for rule in T::RULES {
        match rule.check(object.get(rule.name)) {
            Ok(value) => {
                accepted.insert(rule.name.to_string(), value);
            }
            Err(violation) => violations.push(violation),
        }
    }

    if !violations.is_empty() {
        return Err(ValidationError::new(T::KIND, violations));
    }

    serde_json::from_value(Value::Object(accepted)).map_err(|err| {
        ValidationError::new(
            T::KIND,
            vec![FieldViolation {
                code: ViolationCode::InvalidType,
                path: Vec::new(),
                message: err.to_string(),
                expected: None,
                received: None,
                options: None,
            }],
        )
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn quoted_options(options: &[&str]) -> String {
    options
        .iter()
        .map(|o| format!("'{o}'"))
        .collect::<Vec<_>>()
        .join(" | ")
}
