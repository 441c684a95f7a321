//! Request payload validation.
//!
//! Payloads are deserialized with every field optional so that all problems
//! can be reported in one response, then converted into strongly-typed
//! values through [`Validate`].

use std::collections::HashSet;
use std::fmt;

use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::utils::error::AppError;

pub const MAX_NAME_LEN: usize = 120;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_SHORT_TEXT_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 5000;
pub const MAX_LIST_ITEMS: usize = 20;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.fields.extend(other.fields);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.fields.iter()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|e| e.field == field)
    }

    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn to_details(&self) -> Value {
        json!({ "fields": self.fields })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for e in &self.fields {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// Converts a loosely-typed payload into its validated form.
pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output, ValidationErrors>;
}

/// Trims `value`; blank values become `None`.
pub fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn required(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    max_len: usize,
) -> Option<String> {
    match clean(value) {
        None => {
            errors.add(field, "is required");
            None
        }
        Some(v) => check_len(errors, field, v, max_len),
    }
}

pub fn optional(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    max_len: usize,
) -> Option<String> {
    clean(value).and_then(|v| check_len(errors, field, v, max_len))
}

fn check_len(
    errors: &mut ValidationErrors,
    field: &str,
    value: String,
    max_len: usize,
) -> Option<String> {
    if value.chars().count() > max_len {
        errors.add(field, format!("must be at most {} characters", max_len));
        None
    } else {
        Some(value)
    }
}

pub fn is_valid_email(value: &str) -> bool {
    value.len() <= MAX_EMAIL_LEN && EMAIL_RE.is_match(value)
}

/// Required email, normalised to lowercase.
pub fn email(errors: &mut ValidationErrors, field: &str, value: Option<String>) -> Option<String> {
    let value = required(errors, field, value, MAX_EMAIL_LEN)?;
    if is_valid_email(&value) {
        Some(value.to_lowercase())
    } else {
        errors.add(field, "must be a valid email address");
        None
    }
}

/// Lowercased value that must be one of `allowed`.
pub fn one_of(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    allowed: &[&str],
) -> Option<String> {
    let value = clean(value)?.to_lowercase();
    if allowed.contains(&value.as_str()) {
        Some(value)
    } else {
        errors.add(field, format!("must be one of: {}", allowed.join(", ")));
        None
    }
}

/// Trimmed, de-duplicated list with blanks dropped.
///
/// Reading stops at the first entry past [`MAX_LIST_ITEMS`].
pub fn string_list(
    errors: &mut ValidationErrors,
    field: &str,
    values: Option<Vec<String>>,
    max_len: usize,
) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut too_long = false;
    for value in values.unwrap_or_default() {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if value.chars().count() > max_len {
            if !too_long {
                errors.add(field, format!("entries must be at most {} characters", max_len));
                too_long = true;
            }
            continue;
        }
        if !seen.insert(value.to_ascii_lowercase()) {
            continue;
        }
        if out.len() == MAX_LIST_ITEMS {
            errors.add(field, format!("must have at most {} entries", MAX_LIST_ITEMS));
            break;
        }
        out.push(value.to_string());
    }
    out
}

/// JSON body extractor that runs [`Validate`] on the payload.
///
/// Malformed bodies and schema violations both surface as 400 responses.
pub struct ValidatedJson<P: Validate>(pub P::Output);

#[async_trait]
impl<S, P> FromRequest<S> for ValidatedJson<P>
where
    S: Send + Sync,
    P: Validate + DeserializeOwned + Send,
    P::Output: Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<P>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::ValidationError(rejection.body_text()))?;

        payload
            .validate()
            .map(ValidatedJson)
            .map_err(AppError::InvalidFields)
    }
}
