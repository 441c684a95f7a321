use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// A past collaboration shown as a success story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: Uuid,
    pub brand_name: String,
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
    pub platform: String,
    pub category: String,
    /// Free-form headline numbers, e.g. `reach -> "2.4M"`.
    pub metrics: Json<BTreeMap<String, String>>,
    pub testimonial: Option<String>,
    pub client_name: Option<String>,
    pub client_role: Option<String>,
    /// 1 to 5 stars.
    pub rating: Option<i16>,
    pub created_at: DateTime<Utc>,
}
