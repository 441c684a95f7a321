use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A creator profile shown in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub id: Uuid,
    pub name: String,
    pub bio: String,
    pub location: String,
    pub category: String,
    pub platforms: Vec<String>,
    pub followers: i64,
    /// Percent, e.g. `4.8`.
    pub engagement_rate: f64,
    pub created_at: DateTime<Utc>,
}

/// Directory filters taken from the query string. Matching is case-insensitive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatorFilter {
    pub category: Option<String>,
    pub platform: Option<String>,
}

impl CreatorFilter {
    pub fn is_empty(&self) -> bool {
        self.category().is_none() && self.platform().is_none()
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }

    fn platform(&self) -> Option<&str> {
        self.platform.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }

    pub fn matches(&self, creator: &Creator) -> bool {
        let category_ok = self
            .category()
            .map_or(true, |c| creator.category.eq_ignore_ascii_case(c));
        let platform_ok = self.platform().map_or(true, |p| {
            creator.platforms.iter().any(|cp| cp.eq_ignore_ascii_case(p))
        });
        category_ok && platform_ok
    }

    pub fn apply(&self, creators: Vec<Creator>) -> Vec<Creator> {
        if self.is_empty() {
            return creators;
        }
        creators.into_iter().filter(|c| self.matches(c)).collect()
    }
}
