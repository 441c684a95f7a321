use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored waitlist signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: Uuid,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub signup: WaitlistSignup,
    pub created_at: DateTime<Utc>,
}

/// Validated waitlist data, brand- or creator-flavoured.
///
/// Per-platform fields are only set for platforms listed in `platforms`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistSignup {
    pub name: String,
    pub email: String,
    pub interest: Option<String>,

    pub company: Option<String>,
    pub role: Option<String>,
    pub budget: Option<String>,
    pub website: Option<String>,

    pub platforms: Vec<String>,
    pub instagram_handle: Option<String>,
    pub instagram_followers: Option<String>,
    pub instagram_screenshot: Option<String>,
    pub tiktok_handle: Option<String>,
    pub tiktok_followers: Option<String>,
    pub tiktok_screenshot: Option<String>,
    pub youtube_handle: Option<String>,
    pub youtube_followers: Option<String>,
    pub youtube_screenshot: Option<String>,

    pub niches: Vec<String>,
    pub languages: Vec<String>,
    pub location: Option<String>,
}

/// Raw body of the waitlist form; also used for partially filled drafts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaitlistPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub interest: Option<String>,

    pub company: Option<String>,
    pub role: Option<String>,
    pub budget: Option<String>,
    pub website: Option<String>,

    pub platforms: Option<Vec<String>>,
    pub instagram_handle: Option<String>,
    pub instagram_followers: Option<String>,
    pub instagram_screenshot: Option<String>,
    pub tiktok_handle: Option<String>,
    pub tiktok_followers: Option<String>,
    pub tiktok_screenshot: Option<String>,
    pub youtube_handle: Option<String>,
    pub youtube_followers: Option<String>,
    pub youtube_screenshot: Option<String>,

    pub niches: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub location: Option<String>,
}

/// Admin dashboard counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistSummary {
    pub total: usize,
    pub brands: usize,
    pub creators: usize,
    pub unspecified: usize,
}

impl WaitlistSummary {
    pub fn from_entries(entries: &[WaitlistEntry]) -> Self {
        entries
            .iter()
            .fold(Self::default(), |mut summary, entry| {
                summary.total += 1;
                match entry.signup.interest.as_deref() {
                    Some("brand") => summary.brands += 1,
                    Some("creator") => summary.creators += 1,
                    _ => summary.unspecified += 1,
                }
                summary
            })
    }
}
