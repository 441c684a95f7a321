//! The multi-step waitlist form.
//!
//! The form is filled in three steps. Which fields the `details` step asks
//! for depends on the chosen interest, and each social platform a creator
//! selects brings its own required handle and follower range. Drafts can be
//! checked step by step; a submission must pass every step.

use serde::Serialize;

use crate::models::{WaitlistPayload, WaitlistSignup};
use crate::validation::{
    email, one_of, optional, required, string_list, Validate, ValidationErrors,
    MAX_LIST_ITEMS, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN,
};

pub const INTERESTS: [&str; 2] = ["brand", "creator"];

pub const FOLLOWER_RANGES: [&str; 7] = [
    "under-1k",
    "1k-10k",
    "10k-50k",
    "50k-100k",
    "100k-500k",
    "500k-1m",
    "1m-plus",
];

pub const BUDGET_RANGES: [&str; 5] = ["under-1k", "1k-5k", "5k-10k", "10k-50k", "50k-plus"];

const MAX_HANDLE_LEN: usize = 64;
const MAX_URL_LEN: usize = 2048;
const MAX_PLATFORM_NAME_ECHO: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStep {
    Basics,
    Details,
    Profile,
}

impl FormStep {
    pub const ALL: [FormStep; 3] = [FormStep::Basics, FormStep::Details, FormStep::Profile];

    fn index(self) -> usize {
        match self {
            FormStep::Basics => 0,
            FormStep::Details => 1,
            FormStep::Profile => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    TikTok,
    YouTube,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Instagram, Platform::TikTok, Platform::YouTube];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::TikTok => "tiktok",
            Platform::YouTube => "youtube",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// JSON names of the handle, follower range and screenshot fields.
    fn field_names(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Platform::Instagram => (
                "instagramHandle",
                "instagramFollowers",
                "instagramScreenshot",
            ),
            Platform::TikTok => ("tiktokHandle", "tiktokFollowers", "tiktokScreenshot"),
            Platform::YouTube => ("youtubeHandle", "youtubeFollowers", "youtubeScreenshot"),
        }
    }
}

#[derive(Debug, Default)]
struct PlatformFields {
    handle: Option<String>,
    followers: Option<String>,
    screenshot: Option<String>,
}

fn take_platform(draft: &mut WaitlistPayload, platform: Platform) -> PlatformFields {
    let (handle, followers, screenshot) = match platform {
        Platform::Instagram => (
            &mut draft.instagram_handle,
            &mut draft.instagram_followers,
            &mut draft.instagram_screenshot,
        ),
        Platform::TikTok => (
            &mut draft.tiktok_handle,
            &mut draft.tiktok_followers,
            &mut draft.tiktok_screenshot,
        ),
        Platform::YouTube => (
            &mut draft.youtube_handle,
            &mut draft.youtube_followers,
            &mut draft.youtube_screenshot,
        ),
    };
    PlatformFields {
        handle: handle.take(),
        followers: followers.take(),
        screenshot: screenshot.take(),
    }
}

fn store_platform(signup: &mut WaitlistSignup, platform: Platform, fields: PlatformFields) {
    let (handle, followers, screenshot) = match platform {
        Platform::Instagram => (
            &mut signup.instagram_handle,
            &mut signup.instagram_followers,
            &mut signup.instagram_screenshot,
        ),
        Platform::TikTok => (
            &mut signup.tiktok_handle,
            &mut signup.tiktok_followers,
            &mut signup.tiktok_screenshot,
        ),
        Platform::YouTube => (
            &mut signup.youtube_handle,
            &mut signup.youtube_followers,
            &mut signup.youtube_screenshot,
        ),
    };
    *handle = fields.handle;
    *followers = fields.followers;
    *screenshot = fields.screenshot;
}

fn url(errors: &mut ValidationErrors, field: &str, value: Option<String>) -> Option<String> {
    let value = optional(errors, field, value, MAX_URL_LEN)?;
    let lower = value.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Some(value)
    } else {
        errors.add(field, "must be an http(s) URL");
        None
    }
}

/// Validates the whole draft, keeping the errors of each step apart.
fn check(mut draft: WaitlistPayload) -> (WaitlistSignup, [ValidationErrors; 3]) {
    let mut steps: [ValidationErrors; 3] = Default::default();
    let mut signup = WaitlistSignup::default();

    // basics
    {
        let errors = &mut steps[FormStep::Basics.index()];
        signup.name = required(errors, "name", draft.name.take(), MAX_NAME_LEN).unwrap_or_default();
        signup.email = email(errors, "email", draft.email.take()).unwrap_or_default();
        signup.interest = one_of(errors, "interest", draft.interest.take(), &INTERESTS);
    }
    let interest = signup.interest.clone();

    // details
    {
        let errors = &mut steps[FormStep::Details.index()];
        let is_brand = interest.as_deref() == Some("brand");
        let is_creator = interest.as_deref() == Some("creator");

        if !is_creator {
            signup.company = if is_brand {
                required(errors, "company", draft.company.take(), MAX_SHORT_TEXT_LEN)
            } else {
                optional(errors, "company", draft.company.take(), MAX_SHORT_TEXT_LEN)
            };
            signup.role = optional(errors, "role", draft.role.take(), MAX_SHORT_TEXT_LEN);
            signup.budget = one_of(errors, "budget", draft.budget.take(), &BUDGET_RANGES);
            signup.website = url(errors, "website", draft.website.take());
        }

        if !is_brand {
            let mut selected: Vec<Platform> = Vec::new();
            let mut unknown = false;
            for (i, raw) in draft.platforms.take().unwrap_or_default().into_iter().enumerate() {
                if i == MAX_LIST_ITEMS {
                    errors.add(
                        "platforms",
                        format!("must have at most {} entries", MAX_LIST_ITEMS),
                    );
                    break;
                }
                let raw = raw.trim();
                if raw.is_empty() {
                    continue;
                }
                match Platform::parse(raw) {
                    Some(p) if !selected.contains(&p) => selected.push(p),
                    Some(_) => {}
                    // one error is enough; the name is echoed back shortened
                    None if !unknown => {
                        let name: String = raw.chars().take(MAX_PLATFORM_NAME_ECHO).collect();
                        errors.add("platforms", format!("unknown platform '{}'", name));
                        unknown = true;
                    }
                    None => {}
                }
            }
            if is_creator && selected.is_empty() && !errors.has_field("platforms") {
                errors.add("platforms", "select at least one platform");
            }

            for platform in Platform::ALL {
                let fields = take_platform(&mut draft, platform);
                if !selected.contains(&platform) {
                    continue;
                }
                let (handle_field, followers_field, screenshot_field) = platform.field_names();
                let handle = optional(errors, handle_field, fields.handle, MAX_HANDLE_LEN)
                    .map(|h| h.trim_start_matches('@').to_string())
                    .filter(|h| !h.is_empty());
                if handle.is_none() && !errors.has_field(handle_field) {
                    errors.add(handle_field, "is required");
                }
                let followers = one_of(errors, followers_field, fields.followers, &FOLLOWER_RANGES);
                if followers.is_none() && !errors.has_field(followers_field) {
                    errors.add(followers_field, "is required");
                }
                let screenshot = url(errors, screenshot_field, fields.screenshot);
                store_platform(
                    &mut signup,
                    platform,
                    PlatformFields {
                        handle,
                        followers,
                        screenshot,
                    },
                );
            }
            signup.platforms = selected.iter().map(|p| p.as_str().to_string()).collect();
        }
    }

    // profile
    {
        let errors = &mut steps[FormStep::Profile.index()];
        signup.niches = string_list(errors, "niches", draft.niches.take(), MAX_SHORT_TEXT_LEN);
        if interest.as_deref() == Some("creator") && signup.niches.is_empty() {
            errors.add("niches", "select at least one niche");
        }
        signup.languages =
            string_list(errors, "languages", draft.languages.take(), MAX_SHORT_TEXT_LEN);
        signup.location = optional(errors, "location", draft.location.take(), MAX_SHORT_TEXT_LEN);
    }

    (signup, steps)
}

/// Field errors the given step would show for `draft`.
pub fn validate_step(step: FormStep, draft: &WaitlistPayload) -> ValidationErrors {
    let (_, mut steps) = check(draft.clone());
    std::mem::take(&mut steps[step.index()])
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormProgress {
    /// First step that still has errors; `None` once the form is complete.
    pub current_step: Option<FormStep>,
    pub completed_steps: usize,
    pub total_steps: usize,
    pub percent: u8,
    /// Errors of `current_step`.
    pub errors: ValidationErrors,
}

impl FormProgress {
    pub fn is_complete(&self) -> bool {
        self.current_step.is_none()
    }
}

/// Steps are completed in order, so progress stops at the first failing step.
pub fn progress(draft: &WaitlistPayload) -> FormProgress {
    let (_, steps) = check(draft.clone());
    let total_steps = FormStep::ALL.len();

    let mut completed_steps = 0;
    let mut current = None;
    for (step, errors) in FormStep::ALL.into_iter().zip(steps) {
        if errors.is_empty() {
            completed_steps += 1;
        } else {
            current = Some((step, errors));
            break;
        }
    }

    let (current_step, errors) = match current {
        Some((step, errors)) => (Some(step), errors),
        None => (None, ValidationErrors::default()),
    };

    FormProgress {
        current_step,
        completed_steps,
        total_steps,
        percent: (completed_steps * 100 / total_steps) as u8,
        errors,
    }
}

impl Validate for WaitlistPayload {
    type Output = WaitlistSignup;

    fn validate(self) -> Result<WaitlistSignup, ValidationErrors> {
        let (signup, steps) = check(self);
        let mut errors = ValidationErrors::default();
        for step_errors in steps {
            errors.extend(step_errors);
        }
        errors.into_result(signup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creator_draft() -> WaitlistPayload {
        WaitlistPayload {
            name: Some("Lena Ortiz".into()),
            email: Some("lena@example.com".into()),
            interest: Some("creator".into()),
            platforms: Some(vec!["Instagram".into(), "tiktok".into()]),
            instagram_handle: Some("@lena.makes".into()),
            instagram_followers: Some("10k-50k".into()),
            tiktok_handle: Some("lenamakes".into()),
            tiktok_followers: Some("1k-10k".into()),
            youtube_handle: Some("ignored".into()),
            niches: Some(vec!["Crafts".into()]),
            languages: Some(vec!["English".into(), "Spanish".into()]),
            ..Default::default()
        }
    }

    fn brand_draft() -> WaitlistPayload {
        WaitlistPayload {
            name: Some("Omar".into()),
            email: Some("omar@glowco.com".into()),
            interest: Some("brand".into()),
            company: Some("GlowCo".into()),
            budget: Some("5k-10k".into()),
            instagram_handle: Some("glowco".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_creator_submission() {
        let signup = creator_draft().validate().unwrap();
        assert_eq!(signup.platforms, vec!["instagram", "tiktok"]);
        assert_eq!(signup.instagram_handle.as_deref(), Some("lena.makes"));
        assert_eq!(signup.tiktok_followers.as_deref(), Some("1k-10k"));
        // unselected platform fields are dropped
        assert_eq!(signup.youtube_handle, None);
        assert_eq!(signup.company, None);
    }

    #[test]
    fn test_selected_platform_requires_its_fields() {
        let mut draft = creator_draft();
        draft.tiktok_handle = None;
        draft.tiktok_followers = Some("lots".into());

        let errors = draft.validate().unwrap_err();
        assert!(errors.has_field("tiktokHandle"));
        assert!(errors.has_field("tiktokFollowers"));
        assert!(!errors.has_field("instagramHandle"));
        assert!(!errors.has_field("youtubeHandle"));
    }

    #[test]
    fn test_missing_follower_range_is_required() {
        let mut draft = creator_draft();
        draft.instagram_followers = None;
        let errors = validate_step(FormStep::Details, &draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("instagramFollowers"));
    }

    #[test]
    fn test_creator_needs_platform_and_niche() {
        let mut draft = creator_draft();
        draft.platforms = Some(vec![]);
        draft.niches = None;
        let errors = draft.validate().unwrap_err();
        assert!(errors.has_field("platforms"));
        assert!(errors.has_field("niches"));
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let mut draft = creator_draft();
        draft.platforms = Some(vec!["myspace".into()]);
        let errors = validate_step(FormStep::Details, &draft);
        assert!(errors.has_field("platforms"));
    }

    #[test]
    fn test_many_unknown_platforms_give_bounded_errors() {
        let mut draft = creator_draft();
        let mut platforms: Vec<String> = (0..100_000).map(|i| format!("site{}", i)).collect();
        platforms.insert(0, "x".repeat(10_000));
        draft.platforms = Some(platforms);

        let errors = validate_step(FormStep::Details, &draft);
        let platform_errors: Vec<_> = errors.iter().filter(|e| e.field == "platforms").collect();
        assert_eq!(platform_errors.len(), 2);
        assert!(platform_errors[0].message.len() < 64);
        assert_eq!(
            platform_errors[1].message,
            format!("must have at most {} entries", MAX_LIST_ITEMS)
        );
    }

    #[test]
    fn test_long_niche_list_is_rejected_once() {
        let mut draft = creator_draft();
        draft.niches = Some((0..200_000).map(|i| format!("niche{}", i)).collect());

        let errors = validate_step(FormStep::Profile, &draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("niches"));
    }

    #[test]
    fn test_brand_submission_drops_creator_fields() {
        let signup = brand_draft().validate().unwrap();
        assert_eq!(signup.company.as_deref(), Some("GlowCo"));
        assert_eq!(signup.budget.as_deref(), Some("5k-10k"));
        assert!(signup.platforms.is_empty());
        assert_eq!(signup.instagram_handle, None);
    }

    #[test]
    fn test_brand_requires_company() {
        let mut draft = brand_draft();
        draft.company = None;
        draft.website = Some("glowco.com".into());
        let errors = validate_step(FormStep::Details, &draft);
        assert!(errors.has_field("company"));
        assert!(errors.has_field("website"));
    }

    #[test]
    fn test_progress_of_empty_draft() {
        let progress = progress(&WaitlistPayload::default());
        assert_eq!(progress.current_step, Some(FormStep::Basics));
        assert_eq!(progress.completed_steps, 0);
        assert_eq!(progress.total_steps, 3);
        assert_eq!(progress.percent, 0);
        assert!(progress.errors.has_field("name"));
        assert!(progress.errors.has_field("email"));
    }

    #[test]
    fn test_progress_stops_at_first_failing_step() {
        let mut draft = creator_draft();
        draft.niches = None;
        let p = progress(&draft);
        assert_eq!(p.current_step, Some(FormStep::Profile));
        assert_eq!(p.completed_steps, 2);
        assert_eq!(p.percent, 66);

        let done = progress(&creator_draft());
        assert!(done.is_complete());
        assert_eq!(done.percent, 100);
        assert!(done.errors.is_empty());
    }

    #[test]
    fn test_no_interest_keeps_optional_fields() {
        let draft = WaitlistPayload {
            name: Some("Kim".into()),
            email: Some("kim@example.com".into()),
            company: Some("Side Project".into()),
            ..Default::default()
        };
        let signup = draft.validate().unwrap();
        assert_eq!(signup.interest, None);
        assert_eq!(signup.company.as_deref(), Some("Side Project"));
    }
}
