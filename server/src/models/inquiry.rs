use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::validation::{
    email, one_of, optional, required, Validate, ValidationErrors, MAX_MESSAGE_LEN, MAX_NAME_LEN,
    MAX_SHORT_TEXT_LEN,
};

/// A contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub user_type: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    Brand,
    Creator,
}

impl UserType {
    pub const ALL: [&'static str; 2] = ["brand", "creator"];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Brand => "brand",
            UserType::Creator => "creator",
        }
    }

    fn from_validated(value: &str) -> Option<Self> {
        match value {
            "brand" => Some(UserType::Brand),
            "creator" => Some(UserType::Creator),
            _ => None,
        }
    }
}

/// Raw request body for `POST /api/inquiries`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InquiryPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub user_type: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub user_type: UserType,
    pub message: String,
}

impl Validate for InquiryPayload {
    type Output = NewInquiry;

    fn validate(self) -> Result<NewInquiry, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = required(&mut errors, "name", self.name, MAX_NAME_LEN);
        let email = email(&mut errors, "email", self.email);
        let company = optional(&mut errors, "company", self.company, MAX_SHORT_TEXT_LEN);
        let user_type = match one_of(&mut errors, "userType", self.user_type, &UserType::ALL) {
            Some(value) => UserType::from_validated(&value),
            None => {
                if !errors.has_field("userType") {
                    errors.add("userType", "is required");
                }
                None
            }
        };
        let message = required(&mut errors, "message", self.message, MAX_MESSAGE_LEN);

        match (name, email, user_type, message) {
            (Some(name), Some(email), Some(user_type), Some(message)) if errors.is_empty() => {
                Ok(NewInquiry {
                    name,
                    email,
                    company,
                    user_type,
                    message,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> InquiryPayload {
        InquiryPayload {
            name: Some("Maya Chen".into()),
            email: Some("Maya@Brand.co".into()),
            company: Some(" ".into()),
            user_type: Some("Brand".into()),
            message: Some("We'd like to run a summer campaign.".into()),
        }
    }

    #[test]
    fn test_valid_inquiry() {
        let inquiry = payload().validate().unwrap();
        assert_eq!(inquiry.email, "maya@brand.co");
        assert_eq!(inquiry.user_type, UserType::Brand);
        assert_eq!(inquiry.company, None);
    }

    #[test]
    fn test_every_missing_field_is_reported() {
        let errors = InquiryPayload::default().validate().unwrap_err();
        for field in ["name", "email", "userType", "message"] {
            assert!(errors.has_field(field), "missing error for {}", field);
        }
        assert!(!errors.has_field("company"));
    }

    #[test]
    fn test_unknown_user_type_rejected() {
        let mut p = payload();
        p.user_type = Some("agency".into());
        let errors = p.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("userType"));
    }
}
