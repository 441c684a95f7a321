use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{seed, Storage, StorageError};
use crate::models::{Campaign, Creator, Inquiry, NewInquiry, WaitlistEntry, WaitlistSignup};

/// In-process store. Records keep insertion order; waitlist emails are tracked in a set.
pub struct MemStorage {
    creators: RwLock<Vec<Creator>>,
    campaigns: RwLock<Vec<Campaign>>,
    inquiries: RwLock<Vec<Inquiry>>,
    waitlist: RwLock<Waitlist>,
}

#[derive(Default)]
struct Waitlist {
    entries: Vec<WaitlistEntry>,
    emails: HashSet<String>,
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStorage {
    /// Store preloaded with the sample creators and campaigns.
    pub fn new() -> Self {
        Self::with_records(seed::creators(), seed::campaigns())
    }

    pub fn empty() -> Self {
        Self::with_records(Vec::new(), Vec::new())
    }

    pub fn with_records(creators: Vec<Creator>, campaigns: Vec<Campaign>) -> Self {
        tracing::debug!(
            creators = creators.len(),
            campaigns = campaigns.len(),
            "In-memory storage initialised"
        );
        Self {
            creators: RwLock::new(creators),
            campaigns: RwLock::new(campaigns),
            inquiries: RwLock::new(Vec::new()),
            waitlist: RwLock::new(Waitlist::default()),
        }
    }
}

#[async_trait]
impl Storage for MemStorage {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list_creators(&self) -> Result<Vec<Creator>, StorageError> {
        let mut creators = self.creators.read().await.clone();
        creators.sort_by(|a, b| {
            b.followers
                .cmp(&a.followers)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(creators)
    }

    async fn list_campaigns(&self) -> Result<Vec<Campaign>, StorageError> {
        Ok(self.campaigns.read().await.clone())
    }

    async fn create_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry, StorageError> {
        let record = Inquiry {
            id: Uuid::new_v4(),
            name: inquiry.name,
            email: inquiry.email,
            company: inquiry.company,
            user_type: inquiry.user_type.as_str().to_string(),
            message: inquiry.message,
            created_at: Utc::now(),
        };
        self.inquiries.write().await.push(record.clone());
        Ok(record)
    }

    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, StorageError> {
        Ok(self.inquiries.read().await.iter().rev().cloned().collect())
    }

    async fn add_to_waitlist(
        &self,
        signup: WaitlistSignup,
    ) -> Result<WaitlistEntry, StorageError> {
        let mut waitlist = self.waitlist.write().await;
        if !waitlist.emails.insert(signup.email.clone()) {
            return Err(StorageError::DuplicateEmail(signup.email));
        }

        let entry = WaitlistEntry {
            id: Uuid::new_v4(),
            signup,
            created_at: Utc::now(),
        };
        waitlist.entries.push(entry.clone());
        Ok(entry)
    }

    async fn list_waitlist(&self) -> Result<Vec<WaitlistEntry>, StorageError> {
        Ok(self.waitlist.read().await.entries.iter().rev().cloned().collect())
    }
}
