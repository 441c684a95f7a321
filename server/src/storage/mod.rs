//! Persistence for creators, campaigns, inquiries and waitlist signups.
//!
//! [`MemStorage`] keeps everything in process memory and is what tests and
//! local development run against. [`PgStorage`] stores the same records in
//! Postgres. Both seed the creator directory and the success stories.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Campaign, Creator, Inquiry, NewInquiry, WaitlistEntry, WaitlistSignup};

pub mod memory;
pub mod postgres;
pub mod seed;

pub use memory::MemStorage;
pub use postgres::PgStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait Storage: Send + Sync {
    fn backend_name(&self) -> &'static str;

    /// Creators ordered by follower count, largest first.
    async fn list_creators(&self) -> Result<Vec<Creator>, StorageError>;

    /// Campaigns in the order they were added.
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, StorageError>;

    async fn create_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry, StorageError>;

    /// Newest first.
    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, StorageError>;

    /// Fails with [`StorageError::DuplicateEmail`] when the email is already registered.
    async fn add_to_waitlist(&self, signup: WaitlistSignup)
        -> Result<WaitlistEntry, StorageError>;

    /// Newest first.
    async fn list_waitlist(&self) -> Result<Vec<WaitlistEntry>, StorageError>;
}
