use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use super::{seed, Storage, StorageError};
use crate::models::{Campaign, Creator, Inquiry, NewInquiry, WaitlistEntry, WaitlistSignup};

const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        tracing::info!("Successfully connected to database");
        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.pool).await?;
        tracing::info!("Migrations run successfully");
        Ok(())
    }

    /// Loads the sample creators and campaigns into tables that have none.
    pub async fn seed_if_empty(&self) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;

        let creators: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM creators")
            .fetch_one(&mut *tx)
            .await?;
        if creators == 0 {
            let records = seed::creators();
            for c in &records {
                sqlx::query(
                    "INSERT INTO creators \
                     (id, name, bio, location, category, platforms, followers, engagement_rate, created_at) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
                )
                .bind(c.id)
                .bind(&c.name)
                .bind(&c.bio)
                .bind(&c.location)
                .bind(&c.category)
                .bind(&c.platforms)
                .bind(c.followers)
                .bind(c.engagement_rate)
                .bind(c.created_at)
                .execute(&mut *tx)
                .await?;
            }
            tracing::info!(count = records.len(), "Seeded creators");
        }

        let campaigns: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM campaigns")
            .fetch_one(&mut *tx)
            .await?;
        if campaigns == 0 {
            let records = seed::campaigns();
            for c in &records {
                sqlx::query(
                    "INSERT INTO campaigns \
                     (id, brand_name, title, description, budget, platform, category, metrics, \
                      testimonial, client_name, client_role, rating, created_at) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
                )
                .bind(c.id)
                .bind(&c.brand_name)
                .bind(&c.title)
                .bind(&c.description)
                .bind(c.budget)
                .bind(&c.platform)
                .bind(&c.category)
                .bind(&c.metrics)
                .bind(&c.testimonial)
                .bind(&c.client_name)
                .bind(&c.client_role)
                .bind(c.rating)
                .bind(c.created_at)
                .execute(&mut *tx)
                .await?;
            }
            tracing::info!(count = records.len(), "Seeded campaigns");
        }

        tx.commit().await?;
        Ok(())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

/// The only unique constraint on `waitlist` is the email column.
fn waitlist_insert_error(err: sqlx::Error, email: String) -> StorageError {
    if is_unique_violation(&err) {
        StorageError::DuplicateEmail(email)
    } else {
        StorageError::Database(err)
    }
}

#[async_trait]
impl Storage for PgStorage {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn list_creators(&self) -> Result<Vec<Creator>, StorageError> {
        let creators = sqlx::query_as::<_, Creator>(
            "SELECT * FROM creators ORDER BY followers DESC, name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(creators)
    }

    async fn list_campaigns(&self) -> Result<Vec<Campaign>, StorageError> {
        let campaigns =
            sqlx::query_as::<_, Campaign>("SELECT * FROM campaigns ORDER BY created_at ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(campaigns)
    }

    async fn create_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry, StorageError> {
        let record = sqlx::query_as::<_, Inquiry>(
            "INSERT INTO inquiries (id, name, email, company, user_type, message) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(inquiry.name)
        .bind(inquiry.email)
        .bind(inquiry.company)
        .bind(inquiry.user_type.as_str())
        .bind(inquiry.message)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, StorageError> {
        let inquiries =
            sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(inquiries)
    }

    async fn add_to_waitlist(
        &self,
        signup: WaitlistSignup,
    ) -> Result<WaitlistEntry, StorageError> {
        let email = signup.email.clone();
        let result = sqlx::query_as::<_, WaitlistEntry>(
            "INSERT INTO waitlist \
             (id, name, email, interest, company, role, budget, website, platforms, \
              instagram_handle, instagram_followers, instagram_screenshot, \
              tiktok_handle, tiktok_followers, tiktok_screenshot, \
              youtube_handle, youtube_followers, youtube_screenshot, \
              niches, languages, location) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, \
                     $16, $17, $18, $19, $20, $21) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(signup.name)
        .bind(signup.email)
        .bind(signup.interest)
        .bind(signup.company)
        .bind(signup.role)
        .bind(signup.budget)
        .bind(signup.website)
        .bind(signup.platforms)
        .bind(signup.instagram_handle)
        .bind(signup.instagram_followers)
        .bind(signup.instagram_screenshot)
        .bind(signup.tiktok_handle)
        .bind(signup.tiktok_followers)
        .bind(signup.tiktok_screenshot)
        .bind(signup.youtube_handle)
        .bind(signup.youtube_followers)
        .bind(signup.youtube_screenshot)
        .bind(signup.niches)
        .bind(signup.languages)
        .bind(signup.location)
        .fetch_one(&self.pool)
        .await;

        result.map_err(|e| waitlist_insert_error(e, email))
    }

    async fn list_waitlist(&self) -> Result<Vec<WaitlistEntry>, StorageError> {
        let entries =
            sqlx::query_as::<_, WaitlistEntry>("SELECT * FROM waitlist ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(entries)
    }
}
