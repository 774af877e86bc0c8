//! `SQLite` implementation of [`ReviewRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use eatery_app::ports::ReviewRepository;
use eatery_domain::error::EateryError;
use eatery_domain::id::ReviewId;
use eatery_domain::review::Review;

use crate::error::StorageError;
use crate::row::{decode_id, decode_integer, decode_timestamp, encode_timestamp};

struct Wrapper(Review);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let rating: i64 = row.try_get("rating")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Self(Review {
            id: decode_id(&id)?,
            name: row.try_get("name")?,
            rating: decode_integer(rating)?,
            message: row.try_get("message")?,
            is_published: row.try_get("is_published")?,
            created_at: decode_timestamp(&created_at)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO reviews (id, name, rating, message, is_published, created_at)
    VALUES (?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM reviews WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM reviews ORDER BY created_at DESC, rowid DESC";
const SELECT_PUBLISHED: &str =
    "SELECT * FROM reviews WHERE is_published = 1 ORDER BY created_at DESC, rowid DESC";
const SET_PUBLISHED: &str = "UPDATE reviews SET is_published = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM reviews WHERE id = ?";

/// `SQLite`-backed review repository.
pub struct SqliteReviewRepository {
    pool: SqlitePool,
}

impl SqliteReviewRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_list(&self, query: &str) -> Result<Vec<Review>, EateryError> {
        let rows: Vec<Wrapper> = sqlx::query_as(query)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}

impl ReviewRepository for SqliteReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, EateryError> {
        sqlx::query(INSERT)
            .bind(review.id.to_string())
            .bind(&review.name)
            .bind(i64::from(review.rating))
            .bind(&review.message)
            .bind(review.is_published)
            .bind(encode_timestamp(review.created_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(review)
    }

    async fn get_by_id(&self, id: ReviewId) -> Result<Option<Review>, EateryError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<Review>, EateryError> {
        self.fetch_list(SELECT_ALL).await
    }

    async fn get_published(&self) -> Result<Vec<Review>, EateryError> {
        self.fetch_list(SELECT_PUBLISHED).await
    }

    async fn set_published(&self, id: ReviewId, published: bool) -> Result<(), EateryError> {
        sqlx::query(SET_PUBLISHED)
            .bind(published)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn delete(&self, id: ReviewId) -> Result<(), EateryError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}
