//! `SQLite` implementation of [`ContactRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use eatery_app::ports::ContactRepository;
use eatery_domain::contact::Contact;
use eatery_domain::error::EateryError;
use eatery_domain::id::ContactId;

use crate::error::StorageError;
use crate::row::{decode_id, decode_timestamp, encode_timestamp};

struct Wrapper(Contact);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Self(Contact {
            id: decode_id(&id)?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            message: row.try_get("message")?,
            created_at: decode_timestamp(&created_at)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO contacts (id, first_name, last_name, email, message, created_at)
    VALUES (?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM contacts WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM contacts ORDER BY created_at DESC, rowid DESC";
const DELETE_BY_ID: &str = "DELETE FROM contacts WHERE id = ?";

/// `SQLite`-backed contact message repository.
pub struct SqliteContactRepository {
    pool: SqlitePool,
}

impl SqliteContactRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ContactRepository for SqliteContactRepository {
    async fn create(&self, contact: Contact) -> Result<Contact, EateryError> {
        sqlx::query(INSERT)
            .bind(contact.id.to_string())
            .bind(&contact.first_name)
            .bind(&contact.last_name)
            .bind(&contact.email)
            .bind(&contact.message)
            .bind(encode_timestamp(contact.created_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(contact)
    }

    async fn get_by_id(&self, id: ContactId) -> Result<Option<Contact>, EateryError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<Contact>, EateryError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn delete(&self, id: ContactId) -> Result<(), EateryError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}
