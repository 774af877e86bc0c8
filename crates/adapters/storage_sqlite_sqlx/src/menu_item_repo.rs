//! `SQLite` implementation of [`MenuItemRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use eatery_app::ports::MenuItemRepository;
use eatery_domain::error::EateryError;
use eatery_domain::id::MenuItemId;
use eatery_domain::menu_item::MenuItem;

use crate::error::StorageError;
use crate::row::decode_id;

/// Wrapper for converting database rows into domain [`MenuItem`].
struct Wrapper(MenuItem);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<MenuItem> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;

        Ok(Self(MenuItem {
            id: decode_id(&id)?,
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            price: row.try_get("price")?,
            description: row.try_get("description")?,
            image: row.try_get("image")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO menu_items (id, name, category, price, description, image)
    VALUES (?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM menu_items WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM menu_items ORDER BY rowid";
const UPDATE: &str = r"
    UPDATE menu_items
    SET name = ?, category = ?, price = ?, description = ?, image = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM menu_items WHERE id = ?";

/// `SQLite`-backed menu item repository.
pub struct SqliteMenuItemRepository {
    pool: SqlitePool,
}

impl SqliteMenuItemRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MenuItemRepository for SqliteMenuItemRepository {
    fn create(&self, item: MenuItem) -> impl Future<Output = Result<MenuItem, EateryError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(item.id.to_string())
                .bind(&item.name)
                .bind(item.category.as_deref())
                .bind(item.price)
                .bind(&item.description)
                .bind(&item.image)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(item)
        }
    }

    fn get_by_id(
        &self,
        id: MenuItemId,
    ) -> impl Future<Output = Result<Option<MenuItem>, EateryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<MenuItem>, EateryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, item: MenuItem) -> impl Future<Output = Result<MenuItem, EateryError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&item.name)
                .bind(item.category.as_deref())
                .bind(item.price)
                .bind(&item.description)
                .bind(&item.image)
                .bind(item.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(item)
        }
    }

    fn delete(&self, id: MenuItemId) -> impl Future<Output = Result<(), EateryError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
