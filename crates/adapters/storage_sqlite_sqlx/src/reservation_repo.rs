//! `SQLite` implementation of [`ReservationRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use eatery_app::ports::ReservationRepository;
use eatery_domain::error::EateryError;
use eatery_domain::id::ReservationId;
use eatery_domain::reservation::Reservation;

use crate::error::StorageError;
use crate::row::{decode_id, decode_integer, decode_timestamp, encode_timestamp};

struct Wrapper(Reservation);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Reservation> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let guests: i64 = row.try_get("guests")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Self(Reservation {
            id: decode_id(&id)?,
            name: row.try_get("name")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
            date: row.try_get("date")?,
            time: row.try_get("time")?,
            guests: decode_integer(guests)?,
            message: row.try_get("message")?,
            created_at: decode_timestamp(&created_at)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO reservations (id, name, phone, email, date, time, guests, message, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM reservations WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM reservations ORDER BY created_at, rowid";
// created_at is write-once.
const UPDATE: &str = r"
    UPDATE reservations
    SET name = ?, phone = ?, email = ?, date = ?, time = ?, guests = ?, message = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM reservations WHERE id = ?";

/// `SQLite`-backed reservation repository.
pub struct SqliteReservationRepository {
    pool: SqlitePool,
}

impl SqliteReservationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReservationRepository for SqliteReservationRepository {
    fn create(
        &self,
        reservation: Reservation,
    ) -> impl Future<Output = Result<Reservation, EateryError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(reservation.id.to_string())
                .bind(&reservation.name)
                .bind(&reservation.phone)
                .bind(&reservation.email)
                .bind(&reservation.date)
                .bind(&reservation.time)
                .bind(i64::from(reservation.guests))
                .bind(&reservation.message)
                .bind(encode_timestamp(reservation.created_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(reservation)
        }
    }

    fn get_by_id(
        &self,
        id: ReservationId,
    ) -> impl Future<Output = Result<Option<Reservation>, EateryError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Reservation>, EateryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        reservation: Reservation,
    ) -> impl Future<Output = Result<Reservation, EateryError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&reservation.name)
                .bind(&reservation.phone)
                .bind(&reservation.email)
                .bind(&reservation.date)
                .bind(&reservation.time)
                .bind(i64::from(reservation.guests))
                .bind(&reservation.message)
                .bind(reservation.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(reservation)
        }
    }

    fn delete(&self, id: ReservationId) -> impl Future<Output = Result<(), EateryError>> + Send {
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
