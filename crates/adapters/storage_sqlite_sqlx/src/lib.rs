//! # eatery-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `eatery-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run embedded migrations creating one table per collection
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `eatery-app` (for port traits) and `eatery-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod contact_repo;
mod error;
mod menu_item_repo;
mod pool;
mod reservation_repo;
mod review_repo;
mod row;

pub use contact_repo::SqliteContactRepository;
pub use error::StorageError;
pub use menu_item_repo::SqliteMenuItemRepository;
pub use pool::{Config, Database};
pub use reservation_repo::SqliteReservationRepository;
pub use review_repo::SqliteReviewRepository;
