//! # eatery-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `MenuItemRepository` — CRUD for menu items
//!   - `ReservationRepository` — CRUD for reservations
//!   - `ContactRepository` — create, list, delete for contact messages
//!   - `ReviewRepository` — create, list, update, delete for reviews
//! - Define **driving/inbound ports** as use-case structs:
//!   - `MenuService`, `ReservationService`, `ContactService`, `ReviewService`
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `eatery-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
