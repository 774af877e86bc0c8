//! # eatery-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** under `/api` for the public website
//!   (`/api/menu`, `/api/reservations`, `/api/contact`, `/api/reviews`)
//! - Serve **server-side-rendered admin pages** under `/admin` that work
//!   with zero JavaScript — plain HTML forms and links
//! - Persist uploaded menu images below the public directory and serve that
//!   directory as static files
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON, HTML or redirects)
//!
//! ## Admin pages
//! - Every page is rendered server-side as complete HTML (askama templates).
//! - Forms POST back to the server and redirect to the listing (PRG pattern).
//! - Delete, publish and unpublish are plain links that redirect afterwards.
//!
//! ## Dependency rule
//! Depends on `eatery-app` (for port traits and services) and `eatery-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
mod coerce;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
pub mod uploads;
