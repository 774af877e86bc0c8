//! # eatery-domain
//!
//! Pure domain model for the eatery restaurant backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **menu items** (dishes with a price and an optional image)
//! - Define **reservations** (table booking requests)
//! - Define **contacts** (messages sent through the contact form)
//! - Define **reviews** (customer feedback, moderated before publication)
//! - Contain all invariant enforcement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod contact;
pub mod menu_item;
pub mod reservation;
pub mod review;
