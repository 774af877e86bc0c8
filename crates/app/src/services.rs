//! Application services — use-case implementations.
//!
//! Each service struct accepts a port trait implementation via a generic
//! parameter (constructor injection), keeping this layer decoupled from
//! concrete adapters.

pub mod contact_service;
pub mod menu_service;
pub mod reservation_service;
pub mod review_service;
