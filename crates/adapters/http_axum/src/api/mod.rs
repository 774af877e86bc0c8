//! JSON API handler modules consumed by the public website.

#[allow(clippy::missing_errors_doc)]
pub mod contact;
#[allow(clippy::missing_errors_doc)]
pub mod menu;
#[allow(clippy::missing_errors_doc)]
pub mod reservations;
#[allow(clippy::missing_errors_doc)]
pub mod reviews;

use axum::Router;
use axum::routing::{get, post};
use serde::Serialize;

use eatery_app::ports::{
    ContactRepository, MenuItemRepository, ReservationRepository, ReviewRepository,
};

use crate::state::AppState;

/// Confirmation body returned by create, update and delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    pub id: String,
}

impl MessageResponse {
    pub fn new(message: &'static str, id: impl ToString) -> Self {
        Self {
            message,
            id: id.to_string(),
        }
    }
}

/// Build the `/api` sub-router.
pub fn routes<MR, RR, CR, VR>() -> Router<AppState<MR, RR, CR, VR>>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    Router::new()
        // Menu
        .route(
            "/menu",
            get(menu::list::<MR, RR, CR, VR>).post(menu::create::<MR, RR, CR, VR>),
        )
        .route(
            "/menu/{id}",
            get(menu::get::<MR, RR, CR, VR>)
                .put(menu::update::<MR, RR, CR, VR>)
                .delete(menu::delete::<MR, RR, CR, VR>),
        )
        // Reservations
        .route(
            "/reservations",
            get(reservations::list::<MR, RR, CR, VR>)
                .post(reservations::create::<MR, RR, CR, VR>),
        )
        .route(
            "/reservations/{id}",
            get(reservations::get::<MR, RR, CR, VR>)
                .put(reservations::update::<MR, RR, CR, VR>)
                .delete(reservations::delete::<MR, RR, CR, VR>),
        )
        // Contact form
        .route("/contact", post(contact::create::<MR, RR, CR, VR>))
        // Reviews
        .route(
            "/reviews",
            get(reviews::list_published::<MR, RR, CR, VR>)
                .post(reviews::create::<MR, RR, CR, VR>),
        )
}
