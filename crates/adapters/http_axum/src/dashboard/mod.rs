//! Server-side rendered admin pages (no JavaScript).
//!
//! Forms use POST + redirect (PRG pattern) to avoid double-submission;
//! deletes and review moderation are plain links.

pub mod contacts;
pub mod home;
#[allow(clippy::missing_errors_doc)]
pub mod menu;
#[allow(clippy::missing_errors_doc)]
pub mod reservations;
#[allow(clippy::missing_errors_doc)]
pub mod reviews;

use askama::Template;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::FormRejection;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use eatery_app::ports::{
    ContactRepository, MenuItemRepository, ReservationRepository, ReviewRepository,
};
use eatery_domain::error::{EateryError, ValidationError};

use crate::error::status_and_message;
use crate::state::AppState;
use crate::uploads::MAX_UPLOAD_BYTES;

/// Build the admin sub-router, mounted under `/admin`.
pub fn routes<MR, RR, CR, VR>() -> Router<AppState<MR, RR, CR, VR>>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<MR, RR, CR, VR>))
        .route("/menu", get(menu::list::<MR, RR, CR, VR>))
        .route(
            "/menu/add",
            get(menu::add_form).post(menu::add::<MR, RR, CR, VR>),
        )
        .route(
            "/menu/edit/{id}",
            get(menu::edit_form::<MR, RR, CR, VR>).post(menu::edit::<MR, RR, CR, VR>),
        )
        .route("/menu/delete/{id}", get(menu::delete::<MR, RR, CR, VR>))
        .route("/reservation", get(reservations::list::<MR, RR, CR, VR>))
        .route(
            "/reservation/add",
            get(reservations::add_form)
                .post(reservations::add::<MR, RR, CR, VR>),
        )
        .route(
            "/reservation/edit/{id}",
            get(reservations::edit_form::<MR, RR, CR, VR>)
                .post(reservations::edit::<MR, RR, CR, VR>),
        )
        .route(
            "/reservation/delete/{id}",
            get(reservations::delete::<MR, RR, CR, VR>),
        )
        .route("/contacts", get(contacts::list::<MR, RR, CR, VR>))
        .route(
            "/contacts/delete/{id}",
            get(contacts::delete::<MR, RR, CR, VR>),
        )
        .route("/reviews", get(reviews::list::<MR, RR, CR, VR>))
        .route(
            "/reviews/publish/{id}",
            get(reviews::publish::<MR, RR, CR, VR>),
        )
        .route(
            "/reviews/unpublish/{id}",
            get(reviews::unpublish::<MR, RR, CR, VR>),
        )
        .route(
            "/reviews/delete/{id}",
            get(reviews::delete::<MR, RR, CR, VR>),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: String,
}

/// Renders an [`EateryError`] as an HTML error page.
pub struct DashboardError(EateryError);

impl From<EateryError> for DashboardError {
    fn from(err: EateryError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for DashboardError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<FormRejection> for DashboardError {
    fn from(rejection: FormRejection) -> Self {
        ValidationError::MalformedForm {
            reason: rejection.body_text(),
        }
        .into()
    }
}

impl From<MultipartError> for DashboardError {
    fn from(err: MultipartError) -> Self {
        ValidationError::MalformedForm {
            reason: err.body_text(),
        }
        .into()
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        let page = ErrorTemplate {
            status: status.as_u16(),
            message,
        };
        (status, Html(page.to_string())).into_response()
    }
}
