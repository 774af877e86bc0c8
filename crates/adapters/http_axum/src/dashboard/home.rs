//! Admin home page — counts of everything stored.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use eatery_app::ports::{
    ContactRepository, MenuItemRepository, ReservationRepository, ReviewRepository,
};

use super::DashboardError;
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    menu_count: usize,
    reservation_count: usize,
    contact_count: usize,
    review_count: usize,
    pending_review_count: usize,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /admin` — overview.
///
/// # Errors
///
/// Returns a [`DashboardError`] if any listing fails.
pub async fn index<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
) -> Result<HomeTemplate, DashboardError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let reviews = state.review_service.list_reviews().await?;
    let pending_review_count = reviews.iter().filter(|r| !r.is_published).count();

    Ok(HomeTemplate {
        menu_count: state.menu_service.count().await?,
        reservation_count: state.reservation_service.count().await?,
        contact_count: state.contact_service.count().await?,
        review_count: reviews.len(),
        pending_review_count,
    })
}
