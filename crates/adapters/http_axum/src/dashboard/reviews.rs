//! Admin pages for review moderation.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use eatery_app::ports::{
    ContactRepository, MenuItemRepository, ReservationRepository, ReviewRepository,
};
use eatery_domain::id::ReviewId;
use eatery_domain::review::Review;

use super::DashboardError;
use crate::state::AppState;

const LIST_PATH: &str = "/admin/reviews";

/// Review list page template. Shows published and pending reviews.
#[derive(Template)]
#[template(path = "review_list.html")]
pub struct ReviewListTemplate {
    reviews: Vec<Review>,
}

impl IntoResponse for ReviewListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /admin/reviews`
pub async fn list<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
) -> Result<ReviewListTemplate, DashboardError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let reviews = state.review_service.list_reviews().await?;
    Ok(ReviewListTemplate { reviews })
}

/// `GET /admin/reviews/publish/:id`
pub async fn publish<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    Path(id): Path<String>,
) -> Result<Redirect, DashboardError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let review_id = ReviewId::parse(&id)?;
    state.review_service.publish(review_id).await?;
    Ok(Redirect::to(LIST_PATH))
}

/// `GET /admin/reviews/unpublish/:id`
pub async fn unpublish<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    Path(id): Path<String>,
) -> Result<Redirect, DashboardError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let review_id = ReviewId::parse(&id)?;
    state.review_service.unpublish(review_id).await?;
    Ok(Redirect::to(LIST_PATH))
}

/// `GET /admin/reviews/delete/:id`
pub async fn delete<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    Path(id): Path<String>,
) -> Result<Redirect, DashboardError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let review_id = ReviewId::parse(&id)?;
    state.review_service.delete_review(review_id).await?;
    Ok(Redirect::to(LIST_PATH))
}
