//! JSON handlers for customer reviews.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use eatery_app::ports::{
    ContactRepository, MenuItemRepository, ReservationRepository, ReviewRepository,
};
use eatery_domain::review::Review;

use super::MessageResponse;
use crate::coerce;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for submitting a review.
#[derive(Deserialize)]
pub struct ReviewRequest {
    pub name: String,
    #[serde(deserialize_with = "coerce::rating_from_any")]
    pub rating: i64,
    #[serde(default)]
    pub message: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Review>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<MessageResponse>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/reviews` — published reviews only, newest first.
pub async fn list_published<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
) -> Result<ListResponse, ApiError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let reviews = state.review_service.list_published().await?;
    Ok(ListResponse::Ok(Json(reviews)))
}

/// `POST /api/reviews` — stored unpublished until an admin approves it.
pub async fn create<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let rating = coerce::rating(req.rating)?;
    let review = state
        .review_service
        .submit_review(req.name, rating, req.message)
        .await?;
    Ok(CreateResponse::Created(Json(MessageResponse::new(
        "Review submitted for approval",
        review.id,
    ))))
}
