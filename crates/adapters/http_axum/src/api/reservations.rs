//! JSON handlers for reservations.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use eatery_app::ports::{
    ContactRepository, MenuItemRepository, ReservationRepository, ReviewRepository,
};
use eatery_domain::error::ValidationError;
use eatery_domain::id::ReservationId;
use eatery_domain::reservation::{Reservation, ReservationDetails};

use super::MessageResponse;
use crate::coerce;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a reservation.
#[derive(Deserialize)]
pub struct ReservationRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub time: String,
    #[serde(deserialize_with = "coerce::guests_from_any")]
    pub guests: i64,
    #[serde(default)]
    pub message: Option<String>,
}

impl TryFrom<ReservationRequest> for ReservationDetails {
    type Error = ValidationError;

    fn try_from(req: ReservationRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: req.name,
            phone: req.phone,
            email: req.email,
            date: req.date,
            time: req.time,
            guests: coerce::guests(req.guests)?,
            message: req.message.unwrap_or_default(),
        })
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Reservation>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Reservation>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create, update and delete endpoints.
pub enum WriteResponse {
    Created(Json<MessageResponse>),
    Ok(Json<MessageResponse>),
}

impl IntoResponse for WriteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/reservations`
pub async fn list<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
) -> Result<ListResponse, ApiError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let reservations = state.reservation_service.list_reservations().await?;
    Ok(ListResponse::Ok(Json(reservations)))
}

/// `GET /api/reservations/:id`
pub async fn get<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let reservation_id = ReservationId::parse(&id)?;
    let reservation = state
        .reservation_service
        .get_reservation(reservation_id)
        .await?;
    Ok(GetResponse::Ok(Json(reservation)))
}

/// `POST /api/reservations`
pub async fn create<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    payload: Result<Json<ReservationRequest>, JsonRejection>,
) -> Result<WriteResponse, ApiError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let details = ReservationDetails::try_from(req)?;
    let reservation = state
        .reservation_service
        .create_reservation(details)
        .await?;
    Ok(WriteResponse::Created(Json(MessageResponse::new(
        "Reservation created",
        reservation.id,
    ))))
}

/// `PUT /api/reservations/:id`
pub async fn update<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    Path(id): Path<String>,
    payload: Result<Json<ReservationRequest>, JsonRejection>,
) -> Result<WriteResponse, ApiError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let reservation_id = ReservationId::parse(&id)?;
    let Json(req) = payload?;
    let details = ReservationDetails::try_from(req)?;
    state
        .reservation_service
        .update_reservation(reservation_id, details)
        .await?;
    Ok(WriteResponse::Ok(Json(MessageResponse::new(
        "Reservation updated",
        reservation_id,
    ))))
}

/// `DELETE /api/reservations/:id`
pub async fn delete<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    Path(id): Path<String>,
) -> Result<WriteResponse, ApiError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let reservation_id = ReservationId::parse(&id)?;
    state
        .reservation_service
        .delete_reservation(reservation_id)
        .await?;
    Ok(WriteResponse::Ok(Json(MessageResponse::new(
        "Reservation deleted",
        reservation_id,
    ))))
}
