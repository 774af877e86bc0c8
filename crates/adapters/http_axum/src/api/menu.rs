//! JSON handlers for menu items.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use eatery_app::ports::{
    ContactRepository, MenuItemRepository, ReservationRepository, ReviewRepository,
};
use eatery_app::services::menu_service::MenuItemInput;
use eatery_domain::id::MenuItemId;
use eatery_domain::menu_item::MenuItem;

use super::MessageResponse;
use crate::coerce;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a menu item.
///
/// `image` is an already-uploaded public path; omit it on update to keep
/// the current picture. A replaced or deleted picture stored under
/// `/uploads/` is removed from disk.
#[derive(Deserialize)]
pub struct MenuItemRequest {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(deserialize_with = "coerce::price_from_any")]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<MenuItemRequest> for MenuItemInput {
    fn from(req: MenuItemRequest) -> Self {
        Self {
            name: req.name,
            category: req.category,
            price: req.price,
            description: req.description,
            image: req.image,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<MenuItem>>),
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
    Ok(Json<MenuItem>),
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

/// `GET /api/menu`
pub async fn list<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
) -> Result<ListResponse, ApiError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let items = state.menu_service.list_menu_items().await?;
    Ok(ListResponse::Ok(Json(items)))
}

/// `GET /api/menu/:id`
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
    let item_id = MenuItemId::parse(&id)?;
    let item = state.menu_service.get_menu_item(item_id).await?;
    Ok(GetResponse::Ok(Json(item)))
}

/// `POST /api/menu`
pub async fn create<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    payload: Result<Json<MenuItemRequest>, JsonRejection>,
) -> Result<WriteResponse, ApiError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let item = state.menu_service.create_menu_item(req.into()).await?;
    Ok(WriteResponse::Created(Json(MessageResponse::new(
        "Menu item created",
        item.id,
    ))))
}

/// `PUT /api/menu/:id`
pub async fn update<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    Path(id): Path<String>,
    payload: Result<Json<MenuItemRequest>, JsonRejection>,
) -> Result<WriteResponse, ApiError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let item_id = MenuItemId::parse(&id)?;
    let Json(req) = payload?;
    let previous = state.menu_service.get_menu_item(item_id).await?;
    let item = state
        .menu_service
        .update_menu_item(item_id, req.into())
        .await?;
    if item.image != previous.image {
        state.uploads.remove(&previous.image).await;
    }
    Ok(WriteResponse::Ok(Json(MessageResponse::new(
        "Menu item updated",
        item.id,
    ))))
}

/// `DELETE /api/menu/:id`
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
    let item_id = MenuItemId::parse(&id)?;
    let removed = state.menu_service.delete_menu_item(item_id).await?;
    state.uploads.remove(&removed.image).await;
    Ok(WriteResponse::Ok(Json(MessageResponse::new(
        "Menu item deleted",
        item_id,
    ))))
}
