//! Admin pages for the menu.
//!
//! Add and edit forms are `multipart/form-data` so a picture can travel with
//! the text fields. The file input is `image` on the add form and `newImage`
//! on the edit form; leaving it empty keeps the current picture.

use std::collections::HashMap;

use askama::Template;
use axum::extract::{Multipart, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use eatery_app::ports::{
    ContactRepository, MenuItemRepository, ReservationRepository, ReviewRepository,
};
use eatery_app::services::menu_service::MenuItemInput;
use eatery_domain::error::EateryError;
use eatery_domain::id::MenuItemId;
use eatery_domain::menu_item::MenuItem;

use super::DashboardError;
use crate::coerce;
use crate::state::AppState;
use crate::uploads::{ImageUpload, UploadStore};

const LIST_PATH: &str = "/admin/menu";

/// Menu list page template.
#[derive(Template)]
#[template(path = "menu_list.html")]
pub struct MenuListTemplate {
    items: Vec<MenuItem>,
}

impl IntoResponse for MenuListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Values pre-filled in the menu form.
#[derive(Default)]
pub struct MenuFormValues {
    name: String,
    category: String,
    price: String,
    description: String,
    image: String,
}

impl From<MenuItem> for MenuFormValues {
    fn from(item: MenuItem) -> Self {
        Self {
            name: item.name,
            category: item.category.unwrap_or_default(),
            price: item.price.to_string(),
            description: item.description,
            image: item.image,
        }
    }
}

/// Add / edit form template.
#[derive(Template)]
#[template(path = "menu_form.html")]
pub struct MenuFormTemplate {
    heading: &'static str,
    action: String,
    file_field: &'static str,
    values: MenuFormValues,
}

impl IntoResponse for MenuFormTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Response from the form and delete handlers (PRG pattern).
pub enum MenuRedirect {
    /// Back to the menu list.
    Redirect(Redirect),
}

impl IntoResponse for MenuRedirect {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
        }
    }
}

struct MenuSubmission {
    input: MenuItemInput,
    upload: Option<ImageUpload>,
}

/// Drain the multipart body and validate the text fields and the picture.
///
/// Nothing is written to disk here, so a rejected form leaves no file behind.
async fn read_submission(
    mut multipart: Multipart,
    file_field: &str,
) -> Result<MenuSubmission, DashboardError> {
    let mut fields = HashMap::new();
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if name == file_field {
            let file_name = field.file_name().map(str::to_string);
            let bytes = field.bytes().await?;
            if !bytes.is_empty() {
                upload = Some(ImageUpload::validate(file_name.as_deref(), bytes)?);
            }
        } else {
            fields.insert(name, field.text().await?);
        }
    }

    let mut take = |key: &str| fields.remove(key).unwrap_or_default();
    let input = MenuItemInput {
        name: take("name"),
        category: Some(take("category")).filter(|c| !c.trim().is_empty()),
        price: coerce::parse_price(&take("price"))?,
        description: take("description"),
        image: None,
    };
    input.validate()?;

    Ok(MenuSubmission { input, upload })
}

async fn store(
    uploads: &UploadStore,
    upload: Option<ImageUpload>,
) -> Result<Option<String>, EateryError> {
    match upload {
        Some(upload) => uploads.save(&upload).await.map(Some),
        None => Ok(None),
    }
}

/// `GET /admin/menu`
pub async fn list<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
) -> Result<MenuListTemplate, DashboardError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let items = state.menu_service.list_menu_items().await?;
    Ok(MenuListTemplate { items })
}

/// `GET /admin/menu/add`
pub async fn add_form() -> MenuFormTemplate {
    MenuFormTemplate {
        heading: "Add menu item",
        action: "/admin/menu/add".to_string(),
        file_field: "image",
        values: MenuFormValues::default(),
    }
}

/// `POST /admin/menu/add`
pub async fn add<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    multipart: Multipart,
) -> Result<MenuRedirect, DashboardError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let MenuSubmission { mut input, upload } = read_submission(multipart, "image").await?;
    let stored = store(&state.uploads, upload).await?;
    input.image.clone_from(&stored);

    if let Err(err) = state.menu_service.create_menu_item(input).await {
        if let Some(path) = &stored {
            state.uploads.remove(path).await;
        }
        return Err(err.into());
    }

    Ok(MenuRedirect::Redirect(Redirect::to(LIST_PATH)))
}

/// `GET /admin/menu/edit/:id`
pub async fn edit_form<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    Path(id): Path<String>,
) -> Result<MenuFormTemplate, DashboardError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let item_id = MenuItemId::parse(&id)?;
    let item = state.menu_service.get_menu_item(item_id).await?;

    Ok(MenuFormTemplate {
        heading: "Edit menu item",
        action: format!("/admin/menu/edit/{item_id}"),
        file_field: "newImage",
        values: item.into(),
    })
}

/// `POST /admin/menu/edit/:id`
pub async fn edit<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<MenuRedirect, DashboardError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let item_id = MenuItemId::parse(&id)?;
    let current = state.menu_service.get_menu_item(item_id).await?;

    let MenuSubmission { mut input, upload } = read_submission(multipart, "newImage").await?;
    let stored = store(&state.uploads, upload).await?;
    input.image.clone_from(&stored);

    if let Err(err) = state.menu_service.update_menu_item(item_id, input).await {
        if let Some(path) = &stored {
            state.uploads.remove(path).await;
        }
        return Err(err.into());
    }
    if stored.is_some() {
        state.uploads.remove(&current.image).await;
    }

    Ok(MenuRedirect::Redirect(Redirect::to(LIST_PATH)))
}

/// `GET /admin/menu/delete/:id`
pub async fn delete<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    Path(id): Path<String>,
) -> Result<MenuRedirect, DashboardError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let item_id = MenuItemId::parse(&id)?;
    let removed = state.menu_service.delete_menu_item(item_id).await?;
    state.uploads.remove(&removed.image).await;

    Ok(MenuRedirect::Redirect(Redirect::to(LIST_PATH)))
}
