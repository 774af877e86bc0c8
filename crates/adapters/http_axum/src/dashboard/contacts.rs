//! Admin pages for contact messages.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use eatery_app::ports::{
    ContactRepository, MenuItemRepository, ReservationRepository, ReviewRepository,
};
use eatery_domain::contact::Contact;
use eatery_domain::id::ContactId;

use super::DashboardError;
use crate::state::AppState;

/// Contact list page template.
#[derive(Template)]
#[template(path = "contact_list.html")]
pub struct ContactListTemplate {
    contacts: Vec<Contact>,
}

impl IntoResponse for ContactListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /admin/contacts` — newest first.
///
/// # Errors
///
/// Returns a [`DashboardError`] if the listing fails.
pub async fn list<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
) -> Result<ContactListTemplate, DashboardError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let contacts = state.contact_service.list_contacts().await?;
    Ok(ContactListTemplate { contacts })
}

/// `GET /admin/contacts/delete/:id`
///
/// # Errors
///
/// Returns a [`DashboardError`] for a malformed or unknown id.
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
    let contact_id = ContactId::parse(&id)?;
    state.contact_service.delete_contact(contact_id).await?;
    Ok(Redirect::to("/admin/contacts"))
}
