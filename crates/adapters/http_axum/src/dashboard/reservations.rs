//! Admin pages for reservations.

use askama::Template;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use eatery_app::ports::{
    ContactRepository, MenuItemRepository, ReservationRepository, ReviewRepository,
};
use eatery_domain::error::ValidationError;
use eatery_domain::id::ReservationId;
use eatery_domain::reservation::{Reservation, ReservationDetails};

use super::DashboardError;
use crate::coerce;
use crate::state::AppState;

const LIST_PATH: &str = "/admin/reservation";

/// Reservation list page template.
#[derive(Template)]
#[template(path = "reservation_list.html")]
pub struct ReservationListTemplate {
    reservations: Vec<Reservation>,
}

impl IntoResponse for ReservationListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Add / edit form template.
#[derive(Template)]
#[template(path = "reservation_form.html")]
pub struct ReservationFormTemplate {
    heading: &'static str,
    action: String,
    values: ReservationForm,
}

impl IntoResponse for ReservationFormTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Response from the form and delete handlers (PRG pattern).
pub enum ReservationRedirect {
    /// Back to the reservation list.
    Redirect(Redirect),
}

impl IntoResponse for ReservationRedirect {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
        }
    }
}

/// Urlencoded form body. Every field arrives as text.
#[derive(Default, Deserialize)]
pub struct ReservationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub guests: String,
    #[serde(default)]
    pub message: String,
}

impl From<Reservation> for ReservationForm {
    fn from(reservation: Reservation) -> Self {
        Self {
            name: reservation.name,
            phone: reservation.phone,
            email: reservation.email,
            date: reservation.date,
            time: reservation.time,
            guests: reservation.guests.to_string(),
            message: reservation.message,
        }
    }
}

impl TryFrom<ReservationForm> for ReservationDetails {
    type Error = ValidationError;

    fn try_from(form: ReservationForm) -> Result<Self, Self::Error> {
        let guests = coerce::parse_integer("guests", &form.guests)?;
        Ok(Self {
            name: form.name,
            phone: form.phone,
            email: form.email,
            date: form.date,
            time: form.time,
            guests: coerce::guests(guests)?,
            message: form.message,
        })
    }
}

/// `GET /admin/reservation`
pub async fn list<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
) -> Result<ReservationListTemplate, DashboardError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let reservations = state.reservation_service.list_reservations().await?;
    Ok(ReservationListTemplate { reservations })
}

/// `GET /admin/reservation/add`
pub async fn add_form() -> ReservationFormTemplate {
    ReservationFormTemplate {
        heading: "Add reservation",
        action: "/admin/reservation/add".to_string(),
        values: ReservationForm {
            guests: "2".to_string(),
            ..ReservationForm::default()
        },
    }
}

/// `POST /admin/reservation/add`
pub async fn add<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    form: Result<Form<ReservationForm>, FormRejection>,
) -> Result<ReservationRedirect, DashboardError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let Form(form) = form?;
    state
        .reservation_service
        .create_reservation(form.try_into()?)
        .await?;

    Ok(ReservationRedirect::Redirect(Redirect::to(LIST_PATH)))
}

/// `GET /admin/reservation/edit/:id`
pub async fn edit_form<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    Path(id): Path<String>,
) -> Result<ReservationFormTemplate, DashboardError>
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

    Ok(ReservationFormTemplate {
        heading: "Edit reservation",
        action: format!("/admin/reservation/edit/{reservation_id}"),
        values: reservation.into(),
    })
}

/// `POST /admin/reservation/edit/:id`
pub async fn edit<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    Path(id): Path<String>,
    form: Result<Form<ReservationForm>, FormRejection>,
) -> Result<ReservationRedirect, DashboardError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let reservation_id = ReservationId::parse(&id)?;
    let Form(form) = form?;
    state
        .reservation_service
        .update_reservation(reservation_id, form.try_into()?)
        .await?;

    Ok(ReservationRedirect::Redirect(Redirect::to(LIST_PATH)))
}

/// `GET /admin/reservation/delete/:id`
pub async fn delete<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    Path(id): Path<String>,
) -> Result<ReservationRedirect, DashboardError>
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

    Ok(ReservationRedirect::Redirect(Redirect::to(LIST_PATH)))
}
