//! JSON handler for the contact form.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use eatery_app::ports::{
    ContactRepository, MenuItemRepository, ReservationRepository, ReviewRepository,
};
use eatery_domain::contact::Contact;
use eatery_domain::error::EateryError;

use super::MessageResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for the contact form. Either `firstName`/`lastName` or a
/// single `name` may be sent; blank name parts count as absent.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub message: String,
}

impl TryFrom<ContactRequest> for Contact {
    type Error = EateryError;

    fn try_from(req: ContactRequest) -> Result<Self, Self::Error> {
        let present = |part: Option<String>| part.filter(|s| !s.trim().is_empty());
        match (present(req.first_name), present(req.last_name), req.name) {
            (None, None, Some(name)) => Contact::from_full_name(&name, req.email, req.message),
            (first, last, _) => Contact::new(
                first.unwrap_or_default(),
                last.unwrap_or_default(),
                req.email,
                req.message,
            ),
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

/// `POST /api/contact`
pub async fn create<MR, RR, CR, VR>(
    State(state): State<AppState<MR, RR, CR, VR>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let contact = state
        .contact_service
        .create_contact(Contact::try_from(req)?)
        .await?;
    Ok(CreateResponse::Created(Json(MessageResponse::new(
        "Message received",
        contact.id,
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> ContactRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn should_fall_back_to_name_when_parts_are_blank() {
        let req = request(
            r#"{"firstName":"","lastName":" ","name":"Ann Lee","email":"ann@example.com","message":"Hi"}"#,
        );
        let contact = Contact::try_from(req).unwrap();
        assert_eq!(contact.first_name, "Ann");
        assert_eq!(contact.last_name, "Lee");
    }

    #[test]
    fn should_prefer_name_parts_when_present() {
        let req = request(
            r#"{"firstName":"Bo","lastName":"","name":"Ann Lee","email":"bo@example.com","message":"Hi"}"#,
        );
        let contact = Contact::try_from(req).unwrap();
        assert_eq!(contact.full_name(), "Bo");
    }

    #[test]
    fn should_reject_when_every_name_is_blank() {
        let req = request(r#"{"firstName":"","name":"  ","email":"x@example.com","message":"Hi"}"#);
        assert!(matches!(
            Contact::try_from(req),
            Err(EateryError::Validation(_))
        ));
    }
}
