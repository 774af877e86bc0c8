//! Shared application state for axum handlers.

use std::sync::Arc;

use eatery_app::ports::{
    ContactRepository, MenuItemRepository, ReservationRepository, ReviewRepository,
};
use eatery_app::services::contact_service::ContactService;
use eatery_app::services::menu_service::MenuService;
use eatery_app::services::reservation_service::ReservationService;
use eatery_app::services::review_service::ReviewService;

use crate::uploads::UploadStore;

/// Application state shared across all axum handlers.
///
/// Generic over the four repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<MR, RR, CR, VR> {
    /// Menu item CRUD service.
    pub menu_service: Arc<MenuService<MR>>,
    /// Reservation CRUD service.
    pub reservation_service: Arc<ReservationService<RR>>,
    /// Contact message service.
    pub contact_service: Arc<ContactService<CR>>,
    /// Review submission and moderation service.
    pub review_service: Arc<ReviewService<VR>>,
    /// Where uploaded menu images are written.
    pub uploads: Arc<UploadStore>,
}

impl<MR, RR, CR, VR> Clone for AppState<MR, RR, CR, VR> {
    fn clone(&self) -> Self {
        Self {
            menu_service: Arc::clone(&self.menu_service),
            reservation_service: Arc::clone(&self.reservation_service),
            contact_service: Arc::clone(&self.contact_service),
            review_service: Arc::clone(&self.review_service),
            uploads: Arc::clone(&self.uploads),
        }
    }
}

impl<MR, RR, CR, VR> AppState<MR, RR, CR, VR>
where
    MR: MenuItemRepository + Send + Sync + 'static,
    RR: ReservationRepository + Send + Sync + 'static,
    CR: ContactRepository + Send + Sync + 'static,
    VR: ReviewRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        menu_service: MenuService<MR>,
        reservation_service: ReservationService<RR>,
        contact_service: ContactService<CR>,
        review_service: ReviewService<VR>,
        uploads: UploadStore,
    ) -> Self {
        Self {
            menu_service: Arc::new(menu_service),
            reservation_service: Arc::new(reservation_service),
            contact_service: Arc::new(contact_service),
            review_service: Arc::new(review_service),
            uploads: Arc::new(uploads),
        }
    }
}
