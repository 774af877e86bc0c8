//! Storage port — one repository trait per collection.
//!
//! Each repository owns exactly one collection. Implementations must be
//! cheap to share across requests; the HTTP adapter wraps them in `Arc`.

use std::future::Future;

use eatery_domain::contact::Contact;
use eatery_domain::error::EateryError;
use eatery_domain::id::{ContactId, MenuItemId, ReservationId, ReviewId};
use eatery_domain::menu_item::MenuItem;
use eatery_domain::reservation::Reservation;
use eatery_domain::review::Review;

/// Persistence for the `menu_items` collection.
pub trait MenuItemRepository {
    fn create(&self, item: MenuItem) -> impl Future<Output = Result<MenuItem, EateryError>> + Send;

    fn get_by_id(
        &self,
        id: MenuItemId,
    ) -> impl Future<Output = Result<Option<MenuItem>, EateryError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<MenuItem>, EateryError>> + Send;

    fn update(&self, item: MenuItem) -> impl Future<Output = Result<MenuItem, EateryError>> + Send;

    fn delete(&self, id: MenuItemId) -> impl Future<Output = Result<(), EateryError>> + Send;
}

/// Persistence for the `reservations` collection.
pub trait ReservationRepository {
    fn create(
        &self,
        reservation: Reservation,
    ) -> impl Future<Output = Result<Reservation, EateryError>> + Send;

    fn get_by_id(
        &self,
        id: ReservationId,
    ) -> impl Future<Output = Result<Option<Reservation>, EateryError>> + Send;

    /// All reservations, oldest first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Reservation>, EateryError>> + Send;

    /// Persist the editable fields. Implementations must not overwrite
    /// `created_at`.
    fn update(
        &self,
        reservation: Reservation,
    ) -> impl Future<Output = Result<Reservation, EateryError>> + Send;

    fn delete(&self, id: ReservationId) -> impl Future<Output = Result<(), EateryError>> + Send;
}

/// Persistence for the `contacts` collection. Contacts are never updated.
pub trait ContactRepository {
    fn create(&self, contact: Contact)
    -> impl Future<Output = Result<Contact, EateryError>> + Send;

    fn get_by_id(
        &self,
        id: ContactId,
    ) -> impl Future<Output = Result<Option<Contact>, EateryError>> + Send;

    /// All contacts, newest first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Contact>, EateryError>> + Send;

    fn delete(&self, id: ContactId) -> impl Future<Output = Result<(), EateryError>> + Send;
}

/// Persistence for the `reviews` collection.
pub trait ReviewRepository {
    fn create(&self, review: Review) -> impl Future<Output = Result<Review, EateryError>> + Send;

    fn get_by_id(
        &self,
        id: ReviewId,
    ) -> impl Future<Output = Result<Option<Review>, EateryError>> + Send;

    /// All reviews, newest first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, EateryError>> + Send;

    /// Published reviews only, newest first.
    fn get_published(&self) -> impl Future<Output = Result<Vec<Review>, EateryError>> + Send;

    fn set_published(
        &self,
        id: ReviewId,
        published: bool,
    ) -> impl Future<Output = Result<(), EateryError>> + Send;

    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<(), EateryError>> + Send;
}
