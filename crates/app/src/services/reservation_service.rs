//! Reservation service — use-cases for managing table bookings.

use eatery_domain::error::{EateryError, NotFoundError};
use eatery_domain::id::ReservationId;
use eatery_domain::reservation::{Reservation, ReservationDetails};

use crate::ports::ReservationRepository;

/// Application service for reservation CRUD operations.
pub struct ReservationService<R> {
    repo: R,
}

impl<R: ReservationRepository> ReservationService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Record a new reservation, stamping its creation time.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_reservation(
        &self,
        details: ReservationDetails,
    ) -> Result<Reservation, EateryError> {
        let reservation = self.repo.create(Reservation::new(details)?).await?;
        tracing::info!(
            id = %reservation.id,
            guests = reservation.guests,
            "reservation added"
        );
        Ok(reservation)
    }

    /// Look up a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::NotFound`] when no reservation with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_reservation(&self, id: ReservationId) -> Result<Reservation, EateryError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Reservation",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all reservations.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_reservations(&self) -> Result<Vec<Reservation>, EateryError> {
        self.repo.get_all().await
    }

    /// Replace the editable fields of a reservation. The creation time is
    /// preserved.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::NotFound`] if the reservation does not exist,
    /// [`EateryError::Validation`] if invariants fail, or a storage error.
    pub async fn update_reservation(
        &self,
        id: ReservationId,
        details: ReservationDetails,
    ) -> Result<Reservation, EateryError> {
        let mut reservation = self.get_reservation(id).await?;
        reservation.apply(details)?;
        let reservation = self.repo.update(reservation).await?;
        tracing::info!(%id, "reservation updated");
        Ok(reservation)
    }

    /// Delete a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::NotFound`] if the reservation does not exist,
    /// or a storage error propagated from the repository.
    pub async fn delete_reservation(&self, id: ReservationId) -> Result<(), EateryError> {
        self.get_reservation(id).await?;
        self.repo.delete(id).await?;
        tracing::info!(%id, "reservation deleted");
        Ok(())
    }

    /// Number of stored reservations.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count(&self) -> Result<usize, EateryError> {
        Ok(self.repo.get_all().await?.len())
    }
}
