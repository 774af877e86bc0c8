//! Reservation — a table booking request.

use serde::{Deserialize, Serialize};

use crate::error::{EateryError, ValidationError};
use crate::id::ReservationId;
use crate::time::{Timestamp, now};

/// A booking request. `date` and `time` are kept exactly as the guest typed
/// them; no calendar or capacity checks are made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: ReservationId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub guests: u32,
    pub message: String,
    pub created_at: Timestamp,
}

/// The editable part of a [`Reservation`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReservationDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub guests: u32,
    pub message: String,
}

impl ReservationDetails {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Validation`] when `name` is empty or `guests`
    /// is zero.
    pub fn validate(&self) -> Result<(), EateryError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.guests == 0 {
            return Err(ValidationError::GuestsOutOfRange.into());
        }
        Ok(())
    }
}

impl Reservation {
    /// Create a new reservation stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Validation`] if `details` break an invariant.
    pub fn new(details: ReservationDetails) -> Result<Self, EateryError> {
        Self::with_created_at(details, now())
    }

    /// Create a reservation with an explicit creation time.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Validation`] if `details` break an invariant.
    pub fn with_created_at(
        details: ReservationDetails,
        created_at: Timestamp,
    ) -> Result<Self, EateryError> {
        details.validate()?;
        let ReservationDetails {
            name,
            phone,
            email,
            date,
            time,
            guests,
            message,
        } = details;
        Ok(Self {
            id: ReservationId::new(),
            name,
            phone,
            email,
            date,
            time,
            guests,
            message,
            created_at,
        })
    }

    /// Replace the editable fields. `id` and `created_at` are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Validation`] if `details` break an invariant;
    /// `self` is left unchanged in that case.
    pub fn apply(&mut self, details: ReservationDetails) -> Result<(), EateryError> {
        details.validate()?;
        self.name = details.name;
        self.phone = details.phone;
        self.email = details.email;
        self.date = details.date;
        self.time = details.time;
        self.guests = details.guests;
        self.message = details.message;
        Ok(())
    }
}
