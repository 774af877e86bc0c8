//! Review — customer feedback shown on the site once an admin publishes it.

use serde::{Deserialize, Serialize};

use crate::error::{EateryError, ValidationError};
use crate::id::ReviewId;
use crate::time::{Timestamp, now};

/// Lowest accepted star rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted star rating.
pub const MAX_RATING: u8 = 5;

/// A customer review.
///
/// Reviews start unpublished; only [`Review::publish`] and
/// [`Review::unpublish`] change `is_published`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub name: String,
    pub rating: u8,
    pub message: String,
    pub is_published: bool,
    pub created_at: Timestamp,
}

impl Review {
    /// Create an unpublished review stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Validation`] when `name` is blank or `rating`
    /// falls outside [`MIN_RATING`]..=[`MAX_RATING`].
    pub fn submit(
        name: impl Into<String>,
        rating: u8,
        message: impl Into<String>,
    ) -> Result<Self, EateryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ValidationError::RatingOutOfRange {
                min: MIN_RATING,
                max: MAX_RATING,
            }
            .into());
        }
        Ok(Self {
            id: ReviewId::new(),
            name,
            rating,
            message: message.into(),
            is_published: false,
            created_at: now(),
        })
    }

    pub fn publish(&mut self) {
        self.is_published = true;
    }

    pub fn unpublish(&mut self) {
        self.is_published = false;
    }
}
