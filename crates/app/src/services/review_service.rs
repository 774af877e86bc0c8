//! Review service — submission and moderation of customer reviews.

use eatery_domain::error::{EateryError, NotFoundError};
use eatery_domain::id::ReviewId;
use eatery_domain::review::Review;

use crate::ports::ReviewRepository;

/// Application service for reviews.
///
/// Submitted reviews are always stored unpublished; an admin must publish
/// them before they show up in [`ReviewService::list_published`].
pub struct ReviewService<R> {
    repo: R,
}

impl<R: ReviewRepository> ReviewService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Submit a review for moderation.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Validation`] if the name is blank or the rating
    /// is out of range, or a storage error from the repository.
    pub async fn submit_review(
        &self,
        name: String,
        rating: u8,
        message: String,
    ) -> Result<Review, EateryError> {
        let review = self.repo.create(Review::submit(name, rating, message)?).await?;
        tracing::info!(id = %review.id, rating = review.rating, "review submitted");
        Ok(review)
    }

    /// Look up a review by id.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::NotFound`] when no review with `id` exists, or
    /// a storage error from the repository.
    pub async fn get_review(&self, id: ReviewId) -> Result<Review, EateryError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Review",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Published reviews, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_published(&self) -> Result<Vec<Review>, EateryError> {
        self.repo.get_published().await
    }

    /// Every review regardless of state, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_reviews(&self) -> Result<Vec<Review>, EateryError> {
        self.repo.get_all().await
    }

    /// Make a review visible. Publishing twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::NotFound`] if the review does not exist, or a
    /// storage error propagated from the repository.
    pub async fn publish(&self, id: ReviewId) -> Result<Review, EateryError> {
        let mut review = self.get_review(id).await?;
        review.publish();
        self.repo.set_published(id, review.is_published).await?;
        tracing::info!(%id, "review published");
        Ok(review)
    }

    /// Hide a review again. Unpublishing twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::NotFound`] if the review does not exist, or a
    /// storage error propagated from the repository.
    pub async fn unpublish(&self, id: ReviewId) -> Result<Review, EateryError> {
        let mut review = self.get_review(id).await?;
        review.unpublish();
        self.repo.set_published(id, review.is_published).await?;
        tracing::info!(%id, "review unpublished");
        Ok(review)
    }

    /// Delete a review by id.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::NotFound`] if the review does not exist, or a
    /// storage error propagated from the repository.
    pub async fn delete_review(&self, id: ReviewId) -> Result<(), EateryError> {
        self.get_review(id).await?;
        self.repo.delete(id).await?;
        tracing::info!(%id, "review deleted");
        Ok(())
    }
}
