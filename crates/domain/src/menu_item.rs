//! Menu item — a dish or drink listed on the restaurant menu.

use serde::{Deserialize, Serialize};

use crate::error::{EateryError, ValidationError};
use crate::id::MenuItemId;

/// A single entry on the menu.
///
/// `image` holds the public path of the uploaded picture, or an empty
/// string when the item has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub description: String,
    pub image: String,
}

impl MenuItem {
    /// Create a builder for constructing a [`MenuItem`].
    #[must_use]
    pub fn builder() -> MenuItemBuilder {
        MenuItemBuilder::default()
    }

    /// Whether an image has been attached to this item.
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Validation`] when `name` is empty or `price`
    /// is negative or not finite.
    pub fn validate(&self) -> Result<(), EateryError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::NegativePrice.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`MenuItem`].
#[derive(Debug, Default)]
pub struct MenuItemBuilder {
    id: Option<MenuItemId>,
    name: Option<String>,
    category: Option<String>,
    price: Option<f64>,
    description: Option<String>,
    image: Option<String>,
}

impl MenuItemBuilder {
    #[must_use]
    pub fn id(mut self, id: MenuItemId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Blank categories are treated as absent.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.trim().is_empty() {
            None
        } else {
            Some(category)
        };
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Consume the builder, validate, and return a [`MenuItem`].
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Validation`] if `price` is missing or any
    /// invariant of [`MenuItem::validate`] fails.
    pub fn build(self) -> Result<MenuItem, EateryError> {
        let price = self
            .price
            .ok_or(ValidationError::MissingField { field: "price" })?;
        let item = MenuItem {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            category: self.category,
            price,
            description: self.description.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
        };
        item.validate()?;
        Ok(item)
    }
}
