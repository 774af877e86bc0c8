//! Menu service — use-cases for managing menu items.

use eatery_domain::error::{EateryError, NotFoundError};
use eatery_domain::id::MenuItemId;
use eatery_domain::menu_item::MenuItem;

use crate::ports::MenuItemRepository;

/// Field values submitted when creating or editing a menu item.
///
/// `image` is `None` when no new picture was uploaded.
#[derive(Debug, Clone, Default)]
pub struct MenuItemInput {
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub description: String,
    pub image: Option<String>,
}

impl MenuItemInput {
    /// Check the input against the menu item invariants without storing it.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Validation`] if an invariant fails.
    pub fn validate(&self) -> Result<(), EateryError> {
        self.clone().into_menu_item(MenuItemId::new(), None).map(|_| ())
    }

    fn into_menu_item(
        self,
        id: MenuItemId,
        current_image: Option<String>,
    ) -> Result<MenuItem, EateryError> {
        let mut builder = MenuItem::builder()
            .id(id)
            .name(self.name)
            .price(self.price)
            .description(self.description);
        if let Some(category) = self.category {
            builder = builder.category(category);
        }
        if let Some(image) = self.image.or(current_image) {
            builder = builder.image(image);
        }
        builder.build()
    }
}

/// Application service for menu item CRUD operations.
pub struct MenuService<R> {
    repo: R,
}

impl<R: MenuItemRepository> MenuService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new menu item after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_menu_item(&self, input: MenuItemInput) -> Result<MenuItem, EateryError> {
        let item = input.into_menu_item(MenuItemId::new(), None)?;
        let item = self.repo.create(item).await?;
        tracing::info!(id = %item.id, name = %item.name, "menu item added");
        Ok(item)
    }

    /// Look up a menu item by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::NotFound`] when no item with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_menu_item(&self, id: MenuItemId) -> Result<MenuItem, EateryError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "MenuItem",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all menu items.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_menu_items(&self) -> Result<Vec<MenuItem>, EateryError> {
        self.repo.get_all().await
    }

    /// Replace the fields of an existing menu item.
    ///
    /// When `input.image` is `None` the stored image path is kept as is.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::NotFound`] if the item does not exist,
    /// [`EateryError::Validation`] if invariants fail, or a storage error.
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        input: MenuItemInput,
    ) -> Result<MenuItem, EateryError> {
        let existing = self.get_menu_item(id).await?;

        let item = input.into_menu_item(id, Some(existing.image))?;
        let item = self.repo.update(item).await?;
        tracing::info!(id = %item.id, "menu item updated");
        Ok(item)
    }

    /// Delete a menu item by id and return the removed record, so the
    /// caller can discard its picture.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::NotFound`] if the item does not exist, or a
    /// storage error propagated from the repository.
    pub async fn delete_menu_item(&self, id: MenuItemId) -> Result<MenuItem, EateryError> {
        let item = self.get_menu_item(id).await?;
        self.repo.delete(id).await?;
        tracing::info!(%id, "menu item deleted");
        Ok(item)
    }

    /// Number of items on the menu.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count(&self) -> Result<usize, EateryError> {
        Ok(self.repo.get_all().await?.len())
    }
}
