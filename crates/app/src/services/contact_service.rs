//! Contact service — inbound messages from the contact form.

use eatery_domain::contact::Contact;
use eatery_domain::error::{EateryError, NotFoundError};
use eatery_domain::id::ContactId;

use crate::ports::ContactRepository;

/// Application service for contact messages. There is no update use-case.
pub struct ContactService<R> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a contact message.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_contact(&self, contact: Contact) -> Result<Contact, EateryError> {
        let contact = self.repo.create(contact).await?;
        tracing::info!(id = %contact.id, "contact message received");
        Ok(contact)
    }

    /// List all contact messages, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, EateryError> {
        self.repo.get_all().await
    }

    /// Delete a contact message by id.
    ///
    /// # Errors
    ///
    /// Returns [`EateryError::NotFound`] if the message does not exist, or a
    /// storage error propagated from the repository.
    pub async fn delete_contact(&self, id: ContactId) -> Result<(), EateryError> {
        if self.repo.get_by_id(id).await?.is_none() {
            return Err(NotFoundError {
                entity: "Contact",
                id: id.to_string(),
            }
            .into());
        }
        self.repo.delete(id).await?;
        tracing::info!(%id, "contact message deleted");
        Ok(())
    }

    /// Number of stored contact messages.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count(&self) -> Result<usize, EateryError> {
        Ok(self.repo.get_all().await?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryContactRepo {
        store: Mutex<Vec<Contact>>,
    }

    impl ContactRepository for InMemoryContactRepo {
        fn create(
            &self,
            contact: Contact,
        ) -> impl Future<Output = Result<Contact, EateryError>> + Send {
            self.store.lock().unwrap().push(contact.clone());
            async { Ok(contact) }
        }

        fn get_by_id(
            &self,
            id: ContactId,
        ) -> impl Future<Output = Result<Option<Contact>, EateryError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.iter().find(|c| c.id == id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Contact>, EateryError>> + Send {
            let mut result = self.store.lock().unwrap().clone();
            result.reverse();
            async { Ok(result) }
        }

        fn delete(&self, id: ContactId) -> impl Future<Output = Result<(), EateryError>> + Send {
            self.store.lock().unwrap().retain(|c| c.id != id);
            async { Ok(()) }
        }
    }

    fn make_service() -> ContactService<InMemoryContactRepo> {
        ContactService::new(InMemoryContactRepo::default())
    }

    fn message(first: &str) -> Contact {
        Contact::new(first, "Lee", "lee@example.com", "Do you cater?").unwrap()
    }

    #[tokio::test]
    async fn should_create_and_list_contacts() {
        let svc = make_service();
        svc.create_contact(message("Ann")).await.unwrap();
        svc.create_contact(message("Bob")).await.unwrap();

        let all = svc.list_contacts().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].first_name, "Bob");
    }

    #[tokio::test]
    async fn should_delete_contact() {
        let svc = make_service();
        let created = svc.create_contact(message("Ann")).await.unwrap();

        svc.delete_contact(created.id).await.unwrap();
        assert_eq!(svc.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_contact() {
        let svc = make_service();
        let result = svc.delete_contact(ContactId::new()).await;
        assert!(matches!(result, Err(EateryError::NotFound(_))));
    }
}
