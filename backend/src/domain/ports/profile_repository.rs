//! Port for the profile store.
//!
//! Adapters persist [`UserProfile`] documents and support point lookup and a
//! full-collection scan in a stable order (insertion order for both bundled
//! adapters).

use async_trait::async_trait;

use crate::domain::{UserId, UserProfile};

use super::define_port_error;

define_port_error! {
    /// Errors raised by profile store adapters.
    pub enum ProfileRepositoryError {
        /// The store could not be reached.
        Connection => ServiceUnavailable, "profile store connection failed: {message}",
        /// A query or mutation failed during execution.
        Query => InternalError, "profile store query failed: {message}",
        /// Another profile already uses the email address.
        DuplicateEmail => Conflict, "email address already registered: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch a profile by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, ProfileRepositoryError>;

    /// Every stored profile, in the store's stable iteration order.
    async fn list_all(&self) -> Result<Vec<UserProfile>, ProfileRepositoryError>;

    /// Insert or replace a profile.
    ///
    /// Email addresses are unique across profiles; saving a profile whose
    /// email belongs to a different id fails with
    /// [`ProfileRepositoryError::DuplicateEmail`].
    async fn save(&self, profile: &UserProfile) -> Result<(), ProfileRepositoryError>;

    /// Delete a profile; returns whether one existed.
    async fn delete(&self, id: &UserId) -> Result<bool, ProfileRepositoryError>;
}
