//! Driving port for reading a profile.

use async_trait::async_trait;

use crate::domain::{Error, UserId, UserProfile};

/// Domain use-case port for loading the current user's profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// The stored profile, or `not_found`.
    async fn fetch_profile(&self, user_id: &UserId) -> Result<UserProfile, Error>;
}
