//! Driving port for profile mutations.
//!
//! Every mutation keeps the skill index in step with the stored profile.

use async_trait::async_trait;

use crate::domain::{DisplayName, EmailAddress, Error, SkillsUpdate, UserId, UserProfile};

/// Domain use-case port for creating, editing, and deleting profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileCommand: Send + Sync {
    /// Register a new profile with empty skill sets.
    async fn create_profile(
        &self,
        name: DisplayName,
        email: EmailAddress,
    ) -> Result<UserProfile, Error>;

    /// Replace one or both skill sets and reindex the user.
    async fn update_skills(
        &self,
        user_id: &UserId,
        update: SkillsUpdate,
    ) -> Result<UserProfile, Error>;

    /// Delete the profile and drop every index membership it held.
    async fn delete_profile(&self, user_id: &UserId) -> Result<(), Error>;
}
