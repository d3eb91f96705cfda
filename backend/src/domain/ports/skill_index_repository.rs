//! Port for the inverted skill index store.
//!
//! Membership writes go through [`SkillIndexRepository::update_membership`],
//! which adapters must implement as a single atomic set operation on one
//! entry. Domain code never reads an entry, edits it, and writes it back.

use async_trait::async_trait;

use crate::domain::{MembershipOp, SkillIndexEntry, SkillName, SkillRole, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by skill index adapters.
    pub enum SkillIndexRepositoryError {
        /// The store could not be reached.
        Connection => ServiceUnavailable, "skill index connection failed: {message}",
        /// A query or mutation failed during execution.
        Query => InternalError, "skill index query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillIndexRepository: Send + Sync {
    /// Current entry for `skill`, or `None` if nobody ever referenced it.
    async fn get_entry(
        &self,
        skill: &SkillName,
    ) -> Result<Option<SkillIndexEntry>, SkillIndexRepositoryError>;

    /// Atomically add or remove `user_id` from one role of one entry.
    ///
    /// Adding creates the entry when absent. Both operations are idempotent.
    async fn update_membership(
        &self,
        skill: &SkillName,
        role: SkillRole,
        user_id: &UserId,
        op: MembershipOp,
    ) -> Result<(), SkillIndexRepositoryError>;
}

/// Index with no entries that ignores writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSkillIndexRepository;

#[async_trait]
impl SkillIndexRepository for FixtureSkillIndexRepository {
    async fn get_entry(
        &self,
        _skill: &SkillName,
    ) -> Result<Option<SkillIndexEntry>, SkillIndexRepositoryError> {
        Ok(None)
    }

    async fn update_membership(
        &self,
        _skill: &SkillName,
        _role: SkillRole,
        _user_id: &UserId,
        _op: MembershipOp,
    ) -> Result<(), SkillIndexRepositoryError> {
        Ok(())
    }
}
