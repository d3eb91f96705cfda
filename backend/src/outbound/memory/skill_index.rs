//! In-memory [`SkillIndexRepository`].

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{SkillIndexRepository, SkillIndexRepositoryError};
use crate::domain::{MembershipOp, SkillIndexEntry, SkillName, SkillRole, UserId};

fn poisoned() -> SkillIndexRepositoryError {
    SkillIndexRepositoryError::connection("skill index lock poisoned")
}

/// Inverted index keyed by skill name.
///
/// Entries left empty by removals are kept, matching a store that never
/// garbage-collects keys.
#[derive(Debug, Default)]
pub struct InMemorySkillIndex {
    entries: RwLock<HashMap<SkillName, SkillIndexEntry>>,
}

impl InMemorySkillIndex {
    /// Index with no entries.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SkillIndexRepository for InMemorySkillIndex {
    async fn get_entry(
        &self,
        skill: &SkillName,
    ) -> Result<Option<SkillIndexEntry>, SkillIndexRepositoryError> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(skill).cloned())
    }

    async fn update_membership(
        &self,
        skill: &SkillName,
        role: SkillRole,
        user_id: &UserId,
        op: MembershipOp,
    ) -> Result<(), SkillIndexRepositoryError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        match op {
            MembershipOp::Add => {
                entries
                    .entry(skill.clone())
                    .or_insert_with(|| SkillIndexEntry::new(skill.clone()))
                    .apply(role, user_id, op);
            }
            MembershipOp::Remove => {
                if let Some(entry) = entries.get_mut(skill) {
                    entry.apply(role, user_id, op);
                }
            }
        }
        Ok(())
    }
}
