//! Profile lifecycle service.
//!
//! Owns the write path for profiles, so it is also the only caller of
//! [`SkillIndexer::reindex_user`]: the stored profile is written first and
//! the index follows.
//!
//! Skill updates and deletions for one user run one at a time. Each write
//! reindexes from the profile it loaded, so two interleaved writes could
//! otherwise apply their membership changes out of order and leave the index
//! disagreeing with the stored profile.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::info;

use crate::domain::ports::{ProfileCommand, ProfileQuery, ProfileRepository, SkillIndexRepository};
use crate::domain::{
    DisplayName, EmailAddress, Error, SkillIndexer, SkillSet, SkillSets, SkillsUpdate, UserId,
    UserProfile,
};

/// Write locks keyed by user.
///
/// Slots nobody holds or waits on are pruned on the next acquisition.
#[derive(Debug, Default)]
struct UserLocks {
    slots: Mutex<HashMap<UserId, Arc<AsyncMutex<()>>>>,
}

impl UserLocks {
    async fn acquire(&self, user_id: &UserId) -> OwnedMutexGuard<()> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.retain(|_, slot| Arc::strong_count(slot) > 1);
            Arc::clone(slots.entry(user_id.clone()).or_default())
        };
        slot.lock_owned().await
    }
}

/// Profile service implementing [`ProfileCommand`] and [`ProfileQuery`].
///
/// Clones share their write locks, so every handle built from one service
/// serialises writes for the same user.
#[derive(Clone)]
pub struct ProfileService<P, I> {
    profiles: Arc<P>,
    indexer: SkillIndexer<I>,
    locks: Arc<UserLocks>,
}

impl<P, I> ProfileService<P, I> {
    /// Build a service over a profile store and the skill index it feeds.
    pub fn new(profiles: Arc<P>, index: Arc<I>) -> Self {
        Self {
            profiles,
            indexer: SkillIndexer::new(index),
            locks: Arc::new(UserLocks::default()),
        }
    }
}

fn skill_sets(profile: &UserProfile) -> SkillSets<'_> {
    SkillSets {
        teach: profile.teach_skills(),
        learn: profile.learn_skills(),
    }
}

impl<P, I> ProfileService<P, I>
where
    P: ProfileRepository,
    I: SkillIndexRepository,
{
    async fn load(&self, user_id: &UserId) -> Result<UserProfile, Error> {
        self.profiles
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("profile {user_id} not found")))
    }
}

#[async_trait]
impl<P, I> ProfileQuery for ProfileService<P, I>
where
    P: ProfileRepository,
    I: SkillIndexRepository,
{
    async fn fetch_profile(&self, user_id: &UserId) -> Result<UserProfile, Error> {
        self.load(user_id).await
    }
}

#[async_trait]
impl<P, I> ProfileCommand for ProfileService<P, I>
where
    P: ProfileRepository,
    I: SkillIndexRepository,
{
    async fn create_profile(
        &self,
        name: DisplayName,
        email: EmailAddress,
    ) -> Result<UserProfile, Error> {
        let profile = UserProfile::new(UserId::random(), name, email);
        self.profiles.save(&profile).await?;
        info!(user_id = %profile.id(), "profile created");
        Ok(profile)
    }

    async fn update_skills(
        &self,
        user_id: &UserId,
        update: SkillsUpdate,
    ) -> Result<UserProfile, Error> {
        let _guard = self.locks.acquire(user_id).await;
        let current = self.load(user_id).await?;
        if update.is_empty() {
            return Ok(current);
        }
        let updated = current.clone().apply(update);
        self.profiles.save(&updated).await?;
        self.indexer
            .reindex_user(user_id, skill_sets(&current), skill_sets(&updated))
            .await?;
        info!(
            %user_id,
            teach = updated.teach_skills().len(),
            learn = updated.learn_skills().len(),
            "profile skills updated"
        );
        Ok(updated)
    }

    async fn delete_profile(&self, user_id: &UserId) -> Result<(), Error> {
        let _guard = self.locks.acquire(user_id).await;
        let current = self.load(user_id).await?;
        if !self.profiles.delete(user_id).await? {
            return Err(Error::not_found(format!("profile {user_id} not found")));
        }
        let none = SkillSet::empty();
        self.indexer
            .reindex_user(
                user_id,
                skill_sets(&current),
                SkillSets {
                    teach: &none,
                    learn: &none,
                },
            )
            .await?;
        info!(%user_id, "profile deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "profile_service_tests.rs"]
mod tests;
