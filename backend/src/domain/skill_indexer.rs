//! Keeps skill index memberships in step with profile changes.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::ports::SkillIndexRepository;
use crate::domain::{Error, ReindexPlan, SkillSets, UserId};

/// Applies [`ReindexPlan`]s through the index store's atomic membership
/// primitive.
#[derive(Clone)]
pub struct SkillIndexer<I> {
    index: Arc<I>,
}

impl<I> SkillIndexer<I> {
    /// Indexer writing through `index`.
    pub fn new(index: Arc<I>) -> Self {
        Self { index }
    }
}

impl<I> SkillIndexer<I>
where
    I: SkillIndexRepository,
{
    /// Move `user_id`'s memberships from the `old` skill sets to the `new`
    /// ones.
    ///
    /// Stale memberships are removed before new ones are added. Each write is
    /// one atomic add or remove on a single entry, so a failure part way
    /// leaves every untouched entry intact; the error names the skill, role,
    /// and operation that failed. Replaying the call converges because
    /// both operations are idempotent.
    pub async fn reindex_user(
        &self,
        user_id: &UserId,
        old: SkillSets<'_>,
        new: SkillSets<'_>,
    ) -> Result<(), Error> {
        let plan = ReindexPlan::new(old, new);
        for (applied, change) in plan.changes().iter().enumerate() {
            if let Err(err) = self
                .index
                .update_membership(&change.skill, change.role, user_id, change.op)
                .await
            {
                warn!(
                    %user_id,
                    skill = %change.skill,
                    role = %change.role,
                    op = %change.op,
                    applied,
                    error = %err,
                    "skill index update failed part way"
                );
                let details = json!({
                    "skill": change.skill.as_ref(),
                    "role": change.role.as_str(),
                    "op": change.op.to_string(),
                });
                return Err(Error::from(err).with_details(details));
            }
        }
        debug!(%user_id, writes = plan.changes().len(), "skill index updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockSkillIndexRepository, SkillIndexRepositoryError};
    use crate::domain::{ErrorCode, MembershipOp, SkillRole, SkillSet};
    use mockall::Sequence;
    use mockall::predicate::{always, eq};
    use rstest::rstest;

    fn set(raw: &[&str]) -> SkillSet {
        SkillSet::try_from_strings(raw.iter().copied()).expect("valid skills")
    }

    fn expect_write(
        index: &mut MockSkillIndexRepository,
        seq: &mut Sequence,
        skill: &str,
        role: SkillRole,
        op: MembershipOp,
    ) {
        let skill = crate::domain::SkillName::new(skill).expect("valid skill");
        index
            .expect_update_membership()
            .with(eq(skill), eq(role), always(), eq(op))
            .times(1)
            .in_sequence(seq)
            .returning(|_, _, _, _| Ok(()));
    }

    #[rstest]
    #[tokio::test]
    async fn removes_dropped_skills_before_adding() {
        let mut index = MockSkillIndexRepository::new();
        let mut seq = Sequence::new();
        expect_write(&mut index, &mut seq, "A", SkillRole::Teacher, MembershipOp::Remove);
        expect_write(&mut index, &mut seq, "B", SkillRole::Teacher, MembershipOp::Add);
        expect_write(&mut index, &mut seq, "C", SkillRole::Teacher, MembershipOp::Add);

        let indexer = SkillIndexer::new(Arc::new(index));
        let (old, new, none) = (set(&["A", "B"]), set(&["B", "C"]), SkillSet::empty());
        indexer
            .reindex_user(
                &UserId::random(),
                SkillSets {
                    teach: &old,
                    learn: &none,
                },
                SkillSets {
                    teach: &new,
                    learn: &none,
                },
            )
            .await
            .expect("reindex succeeds");
    }

    #[rstest]
    #[tokio::test]
    async fn stops_at_first_failure_and_names_it() {
        let mut index = MockSkillIndexRepository::new();
        index
            .expect_update_membership()
            .times(1)
            .returning(|_, _, _, _| Err(SkillIndexRepositoryError::connection("timeout")));

        let indexer = SkillIndexer::new(Arc::new(index));
        let (teach, none) = (set(&["Go", "Rust"]), SkillSet::empty());
        let err = indexer
            .reindex_user(
                &UserId::random(),
                SkillSets {
                    teach: &none,
                    learn: &none,
                },
                SkillSets {
                    teach: &teach,
                    learn: &none,
                },
            )
            .await
            .expect_err("store failure surfaces");

        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
        let details = err.details().expect("failure details");
        assert_eq!(details["skill"], "Go");
        assert_eq!(details["role"], "teacher");
        assert_eq!(details["op"], "add");
    }

    #[rstest]
    #[tokio::test]
    async fn empty_sets_issue_no_writes() {
        let mut index = MockSkillIndexRepository::new();
        index.expect_update_membership().times(0);
        let indexer = SkillIndexer::new(Arc::new(index));
        let none = SkillSet::empty();
        let sets = SkillSets {
            teach: &none,
            learn: &none,
        };
        indexer
            .reindex_user(&UserId::random(), sets, sets)
            .await
            .expect("nothing to do");
    }
}
