//! PostgreSQL-backed [`SkillIndexRepository`].
//!
//! Each membership is its own row keyed by `(skill, role, user_id)`, so a
//! single `INSERT .. ON CONFLICT DO NOTHING` or `DELETE` is the whole
//! set operation and concurrent reindexes never overwrite each other.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{SkillIndexRepository, SkillIndexRepositoryError};
use crate::domain::{MembershipOp, SkillIndexEntry, SkillName, SkillRole, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{MembershipRow, NewMembershipRow};
use super::pool::{DbPool, PoolError};
use super::schema::skill_index_members;

/// Diesel implementation of the inverted skill index.
#[derive(Clone)]
pub struct DieselSkillIndexRepository {
    pool: DbPool,
}

impl DieselSkillIndexRepository {
    /// Repository drawing connections from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SkillIndexRepositoryError {
    map_basic_pool_error(error, SkillIndexRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> SkillIndexRepositoryError {
    map_basic_diesel_error(
        error,
        SkillIndexRepositoryError::query,
        SkillIndexRepositoryError::connection,
    )
}

fn parse_role(raw: &str) -> Result<SkillRole, SkillIndexRepositoryError> {
    match raw {
        "teacher" => Ok(SkillRole::Teacher),
        "learner" => Ok(SkillRole::Learner),
        other => Err(SkillIndexRepositoryError::query(format!(
            "unknown membership role {other:?}"
        ))),
    }
}

fn rows_to_entry(
    skill: &SkillName,
    rows: Vec<MembershipRow>,
) -> Result<Option<SkillIndexEntry>, SkillIndexRepositoryError> {
    if rows.is_empty() {
        return Ok(None);
    }
    let mut entry = SkillIndexEntry::new(skill.clone());
    for row in rows {
        let role = parse_role(&row.role)?;
        entry.apply(role, &UserId::from_uuid(row.user_id), MembershipOp::Add);
    }
    Ok(Some(entry))
}

#[async_trait]
impl SkillIndexRepository for DieselSkillIndexRepository {
    async fn get_entry(
        &self,
        skill: &SkillName,
    ) -> Result<Option<SkillIndexEntry>, SkillIndexRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<MembershipRow> = skill_index_members::table
            .filter(skill_index_members::skill.eq(skill.as_ref()))
            .select(MembershipRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_entry(skill, rows)
    }

    async fn update_membership(
        &self,
        skill: &SkillName,
        role: SkillRole,
        user_id: &UserId,
        op: MembershipOp,
    ) -> Result<(), SkillIndexRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let affected = match op {
            MembershipOp::Add => {
                let row = NewMembershipRow {
                    skill: skill.as_ref(),
                    role: role.as_str(),
                    user_id: *user_id.as_uuid(),
                };
                diesel::insert_into(skill_index_members::table)
                    .values(&row)
                    .on_conflict_do_nothing()
                    .execute(&mut conn)
                    .await
            }
            MembershipOp::Remove => {
                diesel::delete(
                    skill_index_members::table
                        .filter(skill_index_members::skill.eq(skill.as_ref()))
                        .filter(skill_index_members::role.eq(role.as_str()))
                        .filter(skill_index_members::user_id.eq(user_id.as_uuid())),
                )
                .execute(&mut conn)
                .await
            }
        }
        .map_err(map_diesel_error)?;
        tracing::trace!(%skill, %role, %op, affected, "index membership written");
        Ok(())
    }
}
