//! PostgreSQL-backed [`ProfileRepository`].
//!
//! Skill sets are stored as `text[]` columns in declaration order. Rows that
//! no longer satisfy the domain invariants are reported as query errors
//! rather than silently repaired.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ProfileRepository, ProfileRepositoryError};
use crate::domain::{DisplayName, EmailAddress, SkillSet, UserId, UserProfile};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ProfileRow, ProfileWrite};
use super::pool::{DbPool, PoolError};
use super::schema::profiles;

/// Diesel implementation of the profile store.
#[derive(Clone)]
pub struct DieselProfileRepository {
    pool: DbPool,
}

impl DieselProfileRepository {
    /// Repository drawing connections from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ProfileRepositoryError {
    map_basic_pool_error(error, ProfileRepositoryError::connection)
}

fn map_diesel_error(error: DieselError) -> ProfileRepositoryError {
    map_basic_diesel_error(
        error,
        ProfileRepositoryError::query,
        ProfileRepositoryError::connection,
    )
}

/// Upserts resolve id conflicts in SQL, so a unique violation can only come
/// from the email constraint.
fn map_save_error(error: DieselError, email: &str) -> ProfileRepositoryError {
    match &error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            ProfileRepositoryError::duplicate_email(email)
        }
        _ => map_diesel_error(error),
    }
}

fn row_to_profile(row: ProfileRow) -> Result<UserProfile, ProfileRepositoryError> {
    let id = row.id;
    let invalid = |field: &str, err: &dyn std::fmt::Display| {
        ProfileRepositoryError::query(format!("profile {id} has invalid {field}: {err}"))
    };
    let name = DisplayName::new(row.display_name).map_err(|e| invalid("name", &e))?;
    let email = EmailAddress::new(&row.email).map_err(|e| invalid("email", &e))?;
    let teach = SkillSet::try_from_strings(row.teach_skills.iter().map(String::as_str))
        .map_err(|e| invalid("teach skills", &e))?;
    let learn = SkillSet::try_from_strings(row.learn_skills.iter().map(String::as_str))
        .map_err(|e| invalid("learn skills", &e))?;
    Ok(UserProfile::new(UserId::from_uuid(id), name, email).with_skills(teach, learn))
}

fn profile_to_write(profile: &UserProfile) -> ProfileWrite<'_> {
    ProfileWrite {
        id: *profile.id().as_uuid(),
        display_name: profile.name().as_ref(),
        email: profile.email().as_ref(),
        teach_skills: profile.teach_skills().to_strings(),
        learn_skills: profile.learn_skills().to_strings(),
    }
}

#[async_trait]
impl ProfileRepository for DieselProfileRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = profiles::table
            .filter(profiles::id.eq(id.as_uuid()))
            .select(ProfileRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_profile).transpose()
    }

    async fn list_all(&self) -> Result<Vec<UserProfile>, ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ProfileRow> = profiles::table
            .order((profiles::created_at.asc(), profiles::id.asc()))
            .select(ProfileRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_profile).collect()
    }

    async fn save(&self, profile: &UserProfile) -> Result<(), ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let write = profile_to_write(profile);
        diesel::insert_into(profiles::table)
            .values(&write)
            .on_conflict(profiles::id)
            .do_update()
            .set((
                profiles::display_name.eq(excluded(profiles::display_name)),
                profiles::email.eq(excluded(profiles::email)),
                profiles::teach_skills.eq(excluded(profiles::teach_skills)),
                profiles::learn_skills.eq(excluded(profiles::learn_skills)),
                profiles::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_save_error(err, write.email))
    }

    async fn delete(&self, id: &UserId) -> Result<bool, ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(profiles::table.filter(profiles::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use uuid::Uuid;

    fn row(teach: &[&str]) -> ProfileRow {
        ProfileRow {
            id: Uuid::nil(),
            display_name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            teach_skills: teach.iter().map(|s| (*s).to_owned()).collect(),
            learn_skills: vec!["Python".to_owned()],
        }
    }

    #[rstest]
    fn rows_become_profiles_with_duplicates_dropped() {
        let profile = row_to_profile(row(&["JS", "React", "JS"])).expect("valid row");
        assert_eq!(profile.teach_skills().to_strings(), vec!["JS", "React"]);
        assert_eq!(profile.learn_skills().to_strings(), vec!["Python"]);
        assert_eq!(profile.id().as_uuid(), &Uuid::nil());
    }

    #[rstest]
    fn corrupt_rows_are_query_errors() {
        let err = row_to_profile(row(&["JS", "  "])).expect_err("blank skill in storage");
        assert!(matches!(err, ProfileRepositoryError::Query { .. }));
        assert!(err.to_string().contains("teach skills"));
    }

    #[rstest]
    fn unique_violations_on_save_are_duplicate_emails() {
        let err = map_save_error(
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                Box::new("duplicate key value violates unique constraint".to_owned()),
            ),
            "alice@example.com",
        );
        assert_eq!(err, ProfileRepositoryError::duplicate_email("alice@example.com"));
    }

    #[rstest]
    fn other_save_failures_keep_their_classification() {
        let err = map_save_error(DieselError::BrokenTransactionManager, "alice@example.com");
        assert!(matches!(err, ProfileRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn writes_borrow_profile_fields() {
        let profile = row_to_profile(row(&["JS"])).expect("valid row");
        let write = profile_to_write(&profile);
        assert_eq!(write.display_name, "Alice");
        assert_eq!(write.teach_skills, vec!["JS"]);
        assert_eq!(write.learn_skills, vec!["Python"]);
    }
}
