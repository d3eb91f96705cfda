//! Diesel row types. Internal to the persistence adapters.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{profiles, skill_index_members};

/// Row read from `profiles`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProfileRow {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub teach_skills: Vec<String>,
    pub learn_skills: Vec<String>,
}

/// Values written on insert; conflicts update from `excluded`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = profiles)]
pub(crate) struct ProfileWrite<'a> {
    pub id: Uuid,
    pub display_name: &'a str,
    pub email: &'a str,
    pub teach_skills: Vec<String>,
    pub learn_skills: Vec<String>,
}

/// Membership row read from `skill_index_members`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = skill_index_members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MembershipRow {
    pub role: String,
    pub user_id: Uuid,
}

/// Membership row written to `skill_index_members`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = skill_index_members)]
pub(crate) struct NewMembershipRow<'a> {
    pub skill: &'a str,
    pub role: &'a str,
    pub user_id: Uuid,
}
