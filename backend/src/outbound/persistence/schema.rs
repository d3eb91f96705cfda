//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations`; regenerate with `diesel print-schema`
//! after a migration changes.

diesel::table! {
    /// User profiles with their declared skill sets.
    profiles (id) {
        id -> Uuid,
        /// Display name (max 32 characters).
        display_name -> Varchar,
        email -> Varchar,
        /// Skills the user can teach, in declaration order.
        teach_skills -> Array<Text>,
        /// Skills the user wants to learn, in declaration order.
        learn_skills -> Array<Text>,
        /// Insertion timestamp; defines full-scan order.
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Inverted skill index: one row per (skill, role, user) membership.
    skill_index_members (skill, role, user_id) {
        skill -> Varchar,
        /// `teacher` or `learner`.
        role -> Varchar,
        user_id -> Uuid,
        added_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(profiles, skill_index_members);
