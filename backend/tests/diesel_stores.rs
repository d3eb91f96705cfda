//! Diesel profile and skill index stores against embedded PostgreSQL.

use std::collections::BTreeSet;

use pg_embedded_setup_unpriv::TemporaryDatabase;
use rstest::{fixture, rstest};
use skillswap_backend::domain::ports::{
    ProfileRepository, ProfileRepositoryError, SkillIndexRepository,
};
use skillswap_backend::domain::{
    DisplayName, EmailAddress, MembershipOp, SkillName, SkillRole, SkillSet, UserId, UserProfile,
};
use skillswap_backend::outbound::persistence::{
    DbPool, DieselProfileRepository, DieselSkillIndexRepository, PoolConfig,
};
use tokio::runtime::Runtime;

mod support;

use support::{handle_cluster_setup_failure, provision_database};

struct TestContext {
    runtime: Runtime,
    profiles: DieselProfileRepository,
    index: DieselSkillIndexRepository,
    _database: TemporaryDatabase,
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let database = provision_database(&runtime)?;
    let config = PoolConfig::new(database.url())
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        profiles: DieselProfileRepository::new(pool.clone()),
        index: DieselSkillIndexRepository::new(pool),
        _database: database,
    })
}

#[fixture]
fn store_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn skill(raw: &str) -> SkillName {
    SkillName::new(raw).expect("valid skill")
}

fn profile(name: &str, teach: &[&str]) -> UserProfile {
    UserProfile::new(
        UserId::random(),
        DisplayName::new(name).expect("valid name"),
        EmailAddress::new(format!("{}@example.com", name.to_lowercase())).expect("valid email"),
    )
    .with_skills(
        SkillSet::try_from_strings(teach.iter().copied()).expect("valid skills"),
        SkillSet::empty(),
    )
}

impl TestContext {
    fn add(&self, skill: &SkillName, role: SkillRole, user: &UserId) {
        self.runtime
            .block_on(self.index.update_membership(skill, role, user, MembershipOp::Add))
            .expect("add membership");
    }

    fn remove(&self, skill: &SkillName, role: SkillRole, user: &UserId) {
        self.runtime
            .block_on(self.index.update_membership(skill, role, user, MembershipOp::Remove))
            .expect("remove membership");
    }

    fn members(&self, skill: &SkillName) -> Option<(BTreeSet<UserId>, BTreeSet<UserId>)> {
        self.runtime
            .block_on(self.index.get_entry(skill))
            .expect("read entry")
            .map(|entry| (entry.teachers().clone(), entry.learners().clone()))
    }

    fn save(&self, profile: &UserProfile) -> Result<(), ProfileRepositoryError> {
        self.runtime.block_on(self.profiles.save(profile))
    }
}

#[rstest]
fn adding_a_member_twice_keeps_one_membership(store_context: Option<TestContext>) {
    let Some(ctx) = store_context else {
        eprintln!("SKIP-TEST-CLUSTER: adding_a_member_twice_keeps_one_membership skipped");
        return;
    };
    let rust = skill("Rust");
    let alice = UserId::random();

    ctx.add(&rust, SkillRole::Teacher, &alice);
    ctx.add(&rust, SkillRole::Teacher, &alice);

    let (teachers, learners) = ctx.members(&rust).expect("entry exists");
    assert_eq!(teachers, BTreeSet::from([alice]));
    assert!(learners.is_empty());
}

#[rstest]
fn removing_a_member_touches_one_role_only(store_context: Option<TestContext>) {
    let Some(ctx) = store_context else {
        eprintln!("SKIP-TEST-CLUSTER: removing_a_member_touches_one_role_only skipped");
        return;
    };
    let rust = skill("Rust");
    let alice = UserId::random();
    ctx.add(&rust, SkillRole::Teacher, &alice);
    ctx.add(&rust, SkillRole::Learner, &alice);

    ctx.remove(&rust, SkillRole::Learner, &alice);
    ctx.remove(&rust, SkillRole::Learner, &alice);

    let (teachers, learners) = ctx.members(&rust).expect("entry exists");
    assert_eq!(teachers, BTreeSet::from([alice.clone()]));
    assert!(learners.is_empty());

    ctx.remove(&rust, SkillRole::Teacher, &alice);
    assert!(ctx.members(&rust).is_none(), "an entry without members is absent");
}

#[rstest]
fn entries_split_memberships_by_role_and_skill(store_context: Option<TestContext>) {
    let Some(ctx) = store_context else {
        eprintln!("SKIP-TEST-CLUSTER: entries_split_memberships_by_role_and_skill skipped");
        return;
    };
    let (rust, go) = (skill("Rust"), skill("Go"));
    let (alice, bob, carol) = (UserId::random(), UserId::random(), UserId::random());
    ctx.add(&rust, SkillRole::Teacher, &alice);
    ctx.add(&rust, SkillRole::Learner, &bob);
    ctx.add(&rust, SkillRole::Teacher, &carol);
    ctx.add(&rust, SkillRole::Learner, &carol);
    ctx.add(&go, SkillRole::Learner, &alice);

    let (teachers, learners) = ctx.members(&rust).expect("rust entry");
    assert_eq!(teachers, BTreeSet::from([alice.clone(), carol.clone()]));
    assert_eq!(learners, BTreeSet::from([bob, carol]));

    let (teachers, learners) = ctx.members(&go).expect("go entry");
    assert!(teachers.is_empty());
    assert_eq!(learners, BTreeSet::from([alice]));

    assert!(ctx.members(&skill("Haskell")).is_none());
}

#[rstest]
fn list_all_returns_profiles_in_insertion_order(store_context: Option<TestContext>) {
    let Some(ctx) = store_context else {
        eprintln!("SKIP-TEST-CLUSTER: list_all_returns_profiles_in_insertion_order skipped");
        return;
    };
    let names = ["Carol", "Alice", "Bob"];
    for name in names {
        ctx.save(&profile(name, &[])).expect("save profile");
    }

    let listed: Vec<String> = ctx
        .runtime
        .block_on(ctx.profiles.list_all())
        .expect("list profiles")
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(listed, names);
}

#[rstest]
fn save_upserts_an_existing_profile(store_context: Option<TestContext>) {
    let Some(ctx) = store_context else {
        eprintln!("SKIP-TEST-CLUSTER: save_upserts_an_existing_profile skipped");
        return;
    };
    let alice = profile("Alice", &["JS", "React"]);
    ctx.save(&alice).expect("insert");
    ctx.save(&profile("Bob", &[])).expect("insert other");
    let updated = alice.clone().with_skills(
        SkillSet::try_from_strings(["Rust"]).expect("valid skills"),
        SkillSet::try_from_strings(["Go"]).expect("valid skills"),
    );
    ctx.save(&updated).expect("upsert");

    let fetched = ctx
        .runtime
        .block_on(ctx.profiles.find_by_id(alice.id()))
        .expect("find profile")
        .expect("profile exists");
    assert_eq!(fetched, updated);
    let listed = ctx
        .runtime
        .block_on(ctx.profiles.list_all())
        .expect("list profiles");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id(), alice.id(), "an upsert keeps the original position");
}

#[rstest]
fn save_rejects_an_email_owned_by_another_profile(store_context: Option<TestContext>) {
    let Some(ctx) = store_context else {
        eprintln!("SKIP-TEST-CLUSTER: save_rejects_an_email_owned_by_another_profile skipped");
        return;
    };
    let alice = profile("Alice", &[]);
    ctx.save(&alice).expect("insert");
    let impostor = UserProfile::new(
        UserId::random(),
        DisplayName::new("Mallory").expect("valid name"),
        alice.email().clone(),
    );

    let err = ctx.save(&impostor).expect_err("email taken");
    assert_eq!(err, ProfileRepositoryError::duplicate_email("alice@example.com"));
}

#[rstest]
fn delete_reports_whether_a_profile_existed(store_context: Option<TestContext>) {
    let Some(ctx) = store_context else {
        eprintln!("SKIP-TEST-CLUSTER: delete_reports_whether_a_profile_existed skipped");
        return;
    };
    let alice = profile("Alice", &[]);
    ctx.save(&alice).expect("insert");

    assert!(ctx.runtime.block_on(ctx.profiles.delete(alice.id())).expect("delete"));
    assert!(!ctx.runtime.block_on(ctx.profiles.delete(alice.id())).expect("delete again"));
    assert!(
        ctx.runtime
            .block_on(ctx.profiles.find_by_id(alice.id()))
            .expect("find profile")
            .is_none()
    );
}
