//! Edge cases: progression boundaries, level ladder, and evidence lifecycle.
//!
//! Exercises the exact thresholds of the requirement table and the
//! store's enforcement of one-step level changes.

use pdr_tracker::progression::{
    assess_level_up, eligible_for_level_up, meets_verified_threshold, progress,
    requirements_for, PROGRESS_THRESHOLD,
};
use pdr_tracker::record::{create_activity, create_competency};
use pdr_tracker::{
    ActivityDraft, ActivityPatch, ActivityStatus, Competency, CompetencyDraft, CompetencyPatch,
    PdrError, ProficiencyLevel, Store,
};

/// Competency at `level` with `verified`, `pending` and `rejected` evidence.
fn competency_with(
    level: ProficiencyLevel,
    verified: usize,
    pending: usize,
    rejected: usize,
) -> Competency {
    let mut c = create_competency(CompetencyDraft::new("Edge", ""));
    c.level = level;
    let statuses = std::iter::repeat(ActivityStatus::Verified)
        .take(verified)
        .chain(std::iter::repeat(ActivityStatus::Pending).take(pending))
        .chain(std::iter::repeat(ActivityStatus::Rejected).take(rejected));
    for (i, status) in statuses.enumerate() {
        c.evidence.push(create_activity(
            ActivityDraft::new(format!("e{i}"), "d", "2025-01-01", "p").status(status),
        ));
    }
    c
}

// ── Progress rounding ────────────────────────────────────────────────────────

#[test]
fn edge_progress_empty_is_zero() {
    let c = competency_with(ProficiencyLevel::Beginner, 0, 0, 0);
    assert_eq!(progress(&c), 0);
    assert!(!eligible_for_level_up(&c));
}

#[test]
fn edge_progress_rounds_half_up() {
    assert_eq!(progress(&competency_with(ProficiencyLevel::Beginner, 1, 2, 0)), 33);
    assert_eq!(progress(&competency_with(ProficiencyLevel::Beginner, 2, 1, 0)), 67);
    assert_eq!(progress(&competency_with(ProficiencyLevel::Beginner, 3, 5, 0)), 38);
    assert_eq!(progress(&competency_with(ProficiencyLevel::Beginner, 1, 7, 0)), 13);
    assert_eq!(progress(&competency_with(ProficiencyLevel::Beginner, 4, 0, 0)), 100);
}

#[test]
fn edge_rejected_evidence_counts_toward_total_only() {
    let c = competency_with(ProficiencyLevel::Beginner, 2, 0, 2);
    assert_eq!(progress(&c), 50);
    assert!(meets_verified_threshold(&c, 2));
    assert!(!meets_verified_threshold(&c, 3));
}

// ── Requirement boundaries ───────────────────────────────────────────────────

#[test]
fn edge_progress_threshold_is_inclusive() {
    // 3 of 4 verified is exactly the threshold.
    let c = competency_with(ProficiencyLevel::Beginner, 3, 1, 0);
    assert_eq!(progress(&c), PROGRESS_THRESHOLD);
    assert!(eligible_for_level_up(&c));
}

#[test]
fn edge_each_level_at_exact_minimum() {
    for level in [
        ProficiencyLevel::Beginner,
        ProficiencyLevel::Intermediate,
        ProficiencyLevel::Advanced,
    ] {
        let req = requirements_for(level.next());
        let c = competency_with(level, req.min_verified, req.min_evidence - req.min_verified, 0);
        let a = assess_level_up(&c);
        assert!(a.meets_verified, "{level}");
        assert!(a.meets_evidence, "{level}");
        assert_eq!(a.is_eligible, a.meets_progress, "{level}");
    }
}

#[test]
fn edge_advanced_minimum_fails_on_progress() {
    // 6 of 8 verified reaches 75%; 6 of 9 would not.
    let eight = competency_with(ProficiencyLevel::Advanced, 6, 2, 0);
    assert!(eligible_for_level_up(&eight));

    let nine = competency_with(ProficiencyLevel::Advanced, 6, 3, 0);
    let a = assess_level_up(&nine);
    assert!(a.meets_verified && a.meets_evidence);
    assert!(!a.meets_progress);
    assert!(!a.is_eligible);
    assert_eq!(a.shortfalls.len(), 1);
}

#[test]
fn edge_intermediate_one_short_of_each() {
    // Intermediate -> advanced needs 5 evidence, 4 verified.
    let a = assess_level_up(&competency_with(ProficiencyLevel::Intermediate, 3, 1, 0));
    assert!(!a.meets_verified);
    assert!(!a.meets_evidence);
    assert!(a.meets_progress);
    assert_eq!(a.shortfalls.len(), 2);
}

#[test]
fn edge_expert_is_measured_against_itself() {
    let a = assess_level_up(&competency_with(ProficiencyLevel::Expert, 8, 0, 0));
    assert_eq!(a.current_level, ProficiencyLevel::Expert);
    assert_eq!(a.target_level, ProficiencyLevel::Expert);
    assert!(a.is_eligible);

    let short = assess_level_up(&competency_with(ProficiencyLevel::Expert, 5, 0, 0));
    assert!(!short.is_eligible);
}

// ── Level ladder through the store ───────────────────────────────────────────

#[test]
fn edge_store_walks_full_ladder_one_step_at_a_time() {
    let mut store = Store::new();
    let id = store
        .add_competency(create_competency(CompetencyDraft::new("Ladder", "")))
        .unwrap()
        .id
        .clone();

    for to in [
        ProficiencyLevel::Intermediate,
        ProficiencyLevel::Advanced,
        ProficiencyLevel::Expert,
    ] {
        let c = store.update_competency(&id, &CompetencyPatch::level_up(to)).unwrap();
        assert_eq!(c.level, to);
    }

    // Expert to expert is a same-level update, not a skip.
    store
        .update_competency(&id, &CompetencyPatch::level_up(ProficiencyLevel::Expert))
        .unwrap();
}

#[test]
fn edge_store_rejects_skip_and_demotion() {
    let mut store = Store::new();
    let id = store
        .add_competency(create_competency(CompetencyDraft::new("Ladder", "")))
        .unwrap()
        .id
        .clone();

    let err = store
        .update_competency(&id, &CompetencyPatch::level_up(ProficiencyLevel::Advanced))
        .unwrap_err();
    assert!(matches!(
        err,
        PdrError::LevelTransition {
            from: ProficiencyLevel::Beginner,
            to: ProficiencyLevel::Advanced
        }
    ));
    assert!(err.is_validation());

    store
        .update_competency(&id, &CompetencyPatch::level_up(ProficiencyLevel::Intermediate))
        .unwrap();
    let err = store
        .update_competency(&id, &CompetencyPatch::level_up(ProficiencyLevel::Beginner))
        .unwrap_err();
    assert!(matches!(err, PdrError::LevelTransition { .. }));
    assert_eq!(
        store.competency(&id).unwrap().level,
        ProficiencyLevel::Intermediate
    );
}

// ── Evidence lifecycle ───────────────────────────────────────────────────────

#[test]
fn edge_deleted_activity_stays_as_evidence() {
    let mut store = Store::new();
    let cid = store
        .add_competency(create_competency(CompetencyDraft::new("Keep", "")))
        .unwrap()
        .id
        .clone();
    let aid = store
        .add_activity(create_activity(
            ActivityDraft::new("Course", "d", "2025-01-01", "p").status(ActivityStatus::Verified),
        ))
        .unwrap()
        .id
        .clone();
    store.link_evidence(&cid, &aid).unwrap();

    assert!(store.delete_activity(&aid));
    assert!(store.activity(&aid).is_none());

    let c = store.competency(&cid).unwrap();
    assert_eq!(c.evidence.len(), 1);
    assert_eq!(progress(c), 100);

    // The activity is gone from the store, so it cannot be patched anymore.
    let err = store
        .update_activity(&aid, &ActivityPatch::status(ActivityStatus::Rejected))
        .unwrap_err();
    assert!(matches!(err, PdrError::NotFound(_)));
}

#[test]
fn edge_same_activity_linked_twice_counts_twice() {
    let mut store = Store::new();
    let cid = store
        .add_competency(create_competency(CompetencyDraft::new("Twice", "")))
        .unwrap()
        .id
        .clone();
    let aid = store
        .add_activity(create_activity(ActivityDraft::new(
            "Course",
            "d",
            "2025-01-01",
            "p",
        )))
        .unwrap()
        .id
        .clone();

    store.link_evidence(&cid, &aid).unwrap();
    store.link_evidence(&cid, &aid).unwrap();
    assert_eq!(store.competency(&cid).unwrap().evidence.len(), 2);
    assert_eq!(store.activity(&aid).unwrap().competencies, vec![cid.clone()]);

    store
        .update_activity(&aid, &ActivityPatch::status(ActivityStatus::Verified))
        .unwrap();
    assert_eq!(progress(store.competency(&cid).unwrap()), 100);
}
