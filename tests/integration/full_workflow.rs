//! Integration test: full end-to-end workflow.
//!
//! Tests the complete lifecycle:
//! 1. Record activities through the store
//! 2. Track competencies and link evidence
//! 3. Verify activities and watch progress follow
//! 4. Check eligibility and advance a level
//! 5. Summarise with stats and reports

use pdr_tracker::progression::{assess_level_up, eligible_for_level_up, progress};
use pdr_tracker::record::{create_activity, create_competency};
use pdr_tracker::report::{activity_report, competency_report};
use pdr_tracker::stats::{activity_stats, competency_stats};
use pdr_tracker::{
    ActivityDraft, ActivityPatch, ActivityStatus, ActivityType, CompetencyDraft, CompetencyPatch,
    CompetencyStatus, PdrError, ProficiencyLevel, Store, Timeframe,
};

#[test]
fn full_workflow_activity_to_level_up() {
    let mut store = Store::new();

    // ── Step 1: Record activities ───────────────────────────────────────
    let titles = [
        ("Advanced TypeScript Workshop", ActivityType::Training, "2025-05-15"),
        ("AWS Solutions Architect Associate", ActivityType::Certification, "2025-04-20"),
        ("Billing service migration", ActivityType::Project, "2025-03-10"),
        ("MSc Distributed Systems module", ActivityType::Education, "2025-02-01"),
    ];
    let mut activity_ids = Vec::new();
    for (title, kind, date) in titles {
        let a = create_activity(
            ActivityDraft::new(title, "Recorded for review", date, "Various").activity_type(kind),
        );
        activity_ids.push(a.id.clone());
        store.add_activity(a).expect("valid activity should be accepted");
    }
    assert_eq!(store.activities().len(), 4);
    assert!(store
        .activities()
        .iter()
        .all(|a| a.status == ActivityStatus::Pending));

    // An incomplete activity is refused and nothing is committed.
    let incomplete = create_activity(ActivityDraft::new("", "x", "2025-01-01", "y"));
    assert!(matches!(
        store.add_activity(incomplete),
        Err(PdrError::Validation { .. })
    ));
    assert_eq!(store.activities().len(), 4);

    // ── Step 2: Track a competency and link evidence ────────────────────
    let competency = create_competency(CompetencyDraft::new(
        "Cloud Architecture",
        "Designing and implementing cloud solutions",
    ));
    let cid = competency.id.clone();
    store.add_competency(competency).unwrap();

    for aid in &activity_ids[..3] {
        store.link_evidence(&cid, aid).unwrap();
    }
    let c = store.competency(&cid).unwrap();
    assert_eq!(c.evidence.len(), 3);
    assert_eq!(progress(c), 0);
    assert!(!eligible_for_level_up(c));

    // ── Step 3: Verify activities ───────────────────────────────────────
    store
        .update_activity(&activity_ids[0], &ActivityPatch::status(ActivityStatus::Verified))
        .unwrap();
    assert_eq!(progress(store.competency(&cid).unwrap()), 33);

    store
        .update_activity(&activity_ids[1], &ActivityPatch::status(ActivityStatus::Verified))
        .unwrap();
    let c = store.competency(&cid).unwrap();
    assert_eq!(progress(c), 67);
    // Counts met (3 evidence, 2 verified) but 67% < 75%.
    let a = assess_level_up(c);
    assert!(a.meets_evidence && a.meets_verified);
    assert!(!a.is_eligible);

    store
        .update_activity(&activity_ids[2], &ActivityPatch::status(ActivityStatus::Verified))
        .unwrap();
    let c = store.competency(&cid).unwrap();
    assert_eq!(progress(c), 100);

    // ── Step 4: Advance the level ───────────────────────────────────────
    let assessment = assess_level_up(c);
    assert!(assessment.is_eligible);
    assert_eq!(assessment.target_level, ProficiencyLevel::Intermediate);

    let advanced = store
        .update_competency(&cid, &CompetencyPatch::level_up(assessment.target_level))
        .unwrap();
    assert_eq!(advanced.level, ProficiencyLevel::Intermediate);
    assert_eq!(advanced.status, CompetencyStatus::InProgress);

    // Next level needs 5 evidence; still 3.
    assert!(!eligible_for_level_up(store.competency(&cid).unwrap()));

    // ── Step 5: Stats and reports ───────────────────────────────────────
    let stats = activity_stats(store.activities());
    assert_eq!(stats.total, 4);
    assert_eq!(stats.verified, 3);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.verification_rate, 75.0);
    assert_eq!(stats.by_type.len(), 4);

    let cstats = competency_stats(store.competencies());
    assert_eq!(cstats.total, 1);
    assert_eq!(cstats.in_progress, 1);
    assert_eq!(cstats.achievement_rate, 0.0);

    let today = pdr_tracker::time::parse_date("2025-06-01").unwrap();
    let report = activity_report(store.activities(), None, Timeframe::Quarter, today);
    let titles: Vec<&str> = report.rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Advanced TypeScript Workshop",
            "AWS Solutions Architect Associate",
            "Billing service migration"
        ]
    );

    let creport = competency_report(store.competencies(), None);
    assert_eq!(creport.entries[0].level, ProficiencyLevel::Intermediate);
    assert_eq!(creport.entries[0].progress, 100);

    // ── Step 6: Deletion is idempotent and keeps evidence ───────────────
    store.delete_activity(&activity_ids[0]);
    let after_first = store.snapshot();
    store.delete_activity(&activity_ids[0]);
    assert_eq!(store.snapshot(), after_first);
    assert_eq!(store.competency(&cid).unwrap().evidence.len(), 3);
}

#[test]
fn level_cannot_skip_through_store() {
    let mut store = Store::new();
    let c = create_competency(CompetencyDraft::new("Rust", "Systems programming"));
    let cid = c.id.clone();
    store.add_competency(c).unwrap();

    for target in [ProficiencyLevel::Advanced, ProficiencyLevel::Expert] {
        let result = store.update_competency(&cid, &CompetencyPatch::level_up(target));
        assert!(matches!(result, Err(PdrError::LevelTransition { .. })));
    }

    for target in [
        ProficiencyLevel::Intermediate,
        ProficiencyLevel::Advanced,
        ProficiencyLevel::Expert,
        ProficiencyLevel::Expert,
    ] {
        store
            .update_competency(&cid, &CompetencyPatch::level_up(target))
            .expect("single step should be allowed");
    }
    assert_eq!(store.competency(&cid).unwrap().level, ProficiencyLevel::Expert);
}
