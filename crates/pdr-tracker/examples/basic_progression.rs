//! Basic Progression — record activities, link evidence, and level up.
//!
//! Run with:
//!   cargo run --example basic_progression -p pdr-tracker

use pdr_tracker::progression::{assess_level_up, progress};
use pdr_tracker::record::{create_activity, create_competency};
use pdr_tracker::stats::{activity_stats, competency_stats};
use pdr_tracker::{
    ActivityDraft, ActivityPatch, ActivityStatus, ActivityType, CompetencyDraft, CompetencyPatch,
    Store,
};

fn main() -> pdr_tracker::Result<()> {
    let mut store = Store::new();

    // ── 1. Track a competency ───────────────────────────────────────────────
    let cloud = store
        .add_competency(create_competency(CompetencyDraft::new(
            "Cloud Architecture",
            "Designing resilient services on managed infrastructure",
        )))?
        .id
        .clone();
    println!("Tracking competency {cloud}");
    println!();

    // ── 2. Record activities and link them as evidence ──────────────────────
    //
    // New activities start pending. Linking stores a snapshot of the
    // activity on the competency.
    let drafts = [
        ActivityDraft::new(
            "AWS Solutions Architect",
            "Associate certification exam",
            "2025-03-10",
            "Amazon Web Services",
        )
        .activity_type(ActivityType::Certification),
        ActivityDraft::new(
            "Service mesh rollout",
            "Led migration of internal services to a mesh",
            "2025-04-20",
            "Platform team",
        )
        .activity_type(ActivityType::Project),
        ActivityDraft::new(
            "Distributed systems course",
            "Eight week evening course",
            "2025-05-15",
            "City College",
        )
        .activity_type(ActivityType::Education),
    ];

    let mut ids = Vec::new();
    for draft in drafts {
        let id = store.add_activity(create_activity(draft))?.id.clone();
        store.link_evidence(&cloud, &id)?;
        ids.push(id);
    }

    let c = store.competency(&cloud).expect("competency was just added");
    println!("Evidence linked: {} item(s), progress {}%", c.evidence.len(), progress(c));
    let a = assess_level_up(c);
    println!("Eligible for {}: {}", a.target_level, a.is_eligible);
    for s in &a.shortfalls {
        println!("  - {s}");
    }
    println!();

    // ── 3. Verify the activities ────────────────────────────────────────────
    //
    // Status changes flow through to every evidence snapshot.
    for id in &ids {
        store.update_activity(id, &ActivityPatch::status(ActivityStatus::Verified))?;
    }

    let c = store.competency(&cloud).expect("competency was just added");
    let a = assess_level_up(c);
    println!("After verification: progress {}%, eligible {}", a.progress, a.is_eligible);
    assert!(a.is_eligible);

    // ── 4. Advance one level ────────────────────────────────────────────────
    let leveled = store.update_competency(&cloud, &CompetencyPatch::level_up(a.target_level))?;
    println!("{} is now {}", leveled.name, leveled.level);
    println!();

    // ── 5. Summaries ────────────────────────────────────────────────────────
    let activities = activity_stats(store.activities());
    let competencies = competency_stats(store.competencies());
    println!(
        "Activities: {} total, {} verified ({:.2}%)",
        activities.total, activities.verified, activities.verification_rate
    );
    println!(
        "Competencies: {} total, {} achieved ({:.2}%)",
        competencies.total, competencies.achieved, competencies.achievement_rate
    );

    Ok(())
}
