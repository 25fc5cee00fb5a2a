//! Concurrency test: parallel writers and readers on a shared store.
//!
//! Validates that mutations are atomic and readers never observe a torn
//! state.

use std::sync::Arc;
use std::thread;

use pdr_tracker::progression::progress;
use pdr_tracker::record::{create_activity, create_competency};
use pdr_tracker::stats::activity_stats;
use pdr_tracker::{
    ActivityDraft, ActivityPatch, ActivityStatus, CompetencyDraft, SharedStore, Store,
};

#[test]
fn stress_50_concurrent_writers() {
    let store = SharedStore::new(Store::new());

    let mut handles = Vec::new();
    for thread_id in 0..50 {
        let store = store.clone();
        handles.push(thread::spawn(move || {
            for i in 0..40 {
                let a = create_activity(ActivityDraft::new(
                    format!("Thread {thread_id} activity {i}"),
                    "d",
                    "2025-01-01",
                    "p",
                ));
                let id = a.id.clone();
                store.add_activity(a).expect("add should succeed");
                if i % 2 == 0 {
                    store
                        .update_activity(&id, &ActivityPatch::status(ActivityStatus::Verified))
                        .expect("update should succeed");
                }
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    let snapshot = store.snapshot();
    assert_eq!(snapshot.activities.len(), 2_000);
    let stats = activity_stats(&snapshot.activities);
    assert_eq!(stats.verified, 1_000);
    assert_eq!(stats.pending, 1_000);
    assert_eq!(stats.verification_rate, 50.0);
}

#[test]
fn stress_readers_see_whole_mutations() {
    let store = SharedStore::default();
    let competency = store
        .add_competency(create_competency(CompetencyDraft::new("Rust", "Systems")))
        .unwrap();
    let cid = Arc::new(competency.id);

    // Writer links verified/pending pairs; readers must only ever see an
    // activity count that matches the evidence count.
    let writer = {
        let store = store.clone();
        let cid = Arc::clone(&cid);
        thread::spawn(move || {
            for i in 0..200 {
                let status = if i % 2 == 0 {
                    ActivityStatus::Verified
                } else {
                    ActivityStatus::Pending
                };
                let a = create_activity(
                    ActivityDraft::new(format!("a{i}"), "d", "2025-01-01", "p").status(status),
                );
                let aid = a.id.clone();
                store.add_activity(a).unwrap();
                store.link_evidence(&cid, &aid).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            let cid = Arc::clone(&cid);
            thread::spawn(move || {
                for _ in 0..500 {
                    let snap = store.snapshot();
                    let c = snap.competencies.iter().find(|c| c.id == *cid).unwrap();
                    let linked = snap
                        .activities
                        .iter()
                        .filter(|a| a.competencies.contains(&cid))
                        .count();
                    assert_eq!(linked, c.evidence.len());
                    assert!(progress(c) <= 100);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }

    let c = store.competency(&cid).unwrap();
    assert_eq!(c.evidence.len(), 200);
    assert_eq!(progress(&c), 50);
}
