//! Integration test: store state survives a save/load cycle.

use pdr_tracker::record::{create_activity, create_competency, create_profile};
use pdr_tracker::storage::{Snapshot, SnapshotStore};
use pdr_tracker::{
    ActivityDraft, ActivityPatch, ActivityStatus, ActivityType, CompetencyDraft, ProfileDraft,
    Store,
};

#[test]
fn snapshot_roundtrip_preserves_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let storage = SnapshotStore::new(dir.path()).unwrap();

    let mut store = Store::new();
    let mut draft = ActivityDraft::new(
        "Kubernetes in Production",
        "Two-day hands-on course",
        "2025-03-03",
        "CNCF",
    )
    .activity_type(ActivityType::Training)
    .document("k8s-certificate.pdf")
    .document("https://example.org/course/42");
    draft.reflection = Some("Learned operator patterns".into());
    let activity = create_activity(draft);
    let aid = activity.id.clone();
    store.add_activity(activity).unwrap();

    let competency = create_competency(CompetencyDraft::new("Platform Engineering", "Infra"));
    let cid = competency.id.clone();
    store.add_competency(competency).unwrap();
    store.link_evidence(&cid, &aid).unwrap();
    store
        .update_activity(&aid, &ActivityPatch::status(ActivityStatus::Verified))
        .unwrap();

    let profile = create_profile(ProfileDraft {
        name: Some("Sam Rivera".into()),
        role: Some("Platform Engineer".into()),
        department: Some("Infrastructure".into()),
        supervisor: Some("Alex Chen".into()),
        current_goals: Some(vec!["Reach advanced in Platform Engineering".into()]),
        competencies: Some(vec![cid.clone()]),
        ..ProfileDraft::default()
    });

    let snapshot = Snapshot::from_parts(Some(profile.clone()), store.snapshot());
    storage.save(&snapshot).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded, snapshot);

    let (loaded_profile, loaded_store) = loaded.into_store();
    assert_eq!(loaded_profile, Some(profile));
    let a = loaded_store.activity(&aid).unwrap();
    assert_eq!(a.documentation.len(), 2);
    assert_eq!(a.reflection.as_deref(), Some("Learned operator patterns"));
    assert_eq!(a.competencies, vec![cid.clone()]);
    let c = loaded_store.competency(&cid).unwrap();
    assert_eq!(c.evidence[0].status, ActivityStatus::Verified);
}

#[test]
fn repeated_saves_replace_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let storage = SnapshotStore::new(dir.path()).unwrap();

    let mut store = Store::new();
    for i in 0..3 {
        store
            .add_activity(create_activity(ActivityDraft::new(
                format!("activity {i}"),
                "d",
                "2025-01-01",
                "p",
            )))
            .unwrap();
        storage
            .save(&Snapshot::from_parts(None, store.snapshot()))
            .unwrap();
    }

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.activities.len(), 3);
    assert!(loaded.profile.is_none());

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers.len(), 1, "temp files left behind: {leftovers:?}");
}
