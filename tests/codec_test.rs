use std::sync::Arc;

use serde_json::json;

use chapterhouse::{
    codec::{self, ImportReport},
    domain::{AnnouncementKind, EventCategory},
    error::CodecError,
    repository::ContentRepository,
    seed,
    storage::{MemoryStore, StorageKeys},
};

fn fresh_repo() -> ContentRepository {
    ContentRepository::open(Arc::new(MemoryStore::new()), StorageKeys::default())
}

#[test]
fn test_snapshot_round_trips() -> anyhow::Result<()> {
    let mut source = fresh_repo();
    source.remove_event("1");
    source.add_team_member(Default::default());

    let exported = codec::export_snapshot(&source)?;

    let mut target = fresh_repo();
    let report = codec::import_snapshot(&mut target, &exported)?;

    assert_eq!(
        report,
        ImportReport {
            events: true,
            team: true,
            announcement: true
        }
    );
    assert_eq!(target.events(), source.events());
    assert_eq!(target.team(), source.team());
    assert_eq!(target.announcement(), source.announcement());

    Ok(())
}

#[test]
fn test_export_is_valid_versioned_json() -> anyhow::Result<()> {
    let exported = codec::export_snapshot(&fresh_repo())?;
    let value: serde_json::Value = serde_json::from_str(&exported)?;

    assert_eq!(value["schemaVersion"], codec::SCHEMA_VERSION);
    assert!(value["events"].is_array());
    assert!(value["team"].is_array());
    assert!(value["announcement"].is_object());
    assert!(value["exportedAt"].is_string());
    // Wire format uses the site's camelCase field names
    assert!(value["events"][0]["imageUrl"].is_string());
    assert!(value["announcement"]["type"].is_string());

    Ok(())
}

#[test]
fn test_malformed_text_is_rejected_without_changes() {
    let mut repo = fresh_repo();
    let before = repo.events().len();

    let err = codec::import_snapshot(&mut repo, "{not json").unwrap_err();

    assert!(matches!(err, CodecError::Malformed(_)));
    assert_eq!(repo.events().len(), before);
}

#[test]
fn test_non_object_document_is_rejected() {
    let mut repo = fresh_repo();
    let err = codec::import_snapshot(&mut repo, "[1, 2, 3]").unwrap_err();
    assert!(matches!(err, CodecError::InvalidShape(_)));
}

#[test]
fn test_import_is_all_or_nothing_across_keys() {
    let mut repo = fresh_repo();

    // `team` is perfectly valid here; `events` items are missing their
    // required date/description. Nothing at all may be applied.
    let document = json!({
        "events": [{ "title": "x" }],
        "team": [{
            "name": "Asha Rao",
            "designation": "Events Lead",
            "photoUrl": "https://example.com/asha.jpg",
            "linkedinUrl": "https://linkedin.com/in/asha-rao",
            "email": "asha@example.com",
            "bio": "Runs the events calendar."
        }],
        "announcement": {
            "message": "Replaced!",
            "type": "success",
            "isActive": true
        }
    });

    let err = codec::import_snapshot(&mut repo, &document.to_string()).unwrap_err();

    assert!(matches!(err, CodecError::InvalidShape(_)));
    assert_eq!(repo.events(), seed::default_events().as_slice());
    assert_eq!(repo.team(), seed::default_team().as_slice());
    assert_eq!(repo.announcement(), &seed::default_announcement());
}

#[test]
fn test_absent_keys_leave_collections_untouched() -> anyhow::Result<()> {
    let mut repo = fresh_repo();

    let document = json!({
        "team": [{
            "name": "Asha Rao",
            "designation": "Events Lead",
            "photoUrl": "https://example.com/asha.jpg",
            "linkedinUrl": "https://linkedin.com/in/asha-rao",
            "email": "asha@example.com",
            "bio": "Runs the events calendar."
        }]
    });

    let report = codec::import_snapshot(&mut repo, &document.to_string())?;

    assert_eq!(
        report,
        ImportReport {
            events: false,
            team: true,
            announcement: false
        }
    );
    // Team replaced wholesale, no merge with the seeded members
    assert_eq!(repo.team().len(), 1);
    assert_eq!(repo.team()[0].name, "Asha Rao");
    assert_eq!(repo.events(), seed::default_events().as_slice());
    assert_eq!(repo.announcement(), &seed::default_announcement());

    Ok(())
}

#[test]
fn test_team_members_without_ids_get_fresh_ones() -> anyhow::Result<()> {
    let mut repo = fresh_repo();

    let member = json!({
        "name": "A",
        "designation": "B",
        "photoUrl": "",
        "linkedinUrl": "",
        "email": "",
        "bio": ""
    });
    let document = json!({ "team": [member.clone(), member] });

    codec::import_snapshot(&mut repo, &document.to_string())?;

    let team = repo.team();
    assert_eq!(team.len(), 2);
    assert!(!team[0].id.is_empty());
    assert_ne!(team[0].id, team[1].id);

    Ok(())
}

#[test]
fn test_unknown_keys_and_exported_at_are_ignored() -> anyhow::Result<()> {
    let mut repo = fresh_repo();

    let document = json!({
        "exportedAt": 12345,
        "somethingElse": { "nested": true },
        "announcement": {
            "message": "New banner",
            "type": "info",
            "actionText": "Read more",
            "isActive": true
        }
    });

    let report = codec::import_snapshot(&mut repo, &document.to_string())?;

    assert!(report.announcement);
    assert_eq!(repo.announcement().message, "New banner");
    assert_eq!(repo.announcement().kind, AnnouncementKind::Info);

    Ok(())
}

#[test]
fn test_legacy_documents_without_schema_version_import() -> anyhow::Result<()> {
    let mut repo = fresh_repo();

    // An export from before schema versioning and member ids existed.
    let document = json!({
        "events": [{
            "id": "99",
            "title": "Legacy Event",
            "date": "2024-01-10",
            "description": "Imported from an old export.",
            "imageUrl": "https://example.com/img.jpg",
            "category": "talk",
            "status": "past"
        }],
        "exportedAt": "2024-06-01T10:00:00.000Z"
    });

    codec::import_snapshot(&mut repo, &document.to_string())?;

    assert_eq!(repo.events().len(), 1);
    assert_eq!(repo.events()[0].category, EventCategory::Talk);
    assert!(repo.events()[0].tags.is_empty());

    Ok(())
}

#[test]
fn test_future_schema_version_is_rejected() {
    let mut repo = fresh_repo();
    let err =
        codec::import_snapshot(&mut repo, &json!({ "schemaVersion": 99 }).to_string()).unwrap_err();
    assert!(matches!(err, CodecError::InvalidShape(_)));
}

#[test]
fn test_bad_event_records_are_rejected() {
    let cases = [
        // unknown enum value
        json!({ "events": [{
            "id": "1", "title": "t", "date": "2024-01-01", "description": "d",
            "imageUrl": "u", "category": "rave", "status": "past"
        }]}),
        // date is not a calendar date
        json!({ "events": [{
            "id": "1", "title": "t", "date": "soon", "description": "d",
            "imageUrl": "u", "category": "talk", "status": "past"
        }]}),
        // duplicate ids
        json!({ "events": [
            { "id": "1", "title": "a", "date": "2024-01-01", "description": "d",
              "imageUrl": "u", "category": "talk", "status": "past" },
            { "id": "1", "title": "b", "date": "2024-01-02", "description": "d",
              "imageUrl": "u", "category": "talk", "status": "past" }
        ]}),
    ];

    for document in cases {
        let mut repo = fresh_repo();
        let err = codec::import_snapshot(&mut repo, &document.to_string()).unwrap_err();
        assert!(matches!(err, CodecError::InvalidShape(_)));
        assert_eq!(repo.events(), seed::default_events().as_slice());
    }
}
