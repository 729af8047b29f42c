use std::sync::Arc;

use chapterhouse::{
    auth::AuthService,
    config::AuthSettings,
    domain::CreateEventRequest,
    error::AppError,
    repository::ContentRepository,
    service::AdminService,
    storage::{MemoryStore, StorageKeys},
};

const SECRET: &str = "chapter-admin-2025";

fn admin_service(store: Arc<MemoryStore>) -> AdminService {
    let keys = StorageKeys::default();
    let auth = Arc::new(AuthService::new(
        store.clone(),
        keys.session.clone(),
        AuthSettings {
            admin_secret: SECRET.to_string(),
            session_duration_hours: 24,
        },
    ));
    let repo = ContentRepository::open(store, keys);
    AdminService::new(repo, auth)
}

fn valid_event() -> CreateEventRequest {
    CreateEventRequest {
        title: "Soldering 101".to_string(),
        date: "2025-09-01".to_string(),
        description: "Hands-on intro to soldering.".to_string(),
        ..CreateEventRequest::default()
    }
}

#[test]
fn test_mutations_require_a_session() {
    let mut admin = admin_service(Arc::new(MemoryStore::new()));
    let before = admin.repo().events().len();

    let err = admin.add_event(valid_event()).unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));

    let err = admin.remove_event("1").unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));

    let err = admin.import_snapshot("{}").unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));

    assert_eq!(admin.repo().events().len(), before);
}

#[test]
fn test_reads_and_export_stay_open() -> anyhow::Result<()> {
    let admin = admin_service(Arc::new(MemoryStore::new()));

    assert!(!admin.repo().events().is_empty());
    let snapshot = admin.export_snapshot()?;
    assert!(snapshot.contains("\"events\""));

    Ok(())
}

#[test]
fn test_login_gates_and_logout_revokes() -> anyhow::Result<()> {
    let mut admin = admin_service(Arc::new(MemoryStore::new()));

    assert!(!admin.login("wrong-secret"));
    assert!(!admin.is_authenticated());

    assert!(admin.login(SECRET));
    assert!(admin.is_authenticated());
    let session = admin.current_session().expect("session after login");
    assert_eq!(session.token.len(), 64);

    let event = admin.add_event(valid_event())?;
    assert!(admin.remove_event(&event.id)?);

    admin.logout();
    assert!(!admin.is_authenticated());
    let err = admin.add_event(valid_event()).unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));

    Ok(())
}

#[test]
fn test_session_is_persisted_through_the_store() {
    let store = Arc::new(MemoryStore::new());

    let admin = admin_service(store.clone());
    assert!(admin.login(SECRET));
    drop(admin);

    // A new process over the same store still has the session
    let admin = admin_service(store);
    assert!(admin.is_authenticated());
}

#[test]
fn test_gated_import_applies_after_login() -> anyhow::Result<()> {
    let mut admin = admin_service(Arc::new(MemoryStore::new()));
    assert!(admin.login(SECRET));

    let report = admin.import_snapshot(
        &serde_json::json!({
            "announcement": {
                "message": "Workshop moved to Lab 2",
                "type": "warning",
                "isActive": true
            }
        })
        .to_string(),
    )?;

    assert!(report.announcement);
    assert_eq!(admin.repo().announcement().message, "Workshop moved to Lab 2");

    Ok(())
}
