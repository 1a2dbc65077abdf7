use super::*;
use crate::state::session::Role;
use crate::state::settings::LearningPolicy;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_round_trips_raw_values() {
    let store = MemoryStorage::new();
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap(), Some("v".to_owned()));
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn memory_storage_fail_writes_rejects_set_and_remove() {
    let store = MemoryStorage::new();
    store.set("k", "v").unwrap();
    store.set_fail_writes(true);
    assert!(matches!(store.set("k", "w"), Err(StorageError::Write(_))));
    assert!(matches!(store.remove("k"), Err(StorageError::Write(_))));
    assert_eq!(store.get("k").unwrap(), Some("v".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_outside_hydrate() {
    let store = BrowserStorage;
    assert_eq!(store.get(AUTH_KEY), Err(StorageError::Unavailable));
    assert_eq!(store.set(AUTH_KEY, "{}"), Err(StorageError::Unavailable));
    assert!(load_session(&store).is_none());
    assert_eq!(load_settings(&store), OrganizationSettings::default());
}

// =============================================================
// Settings
// =============================================================

#[test]
fn load_settings_defaults_when_absent() {
    let store = MemoryStorage::new();
    assert_eq!(load_settings(&store), OrganizationSettings::default());
}

#[test]
fn load_settings_defaults_when_corrupted() {
    let store = MemoryStorage::new();
    store.set(SETTINGS_KEY, "{not json").unwrap();
    assert_eq!(load_settings(&store), OrganizationSettings::default());
}

#[test]
fn load_settings_defaults_when_fields_missing() {
    let store = MemoryStorage::new();
    store.set(SETTINGS_KEY, r#"{"orgName":"Acme"}"#).unwrap();
    assert_eq!(load_settings(&store), OrganizationSettings::default());
}

#[test]
fn load_settings_reads_stored_layout() {
    let store = MemoryStorage::new();
    store
        .set(
            SETTINGS_KEY,
            r##"{"orgName":"Acme Learning Group","brandColor":"#ff0000","learningPolicy":"Strict deadlines with manager approval","concurrentUsers":250,"jwtSSO":false,"strongPasswords":true}"##,
        )
        .unwrap();
    let settings = load_settings(&store);
    assert_eq!(settings.org_name, "Acme Learning Group");
    assert_eq!(settings.brand_color, "#ff0000");
    assert_eq!(settings.learning_policy, LearningPolicy::StrictDeadlines);
    assert_eq!(settings.concurrent_users, 250);
    assert!(!settings.jwt_sso);
    assert!(settings.strong_passwords);
}

#[test]
fn save_settings_writes_camel_case_keys() {
    let store = MemoryStorage::new();
    save_settings(&store, &OrganizationSettings::default()).unwrap();
    let raw = store.get(SETTINGS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["orgName"], "");
    assert_eq!(value["brandColor"], "#3b6dff");
    assert_eq!(value["learningPolicy"], "Self-paced with soft deadlines");
    assert_eq!(value["concurrentUsers"], 5000);
    assert_eq!(value["jwtSSO"], true);
    assert_eq!(value["strongPasswords"], true);
}

// =============================================================
// Session
// =============================================================

#[test]
fn load_session_restores_valid_value() {
    let store = MemoryStorage::new();
    store
        .set(AUTH_KEY, r#"{"email":"admin@lms.com","role":"Admin / HR","name":"Admin User"}"#)
        .unwrap();
    let session = load_session(&store).unwrap();
    assert_eq!(session.email, "admin@lms.com");
    assert_eq!(session.role, Role::AdminHr);
    assert_eq!(session.name, "Admin User");
}

#[test]
fn load_session_discards_unknown_role() {
    let store = MemoryStorage::new();
    store
        .set(AUTH_KEY, r#"{"email":"x@lms.com","role":"Root","name":"X"}"#)
        .unwrap();
    assert!(load_session(&store).is_none());
}

#[test]
fn clear_session_removes_key() {
    let store = MemoryStorage::new();
    let session = Session { email: "a@lms.com".to_owned(), role: Role::Trainer, name: "A".to_owned() };
    save_session(&store, &session).unwrap();
    assert!(store.get(AUTH_KEY).unwrap().is_some());
    clear_session(&store).unwrap();
    assert!(store.get(AUTH_KEY).unwrap().is_none());
}
