use super::FilesystemStateStore;
use crate::state::types::{State, StateValue};
use crate::traits::StateStore;
use std::fs;
use tempfile::tempdir;

#[test]
fn fresh_store_has_no_state() {
    let dir = tempdir().expect("tempdir");
    let store = FilesystemStateStore::open(dir.path()).expect("open store");

    assert!(!store.has_state("authconfig"));
    assert!(store.namespaces().is_empty());
}

#[test]
fn restore_state_is_destructive() {
    let dir = tempdir().expect("tempdir");
    let mut store = FilesystemStateStore::open(dir.path()).expect("open store");

    store
        .backup_state("authselect", "profile", "sssd".into())
        .expect("backup profile");

    assert_eq!(
        store.restore_state("authselect", "profile").expect("restore"),
        Some(StateValue::Text("sssd".to_string()))
    );
    assert_eq!(store.restore_state("authselect", "profile").expect("restore"), None);
}

#[test]
fn namespace_disappears_once_drained() {
    let dir = tempdir().expect("tempdir");
    let mut store = FilesystemStateStore::open(dir.path()).expect("open store");

    store.backup_state("authconfig", "sssd", true.into()).expect("backup");
    store.backup_state("authconfig", "mkhomedir", true.into()).expect("backup");
    assert!(store.has_state("authconfig"));

    store.restore_state("authconfig", "sssd").expect("restore");
    assert!(store.has_state("authconfig"));
    store.restore_state("authconfig", "mkhomedir").expect("restore");
    assert!(!store.has_state("authconfig"));
}

#[test]
fn restoring_unknown_namespace_returns_none() {
    let dir = tempdir().expect("tempdir");
    let mut store = FilesystemStateStore::open(dir.path()).expect("open store");

    assert_eq!(store.restore_state("nothing", "here").expect("restore"), None);
}

#[test]
fn entries_survive_reopen() {
    let dir = tempdir().expect("tempdir");
    {
        let mut store = FilesystemStateStore::open(dir.path()).expect("open store");
        store.backup_state("authconfig", "ldap", true.into()).expect("backup");
        store
            .backup_state("authselect", "features_list", "with-sudo with-mkhomedir".into())
            .expect("backup");
    }

    let store = FilesystemStateStore::open(dir.path()).expect("reopen store");
    assert_eq!(store.peek("authconfig", "ldap"), Some(&StateValue::Bool(true)));
    assert_eq!(
        store.peek("authselect", "features_list").and_then(StateValue::as_str),
        Some("with-sudo with-mkhomedir")
    );
    assert_eq!(store.namespaces(), vec!["authconfig", "authselect"]);
}

#[test]
fn writes_bump_revision() {
    let dir = tempdir().expect("tempdir");
    let mut store = FilesystemStateStore::open(dir.path()).expect("open store");

    store.backup_state("authconfig", "krb5", true.into()).expect("backup");
    store.backup_state("authconfig", "ldap", true.into()).expect("backup");

    let content = fs::read_to_string(store.path()).expect("read state file");
    let state: State = serde_json::from_str(&content).expect("parse state file");
    assert_eq!(state.meta.state_revision, Some(2));
    assert!(state.meta.last_update.is_some());
}

#[test]
fn corrupted_state_recovers_from_backup() {
    let dir = tempdir().expect("tempdir");
    {
        let mut store = FilesystemStateStore::open(dir.path()).expect("open store");
        store.backup_state("authconfig", "sssd", true.into()).expect("backup");
        store.backup_state("authconfig", "sssdauth", true.into()).expect("backup");
    }

    fs::write(dir.path().join("sysrestore.json"), "{broken json").expect("corrupt state");

    let store = FilesystemStateStore::open(dir.path()).expect("recover from backup");
    assert!(store.has_state("authconfig"));
    assert_eq!(store.peek("authconfig", "sssd"), Some(&StateValue::Bool(true)));
}

#[test]
fn corrupted_state_without_backup_is_an_error() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("sysrestore.json"), "{broken json").expect("write corrupted state");

    let err = match FilesystemStateStore::open(dir.path()) {
        Ok(_) => panic!("corrupted state without backup should fail"),
        Err(err) => err,
    };
    let msg = err.to_string();
    assert!(msg.contains("State file corrupted"));
    assert!(msg.contains("sysrestore.json"));
}

#[test]
fn second_open_is_refused_while_first_is_held() {
    let dir = tempdir().expect("tempdir");
    let _store = FilesystemStateStore::open(dir.path()).expect("open store");

    assert!(FilesystemStateStore::open(dir.path()).is_err());
}

#[test]
fn text_markers_are_truthy() {
    assert!(StateValue::Text("True".to_string()).is_truthy());
    assert!(!StateValue::Text("False".to_string()).is_truthy());
    assert!(!StateValue::Bool(false).is_truthy());
}

// Test-only accessor used by the assertions above; not part of the library API.
impl StateValue {
    fn as_str(&self) -> Option<&str> {
        match self {
            StateValue::Text(s) => Some(s),
            StateValue::Bool(_) => None,
        }
    }
}
