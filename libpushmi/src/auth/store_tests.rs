use super::store::*;
use crate::error::PushmiError;
use std::fs;
use tempfile::tempdir;

fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_lookup_credential_decodes_basic_auth() {
    let temp_dir = tempdir().unwrap();
    // "testuser:testpass"
    let path = write_config(
        &temp_dir,
        r#"{"auths":{"quay.io":{"auth":"dGVzdHVzZXI6dGVzdHBhc3M="}}}"#,
    );

    let creds = lookup_credential("quay.io", &path).unwrap().unwrap();
    assert_eq!(creds.username, "testuser");
    assert_eq!(creds.password, "testpass");
}

#[test]
fn test_lookup_credential_absent_registry_is_none() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(
        &temp_dir,
        r#"{"auths":{"quay.io":{"auth":"dGVzdHVzZXI6dGVzdHBhc3M="}}}"#,
    );

    let creds = lookup_credential("gcr.io", &path).unwrap();
    assert!(creds.is_none());
}

#[test]
fn test_lookup_credential_splits_on_first_colon() {
    let temp_dir = tempdir().unwrap();
    // "robot:pa:ss"
    let path = write_config(&temp_dir, r#"{"auths":{"gcr.io":{"auth":"cm9ib3Q6cGE6c3M="}}}"#);

    let creds = lookup_credential("gcr.io", &path).unwrap().unwrap();
    assert_eq!(creds.username, "robot");
    assert_eq!(creds.password, "pa:ss");
}

#[test]
fn test_lookup_credential_missing_separator_is_parse_error() {
    let temp_dir = tempdir().unwrap();
    // "nocolon"
    let path = write_config(&temp_dir, r#"{"auths":{"gcr.io":{"auth":"bm9jb2xvbg=="}}}"#);

    let result = lookup_credential("gcr.io", &path);
    assert!(matches!(result.unwrap_err(), PushmiError::ConfigParse { .. }));
}

#[test]
fn test_lookup_credential_invalid_base64_is_parse_error() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(&temp_dir, r#"{"auths":{"gcr.io":{"auth":"!!not base64!!"}}}"#);

    let result = lookup_credential("gcr.io", &path);
    assert!(matches!(result.unwrap_err(), PushmiError::ConfigParse { .. }));
}

#[test]
fn test_lookup_credential_missing_file_is_read_error() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("does-not-exist.json");

    let result = lookup_credential("quay.io", &path);
    assert!(matches!(result.unwrap_err(), PushmiError::ConfigRead { .. }));
}

#[test]
fn test_lookup_credential_malformed_json_is_read_error() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(&temp_dir, "{ this is not json");

    let result = lookup_credential("quay.io", &path);
    assert!(matches!(result.unwrap_err(), PushmiError::ConfigRead { .. }));
}

#[test]
fn test_config_without_auths_map_has_no_credentials() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(&temp_dir, r#"{"credsStore":"desktop"}"#);

    let store = DockerConfigStore::load(&path).unwrap();
    assert!(store.get("hub.docker.com").unwrap().is_none());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_entry_without_auth_field_is_none() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(&temp_dir, r#"{"auths":{"quay.io":{}},"credsStore":"osxkeychain"}"#);

    let store = DockerConfigStore::load(&path).unwrap();
    assert!(store.get("quay.io").unwrap().is_none());
}

#[test]
fn test_list_returns_sorted_registries() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(
        &temp_dir,
        r#"{"auths":{"quay.io":{},"gcr.io":{},"hub.docker.com":{}}}"#,
    );

    let store = DockerConfigStore::load(&path).unwrap();
    assert_eq!(
        store.list().unwrap(),
        vec!["gcr.io", "hub.docker.com", "quay.io"]
    );
}

#[test]
fn test_lookup_does_not_modify_config_file() {
    let temp_dir = tempdir().unwrap();
    let contents = r#"{"auths":{"quay.io":{"auth":"dGVzdHVzZXI6dGVzdHBhc3M="}}}"#;
    let path = write_config(&temp_dir, contents);

    lookup_credential("quay.io", &path).unwrap();
    lookup_credential("gcr.io", &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), contents);
}

#[test]
fn test_store_remembers_path() {
    let temp_dir = tempdir().unwrap();
    let path = write_config(&temp_dir, "{}");

    let store = DockerConfigStore::load(&path).unwrap();
    assert_eq!(store.path(), path.as_path());
}
