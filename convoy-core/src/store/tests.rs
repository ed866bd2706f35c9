use super::*;
use crate::record::pack;
use crate::types::{
    CloudType, Credentials, Migration, MigrationTarget, MountPoint, Source, Workload,
};
use tempfile::TempDir;

fn sample_record(ip: &str, mounts: Vec<MountPoint>) -> MigrationRecord {
    let source = Source::new("admin", "secret", ip).unwrap();
    let creds = Credentials::new("admin", "secret", "corp.local");
    let source_vm = Workload::new(ip, creds.clone(), mounts.clone());
    let target_vm = Workload::new("10.0.20.9", creds.clone(), vec![MountPoint::new("e:\\", 1)]);
    let target = MigrationTarget::new(CloudType::Aws, creds, target_vm);
    let migration = Migration::new(mounts, source_vm, target);
    pack(&source, &migration)
}

fn system_mounts() -> Vec<MountPoint> {
    vec![MountPoint::new("c:\\", 100_000_000), MountPoint::new("d:\\", 240_000_000)]
}

#[tokio::test]
async fn test_create_derives_key_and_reads_back() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path()).await.unwrap();

    let record = sample_record("10.0.0.5", system_mounts());
    let key = store.create(&record).await.unwrap();
    assert_eq!(key, "10.0.0.5");

    let read_back = store.read(&key).await.unwrap();
    assert_eq!(read_back, record);
    assert!(dir.path().join("10.0.0.5.json").exists());
}

#[tokio::test]
async fn test_create_overwrites_record_for_same_ip() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path()).await.unwrap();

    store.create(&sample_record("10.0.0.5", system_mounts())).await.unwrap();
    store
        .create(&sample_record("10.0.0.5", vec![MountPoint::new("c:\\", 50)]))
        .await
        .unwrap();

    let read_back = store.read("10.0.0.5").await.unwrap();
    assert_eq!(read_back.mount_points.len(), 1);
    assert!(!read_back.mount_points.contains_key("d:\\"));

    // Still a single record.
    assert_eq!(store.list().await.unwrap(), vec!["10.0.0.5".to_string()]);
}

#[tokio::test]
async fn test_list_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path()).await.unwrap();

    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_ignores_non_record_files() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path()).await.unwrap();

    store.create(&sample_record("10.0.0.5", system_mounts())).await.unwrap();
    std::fs::write(dir.path().join("notes.txt"), "scratch").unwrap();

    assert_eq!(store.list().await.unwrap(), vec!["10.0.0.5".to_string()]);
}

#[tokio::test]
async fn test_read_missing_key_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path()).await.unwrap();

    match store.read("9.9.9.9").await {
        Err(ConvoyError::RecordNotFound { key }) => assert_eq!(key, "9.9.9.9"),
        other => panic!("expected RecordNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_read_unparsable_record_is_corrupt() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path()).await.unwrap();

    std::fs::write(dir.path().join("10.0.0.5.json"), "{not json").unwrap();

    match store.read("10.0.0.5").await {
        Err(ConvoyError::CorruptRecord { key, .. }) => assert_eq!(key, "10.0.0.5"),
        other => panic!("expected CorruptRecord, got {:?}", other),
    }
}

#[tokio::test]
async fn test_write_under_explicit_key() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path()).await.unwrap();

    let record = sample_record("10.0.0.5", system_mounts());
    store.write("172.16.0.1", &record).await.unwrap();

    // The supplied key wins over the document's source IP.
    assert_eq!(store.list().await.unwrap(), vec!["172.16.0.1".to_string()]);
    assert_eq!(store.read("172.16.0.1").await.unwrap(), record);
}

#[tokio::test]
async fn test_remove_reports_per_key_status() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path()).await.unwrap();

    store.create(&sample_record("10.0.0.5", system_mounts())).await.unwrap();

    let report = store.remove(&["10.0.0.5", "9.9.9.9"]).await.unwrap();
    assert_eq!(report.removed, vec!["10.0.0.5".to_string()]);
    assert_eq!(report.missing, vec!["9.9.9.9".to_string()]);
    assert!(!report.all_removed());

    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_remove_whole_batch_succeeds() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path()).await.unwrap();

    store.create(&sample_record("10.0.0.5", system_mounts())).await.unwrap();
    store.create(&sample_record("10.0.0.6", system_mounts())).await.unwrap();

    let report = store.remove(&["10.0.0.5", "10.0.0.6"]).await.unwrap();
    assert!(report.all_removed());
    assert_eq!(report.removed.len(), 2);
}

#[tokio::test]
async fn test_records_are_two_space_indented_json() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path()).await.unwrap();

    store.create(&sample_record("10.0.0.5", system_mounts())).await.unwrap();

    let content = std::fs::read_to_string(dir.path().join("10.0.0.5.json")).unwrap();
    assert!(content.starts_with("{\n  \"source\""));
}
