use super::*;

#[tokio::test]
async fn health_check_succeeds_for_live_pool() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.health_check().await.expect("health check");
}

#[tokio::test]
async fn fresh_store_loads_empty_defaults() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let record = storage.load_record().await.expect("load");
    assert_eq!(record, Record::new("", ""));
}

#[tokio::test]
async fn saved_record_round_trips_exactly() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let record = Record::new("Alice", "a@x.com");

    storage.save_record(&record).await.expect("save");
    let loaded = storage.load_record().await.expect("load");

    assert_eq!(loaded, record);
}

#[tokio::test]
async fn values_are_stored_verbatim_without_trimming() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let record = Record::new("  spaced name  ", "UPPER@CASE.COM\t");

    storage.save_record(&record).await.expect("save");
    let loaded = storage.load_record().await.expect("load");

    assert_eq!(loaded, record);
}

#[tokio::test]
async fn empty_strings_are_persisted_not_treated_as_missing() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");

    storage
        .save_record(&Record::new("Alice", "a@x.com"))
        .await
        .expect("first save");
    storage
        .save_record(&Record::new("", ""))
        .await
        .expect("empty save");

    let loaded = storage.load_record().await.expect("load");
    assert_eq!(loaded, Record::new("", ""));
}

#[tokio::test]
async fn last_write_wins() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");

    storage
        .save_record(&Record::new("Alice", "a@x.com"))
        .await
        .expect("first save");
    storage
        .save_record(&Record::new("Bob", "b@x.com"))
        .await
        .expect("second save");

    let loaded = storage.load_record().await.expect("load");
    assert_eq!(loaded, Record::new("Bob", "b@x.com"));
}

#[tokio::test]
async fn creates_database_file_with_nested_parent_dirs() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let db_path = temp_root.path().join("nested").join("form.sqlite3");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    let storage = Storage::new(&database_url).await.expect("db");
    storage
        .save_record(&Record::new("Alice", "a@x.com"))
        .await
        .expect("save");
    drop(storage);

    assert!(
        db_path.exists(),
        "database file should exist: {}",
        db_path.display()
    );
}

#[tokio::test]
async fn record_survives_reopening_the_database() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let db_path = temp_root.path().join("form.sqlite3");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    {
        let storage = Storage::new(&database_url).await.expect("db");
        storage
            .save_record(&Record::new("Carol", "c@x.com"))
            .await
            .expect("save");
    }

    let reopened = Storage::new(&database_url).await.expect("reopen");
    let loaded = reopened.load_record().await.expect("load");
    assert_eq!(loaded, Record::new("Carol", "c@x.com"));
}

#[tokio::test]
async fn updated_at_is_unset_until_first_save() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    assert!(storage
        .record_updated_at()
        .await
        .expect("updated_at")
        .is_none());

    storage
        .save_record(&Record::new("Alice", "a@x.com"))
        .await
        .expect("save");

    let updated_at = storage
        .record_updated_at()
        .await
        .expect("updated_at")
        .expect("timestamp after save");
    assert!(updated_at <= Utc::now());
}
