use folio_core::db::migrations::latest_version;
use folio_core::db::{open_db, open_db_in_memory, DbError};
use folio_core::{PreferenceStore, PrefsError, SqlitePreferenceStore, Theme};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(schema_version(&conn), latest_version());

    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'preferences'
            );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn theme_defaults_to_light() {
    let conn = open_db_in_memory().unwrap();
    let store = SqlitePreferenceStore::try_new(&conn).unwrap();
    assert_eq!(store.load_theme().unwrap(), Theme::Light);
}

#[test]
fn saved_theme_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.db");

    {
        let conn = open_db(&path).unwrap();
        let store = SqlitePreferenceStore::try_new(&conn).unwrap();
        store.save_theme(Theme::Dark).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = SqlitePreferenceStore::try_new(&conn).unwrap();
    assert_eq!(store.load_theme().unwrap(), Theme::Dark);
}

#[test]
fn toggle_theme_flips_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let store = SqlitePreferenceStore::try_new(&conn).unwrap();

    assert_eq!(store.toggle_theme().unwrap(), Theme::Dark);
    assert_eq!(store.toggle_theme().unwrap(), Theme::Light);
    assert_eq!(store.load_theme().unwrap(), Theme::Light);

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM preferences;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn unmigrated_connection_is_rejected() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqlitePreferenceStore::try_new(&conn).err().unwrap();
    assert!(matches!(
        err,
        PrefsError::NotMigrated {
            found: 0,
            expected: _
        }
    ));
}

#[test]
fn corrupted_theme_value_is_reported() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO preferences (key, value) VALUES ('theme', 'sepia');",
        [],
    )
    .unwrap();

    let store = SqlitePreferenceStore::try_new(&conn).unwrap();
    let err = store.load_theme().unwrap_err();
    assert!(matches!(err, PrefsError::InvalidData(_)));
    assert!(err.to_string().contains("sepia"));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}
