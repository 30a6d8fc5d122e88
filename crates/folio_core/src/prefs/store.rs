//! Preference store contract and SQLite implementation.
//!
//! # Invariants
//! - Each preference key holds at most one value.
//! - Read paths reject unparseable persisted values instead of masking them.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::prefs::theme::Theme;
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

const THEME_KEY: &str = "theme";

pub type PrefsResult<T> = Result<T, PrefsError>;

#[derive(Debug)]
pub enum PrefsError {
    Db(DbError),
    /// Connection was not opened through `db::open_db*`.
    NotMigrated { found: u32, expected: u32 },
    InvalidData(String),
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotMigrated { found, expected } => write!(
                f,
                "preference store schema version {found} does not match expected {expected}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted preference: {message}"),
        }
    }
}

impl Error for PrefsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotMigrated { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for PrefsError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PrefsError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Explicit load/save access to site preferences.
pub trait PreferenceStore {
    /// Returns the saved theme, or the default when none was saved.
    fn load_theme(&self) -> PrefsResult<Theme>;
    fn save_theme(&self, theme: Theme) -> PrefsResult<()>;

    /// Flips and persists the theme, returning the new value.
    fn toggle_theme(&self) -> PrefsResult<Theme> {
        let next = self.load_theme()?.toggle();
        self.save_theme(next)?;
        Ok(next)
    }
}

/// SQLite-backed preference store.
pub struct SqlitePreferenceStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferenceStore<'conn> {
    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// - `NotMigrated` when the schema version is not the latest.
    pub fn try_new(conn: &'conn Connection) -> PrefsResult<Self> {
        let found = current_user_version(conn)?;
        let expected = latest_version();
        if found != expected {
            return Err(PrefsError::NotMigrated { found, expected });
        }
        Ok(Self { conn })
    }

    fn read_value(&self, key: &str) -> PrefsResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_value(&self, key: &str, value: &str) -> PrefsResult<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

impl PreferenceStore for SqlitePreferenceStore<'_> {
    fn load_theme(&self) -> PrefsResult<Theme> {
        match self.read_value(THEME_KEY)? {
            None => Ok(Theme::default()),
            Some(raw) => raw
                .parse()
                .map_err(|err| PrefsError::InvalidData(format!("{THEME_KEY}: {err}"))),
        }
    }

    fn save_theme(&self, theme: Theme) -> PrefsResult<()> {
        self.write_value(THEME_KEY, theme.as_str())?;
        info!("event=theme_save module=prefs status=ok theme={theme}");
        Ok(())
    }
}
