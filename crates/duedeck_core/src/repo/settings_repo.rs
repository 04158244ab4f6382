//! Theme settings persistence.
//!
//! # Responsibility
//! - Persist dark mode, named theme selection, and custom theme payloads
//!   under their historical string keys.
//! - Collapse corrupt settings values to "not set" on load.
//!
//! # Invariants
//! - `darkMode` is stored as the literal string `true`/`false`.
//! - `customTheme` payloads are validated before persistence.

use crate::model::theme::{CustomTheme, NamedTheme, ThemeSettings};
use crate::repo::{ensure_connection_ready, kv_delete, kv_get, kv_put, RepoError, RepoResult};
use log::warn;
use rusqlite::Connection;

const DARK_MODE_KEY: &str = "darkMode";
const SELECTED_THEME_KEY: &str = "selectedTheme";
const CUSTOM_THEME_KEY: &str = "customTheme";

/// Repository interface for persisted theming state.
pub trait SettingsRepository {
    /// Loads all theming state; unreadable values load as unset.
    fn load_settings(&self) -> ThemeSettings;
    /// Persists the dark mode flag.
    fn save_dark_mode(&self, enabled: bool) -> RepoResult<()>;
    /// Persists the selected named theme.
    fn save_selected_theme(&self, theme: NamedTheme) -> RepoResult<()>;
    /// Validates and persists a custom theme payload.
    fn save_custom_theme(&self, theme: &CustomTheme) -> RepoResult<()>;
    /// Removes any stored custom theme.
    fn clear_custom_theme(&self) -> RepoResult<()>;
}

/// SQLite-backed settings repository.
pub struct SqliteSettingsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSettingsRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    fn read_key(&self, key: &str) -> Option<String> {
        match kv_get(self.conn, key) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "event=settings_load module=repo status=error key={key} error={err}"
                );
                None
            }
        }
    }
}

impl SettingsRepository for SqliteSettingsRepository<'_> {
    fn load_settings(&self) -> ThemeSettings {
        let dark_mode = self
            .read_key(DARK_MODE_KEY)
            .map(|value| value == "true")
            .unwrap_or(false);

        let selected_theme = self.read_key(SELECTED_THEME_KEY).and_then(|value| {
            let parsed = NamedTheme::parse(&value);
            if parsed.is_none() {
                warn!(
                    "event=settings_load module=repo status=dropped key={SELECTED_THEME_KEY} value={value}"
                );
            }
            parsed
        });

        let custom_theme = self.read_key(CUSTOM_THEME_KEY).and_then(|value| {
            match serde_json::from_str::<CustomTheme>(&value) {
                Ok(theme) => Some(theme),
                Err(err) => {
                    warn!(
                        "event=settings_load module=repo status=dropped key={CUSTOM_THEME_KEY} error={err}"
                    );
                    None
                }
            }
        });

        ThemeSettings {
            dark_mode,
            selected_theme,
            custom_theme,
        }
    }

    fn save_dark_mode(&self, enabled: bool) -> RepoResult<()> {
        kv_put(
            self.conn,
            DARK_MODE_KEY,
            if enabled { "true" } else { "false" },
        )
    }

    fn save_selected_theme(&self, theme: NamedTheme) -> RepoResult<()> {
        kv_put(self.conn, SELECTED_THEME_KEY, theme.key())
    }

    fn save_custom_theme(&self, theme: &CustomTheme) -> RepoResult<()> {
        theme
            .validate()
            .map_err(|err| RepoError::InvalidData(err.to_string()))?;
        let payload = serde_json::to_string(theme)?;
        kv_put(self.conn, CUSTOM_THEME_KEY, &payload)
    }

    fn clear_custom_theme(&self) -> RepoResult<()> {
        kv_delete(self.conn, CUSTOM_THEME_KEY)
    }
}
