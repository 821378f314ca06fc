//! Runtime configuration and platform directories.
use std::env;
use std::path::PathBuf;

const APP_NAME: &str = "fatewheel";

/// Where the runtime reads content and writes saves.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub save_dir: PathBuf,
    /// Content override directory. `None` uses embedded content only.
    pub data_dir: Option<PathBuf>,
    /// Names the log directory of this run.
    pub session_id: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            save_dir: default_save_dir(),
            data_dir: None,
            session_id: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FATEWHEEL_SAVE_DIR` - Directory for save files (default: platform data dir)
    /// - `FATEWHEEL_DATA_DIR` - Directory with content overrides (default: none)
    /// - `FATEWHEEL_SESSION_ID` - Session identifier for the log directory (default: timestamp)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_path("FATEWHEEL_SAVE_DIR") {
            config.save_dir = dir;
        }
        config.data_dir = read_path("FATEWHEEL_DATA_DIR");
        config.session_id = env::var("FATEWHEEL_SESSION_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        config
    }
}

/// Platform data directory for saves.
///
/// - Linux: `~/.local/share/fatewheel/saves`
/// - macOS: `~/Library/Application Support/fatewheel/saves`
/// - Windows: `%APPDATA%\fatewheel\saves`
/// - Fallback: `./save_data`
pub fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().join("saves"))
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Platform cache directory for logs.
///
/// Falls back to `<tmp>/fatewheel/logs`.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| env::temp_dir().join(APP_NAME).join("logs"))
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
