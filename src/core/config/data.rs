use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Chat server base URL (e.g., "http://127.0.0.1:5000")
    pub base_url: Option<String>,
    /// Endpoint path appended to the base URL (e.g., "chat")
    pub endpoint: Option<String>,
    /// Seconds to wait for a reply before giving up on a request
    pub timeout_secs: Option<u64>,
    /// Transcript log file enabled at startup
    pub log_file: Option<String>,
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
///
/// # Examples
/// - Unix: `/home/user/.config/podium/config.toml` → `~/.config/podium/config.toml`
/// - Windows: paths are displayed unchanged
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
