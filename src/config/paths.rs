//! Cross-platform directory path resolution
//!
//! Resolves where persistent settings live.
//! - Linux/macOS: XDG Base Directory specification (~/.local/share)
//! - Windows: Known Folder API (AppData\Local)

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "JUDGE0_IDE_DATA_DIR";

/// Get the data directory path
///
/// Checks JUDGE0_IDE_DATA_DIR first, then falls back to:
/// - Unix (Linux/macOS): XDG_DATA_HOME/judge0-ide or ~/.local/share/judge0-ide
/// - Windows: %LOCALAPPDATA%\judge0-ide\data
pub fn data_dir() -> PathBuf {
    std::env::var(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            #[cfg(windows)]
            {
                use directories::ProjectDirs;
                ProjectDirs::from("", "", "judge0-ide")
                    .map(|dirs| dirs.data_dir().to_path_buf())
                    .unwrap_or_else(|| {
                        PathBuf::from(".")
                            .join(".local")
                            .join("share")
                            .join("judge0-ide")
                    })
            }
            #[cfg(not(windows))]
            {
                use directories::BaseDirs;
                std::env::var("XDG_DATA_HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| {
                        BaseDirs::new()
                            .map(|dirs| dirs.home_dir().join(".local").join("share"))
                            .unwrap_or_else(|| PathBuf::from(".").join(".local").join("share"))
                    })
                    .join("judge0-ide")
            }
        })
}

/// Get the persistent storage file path
pub fn storage_path() -> PathBuf {
    data_dir().join("storage.yaml")
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
