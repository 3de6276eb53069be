//! # Configuration
//!
//! Resolves where the database and the bills live.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--db`, `--bill-dir`)
//! 2. Environment variables (`STOCKROOM_DB_PATH`, `STOCKROOM_BILL_DIR`)
//! 3. Defaults (platform data directory)
//!
//! Flags and environment are merged by clap before they reach
//! [`AppConfig::resolve`].
//!
//! ## Platform-Specific Defaults
//! - **macOS**: `~/Library/Application Support/com.stockroom.stockroom/`
//! - **Windows**: `%APPDATA%\stockroom\stockroom\data\`
//! - **Linux**: `~/.local/share/stockroom/`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::args::GlobalArgs;

/// Database file name inside the data directory.
pub const DB_FILE_NAME: &str = "stockroom.db";

/// Bill directory name inside the data directory.
pub const BILL_DIR_NAME: &str = "bills";

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub bill_dir: PathBuf,
    /// Bills go to memory and are dropped on exit.
    pub bills_in_memory: bool,
}

impl AppConfig {
    /// Fills unset paths from the platform data directory.
    pub fn resolve(args: &GlobalArgs) -> Result<Self> {
        let (database_path, bill_dir) = match (&args.db, &args.bill_dir) {
            (Some(db), Some(bills)) => (db.clone(), bills.clone()),
            (db, bills) => {
                let data_dir = default_data_dir()?;
                (
                    db.clone().unwrap_or_else(|| data_dir.join(DB_FILE_NAME)),
                    bills.clone().unwrap_or_else(|| data_dir.join(BILL_DIR_NAME)),
                )
            }
        };

        Ok(AppConfig {
            database_path,
            bill_dir,
            bills_in_memory: args.no_bill_files,
        })
    }

    /// Creates the database's parent directory if needed.
    pub fn prepare(&self) -> Result<()> {
        if let Some(parent) = self.database_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(parent)?;
        }
        Ok(())
    }
}

/// Platform-specific data directory for Stockroom.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "stockroom", "stockroom")
        .context("Could not determine app data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}

fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create directory {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_paths_win() {
        let args = GlobalArgs {
            db: Some(PathBuf::from("/tmp/a.db")),
            bill_dir: Some(PathBuf::from("/tmp/bills")),
            json: false,
            no_bill_files: true,
        };

        let config = AppConfig::resolve(&args).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/a.db"));
        assert_eq!(config.bill_dir, PathBuf::from("/tmp/bills"));
        assert!(config.bills_in_memory);
    }

    #[test]
    fn test_prepare_creates_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let config = AppConfig {
            database_path: tmp.path().join("nested/dir/stockroom.db"),
            bill_dir: tmp.path().join("bills"),
            bills_in_memory: false,
        };

        config.prepare().unwrap();
        assert!(tmp.path().join("nested/dir").is_dir());
    }
}
