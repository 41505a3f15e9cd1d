use std::fs;
use std::path::{Path, PathBuf};

use crate::io::recovery::{self, RecoveryEntry};
use crate::store::MemoryStore;

/// Default card file name when no path is given
pub const DEFAULT_CARD_FILE: &str = "card.json";

/// Error type for card file I/O
#[derive(Debug, thiserror::Error)]
pub enum CardIoError {
    #[error("no card at {0} (create one with `taskcard new`)")]
    NotFound(PathBuf),
    #[error("card already exists at {0} (use --force to replace it)")]
    AlreadyExists(PathBuf),
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize card: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Load a card's state from its JSON file.
pub fn load_card(path: &Path) -> Result<MemoryStore, CardIoError> {
    if !path.exists() {
        return Err(CardIoError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|e| CardIoError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| CardIoError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save a card's state, replacing the file atomically.
///
/// If the write fails the serialized state is appended to the recovery log
/// next to the card before the error is returned.
pub fn save_card(path: &Path, store: &MemoryStore) -> Result<(), CardIoError> {
    let mut content = serde_json::to_string_pretty(store)?;
    content.push('\n');

    if let Err(e) = recovery::atomic_write(path, content.as_bytes()) {
        let dir = card_dir(path);
        recovery::log_recovery(
            &dir,
            RecoveryEntry {
                timestamp: chrono::Utc::now(),
                description: "card write failed".to_string(),
                fields: vec![
                    ("Target".to_string(), path.display().to_string()),
                    ("Error".to_string(), e.to_string()),
                ],
                body: content,
            },
        );
        return Err(CardIoError::WriteError {
            path: path.to_path_buf(),
            source: e,
        });
    }
    log::debug!("[taskcard.io.save] {}", path.display());
    Ok(())
}

/// Write a brand-new card file. Refuses to overwrite unless `force` is set.
pub fn create_card(path: &Path, store: &MemoryStore, force: bool) -> Result<(), CardIoError> {
    if path.exists() && !force {
        return Err(CardIoError::AlreadyExists(path.to_path_buf()));
    }
    save_card(path, store)
}

/// Directory holding the card file (`.` for bare file names)
pub fn card_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
