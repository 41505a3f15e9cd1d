use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

/// Pause between attempts while another writer holds the card
const RETRY_INTERVAL: Duration = Duration::from_millis(10);

/// Exclusive hold on a card file for the length of one read-modify-write.
///
/// Backed by a `<card>.lock` sidecar; the sidecar is removed when the guard
/// drops.
pub struct FileLock {
    _file: File,
    path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("could not open lock file {path}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("card is busy: {path} is held by another taskcard process")]
    Busy { path: PathBuf },
}

/// Lock file guarding `card_path` (`card.json` → `card.json.lock`)
pub fn lock_path_for(card_path: &Path) -> PathBuf {
    let mut name = card_path.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

impl FileLock {
    /// Take the card's lock, retrying until `timeout` has passed.
    pub fn acquire(card_path: &Path, timeout: Duration) -> Result<Self, LockError> {
        let path = lock_path_for(card_path);
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|source| LockError::Open {
                path: path.clone(),
                source,
            })?;

        let deadline = Instant::now() + timeout;
        while !try_lock(&file) {
            if Instant::now() >= deadline {
                log::debug!("[taskcard.lock] gave up on {}", path.display());
                return Err(LockError::Busy { path });
            }
            thread::sleep(RETRY_INTERVAL);
        }
        Ok(FileLock { _file: file, path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // the kernel lock goes with `_file`; only the sidecar needs cleanup
        let _ = fs::remove_file(&self.path);
    }
}

/// Non-blocking exclusive `flock`. False means someone else holds it.
#[cfg(unix)]
fn try_lock(file: &File) -> bool {
    use std::os::unix::io::AsRawFd;
    // SAFETY: the descriptor is owned by `file`, which outlives the call.
    unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) == 0 }
}

/// Without flock, concurrent taskcard writers on this platform are not
/// serialized; the last save wins.
#[cfg(not(unix))]
fn try_lock(_file: &File) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lock_path_appends_suffix() {
        assert_eq!(
            lock_path_for(Path::new("/tmp/card.json")),
            PathBuf::from("/tmp/card.json.lock")
        );
    }

    #[test]
    fn release_removes_sidecar_and_allows_reacquire() {
        let tmp = TempDir::new().unwrap();
        let card = tmp.path().join("card.json");

        let lock = FileLock::acquire(&card, Duration::from_secs(1)).unwrap();
        assert!(lock_path_for(&card).exists());
        drop(lock);
        assert!(!lock_path_for(&card).exists());

        assert!(FileLock::acquire(&card, Duration::from_secs(1)).is_ok());
    }

    #[test]
    fn missing_directory_is_open_error() {
        let tmp = TempDir::new().unwrap();
        let card = tmp.path().join("nope").join("card.json");
        let result = FileLock::acquire(&card, Duration::from_millis(10));
        assert!(matches!(result, Err(LockError::Open { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn held_lock_reports_busy() {
        let tmp = TempDir::new().unwrap();
        let card = tmp.path().join("card.json");

        let _held = FileLock::acquire(&card, Duration::from_secs(1)).unwrap();
        let started = Instant::now();
        let second = FileLock::acquire(&card, Duration::from_millis(50));
        assert!(matches!(second, Err(LockError::Busy { .. })));
        assert!(started.elapsed() >= Duration::from_millis(50));
    }
}
