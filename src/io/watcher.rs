use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Watches one card file and reports when it changes on disk.
///
/// The parent directory is watched (atomic saves replace the file, which
/// would drop a watch placed on the file itself) and events are filtered
/// down to the card path.
pub struct CardWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<()>,
}

impl CardWatcher {
    pub fn start(card_path: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let target = absolute(card_path);
        let dir = target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let target_name = target.file_name().map(|n| n.to_os_string());

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };
                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
                    _ => return,
                }
                let relevant = event
                    .paths
                    .iter()
                    .any(|p| p.file_name().map(|n| n.to_os_string()) == target_name);
                if relevant {
                    let _ = tx.send(());
                }
            },
            Config::default(),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        Ok(CardWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Block until the card changes or `timeout` passes. Bursts of events
    /// are collapsed into one. Returns `false` on timeout or if the watcher died.
    pub fn wait_for_change(&self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(()) => {
                while self.rx.try_recv().is_ok() {}
                true
            }
            Err(_) => false,
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
