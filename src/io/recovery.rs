use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;

/// Self-documenting header written at the top of a new recovery log.
const FILE_HEADER: &str = "\
<!-- taskcard recovery log: append-only
     Card contents that could not be saved normally are kept here.
     Safe to delete once nothing is missing. -->

---
";

/// A single entry in the recovery log.
#[derive(Debug, Clone)]
pub struct RecoveryEntry {
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub fields: Vec<(String, String)>,
    pub body: String,
}

/// Return the path to the recovery log kept next to the card files in `dir`.
pub fn recovery_log_path(dir: &Path) -> PathBuf {
    dir.join(".taskcard-recovery.log")
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl RecoveryEntry {
    fn to_markdown(&self) -> String {
        let mut out = format!(
            "## {} write: {}\n\n",
            self.timestamp.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            self.description,
        );
        for (key, value) in &self.fields {
            out.push_str(&format!("{}: {}\n", key, value));
        }
        if !self.body.is_empty() {
            out.push_str("\n```json\n");
            out.push_str(&self.body);
            if !self.body.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("```\n");
        }
        out.push_str("\n---\n");
        out
    }
}

/// Append a recovery entry to the log. Failures are logged, not returned.
pub fn log_recovery(dir: &Path, entry: RecoveryEntry) {
    log::warn!("[taskcard.recovery] {}", entry.description);
    if let Err(e) = log_recovery_inner(dir, &entry) {
        log::warn!("[taskcard.recovery] could not write to recovery log: {}", e);
    }
}

fn log_recovery_inner(dir: &Path, entry: &RecoveryEntry) -> io::Result<()> {
    let path = recovery_log_path(dir);
    let needs_header = std::fs::metadata(&path).map_or(true, |m| m.len() == 0);

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    if needs_header {
        file.write_all(FILE_HEADER.as_bytes())?;
    }
    file.write_all(entry.to_markdown().as_bytes())?;
    Ok(())
}
