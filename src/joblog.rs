//! Append-only log of print jobs.
//!
//! Fire-and-forget from the caller's perspective: a full disk or bad path
//! must never block a print job, so failures are downgraded to warnings.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;

pub struct JobLog {
    path: PathBuf,
}

impl JobLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JobLog { path: path.into() }
    }

    /// Records one printed job: title, the rendered preview text, and the
    /// source URL when there was one.
    pub fn record(&self, title: &str, preview: &str, url: Option<&str>) {
        if let Err(err) = self.append(title, preview, url) {
            warn!("Could not write job log at {}: {err}", self.path.display());
        }
    }

    fn append(&self, title: &str, preview: &str, url: Option<&str>) -> std::io::Result<()> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "=== {timestamp} {title}")?;
        if let Some(url) = url {
            writeln!(file, "url: {url}")?;
        }
        writeln!(file, "{preview}")?;
        Ok(())
    }
}
