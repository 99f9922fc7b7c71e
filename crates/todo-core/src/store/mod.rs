//! User store
//!
//! JSON-file persistence for user records, behind a repository trait so the
//! auth layer can run against in-memory fakes.
//!
//! The file is always read and written whole. `load` and `save` never fail:
//! an unreadable or corrupt file reads as an empty store and a failed write
//! is dropped, both with a warning in the log. Callers that need to see those
//! failures use `try_load` / `try_save` on [`JsonUserStore`].
//!
//! Records are checked one at a time. A record missing `username` or
//! `password` loads with that field empty; an entry that is not a record at
//! all is skipped. Only a file that is not a JSON array counts as corrupt.

use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::UserRecord;

/// Storage seam for user records
pub trait UserRepository {
    /// All records in insertion order; empty on any failure
    fn load(&self) -> Vec<UserRecord>;

    /// Replace the stored set with `records`; failures are not reported
    fn save(&self, records: &[UserRecord]);
}

impl<R: UserRepository + ?Sized> UserRepository for &R {
    fn load(&self) -> Vec<UserRecord> {
        (**self).load()
    }

    fn save(&self, records: &[UserRecord]) {
        (**self).save(records)
    }
}

/// File-backed user store holding a JSON array of records
#[derive(Debug, Clone)]
pub struct JsonUserStore {
    path: PathBuf,
}

impl JsonUserStore {
    /// Open the store at `path`, creating the file as `[]` when it is
    /// missing or blank
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };
        store.ensure_exists()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_exists(&self) -> Result<()> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            log::info!("Creating user store: {}", self.path.display());
            fs::write(&self.path, "[]")?;
            return Ok(());
        }

        if fs::read_to_string(&self.path)?.trim().is_empty() {
            log::info!("Initializing blank user store: {}", self.path.display());
            fs::write(&self.path, "[]")?;
        }

        Ok(())
    }

    /// Read and parse every record, reporting I/O and JSON failures
    pub fn try_load(&self) -> Result<Vec<UserRecord>> {
        let raw = fs::read_to_string(&self.path)?;
        let entries: Vec<Value> = serde_json::from_str(&raw)?;

        let records = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<UserRecord>(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    let path = self.path.display();
                    log::warn!("[store] Skipping entry {} in {}: {}", index, path, e);
                    None
                }
            })
            .collect();
        Ok(records)
    }

    /// Overwrite the file with `records`, pretty-printed with 4-space indent
    ///
    /// The new content goes to a sibling temp file first and is renamed into
    /// place, so readers see either the old file or the new one.
    pub fn try_save(&self, records: &[UserRecord]) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut ser)?;

        let tmp = self.temp_path();
        fs::write(&tmp, &buf)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl UserRepository for JsonUserStore {
    fn load(&self) -> Vec<UserRecord> {
        match self.try_load() {
            Ok(records) => records,
            Err(e) => {
                log::warn!("[store] Failed to load {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[UserRecord]) {
        if let Err(e) = self.try_save(records) {
            log::warn!("[store] Failed to save {}: {}", self.path.display(), e);
        }
    }
}
