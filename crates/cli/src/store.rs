// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! JSON file storage for named ranges.
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::{fs, io, path::PathBuf};

use floptex_range::{RangeStore, SavedRanges};

/// Saved ranges persisted as a JSON file in the platform data directory.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store at the default platform location.
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "floptex").context("no home directory")?;
        Ok(Self {
            path: dirs.data_dir().join("hand_ranges.json"),
        })
    }

    /// Creates a store backed by the given file.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RangeStore for JsonFileStore {
    fn load(&self) -> Result<SavedRanges> {
        match fs::read_to_string(&self.path) {
            Ok(data) => serde_json::from_str(&data)
                .with_context(|| format!("invalid ranges file {}", self.path.display())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(SavedRanges::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, ranges: &SavedRanges) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        // Write then rename for a whole file overwrite.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string(ranges)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load() {
        let path = std::env::temp_dir().join("floptex_store_test.json");
        let store = JsonFileStore::with_path(path.clone());

        let mut ranges = SavedRanges::new();
        ranges.insert("UTG".to_string(), "TT+, AQs+".to_string());
        ranges.insert("BTN".to_string(), "22+, A2s+".to_string());
        store.save(&ranges).unwrap();

        assert_eq!(store.load().unwrap(), ranges);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_empty() {
        let store = JsonFileStore::with_path(std::env::temp_dir().join("floptex_no_such.json"));
        assert!(store.load().unwrap().is_empty());
    }
}
