//! File persistence for habit data
//!
//! TOML is the native format. Files ending in `.json` are read and written in
//! the legacy layout: a top-level array of habit objects.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::habit::{Habit, HabitData};

/// Load/save seam between the server and wherever habits live
pub trait HabitStore: Send + Sync {
    /// Load all habits; a store with nothing in it yields an empty collection
    fn load(&self) -> Result<HabitData>;

    /// Persist all habits, replacing what was stored
    fn save(&self, data: &HabitData) -> Result<()>;
}

/// On-disk encoding, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFormat {
    Toml,
    Json,
}

impl StorageFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => StorageFormat::Json,
            _ => StorageFormat::Toml,
        }
    }
}

/// Habit storage backed by a single file
pub struct FileStorage {
    file_path: PathBuf,
    format: StorageFormat,
}

impl FileStorage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        let format = StorageFormat::from_path(&file_path);
        Self { file_path, format }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn format(&self) -> StorageFormat {
        self.format
    }

    fn decode(&self, content: &str) -> Result<HabitData> {
        // An empty file (e.g. freshly created by the user) is an empty collection
        if content.trim().is_empty() {
            return Ok(HabitData::new());
        }
        let data = match self.format {
            StorageFormat::Toml => toml::from_str(content)?,
            StorageFormat::Json => {
                let habits: Vec<Habit> = serde_json::from_str(content)?;
                HabitData::from_habits(habits)
            }
        };
        Ok(data)
    }

    fn encode(&self, data: &HabitData) -> Result<String> {
        let content = match self.format {
            StorageFormat::Toml => toml::to_string_pretty(data)?,
            StorageFormat::Json => {
                let mut buf = Vec::new();
                let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
                serde::Serialize::serialize(data.habits(), &mut ser)?;
                String::from_utf8(buf)?
            }
        };
        Ok(content)
    }
}

impl HabitStore for FileStorage {
    fn load(&self) -> Result<HabitData> {
        if !self.file_path.exists() {
            info!(path = %self.file_path.display(), "storage file not found, starting empty");
            return Ok(HabitData::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let data = self
            .decode(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        debug!(
            path = %self.file_path.display(),
            format = ?self.format(),
            habits = data.len(),
            "loaded habits"
        );
        Ok(data)
    }

    fn save(&self, data: &HabitData) -> Result<()> {
        let content = self.encode(data)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        debug!(
            path = %self.file_path.display(),
            format = ?self.format(),
            habits = data.len(),
            "saved habits"
        );
        Ok(())
    }
}
