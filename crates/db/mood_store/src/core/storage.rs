use super::model::MoodEntry;
use crate::error::{Result, StoreError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Whole-collection persistence. Every call reads or writes the full list.
pub trait RecordStore {
	fn load(&self) -> Result<Vec<MoodEntry>>;

	fn save(&self, entries: &[MoodEntry]) -> Result<()>;
}

/// Mood list stored as a pretty printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
	path: PathBuf,
}

impl JsonFileStore {
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl RecordStore for JsonFileStore {
	fn load(&self) -> Result<Vec<MoodEntry>> {
		let raw = match fs::read(&self.path) {
			Ok(raw) => raw,
			Err(e) if e.kind() == ErrorKind::NotFound => {
				tracing::debug!(path = %self.path.display(), "store file missing, starting empty");
				return Ok(Vec::new());
			}
			Err(e) => return Err(StoreError::io(&self.path, e)),
		};

		let entries: Vec<MoodEntry> = serde_json::from_slice(&raw).map_err(|source| StoreError::Corrupt {
			path: self.path.clone(),
			source,
		})?;
		tracing::debug!(path = %self.path.display(), count = entries.len(), "loaded mood entries");
		Ok(entries)
	}

	fn save(&self, entries: &[MoodEntry]) -> Result<()> {
		let mut buf = Vec::new();
		let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
		entries.serialize(&mut serializer)?;

		fs::write(&self.path, buf).map_err(|e| StoreError::io(&self.path, e))?;
		tracing::debug!(path = %self.path.display(), count = entries.len(), "saved mood entries");
		Ok(())
	}
}

/// In-process store for embedding callers and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
	entries: RefCell<Vec<MoodEntry>>,
}

impl MemoryStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_entries(entries: Vec<MoodEntry>) -> Self {
		Self { entries: RefCell::new(entries) }
	}

	#[must_use]
	pub fn snapshot(&self) -> Vec<MoodEntry> {
		self.entries.borrow().clone()
	}
}

impl RecordStore for MemoryStore {
	fn load(&self) -> Result<Vec<MoodEntry>> {
		Ok(self.snapshot())
	}

	fn save(&self, entries: &[MoodEntry]) -> Result<()> {
		*self.entries.borrow_mut() = entries.to_vec();
		Ok(())
	}
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
	fn load(&self) -> Result<Vec<MoodEntry>> {
		(**self).load()
	}

	fn save(&self, entries: &[MoodEntry]) -> Result<()> {
		(**self).save(entries)
	}
}
