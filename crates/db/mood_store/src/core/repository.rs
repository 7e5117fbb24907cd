use super::analysis;
use super::model::{CreateMood, DailyReport, DateRange, MoodEntry, MoodInsights, MoodSummary};
use super::storage::{JsonFileStore, RecordStore};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Mood log over a whole-collection store. Each call loads the full list,
/// works on it in memory and, for mutations, writes the full list back.
///
/// There is no locking: two trackers writing the same file concurrently
/// lose updates, the last completed save wins.
pub struct MoodTracker<S: RecordStore> {
	store: S,
}

impl MoodTracker<JsonFileStore> {
	#[must_use]
	pub fn from_config(config: &StoreConfig) -> Self {
		Self::new(JsonFileStore::new(&config.data_file))
	}
}

impl<S: RecordStore> MoodTracker<S> {
	pub const fn new(store: S) -> Self {
		Self { store }
	}

	pub const fn store(&self) -> &S {
		&self.store
	}

	pub fn record(&self, mood: impl Into<String>, at: Option<NaiveDateTime>) -> Result<MoodEntry> {
		self.create(CreateMood::new(mood).at(at))
	}

	pub fn create(&self, mood: CreateMood) -> Result<MoodEntry> {
		let mut entries = self.store.load()?;
		let entry = MoodEntry::from(mood);
		entries.push(entry.clone());
		self.store.save(&entries)?;

		tracing::info!(id = %entry.id, mood = %entry.mood, "recorded mood");
		Ok(entry)
	}

	/// Appends the batch with a single write. Items are either
	/// `(mood, at)` pairs or full [`CreateMood`] values.
	pub fn record_many<I, T>(&self, moods: I) -> Result<Vec<MoodEntry>>
	where
		I: IntoIterator<Item = T>,
		T: Into<CreateMood>,
	{
		let added: Vec<MoodEntry> = moods.into_iter().map(|mood| MoodEntry::from(mood.into())).collect();
		if added.is_empty() {
			return Ok(added);
		}

		let mut entries = self.store.load()?;
		entries.extend(added.iter().cloned());
		self.store.save(&entries)?;

		tracing::info!(count = added.len(), "recorded mood batch");
		Ok(added)
	}

	pub fn get(&self, id: &str) -> Result<Option<MoodEntry>> {
		Ok(self.store.load()?.into_iter().find(|entry| entry.id == id))
	}

	/// Drops the first entry with `id` if there is one and always reports
	/// success. The collection is rewritten either way. Use [`Self::remove`]
	/// when the caller needs to know whether anything matched.
	pub fn delete(&self, id: &str) -> Result<bool> {
		let mut entries = self.store.load()?;
		let removed = entries.iter().position(|entry| entry.id == id).map(|pos| entries.remove(pos));
		self.store.save(&entries)?;

		tracing::info!(id, removed = removed.is_some(), "deleted mood");
		Ok(true)
	}

	pub fn remove(&self, id: &str) -> Result<Option<MoodEntry>> {
		let mut entries = self.store.load()?;
		let Some(pos) = entries.iter().position(|entry| entry.id == id) else {
			tracing::warn!(id, "no mood entry to remove");
			return Ok(None);
		};

		let removed = entries.remove(pos);
		self.store.save(&entries)?;

		tracing::info!(id, "removed mood");
		Ok(Some(removed))
	}

	pub fn update(&self, id: &str, new_mood: impl Into<String>) -> Result<bool> {
		let mut entries = self.store.load()?;
		let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) else {
			tracing::warn!(id, "no mood entry to update");
			return Ok(false);
		};

		entry.mood = new_mood.into();
		tracing::info!(id, mood = %entry.mood, "updated mood");
		self.store.save(&entries)?;
		Ok(true)
	}

	pub fn list(&self, range: DateRange) -> Result<Vec<MoodEntry>> {
		let entries = self.store.load()?;
		if range.is_unbounded() {
			return Ok(entries);
		}

		let mut within = Vec::with_capacity(entries.len());
		for entry in entries {
			if range.contains(entry.recorded_at()?) {
				within.push(entry);
			}
		}
		Ok(within)
	}

	pub fn filter_by_type(&self, mood_type: &str, range: DateRange) -> Result<Vec<MoodEntry>> {
		let mut entries = self.list(range)?;
		entries.retain(|entry| entry.mood == mood_type);
		Ok(entries)
	}

	pub fn summarize(&self, range: DateRange) -> Result<MoodSummary> {
		Ok(analysis::summarize(&self.list(range)?))
	}

	pub fn insights(&self, range: DateRange) -> Result<MoodInsights> {
		Ok(analysis::insights(&self.summarize(range)?))
	}

	pub fn daily_report(&self, range: DateRange) -> Result<DailyReport> {
		analysis::daily_report(self.list(range)?)
	}

	pub fn export_readable<W: Write>(&self, range: DateRange, destination: W) -> Result<()> {
		let entries = self.list(range)?;
		analysis::write_readable(&entries, destination).map_err(StoreError::Export)
	}

	pub fn export_to_path(&self, range: DateRange, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		let entries = self.list(range)?;
		let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
		analysis::write_readable(&entries, BufWriter::new(file)).map_err(|e| StoreError::io(path, e))?;

		tracing::info!(path = %path.display(), count = entries.len(), "exported moods");
		Ok(())
	}
}
