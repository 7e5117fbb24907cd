use crate::error::{Result, StoreError};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Timelike};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Label reported by insights when there is nothing to analyze.
pub const NO_MOOD: &str = "None";

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// A single logged mood. The timestamp is kept verbatim as it was written
/// so that a save/load cycle never rewrites it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodEntry {
	pub id: String,
	pub mood: String,
	pub timestamp: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl MoodEntry {
	#[must_use]
	pub fn new(mood: impl Into<String>, at: Option<NaiveDateTime>) -> Self {
		Self::from(CreateMood::new(mood).at(at))
	}

	pub fn recorded_at(&self) -> Result<NaiveDateTime> {
		parse_timestamp(&self.timestamp)
	}
}

/// Input for a new entry; id and missing timestamp are filled in on record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateMood {
	pub mood: String,
	pub description: Option<String>,
	pub at: Option<NaiveDateTime>,
}

impl CreateMood {
	#[must_use]
	pub fn new(mood: impl Into<String>) -> Self {
		Self {
			mood: mood.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn at(mut self, at: Option<NaiveDateTime>) -> Self {
		self.at = at;
		self
	}

	#[must_use]
	pub fn description(mut self, description: Option<String>) -> Self {
		self.description = description;
		self
	}
}

impl<M: Into<String>> From<(M, Option<NaiveDateTime>)> for CreateMood {
	fn from((mood, at): (M, Option<NaiveDateTime>)) -> Self {
		Self::new(mood).at(at)
	}
}

impl From<CreateMood> for MoodEntry {
	fn from(create: CreateMood) -> Self {
		let at = create.at.unwrap_or_else(|| Local::now().naive_local());
		Self {
			id: Uuid::new_v4().to_string(),
			mood: create.mood,
			timestamp: format_timestamp(at),
			description: create.description,
		}
	}
}

/// ISO-8601 without offset, microseconds only when present.
#[must_use]
pub fn format_timestamp(at: NaiveDateTime) -> String {
	if at.nanosecond() == 0 {
		at.format("%Y-%m-%dT%H:%M:%S").to_string()
	} else {
		at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
	}
}

/// Parses naive ISO-8601 datetimes, bare dates (midnight) and RFC 3339
/// values with an offset (compared by their UTC wall time).
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
	let value = value.trim();

	for format in NAIVE_FORMATS {
		if let Ok(at) = NaiveDateTime::parse_from_str(value, format) {
			return Ok(at);
		}
	}

	if let Ok(at) = DateTime::parse_from_rfc3339(value) {
		return Ok(at.naive_utc());
	}

	NaiveDate::parse_from_str(value, "%Y-%m-%d")
		.ok()
		.and_then(|date| date.and_hms_opt(0, 0, 0))
		.ok_or_else(|| StoreError::invalid_timestamp(value))
}

/// Inclusive datetime window. A missing side is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
	pub start: Option<NaiveDateTime>,
	pub end: Option<NaiveDateTime>,
}

impl DateRange {
	#[must_use]
	pub const fn all() -> Self {
		Self { start: None, end: None }
	}

	#[must_use]
	pub const fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
		Self { start, end }
	}

	#[must_use]
	pub const fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
		Self {
			start: Some(start),
			end: Some(end),
		}
	}

	pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
		Ok(Self {
			start: start.map(parse_timestamp).transpose()?,
			end: end.map(parse_timestamp).transpose()?,
		})
	}

	#[must_use]
	pub const fn is_unbounded(&self) -> bool {
		self.start.is_none() && self.end.is_none()
	}

	#[must_use]
	pub fn contains(&self, at: NaiveDateTime) -> bool {
		self.start.is_none_or(|start| at >= start) && self.end.is_none_or(|end| at <= end)
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodSummary {
	pub total_entries: usize,
	/// Counts per label in first-seen order.
	pub mood_distribution: IndexMap<String, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodInsights {
	pub most_common_mood: String,
	pub entries_analyzed: usize,
	pub message: String,
}

/// Entries grouped by calendar day, days ascending.
pub type DailyReport = BTreeMap<NaiveDate, Vec<MoodEntry>>;

#[cfg(test)]
mod tests {
	use super::*;

	fn at(value: &str) -> NaiveDateTime {
		parse_timestamp(value).unwrap()
	}

	#[test]
	fn parses_supported_timestamp_forms() {
		let midnight = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();

		assert_eq!(at("2021-06-01T00:00:00"), midnight);
		assert_eq!(at("2021-06-01 00:00:00"), midnight);
		assert_eq!(at("2021-06-01T00:00"), midnight);
		assert_eq!(at("2021-06-01"), midnight);
		assert_eq!(at("2021-06-01T02:00:00+02:00"), midnight);
		assert_eq!(at("2021-06-01T00:00:00Z"), midnight);
		assert_eq!(at("2021-06-01T00:00:00.250000").nanosecond(), 250_000_000);
	}

	#[test]
	fn rejects_garbage_timestamps() {
		let err = parse_timestamp("yesterday-ish").unwrap_err();
		assert!(matches!(err, StoreError::InvalidTimestamp { ref value } if value == "yesterday-ish"));
		assert!(parse_timestamp("2021-13-01").is_err());
	}

	#[test]
	fn formats_without_fraction_when_whole_second() {
		assert_eq!(format_timestamp(at("2021-06-01T08:30:00")), "2021-06-01T08:30:00");
		assert_eq!(format_timestamp(at("2021-06-01T08:30:00.5")), "2021-06-01T08:30:00.500000");
	}

	#[test]
	fn new_entry_gets_unique_id_and_supplied_time() {
		let a = MoodEntry::new("happy", Some(at("2021-06-01T00:00:00")));
		let b = MoodEntry::new("happy", Some(at("2021-06-01T00:00:00")));

		assert_ne!(a.id, b.id);
		assert_eq!(a.timestamp, "2021-06-01T00:00:00");
		assert_eq!(a.recorded_at().unwrap(), at("2021-06-01"));
	}

	#[test]
	fn create_carries_description() {
		let entry = MoodEntry::from(CreateMood::new("tired").description(Some("long shift".to_string())).at(Some(at("2021-06-01T07:00:00"))));

		assert_eq!(entry.mood, "tired");
		assert_eq!(entry.description.as_deref(), Some("long shift"));
		assert_eq!(entry.timestamp, "2021-06-01T07:00:00");
	}

	#[test]
	fn description_is_omitted_from_json_when_absent() {
		let plain = MoodEntry::new("calm", Some(at("2021-06-01")));
		let json = serde_json::to_value(&plain).unwrap();
		assert_eq!(json.as_object().unwrap().len(), 3);
		assert!(json.get("description").is_none());

		let legacy: MoodEntry = serde_json::from_str(r#"{"id":"x","mood":"sad","timestamp":"2021-06-01T00:00:00"}"#).unwrap();
		assert_eq!(legacy.description, None);
	}

	#[test]
	fn new_entry_without_time_uses_now() {
		let before = Local::now().naive_local();
		let entry = MoodEntry::new("calm", None);
		let after = Local::now().naive_local();

		let recorded = entry.recorded_at().unwrap();
		assert!(recorded >= before - chrono::Duration::seconds(1) && recorded <= after);
	}

	#[test]
	fn range_bounds_are_inclusive() {
		let range = DateRange::between(at("2021-06-01"), at("2021-06-03"));

		assert!(range.contains(at("2021-06-01")));
		assert!(range.contains(at("2021-06-03")));
		assert!(!range.contains(at("2021-06-03T00:00:01")));
		assert!(!range.contains(at("2021-05-31T23:59:59")));
	}

	#[test]
	fn open_sides_are_unbounded() {
		let from = DateRange::new(Some(at("2021-06-02")), None);
		let until = DateRange::new(None, Some(at("2021-06-02")));

		assert!(from.contains(at("2999-01-01")));
		assert!(!from.contains(at("2021-06-01")));
		assert!(until.contains(at("1970-01-01")));
		assert!(DateRange::all().is_unbounded());
		assert!(!until.is_unbounded());
	}

	#[test]
	fn range_parse_propagates_bad_bound() {
		assert!(DateRange::parse(Some("2021-06-01"), Some("not a date")).is_err());
		assert_eq!(DateRange::parse(None, None).unwrap(), DateRange::all());
	}
}
