use super::model::{DailyReport, MoodEntry, MoodInsights, MoodSummary, NO_MOOD};
use crate::error::Result;
use std::io::Write;

#[must_use]
pub fn summarize(entries: &[MoodEntry]) -> MoodSummary {
	let mut summary = MoodSummary {
		total_entries: entries.len(),
		..MoodSummary::default()
	};
	for entry in entries {
		*summary.mood_distribution.entry(entry.mood.clone()).or_insert(0) += 1;
	}
	summary
}

/// Highest count wins; on a tie the label seen first keeps its place.
#[must_use]
pub fn most_common(summary: &MoodSummary) -> Option<(&str, usize)> {
	summary.mood_distribution.iter().fold(None, |best, (mood, &count)| match best {
		Some((_, top)) if top >= count => best,
		_ => Some((mood.as_str(), count)),
	})
}

#[must_use]
pub fn insights(summary: &MoodSummary) -> MoodInsights {
	let most_common_mood = most_common(summary).map_or(NO_MOOD, |(mood, _)| mood).to_string();
	MoodInsights {
		message: format!("Your most common mood is {most_common_mood}."),
		most_common_mood,
		entries_analyzed: summary.total_entries,
	}
}

pub fn daily_report(entries: Vec<MoodEntry>) -> Result<DailyReport> {
	let mut report = DailyReport::new();
	for entry in entries {
		let day = entry.recorded_at()?.date();
		report.entry(day).or_default().push(entry);
	}
	Ok(report)
}

pub fn write_readable<W: Write>(entries: &[MoodEntry], mut destination: W) -> std::io::Result<()> {
	for entry in entries {
		writeln!(destination, "Date: {}, Mood: {}", entry.timestamp, entry.mood)?;
	}
	destination.flush()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entries(moods: &[(&str, &str)]) -> Vec<MoodEntry> {
		moods
			.iter()
			.enumerate()
			.map(|(i, (mood, timestamp))| MoodEntry {
				id: i.to_string(),
				mood: (*mood).to_string(),
				timestamp: (*timestamp).to_string(),
				description: None,
			})
			.collect()
	}

	#[test]
	fn empty_summary_and_insights() {
		let summary = summarize(&[]);
		assert_eq!(summary.total_entries, 0);
		assert!(summary.mood_distribution.is_empty());

		let insights = insights(&summary);
		assert_eq!(insights.most_common_mood, "None");
		assert_eq!(insights.entries_analyzed, 0);
		assert_eq!(insights.message, "Your most common mood is None.");
	}

	#[test]
	fn distribution_keeps_first_seen_order() {
		let summary = summarize(&entries(&[("sad", "2021-06-01"), ("happy", "2021-06-02"), ("sad", "2021-06-03")]));

		let order: Vec<_> = summary.mood_distribution.iter().map(|(m, c)| (m.as_str(), *c)).collect();
		assert_eq!(order, vec![("sad", 2), ("happy", 1)]);
	}

	#[test]
	fn tie_goes_to_first_seen_label() {
		let summary = summarize(&entries(&[("calm", "2021-06-01"), ("angry", "2021-06-02"), ("angry", "2021-06-03"), ("calm", "2021-06-04")]));

		assert_eq!(most_common(&summary), Some(("calm", 2)));
	}

	#[test]
	fn later_label_wins_only_with_strictly_more() {
		let summary = summarize(&entries(&[("calm", "2021-06-01"), ("angry", "2021-06-02"), ("angry", "2021-06-03")]));

		assert_eq!(insights(&summary).most_common_mood, "angry");
	}

	#[test]
	fn readable_lines() {
		let mut out = Vec::new();
		write_readable(&entries(&[("happy", "2021-06-01T00:00:00"), ("sad", "2021-06-02T09:00:00")]), &mut out).unwrap();

		assert_eq!(
			String::from_utf8(out).unwrap(),
			"Date: 2021-06-01T00:00:00, Mood: happy\nDate: 2021-06-02T09:00:00, Mood: sad\n"
		);
	}

	#[test]
	fn report_keeps_descriptions() {
		let mut moods = entries(&[("happy", "2021-06-01T08:00:00"), ("sad", "2021-06-01T20:00:00")]);
		moods[1].description = Some("missed the bus".to_string());

		let report = daily_report(moods).unwrap();
		let json = serde_json::to_value(&report).unwrap();

		assert!(json["2021-06-01"][0].get("description").is_none());
		assert_eq!(json["2021-06-01"][1]["description"], "missed the bus");
	}

	#[test]
	fn report_groups_by_day() {
		let report = daily_report(entries(&[("happy", "2021-06-02T08:00:00"), ("sad", "2021-06-01T23:59:59"), ("tired", "2021-06-02T22:00:00")])).unwrap();

		let days: Vec<_> = report.keys().map(ToString::to_string).collect();
		assert_eq!(days, vec!["2021-06-01", "2021-06-02"]);
		let second: Vec<_> = report.values().nth(1).unwrap().iter().map(|e| e.mood.as_str()).collect();
		assert_eq!(second, vec!["happy", "tired"]);
	}
}
