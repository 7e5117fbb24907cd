use clap::{Args, Subcommand};
use mood_store::DateRange;

#[derive(Args, Clone, Debug, Default)]
pub struct RangeArgs {
	/// Earliest timestamp to include (ISO-8601 or YYYY-MM-DD)
	#[arg(long)]
	pub start: Option<String>,
	/// Latest timestamp to include, inclusive
	#[arg(long)]
	pub end: Option<String>,
}

impl RangeArgs {
	pub fn to_range(&self) -> mood_store::Result<DateRange> {
		DateRange::parse(self.start.as_deref(), self.end.as_deref())
	}
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
	/// Log a mood, now or at the given time
	Record {
		mood: String,
		#[arg(long)]
		at: Option<String>,
		/// Free text kept alongside the mood
		#[arg(long, short)]
		description: Option<String>,
	},
	/// Delete an entry by id
	Delete {
		id: String,
		/// Fail when no entry has this id
		#[arg(long)]
		strict: bool,
	},
	/// Replace the mood label of an entry
	Update { id: String, mood: String },
	List {
		#[command(flatten)]
		range: RangeArgs,
	},
	/// List entries with exactly this mood label
	Filter {
		mood: String,
		#[command(flatten)]
		range: RangeArgs,
	},
	Summary {
		#[command(flatten)]
		range: RangeArgs,
	},
	Insights {
		#[command(flatten)]
		range: RangeArgs,
	},
	/// Entries grouped by day
	Report {
		#[command(flatten)]
		range: RangeArgs,
	},
	/// Write "Date: .., Mood: .." lines to a file or stdout
	Export {
		#[command(flatten)]
		range: RangeArgs,
		#[arg(long, short)]
		output: Option<std::path::PathBuf>,
	},
}
