use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Args, Clone, Debug, Serialize, Deserialize)]
pub struct StoreConfig {
	/// Path to the JSON file holding every mood entry
	#[arg(long, env = "MOOD_DATA_FILE", default_value = "mood_data.json")]
	pub data_file: PathBuf,
}

impl StoreConfig {
	#[must_use]
	pub fn new(data_file: impl Into<PathBuf>) -> Self {
		Self { data_file: data_file.into() }
	}
}

impl Default for StoreConfig {
	fn default() -> Self {
		Self::new("mood_data.json")
	}
}
