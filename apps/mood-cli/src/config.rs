use crate::cli::Commands;
use clap::Parser;
use mood_store::StoreConfig;

#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "Record and review moods kept in a JSON file", long_about = None)]
pub struct Config {
	/// Use JSON formatting for tracing
	#[arg(long, env = "LOG_JSON", default_value = "false")]
	pub log_json: bool,

	/// Log filter directive, logging is off when unset
	#[arg(long, env = "RUST_LOG")]
	pub rust_log: Option<String>,

	#[command(flatten)]
	pub store: StoreConfig,

	#[command(subcommand)]
	pub command: Commands,
}
