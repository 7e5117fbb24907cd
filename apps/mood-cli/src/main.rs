use clap::Parser;
use mood_cli::config::Config;
use mood_cli::{init_tracing, run};
use mood_store::MoodTracker;

fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();

	let config = Config::parse();
	init_tracing(&config)?;

	let tracker = MoodTracker::from_config(&config.store);
	tracing::debug!(data_file = %config.store.data_file.display(), command = ?config.command, "running");

	run(&tracker, &config.command, std::io::stdout().lock())
}
