pub mod cli;
pub mod config;

use crate::cli::Commands;
use crate::config::Config;
use anyhow::{bail, Context, Result};
use mood_store::{parse_timestamp, CreateMood, MoodTracker, RecordStore};
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::{filter::EnvFilter, fmt::format::JsonFields, util::SubscriberInitExt, Layer};

pub fn run<S: RecordStore, W: Write>(tracker: &MoodTracker<S>, command: &Commands, mut out: W) -> Result<()> {
	match command {
		Commands::Record { mood, at, description } => {
			let at = at.as_deref().map(parse_timestamp).transpose()?;
			let entry = tracker
				.create(CreateMood::new(mood.as_str()).at(at).description(description.clone()))
				.context("could not record mood")?;
			print_json(&mut out, &entry)
		}
		Commands::Delete { id, strict: false } => {
			tracker.delete(id).context("could not delete mood")?;
			writeln!(out, "deleted {id}")?;
			Ok(())
		}
		Commands::Delete { id, strict: true } => match tracker.remove(id).context("could not delete mood")? {
			Some(entry) => print_json(&mut out, &entry),
			None => bail!("no mood entry with id {id}"),
		},
		Commands::Update { id, mood } => {
			if !tracker.update(id, mood.as_str()).context("could not update mood")? {
				bail!("no mood entry with id {id}");
			}
			writeln!(out, "updated {id}")?;
			Ok(())
		}
		Commands::List { range } => print_json(&mut out, &tracker.list(range.to_range()?)?),
		Commands::Filter { mood, range } => print_json(&mut out, &tracker.filter_by_type(mood, range.to_range()?)?),
		Commands::Summary { range } => print_json(&mut out, &tracker.summarize(range.to_range()?)?),
		Commands::Insights { range } => print_json(&mut out, &tracker.insights(range.to_range()?)?),
		Commands::Report { range } => print_json(&mut out, &tracker.daily_report(range.to_range()?)?),
		Commands::Export { range, output: Some(path) } => tracker
			.export_to_path(range.to_range()?, path)
			.with_context(|| format!("could not export to {}", path.display())),
		Commands::Export { range, output: None } => Ok(tracker.export_readable(range.to_range()?, out)?),
	}
}

fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
	serde_json::to_writer_pretty(&mut *out, value)?;
	writeln!(out)?;
	Ok(())
}

/// Installs the global subscriber on stderr. Nothing is logged when
/// `RUST_LOG` is unset.
pub fn init_tracing(config: &Config) -> Result<()> {
	use std::str::FromStr;
	use tracing_subscriber::layer::SubscriberExt;

	let Some(directive) = config.rust_log.as_deref() else {
		return Ok(());
	};
	let filter = EnvFilter::from_str(directive).with_context(|| format!("invalid RUST_LOG directive {directive:?}"))?;

	tracing_subscriber::registry()
		.with(if config.log_json {
			Box::new(
				tracing_subscriber::fmt::layer()
					.with_writer(std::io::stderr)
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_filter(filter),
			) as Box<dyn Layer<_> + Send + Sync>
		} else {
			Box::new(
				tracing_subscriber::fmt::layer()
					.with_writer(std::io::stderr)
					.event_format(tracing_subscriber::fmt::format().pretty())
					.with_filter(filter),
			)
		})
		.init();
	Ok(())
}
