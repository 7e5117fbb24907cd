use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
	#[error("IO error on {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Store file {path} is not a valid mood list: {source}")]
	Corrupt {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// Writing to a caller supplied destination failed.
	#[error("Export write failed: {0}")]
	Export(#[source] std::io::Error),

	#[error("Invalid timestamp: \"{value}\"")]
	InvalidTimestamp { value: String },

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

impl StoreError {
	#[must_use]
	pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}

	#[must_use]
	pub fn invalid_timestamp(value: impl Into<String>) -> Self {
		Self::InvalidTimestamp { value: value.into() }
	}
}

pub type Result<T> = std::result::Result<T, StoreError>;
