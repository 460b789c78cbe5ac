//! Error types for table construction, sampling and seed loading.

use thiserror::Error;

use crate::io::SeedEncoding;

/// Top-level error type of the crate.
///
/// Configuration and lookup failures keep their own types so callers that
/// only build or only sample can match on the narrow error.
#[derive(Debug, Error)]
pub enum Error {
	/// Invalid construction parameters
	#[error("configuration error: {0}")]
	Config(#[from] ConfigError),

	/// Sampling reached a prefix the table does not know
	#[error("lookup error: {0}")]
	Lookup(#[from] LookupError),

	/// Seed file could not be read
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// Seed file bytes are not valid for the selected encoding
	#[error("cannot decode seed file as {encoding}: {reason}")]
	Decode { encoding: SeedEncoding, reason: String },
}

/// Rejected configuration values.
///
/// Raised before any table or sampler exists; nothing is clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
	#[error("chain order must be between 1 and 10, inclusive (got {order})")]
	InvalidOrder { order: usize },

	#[error("maximum word length must be at least 1 (got {max_length})")]
	InvalidMaxLength { max_length: usize },
}

/// A prefix met during a random walk has no entry in the table.
///
/// Only an empty table or a caller mixing tables can trigger this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no suffixes recorded for prefix {prefix:?}")]
pub struct LookupError {
	pub prefix: String,
}

/// Type alias for Result with the crate error
pub type Result<T> = std::result::Result<T, Error>;
