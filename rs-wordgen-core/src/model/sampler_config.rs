use serde::Serialize;

use crate::error::ConfigError;

/// Generation parameters for a [`WordSampler`](super::sampler::WordSampler).
///
/// # Invariants
/// - `max_length >= 1`
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplerConfig {
	/// Longest word a walk may produce, in characters.
	max_length: usize,

	/// Number of extra attempts when a generated word already exists in the
	/// seed corpus (case-insensitive). `0` keeps the first word drawn.
	pub nb_try: usize,
}

impl SamplerConfig {
	pub const DEFAULT_MAX_LENGTH: usize = 10;

	/// # Errors
	/// Returns `ConfigError::InvalidMaxLength` if `max_length` is 0.
	pub fn new(max_length: usize, nb_try: usize) -> Result<Self, ConfigError> {
		let mut config = Self { nb_try, ..Self::default() };
		config.set_max_length(max_length)?;
		Ok(config)
	}

	pub fn max_length(&self) -> usize {
		self.max_length
	}

	/// Sets the length cap.
	///
	/// # Errors
	/// Returns an error if the value is 0.
	pub fn set_max_length(&mut self, max_length: usize) -> Result<(), ConfigError> {
		if max_length == 0 {
			return Err(ConfigError::InvalidMaxLength { max_length });
		}
		self.max_length = max_length;
		Ok(())
	}
}

impl Default for SamplerConfig {
	fn default() -> Self {
		Self { max_length: Self::DEFAULT_MAX_LENGTH, nb_try: 0 }
	}
}
