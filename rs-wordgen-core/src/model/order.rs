use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of preceding characters used as context when predicting the
/// next one.
///
/// # Invariants
/// - `MIN <= order <= MAX`, checked by [`ChainOrder::new`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "usize", into = "usize")]
pub struct ChainOrder(usize);

impl ChainOrder {
	pub const MIN: usize = 1;
	pub const MAX: usize = 10;

	/// Validates a raw order.
	///
	/// # Errors
	/// Returns `ConfigError::InvalidOrder` outside `[MIN, MAX]`.
	pub fn new(order: usize) -> Result<Self, ConfigError> {
		if !(Self::MIN..=Self::MAX).contains(&order) {
			return Err(ConfigError::InvalidOrder { order });
		}
		Ok(Self(order))
	}

	pub fn get(self) -> usize {
		self.0
	}

	/// The "start of word" context: `order` spaces.
	pub fn start_prefix(self) -> String {
		" ".repeat(self.0)
	}
}

impl TryFrom<usize> for ChainOrder {
	type Error = ConfigError;

	fn try_from(order: usize) -> Result<Self, Self::Error> {
		Self::new(order)
	}
}

impl From<ChainOrder> for usize {
	fn from(order: ChainOrder) -> Self {
		order.0
	}
}

impl fmt::Display for ChainOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
