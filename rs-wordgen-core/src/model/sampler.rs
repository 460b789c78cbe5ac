use std::iter::{self, FusedIterator};

use rand::Rng;

use super::chain_table::ChainTable;
use super::sampler_config::SamplerConfig;
use super::suffix_set::Suffix;
use crate::error::LookupError;

/// Word generator performing random walks over a borrowed [`ChainTable`].
///
/// # Responsibilities
/// - Own the random source, so a seeded generator gives reproducible output
/// - Produce one word per walk, capped at `max_length` characters
/// - Optionally retry words that already exist in the seed corpus
///
/// The table is only read. Between words the sampler keeps nothing but
/// its random source and configuration.
#[derive(Debug)]
pub struct WordSampler<'a, R> {
	table: &'a ChainTable,
	rng: R,
	config: SamplerConfig,
}

impl<'a, R: Rng> WordSampler<'a, R> {
	pub fn new(table: &'a ChainTable, rng: R) -> Self {
		Self::with_config(table, rng, SamplerConfig::default())
	}

	pub fn with_config(table: &'a ChainTable, rng: R, config: SamplerConfig) -> Self {
		Self { table, rng, config }
	}

	pub fn table(&self) -> &'a ChainTable {
		self.table
	}

	pub fn config(&self) -> &SamplerConfig {
		&self.config
	}

	/// Performs one random walk from the start prefix.
	///
	/// # Behavior
	/// - Draws a suffix for the current prefix, then stops on `End` or
	///   once `max_length` characters are accumulated (in that order).
	/// - Otherwise appends the character and slides the prefix window by one.
	/// - The first character of the result is uppercased.
	///
	/// # Errors
	/// Returns `LookupError` if the current prefix has no entry.
	fn walk(&mut self) -> Result<String, LookupError> {
		let max_length = self.config.max_length();
		let mut prefix = self.table.start_prefix();
		let mut word = String::new();
		let mut len = 0;

		loop {
			let suffix = self
				.table
				.suffixes(&prefix)?
				.choose(&mut self.rng)
				.ok_or_else(|| LookupError { prefix: prefix.clone() })?;

			let c = match suffix {
				Suffix::End => break,
				Suffix::Char(_) if len >= max_length => break,
				Suffix::Char(c) => c,
			};

			word.push(c);
			len += 1;
			prefix.remove(0);
			prefix.push(c);
		}

		log::trace!("walk finished with {len} characters: {word:?}");
		Ok(capitalize(&word))
	}

	/// Generates a single word, avoiding seed words if `nb_try > 0`.
	///
	/// # Behavior
	/// - Retries up to `nb_try` times while the word exists in the corpus.
	/// - Returns the last attempt if all retries fail.
	pub fn generate_word(&mut self) -> Result<String, LookupError> {
		let mut word = self.walk()?;
		let mut nb_try = self.config.nb_try;

		while nb_try > 0 && self.table.contains_seed(&word) {
			word = self.walk()?;
			nb_try -= 1;
		}

		if self.config.nb_try > 0 && self.table.contains_seed(&word) {
			log::debug!("{:?} still exists in the seed corpus after {} retries", word, self.config.nb_try);
		}

		Ok(word)
	}

	/// Lazily generates `count` words, drawing from this sampler's random
	/// source. Each call starts fresh walks.
	pub fn generate(&mut self, count: usize) -> Words<'a, &mut R> {
		Words {
			sampler: WordSampler {
				table: self.table,
				rng: &mut self.rng,
				config: self.config,
			},
			remaining: count,
		}
	}

	/// Owning variant of [`WordSampler::generate`].
	pub fn into_words(self, count: usize) -> Words<'a, R> {
		Words { sampler: self, remaining: count }
	}
}

/// Finite iterator over generated words, yielding exactly the requested
/// count.
#[derive(Debug)]
pub struct Words<'a, R> {
	sampler: WordSampler<'a, R>,
	remaining: usize,
}

impl<R: Rng> Iterator for Words<'_, R> {
	type Item = Result<String, LookupError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;
		Some(self.sampler.generate_word())
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<R: Rng> ExactSizeIterator for Words<'_, R> {}

impl<R: Rng> FusedIterator for Words<'_, R> {}

/// Uppercases the first character and leaves the rest untouched.
///
/// A character whose uppercase form is several characters long (`ß`) is
/// kept as-is so the length never changes.
fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	let Some(first) = chars.next() else {
		return String::new();
	};

	let mut upper = first.to_uppercase();
	let first = match (upper.next(), upper.next()) {
		(Some(u), None) => u,
		_ => first,
	};

	iter::once(first).chain(chars).collect()
}
