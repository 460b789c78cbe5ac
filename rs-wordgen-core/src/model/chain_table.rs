use std::collections::{HashMap, HashSet};
use std::iter;
use std::path::Path;

use rand::rngs::ThreadRng;

use super::order::ChainOrder;
use super::sampler::{WordSampler, Words};
use super::suffix_set::{Suffix, SuffixSet};
use crate::error::{ConfigError, LookupError, Result};
use crate::io::{SeedEncoding, read_seed_words};

/// Prefix → candidate suffixes transition table of an order-N character
/// Markov chain.
///
/// # Responsibilities
/// - Build the table from seed words in a single pass
/// - Answer prefix lookups during random walks
///
/// # Invariants
/// - Every key is exactly `order` characters long
/// - Every stored `SuffixSet` is non-empty
/// - The table is never modified after `build` returns
#[derive(Clone, Debug)]
pub struct ChainTable {
	order: ChainOrder,

	/// Mapping from a prefix (`order` characters) to what followed it
	states: HashMap<String, SuffixSet>,

	/// Trimmed, lowercased seed words (used to avoid re-generating existing ones)
	seeds: HashSet<String>,

	/// Number of seed words ingested, duplicates included
	seed_count: usize,
}

impl ChainTable {
	/// Builds a table from `seed_words` with a raw chain order.
	///
	/// # Errors
	/// Returns `ConfigError::InvalidOrder` if `order` is outside `[1, 10]`;
	/// no table is produced in that case.
	pub fn build<I, S>(seed_words: I, order: usize) -> std::result::Result<Self, ConfigError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let order = ChainOrder::new(order)?;
		Ok(Self::build_with_order(seed_words, order))
	}

	/// Builds a table from `seed_words` with an already validated order.
	pub fn build_with_order<I, S>(seed_words: I, order: ChainOrder) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut table = Self {
			order,
			states: HashMap::new(),
			seeds: HashSet::new(),
			seed_count: 0,
		};

		for word in seed_words {
			table.add_word(word.as_ref());
		}

		log::debug!(
			"built chain table of order {}: {} prefixes from {} seed words",
			table.order,
			table.states.len(),
			table.seed_count
		);
		table
	}

	/// Reads a line-delimited seed file and builds a table from it.
	///
	/// The order is checked before the file is touched.
	///
	/// # Errors
	/// - `Error::Config` for an invalid order
	/// - `Error::Io` / `Error::Decode` if the file cannot be read or decoded
	pub fn from_file<P: AsRef<Path>>(path: P, order: usize, encoding: SeedEncoding) -> Result<Self> {
		let order = ChainOrder::new(order)?;
		let words = read_seed_words(&path, encoding)?;
		log::debug!("read {} seed words from {}", words.len(), path.as_ref().display());
		Ok(Self::build_with_order(words, order))
	}

	/// Adds one seed word to the table.
	///
	/// The word is padded with `order` leading spaces; every window of
	/// `order` characters records the character that follows it, and the
	/// last window records the end of the word.
	///
	/// # Notes
	/// - Surrounding whitespace is stripped, inner whitespace is kept verbatim.
	/// - An empty word records a single `start prefix → End` transition.
	fn add_word(&mut self, word: &str) {
		let word = word.trim();
		let order = self.order.get();

		let padded: Vec<char> = iter::repeat_n(' ', order).chain(word.chars()).collect();
		let word_len = padded.len() - order;

		for n in 0..word_len {
			self.add_transition(&padded[n..n + order], Suffix::Char(padded[n + order]));
		}
		self.add_transition(&padded[word_len..word_len + order], Suffix::End);

		self.seeds.insert(word.to_lowercase());
		self.seed_count += 1;
	}

	fn add_transition(&mut self, prefix: &[char], suffix: Suffix) {
		let key: String = prefix.iter().collect();
		self.states.entry(key).or_default().push(suffix);
	}

	pub fn order(&self) -> ChainOrder {
		self.order
	}

	/// Prefix every random walk starts from.
	pub fn start_prefix(&self) -> String {
		self.order.start_prefix()
	}

	pub fn get(&self, prefix: &str) -> Option<&SuffixSet> {
		self.states.get(prefix)
	}

	/// Like [`ChainTable::get`], but a missing prefix is an error.
	pub fn suffixes(&self, prefix: &str) -> std::result::Result<&SuffixSet, LookupError> {
		self.states.get(prefix).ok_or_else(|| LookupError { prefix: prefix.to_owned() })
	}

	/// Number of distinct prefixes.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &SuffixSet)> {
		self.states.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn seed_count(&self) -> usize {
		self.seed_count
	}

	/// Case-insensitive check against the seed corpus.
	pub fn contains_seed(&self, word: &str) -> bool {
		self.seeds.contains(&word.trim().to_lowercase())
	}

	/// Generates `count` words using the thread-local random generator.
	///
	/// Each call starts fresh walks; nothing is shared between calls.
	pub fn generate_words(&self, count: usize) -> Words<'_, ThreadRng> {
		WordSampler::new(self, rand::rng()).into_words(count)
	}
}
