use rand::Rng;
use rand::seq::IndexedRandom;

/// One candidate continuation of a prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suffix {
	/// Next character of the word
	Char(char),
	/// End of word
	End,
}

/// Candidates observed after one prefix.
///
/// Conceptually, this is a node in a Markov chain whose outgoing edges are
/// weighted by repetition: a character seen three times after the prefix is
/// stored three times.
///
/// ## Responsibilities:
/// - Accumulate observations in insertion order during the build pass
/// - Draw a candidate uniformly, which weights it by observed frequency
///
/// ## Invariants
/// - Never empty once it is reachable from a `ChainTable`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuffixSet {
	/// Example: `['e', 'a', 'e', End]`
	suffixes: Vec<Suffix>,
}

impl SuffixSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one more observation of `suffix`. Duplicates are kept.
	pub fn push(&mut self, suffix: Suffix) {
		self.suffixes.push(suffix);
	}

	/// Draws a candidate uniformly over all stored observations.
	///
	/// Returns `None` if nothing was recorded.
	pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Suffix> {
		self.suffixes.choose(rng).copied()
	}

	pub fn len(&self) -> usize {
		self.suffixes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.suffixes.is_empty()
	}

	/// Whether the word may end after this prefix.
	pub fn can_end(&self) -> bool {
		self.suffixes.contains(&Suffix::End)
	}

	/// How many times `suffix` was observed.
	pub fn occurrences(&self, suffix: Suffix) -> usize {
		self.suffixes.iter().filter(|s| **s == suffix).count()
	}

	pub fn iter(&self) -> impl Iterator<Item = Suffix> + '_ {
		self.suffixes.iter().copied()
	}

	pub fn as_slice(&self) -> &[Suffix] {
		&self.suffixes
	}
}
