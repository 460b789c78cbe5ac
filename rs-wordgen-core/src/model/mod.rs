//! Top-level module for the Markov-chain word generator.
//!
//! - Validated context length (`ChainOrder`)
//! - Per-prefix candidate lists (`SuffixSet`)
//! - The transition table and its builder (`ChainTable`)
//! - Random-walk generation (`WordSampler`) and its parameters (`SamplerConfig`)

/// Prefix → suffixes table built from seed words.
///
/// Built in a single pass and read-only afterwards.
pub mod chain_table;

/// Chain order newtype, bounded to `1..=10`.
pub mod order;

/// Random-walk word generation over a borrowed `ChainTable`.
pub mod sampler;

/// Length cap and retry settings used by `WordSampler`.
pub mod sampler_config;

/// Candidate next characters (or end of word) for a single prefix.
pub mod suffix_set;
