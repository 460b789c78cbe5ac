//! Markov-chain word generation library.
//!
//! This crate builds an order-N character Markov chain from a list of seed
//! words and samples new, pronounceable words from it:
//! - Prefix → suffixes transition table (`ChainTable`)
//! - Random-walk word generation with an explicit random source (`WordSampler`)
//! - Seed file loading with a selectable text encoding
//!
//! ```
//! use rs_wordgen_core::model::chain_table::ChainTable;
//!
//! let table = ChainTable::build(["science"], 2)?;
//! for word in table.generate_words(3) {
//!     assert_eq!(word?, "Science");
//! }
//! # Ok::<(), rs_wordgen_core::Error>(())
//! ```

/// Chain table, suffix sets and word sampling.
pub mod model;

/// Error types shared by the whole crate.
pub mod error;

/// Seed file loading.
///
/// Not exposed, only the encoding selector is re-exported.
pub(crate) mod io;

pub use error::{ConfigError, Error, LookupError, Result};
pub use io::SeedEncoding;
