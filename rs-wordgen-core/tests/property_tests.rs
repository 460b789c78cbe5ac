use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rs_wordgen_core::model::chain_table::ChainTable;
use rs_wordgen_core::model::sampler::WordSampler;
use rs_wordgen_core::model::sampler_config::SamplerConfig;

/// All windows of `order + 1` characters of a padded word, with `$` marking
/// the end of the word.
fn windows(word: &str, order: usize) -> Vec<String> {
	let padded: Vec<char> = " ".repeat(order).chars().chain(word.chars()).chain(['$']).collect();
	padded.windows(order + 1).map(|w| w.iter().collect()).collect()
}

fn corpus() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec("[a-z]{0,12}", 1..20)
}

proptest! {
	#[test]
	fn prop_generates_exact_count(
		seeds in corpus(),
		order in 1usize..=10,
		count in 0usize..40,
		seed in any::<u64>()
	) {
		let table = ChainTable::build(&seeds, order).unwrap();
		let mut sampler = WordSampler::new(&table, ChaCha8Rng::seed_from_u64(seed));

		let words: Vec<String> = sampler.generate(count).collect::<Result<_, _>>().unwrap();
		prop_assert_eq!(words.len(), count);
	}

	#[test]
	fn prop_words_are_capped_and_capitalized(
		seeds in corpus(),
		order in 1usize..=10,
		seed in any::<u64>()
	) {
		let table = ChainTable::build(&seeds, order).unwrap();
		let mut sampler = WordSampler::new(&table, ChaCha8Rng::seed_from_u64(seed));

		for word in sampler.generate(25) {
			let word = word.unwrap();
			prop_assert!(word.chars().count() <= 10);
			if let Some(first) = word.chars().next() {
				prop_assert!(first.is_ascii_uppercase());
			}
			prop_assert!(word.chars().skip(1).all(|c| c.is_ascii_lowercase()));
		}
	}

	#[test]
	fn prop_custom_length_cap(
		seeds in corpus(),
		order in 1usize..=4,
		max_length in 1usize..15,
		seed in any::<u64>()
	) {
		let table = ChainTable::build(&seeds, order).unwrap();
		let config = SamplerConfig::new(max_length, 0).unwrap();
		let mut sampler = WordSampler::with_config(&table, ChaCha8Rng::seed_from_u64(seed), config);

		for word in sampler.generate(25) {
			prop_assert!(word.unwrap().chars().count() <= max_length);
		}
	}

	#[test]
	fn prop_seeded_runs_are_identical(
		seeds in corpus(),
		order in 1usize..=10,
		seed in any::<u64>()
	) {
		let table = ChainTable::build(&seeds, order).unwrap();
		let first: Vec<_> = WordSampler::new(&table, ChaCha8Rng::seed_from_u64(seed)).into_words(20).collect();
		let second: Vec<_> = WordSampler::new(&table, ChaCha8Rng::seed_from_u64(seed)).into_words(20).collect();
		prop_assert_eq!(first, second);
	}

	#[test]
	fn prop_no_transition_is_invented(
		seeds in corpus(),
		order in 1usize..=5,
		seed in any::<u64>()
	) {
		let observed: HashSet<String> = seeds.iter().flat_map(|s| windows(s, order)).collect();
		let table = ChainTable::build(&seeds, order).unwrap();
		let mut sampler = WordSampler::new(&table, ChaCha8Rng::seed_from_u64(seed));

		for word in sampler.generate(25) {
			let word = word.unwrap().to_lowercase();
			let mut generated = windows(&word, order);
			// A walk cut by the length cap never drew its terminator
			if word.chars().count() == 10 {
				generated.pop();
			}
			for window in generated {
				prop_assert!(observed.contains(&window), "window {:?} of {:?} not in seeds", window, word);
			}
		}
	}

	#[test]
	fn prop_invalid_order_is_rejected(seeds in corpus(), order in 11usize..100) {
		prop_assert!(ChainTable::build(&seeds, order).is_err());
		prop_assert!(ChainTable::build(&seeds, 0).is_err());
	}
}

#[test]
fn empty_seed_words_only_generate_empty_words() {
	let table = ChainTable::build(["", "", ""], 3).unwrap();
	let mut sampler = WordSampler::new(&table, ChaCha8Rng::seed_from_u64(3));

	for word in sampler.generate(10) {
		assert_eq!(word.unwrap(), "");
	}
}

#[test]
fn shared_table_across_threads() {
	let table = ChainTable::build(["alpha", "beta", "gamma", "delta"], 2).unwrap();

	std::thread::scope(|scope| {
		for seed in 0..4 {
			let table = &table;
			scope.spawn(move || {
				let mut sampler = WordSampler::new(table, ChaCha8Rng::seed_from_u64(seed));
				assert_eq!(sampler.generate(10).filter(Result::is_ok).count(), 10);
			});
		}
	});
}
