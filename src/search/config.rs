use frizbee::Config;

use super::PREFILTER_ENABLE_THRESHOLD;

/// Builds matching options for a dataset of `dataset_len` candidates.
///
/// Typos are never allowed: a candidate only matches when the needle is a
/// subsequence of it. Large datasets switch on the prefilter to reject
/// non-matches before scoring.
pub fn config_for_dataset(dataset_len: usize) -> Config {
	Config {
		prefilter: dataset_len >= PREFILTER_ENABLE_THRESHOLD,
		max_typos: Some(0),
		// Ranking happens in `rank_matches` so ties keep candidate order.
		sort: false,
		..Config::default()
	}
}
