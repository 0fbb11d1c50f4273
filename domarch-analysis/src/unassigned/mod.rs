//! Unassigned-region extraction: the residue ranges the known architecture
//! leaves unexplained, filtered down to fragments worth aligning.

use domarch_core::config::FragmentConfig;
use domarch_core::types::{Architecture, Fragment};

/// Compute the fragments of one sequence: the complement of the accepted
/// intervals within `[1, length]`, minus sequences and gaps below the
/// configured minimums. A sequence with an empty architecture yields the
/// whole range as a single candidate gap. Pure function.
pub fn extract_fragments(architecture: &Architecture, config: &FragmentConfig) -> Vec<Fragment> {
    if architecture.length < config.effective_min_sequence_length() {
        return Vec::new();
    }
    let min_fragment = config.effective_min_fragment_length();
    architecture
        .unassigned_regions()
        .into_iter()
        .filter(|gap| gap.len() >= min_fragment)
        .map(|gap| Fragment::new(architecture.sequence_id.clone(), gap))
        .collect()
}
