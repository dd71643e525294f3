//! Average-rank assignment.
//!
//! Assigns ranks 1..N to a pooled sample, giving every member of a tied
//! block the average rank of that block, and reports the tie-block sizes
//! needed for the Kruskal-Wallis tie correction.

use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Rank a slice of values, averaging ties.
///
/// Returns the ranks aligned to the input order, and the sizes of all tied
/// blocks (blocks of a single value are omitted).
pub fn average_ranks(values: &[f64]) -> (Vec<f64>, Vec<u64>) {
    // Group input positions by value; the map iterates in ascending order.
    let mut groups: BTreeMap<OrderedFloat<f64>, Vec<usize>> = BTreeMap::new();
    for (position, &value) in values.iter().enumerate() {
        groups.entry(OrderedFloat(value)).or_default().push(position);
    }

    let mut ranks = vec![0.0; values.len()];
    let mut tie_blocks = Vec::new();
    let mut next_rank = 1u64;
    for positions in groups.values() {
        let block = positions.len() as u64;
        // Average of the `block` consecutive ranks starting at `next_rank`.
        let average = (2 * next_rank + block - 1) as f64 / 2.0;
        for &position in positions {
            ranks[position] = average;
        }
        if block > 1 {
            tie_blocks.push(block);
        }
        next_rank += block;
    }

    (ranks, tie_blocks)
}
