use ahash::AHashSet;

use crate::BasketMatrix;

/// Snapshot of one filter step of the level-wise loop, handed to progress
/// callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// Itemset cardinality of this generation.
    pub size: usize,
    /// Number of candidates entering the support filter.
    pub candidates: usize,
    /// Number of candidates that met the support threshold.
    pub frequent: usize,
}

/// Apriori join step: the distinct size-(k+1) candidates producible from a
/// generation of size-k itemsets.
///
/// Every unordered pair of the input is unioned; for k ≥ 2 the union is kept
/// only when the pair shares exactly k−1 items (union cardinality exactly
/// k+1) and the union has not been emitted before. Output order is the
/// nested pairwise scan order. Fewer than two inputs produce nothing.
pub fn merge_candidates(generation: &[Vec<u32>]) -> Vec<Vec<u32>> {
    let mut merged: Vec<Vec<u32>> = Vec::new();
    if generation.len() < 2 {
        return merged;
    }
    let k = generation[0].len();

    if k == 1 {
        // Singleton pairs are already distinct 2-candidates.
        for i in 0..generation.len() {
            for j in (i + 1)..generation.len() {
                let mut pair = vec![generation[i][0], generation[j][0]];
                pair.sort_unstable();
                merged.push(pair);
            }
        }
        return merged;
    }

    let mut seen: AHashSet<Vec<u32>> = AHashSet::new();
    for i in 0..generation.len() {
        for j in (i + 1)..generation.len() {
            if let Some(union) = bounded_union(&generation[i], &generation[j], k + 1) {
                if seen.insert(union.clone()) {
                    merged.push(union);
                }
            }
        }
    }
    merged
}

/// Union of two sorted itemsets, or `None` if the union holds more than
/// `limit` items. Inputs of equal length k with a union of exactly k+1 items
/// share exactly k−1 items — the Apriori join condition.
fn bounded_union(a: &[u32], b: &[u32], limit: usize) -> Option<Vec<u32>> {
    let mut union = Vec::with_capacity(limit);
    let (mut x, mut y) = (0, 0);
    while x < a.len() || y < b.len() {
        let next = if y == b.len() {
            x += 1;
            a[x - 1]
        } else if x == a.len() {
            y += 1;
            b[y - 1]
        } else {
            match a[x].cmp(&b[y]) {
                std::cmp::Ordering::Less => {
                    x += 1;
                    a[x - 1]
                }
                std::cmp::Ordering::Greater => {
                    y += 1;
                    b[y - 1]
                }
                std::cmp::Ordering::Equal => {
                    x += 1;
                    y += 1;
                    a[x - 1]
                }
            }
        };
        if union.len() == limit {
            return None;
        }
        union.push(next);
    }
    (union.len() == limit).then_some(union)
}

/// Level-wise Apriori search: filter singletons by support, merge survivors
/// forward, repeat until a generation goes empty, and return the last
/// surviving generation.
///
/// Only itemsets whose every subset already survived are ever merged
/// forward, which is the pruning that keeps the candidate space tractable.
pub(crate) fn mine_frequent(
    matrix: &BasketMatrix,
    support_threshold: u64,
    progress: &mut dyn FnMut(GenerationStats),
) -> Vec<Vec<u32>> {
    let mut candidates: Vec<Vec<u32>> =
        (0..matrix.n_items() as u32).map(|code| vec![code]).collect();
    let mut frequent: Vec<Vec<u32>> = Vec::new();
    let mut size = 1usize;

    while !candidates.is_empty() {
        let survivors: Vec<Vec<u32>> = candidates
            .iter()
            .filter(|itemset| matrix.support(itemset.as_slice()) >= support_threshold)
            .cloned()
            .collect();
        tracing::debug!(
            size,
            candidates = candidates.len(),
            frequent = survivors.len(),
            "filtered candidate generation"
        );
        progress(GenerationStats {
            size,
            candidates: candidates.len(),
            frequent: survivors.len(),
        });
        if survivors.is_empty() {
            break;
        }
        candidates = merge_candidates(&survivors);
        frequent = survivors;
        size += 1;
    }
    frequent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_generation_merges_to_all_pairs() {
        let singles = vec![vec![0], vec![1], vec![2]];
        assert_eq!(
            merge_candidates(&singles),
            vec![vec![0, 1], vec![0, 2], vec![1, 2]]
        );
    }

    #[test]
    fn join_keeps_only_unions_sharing_all_but_one_item() {
        // Union appears exactly once, pairs sharing fewer items are dropped.
        let pairs = vec![vec![1, 2], vec![1, 3], vec![1, 5], vec![2, 6]];
        assert_eq!(
            merge_candidates(&pairs),
            vec![vec![1, 2, 3], vec![1, 2, 5], vec![1, 2, 6], vec![1, 3, 5]]
        );
    }

    #[test]
    fn duplicate_unions_emitted_once() {
        // {1,2,3} is producible from three different pairs.
        let pairs = vec![vec![1, 2], vec![1, 3], vec![2, 3]];
        assert_eq!(merge_candidates(&pairs), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn short_generations_produce_nothing() {
        assert!(merge_candidates(&[]).is_empty());
        assert!(merge_candidates(&[vec![0, 1]]).is_empty());
    }

    #[test]
    fn bounded_union_respects_limit() {
        assert_eq!(bounded_union(&[1, 2], &[1, 3], 3), Some(vec![1, 2, 3]));
        assert_eq!(bounded_union(&[1, 2], &[3, 4], 3), None);
        assert_eq!(bounded_union(&[1, 3], &[2, 6], 3), None);
    }
}
