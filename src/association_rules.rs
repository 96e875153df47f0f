use crate::{BasketMatrix, MiningError};

/// A directed implication antecedent → consequent derived from a frequent
/// itemset, with its confidence. Both sides are canonical sorted item codes,
/// disjoint and non-empty; their union is the itemset the rule came from.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRule {
    pub antecedent: Vec<u32>,
    pub consequent: Vec<u32>,
    pub confidence: f64,
}

/// Enumerate the drop-one-item splits of an itemset as directed rules.
///
/// For each size-(n−1) combination C, in combination order, the pair
/// (C, itemset−C) is emitted followed by its reversal — 2n rules for an
/// itemset of n ≥ 2 items. Splits where either side would be empty are not
/// rules, so itemsets shorter than 2 produce nothing. Larger bipartitions
/// (more than one item dropped) are intentionally not enumerated.
pub fn rule_splits(itemset: &[u32]) -> Vec<(Vec<u32>, Vec<u32>)> {
    let n = itemset.len();
    if n < 2 {
        return Vec::new();
    }
    let mut rules = Vec::with_capacity(2 * n);
    // Size-(n-1) combinations in lexicographic order drop positions last
    // to first.
    for drop in (0..n).rev() {
        let mut rest = Vec::with_capacity(n - 1);
        rest.extend_from_slice(&itemset[..drop]);
        rest.extend_from_slice(&itemset[drop + 1..]);
        let dropped = vec![itemset[drop]];
        rules.push((rest.clone(), dropped.clone()));
        rules.push((dropped, rest));
    }
    rules
}

/// Confidence of the rule antecedent → consequent:
/// support(antecedent ∪ consequent) / support(antecedent).
///
/// A zero-support antecedent leaves the quotient undefined and is reported
/// as [`MiningError::ZeroSupportAntecedent`]. Within [`crate::RuleMiner`]
/// this cannot trigger for a support threshold ≥ 1, because antecedents are
/// subsets of frequent itemsets and support only grows under subsets.
pub fn confidence(
    matrix: &BasketMatrix,
    antecedent: &[u32],
    consequent: &[u32],
) -> Result<f64, MiningError> {
    let antecedent_support = matrix.support(antecedent);
    if antecedent_support == 0 {
        return Err(MiningError::ZeroSupportAntecedent { antecedent: antecedent.to_vec() });
    }
    let mut union = antecedent.to_vec();
    union.extend_from_slice(consequent);
    union.sort_unstable();
    union.dedup();
    Ok(matrix.support(&union) as f64 / antecedent_support as f64)
}

/// Derive every qualifying rule from the given frequent itemsets: enumerate
/// the splits of each itemset in order and keep those whose confidence meets
/// the threshold.
pub(crate) fn derive_rules(
    matrix: &BasketMatrix,
    itemsets: &[Vec<u32>],
    confidence_threshold: f64,
) -> Result<Vec<AssociationRule>, MiningError> {
    let mut rules = Vec::new();
    for itemset in itemsets {
        for (antecedent, consequent) in rule_splits(itemset) {
            let confidence = confidence(matrix, &antecedent, &consequent)?;
            if confidence >= confidence_threshold {
                rules.push(AssociationRule { antecedent, consequent, confidence });
            }
        }
    }
    tracing::debug!(itemsets = itemsets.len(), rules = rules.len(), "confidence filter applied");
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_itemset_yields_six_directed_rules() {
        let rules = rule_splits(&[1, 2, 3]);
        assert_eq!(
            rules,
            vec![
                (vec![1, 2], vec![3]),
                (vec![3], vec![1, 2]),
                (vec![1, 3], vec![2]),
                (vec![2], vec![1, 3]),
                (vec![2, 3], vec![1]),
                (vec![1], vec![2, 3]),
            ]
        );
    }

    #[test]
    fn splits_reconstruct_the_itemset_without_overlap() {
        let itemset = [2, 4, 5, 9];
        let rules = rule_splits(&itemset);
        assert_eq!(rules.len(), 2 * itemset.len());
        for (ant, con) in rules {
            assert!(ant.iter().all(|i| !con.contains(i)));
            let mut union = [ant, con].concat();
            union.sort_unstable();
            assert_eq!(union, itemset);
        }
    }

    #[test]
    fn singletons_admit_no_rules() {
        assert!(rule_splits(&[7]).is_empty());
        assert!(rule_splits(&[]).is_empty());
    }

    #[test]
    fn confidence_is_support_ratio() {
        // bread in 4 baskets, {bread, butter, beer} in 2.
        let m = BasketMatrix::from_dense(
            ["bread", "butter", "beer"],
            &[
                1, 1, 1, //
                1, 1, 1, //
                1, 1, 0, //
                1, 0, 0, //
                0, 0, 1, //
            ],
        )
        .unwrap();
        let ant = m.encode(&["bread"]).unwrap();
        let con = m.encode(&["butter", "beer"]).unwrap();
        assert_eq!(confidence(&m, &ant, &con).unwrap(), 0.5);
    }

    #[test]
    fn zero_support_antecedent_is_a_named_error() {
        let m = BasketMatrix::from_dense(["a", "b"], &[0, 1, 0, 1]).unwrap();
        let err = confidence(&m, &[0], &[1]).unwrap_err();
        assert_eq!(err, MiningError::ZeroSupportAntecedent { antecedent: vec![0] });
    }
}
