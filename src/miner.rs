use crate::apriori::{mine_frequent, GenerationStats};
use crate::association_rules::{derive_rules, AssociationRule};
use crate::{BasketMatrix, MiningError};

/// One mining session: the two thresholds, fixed for the session's lifetime.
///
/// The support threshold is an absolute basket count (its type rules out
/// negative values); the confidence threshold is a fraction and is validated
/// at construction. The session holds no other state — every call scans the
/// matrix it is given.
pub struct RuleMiner {
    support_threshold: u64,
    confidence_threshold: f64,
}

impl RuleMiner {
    pub fn new(support_threshold: u64, confidence_threshold: f64) -> Result<Self, MiningError> {
        if !(0.0..=1.0).contains(&confidence_threshold) {
            return Err(MiningError::ConfidenceThresholdOutOfRange(confidence_threshold));
        }
        Ok(RuleMiner { support_threshold, confidence_threshold })
    }

    pub fn support_threshold(&self) -> u64 {
        self.support_threshold
    }

    pub fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }

    /// Mine the last surviving generation of frequent itemsets.
    ///
    /// Runs the level-wise Apriori loop: singleton candidates, support
    /// filter, pairwise merge of the survivors, repeated until a generation
    /// goes empty. The returned itemsets all share the largest cardinality
    /// that still met the support threshold; the list is empty when no
    /// single item did.
    pub fn frequent_itemsets(&self, matrix: &BasketMatrix) -> Vec<Vec<u32>> {
        mine_frequent(matrix, self.support_threshold, &mut |_| {})
    }

    /// Like [`RuleMiner::frequent_itemsets`], reporting each filter step to
    /// `progress`.
    pub fn frequent_itemsets_with_progress<F>(
        &self,
        matrix: &BasketMatrix,
        mut progress: F,
    ) -> Vec<Vec<u32>>
    where
        F: FnMut(GenerationStats),
    {
        mine_frequent(matrix, self.support_threshold, &mut progress)
    }

    /// Mine association rules: frequent itemsets first, then every
    /// drop-one-item split of each, kept when its confidence meets the
    /// confidence threshold.
    ///
    /// Rule order is itemset order then split-enumeration order. With a
    /// support threshold of 0 an antecedent can have zero support, in which
    /// case the whole run fails with
    /// [`MiningError::ZeroSupportAntecedent`] — no partial rule list is
    /// returned.
    pub fn mine(&self, matrix: &BasketMatrix) -> Result<Vec<AssociationRule>, MiningError> {
        self.mine_with_progress(matrix, |_| {})
    }

    /// Like [`RuleMiner::mine`], reporting each filter step to `progress`.
    pub fn mine_with_progress<F>(
        &self,
        matrix: &BasketMatrix,
        mut progress: F,
    ) -> Result<Vec<AssociationRule>, MiningError>
    where
        F: FnMut(GenerationStats),
    {
        let itemsets = mine_frequent(matrix, self.support_threshold, &mut progress);
        derive_rules(matrix, &itemsets, self.confidence_threshold)
    }
}
