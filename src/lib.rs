//! Association rule mining over binary basket matrices.
//!
//! The classic level-wise Apriori pipeline: filter singleton itemsets by
//! support, merge survivors into the next candidate generation until one
//! goes empty, then split the surviving itemsets into directed rules and
//! keep those meeting a confidence threshold.
//!
//! ```
//! use rapriori::{BasketMatrix, RuleMiner};
//!
//! let mut matrix = BasketMatrix::new(["bread", "butter", "beer"])?;
//! matrix.add_basket(&["bread", "butter", "beer"])?;
//! matrix.add_basket(&["bread", "butter"])?;
//! matrix.add_basket(&["bread", "beer"])?;
//!
//! let miner = RuleMiner::new(2, 0.6)?;
//! for rule in miner.mine(&matrix)? {
//!     println!(
//!         "{:?} -> {:?} ({:.2})",
//!         matrix.labels(&rule.antecedent),
//!         matrix.labels(&rule.consequent),
//!         rule.confidence,
//!     );
//! }
//! # Ok::<(), rapriori::MiningError>(())
//! ```

mod apriori;
mod association_rules;
mod dataset;
mod error;
mod miner;

pub use apriori::{merge_candidates, GenerationStats};
pub use association_rules::{confidence, rule_splits, AssociationRule};
pub use dataset::BasketMatrix;
pub use error::MiningError;
pub use miner::RuleMiner;
