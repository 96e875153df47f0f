use thiserror::Error;

/// Everything that can go wrong while building a matrix or mining rules.
///
/// All variants are detected synchronously at the offending call; a failed
/// run never yields partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MiningError {
    /// Confidence thresholds are fractions; anything outside [0, 1]
    /// (including NaN) is rejected at session construction.
    #[error("confidence threshold must be a fraction in [0, 1], got {0}")]
    ConfidenceThresholdOutOfRange(f64),

    /// Column names double as item identity and must be unique.
    #[error("duplicate item column `{0}`")]
    DuplicateItem(String),

    /// An item label that is not a column of the matrix.
    #[error("unknown item `{0}`")]
    UnknownItem(String),

    /// Dense ingestion only accepts 0/1 cells.
    #[error("cell at row {row}, column {col} is not boolean (got {value})")]
    NonBooleanCell { row: usize, col: usize, value: u8 },

    /// Dense ingestion requires a rectangular row-major buffer.
    #[error("dense data of length {len} does not form whole rows of {n_items} columns")]
    RaggedMatrix { len: usize, n_items: usize },

    /// Confidence of a rule whose antecedent occurs in no basket is
    /// undefined (division by zero). Unreachable through `RuleMiner::mine`
    /// with a support threshold of at least 1, but guarded for direct
    /// callers of `confidence`.
    #[error("antecedent {antecedent:?} has zero support, confidence is undefined")]
    ZeroSupportAntecedent { antecedent: Vec<u32> },
}
