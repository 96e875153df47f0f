use ahash::AHashMap;

use crate::MiningError;

/// Simple fixed-width bitset backed by `Vec<u64>`.
///
/// Used both as the per-basket row representation and as the column mask
/// built from an itemset during support evaluation.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BitSet {
    blocks: Vec<u64>,
}

impl BitSet {
    fn new(num_bits: usize) -> Self {
        let num_blocks = (num_bits + 63) / 64;
        BitSet { blocks: vec![0; num_blocks] }
    }

    #[inline]
    fn set(&mut self, bit: usize) {
        self.blocks[bit / 64] |= 1 << (bit % 64);
    }

    #[inline]
    fn is_subset_of(&self, other: &BitSet) -> bool {
        for (a, b) in self.blocks.iter().zip(other.blocks.iter()) {
            if (a & !b) != 0 {
                return false;
            }
        }
        true
    }
}

/// Binary basket × item matrix with named columns.
///
/// Column labels are mapped to dense `u32` codes once at construction; all
/// mining operates on the codes and decodes back to labels at the end. Each
/// basket is stored as one bitset over the columns. The matrix is read-only
/// input to the mining session — nothing mutates it after ingestion.
#[derive(Debug)]
pub struct BasketMatrix {
    labels: Vec<String>,
    index: AHashMap<String, u32>,
    rows: Vec<BitSet>,
}

impl BasketMatrix {
    /// Create an empty matrix over the given item columns.
    ///
    /// Column names are item identity and must be unique.
    pub fn new<I, S>(columns: I) -> Result<Self, MiningError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels: Vec<String> = Vec::new();
        let mut index: AHashMap<String, u32> = AHashMap::new();
        for column in columns {
            let label = column.into();
            if index.contains_key(&label) {
                return Err(MiningError::DuplicateItem(label));
            }
            index.insert(label.clone(), labels.len() as u32);
            labels.push(label);
        }
        Ok(BasketMatrix { labels, index, rows: Vec::new() })
    }

    /// Append one basket given the labels of the items present in it.
    /// Repeated labels within one basket collapse to a single presence bit.
    pub fn add_basket<S: AsRef<str>>(&mut self, items: &[S]) -> Result<(), MiningError> {
        let mut row = BitSet::new(self.labels.len());
        for item in items {
            let label = item.as_ref();
            let code = self
                .index
                .get(label)
                .ok_or_else(|| MiningError::UnknownItem(label.to_owned()))?;
            row.set(*code as usize);
        }
        self.rows.push(row);
        Ok(())
    }

    /// Build a matrix from a row-major dense 0/1 buffer.
    ///
    /// `cells.len()` must be a whole number of rows of `columns` cells; any
    /// cell value other than 0 or 1 is rejected before the matrix is built.
    pub fn from_dense<I, S>(columns: I, cells: &[u8]) -> Result<Self, MiningError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut matrix = BasketMatrix::new(columns)?;
        let n_items = matrix.labels.len();
        if n_items == 0 || cells.len() % n_items != 0 {
            if cells.is_empty() {
                return Ok(matrix);
            }
            return Err(MiningError::RaggedMatrix { len: cells.len(), n_items });
        }
        for (r, chunk) in cells.chunks(n_items).enumerate() {
            let mut row = BitSet::new(n_items);
            for (c, &value) in chunk.iter().enumerate() {
                match value {
                    0 => {}
                    1 => row.set(c),
                    _ => return Err(MiningError::NonBooleanCell { row: r, col: c, value }),
                }
            }
            matrix.rows.push(row);
        }
        Ok(matrix)
    }

    /// Number of item columns.
    pub fn n_items(&self) -> usize {
        self.labels.len()
    }

    /// Number of baskets (rows).
    pub fn n_baskets(&self) -> usize {
        self.rows.len()
    }

    /// Map item labels to their canonical itemset form: sorted, deduplicated
    /// column codes. Unknown labels are rejected.
    pub fn encode<S: AsRef<str>>(&self, items: &[S]) -> Result<Vec<u32>, MiningError> {
        let mut codes = Vec::with_capacity(items.len());
        for item in items {
            let label = item.as_ref();
            let code = self
                .index
                .get(label)
                .ok_or_else(|| MiningError::UnknownItem(label.to_owned()))?;
            codes.push(*code);
        }
        codes.sort_unstable();
        codes.dedup();
        Ok(codes)
    }

    /// Decode item codes back to column labels.
    ///
    /// Codes must come from this matrix; out-of-range codes are a caller
    /// error and panic.
    pub fn labels(&self, codes: &[u32]) -> Vec<&str> {
        codes.iter().map(|&c| self.labels[c as usize].as_str()).collect()
    }

    /// Number of baskets containing every item of `itemset`.
    ///
    /// Builds the column mask for the itemset once, then counts the rows the
    /// mask is a subset of. Codes must be in-range column codes of this
    /// matrix (the label boundary in [`BasketMatrix::encode`] enforces this
    /// for label input); out-of-range codes are a caller error and panic.
    pub fn support(&self, itemset: &[u32]) -> u64 {
        let mask = self.column_mask(itemset);
        self.rows.iter().filter(|row| mask.is_subset_of(row)).count() as u64
    }

    fn column_mask(&self, itemset: &[u32]) -> BitSet {
        let mut mask = BitSet::new(self.labels.len());
        for &code in itemset {
            assert!(
                (code as usize) < self.labels.len(),
                "item code {code} does not name a column of this matrix"
            );
            mask.set(code as usize);
        }
        mask
    }
}
