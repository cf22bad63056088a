//! Random Index tables used to normalize the consistency index.

use serde::{Deserialize, Serialize};

/// Saaty's random indices for n = 1..=15.
const SAATY: [f64; 15] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

/// Donegan and Dodd's random indices for n = 1..=15.
const DONEGAN_DODD: [f64; 15] = [
    0.0, 0.0, 0.4914, 0.8286, 1.0591, 1.1797, 1.2519, 1.3171, 1.3733, 1.4055, 1.4213, 1.4497,
    1.4643, 1.4822, 1.4969,
];

/// Which published random-index table to normalize with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomIndexTable {
    #[default]
    Saaty,
    DoneganDodd,
}

/// A random index looked up for one matrix dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomIndex {
    pub value: f64,
    /// True when n exceeded the table and the last entry was used.
    pub capped: bool,
}

impl RandomIndexTable {
    fn values(&self) -> &'static [f64] {
        match self {
            RandomIndexTable::Saaty => &SAATY,
            RandomIndexTable::DoneganDodd => &DONEGAN_DODD,
        }
    }

    /// Largest dimension with a tabulated value.
    pub fn max_dimension(&self) -> usize {
        self.values().len()
    }

    /// Looks up RI(n).
    ///
    /// # Edge Cases
    /// - n = 0: treated like n = 1 (RI = 0)
    /// - n beyond the table: the largest tabulated value, flagged `capped`
    pub fn lookup(&self, n: usize) -> RandomIndex {
        let values = self.values();
        match n {
            0 => RandomIndex {
                value: 0.0,
                capped: false,
            },
            n if n <= self.max_dimension() => RandomIndex {
                value: values[n - 1],
                capped: false,
            },
            _ => RandomIndex {
                value: values[values.len() - 1],
                capped: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_tables_cover_fifteen_items() {
        assert_eq!(RandomIndexTable::Saaty.max_dimension(), 15);
        assert_eq!(RandomIndexTable::DoneganDodd.max_dimension(), 15);
        assert!(!RandomIndexTable::Saaty.lookup(15).capped);
        assert!(RandomIndexTable::Saaty.lookup(16).capped);
    }

    #[test]
    fn small_matrices_have_zero_index() {
        for table in [RandomIndexTable::Saaty, RandomIndexTable::DoneganDodd] {
            assert_eq!(table.lookup(1).value, 0.0);
            assert_eq!(table.lookup(2).value, 0.0);
        }
    }

    #[test]
    fn saaty_three_is_058() {
        assert_eq!(RandomIndexTable::Saaty.lookup(3).value, 0.58);
        assert_eq!(RandomIndexTable::Saaty.lookup(15).value, 1.59);
        assert!(!RandomIndexTable::Saaty.lookup(15).capped);
    }

    #[test]
    fn beyond_table_is_capped() {
        let ri = RandomIndexTable::Saaty.lookup(20);
        assert!(ri.capped);
        assert_eq!(ri.value, 1.59);
    }

    #[test]
    fn deserializes_snake_case() {
        let table: RandomIndexTable = serde_json::from_str("\"donegan_dodd\"").unwrap();
        assert_eq!(table, RandomIndexTable::DoneganDodd);
    }
}
