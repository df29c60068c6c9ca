use serde::{Deserialize, Serialize};

/// Rectangular grid of cell text, one inner `Vec` per data row.
///
/// Data rows do not include the header. Logical row `r >= 1` of the table
/// maps to data row `r - 1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSource {
    rows: Vec<Vec<String>>,
}

impl DataSource {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Text at (data row, column), or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Text for a logical table row (row 0 is the header and has no data)
    pub fn get_logical(&self, row: usize, col: usize) -> Option<&str> {
        let data_row = row.checked_sub(1)?;
        self.get(data_row, col)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Vec<String>>> for DataSource {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}

impl<const N: usize> From<Vec<[&str; N]>> for DataSource {
    fn from(rows: Vec<[&str; N]>) -> Self {
        Self::new(
            rows.into_iter()
                .map(|row| row.iter().map(|s| (*s).to_string()).collect())
                .collect(),
        )
    }
}
