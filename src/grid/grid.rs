use crate::error::ConfigError;

/// Rectangular field of cells, row-major; `true` is black
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-white grid of the given size
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if cols == 0 {
            return Err(ConfigError::EmptyRow);
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(ConfigError::GridTooLarge { rows, cols })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| ConfigError::GridTooLarge { rows, cols })?;
        cells.resize(len, false);

        Ok(Self { rows, cols, cells })
    }

    /// Build from explicit rows, checking the grid is non-empty and rectangular
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, ConfigError> {
        let first = rows.first().ok_or(ConfigError::EmptyGrid)?;
        let cols = first.len();
        if cols == 0 {
            return Err(ConfigError::EmptyRow);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ConfigError::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Cell value, `None` when out of bounds
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Cell value; panics when out of bounds
    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    /// Flip a cell. Callers guarantee `(row, col)` is in bounds.
    #[inline]
    pub(crate) fn flip(&mut self, row: usize, col: usize) {
        let cell = &mut self.cells[row * self.cols + col];
        *cell = !*cell;
    }

    /// Prepend a white row; existing rows shift down by one
    pub(crate) fn grow_top(&mut self) {
        self.cells.splice(0..0, std::iter::repeat(false).take(self.cols));
        self.rows += 1;
    }

    /// Append a white row
    pub(crate) fn grow_bottom(&mut self) {
        self.cells.resize(self.cells.len() + self.cols, false);
        self.rows += 1;
    }

    /// Prepend a white column; existing columns shift right by one
    pub(crate) fn grow_left(&mut self) {
        self.regrow(1, 0);
    }

    /// Append a white column
    pub(crate) fn grow_right(&mut self) {
        self.regrow(0, 1);
    }

    fn regrow(&mut self, before: usize, after: usize) {
        let cols = self.cols + before + after;
        let mut cells = Vec::with_capacity(self.rows * cols);
        for row in self.cells.chunks_exact(self.cols) {
            cells.extend(std::iter::repeat(false).take(before));
            cells.extend_from_slice(row);
            cells.extend(std::iter::repeat(false).take(after));
        }
        self.cells = cells;
        self.cols = cols;
    }

    /// Borrow each row as a slice
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Owned snapshot of the grid
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(<[bool]>::to_vec).collect()
    }

    /// Count black cells
    pub fn count_black(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
