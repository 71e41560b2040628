//! Rectangular terrain grids.

use crate::error::{GridError, GridResult};

/// A rectangular `height × width` matrix of terrain symbols.
///
/// Backed by a flat row-major buffer. Construction validates the shape,
/// so downstream code can assume exactly `height * width` symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainGrid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl TerrainGrid {
    /// Build a grid from symbol rows.
    ///
    /// Fails with [`GridError::EmptyGrid`] when there are no rows or no
    /// columns, and with [`GridError::RaggedRow`] when a row's length
    /// differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<char>>) -> GridResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, syms) in rows.into_iter().enumerate() {
            if syms.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    len: syms.len(),
                    expected: width,
                });
            }
            cells.extend(syms);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from string lines, one line per row.
    pub fn from_lines<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) -> GridResult<Self> {
        Self::from_rows(
            lines
                .into_iter()
                .map(|line| line.as_ref().chars().collect())
                .collect(),
        )
    }

    /// Grid width (number of columns).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height (number of rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells. Constructed grids never do.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Symbol at `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Option<char> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Row-major iterator over `(row, col, symbol)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &sym)| (i / self.width, i % self.width, sym))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let grid = TerrainGrid::from_lines([".S", "@."]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: TerrainGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, back);
    }
}
