//! Shape module - fixed-size occupancy matrices
//!
//! A shape is a rectangular 0/1 matrix of at most 4x4 cells, stored in a fixed
//! array with an explicit width and height. Cells outside `width x height` are
//! always empty, so two shapes compare equal exactly when their matrices do.

use std::fmt;

/// Largest supported edge length
pub const MAX_DIM: usize = 4;

/// Error returned when building a shape from runtime rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// No rows, or a first row with no cells
    Empty,
    /// More than [`MAX_DIM`] rows or columns
    TooLarge { width: usize, height: usize },
    /// Row `row` has `len` cells where `expected` were required
    Ragged { row: usize, expected: usize, len: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "shape has no cells"),
            ShapeError::TooLarge { width, height } => write!(
                f,
                "shape is {}x{}, limit is {}x{}",
                width, height, MAX_DIM, MAX_DIM
            ),
            ShapeError::Ragged { row, expected, len } => write!(
                f,
                "shape row {} has {} cells, expected {}",
                row, len, expected
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Rectangular occupancy matrix
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[bool; MAX_DIM]; MAX_DIM],
    width: u8,
    height: u8,
}

impl Shape {
    /// Build a shape from a fixed-size matrix.
    ///
    /// The array type rules out ragged rows; dimensions above [`MAX_DIM`]
    /// fail const evaluation.
    pub const fn from_matrix<const W: usize, const H: usize>(matrix: [[u8; W]; H]) -> Self {
        assert!(W > 0 && H > 0 && W <= MAX_DIM && H <= MAX_DIM);
        let mut cells = [[false; MAX_DIM]; MAX_DIM];
        let mut r = 0;
        while r < H {
            let mut c = 0;
            while c < W {
                cells[r][c] = matrix[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            cells,
            width: W as u8,
            height: H as u8,
        }
    }

    /// Build a shape from runtime rows, checking that every row has the
    /// same length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(ShapeError::Empty);
        }
        if width > MAX_DIM || height > MAX_DIM {
            return Err(ShapeError::TooLarge { width, height });
        }

        let mut cells = [[false; MAX_DIM]; MAX_DIM];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(ShapeError::Ragged {
                    row: r,
                    expected: width,
                    len: row.len(),
                });
            }
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Ok(Self {
            cells,
            width: width as u8,
            height: height as u8,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether relative cell (row, col) is filled; false outside the matrix
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height as usize && col < self.width as usize && self.cells[row][col]
    }

    /// Filled cells as (row, col) offsets from the anchor, row-major
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let (w, h) = (self.width as usize, self.height as usize);
        (0..h).flat_map(move |r| {
            (0..w)
                .filter(move |&c| self.is_filled(r, c))
                .map(move |c| (r as i8, c as i8))
        })
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    /// Rotate 90° clockwise: transpose, then reverse each resulting row.
    ///
    /// Width and height swap: `new[r][c] = old[height - 1 - c][r]`.
    pub fn rotated_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut cells = [[false; MAX_DIM]; MAX_DIM];
        for (r, row) in cells.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - c][r];
            }
        }
        Self {
            cells,
            width: self.height,
            height: self.width,
        }
    }

    /// Rows as 0/1 vectors (for tests and debugging output)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|r| {
                (0..self.width as usize)
                    .map(|c| self.is_filled(r, c) as u8)
                    .collect()
            })
            .collect()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape{:?}", self.to_rows())
    }
}
