mod render;
mod rule;

pub use self::render::{Glyphs, Rendered};
use crate::{BoardError, Coord};
use rayon::prelude::*;

/// The capabilities every Game of Life board provides
///
/// [`Board`] is the dense implementation; callers written against this trait
/// keep working with other storage (e.g. a sparse set of live cells).
pub trait LifeBoard {
    /// Makes the cell at (row, col) alive, whatever its current state
    fn place_cell(&mut self, row: i32, col: i32) -> Result<(), BoardError>;
    /// Inverts the state of the cell at (row, col)
    fn toggle_cell(&mut self, row: i32, col: i32) -> Result<(), BoardError>;
    /// Advances the board by exactly one generation
    fn next(&mut self);
    fn is_alive(&self, row: i32, col: i32) -> Result<bool, BoardError>;

    /// Places every given cell, or none of them if any is out of bounds
    fn place_all<I>(&mut self, cells: I) -> Result<(), BoardError>
    where
        I: IntoIterator<Item = Coord>,
        Self: Sized,
    {
        let cells: Vec<Coord> = cells.into_iter().collect();
        for cell in &cells {
            self.is_alive(cell.row, cell.col)?;
        }
        for cell in cells {
            self.place_cell(cell.row, cell.col)?;
        }
        Ok(())
    }
}

/// A fixed size grid of cells evolving under B3/S23
///
/// Cells outside of the grid do not exist: nothing wraps around and edge
/// cells simply have fewer neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// row-major, `cells[row * width + col]`
    cells: Vec<bool>,
    generation: u64,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidDimension { width, height });
        }
        let (width, height) = (width as usize, height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
            generation: 0,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }
    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }
    /// The number of times the board has been advanced
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Maps (row, col) to an index into `cells`, failing outside of the grid
    fn index(&self, row: i32, col: i32) -> Result<usize, BoardError> {
        let in_rows = usize::try_from(row).is_ok_and(|r| r < self.height);
        let in_cols = usize::try_from(col).is_ok_and(|c| c < self.width);
        if !(in_rows && in_cols) {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(row as usize * self.width + col as usize)
    }

    pub fn place_cell(&mut self, row: i32, col: i32) -> Result<(), BoardError> {
        let i = self.index(row, col)?;
        self.cells[i] = true;
        Ok(())
    }

    pub fn toggle_cell(&mut self, row: i32, col: i32) -> Result<(), BoardError> {
        let i = self.index(row, col)?;
        self.cells[i] = !self.cells[i];
        Ok(())
    }

    pub fn is_alive(&self, row: i32, col: i32) -> Result<bool, BoardError> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Counts the live cells among the (up to 8) cells around (row, col)
    ///
    /// Neighbours that would fall outside of the grid are not counted.
    pub(crate) fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < self.height && col < self.width);
        let rows = row.saturating_sub(1)..=(row + 1).min(self.height - 1);
        let cols = col.saturating_sub(1)..=(col + 1).min(self.width - 1);

        let mut count = 0;
        for r in rows {
            for c in cols.clone() {
                if (r, c) != (row, col) && self.cells[r * self.width + c] {
                    count += 1;
                }
            }
        }
        count
    }

    #[inline]
    fn next_cell_state(&self, row: usize, col: usize) -> bool {
        let alive = self.cells[row * self.width + col];
        rule::next_state(alive, self.count_neighbors(row, col))
    }

    /// Advances the board by one generation
    ///
    /// The next generation is computed from the current one into a new buffer,
    /// which then replaces the current cells as a whole.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        let next: Vec<bool> = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell_state(row, col))
            .collect();
        debug_assert_eq!(next.len(), self.cells.len());
        self.cells = next;
        self.generation += 1;
    }

    /// Same as [`Board::next`], with rows computed on the rayon thread pool
    ///
    /// Every row only reads the current generation and only writes its own
    /// row of the new buffer.
    pub fn next_parallel(&mut self) {
        let mut next = vec![false; self.cells.len()];
        let board = &*self;
        next.par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, cell) in out.iter_mut().enumerate() {
                    *cell = board.next_cell_state(row, col);
                }
            });
        self.cells = next;
        self.generation += 1;
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// The rows of the board, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width)
    }

    /// Positions of the live cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| Coord::new((i / self.width) as i32, (i % self.width) as i32))
    }

    /// Renders the board with `o` for alive and `.` for dead cells
    pub fn render(&self) -> String {
        self.render_with(Glyphs::default())
    }

    pub fn render_with(&self, glyphs: Glyphs) -> String {
        self.rendered(glyphs).to_string()
    }

    /// A [`Display`](std::fmt::Display)able view of the board
    pub fn rendered(&self, glyphs: Glyphs) -> Rendered<'_> {
        Rendered::new(self, glyphs)
    }
}

impl Default for Board {
    /// An empty 3x3 board
    fn default() -> Self {
        Self {
            width: 3,
            height: 3,
            cells: vec![false; 9],
            generation: 0,
        }
    }
}

impl LifeBoard for Board {
    #[inline]
    fn place_cell(&mut self, row: i32, col: i32) -> Result<(), BoardError> {
        Board::place_cell(self, row, col)
    }
    #[inline]
    fn toggle_cell(&mut self, row: i32, col: i32) -> Result<(), BoardError> {
        Board::toggle_cell(self, row, col)
    }
    #[inline]
    fn next(&mut self) {
        Board::next(self)
    }
    #[inline]
    fn is_alive(&self, row: i32, col: i32) -> Result<bool, BoardError> {
        Board::is_alive(self, row, col)
    }
}
