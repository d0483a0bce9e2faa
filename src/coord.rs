use std::cmp::Ordering;

/// A (row, col) position on a board
///
/// Signed so that offsets and out-of-range positions can be represented;
/// the board decides whether a position is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}
impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
    #[inline]
    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    /// Moves this position by `by`, saturating at the `i32` limits
    ///
    /// A saturated position is outside of every board, so placing it fails
    /// with `OutOfBounds` instead of wrapping onto the grid.
    #[inline]
    pub fn offset(self, by: Coord) -> Self {
        Self::new(
            self.row.saturating_add(by.row),
            self.col.saturating_add(by.col),
        )
    }
}
impl Default for Coord {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl PartialOrd for Coord {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Coord {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major, same order the board stores its cells in
        Ord::cmp(&self.row, &other.row).then(Ord::cmp(&self.col, &other.col))
    }
}
