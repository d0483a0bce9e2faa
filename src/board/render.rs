use super::Board;
use std::fmt;

/// Characters used to draw alive and dead cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    alive: char,
    dead: char,
}
impl Glyphs {
    pub const ALIVE: char = 'o';
    pub const DEAD: char = '.';

    /// Returns [`None`] if both glyphs are the same character
    pub fn new(alive: char, dead: char) -> Option<Self> {
        (alive != dead).then_some(Self { alive, dead })
    }

    #[inline]
    pub fn alive(&self) -> char {
        self.alive
    }
    #[inline]
    pub fn dead(&self) -> char {
        self.dead
    }

    #[inline]
    pub fn glyph(&self, alive: bool) -> char {
        if alive { self.alive } else { self.dead }
    }
}
impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: Self::ALIVE,
            dead: Self::DEAD,
        }
    }
}

/// A board paired with the glyphs to draw it with
pub struct Rendered<'a> {
    board: &'a Board,
    glyphs: Glyphs,
}
impl<'a> Rendered<'a> {
    pub(super) fn new(board: &'a Board, glyphs: Glyphs) -> Self {
        Self { board, glyphs }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.board.rows() {
            let line: String = row.iter().map(|&alive| self.glyphs.glyph(alive)).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Rendered::new(self, Glyphs::default()), f)
    }
}
