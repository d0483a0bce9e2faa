//! Initial patterns to seed a board with.

use crate::{BoardError, Coord, LifeBoard, PatternError};
use regex::Regex;
use std::{str::FromStr, sync::OnceLock};

/// Named patterns, as run length encoded strings
const PRESETS: [(&str, &str); 6] = [
    ("blinker", "o$o$o!"),
    ("line", "3o!"),
    ("block", "2o$2o!"),
    ("glider", "bo$2bo$3o!"),
    ("toad", "b3o$3o!"),
    ("beacon", "2o$2o$2b2o$2b2o!"),
];

/// Upper bound on the live cells a decoded pattern may hold
pub const MAX_PATTERN_CELLS: usize = 1 << 24;

/// Moves an RLE cursor component by `run`, failing before it reaches
/// `i32::MAX` so that every cell's `row + 1` and `col + 1` stay in range
fn advance(value: i32, run: i32) -> Result<i32, PatternError> {
    value
        .checked_add(run)
        .filter(|&next| next < i32::MAX)
        .ok_or(PatternError::Overflow)
}

/// A set of live cells relative to the pattern's top-left corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// sorted and deduplicated, never negative
    cells: Vec<Coord>,
}

impl Pattern {
    fn from_cells(mut cells: Vec<Coord>) -> Self {
        cells.sort();
        cells.dedup();
        debug_assert!(cells.iter().all(|c| c.row >= 0 && c.col >= 0));
        Self { cells }
    }

    /// Names of the built in patterns, see [`Pattern::preset`]
    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|&(name, _)| name)
    }

    pub fn preset(name: &str) -> Result<Self, PatternError> {
        let (_, rle) = PRESETS
            .iter()
            .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
            .ok_or_else(|| PatternError::UnknownPreset(name.to_owned()))?;
        Self::from_rle(rle)
    }

    /// Decodes a pattern in the run length encoded format
    ///
    /// `b` is a dead cell, `o` a live one, `$` ends a row and `!` ends the
    /// pattern. Each may be prefixed with a run count. Lines starting with `#`
    /// and the `x = .., y = ..` header line are skipped.
    pub fn from_rle(value: &str) -> Result<Self, PatternError> {
        static TOKEN: OnceLock<Regex> = OnceLock::new();
        let token = TOKEN.get_or_init(|| Regex::new(r"(\d*)(\S)").expect("valid token regex"));

        let mut alive = Vec::new();
        let mut cursor = Coord::zero();
        'lines_loop: for line in value.lines() {
            let line = line.trim_start();
            if line.starts_with('#') || line.starts_with('x') {
                continue;
            }

            for (_, [run_str, state]) in token.captures_iter(line).map(|c| c.extract()) {
                let run = match run_str {
                    "" => 1,
                    n => n
                        .parse::<i32>()
                        .map_err(|_| PatternError::RunTooLong(n.to_owned()))?,
                };
                match state {
                    "!" => break 'lines_loop,
                    "o" => {
                        let end = advance(cursor.col, run)?;
                        if alive.len() + run as usize > MAX_PATTERN_CELLS {
                            return Err(PatternError::TooManyCells {
                                limit: MAX_PATTERN_CELLS,
                            });
                        }
                        alive.extend((cursor.col..end).map(|col| Coord::new(cursor.row, col)));
                        cursor.col = end;
                    }
                    "b" => cursor.col = advance(cursor.col, run)?,
                    "$" => {
                        cursor.col = 0;
                        cursor.row = advance(cursor.row, run)?;
                    }
                    found => {
                        return Err(PatternError::InvalidRle {
                            found: found.to_owned(),
                        });
                    }
                }
            }
        }
        Ok(Self::from_cells(alive))
    }

    /// A pattern covering a `width` by `height` area, filled by `mode`
    pub fn fill(mode: FillMode, width: i32, height: i32) -> Self {
        Self::from_cells(mode.create_alive(width, height))
    }

    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn width(&self) -> i32 {
        self.cells.iter().map(|c| c.col + 1).max().unwrap_or(0)
    }
    pub fn height(&self) -> i32 {
        self.cells.last().map(|c| c.row + 1).unwrap_or(0)
    }

    /// The offset that puts this pattern in the middle of a `width` by
    /// `height` board
    pub fn centered_in(&self, width: i32, height: i32) -> Coord {
        Coord::new((height - self.height()) / 2, (width - self.width()) / 2)
    }

    /// Places the pattern with its top-left corner at `at`
    ///
    /// Nothing is placed if any cell of the pattern falls outside the board.
    pub fn place_on<B: LifeBoard>(&self, board: &mut B, at: Coord) -> Result<(), BoardError> {
        board.place_all(self.cells.iter().map(|&cell| cell.offset(at)))
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Parses a preset name, falling back to run length encoding
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::preset(s) {
            Err(PatternError::UnknownPreset(_)) if s.contains(['o', '!', '$']) => {
                Self::from_rle(s)
            }
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}
impl FillMode {
    fn reserve_size(&self, w: i32, h: i32) -> usize {
        let total = (w.max(0) as usize) * (h.max(0) as usize);
        match self {
            Self::Random => total.div_ceil(2),
            Self::Alternating => total.div_ceil(2),
            Self::All => total,
            Self::Empty => 0,
        }
    }
    fn fill_cell<R: rand::Rng>(&self, cell: Coord, rng: &mut R) -> bool {
        match self {
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => (cell.row + cell.col) % 2 == 0,
            Self::All => true,
            Self::Empty => false,
        }
    }

    pub fn create_alive(self, w: i32, h: i32) -> Vec<Coord> {
        self.create_alive_with(w, h, &mut rand::rng())
    }

    fn create_alive_with<R: rand::Rng>(self, w: i32, h: i32, rng: &mut R) -> Vec<Coord> {
        let mut alive = Vec::new();
        let reserve_size = self.reserve_size(w, h);
        if reserve_size == 0 {
            // reserve_size indicates this will produce no alive cells
            return alive;
        }

        alive.reserve(reserve_size);
        for row in 0..h {
            for col in 0..w {
                let cell = Coord { row, col };
                if self.fill_cell(cell, rng) {
                    alive.push(cell);
                }
            }
        }
        alive
    }
}
impl FromStr for FillMode {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),
            "alternating" => Ok(Self::Alternating),
            "all" => Ok(Self::All),
            "empty" => Ok(Self::Empty),
            _ => Err(PatternError::UnknownFill(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    fn pos(row: i32, col: i32) -> Coord {
        Coord { row, col }
    }

    #[test]
    fn presets_decode() {
        for name in Pattern::preset_names() {
            let pattern = Pattern::preset(name).expect("preset decodes");
            assert!(!pattern.cells().is_empty(), "{name} is empty");
        }

        let glider = Pattern::preset("glider").unwrap();
        assert_eq!(
            glider.cells(),
            &[pos(0, 1), pos(1, 2), pos(2, 0), pos(2, 1), pos(2, 2)]
        );
        assert_eq!((glider.width(), glider.height()), (3, 3));
    }

    #[test]
    fn unknown_preset() {
        assert_eq!(
            Pattern::preset("spaceship"),
            Err(PatternError::UnknownPreset("spaceship".into()))
        );
    }

    #[test]
    fn rle_skips_comments_and_header() {
        let rle = "#N blinker\n#C a comment\nx = 3, y = 1, rule = B3/S23\n3o!\nooo";
        let pattern = Pattern::from_rle(rle).unwrap();

        assert_eq!(pattern.cells(), &[pos(0, 0), pos(0, 1), pos(0, 2)]);
    }

    #[test]
    fn rle_runs_and_rows() {
        let pattern = Pattern::from_rle("2bo2$o b o!").unwrap();

        assert_eq!(pattern.cells(), &[pos(0, 2), pos(2, 0), pos(2, 2)]);
    }

    #[test]
    fn rle_rejects_unknown_tokens() {
        assert_eq!(
            Pattern::from_rle("2oz!"),
            Err(PatternError::InvalidRle { found: "z".into() })
        );
        assert!(matches!(
            Pattern::from_rle("99999999999o!"),
            Err(PatternError::RunTooLong(_))
        ));
    }

    #[test]
    fn rle_rejects_cursor_overflow() {
        for rle in [
            "2147483647b2bo!",
            "2147483647$2$o!",
            "2147483646bo!",
            "2147483647b2147483647b2bo!",
        ] {
            assert_eq!(Pattern::from_rle(rle), Err(PatternError::Overflow), "{rle}");
        }
    }

    #[test]
    fn rle_accepts_cells_just_below_the_limit() {
        let pattern = Pattern::from_rle("2147483645bo!").unwrap();

        assert_eq!(pattern.cells(), &[pos(0, i32::MAX - 2)]);
        assert_eq!(pattern.width(), i32::MAX - 1);
    }

    #[test]
    fn rle_limits_live_cells() {
        assert_eq!(
            Pattern::from_rle("2000000000o!"),
            Err(PatternError::TooManyCells {
                limit: MAX_PATTERN_CELLS
            })
        );
        // the limit counts across runs and rows
        let half = MAX_PATTERN_CELLS / 2 + 1;
        assert!(matches!(
            Pattern::from_rle(&format!("{half}o${half}o!")),
            Err(PatternError::TooManyCells { .. })
        ));
    }

    #[test]
    fn far_offset_is_out_of_bounds() {
        let pattern = Pattern::preset("blinker").unwrap();
        let mut board = Board::new(3, 3).unwrap();

        assert!(matches!(
            pattern.place_on(&mut board, Coord::new(i32::MAX, 0)),
            Err(BoardError::OutOfBounds { row: i32::MAX, .. })
        ));
        assert!(matches!(
            pattern.place_on(&mut board, Coord::new(0, i32::MIN)),
            Err(BoardError::OutOfBounds { .. })
        ));
        assert_eq!(board.alive_count(), 0);
    }

    #[test]
    fn parses_names_or_rle() {
        assert_eq!("BLOCK".parse::<Pattern>(), Pattern::preset("block"));
        assert_eq!(
            "bo$o!".parse::<Pattern>().unwrap().cells(),
            &[pos(0, 1), pos(1, 0)]
        );
        assert!("nothing".parse::<Pattern>().is_err());
    }

    #[test]
    fn centers_and_places() {
        let pattern = Pattern::preset("blinker").unwrap();
        let mut board = Board::new(5, 5).unwrap();
        let at = pattern.centered_in(board.width(), board.height());
        assert_eq!(at, pos(1, 2));

        pattern.place_on(&mut board, at).unwrap();
        assert_eq!(board.render(), ".....\n..o..\n..o..\n..o..\n.....\n");
    }

    #[test]
    fn pattern_too_large_places_nothing() {
        let pattern = Pattern::preset("beacon").unwrap();
        let mut board = Board::new(3, 3).unwrap();

        assert!(matches!(
            pattern.place_on(&mut board, Coord::zero()),
            Err(BoardError::OutOfBounds { .. })
        ));
        assert_eq!(board.alive_count(), 0);
    }

    #[test]
    fn fill_mode_parses() {
        assert_eq!("alternating".parse::<FillMode>(), Ok(FillMode::Alternating));
        assert_eq!(
            "stripes".parse::<FillMode>(),
            Err(PatternError::UnknownFill("stripes".into()))
        );
    }

    #[test]
    fn create_alive_all_fills_grid() {
        let alive = FillMode::All.create_alive(3, 2);

        let expected = vec![
            pos(0, 0),
            pos(0, 1),
            pos(0, 2),
            pos(1, 0),
            pos(1, 1),
            pos(1, 2),
        ];
        assert_eq!(alive, expected);
    }

    #[test]
    fn create_alive_empty_is_empty() {
        let alive = FillMode::Empty.create_alive(5, 4);

        assert!(alive.is_empty());
    }

    #[test]
    fn create_alive_alternating_uses_parity() {
        let alive = FillMode::Alternating.create_alive(3, 3);

        let expected = vec![pos(0, 0), pos(0, 2), pos(1, 1), pos(2, 0), pos(2, 2)];
        assert_eq!(alive, expected);
    }

    #[test]
    fn create_alive_random_is_within_bounds() {
        let (w, h) = (4, 3);
        let pattern = Pattern::fill(FillMode::Random, w, h);

        assert!(
            pattern
                .cells()
                .iter()
                .all(|p| p.row >= 0 && p.col >= 0 && p.col < w && p.row < h)
        );
        let mut board = Board::new(w, h).unwrap();
        pattern.place_on(&mut board, Coord::zero()).unwrap();
        assert_eq!(board.alive_count(), pattern.cells().len());
    }
}
