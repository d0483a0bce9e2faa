use std::time::Duration;

use lifeboard::{Coord, FillMode, Glyphs, Pattern, PatternError};
use thiserror::Error;

const DEFAULT_SIZE: (i32, i32) = (10, 10);
const DEFAULT_GENS: usize = 10;
const DEFAULT_SLEEP: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error(transparent)]
    Parse(#[from] getopts::Fail),
    #[error("invalid value `{value}` for --{name}")]
    Invalid { name: &'static str, value: String },
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("alive and dead cells must be drawn with different characters")]
    SameGlyphs,
}

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in console mode");
        opts.optflag("t", "threads", "compute generations on all cores");
        opts.optopt("w", "width", "set board width", "WIDTH");
        opts.optopt("h", "height", "set board height", "HEIGHT");
        opts.optopt(
            "p",
            "pattern",
            &format!(
                "seed with a named pattern ({})",
                Pattern::preset_names().collect::<Vec<_>>().join(", ")
            ),
            "NAME",
        );
        opts.optopt("r", "rle", "seed with a run length encoded pattern", "RLE");
        opts.optopt("i", "input", "seed with a run length encoded file", "FILE");
        opts.optopt(
            "f",
            "fill",
            "fill the board (random, alternating, all, empty)",
            "TYPE",
        );
        opts.optopt("", "at", "top-left corner of the pattern", "ROW,COL");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "number of generations", "COUNT");
        opts.optopt("", "alive", "character for alive cells", "CHAR");
        opts.optopt("", "dead", "character for dead cells", "CHAR");
        opts
    }

    /// Returns [`None`] when only the usage was asked for
    pub fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, ArgsError> {
        let opts = Self::options();
        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifeboard [options]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> Result<Option<Self>, ArgsError> {
        let env = std::env::args().skip(1).collect::<Vec<_>>();
        Self::new(&env)
    }

    fn get<T: std::str::FromStr>(&self, name: &'static str) -> Result<Option<T>, ArgsError> {
        self.matches.opt_get(name).map_err(|_| ArgsError::Invalid {
            name,
            value: self.matches.opt_str(name).unwrap_or_default(),
        })
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn multithreading(&self) -> bool {
        self.matches.opt_present("threads")
    }

    pub fn generations(&self) -> Result<usize, ArgsError> {
        Ok(self.get("gens")?.unwrap_or(DEFAULT_GENS))
    }
    pub fn sleep(&self) -> Result<Duration, ArgsError> {
        Ok(self
            .get("sleep")?
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SLEEP))
    }

    /// Board size, defaulting to the terminal size in console mode
    pub fn grid_size(&self) -> Result<(i32, i32), ArgsError> {
        let default = match crossterm::terminal::size() {
            // the last row is taken by the report
            Ok((cols, rows)) if self.console() => {
                (cols as i32, rows.saturating_sub(1).max(1) as i32)
            }
            _ => DEFAULT_SIZE,
        };

        Ok((
            self.get("width")?.unwrap_or(default.0),
            self.get("height")?.unwrap_or(default.1),
        ))
    }

    pub fn glyphs(&self) -> Result<Glyphs, ArgsError> {
        let alive = self.get("alive")?.unwrap_or(Glyphs::ALIVE);
        let dead = self.get("dead")?.unwrap_or(Glyphs::DEAD);
        Glyphs::new(alive, dead).ok_or(ArgsError::SameGlyphs)
    }

    pub fn input_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }
    pub fn fill_mode(&self) -> Result<Option<FillMode>, ArgsError> {
        Ok(self.get("fill")?)
    }

    /// The pattern given with `--rle` or `--pattern`, in that order
    pub fn pattern(&self) -> Result<Option<Pattern>, ArgsError> {
        if let Some(rle) = self.matches.opt_str("rle") {
            return Ok(Some(Pattern::from_rle(&rle)?));
        }
        match self.matches.opt_str("pattern") {
            Some(name) => Ok(Some(Pattern::preset(&name)?)),
            None => Ok(None),
        }
    }

    pub fn at(&self) -> Result<Option<Coord>, ArgsError> {
        let Some(value) = self.matches.opt_str("at") else {
            return Ok(None);
        };
        let invalid = || ArgsError::Invalid {
            name: "at",
            value: value.clone(),
        };
        let (row, col) = value.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Some(Coord { row, col }))
    }
}
