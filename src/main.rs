use std::{io, process::ExitCode, thread};

use lifeboard::{Board, BoardError, Coord, Pattern, PatternError};
use thiserror::Error;

mod console;
mod options;
mod stats;

use stats::Recorder;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Args(#[from] options::ArgsError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("{path}: {source}")]
    Input { path: String, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Picks the seed pattern and where it goes on a `width` by `height` board
fn args_to_seed(
    args: &options::Args,
    width: i32,
    height: i32,
) -> Result<(Pattern, Coord), AppError> {
    let pattern = if let Some(path) = args.input_file() {
        let encoded = std::fs::read_to_string(&path)
            .map_err(|source| AppError::Input { path, source })?;
        Some(Pattern::from_rle(&encoded)?)
    } else {
        args.pattern()?
    };
    if let Some(pattern) = pattern {
        let at = args.at()?.unwrap_or_else(|| pattern.centered_in(width, height));
        return Ok((pattern, at));
    }

    if let Some(mode) = args.fill_mode()? {
        return Ok((Pattern::fill(mode, width, height), Coord::zero()));
    }

    // three cells in a row on the second row, the classic blinker
    let line = Pattern::preset("line")?;
    Ok((line, args.at()?.unwrap_or(Coord::new(1, 0))))
}

fn run() -> Result<(), AppError> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };

    let (width, height) = args.grid_size()?;
    let mut board = Board::new(width, height)?;
    let (pattern, at) = args_to_seed(&args, width, height)?;
    pattern.place_on(&mut board, at)?;

    let glyphs = args.glyphs()?;
    let sleep = args.sleep()?;
    let generations = args.generations()?;
    let parallel = args.multithreading();

    let mut console = if args.console() {
        Some(console::ConsoleRender::new(glyphs)?)
    } else {
        println!("alive: {}", board.alive_count());
        None
    };

    let mut stats = stats::SimpleRecord::new(board.alive_count());
    'generations: for _ in 0..generations {
        // every frame reports unless running flat out
        let always_report = console.is_some() || !sleep.is_zero();
        let report = stats.has_report(always_report).then(|| stats.report());

        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                match cmd {
                    console::ConsoleCommand::Exit => break 'generations,
                    console::ConsoleCommand::Handled => {}
                }
            }
            if let Some(report) = report {
                console.set_report(report);
            }
            console.render(&board)?;
        } else {
            print!("{}", board.rendered(glyphs));
            if let Some(report) = report {
                println!("{}", report);
            }
            println!();
        }

        // compute the next generation
        if parallel {
            board.next_parallel();
        } else {
            board.next();
        }
        stats.record(board.alive_count());
        if !sleep.is_zero() {
            thread::sleep(sleep);
        }
    }
    std::mem::drop(console);

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
