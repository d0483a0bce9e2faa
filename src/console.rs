use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use lifeboard::{Board, Coord, Glyphs};
use std::{io, time::Duration};

pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// Full screen renderer, showing the part of the board that fits the terminal
pub struct ConsoleRender {
    /// board position drawn in the top-left corner of the terminal
    tl: Coord,
    glyphs: Glyphs,
    report: String,
}
impl ConsoleRender {
    pub fn new(glyphs: Glyphs) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self {
            tl: Coord::zero(),
            glyphs,
            report: String::new(),
        })
    }

    pub fn render(&mut self, board: &Board) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        // the last terminal row is the report footer
        let visible_rows = rows.saturating_sub(1) as usize;
        self.clamp_view(board);

        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        let first_col = self.tl.col as usize;
        let visible = board
            .rendered(self.glyphs)
            .to_string()
            .lines()
            .skip(self.tl.row as usize)
            .take(visible_rows)
            .map(|line| line.chars().skip(first_col).take(cols as usize).collect::<String>())
            .collect::<Vec<_>>();
        for (y, line) in visible.iter().enumerate() {
            queue!(stdout, cursor::MoveTo(0, y as u16))?;
            io::Write::write_all(&mut stdout, line.as_bytes())?;
        }

        // write footer
        queue!(stdout, cursor::MoveTo(0, rows.saturating_sub(1)))?;
        io::Write::write_all(&mut stdout, self.report.as_bytes())?;

        io::Write::flush(&mut stdout)
    }

    /// Keeps the view from scrolling past the bottom-right of the board
    fn clamp_view(&mut self, board: &Board) {
        self.tl.row = self.tl.row.clamp(0, board.height() - 1);
        self.tl.col = self.tl.col.clamp(0, board.width() - 1);
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(Duration::from_secs(0))? {
            return Ok(None);
        }

        let mut outp = Ok(Some(ConsoleCommand::Handled));
        match event::read()? {
            // CTRL+C
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | event::Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }) => {
                outp = Ok(Some(ConsoleCommand::Exit));
            }
            // arrows to move the view
            event::Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Up => self.tl.row -= 1,
                KeyCode::Down => self.tl.row += 1,
                KeyCode::Left => self.tl.col -= 1,
                KeyCode::Right => self.tl.col += 1,
                _ => {}
            },
            _ => {}
        }
        outp
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), cursor::Show).expect("enable cursor");
    }
}
