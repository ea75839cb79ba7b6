use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    style::Print,
    terminal,
};
use sparselife::{Board, Control, Frame, Frontend, stats::Report};
use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

/// Draws each generation over the whole terminal.
///
/// The terminal runs in raw mode so key presses can end the animation during
/// a pause; every line is positioned explicitly.
pub struct Terminal {
    report: String,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self {
            report: String::new(),
        })
    }

    fn is_exit(key: KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }
        )
    }
}

impl Frontend for Terminal {
    fn show(&mut self, generation: usize, board: &Board) -> io::Result<()> {
        let mut stdout = io::stdout();
        // clear screen & move cursor to 0,0
        queue!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        queue!(stdout, Print(format!("generation {generation}")), cursor::MoveToNextLine(1))?;
        for line in Frame::new(board).to_string().lines() {
            queue!(stdout, Print(line), cursor::MoveToNextLine(1))?;
        }

        // footer
        queue!(stdout, cursor::MoveToNextLine(1), Print(&self.report))?;
        stdout.flush()
    }

    fn pause(&mut self, delay: Duration) -> io::Result<Control> {
        let deadline = Instant::now() + delay;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(Control::Continue);
            }
            if let event::Event::Key(key) = event::read()? {
                if Self::is_exit(key) {
                    return Ok(Control::Stop);
                }
            }
        }
    }

    fn report(&mut self, report: Report) -> io::Result<()> {
        self.report = report.to_string();
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        // nothing left to report errors to
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), cursor::Show, Print("\r\n"));
    }
}
