//! Display surfaces for finished frames.

use crate::frame::FrameStore;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue, style,
    terminal::{self, ClearType},
};
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

/// Something a completed frame can be pushed to.
pub trait Presenter {
    fn clear(&mut self) -> io::Result<()>;

    fn present(&mut self, frame: &FrameStore) -> io::Result<()>;

    /// Wait up to `timeout` and report whether the user asked to stop.
    fn poll_quit(&mut self, timeout: Duration) -> io::Result<bool> {
        thread::sleep(timeout);
        Ok(false)
    }
}

/// Full-screen crossterm output: alternate screen, raw mode, hidden cursor.
///
/// The terminal is restored when the presenter is dropped.
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    /// The presenter exists before the terminal is touched, so a failure
    /// part-way through setup still restores the terminal on drop.
    pub fn new(out: W) -> io::Result<Self> {
        let mut presenter = Self { out };

        execute!(presenter.out, terminal::EnterAlternateScreen)?;

        terminal::enable_raw_mode()?;

        queue!(
            presenter.out,
            style::ResetColor,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;

        presenter.out.flush()?;

        Ok(presenter)
    }

    /// Warn once if the frame will not fit the current terminal.
    pub fn check_fit(&self, width: usize, height: usize) {
        if let Ok((cols, rows)) = terminal::size() {
            if width > cols as usize || height > rows as usize {
                tracing::warn!(
                    width,
                    height,
                    cols,
                    rows,
                    "Frame is larger than the terminal and will be clipped"
                );
            }
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All))?;
        self.out.flush()
    }

    fn present(&mut self, frame: &FrameStore) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        // Every row is rewritten in full, so no clear is needed between frames
        for (row, line) in visible_lines(frame, cols as usize, rows as usize)
            .into_iter()
            .enumerate()
        {
            queue!(
                self.out,
                cursor::MoveTo(0, row as u16),
                style::Print(line)
            )?;
        }
        self.out.flush()
    }

    fn poll_quit(&mut self, timeout: Duration) -> io::Result<bool> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(false);
            }
            if let Event::Key(key) = event::read()? {
                if is_quit_key(&key) {
                    return Ok(true);
                }
            }
            if remaining.is_zero() {
                return Ok(false);
            }
        }
    }
}

impl<W: Write> Drop for TerminalPresenter<W> {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Rows of `frame` clipped to a `cols` x `rows` terminal so nothing wraps
/// or scrolls.
pub fn visible_lines(frame: &FrameStore, cols: usize, rows: usize) -> Vec<String> {
    frame
        .lines()
        .take(rows)
        .map(|line| line.chars().take(cols).collect())
        .collect()
}

/// `q`, `Esc` or `Ctrl-C`. Raw mode swallows the interrupt signal, so Ctrl-C
/// has to be handled as a key.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Plain-text output: each frame's rows followed by a blank line.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn present(&mut self, frame: &FrameStore) -> io::Result<()> {
        write!(self.out, "{}", frame)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
