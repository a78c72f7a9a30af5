//! Terminal lifecycle and blocking event loop.
//!
//! Sets up raw mode plus the alternate screen, draws a [`View`] until the
//! user closes it, and restores the terminal on the way out. Both
//! subcommands end in this loop; it is the "blocking viewer window" of the
//! tool.

use std::io;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};

/// A full-screen view that can draw itself into a frame.
pub trait View {
    /// Renders the view into the given frame.
    fn render(&self, frame: &mut Frame);
}

/// Displays a view and blocks until the user closes it.
///
/// The terminal is restored even when drawing fails; the error is
/// propagated after cleanup.
pub fn run_blocking(view: &dyn View) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, view);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// The event loop: draw, wait for a key press, quit on `q` or Esc.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, view: &dyn View) -> io::Result<()> {
    loop {
        terminal.draw(|frame| view.render(frame))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    _ => {}
                }
            }
        }
    }
}
