//! Crossterm-backed surface and command source.

use super::input::{Echo, Feed, Key, TokenReader};
use super::layout;
use crate::engine::{CommandSource, Config, Frame, Surface};
use crossterm::cursor::{MoveLeft, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self as term, disable_raw_mode, enable_raw_mode, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use tracing::trace;

/// Restores the terminal when dropped, including on panic unwind.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

/// The interactive terminal: raw mode on the alternate screen.
///
/// Output and input are separate halves so the engine can hold both at
/// once. The terminal is restored when this value is dropped.
pub struct Terminal {
    pub display: Display,
    pub keyboard: Keyboard,
    _guard: TerminalGuard,
}

impl Terminal {
    /// Switch the terminal to raw mode and the alternate screen.
    pub fn enter(config: Config) -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self {
            display: Display {
                out: io::stdout(),
                config,
            },
            keyboard: Keyboard {
                out: io::stdout(),
                reader: TokenReader::new(),
            },
            _guard: guard,
        })
    }
}

/// Output half: clears the screen and places each frame.
pub struct Display {
    out: Stdout,
    config: Config,
}

impl Surface for Display {
    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        let (cols, _) = term::size()?;
        let screen = layout::place(frame, &self.config, usize::from(cols));

        queue!(self.out, term::Clear(ClearType::All))?;
        for line in &screen.lines {
            queue!(self.out, MoveTo(clamp(line.col), clamp(line.row)), Print(&line.text))?;
        }
        let (col, row) = screen.input_position();
        queue!(self.out, MoveTo(clamp(col), clamp(row)))?;
        self.out.flush()
    }
}

/// Input half: reads keystrokes and echoes them after the prompt.
pub struct Keyboard {
    out: Stdout,
    reader: TokenReader,
}

impl Keyboard {
    fn echo(&mut self, echo: Echo) -> io::Result<()> {
        match echo {
            Echo::Nothing => return Ok(()),
            Echo::Print(c) => queue!(self.out, Print(c))?,
            Echo::Erase => queue!(self.out, MoveLeft(1), Print(' '), MoveLeft(1))?,
        }
        self.out.flush()
    }
}

impl CommandSource for Keyboard {
    fn next_command(&mut self) -> io::Result<Option<String>> {
        loop {
            let Event::Key(key_event) = event::read()? else {
                continue;
            };
            let Some(key) = decode(&key_event) else {
                continue;
            };
            match self.reader.feed(key) {
                Feed::Pending(echo) => self.echo(echo)?,
                Feed::Done(token) => {
                    trace!(token = %token, "token read");
                    return Ok(Some(token));
                }
                Feed::Cancelled => return Ok(None),
            }
        }
    }
}

/// Map a terminal key event to a reader key. Releases and unhandled keys
/// yield `None`.
pub fn decode(event: &KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    match event.code {
        KeyCode::Char('c') if ctrl => Some(Key::Interrupt),
        KeyCode::Char('d') if ctrl => Some(Key::Eof),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        _ => None,
    }
}

fn clamp(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
