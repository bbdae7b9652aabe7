//! Seams between the engine and the terminal.

use std::collections::VecDeque;
use std::io;

/// Everything a surface needs to draw one screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    /// Display name of the current state, shown as a header
    pub state_name: String,
    /// Text box of the current state
    pub state_box: Vec<String>,
    /// Text box of the content stack
    pub stack_box: Vec<String>,
}

/// Output collaborator: places and flushes a frame.
pub trait Surface {
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Input collaborator: blocks for the next command.
///
/// `Ok(None)` means the user interrupted or input ended, which the engine
/// treats like `exit`.
pub trait CommandSource {
    fn next_command(&mut self) -> io::Result<Option<String>>;
}

/// Commands fed from a fixed script; input ends when the script does.
#[derive(Clone, Debug, Default)]
pub struct Script {
    commands: VecDeque<String>,
}

impl Script {
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl CommandSource for Script {
    fn next_command(&mut self) -> io::Result<Option<String>> {
        Ok(self.commands.pop_front())
    }
}

/// Surface keeping every frame it was asked to draw.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub frames: Vec<Frame>,
}

impl Surface for Recorder {
    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
