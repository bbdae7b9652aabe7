//! Screen placement of a frame.
//!
//! Placement is computed here without touching the terminal, so the
//! drawing code only has to move the cursor and print.

use super::text;
use crate::engine::{Config, Frame};

/// Text printed in front of the user's input.
pub const PROMPT: &str = ">  ";

/// Column of the prompt.
pub const PROMPT_COL: usize = 2;

/// Where the stack box goes relative to the state box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackSide {
    Beside,
    Below,
}

/// A line of text at a screen position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placed {
    pub row: usize,
    pub col: usize,
    pub text: String,
}

/// A fully placed frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pub lines: Vec<Placed>,
    pub stack_side: StackSide,
    /// Row of the prompt; input starts right after it
    pub prompt_row: usize,
}

impl Screen {
    /// Cursor position once the prompt is printed, as `(col, row)`.
    pub fn input_position(&self) -> (usize, usize) {
        (PROMPT_COL + PROMPT.chars().count(), self.prompt_row)
    }
}

/// Pick the stack side for a terminal `term_width` columns wide.
///
/// The stack goes beside the state box when the columns right of the
/// state box leave more than the configured margin after the stack.
pub fn stack_side(stack_box: &[String], config: &Config, term_width: usize) -> StackSide {
    let space = term_width.saturating_sub(config.max_info_width);
    if space > text::width(stack_box) + config.stack_margin_right {
        StackSide::Beside
    } else {
        StackSide::Below
    }
}

/// Place a frame on a terminal `term_width` columns wide.
///
/// The state name sits on the first row and the wrapped state box starts
/// two rows below. Only the last `max_stack_height` lines of the stack box
/// are shown.
pub fn place(frame: &Frame, config: &Config, term_width: usize) -> Screen {
    let state_box = text::wrap(&frame.state_box, config.max_info_width);
    let state_height = text::height(&state_box);
    let side = stack_side(&frame.stack_box, config, term_width);

    let mut lines = vec![Placed {
        row: 0,
        col: 0,
        text: frame.state_name.clone(),
    }];
    lines.extend(state_box.into_iter().enumerate().map(|(i, line)| Placed {
        row: i + 2,
        col: 0,
        text: line,
    }));

    let shown = frame
        .stack_box
        .len()
        .saturating_sub(config.max_stack_height);
    let (stack_row, stack_col, prompt_row) = match side {
        StackSide::Beside => (
            0,
            config.max_info_width,
            state_height.max(config.max_stack_height) + 2,
        ),
        StackSide::Below => (
            state_height + 3,
            0,
            state_height + config.max_stack_height + 3,
        ),
    };
    lines.extend(
        frame.stack_box[shown..]
            .iter()
            .enumerate()
            .map(|(i, line)| Placed {
                row: stack_row + i,
                col: stack_col,
                text: line.clone(),
            }),
    );

    lines.push(Placed {
        row: prompt_row,
        col: PROMPT_COL,
        text: PROMPT.to_string(),
    });

    Screen {
        lines,
        stack_side: side,
        prompt_row,
    }
}
