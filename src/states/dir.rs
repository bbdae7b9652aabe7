//! Directory browser, built as an extension state.
//!
//! Unlike the other built-ins it goes through [`StateBuilder`], the same
//! path third-party states take, and talks to the disk only through the
//! [`Filesystem`](crate::core::Filesystem) collaborator held by memory.

use super::menu::{menu, EXIT};
use crate::builder::{BuildError, StateBuilder};
use crate::core::{Memory, State, Transition};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DIR: &str = "DirState";

const USAGE: [&str; 5] = [
    "",
    "type the number associated to a file",
    "if this is a directory, it visits it",
    "otherwise it is pushed onto the stack",
    "type . to go up",
];

/// Browser rooted at the current working directory.
pub fn dir_here(memory: &Memory) -> Result<Transition, BuildError> {
    match memory.fs().current_dir() {
        Ok(path) => Ok(dir(path)?.into()),
        Err(err) => {
            warn!(%err, "cannot resolve current directory");
            Ok(menu(format!("cannot read current directory: {err}")).into())
        }
    }
}

/// Browser showing `path`.
pub fn dir(path: PathBuf) -> Result<State, BuildError> {
    let shown = path.clone();
    StateBuilder::new(DIR)
        .render(move |mem| render(&shown, mem))
        .update(move |command, _, mem| select(&path, command, mem))
        .build()
}

fn render(path: &Path, memory: &Memory) -> Vec<String> {
    let mut lines = vec![path.display().to_string(), String::new()];
    match memory.fs().list_dir(path) {
        Ok(entries) => lines.extend(
            entries
                .iter()
                .enumerate()
                .map(|(i, name)| format!("{i} --> {name}")),
        ),
        Err(err) => lines.push(format!("cannot list directory: {err}")),
    }
    lines.extend(USAGE.iter().map(|line| line.to_string()));
    lines
}

fn select(path: &Path, command: &str, memory: &mut Memory) -> Transition {
    if command == EXIT {
        return Transition::Terminate;
    }
    if command == "." {
        let target = memory.fs().parent(path).unwrap_or_else(|| path.to_path_buf());
        return enter(target);
    }

    let Ok(index) = command.parse::<usize>() else {
        return menu("not a number").into();
    };

    let entries = match memory.fs().list_dir(path) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %path.display(), %err, "directory listing failed");
            return menu(format!("cannot list directory: {err}")).into();
        }
    };

    let Some(name) = entries.get(index) else {
        return menu("invalid number").into();
    };

    let target = memory.fs().join(path, name);
    if memory.fs().is_dir(&target) {
        enter(target)
    } else {
        memory.stack.push(name.as_str());
        enter(path.to_path_buf())
    }
}

fn enter(path: PathBuf) -> Transition {
    dir(path).map_or_else(|err| menu(err.to_string()).into(), Transition::To)
}
