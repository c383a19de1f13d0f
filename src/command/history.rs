use log::debug;

use crate::command::Command;
use crate::error::{HistoryError, NotFoundError};
use crate::registry::TargetRegistry;

/// Manages the history of executed commands for undo/redo.
///
/// History is linear: pushing a new command after one or more undos
/// discards the redo stack.
#[derive(Default)]
pub struct CommandHistory {
    /// Stack of commands that can be undone
    undo_stack: Vec<Command>,
    /// Stack of commands that can be redone
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command and push it onto the undo stack.
    pub fn execute(
        &mut self,
        mut command: Command,
        registry: &mut TargetRegistry,
    ) -> Result<(), NotFoundError> {
        command.apply(registry)?;
        debug!("executed {command:?}");
        self.undo_stack.push(command);
        self.redo_stack.clear();
        Ok(())
    }

    /// Push a command whose effect was already applied live during a drag
    /// gesture (net moves and resizes). The command is not re-applied here;
    /// it exists so the gesture can be undone as one step per target.
    pub fn record(&mut self, command: Command) {
        debug!("recorded {command:?}");
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Undo the most recent command, moving it to the redo stack.
    pub fn undo(&mut self, registry: &mut TargetRegistry) -> Result<(), HistoryError> {
        let mut command = self.undo_stack.pop().ok_or(HistoryError::NothingToUndo)?;
        command.invert(registry)?;
        self.redo_stack.push(command);
        Ok(())
    }

    /// Redo the most recently undone command, moving it back to the undo
    /// stack.
    pub fn redo(&mut self, registry: &mut TargetRegistry) -> Result<(), HistoryError> {
        let mut command = self.redo_stack.pop().ok_or(HistoryError::NothingToRedo)?;
        command.apply(registry)?;
        self.undo_stack.push(command);
        Ok(())
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
