use thiserror::Error;

use crate::target::TargetId;

/// The addressed target is no longer in the registry (e.g. a double delete).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("target {id} is not in the registry")]
pub struct NotFoundError {
    pub id: TargetId,
}

/// Errors surfaced by the undo/redo stacks.
///
/// All of these are recoverable: the editor reports empty-history calls as
/// no-ops and never lets them escape as fatal.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("nothing to redo")]
    NothingToRedo,
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}
