use egui::{Pos2, Vec2};

use crate::error::NotFoundError;
use crate::registry::TargetRegistry;
use crate::target::{DEFAULT_RADIUS, Target, TargetId};

/// Offset applied to pasted duplicates so they do not land exactly on top
/// of the originals.
pub const PASTE_OFFSET: Vec2 = Vec2::new(20.0, 20.0);

/// A reversible mutation of the target registry.
///
/// Each variant carries enough state to apply and invert itself without
/// re-deriving lost information: Move keeps the delta, Resize keeps both
/// radii, Delete and Create keep a full snapshot so redo re-inserts the
/// identical identity instead of minting a new one.
#[derive(Debug, Clone)]
pub enum Command {
    /// Create a target at a point. The snapshot is captured on first apply;
    /// re-applying (redo) re-inserts it unchanged.
    Create {
        at: Pos2,
        radius: f32,
        created: Option<Target>,
    },
    /// Remove a target, keeping the snapshot for undo.
    Delete { target: Target },
    /// Translate a target by the net delta of one drag gesture.
    Move { id: TargetId, delta: Vec2 },
    /// Replace a target's radius, keeping the pre-gesture value for undo.
    Resize {
        id: TargetId,
        old_radius: f32,
        new_radius: f32,
    },
    /// Mint duplicates of clipboard snapshots. Like Create, the minted
    /// targets are captured on first apply so redo restores the same ids.
    Paste {
        prototypes: Vec<Target>,
        pasted: Vec<Target>,
    },
}

impl Command {
    /// Create with the default radius.
    pub fn create_at(at: Pos2) -> Self {
        Self::Create {
            at,
            radius: DEFAULT_RADIUS,
            created: None,
        }
    }

    /// Execute the command against the registry.
    pub fn apply(&mut self, registry: &mut TargetRegistry) -> Result<(), NotFoundError> {
        match self {
            Command::Create {
                at,
                radius,
                created,
            } => {
                match created {
                    Some(target) => registry.insert(target.clone()),
                    None => *created = Some(registry.create_with_radius(at.x, at.y, *radius)),
                }
                Ok(())
            }
            Command::Delete { target } => registry.remove(target.id()).map(|_| ()),
            Command::Move { id, delta } => registry.translate(*id, *delta),
            Command::Resize { id, new_radius, .. } => registry.set_radius(*id, *new_radius),
            Command::Paste { prototypes, pasted } => {
                if pasted.is_empty() {
                    for proto in prototypes.iter() {
                        let at = proto.center() + PASTE_OFFSET;
                        pasted.push(registry.create_with_radius(at.x, at.y, proto.radius()));
                    }
                } else {
                    for target in pasted.iter() {
                        registry.insert(target.clone());
                    }
                }
                Ok(())
            }
        }
    }

    /// Exact algebraic inverse of [`Self::apply`].
    pub fn invert(&mut self, registry: &mut TargetRegistry) -> Result<(), NotFoundError> {
        match self {
            Command::Create { created, .. } => match created {
                Some(target) => registry.remove(target.id()).map(|_| ()),
                // never applied, nothing to invert
                None => Ok(()),
            },
            Command::Delete { target } => {
                registry.insert(target.clone());
                Ok(())
            }
            Command::Move { id, delta } => registry.translate(*id, -*delta),
            Command::Resize { id, old_radius, .. } => registry.set_radius(*id, *old_radius),
            Command::Paste { pasted, .. } => {
                for target in pasted.iter() {
                    registry.remove(target.id())?;
                }
                Ok(())
            }
        }
    }
}
