use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

/// Radius every target starts out with.
pub const DEFAULT_RADIUS: f32 = 50.0;

/// Floor for the resize ratchet; a drag can never shrink a target below this.
pub const MIN_RADIUS: f32 = 5.0;

/// Stable identity of a target.
///
/// Ids are minted by the registry in creation order and never reused, so
/// they double as a stable ordinal label for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetId(pub u64);

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A circular target on the plane.
///
/// Identity is the id, not the coordinates: two targets at the same spot are
/// distinct entities. All mutation goes through [`crate::registry::TargetRegistry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub(crate) id: TargetId,
    pub(crate) center: Pos2,
    pub(crate) radius: f32,
    pub(crate) initial_radius: f32,
}

impl Target {
    pub(crate) fn new(id: TargetId, center: Pos2, radius: f32) -> Self {
        Self {
            id,
            center,
            radius,
            initial_radius: radius,
        }
    }

    pub fn id(&self) -> TargetId {
        self.id
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Radius the target was created with.
    pub fn initial_radius(&self) -> f32 {
        self.initial_radius
    }

    /// True when `pos` lies on or inside the circle.
    pub fn contains(&self, pos: Pos2) -> bool {
        self.center.distance(pos) <= self.radius
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}
