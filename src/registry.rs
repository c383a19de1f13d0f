use std::rc::Rc;

use egui::{Pos2, Vec2};
use log::debug;

use crate::error::NotFoundError;
use crate::event::{CoreEvent, EventBus};
use crate::target::{DEFAULT_RADIUS, MIN_RADIUS, Target, TargetId};

/// Owns the ordered collection of targets and the id counter.
///
/// Insertion order is preserved and doubles as the hit-test tie-break.
/// Every mutating operation emits exactly one [`CoreEvent::TargetsChanged`]
/// after the mutation completes; the `*_many` batch operations coalesce a
/// whole gesture frame into a single notification so subscribers do not
/// redraw once per target.
pub struct TargetRegistry {
    targets: Vec<Target>,
    next_id: u64,
    bus: Rc<EventBus>,
}

impl TargetRegistry {
    pub fn new(bus: Rc<EventBus>) -> Self {
        Self {
            targets: Vec::new(),
            next_id: 1,
            bus,
        }
    }

    /// Create a target with the default radius at `(x, y)`.
    ///
    /// Returns a snapshot of the created target so callers (notably the
    /// Create command) can later re-insert the identical identity on redo.
    pub fn create(&mut self, x: f32, y: f32) -> Target {
        self.create_with_radius(x, y, DEFAULT_RADIUS)
    }

    /// Create a target with an explicit radius. Paste goes through this so
    /// duplicates keep the copied size.
    pub fn create_with_radius(&mut self, x: f32, y: f32, radius: f32) -> Target {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        let target = Target::new(id, Pos2::new(x, y), radius);
        self.targets.push(target.clone());
        debug!("created target {id} at ({x}, {y})");
        self.notify();
        target
    }

    /// Re-add a previously removed target, preserving its identity.
    ///
    /// Used by undo-of-delete and redo-of-create; never mints a new id. The
    /// counter is kept ahead of the re-added id so ids stay unique.
    pub fn insert(&mut self, target: Target) {
        self.next_id = self.next_id.max(target.id.0 + 1);
        self.targets.push(target);
        self.notify();
    }

    /// Remove exactly one identity-matched target.
    pub fn remove(&mut self, id: TargetId) -> Result<Target, NotFoundError> {
        let index = self
            .targets
            .iter()
            .position(|t| t.id == id)
            .ok_or(NotFoundError { id })?;
        let target = self.targets.remove(index);
        debug!("removed target {id}");
        self.notify();
        Ok(target)
    }

    /// Translate one target in place.
    pub fn translate(&mut self, id: TargetId, delta: Vec2) -> Result<(), NotFoundError> {
        self.target_mut(id)?.translate(delta);
        self.notify();
        Ok(())
    }

    /// Translate a batch of targets with a single notification. Ids that are
    /// not present are skipped; live drag frames do not care.
    pub fn translate_many(&mut self, ids: &[TargetId], delta: Vec2) {
        for target in self.targets.iter_mut().filter(|t| ids.contains(&t.id)) {
            target.translate(delta);
        }
        self.notify();
    }

    /// Adjust radii of a batch of targets by a signed step, floored at
    /// [`MIN_RADIUS`]. Single notification, same as [`Self::translate_many`].
    pub fn resize_many(&mut self, ids: &[TargetId], delta_r: f32) {
        for target in self.targets.iter_mut().filter(|t| ids.contains(&t.id)) {
            target.radius = (target.radius + delta_r).max(MIN_RADIUS);
        }
        self.notify();
    }

    /// Replace a target's radius with an exact value (Resize command path;
    /// not clamped, so undo restores recorded radii bit-for-bit).
    pub fn set_radius(&mut self, id: TargetId, radius: f32) -> Result<(), NotFoundError> {
        self.target_mut(id)?.radius = radius;
        self.notify();
        Ok(())
    }

    /// First target under the point, or `None`.
    ///
    /// When circles overlap, the first match in iteration order wins; only
    /// one hit is ever reported. This is a deliberate tie-break, not an
    /// accident of implementation.
    pub fn hit_test(&self, pos: Pos2) -> Option<&Target> {
        self.targets.iter().find(|t| t.contains(pos))
    }

    /// Read-only view of all targets in insertion order.
    pub fn all(&self) -> &[Target] {
        &self.targets
    }

    pub fn get(&self, id: TargetId) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TargetId) -> bool {
        self.targets.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    fn target_mut(&mut self, id: TargetId) -> Result<&mut Target, NotFoundError> {
        self.targets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(NotFoundError { id })
    }

    fn notify(&self) {
        self.bus.emit(CoreEvent::TargetsChanged);
    }
}
