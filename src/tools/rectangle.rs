use egui::{Pos2, Rect};
use serde::{Deserialize, Serialize};

use crate::target::{Target, TargetId};

/// Axis-aligned area-selection tool.
///
/// The anchor corner is fixed at gesture start and the opposite corner
/// follows the pointer. Bounds are normalized, so dragging from either
/// corner of the same box selects the same set.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RectangleSelection {
    span: Option<(Pos2, Pos2)>,
}

impl RectangleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, anchor: Pos2) {
        self.span = Some((anchor, anchor));
    }

    pub fn update(&mut self, current: Pos2) {
        if let Some((_, corner)) = &mut self.span {
            *corner = current;
        }
    }

    /// Normalized bounds, or `None` before the first gesture.
    pub fn bounds(&self) -> Option<Rect> {
        self.span
            .map(|(anchor, current)| Rect::from_two_pos(anchor, current))
    }

    /// Targets whose center lies within the bounds, edges inclusive.
    pub fn hits<'a>(&self, targets: impl IntoIterator<Item = &'a Target>) -> Vec<TargetId> {
        match self.bounds() {
            Some(bounds) => targets
                .into_iter()
                .filter(|t| bounds.contains(t.center()))
                .map(Target::id)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_normalized_regardless_of_drag_direction() {
        let mut forward = RectangleSelection::new();
        forward.begin(Pos2::new(10.0, 10.0));
        forward.update(Pos2::new(50.0, 50.0));

        let mut backward = RectangleSelection::new();
        backward.begin(Pos2::new(50.0, 50.0));
        backward.update(Pos2::new(10.0, 10.0));

        assert_eq!(forward.bounds(), backward.bounds());
    }

    #[test]
    fn edges_are_inclusive() {
        let mut tool = RectangleSelection::new();
        tool.begin(Pos2::new(0.0, 0.0));
        tool.update(Pos2::new(100.0, 100.0));
        let bounds = tool.bounds().unwrap();
        assert!(bounds.contains(Pos2::new(100.0, 100.0)));
        assert!(bounds.contains(Pos2::new(0.0, 0.0)));
        assert!(!bounds.contains(Pos2::new(100.1, 100.0)));
    }
}
