use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::target::{Target, TargetId};

/// Freehand area-selection tool.
///
/// Points accumulate while the pointer drags; releasing closes the path
/// with an implicit edge back to the first point. Containment uses the
/// even-odd ray cast, which resolves self-intersecting scribbles without
/// special-casing polygon validity.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LassoSelection {
    path: Vec<Pos2>,
    closed: bool,
}

impl LassoSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh path at the press position.
    pub fn begin(&mut self, start: Pos2) {
        self.path.clear();
        self.closed = false;
        self.path.push(start);
    }

    pub fn extend(&mut self, point: Pos2) {
        self.path.push(point);
    }

    /// Finalize the path; the edge from the last point back to the first is
    /// implicit from here on.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn path(&self) -> &[Pos2] {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Even-odd ray cast against the (implicitly closed) path.
    pub fn contains(&self, p: Pos2) -> bool {
        if self.path.len() < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = self.path.len() - 1;
        for i in 0..self.path.len() {
            let (a, b) = (self.path[i], self.path[j]);
            if (a.y > p.y) != (b.y > p.y)
                && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Targets whose center point falls inside the filled region.
    pub fn hits<'a>(&self, targets: impl IntoIterator<Item = &'a Target>) -> Vec<TargetId> {
        targets
            .into_iter()
            .filter(|t| self.contains(t.center()))
            .map(Target::id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lasso(points: &[(f32, f32)]) -> LassoSelection {
        let mut tool = LassoSelection::new();
        let mut iter = points.iter();
        if let Some((x, y)) = iter.next() {
            tool.begin(Pos2::new(*x, *y));
        }
        for (x, y) in iter {
            tool.extend(Pos2::new(*x, *y));
        }
        tool.close();
        tool
    }

    #[test]
    fn square_contains_interior_not_exterior() {
        let tool = lasso(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)]);
        assert!(tool.contains(Pos2::new(50.0, 50.0)));
        assert!(!tool.contains(Pos2::new(150.0, 50.0)));
        assert!(!tool.contains(Pos2::new(-1.0, 50.0)));
    }

    #[test]
    fn concave_path_excludes_the_notch() {
        // U shape opening upward; the notch between the arms is outside.
        let tool = lasso(&[
            (0.0, 0.0),
            (30.0, 0.0),
            (30.0, 80.0),
            (70.0, 80.0),
            (70.0, 0.0),
            (100.0, 0.0),
            (100.0, 100.0),
            (0.0, 100.0),
        ]);
        assert!(tool.contains(Pos2::new(15.0, 50.0)));
        assert!(tool.contains(Pos2::new(50.0, 90.0)));
        assert!(!tool.contains(Pos2::new(50.0, 40.0)));
    }

    #[test]
    fn self_intersecting_bowtie_follows_even_odd_rule() {
        let tool = lasso(&[(0.0, 0.0), (100.0, 100.0), (100.0, 0.0), (0.0, 100.0)]);
        // centers of the two lobes are inside, the crossing point region is not
        assert!(tool.contains(Pos2::new(25.0, 50.0)));
        assert!(tool.contains(Pos2::new(75.0, 50.0)));
        assert!(!tool.contains(Pos2::new(50.0, 25.0)));
    }

    #[test]
    fn degenerate_paths_contain_nothing() {
        let mut tool = LassoSelection::new();
        assert!(!tool.contains(Pos2::new(0.0, 0.0)));
        tool.begin(Pos2::new(0.0, 0.0));
        tool.extend(Pos2::new(10.0, 0.0));
        tool.close();
        assert!(!tool.contains(Pos2::new(5.0, 0.0)));
    }
}
