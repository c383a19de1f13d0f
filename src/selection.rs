use crate::registry::TargetRegistry;
use crate::target::TargetId;

/// The current multi-selection.
///
/// Duplicate-free and insertion-ordered; a single selected target is just
/// the one-member case. Members are ids rather than target data, so the set
/// has to be kept consistent with the registry — [`SelectionSet::prune`]
/// drops ids whose targets are gone.
#[derive(Debug, Default, Clone)]
pub struct SelectionSet {
    members: Vec<TargetId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: TargetId) -> bool {
        self.members.contains(&id)
    }

    /// True when every id in `ids` is currently selected.
    pub fn contains_all(&self, ids: &[TargetId]) -> bool {
        ids.iter().all(|id| self.contains(*id))
    }

    /// Selected ids in the order they entered the selection.
    pub fn ids(&self) -> &[TargetId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Add if absent, remove if present. Toggling twice is the identity.
    pub fn toggle(&mut self, id: TargetId) {
        match self.members.iter().position(|m| *m == id) {
            Some(index) => {
                self.members.remove(index);
            }
            None => self.members.push(id),
        }
    }

    /// Collapse the selection to a single member.
    pub fn replace(&mut self, id: TargetId) {
        self.members.clear();
        self.members.push(id);
    }

    /// Toggle every id in turn (how an area-selection commit lands in a
    /// freshly cleared set).
    pub fn extend_toggle(&mut self, ids: impl IntoIterator<Item = TargetId>) {
        for id in ids {
            self.toggle(id);
        }
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Drop members whose targets no longer exist in the registry.
    pub fn prune(&mut self, registry: &TargetRegistry) {
        self.members.retain(|id| registry.contains(*id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut selection = SelectionSet::new();
        selection.replace(TargetId(1));
        selection.toggle(TargetId(2));
        selection.toggle(TargetId(2));
        assert_eq!(selection.ids(), &[TargetId(1)]);
    }

    #[test]
    fn toggle_never_duplicates() {
        let mut selection = SelectionSet::new();
        selection.extend_toggle([TargetId(1), TargetId(2)]);
        selection.toggle(TargetId(1));
        selection.toggle(TargetId(1));
        assert_eq!(selection.len(), 2);
    }
}
