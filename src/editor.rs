use std::rc::Rc;

use egui::{Key, Modifiers, Pos2, Rect, Vec2};
use log::{debug, info, warn};

use crate::clipboard::TargetClipboard;
use crate::command::{Command, CommandHistory};
use crate::event::{CoreEvent, EventBus, EventHandler};
use crate::input::{self, InputEvent};
use crate::registry::TargetRegistry;
use crate::selection::SelectionSet;
use crate::target::{Target, TargetId};
use crate::tools::{LassoSelection, RectangleSelection};

/// Radius change per drag frame while the resize modifier is held.
const RESIZE_STEP: f32 = 1.0;

/// Interaction states. Every gesture starts and ends in `Ready`; errors
/// along the way still land back in `Ready`.
#[derive(Debug, Clone)]
pub enum InteractionState {
    Ready,
    /// Pressed empty space with the create modifier held. A clean release
    /// creates a target at the release position; any movement before the
    /// release cancels the gesture.
    PrepareCreate,
    /// Dragging the selected targets. `origin` anchors both the net-delta
    /// commands and the resize ratchet; `last` tracks the previous frame
    /// for incremental live movement.
    DraggingTarget {
        origin: Pos2,
        last: Pos2,
        start_radii: Vec<(TargetId, f32)>,
    },
    /// Sweeping the rectangle and lasso tools across the plane. Both tools
    /// follow the same pointer; the winner is picked on release.
    DraggingSelectionTool,
}

/// Top-level orchestrator: consumes input events, drives the registry, the
/// selection, and the command history, and emits change notifications for
/// the rendering layer.
pub struct Editor {
    bus: Rc<EventBus>,
    registry: TargetRegistry,
    selection: SelectionSet,
    history: CommandHistory,
    rectangle: RectangleSelection,
    lasso: LassoSelection,
    clipboard: TargetClipboard,
    state: InteractionState,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        let bus = Rc::new(EventBus::new());
        Self {
            registry: TargetRegistry::new(Rc::clone(&bus)),
            bus,
            selection: SelectionSet::new(),
            history: CommandHistory::new(),
            rectangle: RectangleSelection::new(),
            lasso: LassoSelection::new(),
            clipboard: TargetClipboard::new(),
            state: InteractionState::Ready,
        }
    }

    /// Register a rendering-layer subscriber on the shared bus.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.bus.subscribe(handler);
    }

    // Read accessors; subscribers re-query through these after a
    // notification.

    pub fn targets(&self) -> &[Target] {
        self.registry.all()
    }

    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn rectangle_bounds(&self) -> Option<Rect> {
        self.rectangle.bounds()
    }

    pub fn lasso_path(&self) -> &[Pos2] {
        self.lasso.path()
    }

    pub fn lasso_closed(&self) -> bool {
        self.lasso.is_closed()
    }

    pub fn clipboard(&self) -> &TargetClipboard {
        &self.clipboard
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Feed one input event through the state machine.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { pos, modifiers } => self.pointer_down(pos, modifiers),
            InputEvent::PointerMove { pos, modifiers } => self.pointer_move(pos, modifiers),
            InputEvent::PointerUp { pos, modifiers } => self.pointer_up(pos, modifiers),
            InputEvent::KeyDown { key, modifiers } => self.key_down(key, modifiers),
        }
    }

    fn pointer_down(&mut self, pos: Pos2, modifiers: Modifiers) {
        if !matches!(self.state, InteractionState::Ready) {
            return;
        }
        if let Some(target) = self.registry.hit_test(pos) {
            let id = target.id();
            if input::multi_add_modifier(&modifiers) {
                self.selection.toggle(id);
            } else if !self.selection.contains(id) {
                // a press on an already-selected target keeps the group
                self.selection.replace(id);
            }
            let start_radii = self
                .selection
                .ids()
                .iter()
                .filter_map(|id| self.registry.get(*id).map(|t| (*id, t.radius())))
                .collect();
            self.state = InteractionState::DraggingTarget {
                origin: pos,
                last: pos,
                start_radii,
            };
            self.bus.emit(CoreEvent::TargetsChanged);
        } else {
            if input::create_modifier(&modifiers) {
                self.state = InteractionState::PrepareCreate;
            } else if input::area_select_modifier(&modifiers) {
                self.rectangle.begin(pos);
                self.lasso.begin(pos);
                self.state = InteractionState::DraggingSelectionTool;
                self.bus.emit(CoreEvent::OverlayChanged);
            }
            // pressing the background always drops the current selection
            self.clear_selection();
        }
    }

    fn pointer_move(&mut self, pos: Pos2, modifiers: Modifiers) {
        match &mut self.state {
            InteractionState::Ready => {}
            InteractionState::PrepareCreate => {
                // dragging cancels the create gesture
                debug!("create gesture cancelled by movement");
                self.state = InteractionState::Ready;
            }
            InteractionState::DraggingTarget { origin, last, .. } => {
                let delta = pos - *last;
                *last = pos;
                let origin_x = origin.x;
                let ids: Vec<TargetId> = self.selection.ids().to_vec();
                self.registry.translate_many(&ids, delta);
                if input::resize_modifier(&modifiers) {
                    // ratchet against the gesture origin, not the previous
                    // frame, so jitter cannot oscillate the radius
                    if pos.x > origin_x {
                        self.registry.resize_many(&ids, RESIZE_STEP);
                    } else if pos.x < origin_x {
                        self.registry.resize_many(&ids, -RESIZE_STEP);
                    }
                }
            }
            InteractionState::DraggingSelectionTool => {
                self.rectangle.update(pos);
                self.lasso.extend(pos);
                self.bus.emit(CoreEvent::OverlayChanged);
            }
        }
    }

    fn pointer_up(&mut self, pos: Pos2, _modifiers: Modifiers) {
        match std::mem::replace(&mut self.state, InteractionState::Ready) {
            InteractionState::Ready => {}
            InteractionState::PrepareCreate => {
                if let Err(err) = self
                    .history
                    .execute(Command::create_at(pos), &mut self.registry)
                {
                    warn!("create failed: {err}");
                }
            }
            InteractionState::DraggingTarget {
                origin,
                start_radii,
                ..
            } => {
                let net = pos - origin;
                if net != Vec2::ZERO {
                    for id in self.selection.ids() {
                        self.history.record(Command::Move {
                            id: *id,
                            delta: net,
                        });
                    }
                }
                for (id, start_radius) in start_radii {
                    if let Some(target) = self.registry.get(id) {
                        if target.radius() != start_radius {
                            self.history.record(Command::Resize {
                                id,
                                old_radius: start_radius,
                                new_radius: target.radius(),
                            });
                        }
                    }
                }
            }
            InteractionState::DraggingSelectionTool => {
                self.lasso.close();
                self.bus.emit(CoreEvent::OverlayChanged);
                let rect_hits = self.rectangle.hits(self.registry.all());
                let lasso_hits = self.lasso.hits(self.registry.all());
                // the tool that caught strictly more targets wins; a tie
                // leaves the selection as it was
                if lasso_hits.len() > rect_hits.len() {
                    info!("lasso selected {} target(s)", lasso_hits.len());
                    self.selection.extend_toggle(lasso_hits);
                } else if rect_hits.len() > lasso_hits.len() {
                    info!("rectangle selected {} target(s)", rect_hits.len());
                    self.selection.extend_toggle(rect_hits);
                }
                self.bus.emit(CoreEvent::TargetsChanged);
            }
        }
    }

    fn key_down(&mut self, key: Key, modifiers: Modifiers) {
        if key == Key::Delete {
            self.delete_selection();
        } else if input::is_undo_chord(key, &modifiers) {
            self.undo();
        } else if input::is_redo_chord(key, &modifiers) {
            self.redo();
        } else if key == Key::A && modifiers.command {
            self.select_all();
        } else if key == Key::C && modifiers.command {
            self.copy_selection();
        } else if key == Key::X && modifiers.command {
            self.cut_selection();
        } else if key == Key::V && modifiers.command {
            self.paste();
        }
    }

    /// Delete every selected target through the command engine, then empty
    /// the selection. Works from any interaction state.
    pub fn delete_selection(&mut self) {
        let ids: Vec<TargetId> = self.selection.ids().to_vec();
        for id in ids {
            let Some(target) = self.registry.get(id).cloned() else {
                continue;
            };
            if let Err(err) = self
                .history
                .execute(Command::Delete { target }, &mut self.registry)
            {
                warn!("delete failed: {err}");
            }
        }
        self.clear_selection();
    }

    /// Undo the most recent command. An empty history is a logged no-op.
    pub fn undo(&mut self) {
        match self.history.undo(&mut self.registry) {
            Ok(()) => {
                // undo restores data, not selection state, but the set must
                // not keep ids the undo removed (e.g. undo of a create)
                self.selection.prune(&self.registry);
                self.bus.emit(CoreEvent::TargetsChanged);
            }
            Err(err) => debug!("{err}"),
        }
    }

    /// Redo the most recently undone command. An empty redo stack is a
    /// logged no-op.
    pub fn redo(&mut self) {
        match self.history.redo(&mut self.registry) {
            Ok(()) => {
                self.selection.prune(&self.registry);
                self.bus.emit(CoreEvent::TargetsChanged);
            }
            Err(err) => debug!("{err}"),
        }
    }

    /// Empty the selection and notify.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.bus.emit(CoreEvent::TargetsChanged);
    }

    /// Select every target in the registry.
    pub fn select_all(&mut self) {
        let ids: Vec<TargetId> = self.registry.all().iter().map(Target::id).collect();
        self.selection.clear();
        self.selection.extend_toggle(ids);
        self.bus.emit(CoreEvent::TargetsChanged);
    }

    /// Snapshot the selected targets into the clipboard.
    pub fn copy_selection(&mut self) {
        let snapshots: Vec<Target> = self
            .selection
            .ids()
            .iter()
            .filter_map(|id| self.registry.get(*id).cloned())
            .collect();
        if !snapshots.is_empty() {
            info!("copied {} target(s)", snapshots.len());
            self.clipboard.store(snapshots);
        }
    }

    /// Copy the selection, then delete it.
    pub fn cut_selection(&mut self) {
        self.copy_selection();
        self.delete_selection();
    }

    /// Duplicate the clipboard contents as fresh targets and select them.
    pub fn paste(&mut self) {
        if self.clipboard.is_empty() {
            return;
        }
        let before = self.registry.len();
        let command = Command::Paste {
            prototypes: self.clipboard.contents().to_vec(),
            pasted: Vec::new(),
        };
        if let Err(err) = self.history.execute(command, &mut self.registry) {
            warn!("paste failed: {err}");
            return;
        }
        let minted: Vec<TargetId> = self.registry.all()[before..]
            .iter()
            .map(Target::id)
            .collect();
        self.selection.clear();
        self.selection.extend_toggle(minted);
        self.bus.emit(CoreEvent::TargetsChanged);
    }
}
