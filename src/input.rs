use egui::{Key, Modifiers, Pos2};

/// Normalized input events consumed by the editor.
///
/// The collaborator delivering these is expected to have translated pointer
/// positions into the core's 2D coordinate space already; the core never
/// sees raw windowing events.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Pointer button was pressed
    PointerDown { pos: Pos2, modifiers: Modifiers },
    /// Pointer moved while a gesture may be in progress
    PointerMove { pos: Pos2, modifiers: Modifiers },
    /// Pointer button was released
    PointerUp { pos: Pos2, modifiers: Modifiers },
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
}

// Modifier roles. Shift doubles as create (on empty space) and resize
// (during a target drag); Ctrl doubles as area-select (on empty space) and
// multi-add (on a target). Which role applies is decided by what is under
// the pointer, never by the modifier alone.

pub(crate) fn create_modifier(modifiers: &Modifiers) -> bool {
    modifiers.shift
}

pub(crate) fn area_select_modifier(modifiers: &Modifiers) -> bool {
    modifiers.ctrl
}

pub(crate) fn multi_add_modifier(modifiers: &Modifiers) -> bool {
    modifiers.ctrl
}

pub(crate) fn resize_modifier(modifiers: &Modifiers) -> bool {
    modifiers.shift
}

pub(crate) fn is_undo_chord(key: Key, modifiers: &Modifiers) -> bool {
    key == Key::Z && modifiers.command && !modifiers.shift
}

pub(crate) fn is_redo_chord(key: Key, modifiers: &Modifiers) -> bool {
    (key == Key::Y && modifiers.command) || (key == Key::Z && modifiers.command && modifiers.shift)
}
