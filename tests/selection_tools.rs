use std::rc::Rc;

use egui::{Modifiers, Pos2};
use target_practice::event::EventBus;
use target_practice::registry::TargetRegistry;
use target_practice::tools::{LassoSelection, RectangleSelection};
use target_practice::{Editor, InputEvent};

fn new_registry() -> TargetRegistry {
    TargetRegistry::new(Rc::new(EventBus::new()))
}

const CTRL: Modifiers = Modifiers {
    alt: false,
    ctrl: true,
    shift: false,
    mac_cmd: false,
    command: true,
};

const SHIFT: Modifiers = Modifiers {
    alt: false,
    ctrl: false,
    shift: true,
    mac_cmd: false,
    command: false,
};

#[test]
fn test_rectangle_hits_centers_inclusive() {
    let mut registry = new_registry();
    let inside = registry.create(100.0, 100.0).id();
    let on_edge = registry.create(200.0, 100.0).id();
    let outside = registry.create(300.0, 100.0).id();

    let mut tool = RectangleSelection::new();
    tool.begin(Pos2::new(0.0, 0.0));
    tool.update(Pos2::new(200.0, 200.0));

    let hits = tool.hits(registry.all());
    assert!(hits.contains(&inside));
    assert!(hits.contains(&on_edge));
    assert!(!hits.contains(&outside));
}

#[test]
fn test_rectangle_hits_ignore_radius_overlap() {
    let mut registry = new_registry();
    // the circle overlaps the box but its center is outside; not a hit
    let id = registry.create(230.0, 100.0).id();

    let mut tool = RectangleSelection::new();
    tool.begin(Pos2::new(0.0, 0.0));
    tool.update(Pos2::new(200.0, 200.0));
    assert!(!tool.hits(registry.all()).contains(&id));
}

#[test]
fn test_rectangle_hit_set_is_corner_order_independent() {
    let mut registry = new_registry();
    registry.create(20.0, 20.0);
    registry.create(40.0, 40.0);
    registry.create(300.0, 300.0);

    let mut forward = RectangleSelection::new();
    forward.begin(Pos2::new(10.0, 10.0));
    forward.update(Pos2::new(50.0, 50.0));

    let mut backward = RectangleSelection::new();
    backward.begin(Pos2::new(50.0, 50.0));
    backward.update(Pos2::new(10.0, 10.0));

    assert_eq!(forward.hits(registry.all()), backward.hits(registry.all()));
    assert_eq!(forward.hits(registry.all()).len(), 2);
}

#[test]
fn test_lasso_hits_use_center_point_only() {
    let mut registry = new_registry();
    let caught = registry.create(50.0, 50.0).id();
    // overlaps the loop with its rim, but the center stays outside
    let missed = registry.create(140.0, 50.0).id();

    let mut tool = LassoSelection::new();
    tool.begin(Pos2::new(0.0, 0.0));
    for point in [(100.0, 0.0), (100.0, 100.0), (0.0, 100.0)] {
        tool.extend(Pos2::new(point.0, point.1));
    }
    tool.close();

    let hits = tool.hits(registry.all());
    assert!(hits.contains(&caught));
    assert!(!hits.contains(&missed));
}

#[test]
fn test_fresh_tools_hit_nothing() {
    let mut registry = new_registry();
    registry.create(0.0, 0.0);

    assert!(RectangleSelection::new().hits(registry.all()).is_empty());
    assert!(LassoSelection::new().hits(registry.all()).is_empty());
    assert!(RectangleSelection::new().bounds().is_none());
}

#[test]
fn test_editor_drag_direction_does_not_change_selection() {
    // the same box dragged from opposite corners selects the same set
    let run = |from: (f32, f32), to: (f32, f32)| -> usize {
        let mut editor = Editor::new();
        for (x, y) in [(60.0, 60.0), (120.0, 120.0), (400.0, 400.0)] {
            editor.handle_input(InputEvent::PointerDown {
                pos: Pos2::new(x, y),
                modifiers: SHIFT,
            });
            editor.handle_input(InputEvent::PointerUp {
                pos: Pos2::new(x, y),
                modifiers: SHIFT,
            });
        }
        editor.handle_input(InputEvent::PointerDown {
            pos: Pos2::new(from.0, from.1),
            modifiers: CTRL,
        });
        editor.handle_input(InputEvent::PointerMove {
            pos: Pos2::new(to.0, to.1),
            modifiers: CTRL,
        });
        editor.handle_input(InputEvent::PointerUp {
            pos: Pos2::new(to.0, to.1),
            modifiers: CTRL,
        });
        editor.selection().len()
    };

    // a straight two-point lasso encloses nothing, so the rectangle wins
    // both ways with the two targets inside the span
    assert_eq!(run((10.0, 10.0), (200.0, 200.0)), 2);
    assert_eq!(run((200.0, 200.0), (10.0, 10.0)), 2);
}
