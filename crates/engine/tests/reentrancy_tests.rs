//! Handlers that mutate the registry while it is dispatching.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{Harness, ctrl, global, plain};
use shortcut_engine::testing::CallCounter;
use shortcut_engine::{FrameContext, KeyCode};

#[test]
fn test_handler_can_rebind_itself() {
    let mut h = Harness::with_actions([global("file.save", ctrl('s'))]);
    let save = CallCounter::new();
    let count = save.handler();
    h.registry.bind_handler("file.save", move |registry| {
        registry.set_binding("file.save", Some(ctrl('w')));
        count(registry);
    });
    let ctx = FrameContext::new();

    h.press(ctrl('s'));
    assert!(h.registry.process_shortcuts(&ctx));
    assert_eq!(h.registry.get_binding("file.save"), Some(ctrl('w')));

    h.next_frame();
    h.keys.release(KeyCode::Char('S'));
    h.press(ctrl('s'));
    assert!(!h.registry.process_shortcuts(&ctx));

    h.next_frame();
    h.press(ctrl('w'));
    assert!(h.registry.process_shortcuts(&ctx));
    assert_eq!(save.count(), 2);
}

#[test]
fn test_handler_can_register_new_action() {
    let mut h = Harness::with_actions([global("plugin.load", plain('p'))]);
    h.registry.bind_handler("plugin.load", |registry| {
        registry.register(global("plugin.run", plain('r')));
    });
    let ctx = FrameContext::new();

    h.press(plain('p'));
    assert!(h.registry.process_shortcuts(&ctx));
    assert!(h.registry.action("plugin.run").is_some());

    let run = CallCounter::new();
    assert!(h.registry.bind_handler("plugin.run", run.handler()));

    h.next_frame();
    h.press(plain('r'));
    assert!(h.registry.process_shortcuts(&ctx));
    assert_eq!(run.count(), 1);
}

#[test]
fn test_handler_unregistering_itself_is_safe() {
    let mut h = Harness::with_actions([global("once", plain('o'))]);
    let fired = Rc::new(Cell::new(0));
    let seen = Rc::clone(&fired);
    h.registry.bind_handler("once", move |registry| {
        seen.set(seen.get() + 1);
        registry.unregister("once");
    });
    let ctx = FrameContext::new();

    h.press(plain('o'));
    assert!(h.registry.process_shortcuts(&ctx));
    assert!(h.registry.action("once").is_none());

    h.next_frame();
    h.press(plain('o'));
    assert!(!h.registry.process_shortcuts(&ctx));
    assert_eq!(fired.get(), 1);
}

#[test]
fn test_nested_dispatch_in_same_frame_is_ignored() {
    let mut h = Harness::with_actions([
        global("file.save", ctrl('s')),
        global("edit.undo", ctrl('z')),
    ]);
    let nested_result = Rc::new(Cell::new(None));
    let record = Rc::clone(&nested_result);
    h.registry.bind_handler("file.save", move |registry| {
        record.set(Some(registry.process_shortcuts(&FrameContext::new())));
    });
    let undo = CallCounter::new();
    h.registry.bind_handler("edit.undo", undo.handler());

    h.press(ctrl('s'));
    h.keys.press(KeyCode::Char('Z'));
    assert!(h.registry.process_shortcuts(&FrameContext::new()));
    assert_eq!(nested_result.get(), Some(false));
    assert_eq!(undo.count(), 0);
}

#[test]
fn test_handler_rebinding_other_action_applies_next_frame() {
    let mut h = Harness::with_actions([
        global("file.save", ctrl('s')),
        global("edit.undo", ctrl('z')),
    ]);
    h.registry.bind_handler("file.save", |registry| {
        registry.set_binding("edit.undo", Some(ctrl('y')));
    });
    let undo = CallCounter::new();
    h.registry.bind_handler("edit.undo", undo.handler());
    let ctx = FrameContext::new();

    h.press(ctrl('s'));
    assert!(h.registry.process_shortcuts(&ctx));

    h.next_frame();
    h.keys.release(KeyCode::Char('S'));
    h.press(ctrl('z'));
    assert!(!h.registry.process_shortcuts(&ctx));

    h.next_frame();
    h.press(ctrl('y'));
    assert!(h.registry.process_shortcuts(&ctx));
    assert_eq!(undo.count(), 1);
}
