// Host-side tests for the keyboard shortcut table.
// The native crate is a binary, so the pure key module is included directly.

#![allow(dead_code)]
mod keys {
    include!("../crates/tsoview-native/src/keys.rs");
}

use keys::*;
use tso_config::{MorphRatio, ProjectionMode, RenderMode};

#[test]
fn digits_select_render_modes_in_order() {
    for (i, mode) in RenderMode::ALL.into_iter().enumerate() {
        let key = (i + 1).to_string();
        assert_eq!(render_mode_for_digit(&key), Some(mode));
        assert_eq!(command_for_key(&key), Some(Command::Render(mode)));
    }
    assert_eq!(render_mode_for_digit("0"), None);
    assert_eq!(render_mode_for_digit("8"), None);
}

#[test]
fn letters_ignore_case() {
    for (lower, upper) in [("p", "P"), ("o", "O"), ("r", "R"), ("s", "S"), ("f", "F"), ("n", "N")] {
        assert!(command_for_key(lower).is_some(), "{lower}");
        assert_eq!(command_for_key(lower), command_for_key(upper));
    }
}

#[test]
fn named_keys() {
    assert_eq!(
        command_for_key("o"),
        Some(Command::Projection(ProjectionMode::Ortho))
    );
    assert_eq!(command_for_key("ArrowUp"), Some(Command::Fovy(1)));
    assert_eq!(command_for_key("ArrowDown"), Some(Command::Fovy(-1)));
    assert_eq!(command_for_key("ArrowLeft"), Some(Command::Roll(-1)));
    assert_eq!(command_for_key("]"), Some(Command::Morph(MorphRatio::Leg, 1)));
    assert_eq!(command_for_key("F12"), Some(Command::Capture));
    assert_eq!(command_for_key("Tab"), Some(Command::ShowConfigPanel));
    assert_eq!(command_for_key("Escape"), Some(Command::Quit));
}

#[test]
fn unmapped_keys() {
    for key in ["", "x", "Enter", "F11", "ArrowUpp"] {
        assert_eq!(command_for_key(key), None, "{key:?}");
    }
}
