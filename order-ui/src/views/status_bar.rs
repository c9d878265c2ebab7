//! Status bar component for displaying keyboard shortcuts.

use cursive::view::Resizable;
use cursive::views::{LinearLayout, TextView};

/// Keyboard shortcut hint for the status bar.
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Joins hints as `key: action │ key: action`.
pub fn hint_text(hints: &[KeyHint]) -> String {
    hints
        .iter()
        .map(|h| format!("{}: {}", h.key, h.action))
        .collect::<Vec<_>>()
        .join(" │ ")
}

pub fn build_status_bar(hints: &[KeyHint]) -> LinearLayout {
    LinearLayout::horizontal().child(TextView::new(hint_text(hints)).full_width())
}

/// Hints for a workflow screen. Back is only listed when there is
/// somewhere to go back to.
pub fn screen_hints(can_go_back: bool) -> Vec<KeyHint> {
    let mut list = vec![hints::TAB, hints::ENTER];
    if can_go_back {
        list.push(hints::ESC);
    }
    list.push(hints::CTRL_R);
    list.push(hints::CTRL_Q);
    list
}

pub mod hints {
    use super::KeyHint;

    pub const TAB: KeyHint = KeyHint::new("Tab", "Next");
    pub const ESC: KeyHint = KeyHint::new("Esc", "Back");
    pub const ENTER: KeyHint = KeyHint::new("Enter", "Select");
    pub const CTRL_R: KeyHint = KeyHint::new("C-r", "Restart");
    pub const CTRL_Q: KeyHint = KeyHint::new("C-q", "Quit");
}
