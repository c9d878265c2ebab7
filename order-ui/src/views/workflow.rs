//! Instruction screens: everything except payment review.

use cursive::Cursive;
use cursive::view::Resizable;
use cursive::views::{DummyView, TextView};
use order_core::Screen;
use order_core::navigation::available_actions;

use super::status_bar::{build_status_bar, screen_hints};
use super::{action_menu, header_state, progress_header, screen_dialog};
use crate::content::{render_body, screen_content};

pub fn show_workflow_screen(
    siv: &mut Cursive,
    screen: Screen,
) {
    let (progress, can_go_back) = header_state(siv, screen);

    let mut layout = progress_header(progress);
    layout.add_child(TextView::new(render_body(&screen_content(screen))));

    let actions = available_actions(screen);
    if !actions.is_empty() {
        layout.add_child(DummyView.fixed_height(1));
        layout.add_child(action_menu(actions));
    }

    layout.add_child(DummyView.fixed_height(1));
    layout.add_child(build_status_bar(&screen_hints(can_go_back)));

    siv.add_layer(screen_dialog(screen.title(), layout, can_go_back));
}
