//! Cursive views for the counter guide.
//!
//! Exactly one screen layer is on the stack at a time. Views never touch
//! navigation state directly: they call [`navigate`], [`go_back`] or
//! [`restart`], which go through the [`GuideSession`] and then redraw.
//!
//! - `workflow` - every instruction-only screen, driven by the transition table
//! - `payment` - payment method review with the live total
//! - `progress` - five-step progress indicator
//! - `status_bar` - key hints

mod payment;
mod progress;
mod status_bar;
mod workflow;

use cursive::Cursive;
use cursive::align::HAlign;
use cursive::event::{Event, Key};
use cursive::view::Resizable;
use cursive::views::{Dialog, DummyView, LinearLayout, SelectView, TextView};
use order_core::{Action, Progress, Screen};
use tracing::{error, info, warn};

use crate::session::GuideSession;

pub use payment::format_result;
pub use progress::{progress_line, step_caption};
pub use status_bar::{KeyHint, build_status_bar, hint_text, screen_hints};

/// Esc goes back, Ctrl-R restarts, Ctrl-Q quits, from every screen.
pub fn install_global_keys(siv: &mut Cursive) {
    siv.add_global_callback(Event::Key(Key::Esc), go_back);
    siv.add_global_callback(Event::CtrlChar('r'), restart);
    siv.add_global_callback(Event::CtrlChar('q'), |s| s.quit());
}

/// Draws the session's current screen on top of the stack.
pub fn show_current_screen(siv: &mut Cursive) {
    let Some(screen) = siv.with_user_data(|s: &mut GuideSession| s.nav().current()) else {
        error!("no guide session installed");
        return;
    };

    match screen {
        Screen::PaymentMethodReview => payment::show_payment_review(siv),
        other => workflow::show_workflow_screen(siv, other),
    }
}

fn redraw(siv: &mut Cursive) {
    while siv.pop_layer().is_some() {}
    show_current_screen(siv);
}

pub(crate) fn navigate(
    siv: &mut Cursive,
    action: Action,
) {
    match siv.with_user_data(|s: &mut GuideSession| s.perform(action)) {
        Some(Ok(screen)) => {
            info!(%action, ?screen, "moved");
            redraw(siv);
        }
        Some(Err(e)) => warn!(%action, "ignored: {e}"),
        None => error!("no guide session installed"),
    }
}

pub(crate) fn go_back(siv: &mut Cursive) {
    let moved = siv
        .with_user_data(|s: &mut GuideSession| s.go_back())
        .flatten();
    if moved.is_some() {
        redraw(siv);
    }
}

pub(crate) fn restart(siv: &mut Cursive) {
    siv.with_user_data(|s: &mut GuideSession| s.restart());
    redraw(siv);
}

/// What every screen header needs from the session.
fn header_state(
    siv: &mut Cursive,
    screen: Screen,
) -> (Progress, bool) {
    siv.with_user_data(|s: &mut GuideSession| (s.nav().progress(), s.nav().can_go_back()))
        .unwrap_or((Progress::for_screen(screen), false))
}

fn progress_header(progress: Progress) -> LinearLayout {
    LinearLayout::vertical()
        .child(
            TextView::new(progress_line(progress))
                .h_align(HAlign::Center)
                .full_width(),
        )
        .child(TextView::new(step_caption(progress)).h_align(HAlign::Center))
        .child(DummyView.fixed_height(1))
}

fn action_menu(actions: Vec<Action>) -> SelectView<Action> {
    SelectView::new()
        .with_all(actions.into_iter().map(|a| (a.label(), a)))
        .on_submit(|s, action: &Action| navigate(s, *action))
}

/// Wraps a screen body with its title and Back/Restart buttons. Back is left
/// out when there is no history.
fn screen_dialog(
    title: &str,
    body: LinearLayout,
    can_go_back: bool,
) -> Dialog {
    let mut dialog = Dialog::around(body)
        .title(title)
        .padding_lrtb(1, 1, 0, 0);
    if can_go_back {
        dialog = dialog.button("Back", go_back);
    }
    dialog.button("Restart", restart)
}
