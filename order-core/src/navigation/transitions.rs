use std::fmt;

use serde::{Deserialize, Serialize};

use super::NavigationError;
use crate::{ProductLine, Screen};

/// Operator intent that moves the workflow forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    HasRecord,
    NoRecord,
    InsertOrder,
    PickLine(ProductLine),
    Finalize,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::HasRecord => "Has a record",
            Action::NoRecord => "No record",
            Action::InsertOrder => "Insert into order",
            Action::PickLine(ProductLine::LineA) => "Line A",
            Action::PickLine(ProductLine::LineB) => "Line B",
            Action::Finalize => "Finalize",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a resolved action leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub target: Screen,
    /// Product line to record on arrival; `None` leaves the current choice.
    pub line: Option<ProductLine>,
}

/// Destination of a table row. `Finalize` depends on the selected line, so
/// it cannot be a plain screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Screen(Screen),
    LineDetail,
}

/// Every forward transition the guide allows, in display order per screen.
pub const TRANSITIONS: &[(Screen, Action, Destination)] = &[
    (Screen::Home, Action::HasRecord, Destination::Screen(Screen::Lookup)),
    (Screen::Home, Action::NoRecord, Destination::Screen(Screen::RegisterNewCustomer)),
    (Screen::Lookup, Action::InsertOrder, Destination::Screen(Screen::InsertExistingOrder)),
    (
        Screen::InsertExistingOrder,
        Action::PickLine(ProductLine::LineA),
        Destination::Screen(Screen::PaymentMethodReview),
    ),
    (
        Screen::InsertExistingOrder,
        Action::PickLine(ProductLine::LineB),
        Destination::Screen(Screen::PaymentMethodReview),
    ),
    (
        Screen::InsertNewOrder,
        Action::PickLine(ProductLine::LineA),
        Destination::Screen(Screen::PaymentMethodReview),
    ),
    (
        Screen::InsertNewOrder,
        Action::PickLine(ProductLine::LineB),
        Destination::Screen(Screen::PaymentMethodReview),
    ),
    (
        Screen::RegisterNewCustomer,
        Action::InsertOrder,
        Destination::Screen(Screen::InsertNewOrder),
    ),
    (Screen::PaymentMethodReview, Action::Finalize, Destination::LineDetail),
];

/// Actions offered on `screen`, in table order.
pub fn available_actions(screen: Screen) -> Vec<Action> {
    TRANSITIONS
        .iter()
        .filter(|(from, _, _)| *from == screen)
        .map(|(_, action, _)| *action)
        .collect()
}

/// Look up where `action` leads from `from`.
///
/// `selected_line` is only consulted for [`Action::Finalize`].
pub fn resolve(
    from: Screen,
    action: Action,
    selected_line: Option<ProductLine>,
) -> Result<Transition, NavigationError> {
    let (_, _, destination) = TRANSITIONS
        .iter()
        .find(|(f, a, _)| *f == from && *a == action)
        .ok_or(NavigationError::NotAvailable { from, action })?;

    let target = match destination {
        Destination::Screen(screen) => *screen,
        Destination::LineDetail => selected_line
            .ok_or(NavigationError::NoLineSelected)?
            .detail_screen(),
    };

    let line = match action {
        Action::PickLine(line) => Some(line),
        _ => None,
    };

    Ok(Transition { target, line })
}
