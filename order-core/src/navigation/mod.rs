//! Workflow navigation for the counter guide.
//!
//! The screen graph is a fixed table of `(from, action) -> to` rows; the
//! [`NavigationController`] owns the only mutable copy of "where the
//! operator is" and routes every change through `go_to`, `go_back` and
//! `reset`.
//!
//! ```text
//!   Home ──has record──► Lookup ──insert order──► InsertExistingOrder ─┐
//!    │                                                                 │ pick line
//!    └──no record──► RegisterNewCustomer ──insert order──► InsertNewOrder ─┤
//!                                                                      ▼
//!                        LineADetail ◄──finalize (A)── PaymentMethodReview
//!                        LineBDetail ◄──finalize (B)──┘
//! ```

mod controller;
mod transitions;

use thiserror::Error;

use crate::Screen;

pub use controller::{NavigationController, NavigationState};
pub use transitions::{Action, Destination, TRANSITIONS, Transition, available_actions, resolve};

/// Reasons a requested action cannot be carried out.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// The action is not offered on the given screen.
    #[error("action '{action}' is not available on screen {from:?}")]
    NotAvailable { from: Screen, action: Action },

    /// Finalizing needs a product line and none has been picked.
    #[error("cannot finalize: no product line selected")]
    NoLineSelected,
}
