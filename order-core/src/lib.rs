pub mod calculations;
pub mod models;
pub mod navigation;

pub use calculations::{PaymentInput, compute_total, format_brl, parse_amount};
pub use models::*;
pub use navigation::{Action, NavigationController, NavigationError, NavigationState, Transition};
