use serde::{Deserialize, Serialize};

/// Every view the counter guide can display.
///
/// The set is closed: anything the presenter can show is one of these, and
/// the transition table in [`crate::navigation`] is the only way between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Home,
    Lookup,
    InsertExistingOrder,
    InsertNewOrder,
    PaymentMethodReview,
    LineADetail,
    LineBDetail,
    RegisterNewCustomer,
}

impl Screen {
    pub const ALL: [Screen; 8] = [
        Screen::Home,
        Screen::Lookup,
        Screen::InsertExistingOrder,
        Screen::InsertNewOrder,
        Screen::PaymentMethodReview,
        Screen::LineADetail,
        Screen::LineBDetail,
        Screen::RegisterNewCustomer,
    ];

    /// Position of this screen in the five-step progress indicator.
    ///
    /// This is a fixed table, not the history depth: alternative branches at
    /// the same depth (lookup vs. registration) share a step.
    pub fn step(&self) -> u8 {
        match self {
            Screen::Home => 1,
            Screen::Lookup | Screen::RegisterNewCustomer => 2,
            Screen::InsertExistingOrder | Screen::InsertNewOrder => 3,
            Screen::PaymentMethodReview => 4,
            Screen::LineADetail | Screen::LineBDetail => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Customer Record",
            Screen::Lookup => "Look Up Customer",
            Screen::InsertExistingOrder => "Insert Products",
            Screen::InsertNewOrder => "Insert Products (New Customer)",
            Screen::PaymentMethodReview => "Payment Method",
            Screen::LineADetail => "Line A Pricing",
            Screen::LineBDetail => "Line B Pricing",
            Screen::RegisterNewCustomer => "Register New Customer",
        }
    }

    /// Terminal screens carry no forward actions.
    pub fn is_final(&self) -> bool {
        matches!(self, Screen::LineADetail | Screen::LineBDetail)
    }
}
