//! Presenter session held in cursive's user data.
//!
//! The navigation controller is the single source of truth for the current
//! screen; views read it and send intents through the methods here.

use order_core::{Action, NavigationController, NavigationError, PaymentInput, Screen};
use tracing::info;

#[derive(Debug, Default)]
pub struct GuideSession {
    nav: NavigationController,
    /// Present only while the payment screen is showing.
    payment: Option<PaymentInput>,
}

impl GuideSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nav(&self) -> &NavigationController {
        &self.nav
    }

    pub fn payment(&self) -> Option<&PaymentInput> {
        self.payment.as_ref()
    }

    pub fn payment_mut(&mut self) -> Option<&mut PaymentInput> {
        self.payment.as_mut()
    }

    pub fn perform(
        &mut self,
        action: Action,
    ) -> Result<Screen, NavigationError> {
        let screen = self.nav.perform(action)?;
        self.sync_payment();
        Ok(screen)
    }

    pub fn go_back(&mut self) -> Option<Screen> {
        let screen = self.nav.go_back()?;
        self.sync_payment();
        Some(screen)
    }

    pub fn restart(&mut self) {
        info!("workflow restarted");
        self.nav.reset();
        self.sync_payment();
    }

    /// Payment input is created blank on arriving at the payment screen and
    /// dropped on leaving it.
    fn sync_payment(&mut self) {
        if self.nav.current() == Screen::PaymentMethodReview {
            self.payment = Some(PaymentInput::default());
        } else {
            self.payment = None;
        }
    }
}
