//! Active-view state machine.
//!
//! Four screens, initial state Market, no terminal state. Only the Market →
//! Buy transition carries data (the selected listing's code and price);
//! every other transition clears any payload. The transition core is a plain
//! struct so the semantics are testable without a reactive runtime.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Market,
    Buy,
    Sell,
    Minecraft,
}

/// Payload the Market view hands to checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutIntent {
    pub code: String,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    active: ActiveView,
    checkout: Option<CheckoutIntent>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            active: ActiveView::Market,
            checkout: None,
        }
    }

    pub fn active(&self) -> ActiveView {
        self.active
    }

    pub fn checkout(&self) -> Option<&CheckoutIntent> {
        self.checkout.as_ref()
    }

    /// Direct, unconditional transition; drops any checkout payload.
    pub fn show(&mut self, view: ActiveView) {
        self.active = view;
        self.checkout = None;
    }

    /// Market → Buy with the selected listing.
    pub fn open_checkout(&mut self, intent: CheckoutIntent) {
        self.checkout = Some(intent);
        self.active = ActiveView::Buy;
    }

    /// Buy → Market, payload discarded.
    pub fn cancel_checkout(&mut self) {
        self.checkout = None;
        self.active = ActiveView::Market;
    }
}

/// Global view context
#[derive(Clone, Copy)]
pub struct ViewContext {
    state: RwSignal<ViewState>,
}

impl ViewContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ViewState::new()),
        }
    }

    pub fn active(&self) -> ActiveView {
        self.state.with(|state| state.active())
    }

    pub fn checkout(&self) -> Option<CheckoutIntent> {
        self.state.with(|state| state.checkout().cloned())
    }

    pub fn show(&self, view: ActiveView) {
        self.state.update(|state| state.show(view));
    }

    pub fn open_checkout(&self, code: String, price: u32) {
        self.state
            .update(|state| state.open_checkout(CheckoutIntent { code, price }));
    }

    pub fn cancel_checkout(&self) {
        self.state.update(|state| state.cancel_checkout());
    }
}

pub fn provide_view_context() -> ViewContext {
    let context = ViewContext::new();
    provide_context(context);
    context
}

pub fn use_view_context() -> ViewContext {
    expect_context::<ViewContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_market_without_payload() {
        let state = ViewState::new();
        assert_eq!(state.active(), ActiveView::Market);
        assert_eq!(state.checkout(), None);
    }

    #[test]
    fn test_buy_carries_the_selected_listing() {
        let mut state = ViewState::new();
        state.open_checkout(CheckoutIntent {
            code: "#A1B2C3".to_string(),
            price: 250,
        });
        assert_eq!(state.active(), ActiveView::Buy);
        let intent = state.checkout().unwrap();
        assert_eq!(intent.code, "#A1B2C3");
        assert_eq!(intent.price, 250);
    }

    #[test]
    fn test_cancel_returns_to_market_and_clears_payload() {
        let mut state = ViewState::new();
        state.open_checkout(CheckoutIntent {
            code: "#A1B2C3".to_string(),
            price: 250,
        });
        state.cancel_checkout();
        assert_eq!(state.active(), ActiveView::Market);
        assert_eq!(state.checkout(), None);

        // Re-entering Buy directly starts from a clean form.
        state.show(ActiveView::Buy);
        assert_eq!(state.checkout(), None);
    }

    #[test]
    fn test_other_transitions_drop_the_payload() {
        let mut state = ViewState::new();
        state.open_checkout(CheckoutIntent {
            code: "#A1B2C3".to_string(),
            price: 250,
        });
        state.show(ActiveView::Sell);
        assert_eq!(state.active(), ActiveView::Sell);
        assert_eq!(state.checkout(), None);

        state.show(ActiveView::Minecraft);
        state.show(ActiveView::Market);
        assert_eq!(state.checkout(), None);
    }
}
