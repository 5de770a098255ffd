//! SMP Market storefront - Leptos frontend
//!
//! Top-level shell: restores the session on mount, gates everything behind
//! the login form, and switches the active view.

use leptos::prelude::*;

use crate::components::{Hero, Navbar, SiteFooter};
use crate::pages::{BuyMinecraftPage, LoginForm, MarketPage, PaymentForm, SellForm};
use crate::state::session::{provide_session_context, SessionState};
use crate::state::view::{provide_view_context, ActiveView};

#[component]
pub fn App() -> impl IntoView {
    let session = provide_session_context();
    let views = provide_view_context();

    // Restore the session from the local mirror once the app is mounted.
    Effect::new(move || {
        session.restore();
    });

    view! {
        {move || match session.state.get() {
            // Nothing renders until restoration resolves; it is synchronous,
            // so this never flashes.
            SessionState::Unknown | SessionState::CheckingAuth => {
                view! { <div class="boot-screen"></div> }.into_any()
            }
            SessionState::Unauthenticated => view! { <LoginForm/> }.into_any(),
            SessionState::Authenticated(_) => view! {
                <div class="app-shell">
                    <Navbar/>
                    <main class="main-grid">
                        <Hero/>
                        <div class="panel">
                            {move || match views.active() {
                                ActiveView::Market => view! { <MarketPage/> }.into_any(),
                                ActiveView::Buy => view! { <PaymentForm/> }.into_any(),
                                ActiveView::Sell => view! { <SellForm/> }.into_any(),
                                ActiveView::Minecraft => view! { <BuyMinecraftPage/> }.into_any(),
                            }}
                        </div>
                    </main>
                    <SiteFooter/>
                </div>
            }.into_any(),
        }}
    }
}
