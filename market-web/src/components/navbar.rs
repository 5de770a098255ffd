//! Navigation Bar Component

use leptos::prelude::*;

use crate::state::session::use_session_context;
use crate::state::view::{use_view_context, ActiveView};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session_context();
    let views = use_view_context();

    let nav_class = move |view: ActiveView| {
        if views.active() == view {
            "nav-btn nav-btn-active"
        } else {
            "nav-btn"
        }
    };

    view! {
        <nav class="navbar">
            <div class="nav-inner">
                <span class="nav-brand">
                    <span class="brand-accent">"SMP"</span>" Market"
                </span>
                <div class="nav-links">
                    <button class=move || nav_class(ActiveView::Market)
                        on:click=move |_| views.show(ActiveView::Market)>
                        "Market"
                    </button>
                    <button class=move || nav_class(ActiveView::Minecraft)
                        on:click=move |_| views.show(ActiveView::Minecraft)>
                        "Buy Minecraft"
                    </button>
                    <button class=move || nav_class(ActiveView::Sell)
                        on:click=move |_| views.show(ActiveView::Sell)>
                        "Sell"
                    </button>
                    <div class="nav-user">
                        {move || {
                            session
                                .user()
                                .map(|user| {
                                    view! {
                                        <span class="nav-ign">{user.ign}</span>
                                        <span class="nav-email">{user.email}</span>
                                    }
                                })
                        }}
                        <button class="nav-logout" title="Logout"
                            on:click=move |_| session.logout()>
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
