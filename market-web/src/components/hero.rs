//! Hero section: per-view badge, headline and description.

use leptos::prelude::*;

use crate::state::view::{use_view_context, ActiveView};

pub struct HeroCopy {
    pub badge: &'static str,
    pub title_top: &'static str,
    pub title_accent: &'static str,
    pub desc: &'static str,
    /// CSS accent class driving badge/headline color.
    pub accent: &'static str,
}

/// Pure mapping from the active view to its hero copy.
pub fn hero_copy(view: ActiveView) -> HeroCopy {
    match view {
        ActiveView::Market => HeroCopy {
            badge: "Live Marketplace",
            title_top: "Explore the",
            title_accent: "Marketplace",
            desc: "Browse land listings from other players and buy directly \
                   from them. Every listing carries a unique code you use at \
                   checkout.",
            accent: "accent-market",
        },
        ActiveView::Buy => HeroCopy {
            badge: "Checkout",
            title_top: "Finalize Your",
            title_accent: "Purchase",
            desc: "Complete the payment for the land you picked. The property \
                   is transferred to your name after a moderator verifies the \
                   transaction.",
            accent: "accent-buy",
        },
        ActiveView::Sell => HeroCopy {
            badge: "Sell Your Land",
            title_top: "List Your",
            title_accent: "Property",
            desc: "Create a listing to sell your land to other players. Enter \
                   the coordinates and your price to generate a unique listing \
                   code.",
            accent: "accent-sell",
        },
        ActiveView::Minecraft => HeroCopy {
            badge: "Premium Account",
            title_top: "Get Minecraft",
            title_accent: "For 50 BDT",
            desc: "Order an original Minecraft Bedrock account for 50 BDT. \
                   Full access, delivered straight to your Gmail once the \
                   order is confirmed.",
            accent: "accent-minecraft",
        },
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let views = use_view_context();

    view! {
        {move || {
            let copy = hero_copy(views.active());
            view! {
                <div class="hero">
                    <div class=format!("hero-badge {}", copy.accent)>
                        <span class="badge-dot"></span>
                        {copy.badge}
                    </div>
                    <h2 class="hero-title">
                        {copy.title_top}
                        <br/>
                        <span class=copy.accent>{copy.title_accent}</span>
                    </h2>
                    <p class="hero-desc">{copy.desc}</p>
                    <div class="hero-actions">
                        <button class="action-btn" on:click=move |_| views.show(ActiveView::Market)>
                            "Market"
                        </button>
                        <button class="action-btn" on:click=move |_| views.show(ActiveView::Minecraft)>
                            "Buy Minecraft"
                        </button>
                        <button class="action-btn" on:click=move |_| views.show(ActiveView::Sell)>
                            "Sell Land"
                        </button>
                    </div>
                </div>
            }
        }}
    }
}
