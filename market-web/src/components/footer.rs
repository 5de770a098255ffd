//! Site footer

use leptos::prelude::*;

use crate::state::view::{use_view_context, ActiveView};

#[component]
pub fn SiteFooter() -> impl IntoView {
    let views = use_view_context();

    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <p class="footer-blurb">
                    "The #1 Survival Multiplayer experience in the region. Join us for an adventure like no other."
                </p>
                <ul class="footer-nav">
                    <li>
                        <button on:click=move |_| views.show(ActiveView::Market)>"Marketplace"</button>
                    </li>
                    <li>
                        <button on:click=move |_| views.show(ActiveView::Minecraft)>"Buy Minecraft"</button>
                    </li>
                    <li>
                        <button on:click=move |_| views.show(ActiveView::Sell)>"Sell Land"</button>
                    </li>
                </ul>
            </div>
            <p class="footer-fineprint">
                "SMP Market. Not affiliated with Mojang AB or Microsoft."
            </p>
        </footer>
    }
}
