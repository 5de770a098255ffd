//! Checkout view: payment confirmation for marketplace purchases.
//!
//! Reached either from a Market card (code and amount locked to the selected
//! listing) or directly, with every field editable.

use chrono::Local;
use leptos::prelude::*;

use shared::dto::Submission;
use shared::utils::{format_bdt, format_order_time};

use crate::services::payments::submit_payment;
use crate::state::view::use_view_context;
use crate::utils::constants::{ADMIN_NUMBER, MIN_AMOUNT};
use crate::utils::validation::validate_market_payment;

#[derive(Clone)]
struct OrderSummary {
    product_no: String,
    username: String,
    amount: u32,
    time: String,
}

#[component]
pub fn PaymentForm() -> impl IntoView {
    let views = use_view_context();

    // Checkout payload is read once at mount; the page remounts whenever the
    // view switches, so a cleared payload yields a clean form.
    let intent = views.checkout();
    let locked = intent.is_some();

    let (username, set_username) = signal(String::new());
    let (product_no, set_product_no) = signal(
        intent
            .as_ref()
            .map(|intent| intent.code.clone())
            .unwrap_or_default(),
    );
    let (amount, set_amount) = signal(
        intent
            .as_ref()
            .map(|intent| intent.price.to_string())
            .unwrap_or_default(),
    );
    let (trx, set_trx) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let (summary, set_summary) = signal(None::<OrderSummary>);
    let (copied, set_copied) = signal(false);

    let on_copy = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(ADMIN_NUMBER);
        }
        set_copied.set(true);
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2_000).await;
            set_copied.set(false);
        });
    };

    let on_submit = move |_| {
        let parsed_amount = amount.get_untracked().trim().parse::<u32>().ok();
        let check = validate_market_payment(
            &username.get_untracked(),
            &product_no.get_untracked(),
            parsed_amount,
            &trx.get_untracked(),
        );
        if !check.is_valid {
            set_error.set(check.error);
            return;
        }

        set_error.set(None);
        set_loading.set(true);

        let username_val = username.get_untracked();
        let product_val = product_no.get_untracked();
        let trx_val = trx.get_untracked();
        let amount_val = parsed_amount.unwrap_or_default();

        leptos::task::spawn_local(async move {
            match submit_payment(Submission::MarketPayment {
                username: username_val.clone(),
                amount: amount_val,
                trx: trx_val,
                product_no: product_val.clone(),
            })
            .await
            {
                Ok(()) => {
                    set_summary.set(Some(OrderSummary {
                        product_no: product_val,
                        username: username_val,
                        amount: amount_val,
                        time: format_order_time(Local::now()),
                    }));
                    set_username.set(String::new());
                    set_trx.set(String::new());
                }
                Err(err) => {
                    log::error!("payment submission failed: {err}");
                    set_error.set(Some(
                        "Could not submit your payment. Please try again.".to_string(),
                    ));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        {move || match summary.get() {
            Some(order) => view! {
                <div class="form-card success-card">
                    <h3 class="success-title">"Order Received!"</h3>
                    <p class="success-sub">
                        "Your order has been submitted successfully. A moderator will verify it \
                         shortly. After verification, you will receive your product."
                    </p>
                    <div class="summary-card">
                        <div class="summary-row">
                            <span>"Product No"</span>
                            <span class="summary-value">{order.product_no}</span>
                        </div>
                        <div class="summary-row">
                            <span>"Player"</span>
                            <span class="summary-value">{order.username}</span>
                        </div>
                        <div class="summary-row">
                            <span>"Order Time"</span>
                            <span class="summary-value">{order.time}</span>
                        </div>
                        <div class="summary-row summary-total">
                            <span>"Total Price"</span>
                            <span class="summary-value">{format_bdt(order.amount)}</span>
                        </div>
                    </div>
                    <button class="btn btn-block" on:click=move |_| set_summary.set(None)>
                        "Confirm and Finish"
                    </button>
                </div>
            }.into_any(),
            None => view! {
                <div class="form-card">
                    {locked.then(|| {
                        view! {
                            <button class="card-close" title="Back to Market"
                                on:click=move |_| views.cancel_checkout()>
                                "Cancel"
                            </button>
                        }
                    })}

                    <h2>{if locked { "Market Checkout" } else { "Submit Payment" }}</h2>
                    <p class="form-sub">"Send the money first, then fill in the details below"</p>

                    <div class="pay-to-panel">
                        <div>
                            <p class="pay-to-label">"Pay to (Personal)"</p>
                            <p class="pay-to-number">{ADMIN_NUMBER}</p>
                            <p class="pay-to-hint">"Send Money Only"</p>
                        </div>
                        <button class="copy-btn" type="button" on:click=on_copy>
                            {move || if copied.get() { "Copied" } else { "Copy" }}
                        </button>
                    </div>

                    <div class="field-group">
                        <label class="field-label">"Minecraft Username"</label>
                        <input class="field-input" type="text" placeholder="e.g. ArifGamer_HD"
                            prop:value=username
                            on:input=move |ev| set_username.set(event_target_value(&ev)) />
                    </div>
                    <div class="field-group">
                        <label class="field-label">"Product No"</label>
                        <input class="field-input" type="text" placeholder="Enter Product or Package No"
                            prop:value=product_no
                            readonly=locked
                            class=("field-locked", locked)
                            on:input=move |ev| set_product_no.set(event_target_value(&ev)) />
                    </div>
                    <div class="field-group">
                        <label class="field-label">"Amount (BDT)"</label>
                        <input class="field-input" type="number"
                            placeholder=format!("Min {} BDT", MIN_AMOUNT)
                            prop:value=amount
                            readonly=locked
                            class=("field-locked", locked)
                            on:input=move |ev| set_amount.set(event_target_value(&ev)) />
                    </div>
                    <div class="field-group">
                        <label class="field-label">"Transaction ID"</label>
                        <input class="field-input" type="text" placeholder="TrxID from the Send Money receipt"
                            prop:value=trx
                            on:input=move |ev| set_trx.set(event_target_value(&ev)) />
                    </div>

                    {move || error.get().map(|msg| view! { <div class="error-banner">{msg}</div> })}

                    <button class="btn btn-block" disabled=move || loading.get() on:click=on_submit>
                        {move || if loading.get() { "Submitting..." } else { "Confirm Purchase" }}
                    </button>
                </div>
            }.into_any(),
        }}
    }
}
