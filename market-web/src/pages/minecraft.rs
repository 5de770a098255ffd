//! Minecraft account order view: fixed-price premium account add-on.

use chrono::Local;
use leptos::prelude::*;

use shared::dto::payment::MINECRAFT_PRICE_BDT;
use shared::dto::Submission;
use shared::utils::{format_bdt, format_order_time};

use crate::services::payments::submit_payment;
use crate::utils::constants::ADMIN_NUMBER;
use crate::utils::validation::validate_minecraft_order;

#[derive(Clone)]
struct OrderSummary {
    ign: String,
    email: String,
    time: String,
}

#[component]
pub fn BuyMinecraftPage() -> impl IntoView {
    let (ign, set_ign) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (sender_number, set_sender_number) = signal(String::new());
    let (trx, set_trx) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let (summary, set_summary) = signal(None::<OrderSummary>);

    let on_submit = move |_| {
        let check = validate_minecraft_order(
            &ign.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &sender_number.get_untracked(),
            &trx.get_untracked(),
        );
        if !check.is_valid {
            set_error.set(check.error);
            return;
        }

        set_error.set(None);
        set_loading.set(true);

        let ign_val = ign.get_untracked();
        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let sender_val = sender_number.get_untracked();
        let trx_val = trx.get_untracked();

        leptos::task::spawn_local(async move {
            match submit_payment(Submission::MinecraftOrder {
                ign: ign_val.clone(),
                email: email_val.clone(),
                password: password_val,
                sender_number: sender_val,
                trx: trx_val,
            })
            .await
            {
                Ok(()) => {
                    set_summary.set(Some(OrderSummary {
                        ign: ign_val,
                        email: email_val,
                        time: format_order_time(Local::now()),
                    }));
                    set_password.set(String::new());
                    set_trx.set(String::new());
                }
                Err(err) => {
                    log::error!("minecraft order submission failed: {err}");
                    set_error.set(Some(
                        "Could not submit your order. Please try again.".to_string(),
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
                        "Your Minecraft Bedrock account will be sent to your Gmail after the \
                         order is confirmed."
                    </p>
                    <div class="summary-card">
                        <div class="summary-row">
                            <span>"Minecraft IGN"</span>
                            <span class="summary-value">{order.ign}</span>
                        </div>
                        <div class="summary-row">
                            <span>"Gmail"</span>
                            <span class="summary-value">{order.email}</span>
                        </div>
                        <div class="summary-row">
                            <span>"Order Time"</span>
                            <span class="summary-value">{order.time}</span>
                        </div>
                        <div class="summary-row summary-total">
                            <span>"Total Price"</span>
                            <span class="summary-value">{format_bdt(MINECRAFT_PRICE_BDT)}</span>
                        </div>
                    </div>
                    <button class="btn btn-block" on:click=move |_| set_summary.set(None)>
                        "Confirm and Finish"
                    </button>
                </div>
            }.into_any(),
            None => view! {
                <div class="form-card">
                    <h2>"Order Minecraft Bedrock"</h2>
                    <p class="form-sub">
                        {format!("Send {} to the number below, then place your order", format_bdt(MINECRAFT_PRICE_BDT))}
                    </p>

                    <div class="pay-to-panel">
                        <div>
                            <p class="pay-to-label">"Pay to (Personal)"</p>
                            <p class="pay-to-number">{ADMIN_NUMBER}</p>
                            <p class="pay-to-hint">"Send Money Only"</p>
                        </div>
                        <span class="tag tag-price">{format_bdt(MINECRAFT_PRICE_BDT)}</span>
                    </div>

                    <div class="field-group">
                        <label class="field-label">"Minecraft IGN"</label>
                        <input class="field-input" type="text" placeholder="Your In-game Name"
                            prop:value=ign
                            on:input=move |ev| set_ign.set(event_target_value(&ev)) />
                    </div>
                    <div class="field-group">
                        <label class="field-label">"Gmail Address"</label>
                        <input class="field-input" type="email" placeholder="example@gmail.com"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev)) />
                    </div>
                    <div class="field-group">
                        <label class="field-label">"Gmail Password"</label>
                        <input class="field-input" type="password" placeholder="••••••••"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev)) />
                    </div>
                    <div class="field-row">
                        <div class="field-group">
                            <label class="field-label">"Sender bKash No"</label>
                            <input class="field-input" type="text" placeholder="017XXXXXXXX"
                                prop:value=sender_number
                                on:input=move |ev| set_sender_number.set(event_target_value(&ev)) />
                        </div>
                        <div class="field-group">
                            <label class="field-label">"Transaction ID"</label>
                            <input class="field-input" type="text" placeholder="TrxID"
                                prop:value=trx
                                on:input=move |ev| set_trx.set(event_target_value(&ev)) />
                        </div>
                    </div>

                    {move || error.get().map(|msg| view! { <div class="error-banner">{msg}</div> })}

                    <button class="btn btn-block" disabled=move || loading.get() on:click=on_submit>
                        {move || if loading.get() { "Submitting..." } else { "Sign in & Order Minecraft" }}
                    </button>
                </div>
            }.into_any(),
        }}
    }
}
