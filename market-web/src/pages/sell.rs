//! Sell view: create a new land listing.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use shared::dto::{BuildType, LandListing, ListingDraft};

use crate::services::listings::submit_listing;
use crate::utils::validation::{validate_image_size, validate_listing};

#[component]
pub fn SellForm() -> impl IntoView {
    let (land_x, set_land_x) = signal(String::new());
    let (land_y, set_land_y) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (build_type, set_build_type) = signal(BuildType::Home);
    let (image_url, set_image_url) = signal(None::<String>);
    let (seller_bkash, set_seller_bkash) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let (posted, set_posted) = signal(None::<LandListing>);

    let on_image = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let check = validate_image_size(file.size() as u64);
        if !check.is_valid {
            set_error.set(check.error);
            return;
        }
        set_error.set(None);

        let Ok(reader) = web_sys::FileReader::new() else {
            log::warn!("FileReader unavailable");
            return;
        };
        let reader_ref = reader.clone();
        let onloadend = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            if let Ok(result) = reader_ref.result() {
                if let Some(data_url) = result.as_string() {
                    set_image_url.set(Some(data_url));
                }
            }
        });
        reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
        onloadend.forget();
        if reader.read_as_data_url(&file).is_err() {
            log::warn!("could not read property photo");
        }
    };

    let on_submit = move |_| {
        let parsed_price = price.get_untracked().trim().parse::<u32>().ok();
        let check = validate_listing(
            &land_x.get_untracked(),
            &land_y.get_untracked(),
            parsed_price,
            &seller_bkash.get_untracked(),
        );
        if !check.is_valid {
            set_error.set(check.error);
            return;
        }

        set_error.set(None);
        set_loading.set(true);

        let draft = ListingDraft {
            land_x: land_x.get_untracked(),
            land_y: land_y.get_untracked(),
            price: parsed_price.unwrap_or_default(),
            build_type: build_type.get_untracked(),
            image_url: image_url.get_untracked(),
            seller_bkash: seller_bkash.get_untracked(),
        };

        leptos::task::spawn_local(async move {
            match submit_listing(draft).await {
                Ok(listing) => set_posted.set(Some(listing)),
                Err(err) => {
                    log::error!("listing submission failed: {err}");
                    set_error.set(Some(
                        "Could not post your listing online. Please try again.".to_string(),
                    ));
                }
            }
            set_loading.set(false);
        });
    };

    let reset = move |_| {
        set_posted.set(None);
        set_land_x.set(String::new());
        set_land_y.set(String::new());
        set_price.set(String::new());
        set_build_type.set(BuildType::Home);
        set_image_url.set(None);
        set_seller_bkash.set(String::new());
    };

    view! {
        {move || match posted.get() {
            Some(listing) => view! {
                <div class="form-card success-card">
                    <h3 class="success-title">"Listing Live Online!"</h3>
                    <p class="success-sub">
                        "Your land listing is now visible to everyone. Share the unique code \
                         below with buyers."
                    </p>
                    {listing.image().map(|url| {
                        view! {
                            <div class="photo-preview">
                                <img src=url.to_string() alt="Property"/>
                            </div>
                        }
                    })}
                    <div class="code-box code-box-large">
                        <span class="meta-label">"Unique Listing Code"</span>
                        <span class="code-value code-value-large">{listing.code.clone()}</span>
                    </div>
                    <button class="btn btn-block" on:click=reset>
                        "Sell Another Land"
                    </button>
                </div>
            }.into_any(),
            None => view! {
                <div class="form-card">
                    <h2>"Sell Your Land Online"</h2>
                    <p class="form-sub">"Fill in the details to list your land for every player to see"</p>

                    <div class="field-group">
                        <label class="field-label">"Property Photo"</label>
                        {move || image_url.get().map(|url| {
                            view! {
                                <div class="photo-preview">
                                    <img src=url alt="Preview"/>
                                </div>
                            }
                        })}
                        <input class="field-input" type="file" accept="image/*" on:change=on_image />
                    </div>

                    <div class="field-group">
                        <label class="field-label">"Select Build Type"</label>
                        <div class="type-row">
                            {BuildType::ALL
                                .into_iter()
                                .map(|choice| {
                                    view! {
                                        <button type="button"
                                            class=move || {
                                                if build_type.get() == choice {
                                                    "type-btn type-btn-active"
                                                } else {
                                                    "type-btn"
                                                }
                                            }
                                            on:click=move |_| set_build_type.set(choice)
                                        >
                                            {choice.as_str()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="field-row">
                        <div class="field-group">
                            <label class="field-label">"Land X Code"</label>
                            <input class="field-input" type="text" placeholder="e.g. 1250"
                                prop:value=land_x
                                on:input=move |ev| set_land_x.set(event_target_value(&ev)) />
                        </div>
                        <div class="field-group">
                            <label class="field-label">"Land Y Code"</label>
                            <input class="field-input" type="text" placeholder="e.g. -450"
                                prop:value=land_y
                                on:input=move |ev| set_land_y.set(event_target_value(&ev)) />
                        </div>
                    </div>
                    <div class="field-row">
                        <div class="field-group">
                            <label class="field-label">"Price (BDT)"</label>
                            <input class="field-input" type="number" placeholder="Set price"
                                prop:value=price
                                on:input=move |ev| set_price.set(event_target_value(&ev)) />
                        </div>
                        <div class="field-group">
                            <label class="field-label">"Seller bKash No"</label>
                            <input class="field-input" type="text" placeholder="017XXXXXXXX"
                                prop:value=seller_bkash
                                on:input=move |ev| set_seller_bkash.set(event_target_value(&ev)) />
                        </div>
                    </div>

                    {move || error.get().map(|msg| view! { <div class="error-banner">{msg}</div> })}

                    <button class="btn btn-block" disabled=move || loading.get() on:click=on_submit>
                        {move || if loading.get() { "Posting..." } else { "Confirm Listing Online" }}
                    </button>
                </div>
            }.into_any(),
        }}
    }
}
