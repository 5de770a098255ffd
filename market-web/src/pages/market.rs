//! Market view: browse, search and filter land listings.

use leptos::prelude::*;

use shared::dto::{BuildType, LandListing};
use shared::utils::{format_bdt, format_listed_date};

use crate::services::listings::fetch_listings;
use crate::state::view::use_view_context;

/// Build-type filter chips shown above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildFilter {
    All,
    Only(BuildType),
}

impl BuildFilter {
    pub const CHOICES: [BuildFilter; 4] = [
        BuildFilter::All,
        BuildFilter::Only(BuildType::Home),
        BuildFilter::Only(BuildType::Farm),
        BuildFilter::Only(BuildType::Build),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BuildFilter::All => "All",
            BuildFilter::Only(build_type) => build_type.as_str(),
        }
    }

    fn matches(&self, listing: &LandListing) -> bool {
        match self {
            BuildFilter::All => true,
            BuildFilter::Only(build_type) => listing.build_type == *build_type,
        }
    }
}

/// Apply the build-type filter and the case-insensitive code search, newest
/// listings first.
pub fn visible_listings(
    listings: &[LandListing],
    filter: BuildFilter,
    search: &str,
) -> Vec<LandListing> {
    let needle = search.to_lowercase();
    let mut visible: Vec<LandListing> = listings
        .iter()
        .filter(|listing| filter.matches(listing) && listing.code.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    visible.sort_by_key(|listing| std::cmp::Reverse(listing.timestamp_millis()));
    visible
}

#[component]
pub fn MarketPage() -> impl IntoView {
    let views = use_view_context();

    let (listings, set_listings) = signal(Vec::<LandListing>::new());
    let (loading, set_loading) = signal(true);
    let (filter, set_filter) = signal(BuildFilter::All);
    let (search, set_search) = signal(String::new());

    let load = move || {
        set_loading.set(true);
        leptos::task::spawn_local(async move {
            set_listings.set(fetch_listings().await);
            set_loading.set(false);
        });
    };
    load();

    let visible = Memo::new(move |_| {
        listings.with(|listings| visible_listings(listings, filter.get(), &search.get()))
    });

    view! {
        <div class="market">
            <div class="market-toolbar">
                <div class="toolbar-head">
                    <div>
                        <h3>"Search Marketplace"</h3>
                        <p class="toolbar-sub">"Find listings by code"</p>
                    </div>
                    {move || {
                        (!loading.get() && !search.get().is_empty()).then(|| {
                            view! {
                                <span class="result-count">
                                    {visible.get().len()} " results found"
                                </span>
                            }
                        })
                    }}
                </div>

                <div class="search-row">
                    <input class="field-input search-input" type="text"
                        placeholder="Search by Code (e.g. #A1B2C3)"
                        prop:value=search
                        on:input=move |ev| set_search.set(event_target_value(&ev)) />
                    {move || {
                        (!search.get().is_empty()).then(|| {
                            view! {
                                <button class="search-clear" on:click=move |_| set_search.set(String::new())>
                                    "Clear"
                                </button>
                            }
                        })
                    }}
                </div>

                <div class="chip-row">
                    {BuildFilter::CHOICES
                        .into_iter()
                        .map(|choice| {
                            view! {
                                <button
                                    class=move || {
                                        if filter.get() == choice { "chip chip-active" } else { "chip" }
                                    }
                                    on:click=move |_| set_filter.set(choice)
                                >
                                    {choice.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button class="refresh-btn" title="Refresh Market" on:click=move |_| load()>
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || {
                if loading.get() {
                    return view! {
                        <div class="listing-grid">
                            {(0..4).map(|_| view! { <div class="skeleton-card"></div> }).collect_view()}
                        </div>
                    }
                    .into_any();
                }

                let items = visible.get();
                if items.is_empty() {
                    let query = search.get();
                    let headline = if query.is_empty() {
                        match filter.get() {
                            BuildFilter::All => "No Listings Found".to_string(),
                            BuildFilter::Only(build_type) => {
                                format!("No {} Listings Found", build_type.as_str())
                            }
                        }
                    } else {
                        format!("No matches for \"{query}\"")
                    };
                    let hint = if query.is_empty() {
                        "The marketplace is currently empty. Be the first one to list your land!"
                    } else {
                        "Check the listing code or clear your search to find what you need."
                    };
                    return view! {
                        <div class="empty-state">
                            <h3>{headline}</h3>
                            <p>{hint}</p>
                            {(!query.is_empty()).then(|| {
                                view! {
                                    <button class="link-btn" on:click=move |_| set_search.set(String::new())>
                                        "Clear Search Query"
                                    </button>
                                }
                            })}
                        </div>
                    }
                    .into_any();
                }

                view! {
                    <div class="listing-grid">
                        {items
                            .into_iter()
                            .map(|item| {
                                let open_code = item.code.clone();
                                let open_price = item.price;
                                view! {
                                    <div class="listing-card"
                                        on:click=move |_| views.open_checkout(open_code.clone(), open_price)>
                                        <div class="listing-image">
                                            {match item.image() {
                                                Some(url) => view! {
                                                    <img src=url.to_string() alt="Property"/>
                                                }.into_any(),
                                                None => view! {
                                                    <div class="image-placeholder">
                                                        {item.build_type.as_str()}
                                                    </div>
                                                }.into_any(),
                                            }}
                                            <span class="tag tag-type">{item.build_type.as_str()}</span>
                                            <span class="tag tag-price">{format_bdt(item.price)}</span>
                                        </div>
                                        <div class="listing-meta">
                                            <div class="meta-row">
                                                <span class="meta-label">"Coordinates"</span>
                                                <span class="meta-value">
                                                    "X: " {item.land_x.clone()} " | Y: " {item.land_y.clone()}
                                                </span>
                                            </div>
                                            <div class="meta-row">
                                                <span class="meta-label">"Seller bKash"</span>
                                                <span class="meta-value">{item.seller_bkash.clone()}</span>
                                            </div>
                                            <div class="meta-row">
                                                <span class="meta-label">"Listed On"</span>
                                                <span class="meta-value">{format_listed_date(&item.timestamp)}</span>
                                            </div>
                                            <div class="code-box">
                                                <span class="meta-label">"Listing Code"</span>
                                                <span class="code-value">{item.code.clone()}</span>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(code: &str, build_type: BuildType, timestamp: &str) -> LandListing {
        LandListing {
            id: format!("ID-25-{}", &code[1..]),
            code: code.to_string(),
            land_x: "100".to_string(),
            land_y: "200".to_string(),
            price: 250,
            build_type,
            image_url: None,
            seller_bkash: "017XXXXXXXX".to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn test_filter_by_build_type_and_code_search() {
        let listings = vec![
            listing("#A1B2C3", BuildType::Farm, "2025-06-01T10:00:00+00:00"),
            listing("#A1XYZ9", BuildType::Home, "2025-06-01T11:00:00+00:00"),
            listing("#QQQQQQ", BuildType::Farm, "2025-06-01T12:00:00+00:00"),
        ];

        let visible = visible_listings(&listings, BuildFilter::Only(BuildType::Farm), "a1");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].code, "#A1B2C3");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let listings = vec![listing("#A1B2C3", BuildType::Home, "2025-06-01T10:00:00+00:00")];
        assert_eq!(visible_listings(&listings, BuildFilter::All, "a1b2").len(), 1);
        assert_eq!(visible_listings(&listings, BuildFilter::All, "A1B2").len(), 1);
        assert_eq!(visible_listings(&listings, BuildFilter::All, "zz").len(), 0);
    }

    #[test]
    fn test_sorted_newest_first() {
        let listings = vec![
            listing("#OLD111", BuildType::Home, "2025-06-01T10:00:00+00:00"),
            listing("#NEW222", BuildType::Home, "2025-06-03T10:00:00+00:00"),
            listing("#MID333", BuildType::Home, "2025-06-02T10:00:00+00:00"),
        ];

        let visible = visible_listings(&listings, BuildFilter::All, "");
        let codes: Vec<&str> = visible.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["#NEW222", "#MID333", "#OLD111"]);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let listings = vec![
            listing("#A1B2C3", BuildType::Farm, "2025-06-01T10:00:00+00:00"),
            listing("#QQQQQQ", BuildType::Build, "2025-06-01T11:00:00+00:00"),
        ];
        assert_eq!(visible_listings(&listings, BuildFilter::All, "").len(), 2);
    }
}
