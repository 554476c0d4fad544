//! Filter Panel Component
//!
//! Modal with cuisine/diet/sort/per-page selects. Apply merges the choices
//! into the current URL parameters; Reset drops everything except the search
//! query.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::api::{encode_component, SearchQuery, DEFAULT_LIMIT, DEFAULT_SORT};

const CUISINES: &[(&str, &str)] = &[
    ("", "All Cuisines"),
    ("American", "American"),
    ("Italian", "Italian"),
    ("Mexican", "Mexican"),
    ("Chinese", "Chinese"),
    ("Japanese", "Japanese"),
    ("Indian", "Indian"),
    ("French", "French"),
    ("Greek", "Greek"),
    ("Thai", "Thai"),
    ("Vietnamese", "Vietnamese"),
    ("Korean", "Korean"),
    ("Spanish", "Spanish"),
    ("Mediterranean", "Mediterranean"),
];

const DIETS: &[(&str, &str)] = &[
    ("", "All Diets"),
    ("vegan", "Vegan"),
    ("vegetarian", "Vegetarian"),
    ("pescetarian", "Pescetarian"),
    ("gluten free", "Gluten-free"),
    ("dairy free", "Dairy-free"),
    ("ketogenic", "Keto"),
    ("paleo", "Paleo"),
];

const SORTS: &[(&str, &str)] = &[
    ("popularity", "Most Popular"),
    ("healthiness", "Healthiest"),
    ("price", "Cheapest"),
    ("time", "Quickest"),
    ("random", "Random"),
];

const LIMITS: &[&str] = &["12", "24", "36", "48"];

fn select_options(
    options: &'static [(&'static str, &'static str)],
    selected: ReadSignal<String>,
) -> impl IntoView {
    options
        .iter()
        .map(|(value, label)| {
            let value = *value;
            view! {
                <option value=value selected=move || selected.get() == value>
                    {*label}
                </option>
            }
        })
        .collect_view()
}

#[component]
pub fn FilterPanel(visible: ReadSignal<bool>, on_close: Callback<()>) -> impl IntoView {
    let navigate = use_navigate();
    let navigate_reset = navigate.clone();
    let query_map = use_query_map();

    let (diet, set_diet) = signal(String::new());
    let (cuisine, set_cuisine) = signal(String::new());
    let (sort, set_sort) = signal(DEFAULT_SORT.to_string());
    let (limit, set_limit) = signal(DEFAULT_LIMIT.to_string());

    // Re-seed the selects from the URL whenever the parameters change.
    Effect::new(move |_| {
        let query = SearchQuery::from_params(&query_map.get());
        set_diet.set(query.diet);
        set_cuisine.set(query.cuisine);
        set_sort.set(query.sort);
        set_limit.set(query.limit.to_string());
    });

    let apply = move |_| {
        let mut query = SearchQuery::from_params(&query_map.get_untracked());
        query.diet = diet.get_untracked();
        query.cuisine = cuisine.get_untracked();
        query.sort = sort.get_untracked();
        query.limit = limit.get_untracked().parse().unwrap_or(DEFAULT_LIMIT);
        navigate(&query.href(query.page), Default::default());
        on_close.run(());
    };

    let reset = move |_| {
        let current = SearchQuery::from_params(&query_map.get_untracked());
        set_diet.set(String::new());
        set_cuisine.set(String::new());
        set_sort.set(DEFAULT_SORT.to_string());
        set_limit.set(DEFAULT_LIMIT.to_string());
        let href = if current.query.is_empty() {
            "/recipes".to_string()
        } else {
            format!("/recipes?query={}", encode_component(&current.query))
        };
        navigate_reset(&href, Default::default());
    };

    view! {
        <div
            class="filter-overlay"
            style:display=move || if visible.get() { "flex" } else { "none" }
        >
            <div class="filter-panel">
                <div class="filter-panel-header">
                    <h2>"Filter Recipes"</h2>
                    <button
                        class="filter-close"
                        on:click=move |_| on_close.run(())
                        aria-label="Close filters"
                    >
                        "\u{00d7}"
                    </button>
                </div>

                <label class="filter-row">
                    <span>"Cuisine:"</span>
                    <select on:change=move |ev| set_cuisine.set(event_target_value(&ev))>
                        {select_options(CUISINES, cuisine)}
                    </select>
                </label>

                <label class="filter-row">
                    <span>"Diet:"</span>
                    <select on:change=move |ev| set_diet.set(event_target_value(&ev))>
                        {select_options(DIETS, diet)}
                    </select>
                </label>

                <label class="filter-row">
                    <span>"Sort by:"</span>
                    <select on:change=move |ev| set_sort.set(event_target_value(&ev))>
                        {select_options(SORTS, sort)}
                    </select>
                </label>

                <label class="filter-row">
                    <span>"Per page:"</span>
                    <select on:change=move |ev| set_limit.set(event_target_value(&ev))>
                        {LIMITS
                            .iter()
                            .map(|value| {
                                let value = *value;
                                view! {
                                    <option value=value selected=move || limit.get() == value>
                                        {value}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <div class="filter-actions">
                    <button class="filter-reset" on:click=reset>"Reset"</button>
                    <button class="filter-apply" on:click=apply>"Apply Filters"</button>
                </div>
            </div>
        </div>
    }
}
