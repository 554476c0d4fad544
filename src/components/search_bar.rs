//! Search Bars
//!
//! `MainSearchBar` is the home-page hero search starting a fresh query;
//! `NavSearchBar` lives in the navbar on the results page and merges the new
//! query into the existing filter/sort/pagination parameters.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use web_sys::SubmitEvent;

use crate::api::{encode_component, SearchQuery};

#[component]
pub fn MainSearchBar() -> impl IntoView {
    let navigate = use_navigate();
    let (text, set_text) = signal(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let trimmed = text.get_untracked().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        navigate(
            &format!("/recipes?query={}", encode_component(&trimmed)),
            Default::default(),
        );
    };

    view! {
        <form class="main-search" on:submit=on_submit>
            <input
                type="text"
                placeholder="Search for recipes by name or ingredients..."
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <button type="submit">"Search"</button>
        </form>
    }
}

#[component]
pub fn NavSearchBar() -> impl IntoView {
    let navigate = use_navigate();
    let query_map = use_query_map();
    let (text, set_text) = signal(String::new());

    // Keep the input in sync with the query parameter in the URL.
    Effect::new(move |_| {
        set_text.set(query_map.get().get("query").unwrap_or_default());
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let query = SearchQuery::from_params(&query_map.get_untracked())
            .with_query(&text.get_untracked());
        navigate(&query.href(query.page), Default::default());
    };

    view! {
        <form class="nav-search" on:submit=on_submit>
            <input
                type="text"
                placeholder="Search for recipes..."
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <button type="submit">"Search"</button>
        </form>
    }
}
