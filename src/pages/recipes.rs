//! Recipes Page
//!
//! Paginated, filterable search results. The URL parameters are the source
//! of truth; every parameter change re-runs the catalog search.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::api::{self, SearchQuery, DEFAULT_SORT};
use crate::components::{FoodCard, Pagination, SkeletonGrid};
use crate::models::SearchResponse;

#[derive(Clone)]
enum SearchState {
    Loading,
    Loaded(SearchResponse),
    Failed(String),
}

#[component]
pub fn RecipesPage() -> impl IntoView {
    let query_map = use_query_map();
    let query = Memo::new(move |_| SearchQuery::from_params(&query_map.get()));
    let (state, set_state) = signal(SearchState::Loading);

    Effect::new(move |_| {
        let query = query.get();
        set_state.set(SearchState::Loading);
        spawn_local(async move {
            match api::search(&query).await {
                Ok(response) => set_state.set(SearchState::Loaded(response)),
                Err(err) => {
                    log::error!("recipe search failed: {err}");
                    set_state.set(SearchState::Failed(err.to_string()));
                }
            }
        });
    });

    view! {
        <div class="recipes-page">
            <header class="recipes-header">
                <h1>
                    {move || {
                        let q = query.get();
                        if q.query.is_empty() {
                            "All Recipes".to_string()
                        } else {
                            format!("Results for \u{201c}{}\u{201d}", q.query)
                        }
                    }}
                </h1>
                {move || {
                    let q = query.get();
                    (q.active_filter_count() > 0)
                        .then(|| {
                            view! {
                                <div class="filter-chips">
                                    <span class="chip count">
                                        {format!("{} active filters", q.active_filter_count())}
                                    </span>
                                    {(!q.diet.is_empty())
                                        .then(|| {
                                            view! {
                                                <span class="chip diet">
                                                    {format!("Diet: {}", q.diet)}
                                                </span>
                                            }
                                        })}
                                    {(!q.cuisine.is_empty())
                                        .then(|| {
                                            view! {
                                                <span class="chip cuisine">
                                                    {format!("{} cuisine", q.cuisine)}
                                                </span>
                                            }
                                        })}
                                    {(q.sort != DEFAULT_SORT)
                                        .then(|| {
                                            view! {
                                                <span class="chip sort">
                                                    {format!("Sorted by: {}", q.sort)}
                                                </span>
                                            }
                                        })}
                                </div>
                            }
                        })
                }}
            </header>

            {move || match state.get() {
                SearchState::Loading => view! { <SkeletonGrid/> }.into_any(),
                SearchState::Failed(_) => error_view().into_any(),
                SearchState::Loaded(response) => results_view(query.get(), response),
            }}
        </div>
    }
}

fn results_view(query: SearchQuery, response: SearchResponse) -> AnyView {
    if response.results.is_empty() {
        return view! {
            <div class="empty-state">
                <h2>"No recipes found"</h2>
                <p>"Try adjusting your search or filters to find what you're looking for."</p>
            </div>
        }
        .into_any();
    }

    let total_results = response.total_results;
    let total_pages = query.total_pages(total_results);
    let shown_from = query.offset() as u64 + 1;
    let shown_to = (query.offset() as u64 + query.limit as u64).min(total_results);

    view! {
        <div class="recipe-grid">
            {response
                .results
                .into_iter()
                .map(|recipe| view! { <FoodCard recipe=recipe/> })
                .collect_view()}
        </div>
        {(total_pages > 1)
            .then(|| view! { <Pagination query=query.clone() total_pages=total_pages/> })}
        <p class="results-summary">
            {format!("Showing {shown_from}-{shown_to} of {total_results} results")}
        </p>
    }
    .into_any()
}

fn error_view() -> impl IntoView {
    view! {
        <div class="error-panel">
            <h2>"Error Loading Recipes"</h2>
            <p>"We couldn't load the recipes at this time. Please try again later."</p>
            <a href="/">"Go to Homepage"</a>
        </div>
    }
}
