//! Loading Skeletons

use leptos::prelude::*;

/// Pulsing placeholder grid shown while search results load.
#[component]
pub fn SkeletonGrid(#[prop(default = 12)] count: usize) -> impl IntoView {
    view! {
        <div class="recipe-grid">
            {(0..count)
                .map(|_| {
                    view! {
                        <div class="skeleton-card">
                            <div class="skeleton-image"></div>
                            <div class="skeleton-line wide"></div>
                            <div class="skeleton-line"></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Placeholder for the recipe detail page.
#[component]
pub fn SkeletonDetail() -> impl IntoView {
    view! {
        <div class="skeleton-detail">
            <div class="skeleton-line title"></div>
            <div class="skeleton-detail-columns">
                <div class="skeleton-image large"></div>
                <div>
                    <div class="skeleton-line wide"></div>
                    <div class="skeleton-line wide"></div>
                    <div class="skeleton-line"></div>
                </div>
            </div>
        </div>
    }
}
