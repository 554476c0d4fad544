//! Favorites Page
//!
//! Lists the saved recipes from the favorites store and re-reads them when
//! another tab rewrites the underlying storage key.

use leptos::prelude::*;

use crate::components::FoodCard;
use crate::favorites::{Favorites, FAVORITES_KEY};
use crate::models::RecipeSummary;
use crate::storage;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let favorites = Favorites::browser();
    let (recipes, set_recipes) = signal(Vec::<RecipeSummary>::new());

    let reload = move || set_recipes.set(favorites.list().value());

    Effect::new(move |_| reload());

    // The subscription guard detaches the listener when the page's reactive
    // owner is disposed.
    let _subscription = StoredValue::new_local(storage::subscribe(FAVORITES_KEY, reload));

    view! {
        <div class="favorites-page">
            <h1>"\u{2665} My Favorite Recipes"</h1>
            <p class="page-subtitle">"Your saved recipes, all in one place."</p>

            {move || {
                let saved = recipes.get();
                if saved.is_empty() {
                    view! {
                        <div class="empty-state">
                            <h2>"No favorite recipes yet"</h2>
                            <p>"Start exploring recipes and add some to your favorites!"</p>
                            <a class="explore-all" href="/recipes">"Explore Recipes"</a>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="recipe-grid">
                            <For
                                each=move || recipes.get()
                                key=|recipe| recipe.id
                                children=move |recipe| view! { <FoodCard recipe=recipe/> }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
