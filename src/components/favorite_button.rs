//! Favorite Toggle Buttons
//!
//! Two skins over the same favorites-store toggle: the heart overlay on
//! recipe cards and the full-width button on the detail page. Both pass the
//! full summary so the store can add as well as remove.

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::favorites::Favorites;
use crate::models::RecipeSummary;

/// Heart overlay for recipe cards. Stops propagation so tapping the heart
/// does not follow the card's detail link.
#[component]
pub fn FavoriteButton(recipe: RecipeSummary) -> impl IntoView {
    let favorites = Favorites::browser();
    let (saved, set_saved) = signal(false);

    let id = recipe.id;
    Effect::new(move |_| set_saved.set(favorites.contains(id)));

    let on_toggle = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_saved.set(favorites.toggle(recipe.clone()));
    };

    view! {
        <button
            class=move || if saved.get() { "favorite-button saved" } else { "favorite-button" }
            on:click=on_toggle
            aria-label=move || {
                if saved.get() { "Remove from favorites" } else { "Add to favorites" }
            }
        >
            {move || if saved.get() { "\u{2665}" } else { "\u{2661}" }}
        </button>
    }
}

/// Full-width toggle on the recipe detail page.
#[component]
pub fn SaveRecipeButton(recipe: RecipeSummary) -> impl IntoView {
    let favorites = Favorites::browser();
    let (saved, set_saved) = signal(false);

    let id = recipe.id;
    Effect::new(move |_| set_saved.set(favorites.contains(id)));

    let on_toggle = move |_| set_saved.set(favorites.toggle(recipe.clone()));

    view! {
        <button
            class=move || if saved.get() { "save-recipe-button saved" } else { "save-recipe-button" }
            on:click=on_toggle
        >
            {move || {
                if saved.get() {
                    "\u{2665} Remove from Favorites"
                } else {
                    "\u{2661} Add to Favorites"
                }
            }}
        </button>
    }
}
