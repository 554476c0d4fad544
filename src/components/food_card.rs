//! Recipe Card Component

use leptos::prelude::*;

use crate::components::FavoriteButton;
use crate::models::RecipeSummary;

/// Grid card linking to the recipe's detail page, with the favorite heart
/// overlaid on the image.
#[component]
pub fn FoodCard(recipe: RecipeSummary) -> impl IntoView {
    let href = format!("/recipes/{}", recipe.id);

    view! {
        <a class="food-card" href=href>
            <div class="food-card-image">
                <img src=recipe.image.clone() alt=recipe.title.clone()/>
                <FavoriteButton recipe=recipe.clone()/>
                <h2 class="food-card-title">{recipe.title.clone()}</h2>
            </div>
            <div class="food-card-body">
                <div class="food-card-meta">
                    <span>{format!("{} min", recipe.ready_in_minutes.unwrap_or(0))}</span>
                    <span>{format!("{} servings", recipe.servings.unwrap_or(0))}</span>
                </div>
                <span class="food-card-cta">"View Recipe"</span>
            </div>
        </a>
    }
}
