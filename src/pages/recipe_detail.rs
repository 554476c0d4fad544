//! Recipe Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::api::{self, ApiError};
use crate::components::{RecipeTabs, SaveRecipeButton, SkeletonDetail};
use crate::models::RecipeDetails;

#[derive(Clone)]
enum DetailState {
    Loading,
    Loaded(Box<RecipeDetails>),
    NotFound,
    Failed(String),
}

#[component]
pub fn RecipeDetailPage() -> impl IntoView {
    let params = use_params_map();
    let (state, set_state) = signal(DetailState::Loading);

    Effect::new(move |_| {
        let id = params.get().get("id").unwrap_or_default();
        set_state.set(DetailState::Loading);
        spawn_local(async move {
            match api::recipe_details(&id).await {
                Ok(details) => set_state.set(DetailState::Loaded(Box::new(details))),
                Err(ApiError::NotFound) => set_state.set(DetailState::NotFound),
                Err(err) => {
                    log::error!("recipe detail fetch failed: {err}");
                    set_state.set(DetailState::Failed(err.to_string()));
                }
            }
        });
    });

    view! {
        <div class="recipe-detail">
            <a class="back-link" href="/recipes">"\u{2190} Back to Recipes"</a>
            {move || match state.get() {
                DetailState::Loading => view! { <SkeletonDetail/> }.into_any(),
                DetailState::NotFound => view! {
                    <div class="error-panel">
                        <h2>"Recipe not found"</h2>
                        <p>"This recipe doesn't exist or is no longer available."</p>
                        <a href="/recipes">"Back to Recipes"</a>
                    </div>
                }
                .into_any(),
                DetailState::Failed(_) => view! {
                    <div class="error-panel">
                        <h2>"Error Loading Recipe"</h2>
                        <p>"Failed to load recipe details. Please try again later."</p>
                        <a href="/recipes">"Back to Recipes"</a>
                    </div>
                }
                .into_any(),
                DetailState::Loaded(recipe) => detail_view(*recipe).into_any(),
            }}
        </div>
    }
}

fn detail_view(recipe: RecipeDetails) -> impl IntoView {
    let dish_type = recipe
        .dish_types
        .first()
        .cloned()
        .unwrap_or_else(|| "Main".to_string());
    let diet_label = if recipe.vegetarian {
        "Vegetarian"
    } else if recipe
        .dish_types
        .iter()
        .any(|t| t.contains("meat") || t.contains("chicken"))
    {
        "Non-Veg"
    } else {
        "Regular"
    };

    view! {
        <div>
            <h1 class="recipe-title">{recipe.title.clone()}</h1>
            <div class="recipe-lede" inner_html=recipe.short_summary()></div>

            <div class="recipe-overview">
                <img class="recipe-image" src=recipe.image.clone() alt=recipe.title.clone()/>
                <div class="recipe-info">
                    <div class="info-tiles">
                        <div class="info-tile">
                            <span class="info-label">"Ready In"</span>
                            <span class="info-value">
                                {format!("{} min", recipe.ready_in_minutes)}
                            </span>
                        </div>
                        <div class="info-tile">
                            <span class="info-label">"Servings"</span>
                            <span class="info-value">{recipe.servings}</span>
                        </div>
                        <div class="info-tile">
                            <span class="info-label">"Type"</span>
                            <span class="info-value">{dish_type}</span>
                        </div>
                        <div class="info-tile">
                            <span class="info-label">"Diet"</span>
                            <span class="info-value">{diet_label}</span>
                        </div>
                    </div>

                    <div class="diet-badges">
                        {recipe.vegetarian.then(|| view! { <span class="badge">"Vegetarian"</span> })}
                        {recipe.vegan.then(|| view! { <span class="badge">"Vegan"</span> })}
                        {recipe.gluten_free.then(|| view! { <span class="badge">"Gluten-Free"</span> })}
                        {recipe.dairy_free.then(|| view! { <span class="badge">"Dairy-Free"</span> })}
                        {recipe
                            .diets
                            .iter()
                            .map(|diet| view! { <span class="badge alt">{diet.clone()}</span> })
                            .collect_view()}
                    </div>

                    <SaveRecipeButton recipe=recipe.card()/>
                </div>
            </div>

            <RecipeTabs recipe=recipe/>
        </div>
    }
}
