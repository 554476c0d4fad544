//! Recipe Detail Tabs
//!
//! Ingredients / Instructions / Nutrition tab strip for the detail page.
//! Instructions prefer the analyzed step list and fall back to the raw HTML
//! blob; nutrition shows a fixed set of headline nutrients.

use leptos::prelude::*;

use crate::models::RecipeDetails;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Ingredients,
    Instructions,
    Nutrition,
}

const HEADLINE_NUTRIENTS: &[&str] = &[
    "Calories",
    "Fat",
    "Carbohydrates",
    "Protein",
    "Sugar",
    "Sodium",
    "Fiber",
    "Cholesterol",
];

#[component]
pub fn RecipeTabs(recipe: RecipeDetails) -> impl IntoView {
    let (active, set_active) = signal(Tab::Ingredients);
    let recipe = StoredValue::new(recipe);

    let tab_button = move |tab: Tab, label: &'static str| {
        view! {
            <button
                class=move || if active.get() == tab { "tab active" } else { "tab" }
                on:click=move |_| set_active.set(tab)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="recipe-tabs">
            <div class="tab-bar">
                {tab_button(Tab::Ingredients, "Ingredients")}
                {tab_button(Tab::Instructions, "Instructions")}
                {tab_button(Tab::Nutrition, "Nutrition")}
            </div>
            <div class="tab-panel">
                {move || match active.get() {
                    Tab::Ingredients => ingredients_view(&recipe.get_value()),
                    Tab::Instructions => instructions_view(&recipe.get_value()),
                    Tab::Nutrition => nutrition_view(&recipe.get_value()),
                }}
            </div>
        </div>
    }
}

fn ingredients_view(recipe: &RecipeDetails) -> AnyView {
    view! {
        <div>
            <h2>"Ingredients"</h2>
            <ul class="ingredient-list">
                {recipe
                    .extended_ingredients
                    .iter()
                    .map(|ingredient| {
                        view! {
                            <li>
                                <span class="ingredient-name">{ingredient.name.clone()}</span>
                                <span class="ingredient-amount">
                                    {format!(" - {} {}", ingredient.amount, ingredient.unit)}
                                </span>
                                <p class="ingredient-original">{ingredient.original.clone()}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_any()
}

fn instructions_view(recipe: &RecipeDetails) -> AnyView {
    let steps = recipe
        .analyzed_instructions
        .first()
        .filter(|set| !set.steps.is_empty());
    match steps {
        Some(set) => view! {
            <div>
                <h2>"Instructions"</h2>
                <ol class="instruction-steps">
                    {set.steps
                        .iter()
                        .map(|step| {
                            view! {
                                <li>
                                    <span class="step-number">{step.number}</span>
                                    <div>
                                        <p>{step.step.clone()}</p>
                                        {(!step.ingredients.is_empty())
                                            .then(|| {
                                                view! {
                                                    <div class="step-ingredients">
                                                        {step.ingredients
                                                            .iter()
                                                            .map(|ingredient| {
                                                                view! {
                                                                    <span class="step-ingredient">
                                                                        {ingredient.name.clone()}
                                                                    </span>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                }
                                            })}
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        }
        .into_any(),
        None => {
            let html = if recipe.instructions.is_empty() {
                "No instructions available.".to_string()
            } else {
                recipe.instructions.clone()
            };
            view! {
                <div>
                    <h2>"Instructions"</h2>
                    <div class="instructions-html" inner_html=html></div>
                </div>
            }
            .into_any()
        }
    }
}

fn nutrition_view(recipe: &RecipeDetails) -> AnyView {
    match &recipe.nutrition {
        Some(nutrition) => view! {
            <div>
                <h2>"Nutrition Information"</h2>
                <div class="nutrient-grid">
                    {nutrition
                        .nutrients
                        .iter()
                        .filter(|nutrient| HEADLINE_NUTRIENTS.contains(&nutrient.name.as_str()))
                        .map(|nutrient| {
                            view! {
                                <div class="nutrient-tile">
                                    <span class="nutrient-name">{nutrient.name.clone()}</span>
                                    <span class="nutrient-amount">
                                        {format!("{:.0} {}", nutrient.amount, nutrient.unit)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
        None => view! { <p>"Nutrition information not available."</p> }.into_any(),
    }
}
