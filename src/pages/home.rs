//! Home Page
//!
//! Hero search, quick-link chips, category grid, and a few hand-picked
//! featured recipes.

use leptos::prelude::*;

use crate::api::encode_component;
use crate::components::MainSearchBar;

const CATEGORIES: &[&str] = &[
    "Breakfast",
    "Lunch",
    "Dinner",
    "Desserts",
    "Vegetarian",
    "Quick Meals",
];

const FEATURED: &[(i64, &str, &str, u32)] = &[
    (
        716429,
        "Pasta with Garlic, Scallions, Cauliflower & Breadcrumbs",
        "https://spoonacular.com/recipeImages/716429-556x370.jpg",
        45,
    ),
    (
        715538,
        "Bruschetta Style Pork & Pasta",
        "https://spoonacular.com/recipeImages/715538-556x370.jpg",
        35,
    ),
    (
        716437,
        "Chilled Cucumber Avocado Soup with Yogurt and Kefir",
        "https://spoonacular.com/recipeImages/716437-556x370.jpg",
        55,
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <section class="hero">
                <h1>"Discover Delicious Recipes for Every Taste"</h1>
                <p>
                    "Find thousands of recipes from around the world, perfect for any occasion, diet, or craving."
                </p>
                <MainSearchBar/>
                <div class="hero-links">
                    <a href="/recipes?sort=popularity">"Popular Recipes"</a>
                    <a href="/recipes?diet=vegetarian">"Vegetarian"</a>
                    <a href="/recipes?diet=gluten+free">"Gluten-Free"</a>
                </div>
            </section>

            <section class="categories">
                <h2>"Explore Recipe Categories"</h2>
                <div class="category-grid">
                    {CATEGORIES
                        .iter()
                        .map(|name| {
                            view! {
                                <a
                                    class="category-card"
                                    href=format!("/recipes?query={}", encode_component(name))
                                >
                                    {*name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="featured">
                <h2>"Featured Recipes"</h2>
                <p class="section-subtitle">
                    "Try these delicious recipes handpicked by our culinary experts"
                </p>
                <div class="featured-grid">
                    {FEATURED
                        .iter()
                        .map(|(id, title, image, minutes)| {
                            view! {
                                <a class="featured-card" href=format!("/recipes/{id}")>
                                    <img src=*image alt=*title/>
                                    <h3>{*title}</h3>
                                    <span class="featured-minutes">
                                        {format!("{minutes} minutes")}
                                    </span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <a class="explore-all" href="/recipes">"Explore All Recipes"</a>
            </section>
        </div>
    }
}
