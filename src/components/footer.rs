//! Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-columns">
                <div>
                    <h3>"About Recipe Radar"</h3>
                    <p>
                        "Find thousands of recipes from around the world, perfect for any occasion, diet, or craving."
                    </p>
                </div>
                <div>
                    <h3>"Quick Links"</h3>
                    <ul>
                        <li><a href="/recipes?sort=popularity">"Popular Recipes"</a></li>
                        <li><a href="/recipes?diet=vegetarian">"Vegetarian"</a></li>
                        <li><a href="/recipes?cuisine=Italian">"Italian Cuisine"</a></li>
                        <li><a href="/favorites">"My Favorites"</a></li>
                    </ul>
                </div>
                <div>
                    <h3>"Data"</h3>
                    <p>"Recipe data provided by the Spoonacular API."</p>
                </div>
            </div>
        </footer>
    }
}
