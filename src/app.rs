//! Recipe Radar Frontend App
//!
//! Root component: router with the four pages between the navbar and footer.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Footer, Navbar};
use crate::pages::{FavoritesPage, HomePage, RecipeDetailPage, RecipesPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Navbar/>
            <main class="main-content">
                <Routes fallback=|| {
                    view! {
                        <div class="error-panel">
                            <h1>"Page not found"</h1>
                            <a href="/">"Go to Homepage"</a>
                        </div>
                    }
                }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/recipes") view=RecipesPage/>
                    <Route path=path!("/recipes/:id") view=RecipeDetailPage/>
                    <Route path=path!("/favorites") view=FavoritesPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
