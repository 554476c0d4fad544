//! Navbar Component
//!
//! Sticky top navigation with active-link highlighting, a mobile menu
//! toggle, and (on the results page only) the inline search bar and the
//! filter-panel toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::{FilterPanel, NavSearchBar};

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let (show_filters, set_show_filters) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let link_class = move |path: &'static str| {
        move || {
            if pathname.get() == path {
                "nav-link active"
            } else {
                "nav-link"
            }
        }
    };
    let on_recipes = move || pathname.get() == "/recipes";

    // Close the mobile menu when navigating to a new page.
    Effect::new(move |_| {
        pathname.track();
        set_menu_open.set(false);
    });

    view! {
        <nav class="navbar">
            <div class="navbar-row">
                <a class="navbar-logo" href="/">"Recipe Radar"</a>
                <ul class="navbar-links">
                    <li><a class=link_class("/") href="/">"Home"</a></li>
                    <li><a class=link_class("/recipes") href="/recipes">"Recipes"</a></li>
                    <li><a class=link_class("/favorites") href="/favorites">"Favorites"</a></li>
                </ul>
                <button
                    class="navbar-menu-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    aria-label="Toggle mobile menu"
                >
                    "\u{2630}"
                </button>
            </div>

            <ul class=move || {
                if menu_open.get() { "navbar-mobile-menu open" } else { "navbar-mobile-menu" }
            }>
                <li><a class=link_class("/") href="/">"Home"</a></li>
                <li><a class=link_class("/recipes") href="/recipes">"Recipes"</a></li>
                <li><a class=link_class("/favorites") href="/favorites">"Favorites"</a></li>
            </ul>

            {move || {
                on_recipes()
                    .then(|| {
                        view! {
                            <div class="navbar-search-row">
                                <NavSearchBar/>
                                <button
                                    class=move || {
                                        if show_filters.get() {
                                            "filter-toggle active"
                                        } else {
                                            "filter-toggle"
                                        }
                                    }
                                    on:click=move |_| set_show_filters.update(|open| *open = !*open)
                                    aria-label="Toggle filters"
                                >
                                    "Filters"
                                </button>
                            </div>
                        }
                    })
            }}
        </nav>

        <FilterPanel
            visible=show_filters
            on_close=Callback::new(move |_| set_show_filters.set(false))
        />
    }
}
