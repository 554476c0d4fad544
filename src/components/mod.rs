//! UI Components

mod favorite_button;
mod filter_panel;
mod food_card;
mod footer;
mod navbar;
mod pagination;
mod recipe_tabs;
mod search_bar;
mod skeleton;

pub use favorite_button::{FavoriteButton, SaveRecipeButton};
pub use filter_panel::FilterPanel;
pub use food_card::FoodCard;
pub use footer::Footer;
pub use navbar::Navbar;
pub use pagination::Pagination;
pub use recipe_tabs::RecipeTabs;
pub use search_bar::{MainSearchBar, NavSearchBar};
pub use skeleton::{SkeletonDetail, SkeletonGrid};
