//! Pages

mod favorites;
mod home;
mod recipe_detail;
mod recipes;

pub use favorites::FavoritesPage;
pub use home::HomePage;
pub use recipe_detail::RecipeDetailPage;
pub use recipes::RecipesPage;
