//! Frontend Models
//!
//! Data structures matching the recipe catalog wire format (camelCase JSON).
//! `RecipeSummary` doubles as the persisted favorites entry, so its field set
//! and optional-field omission are part of the stored-payload contract.

use serde::{Deserialize, Serialize};

/// Compact recipe record used in search results, cards, and favorites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

/// Response of the catalog's complexSearch endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<RecipeSummary>,
    #[serde(default)]
    pub total_results: u64,
}

/// Full recipe record from the catalog's information endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ready_in_minutes: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub extended_ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub analyzed_instructions: Vec<InstructionSet>,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub dish_types: Vec<String>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub gluten_free: bool,
    #[serde(default)]
    pub dairy_free: bool,
}

impl RecipeDetails {
    /// Project onto the compact form the favorites store persists.
    pub fn card(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            title: self.title.clone(),
            image: self.image.clone(),
            ready_in_minutes: Some(self.ready_in_minutes),
            servings: Some(self.servings),
        }
    }

    /// First sentence of the (HTML) summary, for the detail-page lede.
    pub fn short_summary(&self) -> String {
        match self.summary.split_once(". ") {
            Some((first, _)) => format!("{first}."),
            None => self.summary.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: i64,
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionSet {
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionStep {
    pub number: u32,
    #[serde(default)]
    pub step: String,
    #[serde(default)]
    pub ingredients: Vec<StepIngredient>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepIngredient {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrient {
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_omits_absent_optional_fields() {
        let recipe = RecipeSummary {
            id: 1,
            title: "A".to_string(),
            image: "x".to_string(),
            ready_in_minutes: None,
            servings: None,
        };
        let json = serde_json::to_string(&recipe).expect("Serialize failed");
        assert_eq!(json, r#"{"id":1,"title":"A","image":"x"}"#);
    }

    #[test]
    fn test_summary_reads_camel_case_payload() {
        let recipe: RecipeSummary =
            serde_json::from_str(r#"{"id":2,"title":"B","image":"y","readyInMinutes":30,"servings":4}"#)
                .expect("Deserialize failed");
        assert_eq!(recipe.ready_in_minutes, Some(30));
        assert_eq!(recipe.servings, Some(4));
    }

    #[test]
    fn test_short_summary_takes_first_sentence() {
        let details: RecipeDetails = serde_json::from_str(
            r#"{"id":3,"title":"C","summary":"Great dish. Also cheap. Try it."}"#,
        )
        .expect("Deserialize failed");
        assert_eq!(details.short_summary(), "Great dish.");
    }
}
