//! Recipe Catalog Client
//!
//! Fetch wrappers for the Spoonacular search/detail endpoints, plus
//! `SearchQuery`, the parsed form of the `/recipes` URL parameters that both
//! the request URL and the pagination/filter links are built from.

use gloo_net::http::Request;
use leptos_router::params::ParamsMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use std::fmt;

use crate::models::{RecipeDetails, SearchResponse};

const API_BASE: &str = "https://api.spoonacular.com";
pub const DEFAULT_SORT: &str = "popularity";
pub const DEFAULT_LIMIT: u32 = 12;

/// encodeURIComponent's unreserved marks.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// encodeURIComponent-equivalent escaping for query parameter values.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

fn api_key() -> &'static str {
    option_env!("SPOONACULAR_API_KEY").unwrap_or("")
}

/// Search parameters of the results page, with their URL defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub query: String,
    pub diet: String,
    pub cuisine: String,
    pub sort: String,
    pub page: u32,
    pub limit: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            diet: String::new(),
            cuisine: String::new(),
            sort: DEFAULT_SORT.to_string(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchQuery {
    pub fn from_params(params: &ParamsMap) -> Self {
        Self::from_lookup(|key| params.get(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str| lookup(key).unwrap_or_default();
        let number = |key: &str, default: u32| {
            lookup(key)
                .and_then(|v| v.parse().ok())
                .filter(|v: &u32| *v > 0)
                .unwrap_or(default)
        };
        Self {
            query: text("query"),
            diet: text("diet"),
            cuisine: text("cuisine"),
            sort: lookup("sort")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SORT.to_string()),
            page: number("page", 1),
            limit: number("limit", DEFAULT_LIMIT),
        }
    }

    pub fn offset(&self) -> u32 {
        (self.page - 1) * self.limit
    }

    pub fn total_pages(&self, total_results: u64) -> u32 {
        total_results.div_ceil(self.limit as u64) as u32
    }

    /// Filters shown as active chips: diet, cuisine, non-default sort.
    pub fn active_filter_count(&self) -> u32 {
        let mut count = 0;
        if !self.diet.is_empty() {
            count += 1;
        }
        if !self.cuisine.is_empty() {
            count += 1;
        }
        if self.sort != DEFAULT_SORT {
            count += 1;
        }
        count
    }

    /// Absolute catalog URL for this query.
    pub fn api_url(&self) -> String {
        let mut url = format!(
            "{API_BASE}/recipes/complexSearch?query={}&number={}&offset={}&sort={}&addRecipeInformation=true",
            encode_component(&self.query),
            self.limit,
            self.offset(),
            encode_component(&self.sort),
        );
        if !self.diet.is_empty() {
            url.push_str(&format!("&diet={}", encode_component(&self.diet)));
        }
        if !self.cuisine.is_empty() {
            url.push_str(&format!("&cuisine={}", encode_component(&self.cuisine)));
        }
        url
    }

    /// Site-relative link to `page` of these results.
    pub fn href(&self, page: u32) -> String {
        let mut params = Vec::new();
        for (key, value) in [
            ("query", &self.query),
            ("diet", &self.diet),
            ("cuisine", &self.cuisine),
            ("sort", &self.sort),
        ] {
            if !value.is_empty() {
                params.push(format!("{key}={}", encode_component(value)));
            }
        }
        params.push(format!("page={page}"));
        params.push(format!("limit={}", self.limit));
        format!("/recipes?{}", params.join("&"))
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.trim().to_string();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    NotFound,
    Status(u16),
    Network(String),
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "recipe not found"),
            ApiError::Status(code) => write!(f, "API request failed with status {code}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Decode(msg) => write!(f, "unexpected API response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

pub async fn search(query: &SearchQuery) -> Result<SearchResponse, ApiError> {
    request(&query.api_url()).await
}

pub async fn recipe_details(id: &str) -> Result<RecipeDetails, ApiError> {
    request(&format!(
        "{API_BASE}/recipes/{id}/information?includeNutrition=true"
    ))
    .await
}

async fn request<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("x-api-key", api_key())
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    match response.status() {
        404 => Err(ApiError::NotFound),
        status if !response.ok() => Err(ApiError::Status(status)),
        _ => response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn query_from(pairs: &[(&str, &str)]) -> SearchQuery {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SearchQuery::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_applied_to_missing_params() {
        let q = query_from(&[]);
        assert_eq!(q, SearchQuery::default());
        assert_eq!(q.sort, "popularity");
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 12);
    }

    #[test]
    fn test_malformed_numbers_fall_back_to_defaults() {
        let q = query_from(&[("page", "zero"), ("limit", "0")]);
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 12);
    }

    #[test]
    fn test_offset_arithmetic() {
        let q = query_from(&[("page", "3"), ("limit", "12")]);
        assert_eq!(q.offset(), 24);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let q = SearchQuery::default();
        assert_eq!(q.total_pages(0), 0);
        assert_eq!(q.total_pages(12), 1);
        assert_eq!(q.total_pages(100), 9);
    }

    #[test]
    fn test_api_url_includes_filters_and_encoding() {
        let q = query_from(&[("query", "mac & cheese"), ("diet", "gluten free")]);
        let url = q.api_url();
        assert!(url.starts_with(
            "https://api.spoonacular.com/recipes/complexSearch?query=mac%20%26%20cheese"
        ));
        assert!(url.contains("&number=12&offset=0&sort=popularity"));
        assert!(url.contains("&addRecipeInformation=true"));
        assert!(url.contains("&diet=gluten%20free"));
        assert!(!url.contains("cuisine="));
    }

    #[test]
    fn test_href_preserves_filters_and_sets_page() {
        let q = query_from(&[("query", "soup"), ("cuisine", "Thai"), ("page", "2")]);
        assert_eq!(
            q.href(3),
            "/recipes?query=soup&cuisine=Thai&sort=popularity&page=3&limit=12"
        );
    }

    #[test]
    fn test_active_filter_count() {
        assert_eq!(SearchQuery::default().active_filter_count(), 0);
        let q = query_from(&[("diet", "vegan"), ("cuisine", "Greek"), ("sort", "time")]);
        assert_eq!(q.active_filter_count(), 3);
    }
}
