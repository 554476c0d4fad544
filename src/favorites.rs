//! Favorites Store
//!
//! Durable list of favorited recipe summaries, keyed by recipe id, persisted
//! as a JSON array under a fixed localStorage key. Every operation is
//! synchronous and fail-open: a missing, corrupt, or unwritable store
//! degrades to empty/false/no-op plus a log line, never an error the UI has
//! to handle. The storage backend is injected so tests run against
//! `MemoryStorage` and non-browser contexts surface as `Unavailable` rather
//! than needing environment sniffing here.

use crate::models::RecipeSummary;
use crate::storage::{LocalStorage, StorageBackend, StorageError};

/// Origin-scoped storage key for the persisted favorites array.
pub const FAVORITES_KEY: &str = "recipes_favorites";

/// Catalog ids are non-negative, so this can never match a stored entry.
const NO_MATCH: i64 = -1;

/// A recipe id normalized for membership checks. Malformed string ids parse
/// to a sentinel that matches nothing, so checks return false instead of
/// erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteKey(i64);

impl From<i64> for FavoriteKey {
    fn from(id: i64) -> Self {
        FavoriteKey(id)
    }
}

impl From<&str> for FavoriteKey {
    fn from(raw: &str) -> Self {
        FavoriteKey(raw.trim().parse().unwrap_or(NO_MATCH))
    }
}

impl From<String> for FavoriteKey {
    fn from(raw: String) -> Self {
        raw.as_str().into()
    }
}

/// What `toggle` was handed: a full summary (can add) or a bare id (cannot).
#[derive(Debug, Clone)]
pub enum ToggleInput {
    Full(RecipeSummary),
    Bare(FavoriteKey),
}

impl From<RecipeSummary> for ToggleInput {
    fn from(recipe: RecipeSummary) -> Self {
        ToggleInput::Full(recipe)
    }
}

impl From<i64> for ToggleInput {
    fn from(id: i64) -> Self {
        ToggleInput::Bare(id.into())
    }
}

impl From<&str> for ToggleInput {
    fn from(raw: &str) -> Self {
        ToggleInput::Bare(raw.into())
    }
}

/// Read result carrying the fail-open status: `Degraded` means the value was
/// substituted (storage unavailable, unreadable, or corrupt) rather than
/// genuinely read as such.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Ok(T),
    Degraded(T),
}

impl<T> Outcome<T> {
    pub fn value(self) -> T {
        match self {
            Outcome::Ok(v) | Outcome::Degraded(v) => v,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded(_))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Favorites<S: StorageBackend> {
    storage: S,
}

impl Favorites<LocalStorage> {
    /// Store over the real browser localStorage.
    pub fn browser() -> Self {
        Favorites::new(LocalStorage)
    }
}

impl<S: StorageBackend> Favorites<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Full current list, insertion order. Empty (and `Degraded`) when the
    /// store is unavailable or holds an unparseable payload; the corrupt
    /// bytes stay put until the next successful write overwrites them.
    pub fn list(&self) -> Outcome<Vec<RecipeSummary>> {
        match self.storage.get(FAVORITES_KEY) {
            Ok(None) => Outcome::Ok(Vec::new()),
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(list) => Outcome::Ok(list),
                Err(err) => {
                    log::warn!("treating unparseable favorites payload as empty: {err}");
                    Outcome::Degraded(Vec::new())
                }
            },
            Err(err) => {
                log::warn!("favorites read failed: {err}");
                Outcome::Degraded(Vec::new())
            }
        }
    }

    /// String-formatted ids of the current list; pure projection of `list`.
    pub fn ids(&self) -> Outcome<Vec<String>> {
        let out = self.list();
        let degraded = out.is_degraded();
        let ids = out.value().iter().map(|r| r.id.to_string()).collect();
        if degraded {
            Outcome::Degraded(ids)
        } else {
            Outcome::Ok(ids)
        }
    }

    pub fn contains(&self, id: impl Into<FavoriteKey>) -> bool {
        let FavoriteKey(id) = id.into();
        self.list().value().iter().any(|r| r.id == id)
    }

    /// Append `recipe` iff its id is absent. Repeated adds of the same id
    /// are no-ops and never overwrite the stored fields.
    pub fn add(&self, recipe: RecipeSummary) {
        let mut list = self.list().value();
        if list.iter().any(|r| r.id == recipe.id) {
            return;
        }
        list.push(recipe);
        self.persist(&list);
    }

    /// Rewrite the list without `id`. Absent ids are a no-op, not an error.
    pub fn remove(&self, id: impl Into<FavoriteKey>) {
        let FavoriteKey(id) = id.into();
        let mut list = self.list().value();
        list.retain(|r| r.id != id);
        self.persist(&list);
    }

    /// Flip the favorite status and return the *resulting* status.
    ///
    /// A bare id can only remove: when the id is not yet favorited there is
    /// no summary data to store, so the call logs an error, mutates nothing,
    /// and returns false. Callers that might be adding must pass a full
    /// summary.
    pub fn toggle(&self, input: impl Into<ToggleInput>) -> bool {
        if !self.available() {
            // No persistent device: nothing can become a favorite.
            return false;
        }
        match input.into() {
            ToggleInput::Full(recipe) => {
                if self.contains(recipe.id) {
                    self.remove(recipe.id);
                    false
                } else {
                    self.add(recipe);
                    true
                }
            }
            ToggleInput::Bare(key) => {
                if self.contains(key) {
                    self.remove(key);
                } else {
                    log::error!(
                        "cannot favorite recipe {} by bare id: full recipe data required",
                        key.0
                    );
                }
                false
            }
        }
    }

    fn available(&self) -> bool {
        !matches!(
            self.storage.get(FAVORITES_KEY),
            Err(StorageError::Unavailable)
        )
    }

    /// Write the full list back. Failures (quota, unavailable) are logged
    /// and swallowed; the mutation is simply not durably recorded.
    fn persist(&self, list: &[RecipeSummary]) {
        let payload = match serde_json::to_string(list) {
            Ok(payload) => payload,
            Err(err) => {
                log::error!("favorites serialization failed: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.set(FAVORITES_KEY, &payload) {
            log::error!("favorites write failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> Favorites<MemoryStorage> {
        Favorites::new(MemoryStorage::new())
    }

    fn recipe(id: i64, title: &str) -> RecipeSummary {
        RecipeSummary {
            id,
            title: title.to_string(),
            image: format!("img-{id}"),
            ready_in_minutes: None,
            servings: None,
        }
    }

    /// Backend with no persistent device at all.
    struct OfflineStorage;

    impl StorageBackend for OfflineStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    /// Backend that reads fine but rejects every write (quota exceeded).
    #[derive(Clone, Default)]
    struct FullStorage {
        inner: MemoryStorage,
    }

    impl StorageBackend for FullStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let favorites = store();
        favorites.add(recipe(1, "A"));
        favorites.add(recipe(1, "A"));

        assert_eq!(favorites.list().value(), vec![recipe(1, "A")]);
    }

    #[test]
    fn test_add_never_overwrites_existing_entry() {
        let favorites = store();
        favorites.add(recipe(1, "Original"));
        favorites.add(recipe(1, "Renamed"));
        favorites.add(recipe(2, "B"));

        let list = favorites.list().value();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].title, "Original");
        assert_eq!(list[1].id, 2);
    }

    #[test]
    fn test_toggle_oscillates() {
        let favorites = store();
        let r = recipe(7, "Soup");

        assert!(favorites.toggle(r.clone()));
        assert!(favorites.contains(7i64));

        assert!(!favorites.toggle(r.clone()));
        assert!(!favorites.contains(7i64));

        assert!(favorites.toggle(r));
        assert!(favorites.contains(7i64));
    }

    #[test]
    fn test_toggle_bare_id_cannot_add() {
        let favorites = store();

        assert!(!favorites.toggle(42i64));
        assert!(favorites.list().value().is_empty());
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let favorites = store();
        favorites.add(recipe(1, "A"));

        favorites.remove(99i64);
        assert_eq!(favorites.list().value(), vec![recipe(1, "A")]);
    }

    #[test]
    fn test_id_normalization() {
        let favorites = store();
        favorites.add(recipe(42, "Pie"));

        assert!(favorites.contains(42i64));
        assert!(favorites.contains("42"));
        assert!(!favorites.contains("not-a-number"));
        assert!(!favorites.contains("43"));
    }

    #[test]
    fn test_ids_are_string_formatted_in_order() {
        let favorites = store();
        favorites.add(recipe(10, "A"));
        favorites.add(recipe(3, "B"));

        assert_eq!(
            favorites.ids(),
            Outcome::Ok(vec!["10".to_string(), "3".to_string()])
        );
    }

    #[test]
    fn test_corrupt_payload_fails_open() {
        let backend = MemoryStorage::new();
        backend.set(FAVORITES_KEY, "{not json").expect("Seed failed");
        let favorites = Favorites::new(backend);

        let out = favorites.list();
        assert!(out.is_degraded());
        assert!(out.value().is_empty());
        assert!(!favorites.contains(1i64));
    }

    #[test]
    fn test_successful_write_replaces_corrupt_payload() {
        let backend = MemoryStorage::new();
        backend.set(FAVORITES_KEY, "{not json").expect("Seed failed");
        let favorites = Favorites::new(backend);

        favorites.add(recipe(5, "Fresh"));
        assert_eq!(favorites.list(), Outcome::Ok(vec![recipe(5, "Fresh")]));
    }

    #[test]
    fn test_unavailable_storage_degrades_to_empty_noop() {
        let favorites = Favorites::new(OfflineStorage);

        assert_eq!(favorites.list(), Outcome::Degraded(Vec::new()));
        assert!(!favorites.contains(1i64));
        favorites.add(recipe(1, "A"));
        favorites.remove(1i64);
        assert!(!favorites.toggle(recipe(1, "A")));
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let favorites = Favorites::new(FullStorage::default());

        // The toggle reports the intended status even though the write was
        // dropped; the next read exposes the inconsistency window.
        assert!(favorites.toggle(recipe(1, "A")));
        assert_eq!(favorites.list(), Outcome::Ok(Vec::new()));
    }

    #[test]
    fn test_cross_tab_overwrite_is_last_writer_wins() {
        // Known race, documented rather than merged: a full-list overwrite
        // from another tab silently discards this tab's addition.
        let backend = MemoryStorage::new();
        let favorites = Favorites::new(backend.clone());
        favorites.add(recipe(1, "Mine"));

        let other_tab = serde_json::to_string(&vec![recipe(2, "Theirs")]).expect("Encode failed");
        backend.set(FAVORITES_KEY, &other_tab).expect("Overwrite failed");

        assert_eq!(favorites.list(), Outcome::Ok(vec![recipe(2, "Theirs")]));
    }

    #[test]
    fn test_toggle_scenario() {
        let favorites = store();

        assert!(favorites.toggle(recipe(1, "A")));
        assert_eq!(favorites.list().value(), vec![recipe(1, "A")]);

        assert!(favorites.toggle(recipe(2, "B")));
        assert_eq!(
            favorites.ids(),
            Outcome::Ok(vec!["1".to_string(), "2".to_string()])
        );

        // Bare-id form: id 1 exists, so it is removed.
        assert!(!favorites.toggle(1i64));
        assert_eq!(favorites.ids(), Outcome::Ok(vec!["2".to_string()]));

        assert!(favorites.contains(2i64));
        favorites.remove(2i64);
        assert!(favorites.list().value().is_empty());
    }
}
