//! Global flip-card preferences shared by every card on the page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::ShowcaseError;
use crate::storage::KeyValueStore;

const STORAGE_KEY: &str = "flipcard-preferences";

/// Display toggles. Missing fields in stored JSON fall back to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlipCardPreferences {
    pub show_palette: bool,
    pub show_tags: bool,
    pub show_toolbar: bool,
    pub show_buy_button: bool,
    pub show_tooltips: bool,
}

impl Default for FlipCardPreferences {
    fn default() -> Self {
        Self {
            show_palette: true,
            show_tags: true,
            show_toolbar: true,
            show_buy_button: true,
            show_tooltips: true,
        }
    }
}

/// Names one toggle of [`FlipCardPreferences`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    ShowPalette,
    ShowTags,
    ShowToolbar,
    ShowBuyButton,
    ShowTooltips,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 5] = [
        PreferenceKey::ShowPalette,
        PreferenceKey::ShowTags,
        PreferenceKey::ShowToolbar,
        PreferenceKey::ShowBuyButton,
        PreferenceKey::ShowTooltips,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::ShowPalette => "showPalette",
            PreferenceKey::ShowTags => "showTags",
            PreferenceKey::ShowToolbar => "showToolbar",
            PreferenceKey::ShowBuyButton => "showBuyButton",
            PreferenceKey::ShowTooltips => "showTooltips",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceKey {
    type Err = String;

    /// Accepts the camelCase storage name or a kebab-case alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "showPalette" | "show-palette" => Ok(PreferenceKey::ShowPalette),
            "showTags" | "show-tags" => Ok(PreferenceKey::ShowTags),
            "showToolbar" | "show-toolbar" => Ok(PreferenceKey::ShowToolbar),
            "showBuyButton" | "show-buy-button" => Ok(PreferenceKey::ShowBuyButton),
            "showTooltips" | "show-tooltips" => Ok(PreferenceKey::ShowTooltips),
            other => Err(format!("unknown preference: {other}")),
        }
    }
}

impl FlipCardPreferences {
    pub fn get(&self, key: PreferenceKey) -> bool {
        match key {
            PreferenceKey::ShowPalette => self.show_palette,
            PreferenceKey::ShowTags => self.show_tags,
            PreferenceKey::ShowToolbar => self.show_toolbar,
            PreferenceKey::ShowBuyButton => self.show_buy_button,
            PreferenceKey::ShowTooltips => self.show_tooltips,
        }
    }

    fn slot(&mut self, key: PreferenceKey) -> &mut bool {
        match key {
            PreferenceKey::ShowPalette => &mut self.show_palette,
            PreferenceKey::ShowTags => &mut self.show_tags,
            PreferenceKey::ShowToolbar => &mut self.show_toolbar,
            PreferenceKey::ShowBuyButton => &mut self.show_buy_button,
            PreferenceKey::ShowTooltips => &mut self.show_tooltips,
        }
    }

    fn merge(mut self, patch: &PreferencesPatch) -> Self {
        for key in PreferenceKey::ALL {
            if let Some(value) = patch.get(key) {
                *self.slot(key) = value;
            }
        }
        self
    }
}

/// Partial update for [`PreferencesStore::set`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreferencesPatch {
    pub show_palette: Option<bool>,
    pub show_tags: Option<bool>,
    pub show_toolbar: Option<bool>,
    pub show_buy_button: Option<bool>,
    pub show_tooltips: Option<bool>,
}

impl PreferencesPatch {
    fn get(&self, key: PreferenceKey) -> Option<bool> {
        match key {
            PreferenceKey::ShowPalette => self.show_palette,
            PreferenceKey::ShowTags => self.show_tags,
            PreferenceKey::ShowToolbar => self.show_toolbar,
            PreferenceKey::ShowBuyButton => self.show_buy_button,
            PreferenceKey::ShowTooltips => self.show_tooltips,
        }
    }
}

/// Preferences backed by a key/value store. Persistence errors are logged,
/// never returned.
pub struct PreferencesStore<S> {
    store: S,
    tx: watch::Sender<FlipCardPreferences>,
}

impl<S: KeyValueStore> PreferencesStore<S> {
    pub fn new(store: S) -> Self {
        let initial = load_preferences(&store);
        let (tx, _rx) = watch::channel(initial);
        Self { store, tx }
    }

    pub fn current(&self) -> FlipCardPreferences {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<FlipCardPreferences> {
        self.tx.subscribe()
    }

    pub fn toggle(&mut self, key: PreferenceKey) {
        let mut prefs = self.current();
        let value = !prefs.get(key);
        *prefs.slot(key) = value;
        tracing::debug!(%key, value = prefs.get(key), "Toggled preference");
        self.save(prefs);
    }

    pub fn set(&mut self, patch: PreferencesPatch) {
        let prefs = self.current().merge(&patch);
        self.save(prefs);
    }

    /// Restore defaults and forget the stored value.
    pub fn reset(&mut self) {
        self.tx.send_replace(FlipCardPreferences::default());
        if let Err(e) = self.store.remove(STORAGE_KEY) {
            tracing::warn!("Failed to clear FlipCard preferences: {e}");
        }
    }

    fn save(&mut self, prefs: FlipCardPreferences) {
        self.tx.send_replace(prefs);
        let result = serde_json::to_string(&prefs)
            .map_err(ShowcaseError::from)
            .and_then(|json| self.store.set(STORAGE_KEY, &json));
        if let Err(e) = result {
            tracing::warn!("Failed to save FlipCard preferences: {e}");
        }
    }
}

fn load_preferences(store: &impl KeyValueStore) -> FlipCardPreferences {
    let stored = match store.get(STORAGE_KEY) {
        Ok(Some(json)) => json,
        Ok(None) => return FlipCardPreferences::default(),
        Err(e) => {
            tracing::warn!("Failed to load FlipCard preferences: {e}");
            return FlipCardPreferences::default();
        }
    };
    match serde_json::from_str(&stored) {
        Ok(prefs) => prefs,
        Err(e) => {
            tracing::warn!("Failed to load FlipCard preferences: {e}");
            FlipCardPreferences::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_all_on() {
        let prefs = PreferencesStore::new(MemoryStore::new()).current();
        assert!(PreferenceKey::ALL.iter().all(|k| prefs.get(*k)));
    }

    #[test]
    fn test_stored_fields_merge_over_defaults() {
        let mut store = MemoryStore::new();
        store
            .set(STORAGE_KEY, r#"{"showTags": false, "unknown": 1}"#)
            .unwrap();
        let prefs = PreferencesStore::new(store).current();
        assert!(!prefs.show_tags);
        assert!(prefs.show_palette);
        assert!(prefs.show_tooltips);
    }

    #[test]
    fn test_malformed_json_uses_defaults() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "{oops").unwrap();
        let prefs = PreferencesStore::new(store).current();
        assert_eq!(prefs, FlipCardPreferences::default());
    }

    #[test]
    fn test_toggle_persists() {
        let mut prefs = PreferencesStore::new(MemoryStore::new());
        prefs.toggle(PreferenceKey::ShowBuyButton);
        assert!(!prefs.current().show_buy_button);

        let json = prefs.store.get(STORAGE_KEY).unwrap().unwrap();
        let saved: FlipCardPreferences = serde_json::from_str(&json).unwrap();
        assert!(!saved.show_buy_button);
        assert!(json.contains("\"showBuyButton\":false"));
    }

    #[test]
    fn test_set_partial() {
        let mut prefs = PreferencesStore::new(MemoryStore::new());
        prefs.set(PreferencesPatch {
            show_palette: Some(false),
            show_tooltips: Some(false),
            ..Default::default()
        });
        let current = prefs.current();
        assert!(!current.show_palette);
        assert!(!current.show_tooltips);
        assert!(current.show_toolbar);
    }

    #[test]
    fn test_reset_clears_storage() {
        let mut prefs = PreferencesStore::new(MemoryStore::new());
        prefs.toggle(PreferenceKey::ShowTags);
        prefs.reset();
        assert_eq!(prefs.current(), FlipCardPreferences::default());
        assert_eq!(prefs.store.get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_subscriber_notified() {
        let mut prefs = PreferencesStore::new(MemoryStore::new());
        let rx = prefs.subscribe();
        prefs.toggle(PreferenceKey::ShowToolbar);
        assert!(!rx.borrow().show_toolbar);
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!(
            "show-buy-button".parse::<PreferenceKey>().unwrap(),
            PreferenceKey::ShowBuyButton
        );
        assert_eq!(
            "showPalette".parse::<PreferenceKey>().unwrap(),
            PreferenceKey::ShowPalette
        );
        assert!("showEverything".parse::<PreferenceKey>().is_err());
    }
}
