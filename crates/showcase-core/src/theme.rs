//! Color theme store: gallery vs industrial palette plus dark mode.
//!
//! State is persisted under `colorTheme` / `darkMode` and mirrored onto a
//! root class list (`industrial`, `dark`) every time it changes.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::storage::KeyValueStore;

const COLOR_THEME_KEY: &str = "colorTheme";
const DARK_MODE_KEY: &str = "darkMode";

/// Every class the store manages on the root element.
const THEME_CLASSES: [&str; 3] = ["gallery", "industrial", "dark"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Gallery,
    Industrial,
}

impl ColorTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTheme::Gallery => "gallery",
            ColorTheme::Industrial => "industrial",
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gallery" => Ok(ColorTheme::Gallery),
            "industrial" => Ok(ColorTheme::Industrial),
            other => Err(format!("unknown color theme: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeState {
    pub color_theme: ColorTheme,
    pub dark_mode: bool,
}

impl ThemeState {
    /// Classes the root element carries for this state.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.color_theme == ColorTheme::Industrial {
            classes.push("industrial");
        }
        if self.dark_mode {
            classes.push("dark");
        }
        classes
    }
}

/// Partial update for [`ThemeStore::set_theme`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemePatch {
    pub color_theme: Option<ColorTheme>,
    pub dark_mode: Option<bool>,
}

/// Class list of the element the theme is applied to.
pub trait ClassList {
    fn add(&mut self, class: &str);
    fn remove(&mut self, class: &str);
}

/// Headless class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet(BTreeSet<String>);

impl ClassSet {
    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl ClassList for ClassSet {
    fn add(&mut self, class: &str) {
        self.0.insert(class.to_string());
    }

    fn remove(&mut self, class: &str) {
        self.0.remove(class);
    }
}

pub struct ThemeStore<S, C = ClassSet> {
    store: S,
    target: C,
    tx: watch::Sender<ThemeState>,
}

impl<S: KeyValueStore> ThemeStore<S, ClassSet> {
    pub fn new(store: S) -> Self {
        Self::with_target(store, ClassSet::default())
    }
}

impl<S: KeyValueStore, C: ClassList> ThemeStore<S, C> {
    /// Build the store, reading the initial state from `store`.
    pub fn with_target(store: S, target: C) -> Self {
        let initial = load_state(&store);
        let (tx, _rx) = watch::channel(initial);
        Self { store, target, tx }
    }

    pub fn state(&self) -> ThemeState {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeState> {
        self.tx.subscribe()
    }

    pub fn target(&self) -> &C {
        &self.target
    }

    /// Apply the current state on startup.
    pub fn init(&mut self) {
        self.commit(self.state());
    }

    pub fn set_color_theme(&mut self, color_theme: ColorTheme) {
        let state = ThemeState {
            color_theme,
            ..self.state()
        };
        self.commit(state);
    }

    pub fn toggle_dark_mode(&mut self) {
        let current = self.state();
        self.commit(ThemeState {
            dark_mode: !current.dark_mode,
            ..current
        });
    }

    pub fn set_theme(&mut self, patch: ThemePatch) {
        let current = self.state();
        self.commit(ThemeState {
            color_theme: patch.color_theme.unwrap_or(current.color_theme),
            dark_mode: patch.dark_mode.unwrap_or(current.dark_mode),
        });
    }

    fn commit(&mut self, state: ThemeState) {
        self.apply(state);
        self.tx.send_replace(state);
    }

    fn apply(&mut self, state: ThemeState) {
        for class in THEME_CLASSES {
            self.target.remove(class);
        }
        for class in state.classes() {
            self.target.add(class);
        }

        tracing::debug!(theme = %state.color_theme, dark = state.dark_mode, "Applied theme");

        if let Err(e) = self.store.set(COLOR_THEME_KEY, state.color_theme.as_str()) {
            tracing::warn!("Failed to save color theme: {e}");
        }
        let dark = if state.dark_mode { "true" } else { "false" };
        if let Err(e) = self.store.set(DARK_MODE_KEY, dark) {
            tracing::warn!("Failed to save dark mode: {e}");
        }
    }
}

fn load_state(store: &impl KeyValueStore) -> ThemeState {
    let read = |key: &str| match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to read {key}: {e}");
            None
        }
    };

    ThemeState {
        color_theme: read(COLOR_THEME_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default(),
        dark_mode: read(DARK_MODE_KEY).as_deref() == Some("true"),
    }
}
