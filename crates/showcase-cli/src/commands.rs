use std::path::Path;

use clap::Subcommand;
use serde_json::Value;

use showcase_core::card::CardFeatures;
use showcase_core::config::AppConfig;
use showcase_core::models::{Component, GalleryProduct};
use showcase_core::preferences::{PreferenceKey, PreferencesStore};
use showcase_core::sizing::{self, GridLayout, SizeKey};
use showcase_core::storage::FileStore;
use showcase_core::theme::{ColorTheme, ThemeState, ThemeStore};
use showcase_core::{gallery_to_component, ShowcaseError};

#[derive(Debug, Subcommand)]
pub enum ThemeAction {
    /// Print the stored theme without changing anything.
    Show,
    /// Switch the color theme (gallery | industrial).
    Set { theme: ColorTheme },
    /// Toggle dark mode.
    Dark,
}

#[derive(Debug, Subcommand)]
pub enum PrefsAction {
    /// Flip one toggle, e.g. `show-buy-button`.
    Toggle { key: PreferenceKey },
    /// Restore every toggle to its default.
    Reset,
}

fn open_store(config: &AppConfig) -> Result<FileStore, ShowcaseError> {
    FileStore::open(config.storage_path())
}

fn print_json(value: &impl serde::Serialize) -> Result<(), ShowcaseError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn sizes(size: Option<i64>) -> Result<(), ShowcaseError> {
    match size {
        Some(n) => {
            let key = SizeKey::try_from(n)?;
            print_json(&GridLayout::for_size(key))
        }
        None => {
            println!("{:<8} {:>6} {:>8} {:>6} {:>7}", "size", "width", "columns", "image", "corner");
            for key in sizing::all_sizes() {
                println!(
                    "{:<8} {:>6} {:>8} {:>6} {:>7}",
                    key.to_string(),
                    sizing::card_width(key),
                    sizing::optimal_columns(key),
                    sizing::image_box_size(key),
                    sizing::corner_offset(key),
                );
            }
            Ok(())
        }
    }
}

pub fn nearest(pixels: f64) -> Result<(), ShowcaseError> {
    let key = sizing::size_from_pixels(pixels);
    println!("{} ({}px)", key, key.dimension());
    Ok(())
}

pub fn adapt(file: &Path) -> Result<(), ShowcaseError> {
    let content = std::fs::read_to_string(file)?;
    let components = adapt_json(&content)?;
    tracing::info!(count = components.len(), file = %file.display(), "Adapted products");
    print_json(&components)
}

/// Accepts a single product object or an array of them.
fn adapt_json(content: &str) -> Result<Vec<Component>, ShowcaseError> {
    let products: Vec<GalleryProduct> = match serde_json::from_str::<Value>(content)? {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<_, serde_json::Error>>()?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(products.iter().map(gallery_to_component).collect())
}

pub fn theme(action: Option<ThemeAction>) -> Result<(), ShowcaseError> {
    let config = AppConfig::load()?;
    let mut theme = ThemeStore::new(open_store(&config)?);
    match action.unwrap_or(ThemeAction::Show) {
        ThemeAction::Show => {}
        ThemeAction::Set { theme: color } => theme.set_color_theme(color),
        ThemeAction::Dark => theme.toggle_dark_mode(),
    }
    print_json(&theme_report(theme.state()))
}

fn theme_report(state: ThemeState) -> Value {
    serde_json::json!({
        "state": state,
        "classes": state.classes(),
    })
}

pub fn prefs(action: Option<PrefsAction>) -> Result<(), ShowcaseError> {
    let config = AppConfig::load()?;
    let mut prefs = PreferencesStore::new(open_store(&config)?);
    match action {
        Some(PrefsAction::Toggle { key }) => prefs.toggle(key),
        Some(PrefsAction::Reset) => prefs.reset(),
        None => {}
    }
    let current = prefs.current();
    let features = CardFeatures::resolve(config.display.default_size, &current);
    print_json(&serde_json::json!({
        "preferences": current,
        "default_size": config.display.default_size,
        "features": features,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapt_single_object() {
        let components = adapt_json(r#"{"id": "a", "name": "A", "brand": "Acme"}"#).unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].consumer_tagline.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_adapt_array() {
        let components =
            adapt_json(r#"[{"id": "a", "name": "A"}, {"id": "b", "name": "B", "price": 100}]"#)
                .unwrap();
        assert_eq!(components.len(), 2);
        assert_eq!(components[1].price_enterprise, 750.0);
    }

    #[test]
    fn test_adapt_rejects_missing_name() {
        assert!(matches!(
            adapt_json(r#"{"id": "a"}"#),
            Err(ShowcaseError::Json(_))
        ));
    }

    #[test]
    fn test_sizes_rejects_invalid_key() {
        assert!(matches!(sizes(Some(0)), Err(ShowcaseError::InvalidSize(0))));
    }

    #[test]
    fn test_theme_report_lists_classes() {
        let report = theme_report(ThemeState {
            color_theme: ColorTheme::Industrial,
            dark_mode: true,
        });
        assert_eq!(report["classes"], serde_json::json!(["industrial", "dark"]));
        assert_eq!(report["state"]["color_theme"], "industrial");
    }
}
