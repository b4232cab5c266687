//! Flip-card model: which affordances a card shows, the events it emits,
//! and the built-in card theme presets.

use serde::{Deserialize, Serialize};

use crate::models::{Component, PriceTier};
use crate::preferences::FlipCardPreferences;
use crate::sizing::SizeKey;

/// Affordances actually shown on a card after combining the size gates with
/// the user's preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFeatures {
    pub buy_button: bool,
    pub toolbar: bool,
    pub color_palette: bool,
    pub corner_buttons: bool,
    pub tags: bool,
    pub tooltips: bool,
}

impl CardFeatures {
    pub fn resolve(size: SizeKey, prefs: &FlipCardPreferences) -> Self {
        Self {
            buy_button: size.show_buy_button() && prefs.show_buy_button,
            toolbar: size.show_toolbar() && prefs.show_toolbar,
            color_palette: size.show_color_palette() && prefs.show_palette,
            corner_buttons: size.show_corner_buttons(),
            tags: prefs.show_tags,
            tooltips: prefs.show_tooltips,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSide {
    Front,
    Back,
}

/// Events a flip card emits to its host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FlipCardEvent {
    Flip {
        is_flipped: bool,
        product_id: String,
    },
    ColorSelect {
        color: String,
        product_id: String,
    },
    AddToCart {
        component: Box<Component>,
        count: u32,
    },
    Love {
        component: Box<Component>,
        is_loved: bool,
    },
    BuyNow {
        component: Box<Component>,
        tier: PriceTier,
    },
}

impl FlipCardEvent {
    /// Id of the product the event refers to.
    pub fn product_id(&self) -> &str {
        match self {
            FlipCardEvent::Flip { product_id, .. }
            | FlipCardEvent::ColorSelect { product_id, .. } => product_id,
            FlipCardEvent::AddToCart { component, .. }
            | FlipCardEvent::Love { component, .. }
            | FlipCardEvent::BuyNow { component, .. } => &component.id,
        }
    }

    pub fn side(&self) -> Option<CardSide> {
        match self {
            FlipCardEvent::Flip { is_flipped: true, .. } => Some(CardSide::Back),
            FlipCardEvent::Flip { .. } => Some(CardSide::Front),
            _ => None,
        }
    }

    /// Cents charged by a purchase event, if any.
    pub fn amount(&self) -> Option<f64> {
        match self {
            FlipCardEvent::BuyNow { component, tier } => Some(component.price(*tier)),
            FlipCardEvent::AddToCart { component, count } => {
                Some(component.price(PriceTier::Individual) * f64::from(*count))
            }
            _ => None,
        }
    }
}

/// Colors of a built-in card theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardThemePreset {
    pub name: &'static str,
    pub gradient: &'static str,
    pub card_bg: &'static str,
    pub text_color: &'static str,
}

pub const DEFAULT_CARD_THEMES: [CardThemePreset; 3] = [
    CardThemePreset {
        name: "professional",
        gradient: "from-cyan-400 to-blue-500",
        card_bg: "#000000",
        text_color: "#ffffff",
    },
    CardThemePreset {
        name: "wallet",
        gradient: "from-orange-400 to-red-500",
        card_bg: "#000000",
        text_color: "#ffffff",
    },
    CardThemePreset {
        name: "neon",
        gradient: "from-purple-500 to-pink-500",
        card_bg: "#000000",
        text_color: "#ffffff",
    },
];

pub fn find_card_theme(name: &str) -> Option<&'static CardThemePreset> {
    DEFAULT_CARD_THEMES.iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::gallery_to_component;
    use crate::models::GalleryProduct;

    #[test]
    fn test_features_follow_size_gates() {
        let prefs = FlipCardPreferences::default();

        let small = CardFeatures::resolve(SizeKey::Small, &prefs);
        assert!(!small.buy_button);
        assert!(!small.toolbar);
        assert!(!small.corner_buttons);
        assert!(!small.color_palette);
        assert!(small.tags);

        let compact = CardFeatures::resolve(SizeKey::Compact, &prefs);
        assert!(compact.buy_button);
        assert!(!compact.color_palette);

        let baseline = CardFeatures::resolve(SizeKey::Baseline, &prefs);
        assert!(baseline.color_palette);
    }

    #[test]
    fn test_preferences_can_hide_gated_features() {
        let prefs = FlipCardPreferences {
            show_buy_button: false,
            show_palette: false,
            ..Default::default()
        };
        let features = CardFeatures::resolve(SizeKey::Mega, &prefs);
        assert!(!features.buy_button);
        assert!(!features.color_palette);
        assert!(features.toolbar);
        assert!(features.corner_buttons);
    }

    #[test]
    fn test_buy_now_amount() {
        let mut product = GalleryProduct::new("p9", "Poster");
        product.price = Some(1000.0);
        let component = Box::new(gallery_to_component(&product));

        let event = FlipCardEvent::BuyNow {
            component: component.clone(),
            tier: PriceTier::Enterprise,
        };
        assert_eq!(event.amount(), Some(7500.0));
        assert_eq!(event.product_id(), "p9");

        let cart = FlipCardEvent::AddToCart { component, count: 3 };
        assert_eq!(cart.amount(), Some(3000.0));
    }

    #[test]
    fn test_flip_side_and_serialization() {
        let event = FlipCardEvent::Flip {
            is_flipped: true,
            product_id: "p1".into(),
        };
        assert_eq!(event.side(), Some(CardSide::Back));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "flip");
        assert_eq!(json["product_id"], "p1");
    }

    #[test]
    fn test_card_theme_lookup() {
        assert_eq!(
            find_card_theme("wallet").map(|t| t.gradient),
            Some("from-orange-400 to-red-500")
        );
        assert!(find_card_theme("solid").is_none());
    }
}
