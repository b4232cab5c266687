use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized display record rendered by a flip card.
///
/// Prices are in cents. Fields the adapter does not synthesize stay `None`
/// and are omitted from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // Audience-specific naming.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fintech_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_tagline: Option<String>,

    pub price_individual: f64,
    pub price_team: f64,
    pub price_enterprise: f64,

    pub category: ComponentCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flip_card_theme: Option<FlipCardTheme>,
    /// Gradient descriptor: a CSS `linear-gradient(...)` or utility classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flip_card_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flip_card_size: Option<FlipCardSize>,

    #[serde(
        default,
        rename = "titleFont",
        skip_serializing_if = "Option::is_none"
    )]
    pub title_font: Option<String>,
    #[serde(
        default,
        rename = "titleWeight",
        skip_serializing_if = "Option::is_none"
    )]
    pub title_weight: Option<u16>,
    #[serde(
        default,
        rename = "taglineFont",
        skip_serializing_if = "Option::is_none"
    )]
    pub tagline_font: Option<String>,
    #[serde(
        default,
        rename = "taglineWeight",
        skip_serializing_if = "Option::is_none"
    )]
    pub tagline_weight: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_features: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Component {
    /// Price in cents for a purchase tier.
    pub fn price(&self, tier: PriceTier) -> f64 {
        match tier {
            PriceTier::Individual => self.price_individual,
            PriceTier::Team => self.price_team,
            PriceTier::Enterprise => self.price_enterprise,
        }
    }
}

/// Purchase tier offered on the back of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Individual,
    Team,
    Enterprise,
}

impl PriceTier {
    pub const ALL: [PriceTier; 3] = [PriceTier::Individual, PriceTier::Team, PriceTier::Enterprise];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentCategory {
    PaymentProcessing,
    Gallery,
    ColorIntelligence,
    BlockchainIntegration,
    UiComponents,
    DataVisualization,
    Authentication,
    Analytics,
    DeveloperTools,
    Apparel,
    Accessories,
    HomeLiving,
    BusinessOffice,
    TechElectronics,
    SeasonalHoliday,
    SpecialtyItems,
}

impl ComponentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PaymentProcessing => "payment-processing",
            Self::Gallery => "gallery",
            Self::ColorIntelligence => "color-intelligence",
            Self::BlockchainIntegration => "blockchain-integration",
            Self::UiComponents => "ui-components",
            Self::DataVisualization => "data-visualization",
            Self::Authentication => "authentication",
            Self::Analytics => "analytics",
            Self::DeveloperTools => "developer-tools",
            Self::Apparel => "apparel",
            Self::Accessories => "accessories",
            Self::HomeLiving => "home-living",
            Self::BusinessOffice => "business-office",
            Self::TechElectronics => "tech-electronics",
            Self::SeasonalHoliday => "seasonal-holiday",
            Self::SpecialtyItems => "specialty-items",
        }
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipCardTheme {
    Professional,
    Gradient,
    Gallery,
    Wallet,
    Nft,
    Minimal,
    Premium,
    Api,
}

/// Named aspect presets a card can be exported at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipCardSize {
    Square,
    Story,
    Pinterest,
    Twitter,
    Standard,
    Compact,
    Hero,
    Mobile,
    Desktop,
    Coinbase,
    Opensea,
    Github,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_kebab_case() {
        let json = serde_json::to_string(&ComponentCategory::TechElectronics).unwrap();
        assert_eq!(json, "\"tech-electronics\"");
        assert_eq!(ComponentCategory::HomeLiving.to_string(), "home-living");
    }

    #[test]
    fn test_deserialize_external_component() {
        let json = r#"{
            "id": "c1",
            "name": "Checkout",
            "price_individual": 100,
            "price_team": 250,
            "price_enterprise": 750,
            "category": "payment-processing",
            "flip_card_theme": "wallet",
            "titleWeight": 700
        }"#;
        let component: Component = serde_json::from_str(json).unwrap();
        assert_eq!(component.category, ComponentCategory::PaymentProcessing);
        assert_eq!(component.flip_card_theme, Some(FlipCardTheme::Wallet));
        assert_eq!(component.title_weight, Some(700));
        assert!(component.tags.is_empty());
        assert_eq!(component.price(PriceTier::Team), 250.0);
    }
}
