//! Gallery product → flip-card component conversion.
//!
//! The gallery shape is loose; every field the component needs but the
//! product may lack is synthesized here. Conversion never fails.

use crate::models::{Component, ComponentCategory, FlipCardTheme, GalleryProduct, ProductType};

/// Price in cents used when a product has none.
pub const DEFAULT_PRICE: f64 = 19900.0;
pub const TEAM_MULTIPLIER: f64 = 2.5;
pub const ENTERPRISE_MULTIPLIER: f64 = 7.5;

pub const FALLBACK_TAGLINE: &str = "Professional Product";
pub const DEFAULT_GRADIENT: &str = "from-cyan-400 to-blue-500";
/// Second stop for single-color products.
pub const ACCENT_COLOR: &str = "#22d3ee";

const TECH_STACK: [&str; 3] = ["svelte", "color-intelligence", "gallery"];

/// Build the display component for a gallery product.
pub fn gallery_to_component(product: &GalleryProduct) -> Component {
    let price = resolve_price(product.price);
    let category = category_for(product);

    tracing::debug!(id = %product.id, %category, price, "Adapted gallery product");

    Component {
        id: product.id.clone(),
        name: product.name.clone(),
        slug: None,
        tagline: None,
        description: None,
        formal_name: None,
        fintech_name: None,
        api_name: None,
        consumer_tagline: Some(tagline_for(product)),
        price_individual: price,
        price_team: price * TEAM_MULTIPLIER,
        price_enterprise: price * ENTERPRISE_MULTIPLIER,
        category,
        tags: product.tags.clone().unwrap_or_default(),
        keywords: None,
        tech_stack: Some(TECH_STACK.iter().map(|s| s.to_string()).collect()),
        flip_card_theme: Some(FlipCardTheme::Gallery),
        flip_card_color: Some(gradient_for(product.colors.as_deref())),
        flip_card_size: None,
        title_font: None,
        title_weight: None,
        tagline_font: None,
        tagline_weight: None,
        colors: product.colors.clone(),
        image: best_image(product),
        developer_features: None,
        consumer_features: None,
        rating: None,
        download_count: None,
        featured: None,
        is_active: None,
        is_published: None,
        created_at: None,
    }
}

impl From<&GalleryProduct> for Component {
    fn from(product: &GalleryProduct) -> Self {
        gallery_to_component(product)
    }
}

/// Treat empty strings like missing ones.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn tagline_for(product: &GalleryProduct) -> String {
    match (non_empty(&product.brand), non_empty(&product.category)) {
        (Some(brand), Some(category)) => format!("{brand} {category}"),
        (Some(brand), None) => brand.to_string(),
        (None, Some(category)) => category.to_string(),
        (None, None) => FALLBACK_TAGLINE.to_string(),
    }
}

/// Only the first two colors are ever used.
fn gradient_for(colors: Option<&[String]>) -> String {
    match colors.unwrap_or_default() {
        [first, second, ..] => format!("linear-gradient(135deg, {first}, {second})"),
        [only] => format!("linear-gradient(135deg, {only}, {ACCENT_COLOR})"),
        [] => DEFAULT_GRADIENT.to_string(),
    }
}

fn category_for(product: &GalleryProduct) -> ComponentCategory {
    if let Some(product_type) = product.product_type {
        return match product_type {
            ProductType::Apparel => ComponentCategory::Apparel,
            ProductType::Accessories => ComponentCategory::Accessories,
            ProductType::Home => ComponentCategory::HomeLiving,
            ProductType::Business => ComponentCategory::BusinessOffice,
            ProductType::Tech => ComponentCategory::TechElectronics,
            ProductType::Seasonal => ComponentCategory::SeasonalHoliday,
            ProductType::Specialty => ComponentCategory::SpecialtyItems,
            ProductType::Other => ComponentCategory::Gallery,
        };
    }

    let text = product
        .category
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();
    if text.contains("payment") {
        ComponentCategory::PaymentProcessing
    } else if text.contains("auth") {
        ComponentCategory::Authentication
    } else {
        ComponentCategory::Gallery
    }
}

/// gallery.blank_images[0], then blank_images[0], then image.
fn best_image(product: &GalleryProduct) -> Option<String> {
    let nested = product
        .gallery
        .as_ref()
        .and_then(|g| g.blank_images.as_deref())
        .and_then(<[String]>::first);
    let direct = product.blank_images.as_deref().and_then(<[String]>::first);

    nested.or(direct).cloned().or_else(|| product.image.clone())
}

/// Zero and NaN count as "no price".
fn resolve_price(price: Option<f64>) -> f64 {
    match price {
        Some(p) if p != 0.0 && !p.is_nan() => p,
        _ => DEFAULT_PRICE,
    }
}
