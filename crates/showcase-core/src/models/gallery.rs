use serde::{Deserialize, Deserializer, Serialize};

/// A sellable item as delivered by the gallery catalog.
///
/// Only `id` and `name` are guaranteed; everything else is defaulted when
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryProduct {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Price in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<GalleryImages>,
    /// Blank product shots supplied directly on some products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blank_images: Option<Vec<String>>,

    // Fulfilment integration fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_product_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "product_type_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub product_type: Option<ProductType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_sizes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_count: Option<u32>,
}

/// Nested image collections of a gallery product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryImages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blank_images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
}

/// Product line reported by the fulfilment integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Apparel,
    Accessories,
    Home,
    Business,
    Tech,
    Seasonal,
    Specialty,
    /// Any value outside the known product lines.
    #[serde(other)]
    Other,
}

impl ProductType {
    /// Parse a product line name; unknown names become [`ProductType::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "apparel" => ProductType::Apparel,
            "accessories" => ProductType::Accessories,
            "home" => ProductType::Home,
            "business" => ProductType::Business,
            "tech" => ProductType::Tech,
            "seasonal" => ProductType::Seasonal,
            "specialty" => ProductType::Specialty,
            _ => ProductType::Other,
        }
    }
}

/// An empty `product_type` is the same as none at all.
fn product_type_or_none<'de, D>(deserializer: D) -> Result<Option<ProductType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .filter(|name| !name.is_empty())
        .map(|name| ProductType::from_name(&name)))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub available: bool,
    #[serde(default)]
    pub options: VariantOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
}

impl GalleryProduct {
    /// Minimal product with only the required fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let product: GalleryProduct =
            serde_json::from_str(r#"{"id": "p1", "name": "Mug"}"#).unwrap();
        assert_eq!(product, GalleryProduct::new("p1", "Mug"));
    }

    #[test]
    fn test_deserialize_full() {
        let json = r##"{
            "id": "tee-01",
            "name": "Premium Tee",
            "image": "tee.png",
            "colors": ["#000000", "#ffffff"],
            "brand": "Acme",
            "category": "Shirts",
            "price": 2499,
            "tags": ["cotton"],
            "gallery": {"blank_images": ["blank.png"], "hero_image": "hero.png"},
            "product_type": "apparel",
            "variants": [
                {"id": "v1", "title": "Black / M", "price": 2499, "available": true,
                 "options": {"color": "Black", "size": "M"}}
            ],
            "available_sizes": ["S", "M", "L"],
            "inventory_count": 12
        }"##;
        let product: GalleryProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.product_type, Some(ProductType::Apparel));
        assert_eq!(
            product.variants.unwrap()[0].options.size.as_deref(),
            Some("M")
        );
        assert_eq!(
            product.gallery.unwrap().hero_image.as_deref(),
            Some("hero.png")
        );
        assert_eq!(product.inventory_count, Some(12));
    }

    #[test]
    fn test_unknown_product_type() {
        let product: GalleryProduct =
            serde_json::from_str(r#"{"id": "x", "name": "X", "product_type": "garden"}"#)
                .unwrap();
        assert_eq!(product.product_type, Some(ProductType::Other));
    }

    #[test]
    fn test_null_collections_are_accepted() {
        let product: GalleryProduct = serde_json::from_str(
            r#"{"id": "x", "name": "X", "variants": null, "available_sizes": null}"#,
        )
        .unwrap();
        assert_eq!(product.variants, None);
        assert_eq!(product.available_sizes, None);
    }

    #[test]
    fn test_empty_or_null_product_type_is_absent() {
        let product: GalleryProduct =
            serde_json::from_str(r#"{"id": "x", "name": "X", "product_type": ""}"#).unwrap();
        assert_eq!(product.product_type, None);

        let product: GalleryProduct =
            serde_json::from_str(r#"{"id": "x", "name": "X", "product_type": null}"#).unwrap();
        assert_eq!(product.product_type, None);
    }
}
