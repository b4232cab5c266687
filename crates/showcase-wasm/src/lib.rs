use wasm_bindgen::prelude::*;

use showcase_core::models::GalleryProduct;
use showcase_core::sizing::{self, GridLayout, SizeKey};

fn size_key(size: u32) -> Result<SizeKey, JsError> {
    SizeKey::try_from(i64::from(size)).map_err(|e| JsError::new(&e.to_string()))
}

#[wasm_bindgen(js_name = isValidSize)]
pub fn is_valid_size(size: f64) -> bool {
    sizing::is_valid_size(size)
}

#[wasm_bindgen(js_name = getCardWidth)]
pub fn card_width(size: u32) -> Result<u32, JsError> {
    size_key(size).map(sizing::card_width)
}

#[wasm_bindgen(js_name = getOptimalColumns)]
pub fn optimal_columns(size: u32) -> Result<u32, JsError> {
    size_key(size).map(sizing::optimal_columns)
}

#[wasm_bindgen(js_name = getSizeFromPixels)]
pub fn size_from_pixels(pixels: f64) -> u8 {
    sizing::size_from_pixels(pixels).get()
}

/// Full layout for a size key as a JSON string.
#[wasm_bindgen(js_name = getGridLayout)]
pub fn grid_layout(size: u32) -> Result<String, JsError> {
    let layout = GridLayout::for_size(size_key(size)?);
    serde_json::to_string(&layout).map_err(|e| JsError::new(&e.to_string()))
}

/// Convert a gallery product (JSON) into a component (JSON).
#[wasm_bindgen(js_name = galleryToComponent)]
pub fn gallery_to_component(product_json: &str) -> Result<String, JsError> {
    let product: GalleryProduct =
        serde_json::from_str(product_json).map_err(|e| JsError::new(&e.to_string()))?;
    let component = showcase_core::gallery_to_component(&product);
    serde_json::to_string(&component).map_err(|e| JsError::new(&e.to_string()))
}
