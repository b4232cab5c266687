pub mod adapter;
pub mod card;
pub mod config;
pub mod error;
pub mod models;
pub mod preferences;
pub mod sizing;
pub mod storage;
pub mod theme;

pub use adapter::gallery_to_component;
pub use error::ShowcaseError;
pub use sizing::SizeKey;
