mod component;
mod gallery;

pub use component::*;
pub use gallery::*;
