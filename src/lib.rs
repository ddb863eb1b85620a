//! Library definitions.
//!
//! Exports the token generator, its configuration types, and the render
//! surface abstraction with the bundled raster adapter.

pub mod config;
pub mod generator;
pub mod render;
pub mod surface;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use config::{Result, Settings, TokenError, TokenOptions};
pub use generator::TokenGenerator;
pub use render::layout::GlyphPlacement;
pub use surface::{FontFamily, RasterCanvas, RenderSurface};
