//! Token rendering.
//!
//! Color selection, token sampling, glyph layout, noise overlays and the
//! pipeline that runs one render pass.

pub mod color;
pub mod layout;
pub mod noise;
pub mod pipeline;
pub mod token;

pub use layout::{GlyphLayout, GlyphPlacement};
