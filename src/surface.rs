//! Render surfaces.
//!
//! The narrow drawing capability the renderer depends on, plus the
//! bundled raster adapter backed by an in-memory RGB image.

pub mod raster;

use image::Rgb;
use rand::Rng;

use crate::config::Result;
use crate::render::layout::GlyphPlacement;

pub use raster::RasterCanvas;

/// Display font families available to glyph layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Sans,
    Serif,
    Mono,
}

impl FontFamily {
    /// Every available family, in display order.
    pub const ALL: [Self; 3] = [Self::Sans, Self::Serif, Self::Mono];

    /// Picks a family uniformly at random.
    pub fn pick(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Drawing capability required by the render pipeline.
///
/// Dimensions are fixed for the lifetime of one render pass. Every
/// drawing primitive may fail; a failure aborts the pass that issued it
/// and leaves the surface partially drawn.
pub trait RenderSurface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Fills the whole surface with one color.
    fn fill(&mut self, color: Rgb<u8>) -> Result<()>;

    /// Draws one rotated glyph at its computed placement.
    fn draw_glyph(&mut self, ch: char, placement: &GlyphPlacement) -> Result<()>;

    /// Strokes a line segment; endpoints may lie outside the bounds.
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb<u8>) -> Result<()>;

    /// Fills a 1px dot centered at `center`.
    fn fill_dot(&mut self, center: (f32, f32), color: Rgb<u8>) -> Result<()>;
}
