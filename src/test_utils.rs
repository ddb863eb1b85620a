//! Test utilities.
//!
//! This module provides common helpers for unit and integration tests,
//! reducing duplication across the codebase.

use image::Rgb;

use crate::config::{Result, TokenError};
use crate::render::layout::GlyphPlacement;
use crate::surface::RenderSurface;

/// Recording surface that counts primitives instead of drawing them.
#[derive(Debug, Default)]
pub struct CountingSurface {
    width: u32,
    height: u32,
    /// Number of full-surface fills.
    pub fills: u32,
    /// Background color of the most recent fill.
    pub background: Option<Rgb<u8>>,
    /// Every glyph placement drawn, in order.
    pub glyphs: Vec<GlyphPlacement>,
    /// Number of stroked line segments.
    pub lines: u32,
    /// Number of filled dots.
    pub dots: u32,
    /// When set, `draw_glyph` fails to exercise abort paths.
    pub fail_glyphs: bool,
}

impl CountingSurface {
    /// Creates a recording surface of the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl RenderSurface for CountingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill(&mut self, color: Rgb<u8>) -> Result<()> {
        self.fills += 1;
        self.background = Some(color);
        Ok(())
    }

    fn draw_glyph(&mut self, _ch: char, placement: &GlyphPlacement) -> Result<()> {
        if self.fail_glyphs {
            return Err(TokenError::Reference("glyph drawing disabled".to_string()));
        }
        self.glyphs.push(*placement);
        Ok(())
    }

    fn stroke_line(&mut self, _from: (f32, f32), _to: (f32, f32), _color: Rgb<u8>) -> Result<()> {
        self.lines += 1;
        Ok(())
    }

    fn fill_dot(&mut self, _center: (f32, f32), _color: Rgb<u8>) -> Result<()> {
        self.dots += 1;
        Ok(())
    }
}
