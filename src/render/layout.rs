//! Glyph layout.
//!
//! Computes per-character font size, position and rotation, advancing a
//! running cursor so consecutive glyphs rarely overlap.

use image::Rgb;
use rand::Rng;

use crate::surface::FontFamily;

/// Computed placement for one rendered character.
#[derive(Debug, Clone, Copy)]
pub struct GlyphPlacement {
    /// Font size in pixels.
    pub font_size: f32,
    /// Horizontal position of the glyph anchor.
    pub x: f32,
    /// Vertical position of the glyph anchor (bottom baseline).
    pub y: f32,
    /// Rotation around the anchor, in degrees.
    pub rotation_deg: f32,
    /// Font family the glyph is drawn with.
    pub family: FontFamily,
    /// Fill color of the glyph.
    pub color: Rgb<u8>,
}

/// Left-to-right glyph layout over one render pass.
pub struct GlyphLayout {
    base_size: f32,
    padding: f32,
    height: f32,
    last_x: f32,
}

fn uniform(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    // Degenerate ranges collapse to the lower bound on tiny surfaces.
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

impl GlyphLayout {
    /// Creates a layout for `token_len` glyphs on a `width`×`height` surface.
    ///
    /// The base font size is `floor(width / (len·1.5 + 0.5))`, capped at
    /// half the surface height. The cursor starts with a small random
    /// jitter below half a padding.
    pub fn new(rng: &mut impl Rng, width: u32, height: u32, token_len: usize) -> Self {
        let width = f32::from(u16::try_from(width).unwrap_or(u16::MAX));
        let height = f32::from(u16::try_from(height).unwrap_or(u16::MAX));
        let len = f32::from(u16::try_from(token_len).unwrap_or(u16::MAX));

        let base_size = (width / len.mul_add(1.5, 0.5))
            .floor()
            .min(height * 0.5)
            .max(1.0);
        let padding = base_size / 2.0;
        let last_x = uniform(rng, 0.0, padding * 0.5);

        Self {
            base_size,
            padding,
            height,
            last_x,
        }
    }

    /// Base font size before the per-glyph jitter.
    #[must_use]
    pub fn base_size(&self) -> f32 {
        self.base_size
    }

    /// Places the next glyph and advances the cursor past it.
    pub fn place(&mut self, rng: &mut impl Rng, color: Rgb<u8>) -> GlyphPlacement {
        let font_size = uniform(rng, self.base_size * 0.9, self.base_size * 1.1);
        let family = FontFamily::pick(rng);
        let y = uniform(rng, self.base_size, self.height - self.padding);
        let rotation_deg = uniform(rng, -20.0, 20.0);
        let x = uniform(
            rng,
            self.last_x + self.padding * 0.5,
            self.last_x + self.padding,
        );
        self.last_x = x + self.base_size;

        GlyphPlacement {
            font_size,
            x,
            y,
            rotation_deg,
            family,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_base_size_formula() {
        let mut rng = StdRng::seed_from_u64(1);
        // 300 / (6*1.5 + 0.5) = 31.57 -> 31
        let layout = GlyphLayout::new(&mut rng, 300, 100, 6);
        assert!((layout.base_size() - 31.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_base_size_capped_at_half_height() {
        let mut rng = StdRng::seed_from_u64(2);
        let layout = GlyphLayout::new(&mut rng, 1000, 40, 1);
        assert!((layout.base_size() - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_placements_advance_monotonically() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut layout = GlyphLayout::new(&mut rng, 400, 100, 6);
        let mut previous = f32::MIN;
        for _ in 0..6 {
            let placement = layout.place(&mut rng, Rgb([0, 0, 0]));
            assert!(placement.x > previous);
            previous = placement.x;
        }
    }

    #[test]
    fn test_placement_ranges() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut layout = GlyphLayout::new(&mut rng, 400, 120, 5);
        let base = layout.base_size();
        for _ in 0..5 {
            let placement = layout.place(&mut rng, Rgb([0, 0, 0]));
            assert!(placement.font_size >= base * 0.9 && placement.font_size <= base * 1.1);
            assert!(placement.rotation_deg >= -20.0 && placement.rotation_deg < 20.0);
            assert!(placement.y >= base && placement.y <= 120.0 - base / 2.0);
        }
    }

    #[test]
    fn test_tiny_surface_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut layout = GlyphLayout::new(&mut rng, 2, 2, 8);
        for _ in 0..8 {
            let _ = layout.place(&mut rng, Rgb([0, 0, 0]));
        }
    }
}
