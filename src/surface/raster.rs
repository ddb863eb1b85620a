//! Raster canvas adapter.
//!
//! Implements the drawing capability on top of an in-memory RGB image,
//! with embedded display fonts and PNG export.

use std::io::Cursor;
use std::path::Path;

use ab_glyph::{FontRef, PxScale};
use base64::{Engine, engine::general_purpose::STANDARD};
use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_text_mut};
use imageproc::geometric_transformations::{Interpolation, rotate_about_center};

use crate::config::{Result, TokenError};
use crate::render::layout::GlyphPlacement;
use crate::surface::{FontFamily, RenderSurface};

const SANS_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSans-Bold.ttf");
const SERIF_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSerif-Bold.ttf");
const MONO_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSansMono-Bold.ttf");

/// Mask values at or below this are treated as background after rotation.
const GLYPH_MASK_THRESHOLD: u8 = 40;

const DOT_RADIUS: i32 = 1;

/// In-memory raster surface with embedded fonts.
pub struct RasterCanvas {
    image: RgbImage,
    fonts: [FontRef<'static>; 3],
}

impl RasterCanvas {
    /// Creates a black canvas of the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if the embedded font data is invalid or fails to load.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new(width: u32, height: u32) -> Self {
        let fonts = [
            FontRef::try_from_slice(SANS_BYTES).expect("Failed to load embedded sans font"),
            FontRef::try_from_slice(SERIF_BYTES).expect("Failed to load embedded serif font"),
            FontRef::try_from_slice(MONO_BYTES).expect("Failed to load embedded mono font"),
        ];
        Self {
            image: RgbImage::new(width, height),
            fonts,
        }
    }

    fn font(&self, family: FontFamily) -> &FontRef<'static> {
        match family {
            FontFamily::Sans => &self.fonts[0],
            FontFamily::Serif => &self.fonts[1],
            FontFamily::Mono => &self.fonts[2],
        }
    }

    /// Borrows the rendered image.
    #[must_use]
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Consumes the canvas and returns the rendered image.
    #[must_use]
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Encodes the canvas as a PNG wrapped in a base64 data URI.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be encoded as PNG.
    pub fn to_png_data_uri(&self) -> Result<String> {
        let mut png_data = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut png_data), ImageFormat::Png)
            .map_err(|e| TokenError::Encode(e.to_string()))?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png_data)))
    }

    /// Writes the canvas to `path` as PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| TokenError::Encode(e.to_string()))
    }
}

impl RenderSurface for RasterCanvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn fill(&mut self, color: Rgb<u8>) -> Result<()> {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
        Ok(())
    }

    fn draw_glyph(&mut self, ch: char, placement: &GlyphPlacement) -> Result<()> {
        let size = placement.font_size;
        let scratch_size = f32_to_u32(size * 2.0).max(2);

        // Rasterize into a grayscale mask, rotate the mask about its
        // center, then threshold-blit the glyph color onto the canvas.
        let mut mask = GrayImage::new(scratch_size, scratch_size);
        let inset = i32::try_from(scratch_size / 4).unwrap_or(0);
        draw_text_mut(
            &mut mask,
            Luma([255_u8]),
            inset,
            inset,
            PxScale::from(size),
            self.font(placement.family),
            &ch.to_string(),
        );

        let rotated = rotate_about_center(
            &mask,
            placement.rotation_deg.to_radians(),
            Interpolation::Bilinear,
            Luma([0]),
        );

        // The placement anchor is the glyph's bottom-left corner; the
        // mask is blitted so its center lands half a size up and right.
        let half_scratch = i32::try_from(scratch_size / 2).unwrap_or(0);
        let anchor_x = f32_to_i32(placement.x + size * 0.5);
        let anchor_y = f32_to_i32(placement.y - size * 0.5);

        let (width, height) = self.image.dimensions();
        for (rx, ry, pixel) in rotated.enumerate_pixels() {
            if pixel[0] <= GLYPH_MASK_THRESHOLD {
                continue;
            }
            let gx = anchor_x + i32::try_from(rx).unwrap_or(0) - half_scratch;
            let gy = anchor_y + i32::try_from(ry).unwrap_or(0) - half_scratch;
            let (Ok(gx), Ok(gy)) = (u32::try_from(gx), u32::try_from(gy)) else {
                continue;
            };
            if gx < width && gy < height {
                self.image.put_pixel(gx, gy, placement.color);
            }
        }
        Ok(())
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb<u8>) -> Result<()> {
        // Clips to the image bounds, so out-of-bounds endpoints are fine.
        draw_line_segment_mut(&mut self.image, from, to, color);
        Ok(())
    }

    fn fill_dot(&mut self, center: (f32, f32), color: Rgb<u8>) -> Result<()> {
        draw_filled_circle_mut(
            &mut self.image,
            (f32_to_i32(center.0), f32_to_i32(center.1)),
            DOT_RADIUS,
            color,
        );
        Ok(())
    }
}

#[inline]
fn f32_to_i32(val: f32) -> i32 {
    let clamped = val.round().clamp(f32::from(i16::MIN), f32::from(i16::MAX));
    format!("{clamped:.0}").parse::<i32>().unwrap_or(0)
}

#[inline]
fn f32_to_u32(val: f32) -> u32 {
    let clamped = val.round().clamp(0.0, f32::from(u16::MAX));
    format!("{clamped:.0}").parse::<u32>().unwrap_or(0)
}
