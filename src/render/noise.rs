//! Noise overlays.
//!
//! Randomized distractor lines and dots drawn over the token to hinder
//! automated recognition.

use rand::Rng;

use crate::config::Result;
use crate::render::color;
use crate::surface::RenderSurface;

fn width_f32(surface: &impl RenderSurface) -> f32 {
    f32::from(u16::try_from(surface.width()).unwrap_or(u16::MAX))
}

fn height_f32(surface: &impl RenderSurface) -> f32 {
    f32::from(u16::try_from(surface.height()).unwrap_or(u16::MAX))
}

/// Draws between `max_lines / 2` and `max_lines` random line segments.
///
/// Endpoints may fall up to half a surface dimension outside the bounds,
/// so segments can cross the full image including its edges.
pub fn draw_lines<S: RenderSurface>(
    surface: &mut S,
    rng: &mut impl Rng,
    max_lines: u32,
) -> Result<()> {
    let width = width_f32(surface);
    let height = height_f32(surface);
    let count = rng.random_range(max_lines / 2..=max_lines);

    for _ in 0..count {
        let from = (
            rng.random_range(-0.5 * width..1.5 * width),
            rng.random_range(-0.5 * height..1.5 * height),
        );
        let to = (
            rng.random_range(-0.5 * width..1.5 * width),
            rng.random_range(-0.5 * height..1.5 * height),
        );
        surface.stroke_line(from, to, color::random(rng))?;
    }
    Ok(())
}

/// Draws between `max_dots / 2` and `max_dots` random 1px dots.
pub fn draw_dots<S: RenderSurface>(
    surface: &mut S,
    rng: &mut impl Rng,
    max_dots: u32,
) -> Result<()> {
    let width = width_f32(surface);
    let height = height_f32(surface);
    let count = rng.random_range(max_dots / 2..=max_dots);

    for _ in 0..count {
        let center = (
            rng.random_range(0.0..=width),
            rng.random_range(0.0..=height),
        );
        surface.fill_dot(center, color::random(rng))?;
    }
    Ok(())
}
