//! Render pipeline.
//!
//! Orchestrates one full render pass: background fill, token sampling,
//! glyph drawing and the optional noise overlays.

use rand::Rng;
use tracing::debug;

use crate::config::{Result, Settings};
use crate::render::layout::GlyphLayout;
use crate::render::{color, noise, token};
use crate::surface::RenderSurface;

/// Runs one synchronous render pass against `surface`.
///
/// The pass fully repaints the surface. There is no partial-failure
/// recovery: a failed drawing primitive aborts mid-image, and the next
/// pass starts over with a fresh background fill.
pub fn render_pass<S: RenderSurface>(
    surface: &mut S,
    settings: &Settings,
    rng: &mut impl Rng,
) -> Result<()> {
    let background = color::random(rng);
    surface.fill(background)?;

    let token = token::sample(rng, settings.alphabet(), settings.min, settings.max);
    let glyph_count = token.chars().count();
    debug!(len = glyph_count, "sampled token");

    let mut layout = GlyphLayout::new(rng, surface.width(), surface.height(), glyph_count);
    for ch in token.chars() {
        // Contrast is taken against the original background for every
        // glyph, not recomputed against whatever was drawn since.
        let fill = color::contrasting(rng, background);
        let placement = layout.place(rng, fill);
        surface.draw_glyph(ch, &placement)?;
    }

    if settings.interfering_lines {
        noise::draw_lines(surface, rng, settings.max_lines)?;
    }
    if settings.interfering_dots {
        noise::draw_dots(surface, rng, settings.max_dots)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenOptions;
    use crate::test_utils::CountingSurface;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn settings(options: &TokenOptions) -> Settings {
        Settings::resolve(options).unwrap()
    }

    #[test]
    fn test_pass_fills_background_once() {
        let mut surface = CountingSurface::new(200, 60);
        let mut rng = StdRng::seed_from_u64(1);
        render_pass(&mut surface, &settings(&TokenOptions::default()), &mut rng).unwrap();
        assert_eq!(surface.fills, 1);
    }

    #[test]
    fn test_glyph_count_matches_token_length_bounds() {
        let mut surface = CountingSurface::new(200, 60);
        let mut rng = StdRng::seed_from_u64(2);
        let options = TokenOptions {
            min: Some(4),
            max: Some(6),
            ..TokenOptions::default()
        };
        for _ in 0..50 {
            surface.glyphs.clear();
            render_pass(&mut surface, &settings(&options), &mut rng).unwrap();
            assert!(surface.glyphs.len() >= 4 && surface.glyphs.len() < 6);
        }
    }

    #[test]
    fn test_disabled_overlays_draw_nothing() {
        let mut surface = CountingSurface::new(200, 60);
        let mut rng = StdRng::seed_from_u64(3);
        let options = TokenOptions {
            interfering_lines: Some(false),
            interfering_dots: Some(false),
            ..TokenOptions::default()
        };
        render_pass(&mut surface, &settings(&options), &mut rng).unwrap();
        assert_eq!(surface.lines, 0);
        assert_eq!(surface.dots, 0);
    }

    #[test]
    fn test_overlay_counts_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(4);
        let options = TokenOptions {
            interfering_lines: Some(true),
            interfering_dots: Some(true),
            max_lines: Some(8),
            max_dots: Some(40),
            ..TokenOptions::default()
        };
        for _ in 0..30 {
            let mut surface = CountingSurface::new(200, 60);
            render_pass(&mut surface, &settings(&options), &mut rng).unwrap();
            assert!(surface.lines >= 4 && surface.lines <= 8, "{}", surface.lines);
            assert!(surface.dots >= 20 && surface.dots <= 40, "{}", surface.dots);
        }
    }

    #[test]
    fn test_glyph_colors_contrast_with_background() {
        let mut surface = CountingSurface::new(300, 80);
        let mut rng = StdRng::seed_from_u64(5);
        render_pass(&mut surface, &settings(&TokenOptions::default()), &mut rng).unwrap();

        let background = surface.background.unwrap();
        for placement in &surface.glyphs {
            assert_ne!(
                crate::render::color::is_bright(background),
                crate::render::color::is_bright(placement.color),
            );
        }
    }

    #[test]
    fn test_failing_surface_aborts_pass() {
        let mut surface = CountingSurface::new(200, 60);
        surface.fail_glyphs = true;
        let mut rng = StdRng::seed_from_u64(6);
        let result = render_pass(&mut surface, &settings(&TokenOptions::default()), &mut rng);
        assert!(result.is_err());
        // Background was already filled before the aborted glyph.
        assert_eq!(surface.fills, 1);
        assert_eq!(surface.lines, 0);
    }
}
