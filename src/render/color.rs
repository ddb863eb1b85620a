//! Color selection.
//!
//! Uniform random colors plus a perceptual-contrast picker used to keep
//! glyphs readable against the sampled background.

use image::Rgb;
use rand::Rng;

/// Luma threshold separating bright from dark colors.
const BRIGHTNESS_THRESHOLD: f32 = 192.0;

/// Upper bound on contrast resampling attempts.
const MAX_CONTRAST_ATTEMPTS: u32 = 100;

/// Classifies a color as bright using the standard perceptual weights.
#[must_use]
pub fn is_bright(color: Rgb<u8>) -> bool {
    let luma = f32::from(color[0]).mul_add(
        0.299,
        f32::from(color[1]).mul_add(0.587, f32::from(color[2]) * 0.114),
    );
    luma >= BRIGHTNESS_THRESHOLD
}

/// Draws a uniform random color, each channel independent in `[0, 255]`.
pub fn random(rng: &mut impl Rng) -> Rgb<u8> {
    Rgb([rng.random(), rng.random(), rng.random()])
}

/// Draws a color whose brightness class differs from `background`.
///
/// Resamples up to 100 times; once the attempts are exhausted the last
/// draw is returned regardless of contrast, so the call never blocks.
pub fn contrasting(rng: &mut impl Rng, background: Rgb<u8>) -> Rgb<u8> {
    let want_bright = !is_bright(background);
    let mut candidate = random(rng);
    for _ in 1..MAX_CONTRAST_ATTEMPTS {
        if is_bright(candidate) == want_bright {
            break;
        }
        candidate = random(rng);
    }
    candidate
}
