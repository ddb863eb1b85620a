//! Token generator.
//!
//! The public entry point: owns a render surface and the resolved
//! settings, and repaints the surface on demand.

use rand::Rng;

use crate::config::{Result, Settings, TokenError, TokenOptions};
use crate::render::pipeline;
use crate::surface::RenderSurface;

/// Renders distorted random tokens onto an owned surface.
///
/// Surface dimensions are captured at construction and never re-read;
/// the configured settings persist between renders while every token and
/// placement is recomputed from scratch on each pass.
#[derive(Debug)]
pub struct TokenGenerator<S> {
    surface: S,
    settings: Settings,
}

impl<S: RenderSurface> TokenGenerator<S> {
    /// Creates a generator over `surface` with the given options.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Reference` if the surface reports a zero
    /// dimension, and `TokenError::Configuration` if the options resolve
    /// to an empty alphabet. No usable generator exists after a failure.
    pub fn new(surface: S, options: &TokenOptions) -> Result<Self> {
        if surface.width() == 0 || surface.height() == 0 {
            return Err(TokenError::Reference(format!(
                "surface must have non-zero dimensions, got {}x{}",
                surface.width(),
                surface.height()
            )));
        }
        let settings = Settings::resolve(options)?;
        Ok(Self { surface, settings })
    }

    /// Repaints the surface with a freshly sampled token.
    ///
    /// # Errors
    ///
    /// Propagates drawing failures from the surface; the surface is left
    /// partially drawn and repaired by the next successful render.
    pub fn render(&mut self) -> Result<()> {
        self.render_with(&mut rand::rng())
    }

    /// Repaints the surface using an explicit randomness source.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`TokenGenerator::render`].
    pub fn render_with(&mut self, rng: &mut impl Rng) -> Result<()> {
        pipeline::render_pass(&mut self.surface, &self.settings, rng)
    }

    /// Replaces the settings with a fresh resolution of `options`.
    ///
    /// The previous settings stay in place when resolution fails.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Configuration` on an empty resulting alphabet.
    pub fn reconfigure(&mut self, options: &TokenOptions) -> Result<&mut Self> {
        self.settings = Settings::resolve(options)?;
        Ok(self)
    }

    /// The resolved settings currently in effect.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Borrows the owned surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the generator and returns the surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::CountingSurface;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_zero_dimension_surface_is_rejected() {
        let surface = CountingSurface::new(0, 50);
        let err = TokenGenerator::new(surface, &TokenOptions::default()).unwrap_err();
        assert!(matches!(err, TokenError::Reference(_)));
    }

    #[test]
    fn test_empty_alphabet_is_rejected_at_construction() {
        let surface = CountingSurface::new(100, 50);
        let options = TokenOptions {
            lowercase: Some(String::new()),
            number: Some(String::new()),
            uppercase: Some(String::new()),
            ..TokenOptions::default()
        };
        let err = TokenGenerator::new(surface, &options).unwrap_err();
        assert!(matches!(err, TokenError::Configuration(_)));
    }

    #[test]
    fn test_render_repaints_surface() {
        let surface = CountingSurface::new(200, 60);
        let mut generator = TokenGenerator::new(surface, &TokenOptions::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        generator.render_with(&mut rng).unwrap();
        generator.render_with(&mut rng).unwrap();
        assert_eq!(generator.surface().fills, 2);
    }

    #[test]
    fn test_reconfigure_chains_and_replaces() {
        let surface = CountingSurface::new(200, 60);
        let mut generator = TokenGenerator::new(surface, &TokenOptions::default()).unwrap();

        let options = TokenOptions {
            lowercase: Some("xyz".to_string()),
            number: Some(String::new()),
            uppercase: Some(String::new()),
            min: Some(3),
            max: Some(3),
            ..TokenOptions::default()
        };
        let mut rng = StdRng::seed_from_u64(2);
        generator
            .reconfigure(&options)
            .unwrap()
            .render_with(&mut rng)
            .unwrap();

        assert_eq!(generator.settings().alphabet(), ['x', 'y', 'z']);
        assert_eq!(generator.settings().min, 3);
    }

    #[test]
    fn test_failed_reconfigure_keeps_previous_settings() {
        let surface = CountingSurface::new(200, 60);
        let mut generator = TokenGenerator::new(surface, &TokenOptions::default()).unwrap();
        let alphabet_before = generator.settings().alphabet().to_vec();

        let bad = TokenOptions {
            lowercase: Some(String::new()),
            number: Some(String::new()),
            uppercase: Some(String::new()),
            ..TokenOptions::default()
        };
        assert!(generator.reconfigure(&bad).is_err());
        assert_eq!(generator.settings().alphabet(), alphabet_before);
    }

    #[test]
    fn test_reconfigure_same_options_is_idempotent() {
        let surface = CountingSurface::new(200, 60);
        let options = TokenOptions {
            lowercase: Some("abc".to_string()),
            excluded_chars: Some("b".to_string()),
            ..TokenOptions::default()
        };
        let mut generator = TokenGenerator::new(surface, &options).unwrap();
        let first = generator.settings().alphabet().to_vec();
        generator.reconfigure(&options).unwrap();
        assert_eq!(generator.settings().alphabet(), first);
    }
}
