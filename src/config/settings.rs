//! Configuration settings.
//!
//! Defines the token generation options, the resolved `Settings` value,
//! and environment variable loading for the demo binary.

use std::env;

use crate::config::error::{Result, TokenError};

const DEFAULT_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DEFAULT_NUMBER: &str = "0123456789";
const DEFAULT_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DEFAULT_MIN: usize = 4;
const DEFAULT_MAX: usize = 6;
const DEFAULT_MAX_LINES: u32 = 8;
const DEFAULT_MAX_DOTS: u32 = 100;

/// User-facing token generation options.
///
/// Every field is optional; unset fields fall back to the built-in
/// defaults. Non-positive numeric values are treated as unset.
#[derive(Debug, Clone, Default)]
pub struct TokenOptions {
    /// Lowercase section of the alphabet.
    pub lowercase: Option<String>,
    /// Digit section of the alphabet.
    pub number: Option<String>,
    /// Uppercase section of the alphabet.
    pub uppercase: Option<String>,
    /// Extra characters prepended to the alphabet.
    pub custom_chars: Option<String>,
    /// Characters removed from the alphabet, case-insensitively.
    pub excluded_chars: Option<String>,
    /// Minimum token length.
    pub min: Option<usize>,
    /// Maximum token length (exclusive bound during sampling).
    pub max: Option<usize>,
    /// Whether to draw interfering line segments.
    pub interfering_lines: Option<bool>,
    /// Whether to draw interfering dots.
    pub interfering_dots: Option<bool>,
    /// Upper bound on the number of interfering lines.
    pub max_lines: Option<u32>,
    /// Upper bound on the number of interfering dots.
    pub max_dots: Option<u32>,
}

fn env_string(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    env::var(key)
        .ok()
        .map(|v| v.to_lowercase() == "true" || v == "1")
}

fn env_usize(key: &str) -> Option<usize> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

fn env_u32(key: &str) -> Option<u32> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

impl TokenOptions {
    /// Loads options from `TOKEN_*` environment variables.
    ///
    /// Unset or unparseable variables leave the corresponding field at its
    /// default, matching the tolerance of the programmatic path.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            lowercase: env_string("TOKEN_LOWERCASE"),
            number: env_string("TOKEN_NUMBER"),
            uppercase: env_string("TOKEN_UPPERCASE"),
            custom_chars: env_string("TOKEN_CUSTOM_CHARS"),
            excluded_chars: env_string("TOKEN_EXCLUDED_CHARS"),
            min: env_usize("TOKEN_MIN"),
            max: env_usize("TOKEN_MAX"),
            interfering_lines: env_bool("TOKEN_INTERFERING_LINES"),
            interfering_dots: env_bool("TOKEN_INTERFERING_DOTS"),
            max_lines: env_u32("TOKEN_MAX_LINES"),
            max_dots: env_u32("TOKEN_MAX_DOTS"),
        }
    }
}

/// Resolved, immutable token generation settings.
///
/// Built once by [`Settings::resolve`]; reconfiguration produces a whole
/// new value rather than mutating fields in place. The alphabet is
/// validated at construction and guaranteed non-empty.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Lowercase section, whitespace stripped.
    pub lowercase: String,
    /// Digit section, whitespace stripped.
    pub number: String,
    /// Uppercase section, whitespace stripped.
    pub uppercase: String,
    /// Extra characters, whitespace stripped.
    pub custom_chars: String,
    /// Excluded characters, whitespace stripped.
    pub excluded_chars: String,
    /// Minimum token length.
    pub min: usize,
    /// Maximum token length (exclusive bound during sampling).
    pub max: usize,
    /// Whether to draw interfering line segments.
    pub interfering_lines: bool,
    /// Whether to draw interfering dots.
    pub interfering_dots: bool,
    /// Upper bound on the number of interfering lines.
    pub max_lines: u32,
    /// Upper bound on the number of interfering dots.
    pub max_dots: u32,
    alphabet: Vec<char>,
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn positive_usize(value: Option<usize>, default: usize) -> usize {
    value.filter(|&v| v > 0).unwrap_or(default)
}

fn positive_u32(value: Option<u32>, default: u32) -> u32 {
    value.filter(|&v| v > 0).unwrap_or(default)
}

/// Combines the alphabet sections, removes exclusions and deduplicates.
///
/// Concatenation order is custom ++ lowercase ++ digits ++ uppercase;
/// exclusion is case-insensitive; first occurrence wins on duplicates.
fn build_alphabet(
    custom_chars: &str,
    lowercase: &str,
    number: &str,
    uppercase: &str,
    excluded_chars: &str,
) -> Result<Vec<char>> {
    let excluded: Vec<char> = excluded_chars.chars().flat_map(char::to_lowercase).collect();

    let mut alphabet: Vec<char> = Vec::new();
    let sections = custom_chars
        .chars()
        .chain(lowercase.chars())
        .chain(number.chars())
        .chain(uppercase.chars());

    for ch in sections {
        if ch.to_lowercase().any(|folded| excluded.contains(&folded)) {
            continue;
        }
        if !alphabet.contains(&ch) {
            alphabet.push(ch);
        }
    }

    if alphabet.is_empty() {
        return Err(TokenError::Configuration(
            "no characters available after adapting the options".to_string(),
        ));
    }
    Ok(alphabet)
}

impl Settings {
    /// Resolves options against the defaults into a validated value.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Configuration` if combining the alphabet
    /// sections and removing the exclusions leaves no usable character.
    pub fn resolve(options: &TokenOptions) -> Result<Self> {
        let lowercase = options
            .lowercase
            .as_deref()
            .map_or_else(|| DEFAULT_LOWERCASE.to_string(), strip_whitespace);
        let number = options
            .number
            .as_deref()
            .map_or_else(|| DEFAULT_NUMBER.to_string(), strip_whitespace);
        let uppercase = options
            .uppercase
            .as_deref()
            .map_or_else(|| DEFAULT_UPPERCASE.to_string(), strip_whitespace);
        let custom_chars = options
            .custom_chars
            .as_deref()
            .map_or_else(String::new, strip_whitespace);
        let excluded_chars = options
            .excluded_chars
            .as_deref()
            .map_or_else(String::new, strip_whitespace);

        let alphabet = build_alphabet(
            &custom_chars,
            &lowercase,
            &number,
            &uppercase,
            &excluded_chars,
        )?;

        Ok(Self {
            lowercase,
            number,
            uppercase,
            custom_chars,
            excluded_chars,
            min: positive_usize(options.min, DEFAULT_MIN),
            max: positive_usize(options.max, DEFAULT_MAX),
            interfering_lines: options.interfering_lines.unwrap_or(false),
            interfering_dots: options.interfering_dots.unwrap_or(false),
            max_lines: positive_u32(options.max_lines, DEFAULT_MAX_LINES),
            max_dots: positive_u32(options.max_dots, DEFAULT_MAX_DOTS),
            alphabet,
        })
    }

    /// The deduplicated characters eligible for sampling.
    #[must_use]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}
