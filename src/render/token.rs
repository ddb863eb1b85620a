//! Token sampling.
//!
//! Draws the random character sequence rendered as the visual challenge.

use rand::Rng;

/// Samples a token from `alphabet` with a length uniform in `[min, max)`.
///
/// A reversed range is swapped before sampling; `min == max` yields
/// exactly `min` characters. Characters are drawn independently with
/// replacement, so consecutive repeats are permitted.
///
/// # Panics
///
/// Panics if `alphabet` is empty. Settings resolution guarantees a
/// non-empty alphabet before sampling is ever reached.
pub fn sample(rng: &mut impl Rng, alphabet: &[char], min: usize, max: usize) -> String {
    assert!(!alphabet.is_empty(), "alphabet must not be empty");

    let (min, max) = if min > max { (max, min) } else { (min, max) };
    let len = if min < max {
        rng.random_range(min..max)
    } else {
        min
    };

    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}
