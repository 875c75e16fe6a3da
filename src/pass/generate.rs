//! Password generation.

use rand::Rng;
use zeroize::Zeroize;

use super::charset;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// Draw `length` characters uniformly from `pool`.
///
/// `length == 0` yields an empty string whatever the pool holds.
pub fn generate<R: Rng + ?Sized>(length: usize, pool: &str, rng: &mut R) -> Result<String> {
    if length == 0 {
        return Ok(String::new());
    }

    let mut chars: Vec<char> = pool.chars().collect();
    if chars.is_empty() {
        return Err(Error::InvalidConfiguration(
            "Character pool is empty!".to_string(),
        ));
    }

    let password = (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();
    chars.zeroize();
    Ok(password)
}

/// Generate one password from the current settings.
pub fn generate_for<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Result<String> {
    if settings.password_length == 0 {
        return Err(Error::InvalidConfiguration(
            "Password length must be at least 1!".to_string(),
        ));
    }

    let pool = charset::pool_for(&settings.selected_options);
    if pool.is_empty() {
        return Err(Error::InvalidConfiguration(
            "Must select at least one option!".to_string(),
        ));
    }

    generate(settings.password_length, &pool, rng)
}

/// Bits of entropy for `length` uniform draws over `pool_size` characters.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

pub fn strength_label(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
