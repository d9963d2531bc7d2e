//! Random number generator verification command.
//!
//! The `rng` command verifies the properties of the ChaCha20 random number
//! generator every shuffle in the engine flows through. It generates sample
//! random values and displays them for inspection.
//!
//! ## Purpose
//!
//! This command is primarily used for:
//! - Verifying RNG determinism (same seed produces same sequence)
//! - Debugging seed handling issues in recorded runs

use crate::error::CliError;
use rand::{RngCore, SeedableRng};
use std::io::Write;

/// Handle the rng command - verify random number generator properties.
///
/// Generates and displays a sample of random numbers using the ChaCha20 RNG
/// with the specified seed (or a random seed if not provided).
///
/// # Arguments
///
/// * `seed` - Optional seed value for the RNG (uses random seed if None)
/// * `out` - Output stream for RNG sample values
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(CliError)` on write failure
pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(s);
    let mut vals = vec![];
    for _ in 0..5 {
        vals.push(rng.next_u64());
    }
    writeln!(out, "RNG sample: {:?}", vals)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_command_with_explicit_seed() {
        let mut out = Vec::new();

        let result = handle_rng_command(Some(12345), &mut out);

        assert!(result.is_ok());
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("RNG sample"));
    }

    #[test]
    fn test_rng_command_produces_deterministic_output() {
        let mut out1 = Vec::new();
        let _ = handle_rng_command(Some(42), &mut out1);

        let mut out2 = Vec::new();
        let _ = handle_rng_command(Some(42), &mut out2);

        assert_eq!(out1, out2, "Same seed should produce same output");
    }

    #[test]
    fn test_rng_command_without_seed() {
        let mut out = Vec::new();

        let result = handle_rng_command(None, &mut out);

        assert!(result.is_ok());
    }
}
