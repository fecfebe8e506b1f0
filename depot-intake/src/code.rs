//! Acceptance code generation
//!
//! Every goods-acceptance event gets a fresh 24-character code: the constant
//! prefix `"ABDE"` followed by 20 uppercase hex characters. The 16^20 suffix
//! space makes collisions statistically negligible; this is an identifier,
//! not a secret, so a plain PRNG is enough.

use rand::Rng;
use std::fmt;

/// Constant prefix every acceptance code starts with
pub const CODE_PREFIX: &str = "ABDE";

const SUFFIX_LEN: usize = 20;
const HEX_ALPHABET: &[u8; 16] = b"0123456789ABCDEF";

/// One warehouse acceptance identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AcceptanceCode(String);

impl AcceptanceCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AcceptanceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generates acceptance codes
///
/// Stateless; the only state is the random source, which is injected so
/// tests can pin the output.
pub struct AcceptanceCodeGenerator;

impl AcceptanceCodeGenerator {
    /// Generate a fresh code from the process-wide random source
    pub fn generate() -> AcceptanceCode {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate a fresh code from the given random source
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> AcceptanceCode {
        let mut code = String::with_capacity(CODE_PREFIX.len() + SUFFIX_LEN);
        code.push_str(CODE_PREFIX);
        for _ in 0..SUFFIX_LEN {
            let idx = rng.gen_range(0..HEX_ALPHABET.len());
            code.push(HEX_ALPHABET[idx] as char);
        }
        AcceptanceCode(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn code_has_prefix_and_length() {
        let code = AcceptanceCodeGenerator::generate();
        assert!(code.as_str().starts_with(CODE_PREFIX));
        assert_eq!(code.as_str().len(), 24);
    }

    #[test]
    fn suffix_stays_inside_hex_alphabet() {
        for _ in 0..500 {
            let code = AcceptanceCodeGenerator::generate();
            let suffix = &code.as_str()[CODE_PREFIX.len()..];
            assert!(
                suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn same_seed_reproduces_same_code() {
        let a = AcceptanceCodeGenerator::generate_with(&mut StdRng::seed_from_u64(42));
        let b = AcceptanceCodeGenerator::generate_with(&mut StdRng::seed_from_u64(42));
        let c = AcceptanceCodeGenerator::generate_with(&mut StdRng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn suffix_distribution_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts: HashMap<char, usize> = HashMap::new();
        let samples = 3_000;

        for _ in 0..samples {
            let code = AcceptanceCodeGenerator::generate_with(&mut rng);
            for c in code.as_str()[CODE_PREFIX.len()..].chars() {
                *counts.entry(c).or_default() += 1;
            }
        }

        // 60k symbols over 16 buckets: expect 3750 each; a ±25% band is
        // far wider than any plausible PRNG wobble.
        let expected = samples * SUFFIX_LEN / HEX_ALPHABET.len();
        assert_eq!(counts.len(), HEX_ALPHABET.len());
        for (c, n) in counts {
            assert!(
                n > expected * 3 / 4 && n < expected * 5 / 4,
                "symbol {c} appeared {n} times (expected ~{expected})"
            );
        }
    }
}
