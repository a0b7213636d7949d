//! CEP (Código de Endereçamento Postal) handling
//!
//! A CEP carries no check digit. Validation is shape only: 8 ASCII digits,
//! optionally written with a hyphen after the fifth (`12345-678`).
//! Generated values are drawn from the embedded range table so they land in
//! blocks actually assigned to a state.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::DocumentKind;
use crate::CEP_LENGTH;
use crate::dataset::{CepRange, cep_ranges};
use crate::error::{DocumentError, Result};
use crate::random;
use crate::utils::normalize as digits_only;

const PREFIX_LENGTH: usize = 5;

/// Remove hyphens only; other characters are kept
pub fn trim(raw: &str) -> String {
    raw.replace('-', "")
}

/// Remove every non-digit character
pub fn normalize(raw: &str) -> String {
    digits_only(raw)
}

/// Check whether `raw` is exactly 8 digits once hyphens are removed.
///
/// # Example
///
/// ```
/// use brdocs::cep;
///
/// assert!(cep::is_valid("12345-678"));
/// assert!(!cep::is_valid("12345-6789"));
/// ```
pub fn is_valid(raw: &str) -> bool {
    let cep = trim(raw);
    cep.len() == CEP_LENGTH && cep.bytes().all(|b| b.is_ascii_digit())
}

/// Trim, then put a hyphen after the fifth character.
///
/// Length is not checked, so `"123456789"` becomes `"12345-6789"`. Values of
/// five characters or fewer come back trimmed, without a hyphen.
pub fn format(raw: &str) -> String {
    let cep = trim(raw);
    match cep.char_indices().nth(PREFIX_LENGTH) {
        Some((split, _)) => format!("{}-{}", &cep[..split], &cep[split..]),
        None => cep,
    }
}

/// Generate a CEP from the shared random source
pub fn generate() -> String {
    random::shared().with(|rng| generate_with(rng))
}

/// Generate a CEP from the given random source.
///
/// A block is chosen uniformly from the range table, then a value uniformly
/// inside it. The result is zero-padded to 8 digits.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let range = cep_ranges().choose(rng);
    sample(range, rng)
}

/// Generate a CEP inside one state (UF code, case-insensitive)
pub fn generate_for_state(uf: &str) -> Result<String> {
    random::shared().with(|rng| generate_for_state_with(uf, rng))
}

/// Generate a CEP inside one state from the given random source
pub fn generate_for_state_with<R: Rng + ?Sized>(uf: &str, rng: &mut R) -> Result<String> {
    let ranges = cep_ranges().for_state(uf);
    if ranges.is_empty() {
        return Err(DocumentError::UnknownState(uf.trim().to_ascii_uppercase()));
    }
    let range = ranges[rng.random_range(0..ranges.len())];
    Ok(sample(range, rng))
}

/// State (UF) whose range contains a valid CEP
///
/// # Example
///
/// ```
/// use brdocs::cep;
///
/// assert_eq!(cep::state_of("01310-100"), Some("SP"));
/// assert_eq!(cep::state_of("1234"), None);
/// ```
pub fn state_of(raw: &str) -> Option<&'static str> {
    if !is_valid(raw) {
        return None;
    }
    let value: u32 = trim(raw).parse().ok()?;
    cep_ranges().find(value).map(|r| r.uf.as_str())
}

fn sample<R: Rng + ?Sized>(range: &CepRange, rng: &mut R) -> String {
    let cep = format!("{:0width$}", range.sample(rng), width = CEP_LENGTH);
    trace!(%cep, uf = %range.uf, "generated CEP");
    cep
}

/// A validated CEP, stored as its 8 digits.
///
/// `Display` renders `12345-678`; serde uses the bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cep(String);

impl Cep {
    /// Parse and validate a CEP, with or without the hyphen
    pub fn parse(raw: &str) -> Result<Self> {
        let kind = DocumentKind::Cep;
        let cep = trim(raw);

        let length = cep.chars().count();
        if length != CEP_LENGTH {
            return Err(DocumentError::InvalidLength {
                kind,
                expected: CEP_LENGTH,
                actual: length,
            });
        }
        if !cep.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DocumentError::InvalidCharacter { kind });
        }

        Ok(Self(cep))
    }

    /// Generate a random CEP
    pub fn generate() -> Self {
        Self(generate())
    }

    /// The 8 digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `12345-678` form
    pub fn formatted(&self) -> String {
        format(&self.0)
    }

    /// State (UF) the CEP belongs to, if it falls in a known range
    pub fn state(&self) -> Option<&'static str> {
        state_of(&self.0)
    }
}

impl FromStr for Cep {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cep {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Cep> for String {
    fn from(cep: Cep) -> Self {
        cep.0
    }
}

impl AsRef<str> for Cep {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_is_valid() {
        let cases = [
            ("12345-678", true),
            ("12345678", true),
            ("12345-6789", false),
            ("123456789", false),
            ("1234567", false),
            ("1234567890", false),
            ("12345 678", false), // only hyphens are trimmed
            ("1234567a", false),
            ("", false),
        ];

        for (cep, expected) in cases {
            assert_eq!(is_valid(cep), expected, "cep: {:?}", cep);
        }
    }

    #[test]
    fn test_trim() {
        let cases = [
            ("12345-678", "12345678"),
            ("12345678", "12345678"),
            ("12345-6789", "123456789"),
            ("1234567", "1234567"),
            ("1-2-3", "123"),
            ("12.345-678", "12.345678"),
        ];

        for (cep, expected) in cases {
            assert_eq!(trim(cep), expected);
        }
    }

    #[test]
    fn test_format() {
        let cases = [
            ("12345-678", "12345-678"),
            ("12345678", "12345-678"),
            ("12345-6789", "12345-6789"),
            ("123456789", "12345-6789"),
            ("1234567", "12345-67"),
            ("1234567890", "12345-67890"),
            ("1234567890123", "12345-67890123"),
            ("12345", "12345"),
            ("123", "123"),
            ("", ""),
        ];

        for (cep, expected) in cases {
            assert_eq!(format(cep), expected, "cep: {:?}", cep);
        }
    }

    #[test]
    fn test_format_multibyte_input() {
        assert_eq!(format("çãõéíú"), "çãõéí-ú");
    }

    #[test]
    fn test_normalize() {
        let cases = [
            ("12345-678", "12345678"),
            ("123456789PPP", "123456789"),
            ("123****4567", "1234567"),
            ("$$%$1234567890000", "1234567890000"),
            ("@@#$%AAA12345678901", "12345678901"),
            ("&&&12345---6789012", "123456789012"),
            ("#$%1122334455", "1122334455"),
        ];

        for (cep, expected) in cases {
            assert_eq!(normalize(cep), expected);
        }
    }

    #[test]
    fn test_generate_with_is_valid() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..500 {
            let cep = generate_with(&mut rng);
            assert_eq!(cep.len(), CEP_LENGTH, "cep: {}", cep);
            assert!(is_valid(&cep), "generated CEP is not valid: {}", cep);
            assert!(state_of(&cep).is_some(), "generated CEP outside table: {}", cep);
        }
    }

    #[test]
    fn test_sample_zero_pads() {
        let mut rng = StdRng::seed_from_u64(1);
        let range = CepRange {
            uf: "SP".to_string(),
            locality: "Sé".to_string(),
            low: 1_001_000,
            high: 1_001_000,
        };
        assert_eq!(sample(&range, &mut rng), "01001000");
    }

    #[test]
    fn test_generate_for_state() {
        let mut rng = StdRng::seed_from_u64(19);
        for uf in ["SP", "rj", " am ", "DF"] {
            for _ in 0..20 {
                let cep = generate_for_state_with(uf, &mut rng).unwrap();
                assert!(is_valid(&cep));
                assert_eq!(state_of(&cep), Some(uf.trim().to_ascii_uppercase().as_str()));
            }
        }
    }

    #[test]
    fn test_generate_for_unknown_state() {
        let mut rng = StdRng::seed_from_u64(19);
        assert_eq!(
            generate_for_state_with("xx", &mut rng),
            Err(DocumentError::UnknownState("XX".to_string()))
        );
    }

    #[test]
    fn test_state_of() {
        assert_eq!(state_of("01310-100"), Some("SP"));
        assert_eq!(state_of("20040-020"), Some("RJ"));
        assert_eq!(state_of("70040010"), Some("DF"));
        assert_eq!(state_of("90010-000"), Some("RS"));
        assert_eq!(state_of("10000-000"), None); // unassigned block
        assert_eq!(state_of("abc"), None);
    }

    #[test]
    fn test_parse() {
        let cep: Cep = "01310-100".parse().unwrap();
        assert_eq!(cep.as_str(), "01310100");
        assert_eq!(cep.to_string(), "01310-100");
        assert_eq!(cep.state(), Some("SP"));

        assert_eq!(
            Cep::parse("1234"),
            Err(DocumentError::InvalidLength {
                kind: DocumentKind::Cep,
                expected: 8,
                actual: 4
            })
        );
        assert_eq!(
            Cep::parse("1234567a"),
            Err(DocumentError::InvalidCharacter { kind: DocumentKind::Cep })
        );
    }
}
