//! CPF (Cadastro de Pessoas Físicas) validation and generation
//!
//! A CPF has 9 base digits followed by two check digits. The first check
//! digit weights the base with 10..=2, the second weights base plus first
//! check digit with 11..=2.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::DocumentKind;
use super::checksum::{CPF_WEIGHTS, append_check_digits, verify_check_digits};
use crate::CPF_LENGTH;
use crate::error::{DocumentError, Result};
use crate::random;
use crate::utils::{all_equal, digits_to_string, normalize, parse_digits, strip_separators};

const BASE_LENGTH: usize = CPF_LENGTH - 2;

/// Strip formatting, keeping only the digits
pub fn trim(raw: &str) -> String {
    normalize(raw)
}

/// Check whether `raw` is a valid CPF, punctuated or not.
///
/// Only `.`, `-`, `/` and spaces are ignored; any other non-digit makes the
/// value invalid.
///
/// # Example
///
/// ```
/// use brdocs::cpf;
///
/// assert!(cpf::is_valid("123.456.789-09"));
/// assert!(!cpf::is_valid("111.111.111-11"));
/// assert!(!cpf::is_valid("cpf 123.456.789-09"));
/// ```
pub fn is_valid(raw: &str) -> bool {
    check(&strip_separators(raw)).is_ok()
}

/// Format as `XXX.XXX.XXX-XX`.
///
/// Anything that does not trim to 11 digits is returned trimmed.
pub fn format(raw: &str) -> String {
    let cpf = trim(raw);
    if cpf.len() != CPF_LENGTH {
        return cpf;
    }
    format!("{}.{}.{}-{}", &cpf[0..3], &cpf[3..6], &cpf[6..9], &cpf[9..11])
}

/// Generate a valid CPF from the shared random source
pub fn generate() -> String {
    random::shared().with(|rng| generate_with(rng))
}

/// Generate a valid CPF from the given random source
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let base: Vec<u8> = (0..BASE_LENGTH).map(|_| rng.random_range(0..10)).collect();
    let cpf = digits_to_string(&append_check_digits(base, &CPF_WEIGHTS));
    trace!(%cpf, "generated CPF");
    cpf
}

/// Validate a CPF with separators removed and return its digits
fn check(cpf: &str) -> Result<Vec<u8>> {
    let kind = DocumentKind::Cpf;

    if cpf.len() != CPF_LENGTH {
        return Err(DocumentError::InvalidLength {
            kind,
            expected: CPF_LENGTH,
            actual: cpf.chars().count(),
        });
    }

    let digits = parse_digits(cpf).ok_or(DocumentError::InvalidCharacter { kind })?;

    if all_equal(&digits) {
        return Err(DocumentError::RepeatedDigits(kind));
    }

    if !verify_check_digits(&digits, &CPF_WEIGHTS) {
        return Err(DocumentError::ChecksumMismatch(kind));
    }

    Ok(digits)
}

/// A validated CPF, stored as its 11 digits.
///
/// `Display` renders the punctuated form; serde uses the bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Parse and validate a CPF, punctuated or not
    pub fn parse(raw: &str) -> Result<Self> {
        let cpf = strip_separators(raw);
        check(&cpf)?;
        Ok(Self(cpf))
    }

    /// Generate a random valid CPF, redrawing repeated-digit values
    pub fn generate() -> Self {
        loop {
            let cpf = generate();
            if check(&cpf).is_ok() {
                return Self(cpf);
            }
        }
    }

    /// The 11 digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `XXX.XXX.XXX-XX` form
    pub fn formatted(&self) -> String {
        format(&self.0)
    }

    /// The two trailing check digits
    pub fn check_digits(&self) -> &str {
        &self.0[BASE_LENGTH..]
    }
}

impl FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
