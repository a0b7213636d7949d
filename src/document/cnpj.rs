//! CNPJ (Cadastro Nacional da Pessoa Jurídica) validation and generation
//!
//! A CNPJ is an 8-digit root, a 4-digit branch number and two check digits.
//! Both check digits use the 13-entry weight table right-aligned to the
//! prefix they cover (12 and 13 digits).

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::DocumentKind;
use super::checksum::{CNPJ_WEIGHTS, append_check_digits, verify_check_digits};
use crate::CNPJ_LENGTH;
use crate::error::{DocumentError, Result};
use crate::random;
use crate::utils::{digits_to_string, normalize, parse_digits};

const BASE_LENGTH: usize = CNPJ_LENGTH - 2;
const ROOT_LENGTH: usize = 8;

/// Strip every non-digit character, not just `.`, `/` and `-`
pub fn trim(raw: &str) -> String {
    normalize(raw)
}

/// Check whether `raw` is a valid CNPJ, punctuated or not.
///
/// # Example
///
/// ```
/// use brdocs::cnpj;
///
/// assert!(cnpj::is_valid("11.444.777/0001-61"));
/// assert!(!cnpj::is_valid("11111111111111"));
/// ```
pub fn is_valid(raw: &str) -> bool {
    check(&trim(raw)).is_ok()
}

/// Format as `XX.XXX.XXX/XXXX-XX`.
///
/// Anything that does not trim to 14 digits is returned trimmed.
pub fn format(raw: &str) -> String {
    let cnpj = trim(raw);
    if cnpj.len() != CNPJ_LENGTH {
        return cnpj;
    }
    format!(
        "{}.{}.{}/{}-{}",
        &cnpj[0..2],
        &cnpj[2..5],
        &cnpj[5..8],
        &cnpj[8..12],
        &cnpj[12..14]
    )
}

/// Generate a valid CNPJ from the shared random source
pub fn generate() -> String {
    random::shared().with(|rng| generate_with(rng))
}

/// Generate a valid CNPJ from the given random source
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let base: Vec<u8> = (0..BASE_LENGTH).map(|_| rng.random_range(0..10)).collect();
    let cnpj = digits_to_string(&append_check_digits(base, &CNPJ_WEIGHTS));
    trace!(%cnpj, "generated CNPJ");
    cnpj
}

/// Validate an already trimmed CNPJ and return its digits
fn check(cnpj: &str) -> Result<Vec<u8>> {
    let kind = DocumentKind::Cnpj;

    if cnpj.len() != CNPJ_LENGTH {
        return Err(DocumentError::InvalidLength {
            kind,
            expected: CNPJ_LENGTH,
            actual: cnpj.chars().count(),
        });
    }

    let digits = parse_digits(cnpj).ok_or(DocumentError::InvalidCharacter { kind })?;

    if digits[..BASE_LENGTH].iter().all(|&d| d == 0) {
        return Err(DocumentError::ZeroBase(kind));
    }

    if !verify_check_digits(&digits, &CNPJ_WEIGHTS) {
        return Err(DocumentError::ChecksumMismatch(kind));
    }

    Ok(digits)
}

/// A validated CNPJ, stored as its 14 digits.
///
/// `Display` renders the punctuated form; serde uses the bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Parse and validate a CNPJ, punctuated or not
    pub fn parse(raw: &str) -> Result<Self> {
        let cnpj = trim(raw);
        check(&cnpj)?;
        Ok(Self(cnpj))
    }

    /// Generate a random valid CNPJ, redrawing an all-zero base
    pub fn generate() -> Self {
        loop {
            let cnpj = generate();
            if check(&cnpj).is_ok() {
                return Self(cnpj);
            }
        }
    }

    /// The 14 digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `XX.XXX.XXX/XXXX-XX` form
    pub fn formatted(&self) -> String {
        format(&self.0)
    }

    /// Company root, shared by every branch
    pub fn root(&self) -> &str {
        &self.0[..ROOT_LENGTH]
    }

    /// Branch number (`0001` is the head office)
    pub fn branch(&self) -> &str {
        &self.0[ROOT_LENGTH..BASE_LENGTH]
    }

    /// The two trailing check digits
    pub fn check_digits(&self) -> &str {
        &self.0[BASE_LENGTH..]
    }
}

impl FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
