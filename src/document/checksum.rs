//! Modulo-11 check digits shared by CPF and CNPJ
//!
//! `sum = Σ digit[i] * weight[i]`, `r = sum mod 11`, check digit is `0` when
//! `r < 2`, otherwise `11 - r`. Weights are aligned to the *right* end of the
//! digits: a prefix of N digits uses the last N entries of the table.

/// CPF weights: the 9-digit prefix uses 10..=2, the 10-digit prefix 11..=2
pub const CPF_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ weights: the 12-digit prefix uses the last 12, the 13-digit prefix all 13
pub const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Compute one check digit over `digits` with right-aligned `weights`.
///
/// # Panics
///
/// Panics if `digits` is longer than `weights`.
///
/// # Example
///
/// ```
/// use brdocs::document::checksum::{check_digit, CPF_WEIGHTS};
///
/// assert_eq!(check_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9], &CPF_WEIGHTS), 0);
/// ```
pub fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    assert!(
        digits.len() <= weights.len(),
        "{} digits exceed a {}-entry weight table",
        digits.len(),
        weights.len()
    );

    let offset = weights.len() - digits.len();
    let sum: u32 = digits
        .iter()
        .zip(&weights[offset..])
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();

    match sum % 11 {
        r if r < 2 => 0,
        // r is in 2..=10, so the result fits a single digit
        r => (11 - r) as u8,
    }
}

/// Append both check digits to `base`, the first computed over `base` and
/// the second over `base` plus the first.
///
/// # Panics
///
/// Panics if `base` has more than `weights.len() - 1` digits.
pub fn append_check_digits(mut base: Vec<u8>, weights: &[u32]) -> Vec<u8> {
    let first = check_digit(&base, weights);
    base.push(first);
    let second = check_digit(&base, weights);
    base.push(second);
    base
}

/// True when the last two digits are the check digits of the rest.
///
/// False for fewer than two digits, or for more than the weight table can
/// cover.
pub fn verify_check_digits(digits: &[u8], weights: &[u32]) -> bool {
    let n = digits.len();
    n >= 2
        && n - 1 <= weights.len()
        && check_digit(&digits[..n - 2], weights) == digits[n - 2]
        && check_digit(&digits[..n - 1], weights) == digits[n - 1]
}
