//! Secure random strings.
//!
//! Every byte comes from the operating system CSPRNG and is mapped onto the
//! alphabet with a modulo. Neither 62 nor 10 divides 256, so lower alphabet
//! positions are very slightly more likely; identifiers built from these
//! strings carry no access-control weight, so the bias is accepted.

use std::num::NonZeroUsize;

use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::AppError;
use crate::result::AppResult;

/// Upper-case letters, lower-case letters, then digits.
pub const ALPHANUMERIC: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Decimal digits.
pub const DIGITS: &[u8; 10] = b"0123456789";

/// Generate `length` characters drawn from [`ALPHANUMERIC`].
///
/// Fails with [`ErrorKind::InvalidArgument`](crate::error::ErrorKind) when
/// `length` is zero.
pub fn random_string(length: usize) -> AppResult<String> {
    Ok(alphanumeric(positive(length)?))
}

/// Generate `length` decimal digits.
///
/// Fails with [`ErrorKind::InvalidArgument`](crate::error::ErrorKind) when
/// `length` is zero.
pub fn random_numeric_string(length: usize) -> AppResult<String> {
    Ok(sample(DIGITS, positive(length)?))
}

/// Infallible variant of [`random_string`] for pre-validated lengths.
pub fn alphanumeric(length: NonZeroUsize) -> String {
    sample(ALPHANUMERIC, length)
}

fn positive(length: usize) -> AppResult<NonZeroUsize> {
    NonZeroUsize::new(length)
        .ok_or_else(|| AppError::invalid_argument("Length must be a positive integer"))
}

fn sample(alphabet: &[u8], length: NonZeroUsize) -> String {
    let mut bytes = vec![0u8; length.get()];
    OsRng.fill_bytes(&mut bytes);
    bytes
        .iter()
        .map(|&b| char::from(alphabet[usize::from(b) % alphabet.len()]))
        .collect()
}
