//! Decimal digit sums of big integers.

use num_bigint::{BigInt, BigUint};

use crate::error::{Error, Result};

/// Sums the base-10 digits of `x`.
pub fn digit_sum(x: &BigUint) -> u64 {
    x.to_radix_le(10).into_iter().map(u64::from).sum()
}

/// Like [`digit_sum`], but for signed input; negative values are an error.
pub fn digit_sum_signed(x: &BigInt) -> Result<u64> {
    match x.to_biguint() {
        Some(magnitude) => Ok(digit_sum(&magnitude)),
        None => Err(Error::negative(x)),
    }
}

/// Number of decimal digits in `x`; zero has one digit.
pub fn digit_count(x: &BigUint) -> usize {
    x.to_radix_le(10).len()
}
