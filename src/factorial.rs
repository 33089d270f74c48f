//! Arbitrary-precision factorials.

use num_bigint::BigUint;
use num_traits::One;
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Computes `n!` exactly.
///
/// Multiplies `1..=n` into a running `BigUint`, so there is no upper bound
/// beyond available memory.
pub fn factorial_u64(n: u64) -> BigUint {
    let mut f: BigUint = One::one();
    let mut c: BigUint = One::one();
    let one: BigUint = One::one();

    for _ in 1..n {
        c = &c + &one;
        f = &f * &c;
    }

    f
}

/// Computes `n!`, rejecting negative `n`.
pub fn factorial(n: i64) -> Result<BigUint> {
    let n = u64::try_from(n).map_err(|_| Error::negative(n))?;
    Ok(factorial_u64(n))
}

/// Parses a factorial target from text.
///
/// Surrounding whitespace is ignored. Fractional or otherwise non-integer
/// input is rejected rather than truncated.
pub fn parse_target(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    let value: i128 = trimmed.parse().map_err(|_| Error::NotAnInteger {
        input: trimmed.to_string(),
    })?;
    if value < 0 {
        return Err(Error::negative(value));
    }
    u64::try_from(value).map_err(|_| Error::NotAnInteger {
        input: trimmed.to_string(),
    })
}

/// Factorial calculator that remembers its most recent result.
#[derive(Debug, Default)]
pub struct FactorialCalculator {
    last: Option<(u64, BigUint)>,
}

impl FactorialCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `n!`, reusing the previous result when `n` is unchanged.
    pub fn calculate(&mut self, n: i64) -> Result<&BigUint> {
        let n = u64::try_from(n).map_err(|_| Error::negative(n))?;

        if self.last.as_ref().map(|(cached, _)| *cached) == Some(n) {
            trace!(n, "factorial cache hit");
        } else {
            self.last = None;
        }

        let (_, value) = &*self.last.get_or_insert_with(|| {
            debug!(n, "computing factorial");
            (n, factorial_u64(n))
        });
        Ok(value)
    }

    /// The last computed `(n, n!)` pair, if any.
    pub fn last_calculation(&self) -> Option<(u64, &BigUint)> {
        self.last.as_ref().map(|(n, value)| (*n, value))
    }
}
