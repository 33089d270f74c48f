//! Factorials and their decimal digit sums.
//!
//! ```
//! let calc = factorial_digit_sum::run(100).unwrap();
//! assert_eq!(calc.digit_sum, 648);
//! ```

pub mod digits;
pub mod error;
pub mod factorial;
pub mod logging;
pub mod report;

pub use digits::{digit_count, digit_sum, digit_sum_signed};
pub use error::{Error, Result};
pub use factorial::{factorial, factorial_u64, parse_target, FactorialCalculator};
pub use report::{write_report, Report};

use num_bigint::BigUint;
use tracing::debug;

/// The number whose factorial the program reports on.
pub const DEFAULT_TARGET: i64 = 100;

/// Result of one factorial digit-sum run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub target: u64,
    pub factorial: BigUint,
    pub digit_sum: u64,
}

impl Calculation {
    pub fn report(&self) -> Report<'_> {
        Report::new(self)
    }
}

/// Computes `n!` and its digit sum.
pub fn run(n: i64) -> Result<Calculation> {
    let factorial = factorial::factorial(n)?;
    debug!(n, digits = digit_count(&factorial), "factorial computed");

    let digit_sum = digit_sum(&factorial);
    debug!(n, digit_sum, "digit sum computed");

    Ok(Calculation {
        target: n.unsigned_abs(),
        factorial,
        digit_sum,
    })
}
