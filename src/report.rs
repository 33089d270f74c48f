//! Console report for a factorial digit-sum calculation.

use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::Calculation;

pub const TITLE: &str = "Factorial Digit Sum Calculator";

/// Renders a [`Calculation`] in the fixed console layout.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    calc: &'a Calculation,
    show_factorial: bool,
}

impl<'a> Report<'a> {
    pub fn new(calc: &'a Calculation) -> Self {
        Self {
            calc,
            show_factorial: true,
        }
    }

    /// Drop the `n! = ...` line; 1000! alone is 2568 digits.
    pub fn without_factorial(mut self) -> Self {
        self.show_factorial = false;
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.calc.target;

        writeln!(f, "{TITLE}")?;
        writeln!(f, "{}", "=".repeat(TITLE.len()))?;
        writeln!(f)?;
        writeln!(f, "Calculating {n}!...")?;
        if self.show_factorial {
            writeln!(f, "{n}! = {}", self.calc.factorial)?;
            writeln!(f)?;
        }
        writeln!(f, "Sum of digits in {n}!: {}", self.calc.digit_sum)
    }
}

/// Writes the full report for `calc` to `out`.
pub fn write_report<W: Write>(out: &mut W, calc: &Calculation) -> Result<()> {
    write!(out, "{}", Report::new(calc))?;
    out.flush()?;
    Ok(())
}
