use std::io;

use anyhow::Context;
use factorial_digit_sum::{logging, run, write_report, DEFAULT_TARGET};

fn main() -> anyhow::Result<()> {
    logging::init();

    let calc = run(DEFAULT_TARGET)
        .with_context(|| format!("failed to compute digit sum of {DEFAULT_TARGET}!"))?;

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &calc).context("failed to print report")?;

    Ok(())
}
