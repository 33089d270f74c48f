use factorial_digit_sum::{
    digit_count, digit_sum, factorial, run, write_report, Error, FactorialCalculator,
    DEFAULT_TARGET,
};

const FACTORIAL_100: &str = "93326215443944152681699238856266700490715968264381621468592963895217599993229915608941463976156518286253697920827223758251185210916864000000000000000000000000";

#[test]
fn hundred_factorial_digit_sum_is_648() {
    let calc = run(DEFAULT_TARGET).unwrap();
    assert_eq!(calc.target, 100);
    assert_eq!(calc.factorial.to_string(), FACTORIAL_100);
    assert_eq!(digit_count(&calc.factorial), 158);
    assert_eq!(calc.digit_sum, 648);
}

#[test]
fn report_for_default_target() {
    let calc = run(DEFAULT_TARGET).unwrap();
    let mut out = Vec::new();
    write_report(&mut out, &calc).unwrap();

    let expected = format!(
        "Factorial Digit Sum Calculator\n\
         ==============================\n\
         \n\
         Calculating 100!...\n\
         100! = {FACTORIAL_100}\n\
         \n\
         Sum of digits in 100!: 648\n"
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn repeated_runs_are_identical() {
    let first = run(DEFAULT_TARGET).unwrap();
    let second = run(DEFAULT_TARGET).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.report().to_string(), second.report().to_string());
}

#[test]
fn zero_and_one_have_digit_sum_one() {
    for n in [0, 1] {
        let calc = run(n).unwrap();
        assert_eq!(calc.factorial.to_string(), "1");
        assert_eq!(calc.digit_sum, 1);
    }
}

#[test]
fn negative_target_fails() {
    let err = run(-1).unwrap_err();
    assert!(matches!(err, Error::NegativeInput { .. }));
}

#[test]
fn calculator_agrees_with_free_function() {
    let mut calc = FactorialCalculator::new();
    let cached = calc.calculate(DEFAULT_TARGET).unwrap().clone();
    assert_eq!(cached, factorial(DEFAULT_TARGET).unwrap());
    assert_eq!(digit_sum(&cached), 648);
    assert_eq!(calc.last_calculation().map(|(n, _)| n), Some(100));
}
