use num_integer::Integer;
use num_rational::Rational64;

/// Factorials are tabulated up to 20!, the largest that fits in an i64
pub(crate) const FACTORIAL_LIMIT: usize = 21;
pub(crate) const FACTORIALS: [i64; FACTORIAL_LIMIT] = {
    let mut facts = [1i64; FACTORIAL_LIMIT];
    let mut i = 1;
    while i < FACTORIAL_LIMIT {
        facts[i] = facts[i - 1] * (i as i64);
        i += 1;
    }
    facts
};

/// Exact factorial. Callers keep `n` below `FACTORIAL_LIMIT`.
pub(crate) fn factorial(n: usize) -> i64 {
    FACTORIALS[n]
}

/// Exact ratio `numer / denom` of two factorial products
pub(crate) fn factorial_ratio(numer: &[usize], denom: &[usize]) -> Rational64 {
    let product = |ns: &[usize]| {
        ns.iter()
            .fold(Rational64::from_integer(1), |acc, &n| {
                acc * Rational64::from_integer(factorial(n))
            })
    };
    product(numer) / product(denom)
}

/// Least common multiple of the denominators of `values`
pub(crate) fn lcm_of_denominators<'a>(values: impl IntoIterator<Item = &'a Rational64>) -> i64 {
    values.into_iter().fold(1, |acc, v| acc.lcm(v.denom()))
}

/// Greatest common divisor of the numerators of `values`, 0 for no values
pub(crate) fn gcd_of_numerators<'a>(values: impl IntoIterator<Item = &'a Rational64>) -> i64 {
    values.into_iter().fold(0, |acc, v| acc.gcd(v.numer()))
}
