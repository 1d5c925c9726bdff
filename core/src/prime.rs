use std::ops::RangeInclusive;

/// Trial division up to the square root of `n`.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let mut i = 2;
    while within_sqrt(i, n) {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}

/// `i * i <= n` without forming the product, which overflows near `i64::MAX`.
fn within_sqrt(i: i64, n: i64) -> bool {
    i <= n / i
}

pub fn primes_in(range: RangeInclusive<i64>) -> impl Iterator<Item = i64> {
    range.filter(|&n| is_prime(n))
}
