//! Primality testing and prime factorization.
//!
//! Field sizes in this crate stay far below 2^32, so plain trial division by
//! 6k ± 1 is both deterministic and fast enough.

use super::power_mod;

/// Result of factoring a prime power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimePowerFactorization {
    /// The prime base.
    pub prime: u32,
    /// The exponent (power).
    pub exponent: u32,
}

impl PrimePowerFactorization {
    /// Compute the value p^k.
    #[must_use]
    pub fn value(&self) -> u64 {
        u64::from(self.prime).pow(self.exponent)
    }
}

/// Test if a number is prime by trial division.
///
/// Returns `false` for `n < 2`.
///
/// # Examples
///
/// ```
/// use kirkman::utils::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(7));
/// assert!(!is_prime(9));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// ```
#[must_use]
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let n = u64::from(n);
    let mut i = 5u64;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }

    true
}

/// Get the smallest prime factor of n.
///
/// Returns `None` if n < 2.
#[must_use]
pub fn smallest_prime_factor(n: u32) -> Option<u32> {
    if n < 2 {
        return None;
    }
    if n % 2 == 0 {
        return Some(2);
    }
    if n % 3 == 0 {
        return Some(3);
    }

    let wide = u64::from(n);
    let mut i = 5u64;
    while i * i <= wide {
        if wide % i == 0 {
            return Some(i as u32);
        }
        if wide % (i + 2) == 0 {
            return Some((i + 2) as u32);
        }
        i += 6;
    }

    Some(n)
}

/// Factor n into `(prime, exponent)` pairs in ascending prime order.
///
/// Returns an empty vector for n < 2.
///
/// # Examples
///
/// ```
/// use kirkman::utils::factorize;
///
/// assert_eq!(factorize(360), vec![(2, 3), (3, 2), (5, 1)]);
/// assert_eq!(factorize(49), vec![(7, 2)]);
/// assert!(factorize(1).is_empty());
/// ```
#[must_use]
pub fn factorize(mut n: u32) -> Vec<(u32, u32)> {
    let mut factors = Vec::new();

    while let Some(p) = smallest_prime_factor(n) {
        let mut exponent = 0;
        while n % p == 0 {
            n /= p;
            exponent += 1;
        }
        factors.push((p, exponent));
    }

    factors
}

/// The distinct primes dividing n, ascending.
#[must_use]
pub fn distinct_prime_factors(n: u32) -> Vec<u32> {
    factorize(n).into_iter().map(|(p, _)| p).collect()
}

/// Test if a number is a prime power (p^k for some prime p and k >= 1).
///
/// # Examples
///
/// ```
/// use kirkman::utils::is_prime_power;
///
/// assert!(is_prime_power(7));   // 7^1
/// assert!(is_prime_power(25));  // 5^2
/// assert!(is_prime_power(343)); // 7^3
/// assert!(!is_prime_power(10)); // 2 * 5
/// assert!(!is_prime_power(1));
/// assert!(!is_prime_power(0));
/// ```
#[must_use]
pub fn is_prime_power(n: u32) -> bool {
    factor_prime_power(n).is_some()
}

/// Factor a number as a prime power if possible.
///
/// Returns `Some` if `n = p^k` for some prime p and k >= 1,
/// otherwise returns `None`.
///
/// # Examples
///
/// ```
/// use kirkman::utils::{factor_prime_power, PrimePowerFactorization};
///
/// assert_eq!(factor_prime_power(49), Some(PrimePowerFactorization { prime: 7, exponent: 2 }));
/// assert_eq!(factor_prime_power(13), Some(PrimePowerFactorization { prime: 13, exponent: 1 }));
/// assert_eq!(factor_prime_power(21), None);
/// ```
#[must_use]
pub fn factor_prime_power(n: u32) -> Option<PrimePowerFactorization> {
    match factorize(n).as_slice() {
        &[(prime, exponent)] => Some(PrimePowerFactorization { prime, exponent }),
        _ => None,
    }
}

/// Test whether `a` is a primitive root modulo the prime `q`.
///
/// `a` is primitive when its multiplicative order modulo `q` is `q - 1`,
/// i.e. `a^((q-1)/r) != 1` for every prime `r` dividing `q - 1`. Returns
/// `false` when `q` is not prime or `a` is a multiple of `q`; extension fields
/// are handled by [`crate::gf::DynamicGf::is_primitive`].
///
/// # Examples
///
/// ```
/// use kirkman::utils::is_primitive_root;
///
/// assert!(is_primitive_root(3, 7));
/// assert!(!is_primitive_root(2, 7)); // 2^3 = 8 = 1 (mod 7)
/// assert!(is_primitive_root(2, 13));
/// assert!(!is_primitive_root(0, 13));
/// ```
#[must_use]
pub fn is_primitive_root(a: u32, q: u32) -> bool {
    if !is_prime(q) || a % q == 0 {
        return false;
    }

    let group_order = q - 1;
    distinct_prime_factors(group_order).into_iter().all(|r| {
        power_mod(u64::from(a), u64::from(group_order / r), u64::from(q)) != 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        for p in [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 97, 101, 1009, 10007] {
            assert!(is_prime(p), "{} is prime", p);
        }
        for n in [0, 1, 4, 6, 8, 9, 10, 25, 49, 100, 121, 169] {
            assert!(!is_prime(n), "{} is composite", n);
        }

        // Carmichael numbers
        assert!(!is_prime(561));
        assert!(!is_prime(1105));
        assert!(!is_prime(1729));
    }

    #[test]
    fn test_is_prime_power() {
        for n in [2, 4, 8, 3, 9, 27, 5, 25, 125, 625, 7, 49, 343, 11, 121, 13, 169] {
            assert!(is_prime_power(n), "{} is a prime power", n);
        }
        for n in [0, 1, 6, 10, 12, 15, 18, 20, 21, 35, 45] {
            assert!(!is_prime_power(n), "{} is not a prime power", n);
        }
    }

    #[test]
    fn test_factorize() {
        assert_eq!(factorize(2), vec![(2, 1)]);
        assert_eq!(factorize(12), vec![(2, 2), (3, 1)]);
        assert_eq!(factorize(48), vec![(2, 4), (3, 1)]);
        assert_eq!(factorize(1001), vec![(7, 1), (11, 1), (13, 1)]);
        assert!(factorize(0).is_empty());
        assert_eq!(distinct_prime_factors(72), vec![2, 3]);
    }

    #[test]
    fn test_factor_prime_power() {
        assert_eq!(
            factor_prime_power(625),
            Some(PrimePowerFactorization {
                prime: 5,
                exponent: 4
            })
        );
        assert_eq!(
            factor_prime_power(7),
            Some(PrimePowerFactorization {
                prime: 7,
                exponent: 1
            })
        );
        assert_eq!(factor_prime_power(0), None);
        assert_eq!(factor_prime_power(1), None);
        assert_eq!(factor_prime_power(12), None);
    }

    #[test]
    fn test_smallest_prime_factor() {
        assert_eq!(smallest_prime_factor(0), None);
        assert_eq!(smallest_prime_factor(1), None);
        assert_eq!(smallest_prime_factor(2), Some(2));
        assert_eq!(smallest_prime_factor(9), Some(3));
        assert_eq!(smallest_prime_factor(35), Some(5));
        assert_eq!(smallest_prime_factor(49), Some(7));
        assert_eq!(smallest_prime_factor(17), Some(17));
    }

    #[test]
    fn test_primitive_roots() {
        let roots_mod_7: Vec<u32> = (0..7).filter(|&a| is_primitive_root(a, 7)).collect();
        assert_eq!(roots_mod_7, vec![3, 5]);

        let roots_mod_13: Vec<u32> = (0..13).filter(|&a| is_primitive_root(a, 13)).collect();
        assert_eq!(roots_mod_13, vec![2, 6, 7, 11]);

        // Composite moduli are outside the domain
        assert!(!is_primitive_root(2, 25));
        assert!(!is_primitive_root(2, 1));
    }

    #[test]
    fn test_prime_power_factorization_value() {
        let f = PrimePowerFactorization {
            prime: 7,
            exponent: 3,
        };
        assert_eq!(f.value(), 343);
    }
}
