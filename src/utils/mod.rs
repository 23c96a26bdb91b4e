//! Number-theory utilities: primality, prime-power factorization,
//! primitive roots and modular exponentiation.
//!
//! These are the integer-level building blocks behind the Galois field in
//! [`crate::gf`] and the order selection in [`crate::builder`]. All of them
//! are total functions: inputs outside the mathematical domain yield `false`,
//! `None` or `0` rather than panicking.

mod primality;

pub use primality::{
    distinct_prime_factors, factor_prime_power, factorize, is_prime, is_prime_power,
    is_primitive_root, smallest_prime_factor, PrimePowerFactorization,
};

/// Compute `base^exponent mod modulus` by repeated squaring.
///
/// Runs in O(log exponent) multiplications. An exponent of zero yields `1`
/// (reduced modulo `modulus`). A modulus of `0` or `1` yields `0`.
///
/// # Examples
///
/// ```
/// use kirkman::utils::power_mod;
///
/// assert_eq!(power_mod(2, 10, 1000), 24);  // 1024 mod 1000
/// assert_eq!(power_mod(3, 5, 7), 5);       // 243 mod 7
/// assert_eq!(power_mod(5, 0, 7), 1);
/// assert_eq!(power_mod(3, 1_000_000_006, 1_000_000_007), 1); // Fermat
/// ```
#[must_use]
pub fn power_mod(base: u64, exponent: u64, modulus: u64) -> u64 {
    if modulus <= 1 {
        return 0;
    }

    let modulus = u128::from(modulus);
    let mut base = u128::from(base) % modulus;
    let mut exponent = exponent;
    let mut result = 1u128;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result * base % modulus;
        }
        exponent >>= 1;
        base = base * base % modulus;
    }

    // result < modulus <= u64::MAX
    result as u64
}
