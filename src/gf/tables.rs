//! Precomputed arithmetic tables for extension fields GF(p^n).
//!
//! Elements are encoded as integers a_0 + a_1*p + ... + a_{n-1}*p^{n-1},
//! the base-p digits being the polynomial coefficients. The tables cost
//! O(q²) memory, which is fine for the field sizes Kirkman orders reach.

use super::poly::get_irreducible_poly;
use crate::error::{Error, Result};

/// Addition and multiplication tables for GF(p^n), n >= 2.
#[derive(Debug, Clone)]
pub struct GfTables {
    order: u32,
    characteristic: u32,
    degree: u32,
    /// add[a * order + b] = a + b
    add: Vec<u32>,
    /// mul[a * order + b] = a * b
    mul: Vec<u32>,
}

impl GfTables {
    /// Build tables for GF(p^n).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoIrreduciblePolynomial`] if no defining polynomial
    /// exists for the parameters.
    pub fn new(p: u32, n: u32) -> Result<Self> {
        let order = p.pow(n);
        let irr_poly = get_irreducible_poly(p, n).ok_or(Error::NoIrreduciblePolynomial(order))?;

        let size = (order as usize) * (order as usize);
        let mut add = vec![0u32; size];
        let mut mul = vec![0u32; size];

        for a in 0..order {
            for b in 0..order {
                let idx = (a * order + b) as usize;
                add[idx] = poly_add(a, b, p, n);
                mul[idx] = poly_mul(a, b, p, n, &irr_poly);
            }
        }

        Ok(Self {
            order,
            characteristic: p,
            degree: n,
            add,
            mul,
        })
    }

    /// Get the field order.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Get the field characteristic.
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        self.characteristic
    }

    /// Get the extension degree.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Add two field elements.
    #[must_use]
    pub fn add(&self, a: u32, b: u32) -> u32 {
        self.add[(a * self.order + b) as usize]
    }

    /// Multiply two field elements.
    #[must_use]
    pub fn mul(&self, a: u32, b: u32) -> u32 {
        self.mul[(a * self.order + b) as usize]
    }
}

/// Add two polynomials represented as integers (coefficient-wise mod p).
fn poly_add(mut a: u32, mut b: u32, p: u32, n: u32) -> u32 {
    let mut result = 0u32;
    let mut pow_p = 1u32;

    for _ in 0..n {
        result += ((a % p + b % p) % p) * pow_p;
        a /= p;
        b /= p;
        pow_p *= p;
    }

    result
}

/// Multiply two polynomials and reduce modulo the irreducible polynomial.
fn poly_mul(a: u32, b: u32, p: u32, n: u32, irr_poly: &[u32]) -> u32 {
    let n = n as usize;
    let coeffs = |mut x: u32| -> Vec<u64> {
        (0..n)
            .map(|_| {
                let c = u64::from(x % p);
                x /= p;
                c
            })
            .collect()
    };
    let a_coeffs = coeffs(a);
    let b_coeffs = coeffs(b);
    let p64 = u64::from(p);

    let mut product = vec![0u64; 2 * n - 1];
    for (i, &ac) in a_coeffs.iter().enumerate() {
        for (j, &bc) in b_coeffs.iter().enumerate() {
            product[i + j] = (product[i + j] + ac * bc) % p64;
        }
    }

    // x^n = -(c_{n-1}*x^{n-1} + ... + c_0) modulo the irreducible polynomial
    for i in (n..product.len()).rev() {
        let coef = product[i];
        if coef == 0 {
            continue;
        }
        product[i] = 0;
        for (j, &c) in irr_poly.iter().enumerate() {
            let sub = coef * u64::from(c) % p64;
            product[i - n + j] = (product[i - n + j] + p64 - sub) % p64;
        }
    }

    product[..n]
        .iter()
        .rev()
        .fold(0u64, |acc, &c| acc * p64 + c) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gf25_tables() {
        let gf25 = GfTables::new(5, 2).unwrap();
        assert_eq!(gf25.order(), 25);
        assert_eq!(gf25.characteristic(), 5);
        assert_eq!(gf25.degree(), 2);

        // (1 + 2x) + (4 + 4x) = 0 + 1x
        assert_eq!(gf25.add(11, 24), 5);
        // x * x = x^2 = -2 = 3
        assert_eq!(gf25.mul(5, 5), 3);
    }

    #[test]
    fn test_field_axioms_gf49() {
        let gf49 = GfTables::new(7, 2).unwrap();

        for a in 0..49u32 {
            assert_eq!(gf49.add(a, 0), a);
            assert_eq!(gf49.mul(a, 1), a);
            assert_eq!(gf49.mul(a, 0), 0);
            if a != 0 {
                let inverses = (1..49).filter(|&b| gf49.mul(a, b) == 1).count();
                assert_eq!(inverses, 1, "{} has a unique inverse", a);
            }
            for b in 0..49u32 {
                assert_eq!(gf49.add(a, b), gf49.add(b, a));
                assert_eq!(gf49.mul(a, b), gf49.mul(b, a));
            }
        }
    }
}
