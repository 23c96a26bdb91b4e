//! Galois field arithmetic for Kirkman constructions.
//!
//! Both constructions develop base blocks through the additive group of
//! GF(q) and index block positions by powers of a primitive element, so the
//! field has to be a real field for every prime power q, not integers mod q.
//!
//! [`DynamicGf`] is configured at runtime:
//! - prime q uses direct modular arithmetic,
//! - q = p^n with n >= 2 uses precomputed [`GfTables`].
//!
//! Elements are the integers `0..q`; for extension fields the base-p digits
//! of an element are its polynomial coefficients.
//!
//! ```
//! use kirkman::gf::DynamicGf;
//!
//! let gf7 = DynamicGf::new(7).unwrap();
//! assert_eq!(gf7.add(3, 5), 1);
//! assert_eq!(gf7.pow(3, 6), 1);
//! assert_eq!(gf7.first_primitive_element().unwrap(), 3);
//!
//! let gf25 = DynamicGf::new(25).unwrap();
//! assert_eq!(gf25.to_string(), "GF(5^2)");
//! ```

mod poly;
mod tables;

pub use poly::{find_irreducible_poly, get_irreducible_poly, is_irreducible, IRREDUCIBLE_POLYS};
pub use tables::GfTables;

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::utils::{distinct_prime_factors, factor_prime_power, is_primitive_root, power_mod};

#[derive(Debug, Clone)]
enum Arithmetic {
    Prime(u32),
    Extension(Arc<GfTables>),
}

/// A runtime-configured Galois field GF(q).
///
/// Cloning is cheap; extension tables are shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct DynamicGf {
    arithmetic: Arithmetic,
    characteristic: u32,
    degree: u32,
}

impl DynamicGf {
    /// Create the field of the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPrimePower`] if `order` is not a prime power, or
    /// [`Error::NoIrreduciblePolynomial`] if the extension cannot be built.
    pub fn new(order: u32) -> Result<Self> {
        let factorization = factor_prime_power(order).ok_or(Error::NotPrimePower(order))?;
        let (p, n) = (factorization.prime, factorization.exponent);

        let arithmetic = if n == 1 {
            Arithmetic::Prime(p)
        } else {
            Arithmetic::Extension(Arc::new(GfTables::new(p, n)?))
        };

        Ok(Self {
            arithmetic,
            characteristic: p,
            degree: n,
        })
    }

    /// Number of field elements.
    #[must_use]
    pub fn order(&self) -> u32 {
        match &self.arithmetic {
            Arithmetic::Prime(p) => *p,
            Arithmetic::Extension(tables) => tables.order(),
        }
    }

    /// The prime p where q = p^n.
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        self.characteristic
    }

    /// The extension degree n where q = p^n.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Field addition. Operands must lie in `0..q`.
    #[must_use]
    pub fn add(&self, a: u32, b: u32) -> u32 {
        match &self.arithmetic {
            Arithmetic::Prime(p) => ((u64::from(a) + u64::from(b)) % u64::from(*p)) as u32,
            Arithmetic::Extension(tables) => tables.add(a, b),
        }
    }

    /// Field multiplication. Operands must lie in `0..q`.
    #[must_use]
    pub fn mul(&self, a: u32, b: u32) -> u32 {
        match &self.arithmetic {
            Arithmetic::Prime(p) => ((u64::from(a) * u64::from(b)) % u64::from(*p)) as u32,
            Arithmetic::Extension(tables) => tables.mul(a, b),
        }
    }

    /// Compute `base^exp` by repeated squaring. `exp == 0` yields 1.
    #[must_use]
    pub fn pow(&self, mut base: u32, mut exp: u64) -> u32 {
        if let Arithmetic::Prime(p) = &self.arithmetic {
            return power_mod(u64::from(base), exp, u64::from(*p)) as u32;
        }

        let mut result = 1u32;
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            exp >>= 1;
            base = self.mul(base, base);
        }
        result
    }

    /// Whether `a` generates the multiplicative group of the field.
    #[must_use]
    pub fn is_primitive(&self, a: u32) -> bool {
        match &self.arithmetic {
            Arithmetic::Prime(p) => is_primitive_root(a, *p),
            Arithmetic::Extension(tables) => {
                let group_order = tables.order() - 1;
                a != 0
                    && a < tables.order()
                    && distinct_prime_factors(group_order)
                        .into_iter()
                        .all(|r| self.pow(a, u64::from(group_order / r)) != 1)
            }
        }
    }

    /// All primitive elements in ascending order.
    pub fn primitive_elements(&self) -> impl Iterator<Item = u32> + '_ {
        (1..self.order()).filter(move |&a| self.is_primitive(a))
    }

    /// The smallest primitive element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPrimitiveElement`] if none exists, which cannot
    /// happen for a correctly built field.
    pub fn first_primitive_element(&self) -> Result<u32> {
        self.primitive_elements()
            .next()
            .ok_or(Error::NoPrimitiveElement { q: self.order() })
    }
}

impl fmt::Display for DynamicGf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.degree == 1 {
            write!(f, "GF({})", self.characteristic)
        } else {
            write!(f, "GF({}^{})", self.characteristic, self.degree)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_field() {
        let gf7 = DynamicGf::new(7).unwrap();
        assert_eq!(gf7.order(), 7);
        assert_eq!(gf7.characteristic(), 7);
        assert_eq!(gf7.degree(), 1);

        assert_eq!(gf7.add(6, 1), 0);
        assert_eq!(gf7.mul(3, 5), 1);
        assert_eq!(gf7.pow(3, 0), 1);
        assert_eq!(gf7.pow(3, 2), 2);
        assert_eq!(gf7.pow(3, 13), 3); // exponents wrap modulo q - 1
    }

    #[test]
    fn test_invalid_order() {
        assert_eq!(DynamicGf::new(6).unwrap_err(), Error::NotPrimePower(6));
        assert!(DynamicGf::new(21).is_err());
        assert!(DynamicGf::new(1).is_err());
        assert!(DynamicGf::new(0).is_err());
    }

    #[test]
    fn test_primitive_elements_prime() {
        let gf13 = DynamicGf::new(13).unwrap();
        let prims: Vec<u32> = gf13.primitive_elements().collect();
        assert_eq!(prims, vec![2, 6, 7, 11]);
        assert_eq!(gf13.first_primitive_element().unwrap(), 2);
    }

    #[test]
    fn test_primitive_elements_extension() {
        let gf25 = DynamicGf::new(25).unwrap();
        assert_eq!(gf25.first_primitive_element().unwrap(), 6);
        // phi(24) = 8 generators
        assert_eq!(gf25.primitive_elements().count(), 8);

        let alpha = gf25.first_primitive_element().unwrap();
        let mut seen: Vec<u32> = (0..24).map(|k| gf25.pow(alpha, k)).collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..25).collect::<Vec<_>>());

        let gf49 = DynamicGf::new(49).unwrap();
        assert_eq!(gf49.first_primitive_element().unwrap(), 9);
        assert_eq!(gf49.primitive_elements().count(), 16); // phi(48)
    }

    #[test]
    fn test_display() {
        assert_eq!(DynamicGf::new(7).unwrap().to_string(), "GF(7)");
        assert_eq!(DynamicGf::new(49).unwrap().to_string(), "GF(7^2)");
    }
}
