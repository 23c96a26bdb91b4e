//! Two-group construction (Construction 1.1) for KTS(2q + 1).
//!
//! Points are two copies of GF(q) plus a fixed point ∞. With α primitive,
//! t = (q - 1) / 6 and m chosen so that 2·α^m = α^t + 1, the base blocks are
//!
//! - `a_` = {0₁, 0₂, ∞}
//! - `a{k}` = {α^(k+m+t)₂, α^(k+m+3t)₂, α^(k+m+5t)₂} for k in [0, t)
//! - `b{k}` = {α^k₁, α^(k+t)₁, α^(k+m)₂} for k in [0, t) ∪ [2t, 3t) ∪ [4t, 5t)
//!
//! Translating them by each i ∈ GF(q) yields q parallel classes, which is
//! already the complete system.
//!
//! ## Example
//!
//! ```
//! use kirkman::construct::{ClassBuilder, TwoGroup};
//! use kirkman::design::{BlockLabel, Triple};
//!
//! let kts15 = TwoGroup::new(7).unwrap();
//! assert_eq!((kts15.alpha(), kts15.m()), (3, 2));
//!
//! let day = kts15.build_class(0);
//! assert_eq!(day.get(BlockLabel::Base).unwrap().triple, Triple::new(1, 8, 15));
//! ```

use super::{ClassBuilder, ConstructionKind};
use crate::design::{BlockLabel, ClassKey, ParallelClass, Point, PointGroups, Triple};
use crate::error::{Error, Result};
use crate::gf::DynamicGf;

/// Two-group construction for Kirkman triple systems of order 2q + 1.
#[derive(Debug, Clone)]
pub struct TwoGroup {
    q: u32,
    t: u32,
    alpha: u32,
    m: u32,
    /// powers[e] = α^e for e in [0, q - 1)
    powers: Vec<u32>,
    groups: PointGroups,
}

impl TwoGroup {
    /// Configure the construction over GF(q).
    ///
    /// # Errors
    ///
    /// Returns an error if q is not a prime power ≡ 1 (mod 6), or if no
    /// primitive element and exponent satisfy the defining equation.
    pub fn new(q: u32) -> Result<Self> {
        if q % 6 != 1 {
            return Err(Error::invalid_params(format!(
                "two-group construction needs q = 1 (mod 6), got q = {}",
                q
            )));
        }

        let field = DynamicGf::new(q)?;
        let t = (q - 1) / 6;
        let (alpha, m) = find_defining_pair(&field, t)?;
        tracing::debug!(%field, t, alpha, m, "two-group parameters");

        let powers = (0..q - 1).map(|e| field.pow(alpha, u64::from(e))).collect();
        let groups = PointGroups::new(field, 2, true);

        Ok(Self {
            q,
            t,
            alpha,
            m,
            powers,
            groups,
        })
    }

    /// The block-repetition parameter t = (q - 1) / 6.
    #[must_use]
    pub fn t(&self) -> u32 {
        self.t
    }

    /// The primitive element α.
    #[must_use]
    pub fn alpha(&self) -> u32 {
        self.alpha
    }

    /// The exponent m with 2·α^m = α^t + 1.
    #[must_use]
    pub fn m(&self) -> u32 {
        self.m
    }

    /// The point layout.
    #[must_use]
    pub fn groups(&self) -> &PointGroups {
        &self.groups
    }

    fn power(&self, exponent: u32) -> u32 {
        self.powers[(exponent % (self.q - 1)) as usize]
    }

    /// Point of `group` at α^exponent, translated by `offset`.
    fn at(&self, group: u32, exponent: u32, offset: u32) -> Point {
        self.groups.locate(group, self.power(exponent), offset)
    }

    fn mixed_block(&self, k: u32, offset: u32) -> Triple {
        let (t, m) = (self.t, self.m);
        Triple::new(
            self.at(0, k, offset),
            self.at(0, k + t, offset),
            self.at(1, k + m, offset),
        )
    }
}

/// Find the first primitive α and exponent m in GF(q) with
/// `2·α^m = α^t + 1`.
///
/// Primitive elements are tried in ascending order and, for each, m runs
/// over the whole of `[0, q)`; the lowest α wins, then the lowest m.
///
/// # Errors
///
/// Returns [`Error::NoDefiningExponent`] if the search is exhausted.
///
/// # Example
///
/// ```
/// use kirkman::construct::find_defining_pair;
/// use kirkman::gf::DynamicGf;
///
/// let gf13 = DynamicGf::new(13).unwrap();
/// assert_eq!(find_defining_pair(&gf13, 2).unwrap(), (2, 8));
/// ```
pub fn find_defining_pair(field: &DynamicGf, t: u32) -> Result<(u32, u32)> {
    let q = field.order();

    for alpha in field.primitive_elements() {
        let rhs = field.add(field.pow(alpha, u64::from(t)), 1);
        let found = (0..q).find(|&m| {
            let power = field.pow(alpha, u64::from(m));
            field.add(power, power) == rhs
        });
        if let Some(m) = found {
            return Ok((alpha, m));
        }
    }

    Err(Error::NoDefiningExponent { q, t })
}

impl ClassBuilder for TwoGroup {
    fn kind(&self) -> ConstructionKind {
        ConstructionKind::TwoGroup
    }

    fn order(&self) -> u32 {
        2 * self.q + 1
    }

    fn field_size(&self) -> u32 {
        self.q
    }

    fn build_class(&self, offset: u32) -> ParallelClass {
        let (t, m) = (self.t, self.m);
        let mut class = ParallelClass::with_capacity(ClassKey::Offset(offset), self.blocks_per_class());

        let infinity = self.groups.fixed_point().unwrap_or(self.order());
        class.push(
            BlockLabel::Base,
            offset,
            Triple::new(
                self.groups.locate(0, 0, offset),
                self.groups.locate(1, 0, offset),
                infinity,
            ),
        );

        for k in 0..t {
            class.push(
                BlockLabel::A(k),
                offset,
                Triple::new(
                    self.at(1, k + m + t, offset),
                    self.at(1, k + m + 3 * t, offset),
                    self.at(1, k + m + 5 * t, offset),
                ),
            );
            class.push(BlockLabel::B(k), offset, self.mixed_block(k, offset));
        }

        for k in (2 * t..3 * t).chain(4 * t..5 * t) {
            class.push(BlockLabel::B(k), offset, self.mixed_block(k, offset));
        }

        class
    }

    fn assemble_classes(&self, developed: Vec<ParallelClass>) -> Vec<ParallelClass> {
        developed
    }
}
