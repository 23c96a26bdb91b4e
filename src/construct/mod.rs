//! Kirkman triple system construction algorithms.
//!
//! Both constructions (Stinson, *A survey of Kirkman triple systems and
//! related designs*, 1991) develop a set of base blocks through the additive
//! group of GF(q), one translate per offset `i ∈ GF(q)`.
//!
//! ## Available Constructions
//!
//! | Construction | Order | Field size | Days |
//! |--------------|-------|------------|------|
//! | [`TwoGroup`] | v = 2q + 1 | q ≡ 1 (mod 6), prime power | q |
//! | [`ThreeGroup`] | v = 3q | q ≡ 1 (mod 6), prime power | (3q - 1) / 2 |
//!
//! ## Usage
//!
//! Every construction implements [`ClassBuilder`]:
//!
//! ```
//! use kirkman::construct::{ClassBuilder, TwoGroup};
//!
//! let builder = TwoGroup::new(7).unwrap();
//! let classes = builder.classes();
//!
//! assert_eq!(builder.order(), 15);
//! assert_eq!(classes.len(), 7);
//! assert!(classes.iter().all(|c| c.len() == 5));
//! ```

mod three_group;
mod two_group;

pub use three_group::{is_real_block, split_classes, ThreeGroup};
pub use two_group::{find_defining_pair, TwoGroup};

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::design::{ParallelClass, PointGroups};
use crate::error::Result;
use crate::utils::is_prime_power;

/// Which construction family builds a system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstructionKind {
    /// v = 2q + 1: two groups of q points plus one fixed point.
    TwoGroup,
    /// v = 3q: three groups of q points, with class splitting.
    ThreeGroup,
}

impl ConstructionKind {
    /// All construction kinds, in selection priority order.
    pub const ALL: [Self; 2] = [Self::TwoGroup, Self::ThreeGroup];

    /// Short identifier, as accepted on the command line.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::TwoGroup => "two-group",
            Self::ThreeGroup => "three-group",
        }
    }

    /// The literature name of the construction.
    #[must_use]
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::TwoGroup => "Construction 1.1 (v = 2q + 1)",
            Self::ThreeGroup => "Construction 1.2 (v = 3q)",
        }
    }

    /// Number of point groups the construction uses.
    #[must_use]
    pub fn group_count(&self) -> u32 {
        match self {
            Self::TwoGroup => 2,
            Self::ThreeGroup => 3,
        }
    }

    /// The field size q this construction would use for `order`, or `None`
    /// if the construction does not apply.
    ///
    /// ```
    /// use kirkman::construct::ConstructionKind;
    ///
    /// assert_eq!(ConstructionKind::TwoGroup.field_size(15), Some(7));
    /// assert_eq!(ConstructionKind::ThreeGroup.field_size(15), None);
    /// assert_eq!(ConstructionKind::ThreeGroup.field_size(21), Some(7));
    /// ```
    #[must_use]
    pub fn field_size(&self, order: u32) -> Option<u32> {
        let q = match self {
            Self::TwoGroup if order % 2 == 1 => order / 2,
            Self::ThreeGroup if order % 3 == 0 => order / 3,
            _ => return None,
        };
        (q % 6 == 1 && is_prime_power(q)).then_some(q)
    }
}

impl fmt::Display for ConstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A construction that develops parallel classes offset by offset.
pub trait ClassBuilder: Send + Sync {
    /// Which construction this is.
    fn kind(&self) -> ConstructionKind;

    /// Number of points v.
    fn order(&self) -> u32;

    /// Field size q; also the number of offsets developed.
    fn field_size(&self) -> u32;

    /// Blocks per final parallel class, v / 3.
    fn blocks_per_class(&self) -> usize {
        (self.order() / 3) as usize
    }

    /// Number of final parallel classes, (v - 1) / 2.
    fn class_count(&self) -> usize {
        ((self.order() - 1) / 2) as usize
    }

    /// Develop the base blocks at `offset`.
    ///
    /// Depends on nothing but `offset` and the construction parameters, so
    /// offsets can be generated in any order or concurrently.
    fn build_class(&self, offset: u32) -> ParallelClass;

    /// Turn the developed classes (one per offset, in offset order) into the
    /// final parallel classes.
    fn assemble_classes(&self, developed: Vec<ParallelClass>) -> Vec<ParallelClass>;

    /// Develop every offset and assemble the result.
    fn classes(&self) -> Vec<ParallelClass> {
        let developed = (0..self.field_size())
            .map(|offset| {
                tracing::trace!(offset, "developing class");
                self.build_class(offset)
            })
            .collect();
        self.assemble_classes(developed)
    }
}

/// A configured construction; the single dispatch point over the families.
#[derive(Debug, Clone)]
pub enum Construction {
    /// See [`TwoGroup`].
    TwoGroup(TwoGroup),
    /// See [`ThreeGroup`].
    ThreeGroup(ThreeGroup),
}

impl Construction {
    /// Configure `kind` for the field size `q`.
    ///
    /// # Errors
    ///
    /// Propagates field and parameter-search errors from the construction.
    pub fn new(kind: ConstructionKind, q: u32) -> Result<Self> {
        Ok(match kind {
            ConstructionKind::TwoGroup => Self::TwoGroup(TwoGroup::new(q)?),
            ConstructionKind::ThreeGroup => Self::ThreeGroup(ThreeGroup::new(q)?),
        })
    }

    /// The construction as a [`ClassBuilder`].
    #[must_use]
    pub fn as_builder(&self) -> &dyn ClassBuilder {
        match self {
            Self::TwoGroup(c) => c as &dyn ClassBuilder,
            Self::ThreeGroup(c) => c,
        }
    }

    /// The block-repetition parameter t = (q - 1) / 6.
    #[must_use]
    pub fn t(&self) -> u32 {
        match self {
            Self::TwoGroup(c) => c.t(),
            Self::ThreeGroup(c) => c.t(),
        }
    }

    /// The point layout.
    #[must_use]
    pub fn groups(&self) -> &PointGroups {
        match self {
            Self::TwoGroup(c) => c.groups(),
            Self::ThreeGroup(c) => c.groups(),
        }
    }

    /// The primitive element used for indexing.
    #[must_use]
    pub fn alpha(&self) -> u32 {
        match self {
            Self::TwoGroup(c) => c.alpha(),
            Self::ThreeGroup(c) => c.alpha(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_size_selection() {
        assert_eq!(ConstructionKind::TwoGroup.field_size(27), Some(13));
        assert_eq!(ConstructionKind::TwoGroup.field_size(51), Some(25));
        assert_eq!(ConstructionKind::TwoGroup.field_size(21), None); // 10
        assert_eq!(ConstructionKind::TwoGroup.field_size(20), None); // even
        assert_eq!(ConstructionKind::ThreeGroup.field_size(57), Some(19));
        assert_eq!(ConstructionKind::ThreeGroup.field_size(9), None); // 3 mod 6 = 3
        assert_eq!(ConstructionKind::ThreeGroup.field_size(3), None);
        assert_eq!(ConstructionKind::ThreeGroup.field_size(0), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ConstructionKind::TwoGroup.to_string(), "two-group");
        assert_eq!(ConstructionKind::ThreeGroup.group_count(), 3);
        assert!(ConstructionKind::ThreeGroup.method_name().contains("3q"));
    }

    #[test]
    fn test_dispatch() {
        let construction = Construction::new(ConstructionKind::ThreeGroup, 7).unwrap();
        let builder = construction.as_builder();
        assert_eq!(builder.kind(), ConstructionKind::ThreeGroup);
        assert_eq!(builder.order(), 21);
        assert_eq!(builder.class_count(), 10);
        assert_eq!(builder.blocks_per_class(), 7);
        assert_eq!(construction.t(), 1);
        assert_eq!(construction.alpha(), 3);
        assert_eq!(construction.groups().total_points(), 21);
    }
}
