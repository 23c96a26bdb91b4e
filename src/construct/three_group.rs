//! Three-group construction (Construction 1.2) for KTS(3q).
//!
//! Points are three copies of GF(q). With α primitive and t = (q - 1) / 6,
//! each offset i ∈ GF(q) develops a *super-class* of base blocks
//!
//! - `a_` = {0₁, 0₂, 0₃}
//! - `b{k},{j}` = {α^k_j, α^(k+2t)_j, α^(k+4t)_j} for k in [0, t), j = 1, 2, 3
//! - `a{k}` = {α^k₁, α^(k+2t)₂, α^(k+4t)₃} for k in [0, 6t)
//!
//! which holds more triples than a parallel class. [`split_classes`] keeps
//! `a_`, every `b{k},{j}` and the `a{k}` with ⌊k / t⌋ odd as the real class
//! at offset i. The remaining `a{k}` are regrouped by label: for a fixed k,
//! the translates of `a{k}` over all q offsets form one more parallel class.
//!
//! That gives q + 3t = (v - 1) / 2 classes of q triples each.

use std::collections::BTreeMap;

use super::{ClassBuilder, ConstructionKind};
use crate::design::{BlockLabel, ClassKey, ParallelClass, Point, PointGroups, Triple};
use crate::error::{Error, Result};
use crate::gf::DynamicGf;

/// Three-group construction for Kirkman triple systems of order 3q.
///
/// ```
/// use kirkman::construct::{ClassBuilder, ThreeGroup};
///
/// let kts21 = ThreeGroup::new(7).unwrap();
/// assert_eq!(kts21.order(), 21);
///
/// // the super-class at one offset: a_, three b-blocks, six a-blocks
/// assert_eq!(kts21.build_class(0).len(), 10);
///
/// // after splitting: 7 real classes + 3 regrouped remainder classes
/// let classes = kts21.classes();
/// assert_eq!(classes.len(), 10);
/// assert!(classes.iter().all(|c| c.len() == 7));
/// ```
#[derive(Debug, Clone)]
pub struct ThreeGroup {
    q: u32,
    t: u32,
    alpha: u32,
    /// powers[e] = α^e for e in [0, q - 1)
    powers: Vec<u32>,
    groups: PointGroups,
}

impl ThreeGroup {
    /// Configure the construction over GF(q).
    ///
    /// # Errors
    ///
    /// Returns an error if q is not a prime power ≡ 1 (mod 6).
    pub fn new(q: u32) -> Result<Self> {
        if q % 6 != 1 {
            return Err(Error::invalid_params(format!(
                "three-group construction needs q = 1 (mod 6), got q = {}",
                q
            )));
        }

        let field = DynamicGf::new(q)?;
        let t = (q - 1) / 6;
        let alpha = field.first_primitive_element()?;
        tracing::debug!(%field, t, alpha, "three-group parameters");

        let powers = (0..q - 1).map(|e| field.pow(alpha, u64::from(e))).collect();
        let groups = PointGroups::new(field, 3, false);

        Ok(Self {
            q,
            t,
            alpha,
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

    /// The point layout.
    #[must_use]
    pub fn groups(&self) -> &PointGroups {
        &self.groups
    }

    fn at(&self, group: u32, exponent: u32, offset: u32) -> Point {
        let element = self.powers[(exponent % (self.q - 1)) as usize];
        self.groups.locate(group, element, offset)
    }
}

impl ClassBuilder for ThreeGroup {
    fn kind(&self) -> ConstructionKind {
        ConstructionKind::ThreeGroup
    }

    fn order(&self) -> u32 {
        3 * self.q
    }

    fn field_size(&self) -> u32 {
        self.q
    }

    /// Develop the super-class at `offset`; see [`split_classes`].
    fn build_class(&self, offset: u32) -> ParallelClass {
        let t = self.t;
        let mut class = ParallelClass::with_capacity(ClassKey::Offset(offset), (1 + 9 * t) as usize);

        class.push(
            BlockLabel::Base,
            offset,
            Triple::new(
                self.groups.locate(0, 0, offset),
                self.groups.locate(1, 0, offset),
                self.groups.locate(2, 0, offset),
            ),
        );

        for k in 0..t {
            for group in 0..3 {
                class.push(
                    BlockLabel::BGroup {
                        index: k,
                        group: group + 1,
                    },
                    offset,
                    Triple::new(
                        self.at(group, k, offset),
                        self.at(group, k + 2 * t, offset),
                        self.at(group, k + 4 * t, offset),
                    ),
                );
            }
        }

        for k in 0..6 * t {
            class.push(
                BlockLabel::A(k),
                offset,
                Triple::new(
                    self.at(0, k, offset),
                    self.at(1, k + 2 * t, offset),
                    self.at(2, k + 4 * t, offset),
                ),
            );
        }

        class
    }

    fn assemble_classes(&self, developed: Vec<ParallelClass>) -> Vec<ParallelClass> {
        split_classes(developed, self.t)
    }
}

/// Whether a block of a three-group super-class belongs to the real parallel
/// class at its own offset.
///
/// ```
/// use kirkman::construct::is_real_block;
/// use kirkman::design::BlockLabel;
///
/// // t = 2: a2, a3, a6, a7, a10, a11 are real
/// assert!(is_real_block(BlockLabel::Base, 2));
/// assert!(!is_real_block(BlockLabel::A(1), 2));
/// assert!(is_real_block(BlockLabel::A(3), 2));
/// assert!(!is_real_block(BlockLabel::A(8), 2));
/// assert!(is_real_block(BlockLabel::BGroup { index: 1, group: 3 }, 2));
/// ```
#[must_use]
pub fn is_real_block(label: BlockLabel, t: u32) -> bool {
    match label {
        BlockLabel::Base => true,
        // k in [t, 2t) ∪ [3t, 4t) ∪ [5t, 6t)
        BlockLabel::A(k) => t > 0 && k < 6 * t && (k / t) % 2 == 1,
        BlockLabel::B(k) | BlockLabel::BGroup { index: k, .. } => k < t,
    }
}

/// Split super-classes into real parallel classes plus remainder classes.
///
/// `super_classes` must be in offset order. Real blocks stay in the class of
/// their offset. Every other block is filed under its label, one triple per
/// offset; each label then becomes a class of its own, keyed
/// [`ClassKey::Remainder`]. Real classes come first (offset order), then the
/// remainder classes in ascending label order.
#[must_use]
pub fn split_classes(super_classes: Vec<ParallelClass>, t: u32) -> Vec<ParallelClass> {
    let mut real = Vec::with_capacity(super_classes.len());
    let mut remainder: BTreeMap<BlockLabel, ParallelClass> = BTreeMap::new();

    for super_class in super_classes {
        let mut class = ParallelClass::with_capacity(super_class.key(), super_class.len());
        for &block in super_class.blocks() {
            if is_real_block(block.label, t) {
                class.push_block(block);
            } else {
                remainder
                    .entry(block.label)
                    .or_insert_with(|| ParallelClass::new(ClassKey::Remainder(block.label)))
                    .push_block(block);
            }
        }
        real.push(class);
    }

    tracing::debug!(
        real = real.len(),
        remainder = remainder.len(),
        "split super-classes"
    );

    real.extend(remainder.into_values());
    real
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::Solution;

    #[test]
    fn test_super_class_layout() {
        let kts = ThreeGroup::new(7).unwrap();
        assert_eq!(kts.alpha(), 3);
        assert_eq!(kts.t(), 1);

        let class = kts.build_class(0);
        let labels: Vec<String> = class.blocks().iter().map(|b| b.label.to_string()).collect();
        assert_eq!(
            labels,
            vec!["a_", "b0,1", "b0,2", "b0,3", "a0", "a1", "a2", "a3", "a4", "a5"]
        );

        assert_eq!(class.get(BlockLabel::Base).unwrap().triple, Triple::new(1, 8, 15));
        // α^0 = 1, α^2 = 2, α^4 = 4 in the first group
        assert_eq!(
            class.get(BlockLabel::BGroup { index: 0, group: 1 }).unwrap().triple,
            Triple::new(2, 3, 5)
        );
        // α^0 = 1 in group 1, α^2 = 2 in group 2, α^4 = 4 in group 3
        assert_eq!(class.get(BlockLabel::A(0)).unwrap().triple, Triple::new(2, 10, 19));
    }

    #[test]
    fn test_split_kts21() {
        let kts = ThreeGroup::new(7).unwrap();
        let classes = kts.classes();
        assert_eq!(classes.len(), 10);

        for (i, class) in classes.iter().take(7).enumerate() {
            assert_eq!(class.key(), ClassKey::Offset(i as u32));
            assert_eq!(class.len(), 7);
        }

        let remainder_keys: Vec<ClassKey> = classes[7..].iter().map(ParallelClass::key).collect();
        assert_eq!(
            remainder_keys,
            vec![
                ClassKey::Remainder(BlockLabel::A(0)),
                ClassKey::Remainder(BlockLabel::A(2)),
                ClassKey::Remainder(BlockLabel::A(4)),
            ]
        );

        // one triple per offset, in offset order
        let offsets: Vec<u32> = classes[7].blocks().iter().map(|b| b.offset).collect();
        assert_eq!(offsets, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_real_block_classification() {
        let t = 3;
        let real: Vec<u32> = (0..6 * t).filter(|&k| is_real_block(BlockLabel::A(k), t)).collect();
        assert_eq!(real, vec![3, 4, 5, 9, 10, 11, 15, 16, 17]);
        assert!(is_real_block(BlockLabel::BGroup { index: 2, group: 1 }, t));
        assert!(!is_real_block(BlockLabel::BGroup { index: 3, group: 1 }, t));
        assert!(!is_real_block(BlockLabel::A(0), 0));
    }

    #[test]
    fn test_systems_verify() {
        for q in [7, 13, 19, 25, 31] {
            let kts = ThreeGroup::new(q).unwrap();
            let classes = kts.classes();
            assert_eq!(classes.len(), kts.class_count());
            assert_eq!(classes.len() as u32, q + 3 * kts.t());

            let solution = Solution::from_classes(kts.order(), &classes);
            let result = solution.verify();
            assert!(result.is_ok(), "KTS({}): {:?}", kts.order(), result.err());
        }
    }

    #[test]
    fn test_rejects_bad_field_size() {
        assert!(matches!(ThreeGroup::new(3), Err(Error::InvalidParams { .. })));
        assert_eq!(ThreeGroup::new(55).unwrap_err(), Error::NotPrimePower(55));
    }
}
