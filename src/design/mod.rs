//! Core data model of a Kirkman triple system.
//!
//! - [`Triple`]: three distinct points, as generated
//! - [`BlockLabel`]: which base block a triple was developed from
//! - [`Block`]: a labelled triple together with its generating offset
//! - [`ParallelClass`]: blocks that partition the point set
//! - [`Solution`]: the day-indexed schedule, one parallel class per day
//! - [`PointGroups`]: maps (group, field element) to point numbers
//!
//! Points are numbered `1..=v`.

mod groups;
mod verify;

pub use groups::PointGroups;
pub use verify::{verify_solution, VerificationResult};

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A point of the design, numbered from 1.
pub type Point = u32;

/// An unordered block of three distinct points.
///
/// Points are kept in generation order for display; comparisons between
/// triples should go through [`Triple::sorted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triple([Point; 3]);

impl Triple {
    /// Create a triple from three points.
    #[must_use]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self([a, b, c])
    }

    /// The points in generation order.
    #[must_use]
    pub fn points(&self) -> [Point; 3] {
        self.0
    }

    /// The points in ascending order; the canonical form of the block.
    #[must_use]
    pub fn sorted(&self) -> [Point; 3] {
        let mut points = self.0;
        points.sort_unstable();
        points
    }

    /// Whether the triple contains `point`.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.0.contains(&point)
    }

    /// The three unordered pairs, each as `(smaller, larger)`.
    #[must_use]
    pub fn pairs(&self) -> [(Point, Point); 3] {
        let [a, b, c] = self.sorted();
        [(a, b), (a, c), (b, c)]
    }
}

impl From<[Point; 3]> for Triple {
    fn from(points: [Point; 3]) -> Self {
        Self(points)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "({}, {}, {})", a, b, c)
    }
}

/// Identity of a base block within the construction.
///
/// Displayed in the conventional short form: `a_`, `a3`, `b2`, `b0,1`.
/// The derived ordering sorts labels of the same family by index, which is
/// also the order in which constructions emit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlockLabel {
    /// The distinguished block through the zero element of every group.
    Base,
    /// Family A block with index k.
    A(u32),
    /// Family B block with index k.
    B(u32),
    /// Family B block with index k, confined to one point group (1-based).
    BGroup {
        /// Index k.
        index: u32,
        /// Point group, 1-based.
        group: u32,
    },
}

impl BlockLabel {
    /// The family index, if the label has one.
    #[must_use]
    pub fn index(&self) -> Option<u32> {
        match *self {
            Self::Base => None,
            Self::A(k) | Self::B(k) | Self::BGroup { index: k, .. } => Some(k),
        }
    }
}

impl fmt::Display for BlockLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "a_"),
            Self::A(k) => write!(f, "a{}", k),
            Self::B(k) => write!(f, "b{}", k),
            Self::BGroup { index, group } => write!(f, "b{},{}", index, group),
        }
    }
}

/// A triple with the label and offset it was developed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Block {
    /// Base block this triple was developed from.
    pub label: BlockLabel,
    /// Field element the base block was translated by.
    pub offset: u32,
    /// The points.
    pub triple: Triple,
}

/// Where a parallel class came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClassKey {
    /// Developed directly at this offset.
    Offset(u32),
    /// Regrouped from one remainder label across all offsets.
    Remainder(BlockLabel),
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offset(i) => write!(f, "{}", i),
            Self::Remainder(label) => write!(f, "{}", label),
        }
    }
}

/// An ordered collection of blocks meant to partition the point set.
///
/// The partition property is not enforced on insertion; it is checked by
/// [`verify_solution`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParallelClass {
    key: ClassKey,
    blocks: Vec<Block>,
}

impl ParallelClass {
    /// Create an empty class.
    #[must_use]
    pub fn new(key: ClassKey) -> Self {
        Self {
            key,
            blocks: Vec::new(),
        }
    }

    /// Create an empty class with room for `capacity` blocks.
    #[must_use]
    pub fn with_capacity(key: ClassKey, capacity: usize) -> Self {
        Self {
            key,
            blocks: Vec::with_capacity(capacity),
        }
    }

    /// The class key.
    #[must_use]
    pub fn key(&self) -> ClassKey {
        self.key
    }

    /// Append a block.
    pub fn push(&mut self, label: BlockLabel, offset: u32, triple: Triple) {
        self.blocks.push(Block {
            label,
            offset,
            triple,
        });
    }

    /// Append an existing block.
    pub fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// The blocks in insertion order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterate over the triples in insertion order.
    pub fn triples(&self) -> impl Iterator<Item = Triple> + '_ {
        self.blocks.iter().map(|b| b.triple)
    }

    /// Find the first block carrying `label`.
    #[must_use]
    pub fn get(&self, label: BlockLabel) -> Option<&Block> {
        self.blocks.iter().find(|b| b.label == label)
    }

    /// Number of blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the class has no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// One day of the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Day {
    /// Day number, starting at 1.
    pub number: usize,
    /// The triples of this day's parallel class.
    pub triples: Vec<Triple>,
}

/// A day-indexed Kirkman schedule.
///
/// Built once from finalized classes and never mutated afterwards.
///
/// ```
/// use kirkman::Kts;
///
/// let mut kts = Kts::new(15).unwrap();
/// let solution = kts.solve().unwrap();
///
/// assert_eq!(solution.len(), 7);
/// for day in solution.days() {
///     assert_eq!(day.triples.len(), 5);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    order: u32,
    days: Vec<Day>,
}

impl Solution {
    /// Number the classes as days 1, 2, ... in the order given.
    #[must_use]
    pub fn from_classes(order: u32, classes: &[ParallelClass]) -> Self {
        let days = classes
            .iter()
            .enumerate()
            .map(|(i, class)| Day {
                number: i + 1,
                triples: class.triples().collect(),
            })
            .collect();

        Self { order, days }
    }

    /// Build a schedule directly from day contents, e.g. for checking a
    /// schedule produced elsewhere.
    #[must_use]
    pub fn from_days(order: u32, days: Vec<Vec<Triple>>) -> Self {
        let days = days
            .into_iter()
            .enumerate()
            .map(|(i, triples)| Day {
                number: i + 1,
                triples,
            })
            .collect();

        Self { order, days }
    }

    /// The number of points v.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// All days in order.
    #[must_use]
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Look up a day by its 1-based number.
    #[must_use]
    pub fn day(&self, number: usize) -> Option<&Day> {
        number.checked_sub(1).and_then(|i| self.days.get(i))
    }

    /// Iterate over `(day number, triples)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Triple])> + '_ {
        self.days.iter().map(|d| (d.number, d.triples.as_slice()))
    }

    /// Number of days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the schedule has no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of triples over all days.
    #[must_use]
    pub fn triple_count(&self) -> usize {
        self.days.iter().map(|d| d.triples.len()).sum()
    }

    /// Check the schedule, failing on the first violated invariant.
    ///
    /// # Errors
    ///
    /// Returns the first verification issue found: a day that is not a
    /// partition, a repeated triple, a wrong triple total, or a pair of
    /// points not covered exactly once.
    pub fn verify(&self) -> Result<VerificationResult> {
        verify_solution(self).into_result()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in &self.days {
            write!(f, "Day {:>2}:", day.number)?;
            for triple in &day.triples {
                write!(f, "  {:<12}", triple.to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
