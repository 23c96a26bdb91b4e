//! A configured Kirkman triple system and its lifecycle.
//!
//! A [`Kts`] is created for a fixed order (validation happens up front), and
//! [`Kts::solve`] runs the rest of the pipeline once: develop every offset,
//! split classes where the construction needs it, number the classes as
//! days, and verify.

use std::fmt;

use crate::builder::KtsBuilder;
use crate::construct::{ClassBuilder, Construction, ConstructionKind};
use crate::design::{ParallelClass, PointGroups, Solution, VerificationResult};
use crate::error::{Error, Result};

/// A Kirkman triple system of a given order.
///
/// # Example
///
/// ```
/// use kirkman::Kts;
///
/// let mut kts = Kts::new(15).unwrap();
/// assert!(kts.solution().is_none());
///
/// let solution = kts.solve().unwrap();
/// assert_eq!(solution.len(), 7);
/// assert_eq!(solution.triple_count(), 35);
///
/// let day = solution.day(1).unwrap();
/// assert_eq!(day.triples[0].points(), [1, 8, 15]);
/// ```
#[derive(Debug, Clone)]
pub struct Kts {
    order: u32,
    construction: Construction,
    verify: bool,
    classes: Option<Vec<ParallelClass>>,
    solution: Option<Solution>,
}

impl Kts {
    /// Configure the system of order `order` with the default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InfeasibleOrder`] if `order mod 6 != 3` or no
    /// construction applies.
    pub fn new(order: u32) -> Result<Self> {
        KtsBuilder::new().order(order).build()
    }

    pub(crate) fn from_construction(order: u32, construction: Construction, verify: bool) -> Self {
        Self {
            order,
            construction,
            verify,
            classes: None,
            solution: None,
        }
    }

    /// The number of points v.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// The construction family in use.
    #[must_use]
    pub fn kind(&self) -> ConstructionKind {
        self.builder().kind()
    }

    /// The field size q.
    #[must_use]
    pub fn field_size(&self) -> u32 {
        self.builder().field_size()
    }

    /// The block-repetition parameter t = (q - 1) / 6.
    #[must_use]
    pub fn t(&self) -> u32 {
        self.construction.t()
    }

    /// The point layout of the construction.
    #[must_use]
    pub fn points(&self) -> &PointGroups {
        self.construction.groups()
    }

    /// The literature name of the construction in use.
    #[must_use]
    pub fn method_name(&self) -> &'static str {
        self.kind().method_name()
    }

    /// The configured construction.
    #[must_use]
    pub fn construction(&self) -> &Construction {
        &self.construction
    }

    /// Number of days a solution will have, (v - 1) / 2.
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.builder().class_count()
    }

    /// The finalized parallel classes, once generated.
    #[must_use]
    pub fn classes(&self) -> Option<&[ParallelClass]> {
        self.classes.as_deref()
    }

    /// The solution, once solved.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Build the schedule.
    ///
    /// Generates the parallel classes, assembles them into days and, unless
    /// verification was disabled in the builder, verifies the result. Calling
    /// `solve` again returns the stored solution.
    ///
    /// # Errors
    ///
    /// Returns a verification error if the schedule violates a Kirkman
    /// triple system invariant. This indicates a construction defect.
    pub fn solve(&mut self) -> Result<&Solution> {
        self.solve_with(|builder| builder.classes())
    }

    /// Build the schedule with a custom class generator.
    pub(crate) fn solve_with<F>(&mut self, generate: F) -> Result<&Solution>
    where
        F: FnOnce(&dyn ClassBuilder) -> Vec<ParallelClass>,
    {
        let solution = match self.solution.take() {
            Some(solution) => solution,
            None => {
                let classes = match self.classes.take() {
                    Some(classes) => classes,
                    None => generate(self.builder()),
                };
                tracing::debug!(order = self.order, classes = classes.len(), "assembling solution");

                let solution = Solution::from_classes(self.order, &classes);
                self.classes = Some(classes);
                if self.verify {
                    solution.verify()?;
                }
                solution
            }
        };

        Ok(&*self.solution.insert(solution))
    }

    /// Verify the stored solution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSolved`] before [`Kts::solve`] has succeeded,
    /// otherwise the first verification issue, if any.
    pub fn verify(&self) -> Result<VerificationResult> {
        self.solution
            .as_ref()
            .ok_or(Error::NotSolved { order: self.order })?
            .verify()
    }

    fn builder(&self) -> &dyn ClassBuilder {
        self.construction.as_builder()
    }
}

impl fmt::Display for Kts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Kirkman triple system KTS({})", self.order)?;
        writeln!(f, "  points:       1..={}", self.order)?;
        writeln!(f, "  field:        {}", self.points().field())?;
        writeln!(f, "  construction: {}", self.method_name())?;
        write!(
            f,
            "  days:         {} x {} triples",
            self.day_count(),
            self.builder().blocks_per_class()
        )
    }
}
