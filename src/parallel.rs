//! Parallel construction support for Kirkman triple systems.
//!
//! Offsets are developed independently of each other, so class generation
//! maps directly onto a Rayon parallel iterator. Independent systems of
//! different orders can be solved concurrently as well.
//! Enable with the `parallel` feature flag.
//!
//! # Usage
//!
//! ```
//! use kirkman::Kts;
//!
//! let mut kts = Kts::new(99).unwrap();
//! let solution = kts.solve_par().unwrap();
//! assert_eq!(solution.len(), 49);
//! ```
//!
//! # Performance
//!
//! Parallel generation pays off for large field sizes. For small orders the
//! sequential [`Kts::solve`] is usually faster due to scheduling overhead.

use rayon::prelude::*;

use crate::construct::ClassBuilder;
use crate::design::{ParallelClass, Solution};
use crate::error::Result;
use crate::kts::Kts;

/// Develop every offset of `builder` in parallel and assemble the result.
///
/// Produces exactly the classes of [`ClassBuilder::classes`], in the same
/// order.
#[must_use]
pub fn par_classes(builder: &dyn ClassBuilder) -> Vec<ParallelClass> {
    let developed: Vec<ParallelClass> = (0..builder.field_size())
        .into_par_iter()
        .map(|offset| builder.build_class(offset))
        .collect();
    builder.assemble_classes(developed)
}

impl Kts {
    /// Build the schedule, developing offsets in parallel.
    ///
    /// Behaves exactly like [`Kts::solve`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns a verification error if the schedule violates a Kirkman
    /// triple system invariant.
    pub fn solve_par(&mut self) -> Result<&Solution> {
        self.solve_with(|builder| par_classes(builder))
    }
}

/// Solve one system per order concurrently.
///
/// Results are returned in the order of `orders`.
///
/// ```
/// use kirkman::parallel::par_solve_orders;
///
/// let results = par_solve_orders(&[15, 16, 21]);
/// assert_eq!(results[0].as_ref().unwrap().len(), 7);
/// assert!(results[1].is_err());
/// assert_eq!(results[2].as_ref().unwrap().len(), 10);
/// ```
#[must_use]
pub fn par_solve_orders(orders: &[u32]) -> Vec<Result<Solution>> {
    orders
        .par_iter()
        .map(|&order| {
            let mut kts = Kts::new(order)?;
            kts.solve().cloned()
        })
        .collect()
}
