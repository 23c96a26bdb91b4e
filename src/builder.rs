//! Builder pattern for configuring Kirkman triple systems.
//!
//! The builder picks a construction for the requested order, or checks a
//! construction that was chosen explicitly.
//!
//! # Example
//!
//! ```
//! use kirkman::KtsBuilder;
//!
//! // Automatically selects the construction
//! let mut kts = KtsBuilder::new().order(21).build().unwrap();
//!
//! let solution = kts.solve().unwrap();
//! assert_eq!(solution.len(), 10);
//! ```
//!
//! # Construction Selection
//!
//! An order v is feasible only when v ≡ 3 (mod 6). Then:
//!
//! - **q = (v - 1) / 2 a prime power ≡ 1 (mod 6)**: two-group construction
//! - **q = v / 3 a prime power ≡ 1 (mod 6)**: three-group construction
//!
//! The two-group construction is tried first. Orders where both apply
//! (v ≡ 3 mod 36, such as 39) can force either one with
//! [`KtsBuilder::construction`].

use crate::construct::{Construction, ConstructionKind};
use crate::error::{Error, Result};
use crate::kts::Kts;

/// Builder for [`Kts`] instances.
///
/// # Example
///
/// ```
/// use kirkman::construct::ConstructionKind;
/// use kirkman::KtsBuilder;
///
/// // Order 39 admits both constructions
/// let kts = KtsBuilder::new()
///     .order(39)
///     .construction(ConstructionKind::ThreeGroup)
///     .build()
///     .unwrap();
///
/// assert_eq!(kts.kind(), ConstructionKind::ThreeGroup);
/// assert_eq!(kts.field_size(), 13);
/// ```
#[derive(Debug, Clone)]
pub struct KtsBuilder {
    order: Option<u32>,
    construction: Option<ConstructionKind>,
    verify: bool,
}

impl Default for KtsBuilder {
    fn default() -> Self {
        Self {
            order: None,
            construction: None,
            verify: true,
        }
    }
}

impl KtsBuilder {
    /// Create a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of points v.
    #[must_use]
    pub fn order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    /// Force a construction instead of selecting one automatically.
    #[must_use]
    pub fn construction(mut self, kind: ConstructionKind) -> Self {
        self.construction = Some(kind);
        self
    }

    /// Whether [`Kts::solve`] verifies the schedule before returning it.
    /// Defaults to `true`.
    #[must_use]
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Configure the system.
    ///
    /// No parallel classes are generated yet; that happens in
    /// [`Kts::solve`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the order is not specified
    /// - the order is infeasible (see [`select_construction`])
    /// - a forced construction does not apply to the order
    pub fn build(self) -> Result<Kts> {
        let order = self
            .order
            .ok_or_else(|| Error::invalid_params("order must be specified"))?;

        let (kind, q) = match self.construction {
            Some(kind) => {
                check_residue(order)?;
                let q = kind
                    .field_size(order)
                    .ok_or(Error::ConstructionNotApplicable {
                        order,
                        construction: kind,
                    })?;
                (kind, q)
            }
            None => select_construction(order)?,
        };

        tracing::debug!(order, %kind, q, "selected construction");

        let construction = Construction::new(kind, q)?;
        Ok(Kts::from_construction(order, construction, self.verify))
    }
}

fn check_residue(order: u32) -> Result<()> {
    if order % 6 == 3 {
        Ok(())
    } else {
        Err(Error::infeasible(
            order,
            format!("order mod 6 must be 3, got {}", order % 6),
        ))
    }
}

/// Select the construction and field size q for `order`.
///
/// # Errors
///
/// Returns [`Error::InfeasibleOrder`] naming the violated condition: either
/// `order mod 6 != 3`, or neither `(order - 1) / 2` nor `order / 3` is a
/// prime power ≡ 1 (mod 6).
///
/// # Example
///
/// ```
/// use kirkman::builder::select_construction;
/// use kirkman::construct::ConstructionKind;
///
/// assert_eq!(select_construction(15).unwrap(), (ConstructionKind::TwoGroup, 7));
/// assert_eq!(select_construction(21).unwrap(), (ConstructionKind::ThreeGroup, 7));
/// assert!(select_construction(9).is_err());
/// assert!(select_construction(10).is_err());
/// ```
pub fn select_construction(order: u32) -> Result<(ConstructionKind, u32)> {
    check_residue(order)?;

    available_constructions(order).into_iter().next().ok_or_else(|| {
        Error::infeasible(
            order,
            format!(
                "neither (v - 1) / 2 = {} nor v / 3 = {} is a prime power q with q mod 6 = 1",
                order / 2,
                order / 3
            ),
        )
    })
}

/// List every construction that applies to `order`, in selection priority
/// order, with the field size each would use.
///
/// ```
/// use kirkman::available_constructions;
/// use kirkman::construct::ConstructionKind;
///
/// assert_eq!(
///     available_constructions(39),
///     vec![(ConstructionKind::TwoGroup, 19), (ConstructionKind::ThreeGroup, 13)]
/// );
/// assert!(available_constructions(33).is_empty());
/// ```
#[must_use]
pub fn available_constructions(order: u32) -> Vec<(ConstructionKind, u32)> {
    ConstructionKind::ALL
        .iter()
        .filter_map(|&kind| kind.field_size(order).map(|q| (kind, q)))
        .collect()
}

/// Filter `orders` down to those at least one construction can build.
///
/// ```
/// use kirkman::builder::feasible_orders;
///
/// assert_eq!(feasible_orders(1..=60), vec![15, 21, 27, 39, 51, 57]);
/// ```
#[must_use]
pub fn feasible_orders(orders: impl IntoIterator<Item = u32>) -> Vec<u32> {
    orders
        .into_iter()
        .filter(|&v| select_construction(v).is_ok())
        .collect()
}
