//! # Kirkman
//!
//! Kirkman triple systems built over Galois fields.
//!
//! ## Overview
//!
//! A Kirkman triple system KTS(v) is a Steiner triple system on v points
//! (every pair of points lies in exactly one triple) whose triples split
//! into (v - 1) / 2 parallel classes, each of which partitions the points.
//! It answers Kirkman's schoolgirl problem: walk v girls out in triples on
//! (v - 1) / 2 days so that no two girls walk together twice.
//!
//! This library provides:
//! - Two constructions from base blocks developed over GF(q)
//! - Runtime Galois field arithmetic for every prime power q
//! - Verification of the partition, uniqueness and pair-covering laws
//! - A builder API that selects the construction for an order
//!
//! ## Quick Start
//!
//! ```rust
//! use kirkman::Kts;
//!
//! // Automatically selects the construction
//! let mut kts = Kts::new(15).unwrap();
//! let solution = kts.solve().unwrap();
//!
//! assert_eq!(solution.len(), 7);          // days
//! assert_eq!(solution.triple_count(), 35);
//! for (_, triples) in solution.iter() {
//!     assert_eq!(triples.len(), 5);
//! }
//! ```
//!
//! Or use a specific construction directly:
//!
//! ```rust
//! use kirkman::construct::{ClassBuilder, ThreeGroup};
//! use kirkman::design::Solution;
//!
//! let construction = ThreeGroup::new(7).unwrap();
//! let solution = Solution::from_classes(21, &construction.classes());
//!
//! assert!(solution.verify().is_ok());
//! assert_eq!(solution.len(), 10);
//! ```
//!
//! ## Notation
//!
//! - **v**: the order (number of points), v ≡ 3 (mod 6)
//! - **q**: the field size, (v - 1) / 2 or v / 3, a prime power ≡ 1 (mod 6)
//! - **t**: (q - 1) / 6
//! - **α**: a primitive element of GF(q)
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of design structures
//! - `parallel`: Enable parallel class generation using rayon

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod construct;
pub mod design;
pub mod error;
pub mod gf;
pub mod kts;
pub mod utils;

#[cfg(feature = "parallel")]
pub mod parallel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::{available_constructions, feasible_orders, select_construction, KtsBuilder};
    pub use crate::construct::{ClassBuilder, Construction, ConstructionKind, ThreeGroup, TwoGroup};
    pub use crate::design::{
        verify_solution, Block, BlockLabel, ClassKey, Day, ParallelClass, Point, PointGroups,
        Solution, Triple, VerificationResult,
    };
    pub use crate::error::{Error, Result};
    pub use crate::gf::DynamicGf;
    pub use crate::kts::Kts;
    pub use crate::utils::{factor_prime_power, is_prime, is_prime_power, is_primitive_root, power_mod};

    #[cfg(feature = "parallel")]
    pub use crate::parallel::{par_classes, par_solve_orders};
}

// Re-export commonly used items at crate root
pub use builder::{available_constructions, feasible_orders, KtsBuilder};
pub use construct::ConstructionKind;
pub use design::{verify_solution, Solution, Triple};
pub use error::{Error, Result};
pub use kts::Kts;
pub use utils::{is_prime, is_prime_power};

#[cfg(feature = "parallel")]
pub use parallel::{par_classes, par_solve_orders};
