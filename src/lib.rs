//! Algebraic structures and their elements.
//!
//! A structure ([`AlgebraicStructure`]) owns the configuration and the
//! membership predicate; an element ([`Elem`]) is a value together with
//! a handle to its structure. Binary operations are values borrowed from
//! their structure, tagged with the laws they satisfy ([`Associative`],
//! [`Commutative`], [`Identity`], [`Inverse`], [`Distributive`]).
//! Structures declare their capabilities through small traits:
//! [`Magma`], [`Group`], [`CommutativeGroup`], [`CyclicGroup`],
//! [`FiniteGroup`] (over [`FiniteStructure`]), [`Semiring`], [`Ring`], [`CommutativeRing`] and
//! [`CyclicRing`].
//!
//! ```
//! use num_bigint::BigInt;
//! use yui_alg::{AlgebraicStructure, BinaryOperation, Identity, Inverse, IntModAddGroup, Magma};
//!
//! let g = IntModAddGroup::new(BigInt::from(5)).unwrap();
//! let op = g.operation();
//!
//! let a = g.get_element(BigInt::from(3)).unwrap();
//! let b = g.get_element(BigInt::from(4)).unwrap();
//!
//! assert_eq!(op.perform(&a, &b).value(), &BigInt::from(2));
//! assert_eq!(op.perform(&a, &op.inverse(&a)), op.identity());
//! assert!(g.get_element(BigInt::from(5)).is_err());
//! ```

mod abst;
mod types;
mod misc;

pub use abst::*;
pub use types::*;
pub use misc::*;

pub mod algo;
pub mod util;
