use num_bigint::BigInt;
use crate::{CommutativeGroupOperation, Elem, FiniteStructure, GroupOperation, Magma};

// Groups

pub trait Group<'a>:
    Magma<'a, Operation: GroupOperation<'a>>
{}

pub trait CommutativeGroup<'a>:
    Group<'a> +
    Magma<'a, Operation: CommutativeGroupOperation<'a>>
{}

/// A group generated by a single element.
///
/// The generator is asserted by the implementor, not verified. For finite
/// groups see [`crate::algo::generator::spans_group`].
pub trait CyclicGroup<'a>: Group<'a> {
    fn generator(&'a self) -> Elem<'a, Self>;
}

/// A group with finitely many elements. The group order is the
/// element count.
pub trait FiniteGroup<'a>: Group<'a> + FiniteStructure {
    fn order(&self) -> BigInt {
        self.element_count()
    }
}
