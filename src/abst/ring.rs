use crate::{AlgebraicStructure, CommutativeRingOperation2, Elem, RingOperation1, SemiringOperation1, SemiringOperation2};

// Semirings

/// A set with two operations: `operation1` is associative, commutative
/// and has an identity, `operation2` is associative and distributes over
/// `operation1`.
pub trait Semiring<'a>: AlgebraicStructure + 'a {
    type Operation1: SemiringOperation1<'a, Structure = Self>;
    type Operation2: SemiringOperation2<'a, Structure = Self>;

    fn operation1(&'a self) -> Self::Operation1;
    fn operation2(&'a self) -> Self::Operation2;

    /// Always 2; not meant to be overridden.
    fn operation_count(&self) -> usize {
        2
    }
}

// Rings

pub trait Ring<'a>:
    Semiring<'a, Operation1: RingOperation1<'a>>
{}

pub trait CommutativeRing<'a>:
    Ring<'a> +
    Semiring<'a, Operation2: CommutativeRingOperation2<'a>>
{}

pub trait CyclicRing<'a>: Ring<'a> {
    fn generator(&'a self) -> Elem<'a, Self>;
}
