use derive_more::Display;
use crate::{AlgebraicStructure, Elem};

/// A closed binary operation on `Self::Structure`.
///
/// Operation values borrow the structure they belong to, and every
/// result is an element of that same structure.
pub trait BinaryOperation<'a> {
    type Structure: AlgebraicStructure + 'a;

    fn structure(&self) -> &'a Self::Structure;

    fn perform(&self, lhs: &Elem<'a, Self::Structure>, rhs: &Elem<'a, Self::Structure>) -> Elem<'a, Self::Structure>;
}

// Properties

/// `(a * b) * c == a * (b * c)`
pub trait Associative<'a>: BinaryOperation<'a> {}

/// `a * b == b * a`
pub trait Commutative<'a>: BinaryOperation<'a> {}

/// An operation with a fixed identity element `e`, i.e.
/// `x * e == e * x == x` for all `x`.
pub trait Identity<'a>: BinaryOperation<'a> {
    fn identity(&self) -> Elem<'a, Self::Structure>;

    fn is_identity(&self, x: &Elem<'a, Self::Structure>) -> bool {
        x == &self.identity()
    }
}

/// `x * inverse(x) == inverse(x) * x == e`
pub trait Inverse<'a>: Identity<'a> {
    fn inverse(&self, x: &Elem<'a, Self::Structure>) -> Elem<'a, Self::Structure>;

    /// `lhs * inverse(rhs)`
    fn perform_inv(&self, lhs: &Elem<'a, Self::Structure>, rhs: &Elem<'a, Self::Structure>) -> Elem<'a, Self::Structure> {
        self.perform(lhs, &self.inverse(rhs))
    }
}

/// Records the operation (by its 1-based index within the structure)
/// that an operation distributes over. Not checked at runtime, see
/// [`crate::algo::laws::is_distributive_on`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
#[display("distributive over operation{over}")]
pub struct Distributivity {
    over: usize,
}

impl Distributivity {
    pub fn over(index: usize) -> Self {
        Self { over: index }
    }

    pub fn index(&self) -> usize {
        self.over
    }
}

pub trait Distributive<'a>: BinaryOperation<'a> {
    fn distributivity(&self) -> Distributivity;
}

// Composites

pub trait MagmaOperation<'a>: BinaryOperation<'a> {}

impl<'a, T> MagmaOperation<'a> for T
where T: BinaryOperation<'a> {}

pub trait GroupOperation<'a>:
    Associative<'a> +
    Inverse<'a>
{}

impl<'a, T> GroupOperation<'a> for T
where T: Associative<'a> + Inverse<'a> {}

pub trait CommutativeGroupOperation<'a>:
    GroupOperation<'a> +
    Commutative<'a>
{}

impl<'a, T> CommutativeGroupOperation<'a> for T
where T: GroupOperation<'a> + Commutative<'a> {}

pub trait SemiringOperation1<'a>:
    Associative<'a> +
    Commutative<'a> +
    Identity<'a>
{}

impl<'a, T> SemiringOperation1<'a> for T
where T: Associative<'a> + Commutative<'a> + Identity<'a> {}

pub trait SemiringOperation2<'a>:
    Associative<'a> +
    Distributive<'a>
{}

impl<'a, T> SemiringOperation2<'a> for T
where T: Associative<'a> + Distributive<'a> {}

pub trait RingOperation1<'a>:
    SemiringOperation1<'a> +
    Inverse<'a>
{}

impl<'a, T> RingOperation1<'a> for T
where T: SemiringOperation1<'a> + Inverse<'a> {}

pub trait CommutativeRingOperation2<'a>:
    SemiringOperation2<'a> +
    Commutative<'a> +
    Identity<'a>
{}

impl<'a, T> CommutativeRingOperation2<'a> for T
where T: SemiringOperation2<'a> + Commutative<'a> + Identity<'a> {}
