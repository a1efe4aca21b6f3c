use derive_more::Display;
use log::trace;
use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::{AlgebraicStructure, Associative, BinaryOperation, Commutative, CommutativeRing, CyclicRing, Distributive, Distributivity, Elem, Error, Identity, Inverse, Ring, Semiring};

/// The ring of integers. `operation1` is addition, `operation2` is
/// multiplication.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Display)]
#[display("Z")]
pub struct IntRing {
    generator: BigInt,
}

impl IntRing {
    pub fn new(generator: BigInt) -> Result<Self, Error> {
        trace!("new ring Z, generator: {generator}");

        let ring = Self { generator };
        ring.get_element(ring.generator.clone())?;
        ring.get_element(BigInt::zero())?;
        ring.get_element(BigInt::one())?;

        Ok(ring)
    }
}

impl Default for IntRing {
    fn default() -> Self {
        Self { generator: BigInt::one() }
    }
}

impl AlgebraicStructure for IntRing {
    type Value = BigInt;

    fn has_element_safe(&self, _value: &BigInt) -> bool {
        true
    }
}

// Addition

#[derive(Clone, PartialEq, Debug)]
pub struct IntRingAddition<'a> {
    ring: &'a IntRing,
    identity: Elem<'a, IntRing>,
}

impl<'a> BinaryOperation<'a> for IntRingAddition<'a> {
    type Structure = IntRing;

    fn structure(&self) -> &'a IntRing {
        self.ring
    }

    fn perform(&self, lhs: &Elem<'a, IntRing>, rhs: &Elem<'a, IntRing>) -> Elem<'a, IntRing> {
        self.ring.get_element_safe(lhs.value() + rhs.value())
    }
}

impl<'a> Associative<'a> for IntRingAddition<'a> {}
impl<'a> Commutative<'a> for IntRingAddition<'a> {}

impl<'a> Identity<'a> for IntRingAddition<'a> {
    fn identity(&self) -> Elem<'a, IntRing> {
        self.identity.clone()
    }
}

impl<'a> Inverse<'a> for IntRingAddition<'a> {
    fn inverse(&self, x: &Elem<'a, IntRing>) -> Elem<'a, IntRing> {
        self.ring.get_element_safe(-x.value())
    }
}

// Multiplication

#[derive(Clone, PartialEq, Debug)]
pub struct IntRingMultiplication<'a> {
    ring: &'a IntRing,
    identity: Elem<'a, IntRing>,
    distributivity: Distributivity,
}

impl<'a> BinaryOperation<'a> for IntRingMultiplication<'a> {
    type Structure = IntRing;

    fn structure(&self) -> &'a IntRing {
        self.ring
    }

    fn perform(&self, lhs: &Elem<'a, IntRing>, rhs: &Elem<'a, IntRing>) -> Elem<'a, IntRing> {
        self.ring.get_element_safe(lhs.value() * rhs.value())
    }
}

impl<'a> Associative<'a> for IntRingMultiplication<'a> {}
impl<'a> Commutative<'a> for IntRingMultiplication<'a> {}

impl<'a> Identity<'a> for IntRingMultiplication<'a> {
    fn identity(&self) -> Elem<'a, IntRing> {
        self.identity.clone()
    }
}

impl<'a> Distributive<'a> for IntRingMultiplication<'a> {
    fn distributivity(&self) -> Distributivity {
        self.distributivity
    }
}

impl<'a> Semiring<'a> for IntRing {
    type Operation1 = IntRingAddition<'a>;
    type Operation2 = IntRingMultiplication<'a>;

    fn operation1(&'a self) -> IntRingAddition<'a> {
        let identity = self.get_element_safe(BigInt::zero());
        IntRingAddition { ring: self, identity }
    }

    fn operation2(&'a self) -> IntRingMultiplication<'a> {
        let identity = self.get_element_safe(BigInt::one());
        let distributivity = Distributivity::over(1);
        IntRingMultiplication { ring: self, identity, distributivity }
    }
}

impl<'a> Ring<'a> for IntRing {}
impl<'a> CommutativeRing<'a> for IntRing {}

impl<'a> CyclicRing<'a> for IntRing {
    fn generator(&'a self) -> Elem<'a, Self> {
        self.get_element_safe(self.generator.clone())
    }
}
