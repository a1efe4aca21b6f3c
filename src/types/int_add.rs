use derive_more::Display;
use log::{trace, warn};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::{AlgebraicStructure, Associative, BinaryOperation, Commutative, CommutativeGroup, CyclicGroup, Elem, Error, Group, Identity, Inverse, Magma};

/// The integers under addition, an infinite cyclic group.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Display)]
#[display("Z")]
pub struct IntAddGroup {
    generator: BigInt,
}

impl IntAddGroup {
    /// Every integer is a member, so any `generator` is accepted.
    /// Anything other than `±1` generates a proper subgroup only.
    pub fn new(generator: BigInt) -> Result<Self, Error> {
        trace!("new Z, generator: {generator}");

        let group = Self { generator };
        group.get_element(group.generator.clone())?;
        group.get_element(BigInt::zero())?;

        if !group.generator.abs().is_one() {
            warn!("{} does not generate Z.", group.generator);
        }

        Ok(group)
    }
}

impl Default for IntAddGroup {
    fn default() -> Self {
        Self { generator: BigInt::one() }
    }
}

impl AlgebraicStructure for IntAddGroup {
    type Value = BigInt;

    fn has_element_safe(&self, _value: &BigInt) -> bool {
        true
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct IntAddition<'a> {
    group: &'a IntAddGroup,
    identity: Elem<'a, IntAddGroup>,
}

impl<'a> BinaryOperation<'a> for IntAddition<'a> {
    type Structure = IntAddGroup;

    fn structure(&self) -> &'a IntAddGroup {
        self.group
    }

    fn perform(&self, lhs: &Elem<'a, IntAddGroup>, rhs: &Elem<'a, IntAddGroup>) -> Elem<'a, IntAddGroup> {
        self.group.get_element_safe(lhs.value() + rhs.value())
    }
}

impl<'a> Associative<'a> for IntAddition<'a> {}
impl<'a> Commutative<'a> for IntAddition<'a> {}

impl<'a> Identity<'a> for IntAddition<'a> {
    fn identity(&self) -> Elem<'a, IntAddGroup> {
        self.identity.clone()
    }
}

impl<'a> Inverse<'a> for IntAddition<'a> {
    fn inverse(&self, x: &Elem<'a, IntAddGroup>) -> Elem<'a, IntAddGroup> {
        self.group.get_element_safe(-x.value())
    }
}

impl<'a> Magma<'a> for IntAddGroup {
    type Operation = IntAddition<'a>;

    fn operation(&'a self) -> IntAddition<'a> {
        let identity = self.get_element_safe(BigInt::zero());
        IntAddition { group: self, identity }
    }
}

impl<'a> Group<'a> for IntAddGroup {}
impl<'a> CommutativeGroup<'a> for IntAddGroup {}

impl<'a> CyclicGroup<'a> for IntAddGroup {
    fn generator(&'a self) -> Elem<'a, Self> {
        self.get_element_safe(self.generator.clone())
    }
}
