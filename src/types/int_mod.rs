use derive_more::Display;
use log::trace;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use rand::Rng;

use crate::{AlgebraicStructure, Associative, BinaryOperation, Commutative, CommutativeGroup, CyclicGroup, Elem, Elements, Error, FiniteGroup, FiniteStructure, Group, Identity, Inverse, Magma};
use crate::misc::{ensure, increment, is_in_range, random_below};

/// The integers modulo `n` under addition, a finite cyclic group.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Display)]
#[display("Z/{n}")]
pub struct IntModAddGroup {
    n: BigInt,
    generator: BigInt,
}

impl IntModAddGroup {
    /// `Z/n` generated by `1` (by `0` when `n = 1`).
    pub fn new(n: BigInt) -> Result<Self, Error> {
        let generator = if n.is_one() { BigInt::zero() } else { BigInt::one() };
        Self::with_generator(n, generator)
    }

    /// Fails unless `0 <= generator < n` and `gcd(generator, n) = 1`.
    pub fn with_generator(n: BigInt, generator: BigInt) -> Result<Self, Error> {
        trace!("new Z/{n}, generator: {generator}");

        ensure!(n.is_positive(), InvalidConfig, "modulus must be positive: {n}");

        let group = Self { n, generator };
        group.get_element(group.generator.clone()).map_err(|e|
            Error::InvalidConfig(format!("generator rejected ({e})"))
        )?;
        group.get_element(BigInt::zero())?;

        ensure!(
            group.generator.gcd(&group.n).is_one(),
            InvalidConfig, "{} does not generate {group}", group.generator
        );

        Ok(group)
    }

    pub fn n(&self) -> &BigInt {
        &self.n
    }
}

impl AlgebraicStructure for IntModAddGroup {
    type Value = BigInt;

    fn has_element_safe(&self, value: &BigInt) -> bool {
        is_in_range(value, &BigInt::zero(), &self.n)
    }

    fn uniform_random_element_with<R>(&self, rng: &mut R) -> Result<Elem<'_, Self>, Error>
    where R: Rng + ?Sized {
        let v = random_below(&self.n, rng)?;
        Ok(self.get_element_safe(v))
    }
}

impl FiniteStructure for IntModAddGroup {
    // 0, 1, ..., n - 1
    fn elements(&self) -> Elements<'_, Self> {
        let itr = itertools::iterate(BigInt::zero(), increment)
            .take_while(|i| i < &self.n)
            .map(|i| self.get_element_safe(i));
        Box::new(itr)
    }

    fn element_count(&self) -> BigInt {
        self.n.clone()
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct IntModAddition<'a> {
    group: &'a IntModAddGroup,
    identity: Elem<'a, IntModAddGroup>,
}

impl<'a> BinaryOperation<'a> for IntModAddition<'a> {
    type Structure = IntModAddGroup;

    fn structure(&self) -> &'a IntModAddGroup {
        self.group
    }

    fn perform(&self, lhs: &Elem<'a, IntModAddGroup>, rhs: &Elem<'a, IntModAddGroup>) -> Elem<'a, IntModAddGroup> {
        let v = (lhs.value() + rhs.value()).mod_floor(&self.group.n);
        self.group.get_element_safe(v)
    }
}

impl<'a> Associative<'a> for IntModAddition<'a> {}
impl<'a> Commutative<'a> for IntModAddition<'a> {}

impl<'a> Identity<'a> for IntModAddition<'a> {
    fn identity(&self) -> Elem<'a, IntModAddGroup> {
        self.identity.clone()
    }
}

impl<'a> Inverse<'a> for IntModAddition<'a> {
    // the additive inverse, n - x mod n.
    fn inverse(&self, x: &Elem<'a, IntModAddGroup>) -> Elem<'a, IntModAddGroup> {
        let n = &self.group.n;
        let v = (n - x.value()).mod_floor(n);
        self.group.get_element_safe(v)
    }
}

impl<'a> Magma<'a> for IntModAddGroup {
    type Operation = IntModAddition<'a>;

    fn operation(&'a self) -> IntModAddition<'a> {
        let identity = self.get_element_safe(BigInt::zero());
        IntModAddition { group: self, identity }
    }
}

impl<'a> Group<'a> for IntModAddGroup {}
impl<'a> CommutativeGroup<'a> for IntModAddGroup {}

impl<'a> CyclicGroup<'a> for IntModAddGroup {
    fn generator(&'a self) -> Elem<'a, Self> {
        self.get_element_safe(self.generator.clone())
    }
}

impl<'a> FiniteGroup<'a> for IntModAddGroup {}
