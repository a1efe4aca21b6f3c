use derive_more::Display;
use itertools::Itertools;
use num_bigint::BigInt;

use yui_alg::*;
use yui_alg::algo::generator::{element_order, spans_group};
use yui_alg::algo::laws::satisfies_commutative_group_laws;

// The Klein four-group {0, 1, 2, 3} under xor. It is not cyclic, but
// nothing stops an implementor from claiming a generator.
#[derive(Clone, PartialEq, Eq, Debug, Display)]
#[display("V4")]
struct KleinGroup;

impl AlgebraicStructure for KleinGroup {
    type Value = u8;

    fn has_element_safe(&self, value: &u8) -> bool {
        *value < 4
    }
}

impl FiniteStructure for KleinGroup {
    fn elements(&self) -> Elements<'_, Self> {
        Box::new((0 .. 4).map(|v| self.get_element_safe(v)))
    }

    fn element_count(&self) -> BigInt {
        BigInt::from(4)
    }
}

struct Xor<'a> {
    group: &'a KleinGroup,
}

impl<'a> BinaryOperation<'a> for Xor<'a> {
    type Structure = KleinGroup;

    fn structure(&self) -> &'a KleinGroup {
        self.group
    }

    fn perform(&self, lhs: &Elem<'a, KleinGroup>, rhs: &Elem<'a, KleinGroup>) -> Elem<'a, KleinGroup> {
        self.group.get_element_safe(lhs.value() ^ rhs.value())
    }
}

impl<'a> Associative<'a> for Xor<'a> {}
impl<'a> Commutative<'a> for Xor<'a> {}

impl<'a> Identity<'a> for Xor<'a> {
    fn identity(&self) -> Elem<'a, KleinGroup> {
        self.group.get_element_safe(0)
    }
}

impl<'a> Inverse<'a> for Xor<'a> {
    fn inverse(&self, x: &Elem<'a, KleinGroup>) -> Elem<'a, KleinGroup> {
        x.clone()
    }
}

impl<'a> Magma<'a> for KleinGroup {
    type Operation = Xor<'a>;

    fn operation(&'a self) -> Xor<'a> {
        Xor { group: self }
    }
}

impl<'a> Group<'a> for KleinGroup {}
impl<'a> CommutativeGroup<'a> for KleinGroup {}

impl<'a> CyclicGroup<'a> for KleinGroup {
    fn generator(&'a self) -> Elem<'a, Self> {
        self.get_element_safe(1)
    }
}

impl<'a> FiniteGroup<'a> for KleinGroup {}

#[test]
fn klein_is_group() {
    let v = KleinGroup;
    let elems = v.elements().collect_vec();

    assert_eq!(elems.len(), 4);
    assert_eq!(v.order(), BigInt::from(4));
    assert_eq!(v.operation_count(), 1);
    assert!(satisfies_commutative_group_laws(&v, &elems));
}

#[test]
fn klein_membership() {
    let v = KleinGroup;

    assert!(v.get_element(3).is_ok());
    assert!(matches!(v.get_element(4), Err(Error::InvalidElement(_))));
    assert!(!v.has_element(None));
}

#[test]
fn klein_false_generator() {
    let v = KleinGroup;
    let op = v.operation();

    for x in v.elements().skip(1) {
        assert_eq!(element_order(&op, &x, &BigInt::from(4)), Some(BigInt::from(2)));
    }
    assert!(!spans_group(&v));
}

#[test]
fn klein_elements_are_distinct_from_z4() {
    let v = KleinGroup;
    let z4 = IntModAddGroup::new(BigInt::from(4)).unwrap();

    assert!(spans_group(&z4));
    assert_eq!(v.element_count(), z4.element_count());

    let a = v.get_element_safe(2);
    let b = v.get_element_safe(2);
    assert_eq!(a, b);
    assert!(a.belongs_to(&v));
}
