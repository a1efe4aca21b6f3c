//! Sample-based checks of the algebraic laws an operation claims.
//!
//! The property traits in [`crate::abst`] are never verified at runtime.
//! These functions test them exhaustively over a given sample, which is
//! the whole structure when it is small and finite.

use itertools::iproduct;
use log::debug;

use crate::{BinaryOperation, CommutativeGroup, Distributive, Elem, Group, Identity, Inverse, Ring};

/// `(a * b) * c == a * (b * c)`
pub fn is_associative_on<'a, O>(op: &O, sample: &[Elem<'a, O::Structure>]) -> bool
where O: BinaryOperation<'a> {
    iproduct!(sample, sample, sample).all(|(a, b, c)| {
        let l = op.perform(&op.perform(a, b), c);
        let r = op.perform(a, &op.perform(b, c));
        if l != r {
            debug!("not associative: ({a} * {b}) * {c} = {l}, {a} * ({b} * {c}) = {r}");
        }
        l == r
    })
}

/// `a * b == b * a`
pub fn is_commutative_on<'a, O>(op: &O, sample: &[Elem<'a, O::Structure>]) -> bool
where O: BinaryOperation<'a> {
    iproduct!(sample, sample).all(|(a, b)| {
        let (l, r) = (op.perform(a, b), op.perform(b, a));
        if l != r {
            debug!("not commutative: {a} * {b} = {l}, {b} * {a} = {r}");
        }
        l == r
    })
}

/// `a * e == e * a == a`
pub fn is_identity_on<'a, O>(op: &O, sample: &[Elem<'a, O::Structure>]) -> bool
where O: Identity<'a> {
    let e = op.identity();
    sample.iter().all(|a|
        &op.perform(a, &e) == a && &op.perform(&e, a) == a
    )
}

/// `a * inverse(a) == inverse(a) * a == e`
pub fn has_inverses_on<'a, O>(op: &O, sample: &[Elem<'a, O::Structure>]) -> bool
where O: Inverse<'a> {
    sample.iter().all(|a| {
        let b = op.inverse(a);
        let ok = op.is_identity(&op.perform(a, &b)) && op.is_identity(&op.perform(&b, a));
        if !ok {
            debug!("{b} is not an inverse of {a}");
        }
        ok
    })
}

/// `mul` distributes over `add` from both sides:
/// `a(b + c) == ab + ac` and `(a + b)c == ac + bc`.
pub fn is_distributive_on<'a, M, A>(mul: &M, add: &A, sample: &[Elem<'a, M::Structure>]) -> bool
where
    M: BinaryOperation<'a>,
    A: BinaryOperation<'a, Structure = M::Structure>
{
    iproduct!(sample, sample, sample).all(|(a, b, c)| {
        let left = mul.perform(a, &add.perform(b, c)) == add.perform(&mul.perform(a, b), &mul.perform(a, c));
        let right = mul.perform(&add.perform(a, b), c) == add.perform(&mul.perform(a, c), &mul.perform(b, c));
        if !(left && right) {
            debug!("not distributive at ({a}, {b}, {c})");
        }
        left && right
    })
}

pub fn satisfies_group_laws<'a, G>(group: &'a G, sample: &[Elem<'a, G>]) -> bool
where G: Group<'a> {
    let op = group.operation();
    is_associative_on(&op, sample) &&
    is_identity_on(&op, sample) &&
    has_inverses_on(&op, sample)
}

pub fn satisfies_commutative_group_laws<'a, G>(group: &'a G, sample: &[Elem<'a, G>]) -> bool
where G: CommutativeGroup<'a> {
    satisfies_group_laws(group, sample) &&
    is_commutative_on(&group.operation(), sample)
}

/// Checks the ring axioms on `sample`. The distributivity recorded by
/// `operation2` must point at `operation1`.
pub fn satisfies_ring_laws<'a, R>(ring: &'a R, sample: &[Elem<'a, R>]) -> bool
where R: Ring<'a> {
    let add = ring.operation1();
    let mul = ring.operation2();

    if mul.distributivity().index() != 1 {
        debug!("{ring}: operation2 is {}", mul.distributivity());
        return false
    }

    is_associative_on(&add, sample) &&
    is_commutative_on(&add, sample) &&
    is_identity_on(&add, sample) &&
    has_inverses_on(&add, sample) &&
    is_associative_on(&mul, sample) &&
    is_distributive_on(&mul, &add, sample)
}
