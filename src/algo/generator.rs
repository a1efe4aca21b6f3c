use ahash::AHashSet;
use log::debug;
use num_bigint::BigInt;

use crate::{BinaryOperation, CyclicGroup, Elem, FiniteGroup, Identity};
use crate::misc::increment;

/// The order of `x` under `op`, i.e. the least `k > 0` with `x^k = e`.
/// Returns `None` if it exceeds `bound`.
pub fn element_order<'a, O>(op: &O, x: &Elem<'a, O::Structure>, bound: &BigInt) -> Option<BigInt>
where O: Identity<'a> {
    let mut y = x.clone();
    let mut k = BigInt::from(1);

    while !op.is_identity(&y) {
        if &k >= bound {
            return None
        }
        y = op.perform(&y, x);
        k = increment(&k);
    }

    Some(k)
}

/// Checks that the asserted generator of a finite cyclic group spans
/// the whole group: its order equals the group order, and every element
/// listed by `elements` lies on its orbit.
pub fn spans_group<'a, G>(group: &'a G) -> bool
where G: CyclicGroup<'a> + FiniteGroup<'a> {
    let op = group.operation();
    let g = group.generator();
    let n = group.order();

    match element_order(&op, &g, &n) {
        Some(k) if k == n => (),
        Some(k) => {
            debug!("{g} has order {k}, |{group}| = {n}.");
            return false
        },
        None => {
            debug!("{g} has order greater than |{group}| = {n}.");
            return false
        }
    }

    let mut orbit = AHashSet::new();
    let mut x = op.identity();
    while orbit.insert(x.value().clone()) {
        x = op.perform(&x, &g);
    }

    group.elements().all(|a| orbit.contains(a.value()))
}
