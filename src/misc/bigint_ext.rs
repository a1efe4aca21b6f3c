use log::trace;
use num_bigint::{BigInt, RandBigInt};
use num_traits::{One, Signed};
use rand::Rng;

use crate::Error;
use crate::misc::ensure;

/// Draws an integer uniformly from `[0, bound)`.
///
/// Candidates of `bound.bits()` random bits are drawn until one falls
/// below `bound`, so there is no modulo bias.
pub fn random_below<R>(bound: &BigInt, rng: &mut R) -> Result<BigInt, Error>
where R: Rng + ?Sized {
    ensure!(bound.is_positive(), InvalidArgument, "bound must be positive: {bound}");

    let bits = bound.bits();
    loop {
        let c = BigInt::from(rng.gen_biguint(bits));
        if &c < bound {
            return Ok(c)
        }
        trace!("reject {c} (bound: {bound})");
    }
}

/// `lower <= value < upper`
pub fn is_in_range(value: &BigInt, lower: &BigInt, upper: &BigInt) -> bool {
    lower <= value && value < upper
}

/// `lower <= value <= upper`
pub fn is_in_range_inclusive(value: &BigInt, lower: &BigInt, upper: &BigInt) -> bool {
    lower <= value && value <= upper
}

pub fn increment(value: &BigInt) -> BigInt {
    value + BigInt::one()
}

pub fn decrement(value: &BigInt) -> BigInt {
    value - BigInt::one()
}
