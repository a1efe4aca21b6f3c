use std::cmp::Ordering;
use bigdecimal::BigDecimal;
use derive_more::Display;
use log::trace;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::{AlgebraicStructure, Associative, BinaryOperation, Commutative, CommutativeGroup, Elem, Error, Group, Identity, Inverse, Magma};
use crate::misc::ensure;

pub use bigdecimal::RoundingMode;

/// The non-zero reals under multiplication, represented by exact
/// decimals.
///
/// Products are exact. Inverses are rounded to `precision` significant
/// digits with the configured [`RoundingMode`], so `x * inverse(x)` is
/// the identity only when `1 / x` has a short enough expansion.
///
/// The precision counts significant digits, not fractional digits.
/// With precision 4, `1 / 2` is `0.5000` but `1 / 0.03` is `33.33`
/// (not `33.3333`), and `1 / 30000` is `0.00003333` (not `0.0000`).
#[derive(Clone, PartialEq, Eq, Debug, Display)]
#[display("R^x")]
pub struct RealMulGroup {
    precision: u64,
    rounding: RoundingMode,
}

impl RealMulGroup {
    pub const MAX_PRECISION: u64 = 1 << 20;

    /// Fails unless `0 < precision <= MAX_PRECISION`.
    pub fn new(precision: u64, rounding: RoundingMode) -> Result<Self, Error> {
        trace!("new R^x, precision: {precision}, rounding: {rounding:?}");

        ensure!(precision > 0, InvalidConfig, "precision must be positive");
        ensure!(
            precision <= Self::MAX_PRECISION,
            InvalidConfig, "precision {precision} exceeds {}", Self::MAX_PRECISION
        );

        let group = Self { precision, rounding };
        group.get_element(BigDecimal::one())?;

        Ok(group)
    }

    pub fn precision(&self) -> u64 {
        self.precision
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// `1 / x` rounded to `self.precision` significant digits.
    /// The result is non-zero for non-zero `x`.
    pub fn reciprocal(&self, x: &BigDecimal) -> BigDecimal {
        debug_assert!(!x.is_zero());

        // x = m * 10^(-k), 10^(d-1) <= |m| < 10^d.
        let (m, k) = x.as_bigint_and_exponent();
        let d = x.digits() as i64;
        let p = self.precision as i64; // bounded by MAX_PRECISION

        // 1/x * 10^s = 10^(p+d-1) / m lies in (10^(p-1), 10^p].
        let mut s = p + d - k - 1;
        let num = num_traits::pow(BigInt::from(10), (p + d - 1) as usize);
        let mut q = round_div(self.rounding, &num, &m);

        // rounded up to 10^p, drop the trailing zero.
        if q.abs() == num_traits::pow(BigInt::from(10), p as usize) {
            q /= BigInt::from(10);
            s -= 1;
        }

        BigDecimal::new(q, s)
    }
}

// The quotient `num / den` rounded to an integer. `den` must be non-zero.
fn round_div(mode: RoundingMode, num: &BigInt, den: &BigInt) -> BigInt {
    use RoundingMode::*;
    debug_assert!(!den.is_zero());

    let (q, r) = num.div_rem(den); // truncated
    if r.is_zero() {
        return q
    }

    let positive = num.is_negative() == den.is_negative();
    let half = (r.abs() * 2u32).cmp(&den.abs());

    let away = match mode {
        Up       => true,
        Down     => false,
        Ceiling  => positive,
        Floor    => !positive,
        HalfUp   => half != Ordering::Less,
        HalfDown => half == Ordering::Greater,
        HalfEven => half == Ordering::Greater || (half == Ordering::Equal && q.is_odd()),
    };

    match (away, positive) {
        (false, _)    => q,
        (true, true)  => q + BigInt::one(),
        (true, false) => q - BigInt::one(),
    }
}

impl AlgebraicStructure for RealMulGroup {
    type Value = BigDecimal;

    fn has_element_safe(&self, value: &BigDecimal) -> bool {
        !value.is_zero()
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct RealMultiplication<'a> {
    group: &'a RealMulGroup,
    identity: Elem<'a, RealMulGroup>,
}

impl<'a> BinaryOperation<'a> for RealMultiplication<'a> {
    type Structure = RealMulGroup;

    fn structure(&self) -> &'a RealMulGroup {
        self.group
    }

    fn perform(&self, lhs: &Elem<'a, RealMulGroup>, rhs: &Elem<'a, RealMulGroup>) -> Elem<'a, RealMulGroup> {
        self.group.get_element_safe(lhs.value() * rhs.value())
    }
}

impl<'a> Associative<'a> for RealMultiplication<'a> {}
impl<'a> Commutative<'a> for RealMultiplication<'a> {}

impl<'a> Identity<'a> for RealMultiplication<'a> {
    fn identity(&self) -> Elem<'a, RealMulGroup> {
        self.identity.clone()
    }
}

impl<'a> Inverse<'a> for RealMultiplication<'a> {
    fn inverse(&self, x: &Elem<'a, RealMulGroup>) -> Elem<'a, RealMulGroup> {
        let v = self.group.reciprocal(x.value());
        self.group.get_element_safe(v)
    }
}

impl<'a> Magma<'a> for RealMulGroup {
    type Operation = RealMultiplication<'a>;

    fn operation(&'a self) -> RealMultiplication<'a> {
        let identity = self.get_element_safe(BigDecimal::one());
        RealMultiplication { group: self, identity }
    }
}

impl<'a> Group<'a> for RealMulGroup {}
impl<'a> CommutativeGroup<'a> for RealMulGroup {}
