use std::fmt::{Debug, Display};
use std::hash::Hash;
use num_bigint::BigInt;
use rand::Rng;

use crate::{Elem, Error};
use crate::misc::ensure;

/// A finite, restartable sequence of elements. Obtained from
/// [`FiniteStructure::elements`]; each call starts over.
pub type Elements<'a, S> = Box<dyn Iterator<Item = Elem<'a, S>> + 'a>;

/// A set equipped with one or more binary operations.
///
/// The configuration of a structure (modulus, generator, rounding, ...)
/// is fixed at construction, and two structures are equal iff their
/// configurations are. Elements are produced through the
/// construct-or-validate pair [`get_element`](Self::get_element) /
/// [`get_element_safe`](Self::get_element_safe).
///
/// Uniform sampling is optional and fails with [`Error::Unsupported`]
/// unless overridden. Enumeration is the separate capability
/// [`FiniteStructure`].
pub trait AlgebraicStructure: Sized + PartialEq + Debug + Display {
    type Value: Clone + Eq + Hash + Debug + Display;

    /// The membership predicate.
    fn has_element_safe(&self, value: &Self::Value) -> bool;

    /// Same as `has_element_safe`, except that a missing value is never
    /// a member.
    fn has_element(&self, value: Option<&Self::Value>) -> bool {
        value.is_some_and(|v| self.has_element_safe(v))
    }

    /// Wraps `value` without checking membership. The caller must
    /// guarantee that `value` is a member.
    fn get_element_safe(&self, value: Self::Value) -> Elem<'_, Self> {
        debug_assert!(self.has_element_safe(&value), "{value} is not an element of {self}");
        Elem::new(self, value)
    }

    fn get_element(&self, value: Self::Value) -> Result<Elem<'_, Self>, Error> {
        ensure!(self.has_element(Some(&value)), InvalidElement, "{value} is not an element of {self}");
        Ok(self.get_element_safe(value))
    }

    fn uniform_random_element_with<R>(&self, _rng: &mut R) -> Result<Elem<'_, Self>, Error>
    where R: Rng + ?Sized {
        Err(Error::Unsupported("uniform_random_element"))
    }

    fn uniform_random_element(&self) -> Result<Elem<'_, Self>, Error> {
        self.uniform_random_element_with(&mut rand::thread_rng())
    }
}

/// A structure with finitely many elements. Infinite structures do not
/// implement it, so enumerating them is rejected at compile time.
pub trait FiniteStructure: AlgebraicStructure {
    /// Every element, in a fixed order.
    fn elements(&self) -> Elements<'_, Self>;

    /// The exact number of elements, i.e. the length of `elements()`.
    fn element_count(&self) -> BigInt;
}
