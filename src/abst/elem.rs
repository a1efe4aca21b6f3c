use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};
use crate::AlgebraicStructure;

/// An element of the structure `S`.
///
/// Holds the raw value together with a borrowed handle to the structure
/// it belongs to. An `Elem` can only be produced by its structure
/// (see [`AlgebraicStructure::get_element`]), so the value always
/// satisfies the structure's membership predicate.
pub struct Elem<'a, S>
where S: AlgebraicStructure {
    structure: &'a S,
    value: S::Value,
}

impl<'a, S> Elem<'a, S>
where S: AlgebraicStructure {
    pub(crate) fn new(structure: &'a S, value: S::Value) -> Self {
        Self { structure, value }
    }

    pub fn structure(&self) -> &'a S {
        self.structure
    }

    pub fn value(&self) -> &S::Value {
        &self.value
    }

    pub fn into_value(self) -> S::Value {
        self.value
    }

    pub fn belongs_to(&self, structure: &S) -> bool {
        std::ptr::eq(self.structure, structure) || self.structure == structure
    }
}

impl<'a, S> Clone for Elem<'a, S>
where S: AlgebraicStructure {
    fn clone(&self) -> Self {
        Self::new(self.structure, self.value.clone())
    }
}

impl<'a, S> PartialEq for Elem<'a, S>
where S: AlgebraicStructure {
    fn eq(&self, other: &Self) -> bool {
        self.belongs_to(other.structure) && self.value == other.value
    }
}

impl<'a, S> Eq for Elem<'a, S>
where S: AlgebraicStructure {}

// equal elements have equal values.
impl<'a, S> Hash for Elem<'a, S>
where S: AlgebraicStructure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<'a, S> Display for Elem<'a, S>
where S: AlgebraicStructure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.value, f)
    }
}

impl<'a, S> Debug for Elem<'a, S>
where S: AlgebraicStructure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in {}", self.value, self.structure)
    }
}
