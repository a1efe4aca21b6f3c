use crate::{AlgebraicStructure, MagmaOperation};

/// A set closed under a single binary operation.
pub trait Magma<'a>: AlgebraicStructure + 'a {
    type Operation: MagmaOperation<'a, Structure = Self>;

    fn operation(&'a self) -> Self::Operation;

    /// Always 1; not meant to be overridden.
    fn operation_count(&self) -> usize {
        1
    }
}
