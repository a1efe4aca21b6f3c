mod elem;
mod structure;
mod op;
mod magma;
mod group;
mod ring;

pub use elem::Elem;
pub use structure::{AlgebraicStructure, Elements, FiniteStructure};
pub use op::{
    BinaryOperation, Associative, Commutative, Identity, Inverse, Distributive, Distributivity,
    MagmaOperation, GroupOperation, CommutativeGroupOperation,
    SemiringOperation1, SemiringOperation2, RingOperation1, CommutativeRingOperation2,
};
pub use magma::Magma;
pub use group::{Group, CommutativeGroup, CyclicGroup, FiniteGroup};
pub use ring::{Semiring, Ring, CommutativeRing, CyclicRing};
