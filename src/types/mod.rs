mod int_add;
mod int_mod;
mod int_ring;
mod real_mul;

pub use int_add::*;
pub use int_mod::*;
pub use int_ring::*;
pub use real_mul::*;
