mod bigint_ext;
mod error;

pub use bigint_ext::*;
pub use error::Error;
pub(crate) use error::{err, ensure};
