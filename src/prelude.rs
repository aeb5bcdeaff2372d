//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::data::{AsReal, Datum};
#[doc(no_inline)]
pub use crate::dist::*;
#[doc(no_inline)]
pub use crate::traits::*;
