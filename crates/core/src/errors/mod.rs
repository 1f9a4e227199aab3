//! Error types and result extensions for fnx operations

mod builders;
mod conversions;
mod display;
mod extensions;
mod invocation;
mod types;

pub use builders::*;
pub use extensions::*;
pub use invocation::InvocationError;
pub use types::{Error, Result};
