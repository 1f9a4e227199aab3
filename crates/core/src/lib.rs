//! Typed, composable operations that may fail.
//!
//! ## Key Components
//!
//! - **`functional`**: The [`Operation`](functional::Operation) trait over
//!   argument tuples of arity zero through six, the combinators built on it
//!   (sequencing, failure handling, predicate algebra), and named aliases for
//!   erased operations.
//! - **`scalar`**: The eight primitive kinds operations are specialised over,
//!   with lossless conversion to and from their boxed forms.
//! - **`errors`**: The crate-wide `Error` enum and `Result` alias.
//! - **`config`**: Serializable settings for traced operations.

pub mod config;
pub mod errors;
pub mod functional;
pub mod scalar;

#[cfg(test)]
mod testing;

pub use self::{
    config::{TraceConfig, TraceLevel},
    errors::{Error, InvocationError, Result, ResultExt},
    scalar::{Scalar, ScalarKind, ScalarValue},
};
