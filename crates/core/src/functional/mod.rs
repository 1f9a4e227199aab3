//! Composable, arity-generic operations
//!
//! Every callable step is an [`Operation`] over a tuple of arguments. Plain
//! closures returning `Result` are operations already; [`total`] lifts
//! closures that cannot fail. Combinators are methods on the extension
//! traits and return small wrapper structs, so a composed pipeline is a
//! single concrete type until [`shared`](OperationExt::shared) erases it.

mod arity;
mod composition;
mod handler;
mod operation;
mod operators;
mod predicate;
mod shared;
mod traced;

pub use arity::{total, Total};
pub use composition::{
    AndThen, CatchUnwind, ComposeFirst, ComposeSecond, Flip, FollowedBy, Map, MapErr, Widened,
    WithArguments,
};
pub use handler::{Handled, Handler, SwallowWith, Swallowed};
pub use operation::{
    BinaryOperationExt, ConsumerExt, Operation, OperationExt, TotalOperation, UnaryOperationExt,
};
pub use operators::{conditional, constant, identity, Conditional, Constant, Identity};
pub use predicate::{And, Nand, Nor, Not, Or, OrNot, PredicateExt, Sub, Xnor, Xor};
pub use shared::*;
pub use traced::Traced;

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{
        conditional, constant, identity, total, BinaryOperationExt, ConsumerExt, Handler,
        Operation, OperationExt, PredicateExt, SharedOperation, TotalOperation, UnaryOperationExt,
    };
    pub use crate::chain;
}
