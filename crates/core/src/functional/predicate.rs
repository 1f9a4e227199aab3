//! Boolean algebra over predicates
//!
//! A predicate is any [`Operation`] whose output is `bool`. The binary
//! combinators evaluate both operands on clones of the same arguments.
//! `and`, `or`, `nand`, `nor`, `sub` and `or_not` skip the right operand
//! exactly when `&&`/`||` would; `xor` and `xnor` always evaluate both.
//! A failure in the left operand is returned before the right one runs.

use super::operation::Operation;

macro_rules! binary_predicate {
    ($(#[$meta:meta])* $name:ident, |$left:ident, $right:ident| $body:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<P, Q> {
            left: P,
            right: Q,
        }

        impl<P, Q> $name<P, Q> {
            pub fn new(left: P, right: Q) -> Self {
                Self { left, right }
            }
        }

        impl<Args, P, Q> Operation<Args> for $name<P, Q>
        where
            Args: Clone,
            P: Operation<Args, Output = bool>,
            Q: Operation<Args, Output = bool, Error = P::Error>,
        {
            type Output = bool;
            type Error = P::Error;

            #[inline]
            fn invoke(&self, args: Args) -> Result<bool, P::Error> {
                let $left = self.left.invoke(args.clone())?;
                let $right = move || self.right.invoke(args);
                Ok($body)
            }
        }
    };
}

binary_predicate!(
    /// `p && q`
    And,
    |p, q| p && q()?
);
binary_predicate!(
    /// `p || q`
    Or,
    |p, q| p || q()?
);
binary_predicate!(
    /// `p != q`
    Xor,
    |p, q| p != q()?
);
binary_predicate!(
    /// `!(p && q)`
    Nand,
    |p, q| !(p && q()?)
);
binary_predicate!(
    /// `!(p || q)`
    Nor,
    |p, q| !(p || q()?)
);
binary_predicate!(
    /// `p == q`
    Xnor,
    |p, q| p == q()?
);
binary_predicate!(
    /// `p && !q`
    Sub,
    |p, q| p && !q()?
);
binary_predicate!(
    /// `p || !q`
    OrNot,
    |p, q| p || !q()?
);

/// `!p`
#[derive(Debug, Clone, Copy)]
pub struct Not<P> {
    predicate: P,
}

impl<P> Not<P> {
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<Args, P> Operation<Args> for Not<P>
where
    P: Operation<Args, Output = bool>,
{
    type Output = bool;
    type Error = P::Error;

    #[inline]
    fn invoke(&self, args: Args) -> Result<bool, P::Error> {
        self.predicate.invoke(args).map(|value| !value)
    }
}

/// Boolean combinators for predicates
pub trait PredicateExt<Args>: Operation<Args, Output = bool> + Sized {
    /// Holds when both hold; `other` is skipped when `self` is false
    fn and<Q>(self, other: Q) -> And<Self, Q>
    where
        Q: Operation<Args, Output = bool, Error = Self::Error>,
    {
        And::new(self, other)
    }

    /// Holds when either holds; `other` is skipped when `self` is true
    fn or<Q>(self, other: Q) -> Or<Self, Q>
    where
        Q: Operation<Args, Output = bool, Error = Self::Error>,
    {
        Or::new(self, other)
    }

    /// Holds when exactly one holds; both always run
    fn xor<Q>(self, other: Q) -> Xor<Self, Q>
    where
        Q: Operation<Args, Output = bool, Error = Self::Error>,
    {
        Xor::new(self, other)
    }

    /// `!(self && other)`; `other` is skipped when `self` is false
    fn nand<Q>(self, other: Q) -> Nand<Self, Q>
    where
        Q: Operation<Args, Output = bool, Error = Self::Error>,
    {
        Nand::new(self, other)
    }

    /// `!(self || other)`; `other` is skipped when `self` is true
    fn nor<Q>(self, other: Q) -> Nor<Self, Q>
    where
        Q: Operation<Args, Output = bool, Error = Self::Error>,
    {
        Nor::new(self, other)
    }

    /// Holds when both agree; both always run
    fn xnor<Q>(self, other: Q) -> Xnor<Self, Q>
    where
        Q: Operation<Args, Output = bool, Error = Self::Error>,
    {
        Xnor::new(self, other)
    }

    /// Holds when `self` holds and `other` does not; `other` is skipped
    /// when `self` is false
    fn sub<Q>(self, other: Q) -> Sub<Self, Q>
    where
        Q: Operation<Args, Output = bool, Error = Self::Error>,
    {
        Sub::new(self, other)
    }

    /// Holds when `self` holds or `other` does not; `other` is skipped
    /// when `self` is true
    fn or_not<Q>(self, other: Q) -> OrNot<Self, Q>
    where
        Q: Operation<Args, Output = bool, Error = Self::Error>,
    {
        OrNot::new(self, other)
    }

    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<Args, P> PredicateExt<Args> for P where P: Operation<Args, Output = bool> {}
