//! Monad type class - sequencing container-producing computations.
//!
//! This module provides the `Monad` trait, which extends `Applicative`
//! with `flat_map`: chaining operations that each return a container,
//! without nesting the containers.
//!
//! This is the operation the walkthrough exists to motivate: mapping a
//! container-producing function with plain `fmap` yields
//! `Present(Present(..))` or `Present(Absent)`, while `flat_map` yields a
//! single flat container.
//!
//! # Laws
//!
//! `flat_map` performs no truthiness collapse, so the monad laws hold
//! exactly:
//!
//! ## Left Identity Law
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::maybe::Maybe;
//! use presence::typeclass::Monad;
//!
//! let value: Maybe<i32> = Maybe::Present(5);
//! let result = value.flat_map(|n| {
//!     if n > 0 {
//!         Maybe::Present(n * 2)
//!     } else {
//!         Maybe::Absent
//!     }
//! });
//! assert_eq!(result, Maybe::Present(10));
//! ```

use crate::maybe::Maybe;

use super::applicative::Applicative;

/// A type class for containers that support sequencing of
/// container-producing computations.
///
/// On `Present(v)`, `flat_map` returns `function(v)` as-is: the callee
/// is trusted to return a well-formed container, and no truthiness
/// collapse is applied. On `Absent`, the chain short-circuits and the
/// function is never invoked.
///
/// # Examples
///
/// ```rust
/// use presence::maybe::Maybe;
/// use presence::typeclass::Monad;
///
/// fn half(n: i32) -> Maybe<i32> {
///     if n % 2 == 0 { Maybe::Present(n / 2) } else { Maybe::Absent }
/// }
///
/// assert_eq!(Maybe::Present(8).flat_map(half).flat_map(half), Maybe::Present(2));
/// assert_eq!(Maybe::Present(6).flat_map(half).flat_map(half), Maybe::Absent);
/// ```
pub trait Monad: Applicative {
    /// Applies a container-producing function and flattens the result.
    ///
    /// In Haskell this is `>>=` (bind); in Rust's standard library it is
    /// the shape of `Option::and_then`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    /// use presence::typeclass::Monad;
    ///
    /// let x = Maybe::Present(5);
    /// assert_eq!(x.flat_map(|n| Maybe::Present(n * 2)), Maybe::Present(10));
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// assert_eq!(absent.flat_map(|n| Maybe::Present(n * 2)), Maybe::Absent);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    ///
    /// Provided for familiarity with `Option::and_then` and
    /// `Result::and_then`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    /// use presence::typeclass::Monad;
    ///
    /// let x = Maybe::Present(5);
    /// assert_eq!(x.and_then(|n| Maybe::Present(n * 2)), Maybe::Present(10));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }
}
