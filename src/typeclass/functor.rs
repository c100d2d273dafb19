//! Functor type class - mapping over the contained value.
//!
//! This module provides the `Functor` trait, which represents containers
//! that can have a function applied to their inner value while preserving
//! the container shape.
//!
//! For [`Maybe`](crate::maybe::Maybe), mapping comes with the crate's
//! truthiness rule: a falsy input or a falsy result collapses to
//! `Absent`. The classic functor laws therefore hold restricted to
//! truthy values.
//!
//! # Laws
//!
//! ## Identity Law (restricted to truthy values)
//!
//! ```text
//! fa.fmap(|x| x) == fa    when the contained value is truthy
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! holds whenever `g` maps falsy inputs to falsy outputs, so both sides
//! collapse at the same step.
//!
//! # Examples
//!
//! ```rust
//! use presence::maybe::Maybe;
//! use presence::typeclass::Functor;
//!
//! let value: Maybe<i32> = Maybe::Present(5);
//! let text: Maybe<String> = value.fmap(|n| n.to_string());
//! assert_eq!(text, Maybe::Present("5".to_string()));
//!
//! // Absence is preserved
//! let absent: Maybe<i32> = Maybe::Absent;
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::Absent);
//! ```

use crate::maybe::Maybe;

use super::higher::TypeConstructor;
use super::truthy::Truthy;

/// A type class for containers that can have a function mapped over
/// their contents.
///
/// `fmap` transforms the value inside the container while preserving the
/// container's structure, with one addition over the textbook contract:
/// the truthiness collapse. Mapping never panics and never invokes the
/// function when the container is `Absent`.
///
/// # Examples
///
/// ```rust
/// use presence::maybe::Maybe;
/// use presence::typeclass::Functor;
///
/// let x: Maybe<i32> = Maybe::Present(5);
/// let y: Maybe<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Maybe::Present("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the container.
    ///
    /// On `Present(v)`:
    ///
    /// - if `v` is falsy, returns `Absent` without invoking `function`;
    /// - otherwise computes `u = function(v)` and returns `Present(u)`,
    ///   or `Absent` if `u` is falsy.
    ///
    /// On `Absent`, returns `Absent` unconditionally; `function` is never
    /// invoked. The function is therefore called exactly zero or one
    /// times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    /// use presence::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Present(5).fmap(|n| n * 2), Maybe::Present(10));
    ///
    /// // A falsy input collapses before the function runs
    /// assert_eq!(Maybe::Present(0).fmap(|n| n + 1), Maybe::Absent);
    ///
    /// // A falsy result collapses too
    /// assert_eq!(Maybe::Present(5).fmap(|n| n - 5), Maybe::Absent);
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B,
        Self::Inner: Truthy,
        B: Truthy;

    /// Applies a function to a reference of the value inside the
    /// container.
    ///
    /// Useful when the container should not be consumed, or when the
    /// inner type does not implement `Clone`. The collapse rule is the
    /// same as for [`fmap`](Functor::fmap).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    /// use presence::typeclass::Functor;
    ///
    /// let text: Maybe<String> = Maybe::Present("hello".to_string());
    /// let length: Maybe<usize> = text.fmap_ref(|s| s.len());
    /// assert_eq!(length, Maybe::Present(5));
    /// // text is still available here
    /// assert!(text.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B,
        Self::Inner: Truthy,
        B: Truthy;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
        A: Truthy,
        B: Truthy,
    {
        match self {
            Self::Present(value) if value.is_truthy() => Maybe::from_truthy(function(value)),
            _ => Maybe::Absent,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
        A: Truthy,
        B: Truthy,
    {
        match self {
            Self::Present(value) if value.is_truthy() => Maybe::from_truthy(function(value)),
            _ => Maybe::Absent,
        }
    }
}
