//! Applicative type class - lifting values and applying contained
//! functions.
//!
//! This module provides the `Applicative` trait, which extends `Functor`
//! with:
//!
//! - Lifting a bare value into the container (`pure`)
//! - Applying a contained function to a contained argument (`apply`)
//! - Combining two containers with a binary function (`map2`)
//!
//! # Laws
//!
//! Restricted to truthy values (the collapse rule exempts falsy ones):
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::maybe::Maybe;
//! use presence::typeclass::Applicative;
//!
//! // Lifting a pure value
//! let x: Maybe<i32> = Maybe::<()>::pure(42);
//! assert_eq!(x, Maybe::Present(42));
//!
//! // Applying a contained function
//! let double: Maybe<fn(i32) -> i32> = Maybe::Present(|n| n * 2);
//! assert_eq!(double.apply(Maybe::Present(3)), Maybe::Present(6));
//! ```

use crate::maybe::Maybe;

use super::functor::Functor;
use super::truthy::Truthy;

/// A type class for containers that support lifting values and applying
/// contained functions.
///
/// `pure` wraps its argument unconditionally, whatever the argument is:
/// lifting does not depend on any receiver variant, and `pure(0)` is
/// `Present(0)`. Only the mapping operations collapse falsy values.
///
/// # Examples
///
/// ```rust
/// use presence::maybe::Maybe;
/// use presence::typeclass::Applicative;
///
/// let x: Maybe<i32> = Maybe::<()>::pure(42);
/// assert_eq!(x, Maybe::Present(42));
///
/// let sum = Maybe::Present(1).map2(Maybe::Present(2), |a, b| a + b);
/// assert_eq!(sum, Maybe::Present(3));
/// ```
pub trait Applicative: Functor {
    /// Lifts a bare value into the container.
    ///
    /// Always produces `Present(value)`; there is no variant of the
    /// receiver to consult, and no truthiness check.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    /// use presence::typeclass::Applicative;
    ///
    /// let x: Maybe<i32> = Maybe::<()>::pure(42);
    /// assert_eq!(x, Maybe::Present(42));
    ///
    /// // Even falsy values are wrapped
    /// let zero: Maybe<i32> = Maybe::<()>::pure(0);
    /// assert_eq!(zero, Maybe::Present(0));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers using a binary function.
    ///
    /// Both payloads must be present and truthy for the function to run;
    /// the result collapses to `Absent` when falsy, matching
    /// [`fmap`](Functor::fmap).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    /// use presence::typeclass::Applicative;
    ///
    /// let sum = Maybe::Present(1).map2(Maybe::Present(2), |a, b| a + b);
    /// assert_eq!(sum, Maybe::Present(3));
    ///
    /// let absent: Maybe<i32> = Maybe::Absent;
    /// assert_eq!(absent.map2(Maybe::Present(2), |a, b| a + b), Maybe::Absent);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C,
        Self::Inner: Truthy,
        B: Truthy,
        C: Truthy;

    /// Combines two containers into a pair.
    ///
    /// Equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    /// use presence::typeclass::Applicative;
    ///
    /// let pair = Maybe::Present(1).product(Maybe::Present("hello"));
    /// assert_eq!(pair, Maybe::Present((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: Truthy,
        B: Truthy,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside the container to a value inside the
    /// container.
    ///
    /// Available only when the payload is itself a one-argument function;
    /// calling `apply` on a non-function payload is a type error, caught
    /// at compile time rather than at runtime.
    ///
    /// On `Present(function)`, this is `argument.fmap(function)`, with
    /// the same collapse rule. On `Absent`, returns `Absent` without
    /// inspecting the argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    /// use presence::typeclass::Applicative;
    ///
    /// let double: Maybe<fn(i32) -> i32> = Maybe::Present(|n| n * 2);
    /// assert_eq!(double.apply(Maybe::Present(3)), Maybe::Present(6));
    ///
    /// let absent: Maybe<fn(i32) -> i32> = Maybe::Absent;
    /// assert_eq!(absent.apply(Maybe::Present(3)), Maybe::Absent);
    /// ```
    fn apply<B, Output>(self, argument: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
        B: Truthy,
        Output: Truthy;
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
        A: Truthy,
        B: Truthy,
        C: Truthy,
    {
        match (self, other) {
            (Self::Present(a), Maybe::Present(b)) if a.is_truthy() && b.is_truthy() => {
                Maybe::from_truthy(function(a, b))
            }
            _ => Maybe::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, argument: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
        B: Truthy,
        Output: Truthy,
    {
        match self {
            Self::Present(function) => argument.fmap(function),
            Self::Absent => Maybe::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pure_wraps_any_value() {
        assert_eq!(Maybe::<()>::pure(42), Maybe::Present(42));
        assert_eq!(Maybe::<()>::pure("hello"), Maybe::Present("hello"));
    }

    /// Lifting always wraps, even falsy values and even when invoked
    /// through the type of an absent container.
    #[rstest]
    fn pure_ignores_variant_context() {
        fn lift_through<M: Applicative>(_witness: &M, value: i32) -> M::WithType<i32> {
            M::pure(value)
        }

        let absent: Maybe<i32> = Maybe::Absent;
        assert_eq!(lift_through(&absent, 5), Maybe::Present(5));

        let present: Maybe<i32> = Maybe::Present(1);
        assert_eq!(lift_through(&present, 5), Maybe::Present(5));
    }

    #[rstest]
    fn pure_wraps_falsy_values() {
        assert_eq!(Maybe::<()>::pure(0), Maybe::Present(0));
        assert_eq!(Maybe::<()>::pure(String::new()), Maybe::Present(String::new()));
    }

    #[rstest]
    fn apply_invokes_contained_function() {
        let double: Maybe<fn(i32) -> i32> = Maybe::Present(|n| n * 2);
        assert_eq!(double.apply(Maybe::Present(3)), Maybe::Present(6));
    }

    #[rstest]
    fn apply_absent_function_short_circuits() {
        let absent: Maybe<fn(i32) -> i32> = Maybe::Absent;
        assert_eq!(absent.apply(Maybe::Present(3)), Maybe::Absent);
    }

    #[rstest]
    fn apply_absent_argument_short_circuits() {
        let double: Maybe<fn(i32) -> i32> = Maybe::Present(|n| n * 2);
        assert_eq!(double.apply(Maybe::Absent), Maybe::Absent);
    }

    #[rstest]
    fn apply_collapses_falsy_argument_and_result() {
        let double: Maybe<fn(i32) -> i32> = Maybe::Present(|n| n * 2);
        assert_eq!(double.apply(Maybe::Present(0)), Maybe::Absent);

        let to_zero: Maybe<fn(i32) -> i32> = Maybe::Present(|_| 0);
        assert_eq!(to_zero.apply(Maybe::Present(3)), Maybe::Absent);
    }

    #[rstest]
    fn apply_twice_threads_through_both_functions() {
        // Mirrors the walkthrough's word-doubling demonstration
        let doubler: Maybe<fn(String) -> String> = Maybe::Present(|word| format!("{word}{word}"));
        let once = doubler.apply(Maybe::Present("yo".to_string()));
        let twice = doubler.apply(once);
        assert_eq!(twice, Maybe::Present("yoyoyoyo".to_string()));
    }

    #[rstest]
    fn map2_combines_present_values() {
        let sum = Maybe::Present(1).map2(Maybe::Present(2), |a, b| a + b);
        assert_eq!(sum, Maybe::Present(3));
    }

    #[rstest]
    fn map2_short_circuits_on_either_absent() {
        let absent: Maybe<i32> = Maybe::Absent;
        assert_eq!(absent.map2(Maybe::Present(2), |a, b| a + b), Maybe::Absent);
        assert_eq!(Maybe::Present(1).map2(absent, |a, b| a + b), Maybe::Absent);
    }

    #[rstest]
    fn map2_collapses_falsy_operands_and_result() {
        assert_eq!(Maybe::Present(0).map2(Maybe::Present(2), |a, b| a + b), Maybe::Absent);
        assert_eq!(Maybe::Present(1).map2(Maybe::Present(-1), |a, b| a + b), Maybe::Absent);
    }

    #[rstest]
    fn product_pairs_values() {
        assert_eq!(
            Maybe::Present(1).product(Maybe::Present("hello")),
            Maybe::Present((1, "hello"))
        );
        assert_eq!(Maybe::Present(1).product(Maybe::<&str>::Absent), Maybe::Absent);
    }

    /// Homomorphism law, restricted to truthy values.
    #[rstest]
    fn homomorphism_law_holds_for_truthy_values() {
        let function: fn(i32) -> i32 = |n| n + 1;
        let left = Maybe::<()>::pure(function).apply(Maybe::<()>::pure(5));
        let right = Maybe::<()>::pure(function(5));
        assert_eq!(left, right);
    }

    /// Identity law, restricted to truthy values.
    #[rstest]
    fn identity_law_holds_for_truthy_values() {
        let identity: Maybe<fn(i32) -> i32> = Maybe::<()>::pure(|x| x);
        let value = Maybe::Present(42);
        assert_eq!(identity.apply(value), value);
    }
}
