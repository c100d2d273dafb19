//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor like `Maybe<_>` directly,
//! so the type class traits in this crate are written against
//! [`TypeConstructor`], which uses a Generic Associated Type to stand in
//! for "the same container, holding a different type".

use crate::maybe::Maybe;

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It lets the [`Functor`](super::Functor) family of traits talk
/// about "the same container applied to a different type" without native
/// HKT support.
///
/// # Associated Types
///
/// - `Inner`: The type parameter the container is currently applied to.
/// - `WithType<B>`: The same container applied to `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` should be
/// equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use presence::maybe::Maybe;
/// use presence::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Maybe<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Maybe<i32>`, `WithType<String>` is `Maybe<String>`. The
    /// constraint `TypeConstructor<Inner = B>` keeps the result usable
    /// for further chained transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}
