//! Truthiness - the test that decides when a mapped value collapses.
//!
//! The mapping operations on [`Maybe`](crate::maybe::Maybe) treat a falsy
//! value the same as a missing one: `Present(0).fmap(f)` is `Absent`, and
//! so is a map whose result is falsy. That rule is deliberately wider
//! than a null check, and this trait makes it an explicit, statically
//! visible contract instead of an accident of dynamic typing.
//!
//! The falsy values mirror the usual dynamic-language set:
//!
//! - `false`
//! - zero for every integer type
//! - zero and NaN for floats
//! - the empty string
//!
//! Everything else is truthy. Domain types are almost always plain
//! objects with no falsy state; implement [`Truthy`] for them with the
//! [`always_truthy!`](crate::always_truthy) macro. A `Maybe` is itself
//! always truthy, even when `Absent`: the container is a value, so a
//! nested `Present(Absent)` does not collapse.
//!
//! # Examples
//!
//! ```rust
//! use presence::typeclass::Truthy;
//!
//! assert!(5.is_truthy());
//! assert!(!0.is_truthy());
//! assert!(!"".is_truthy());
//! assert!("hi".is_truthy());
//! ```

use crate::maybe::Maybe;

/// Types with a truthiness test.
///
/// `is_truthy` returning `false` is what makes a value collapse to
/// `Absent` under the mapping operations. Implementations must be pure:
/// the result may depend only on the value itself.
///
/// # Examples
///
/// ```rust
/// use presence::typeclass::Truthy;
///
/// assert!(true.is_truthy());
/// assert!(!f64::NAN.is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value should survive a mapping operation.
    fn is_truthy(&self) -> bool;
}

/// Implements [`Truthy`] as always-true for plain domain types.
///
/// Most domain types have no falsy state; this macro gives them the
/// unconditional implementation in one line.
///
/// # Examples
///
/// ```rust
/// use presence::always_truthy;
/// use presence::typeclass::Truthy;
///
/// struct Child {
///     name: String,
/// }
///
/// always_truthy!(Child);
///
/// let child = Child { name: "David".to_string() };
/// assert!(child.is_truthy());
/// # let _ = child.name;
/// ```
#[macro_export]
macro_rules! always_truthy {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::typeclass::Truthy for $type {
                #[inline]
                fn is_truthy(&self) -> bool {
                    true
                }
            }
        )+
    };
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integers {
    ($($type:ty),+ $(,)?) => {
        $(
            impl Truthy for $type {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )+
    };
}

impl_truthy_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_for_floats {
    ($($type:ty),+ $(,)?) => {
        $(
            impl Truthy for $type {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )+
    };
}

impl_truthy_for_floats!(f32, f64);

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

// Pairs are composite values, truthy regardless of their components.
impl<A, B> Truthy for (A, B) {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

// A container is a value even when it holds nothing; without this,
// mapping a container-producing function would collapse Present(Absent)
// into Absent and hide the nesting that flat_map exists to solve.
impl<T> Truthy for Maybe<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}
