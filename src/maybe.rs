//! Maybe type - a value that may be present or absent.
//!
//! This module provides the `Maybe<T>` type, the optional-value container
//! the whole crate is built around. It is a closed sum of two variants:
//!
//! - `Present(T)` wraps exactly one value
//! - `Absent` carries no payload and represents "no value"
//!
//! Absence is a value, not an exception: every operation in the crate
//! returns `Absent` where another design would raise an error, and absence
//! propagates automatically through chained operations.
//!
//! # Examples
//!
//! ```rust
//! use presence::maybe::Maybe;
//!
//! let present: Maybe<i32> = Maybe::lift(42);
//! let absent: Maybe<i32> = Maybe::Absent;
//!
//! // Pattern matching
//! match present {
//!     Maybe::Present(n) => println!("got {}", n),
//!     Maybe::Absent => println!("nothing here"),
//! }
//!
//! // Human-readable rendering
//! assert_eq!(present.describe(), "Present(42)");
//! assert_eq!(absent.describe(), "Absent()");
//! ```

use std::fmt;

use crate::typeclass::Truthy;

/// A value that may be present or absent.
///
/// `Maybe<T>` is either `Present(v)`, wrapping exactly one value, or
/// `Absent`, wrapping nothing. The `Absent` variant is a zero-payload
/// enum tag: it needs no shared singleton and no lazy initialization,
/// and `Maybe::<T>::Absent` is usable in `const` contexts.
///
/// Both variants are immutable after creation; every operation produces
/// a new container rather than mutating in place.
///
/// # Examples
///
/// ```rust
/// use presence::maybe::Maybe;
///
/// let name: Maybe<&str> = Maybe::Present("David");
/// assert!(name.is_present());
///
/// let missing: Maybe<&str> = Maybe::Absent;
/// assert!(missing.is_absent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// Wraps exactly one value.
    Present(T),
    /// The absence of a value.
    Absent,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Lifts a value into the container as `Present`.
    ///
    /// Lifting always wraps, unconditionally: `lift(0)` is `Present(0)`,
    /// not `Absent`. The truthiness collapse is a rule of the mapping
    /// operations, not of construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::lift(5), Maybe::Present(5));
    /// assert_eq!(Maybe::lift(0), Maybe::Present(0));
    /// ```
    #[inline]
    pub const fn lift(value: T) -> Self {
        Self::Present(value)
    }

    /// Wraps a value as `Present` if it is truthy, otherwise `Absent`.
    ///
    /// This is the collapse rule used by the mapping operations, exposed
    /// as a constructor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::from_truthy(5), Maybe::Present(5));
    /// assert_eq!(Maybe::from_truthy(0), Maybe::Absent);
    /// assert_eq!(Maybe::from_truthy(String::new()), Maybe::Absent);
    /// ```
    #[inline]
    pub fn from_truthy(value: T) -> Self
    where
        T: Truthy,
    {
        if value.is_truthy() {
            Self::Present(value)
        } else {
            Self::Absent
        }
    }

    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    ///
    /// assert!(Maybe::Present(1).is_present());
    /// assert!(!Maybe::<i32>::Absent.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    ///
    /// assert!(Maybe::<i32>::Absent.is_absent());
    /// assert!(!Maybe::Present(1).is_absent());
    /// ```
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the container into an `Option<T>`, consuming it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Present(42).present(), Some(42));
    /// assert_eq!(Maybe::<i32>::Absent.present(), None);
    /// ```
    #[inline]
    pub fn present(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Returns the contained value, or `default` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Present(42).unwrap_or(0), 42);
    /// assert_eq!(Maybe::Absent.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns a container holding a reference to the contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    ///
    /// let text: Maybe<String> = Maybe::Present("hello".to_string());
    /// assert_eq!(text.as_ref(), Maybe::Present(&"hello".to_string()));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Observability
    // =========================================================================

    /// Renders the container as `Present(<value>)` or `Absent()`.
    ///
    /// The rendering is for demonstration and logging only; it is not a
    /// compatibility contract and must not be used for equality or logic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Present("hi").describe(), "Present(hi)");
    /// assert_eq!(Maybe::<&str>::Absent.describe(), "Absent()");
    /// ```
    #[inline]
    pub fn describe(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapses one level of nesting.
    ///
    /// A chain of `fmap` calls over container-producing functions yields
    /// nested containers; `flatten` removes one level, the same way a
    /// single `flat_map` would have.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::maybe::Maybe;
    ///
    /// let nested: Maybe<Maybe<i32>> = Maybe::Present(Maybe::Present(42));
    /// assert_eq!(nested.flatten(), Maybe::Present(42));
    ///
    /// let inner_absent: Maybe<Maybe<i32>> = Maybe::Present(Maybe::Absent);
    /// assert_eq!(inner_absent.flatten(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Absent => Maybe::Absent,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => write!(formatter, "Absent()"),
        }
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Clone, Copy, Send, Sync);
static_assertions::assert_impl_all!(Maybe<String>: Clone, Send, Sync);
