//! # presence
//!
//! An educational optional-value container demonstrating the Functor,
//! Applicative, and Monad type classes.
//!
//! ## Overview
//!
//! The crate is built around a single two-variant sum type, [`Maybe`]:
//!
//! - [`Maybe::Present`] wraps exactly one value.
//! - [`Maybe::Absent`] carries no payload and represents "no value".
//!
//! The type class traits ([`Functor`], [`Applicative`], [`Monad`]) form the
//! usual hierarchy, emulated over [`TypeConstructor`] since Rust has no
//! native higher-kinded types. `Maybe` is the sole instance; absence
//! propagates through every operation without any explicit check by the
//! caller, and no operation panics.
//!
//! One deliberately unusual rule: the mapping operations collapse *falsy*
//! values to `Absent`, not just missing ones. The [`Truthy`] trait makes
//! that rule an explicit, statically-typed contract; see its module docs.
//!
//! ## Example
//!
//! ```rust
//! use presence::prelude::*;
//!
//! let present: Maybe<i32> = Maybe::lift(5);
//! assert_eq!(present.fmap(|n| n * 2), Maybe::Present(10));
//!
//! let absent: Maybe<i32> = Maybe::Absent;
//! assert_eq!(absent.fmap(|n| n * 2), Maybe::Absent);
//! ```
//!
//! A console walkthrough over a small object graph lives in the
//! `walkthrough` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use presence::prelude::*;
/// ```
pub mod prelude {
    pub use crate::maybe::Maybe;
    pub use crate::typeclass::*;
}

pub mod maybe;
pub mod typeclass;

pub use maybe::Maybe;
pub use typeclass::{Applicative, Functor, Monad, Truthy, TypeConstructor};
