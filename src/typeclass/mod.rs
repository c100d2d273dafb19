//! Type class traits for the optional-value container.
//!
//! This module provides the small, closed set of type classes implemented
//! by [`Maybe`](crate::maybe::Maybe):
//!
//! - [`Functor`]: Mapping over the contained value
//! - [`Applicative`]: Lifting values and applying contained functions
//! - [`Monad`]: Sequencing container-producing computations
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This crate uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing the traits to be written generically even though
//! `Maybe` is their only instance.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Truthy`]: The truthiness test that decides when a mapped value
//!   collapses to `Absent`
//!
//! # Examples
//!
//! ```rust
//! use presence::maybe::Maybe;
//! use presence::typeclass::{Functor, Monad};
//!
//! let value: Maybe<i32> = Maybe::lift(21);
//! assert_eq!(value.fmap(|n| n * 2), Maybe::Present(42));
//!
//! let chained = value.flat_map(|n| Maybe::lift(n + 1));
//! assert_eq!(chained, Maybe::Present(22));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod truthy;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use truthy::Truthy;
