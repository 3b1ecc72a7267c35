//! # `kinded_core`
//!
//! This crate contains the algebra interfaces of the kinded project (monoids,
//! functors, applicatives and monads) along with their instances for tuples.
//! The optional container lives in `kinded_maybe`, and both are re-exported
//! from the `kinded` facade crate.
//!
//! Rust has no higher-kinded types, so one-parameter type constructors are
//! named by _witness_ types that implement [`Kind`]. See the [`kind`] module
//! for the details of this encoding.

#![no_std]
#![allow(clippy::type_complexity)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod functor;
pub mod kind;
pub mod laws;
pub mod monoid;
pub mod tuple;

pub use functor::{Applicative, Functor, Monad, ap, bind, map, pure};
pub use kind::{Kind, Kinded, Rebound};
pub use monoid::{All, Any, Monoid, Product, Sum};
pub use tuple::{Tuple, TupleCall, apply};

use core::result;

/// Alias for [`core::result::Result<T, Error>`].
pub type Result<T> = result::Result<T, Error>;

/// Represents contract violations detected by the library.
///
/// Every algebra operation is total, so the only way to provoke an error is to
/// ask an optional container for a value it does not hold. Failures raised by
/// user callbacks passed to `map`, `apply` or `bind` are never converted into
/// this type; they propagate to the caller as they are.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The value of an absent optional container was requested.
    #[error("attempted to access the value of an absent maybe")]
    AbsentAccess,
}

#[test]
fn test_error_display() {
    use std::format;

    assert_eq!(
        format!("{}", Error::AbsentAccess),
        "attempted to access the value of an absent maybe"
    );
}
