//! # `kinded`
//!
//! Functor, applicative, monad and monoid abstractions for Rust, with an
//! optional container ([`Maybe`]) that stores its value in place and algebra
//! instances for tuples.
//!
//! ```rust
//! use kinded::{Maybe, Monoid, ap, apply, bind, map, value};
//!
//! assert_eq!(map(|x: i32| x + 1, value(41)), value(42));
//! assert_eq!(ap(value(|x: i32| x * 3), value(4)), value(12));
//! assert_eq!(bind(value(5), |x: i32| if x > 0 { value(x * 2) } else { Maybe::Absent }), value(10));
//! assert_eq!(value(String::from("ab")).append(Maybe::Absent), value(String::from("ab")));
//!
//! let writer = ap((|x: i32| x + 1, String::from("hi"), vec![1]), (7, String::from("!"), vec![2]));
//! assert_eq!(writer, (8, String::from("hi!"), vec![1, 2]));
//! assert_eq!(apply(|a: i32, b: i32| a - b, (10, 3)), 7);
//! ```

#![no_std]
#![allow(clippy::type_complexity)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

pub use kinded_core::*;

pub use kinded_maybe::{Maybe, MaybeKind, value};
