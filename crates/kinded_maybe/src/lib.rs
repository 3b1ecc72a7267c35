//! # `kinded_maybe`
//!
//! This crate provides [`Maybe<A>`], a value that is either present or
//! absent, together with its [`Functor`](kinded_core::Functor),
//! [`Applicative`](kinded_core::Applicative), [`Monad`](kinded_core::Monad)
//! and [`Monoid`](kinded_core::Monoid) instances. The witness for the `Maybe`
//! type constructor is [`MaybeKind`].
//!
//! ## Storage
//!
//! A `Maybe<A>` stores its value inline; nothing is ever allocated on the heap.
//! The discriminant acts as the presence flag and the `Present` payload is the
//! storage cell, so the payload is a fully constructed `A` exactly when the
//! value is present. Dropping a present `Maybe<A>` drops its payload once, and
//! every mutator that replaces a present value drops the old payload before the
//! new one is installed.
//!
//! ## Absence
//!
//! The combinators ([`Maybe::map`], [`Maybe::and_then`] and the algebra
//! instances) are the preferred way to work with possibly-absent values, since
//! absence simply flows through them. Unwrapping an absent value with
//! [`Maybe::get`] and friends is a contract violation that panics with the
//! [`Error::AbsentAccess`] diagnostic; the `try_` variants report the same
//! condition as a [`Result`].

#![no_std]
#![allow(clippy::type_complexity)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

#[cfg(test)]
extern crate std;

mod convert;
mod instances;

pub use instances::MaybeKind;

use core::mem;

use kinded_core::{Error, Result};

/// A value of type `A` that may or may not be present.
///
/// Two absent values are equal, and an absent value is never equal to a
/// present one. Absent values order before every present value; present
/// values compare by their contents.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// No value is held.
    #[default]
    Absent,
    /// A value is held.
    Present(A),
}

/// Creates a present [`Maybe<A>`] holding `a`.
pub const fn value<A>(a: A) -> Maybe<A> {
    Maybe::Present(a)
}

#[cold]
#[track_caller]
fn absent_access() -> ! {
    panic!("{}", Error::AbsentAccess)
}

impl<A> Maybe<A> {
    /// Creates an absent value. Equivalent to [`Maybe::default`].
    pub const fn absent() -> Self {
        Maybe::Absent
    }

    /// Creates a present value holding `a`.
    pub const fn present(a: A) -> Self {
        Maybe::Present(a)
    }

    /// Creates a present value by running the constructor `f`.
    pub fn with(f: impl FnOnce() -> A) -> Self {
        Maybe::Present(f())
    }

    /// Creates a present value from a fallible constructor. An error from `f`
    /// is returned unchanged and no value is created.
    pub fn try_with<E>(
        f: impl FnOnce() -> core::result::Result<A, E>,
    ) -> core::result::Result<Self, E> {
        Ok(Maybe::Present(f()?))
    }

    /// Returns `true` if a value is held.
    pub const fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns `true` if no value is held.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Returns a reference to the held value.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::AbsentAccess`] if the value is absent.
    #[track_caller]
    pub fn get(&self) -> &A {
        match self {
            Maybe::Present(a) => a,
            Maybe::Absent => absent_access(),
        }
    }

    /// Returns an exclusive reference to the held value.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::AbsentAccess`] if the value is absent.
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut A {
        match self {
            Maybe::Present(a) => a,
            Maybe::Absent => absent_access(),
        }
    }

    /// Consumes `self`, returning the held value.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::AbsentAccess`] if the value is absent.
    #[track_caller]
    pub fn into_inner(self) -> A {
        match self {
            Maybe::Present(a) => a,
            Maybe::Absent => absent_access(),
        }
    }

    /// As in [`Maybe::get`], but reports absence as an error.
    pub fn try_get(&self) -> Result<&A> {
        match self {
            Maybe::Present(a) => Ok(a),
            Maybe::Absent => Err(Error::AbsentAccess),
        }
    }

    /// As in [`Maybe::get_mut`], but reports absence as an error.
    pub fn try_get_mut(&mut self) -> Result<&mut A> {
        match self {
            Maybe::Present(a) => Ok(a),
            Maybe::Absent => Err(Error::AbsentAccess),
        }
    }

    /// As in [`Maybe::into_inner`], but reports absence as an error.
    pub fn try_into_inner(self) -> Result<A> {
        match self {
            Maybe::Present(a) => Ok(a),
            Maybe::Absent => Err(Error::AbsentAccess),
        }
    }

    /// As in `Option<T>::as_ref`.
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Maybe::Present(a) => Maybe::Present(a),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// As in `Option<T>::as_mut`.
    pub fn as_mut(&mut self) -> Maybe<&mut A> {
        match self {
            Maybe::Present(a) => Maybe::Present(a),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Drops the held value, if any, leaving `self` absent.
    pub fn clear(&mut self) {
        *self = Maybe::Absent;
    }

    /// Moves the held value out, leaving `self` absent.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Stores `a`, returning the value previously held.
    pub fn replace(&mut self, a: A) -> Self {
        mem::replace(self, Maybe::Present(a))
    }

    /// Stores `a`, dropping the value previously held, and returns a
    /// reference to the new value.
    pub fn set(&mut self, a: A) -> &mut A {
        self.emplace(move || a)
    }

    /// Drops the held value, if any, and then stores the value built by `f`.
    ///
    /// If `f` panics, `self` is left absent.
    pub fn emplace(&mut self, f: impl FnOnce() -> A) -> &mut A {
        self.clear();
        *self = Maybe::Present(f());
        self.get_mut()
    }

    /// Maps the held value with `f`, as in `Option<T>::map`.
    pub fn map<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Maybe::Present(a) => Maybe::Present(f(a)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Feeds the held value to `f`, as in `Option<T>::and_then`.
    pub fn and_then<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Maybe::Present(a) => f(a),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Returns the held value or `default` if absent.
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Maybe::Present(a) => a,
            Maybe::Absent => default,
        }
    }

    /// Returns the held value or computes one with `f` if absent.
    pub fn unwrap_or_else<F>(self, f: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Maybe::Present(a) => a,
            Maybe::Absent => f(),
        }
    }
}

impl<A: Clone> Clone for Maybe<A> {
    fn clone(&self) -> Self {
        match self {
            Maybe::Present(a) => Maybe::Present(a.clone()),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Drops the value held by `self` before cloning from `source`, so that
    /// `self` is absent rather than half-assigned if `A::clone` panics.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        if let Maybe::Present(a) = source {
            *self = Maybe::Present(a.clone());
        }
    }
}

impl<A: Copy> Copy for Maybe<A> {}
