//! Witness types for one-parameter type constructors.
//!
//! ## Overview
//!
//! A functor is not a type but a type _constructor_: `Maybe` rather than
//! `Maybe<A>`, or "a tuple whose tail is `(String, Vec<u8>)`" rather than any
//! particular tuple. Rust cannot abstract over type constructors directly, so
//! each constructor is named by a zero-sized _witness_ type that implements
//! [`Kind`]. The generic associated type [`Kind::Rebind`] projects the witness
//! and an element type back to the concrete container:
//!
//! ```text
//!   (MaybeKind, A)                     ↦ Maybe<A>
//!   (Tuple<(String, Vec<u8>)>, A)      ↦ (A, String, Vec<u8>)
//! ```
//!
//! The algebra traits in [`functor`](crate::functor) are implemented on the
//! witnesses, and their operations accept and return rebound containers.
//!
//! ## Going back from a container to its witness
//!
//! Calling `<MaybeKind as Functor>::map(f, m)` works, but naming the witness
//! at every call site is noisy. The [`Kinded`] trait is the inverse mapping: a
//! concrete container names its witness and its element type, with the
//! guarantee that rebinding the witness at that element type yields the
//! container itself. Free functions such as [`map`](crate::map) rely on it to
//! infer the witness from their arguments.

/// A witness for a one-parameter type constructor.
///
/// Implementations are usually uninhabited or zero-sized marker types; only
/// the [`Rebind`](Kind::Rebind) projection matters.
pub trait Kind {
    /// The concrete container of this kind holding elements of type `A`.
    type Rebind<A>;
}

/// A concrete container that knows the [`Kind`] it was built from.
///
/// The bound on [`Kinded::Kind`] ties the two directions together: for any
/// container `FA`, `<FA::Kind as Kind>::Rebind<FA::Value>` is `FA` again.
pub trait Kinded: Sized {
    /// The witness of the type constructor that produced this container.
    type Kind: Kind<Rebind<Self::Value> = Self>;

    /// The element type this container is parameterized over.
    type Value;
}

/// Alias for the container of the same kind as `FA` holding `B` instead.
pub type Rebound<FA, B> = <<FA as Kinded>::Kind as Kind>::Rebind<B>;
