//! The [`Functor`], [`Applicative`] and [`Monad`] capability sets.
//!
//! ## Design
//!
//! Each trait is implemented by a [`Kind`] witness rather than by a container,
//! and its operations are associated functions that take and return rebound
//! containers. This keeps dispatch entirely static: the witness type selects
//! the implementation at compile time and nothing is boxed or type-erased.
//!
//! The hierarchy mirrors the usual one. Every [`Monad`] is an [`Applicative`]
//! and every [`Applicative`] is a [`Functor`], so a witness that provides
//! `bind` also provides `pure`, `apply` and `map`. Implementors must preserve
//! the laws listed on each trait; the [`laws`](crate::laws) module contains
//! checkers for all of them.
//!
//! The free functions [`map`], [`ap`] and [`bind`] recover the witness from
//! their arguments through [`Kinded`], so call sites rarely need to name it.
//! [`pure`] has nothing to infer from and takes the witness explicitly.

use crate::kind::{Kind, Kinded, Rebound};

/// A type constructor supporting a structure-preserving `map`.
///
/// ## Laws
///
/// * Identity: `map(|x| x, fa) == fa`
/// * Composition: `map(|x| g(f(x)), fa) == map(g, map(f, fa))`
pub trait Functor: Kind {
    /// Applies `f` to the element(s) held by `fa`, keeping the surrounding
    /// structure intact.
    fn map<A, B, F>(f: F, fa: Self::Rebind<A>) -> Self::Rebind<B>
    where
        F: FnOnce(A) -> B;
}

/// A [`Functor`] that can lift plain values and apply functions that are
/// themselves held in the context.
///
/// ## Laws
///
/// * Identity: `apply(pure(|x| x), v) == v`
/// * Homomorphism: `apply(pure(f), pure(x)) == pure(f(x))`
/// * Interchange: `apply(u, pure(y)) == apply(pure(|g| g(y)), u)`
/// * Composition:
///   `apply(apply(apply(pure(compose), u), v), w) == apply(u, apply(v, w))`
pub trait Applicative: Functor {
    /// Lifts a value into the context with no additional effect.
    fn pure<A>(a: A) -> Self::Rebind<A>;

    /// Applies the function held by `ff` to the value held by `fa`, combining
    /// the two contexts.
    fn apply<A, B, F>(ff: Self::Rebind<F>, fa: Self::Rebind<A>) -> Self::Rebind<B>
    where
        F: FnOnce(A) -> B;

    /// Combines two contexts with a binary function.
    fn lift2<A, B, C, F>(f: F, fa: Self::Rebind<A>, fb: Self::Rebind<B>) -> Self::Rebind<C>
    where
        F: FnOnce(A, B) -> C,
    {
        let partial = Self::map::<A, _, _>(move |a: A| move |b: B| f(a, b), fa);
        Self::apply::<B, C, _>(partial, fb)
    }
}

/// An [`Applicative`] whose computations can depend on the results of earlier
/// ones.
///
/// `pure` is inherited from [`Applicative`].
///
/// ## Laws
///
/// * Left identity: `bind(pure(a), k) == k(a)`
/// * Right identity: `bind(m, pure) == m`
/// * Associativity: `bind(bind(m, k), h) == bind(m, |x| bind(k(x), h))`
pub trait Monad: Applicative {
    /// Feeds the value held by `fa` to `k`, producing a new context.
    fn bind<A, B, K>(fa: Self::Rebind<A>, k: K) -> Self::Rebind<B>
    where
        K: FnOnce(A) -> Self::Rebind<B>;

    /// Collapses one level of nesting.
    fn join<A>(ffa: Self::Rebind<Self::Rebind<A>>) -> Self::Rebind<A> {
        Self::bind::<Self::Rebind<A>, A, _>(ffa, |fa| fa)
    }
}

/// Lifts `a` into the applicative named by the witness `K`.
///
/// ```rust
/// # use kinded_core::{Tuple, pure};
/// let t = pure::<Tuple<(String,)>, _>(7);
/// assert_eq!(t, (7, String::new()));
/// ```
pub fn pure<K: Applicative, A>(a: A) -> K::Rebind<A> {
    K::pure(a)
}

/// Proxy for [`Functor::map`] that infers the witness from `fa`.
pub fn map<FA, B, F>(f: F, fa: FA) -> Rebound<FA, B>
where
    FA: Kinded,
    FA::Kind: Functor,
    F: FnOnce(FA::Value) -> B,
{
    <FA::Kind as Functor>::map::<FA::Value, B, F>(f, fa)
}

/// Proxy for [`Applicative::apply`] that infers the witness from its
/// arguments.
///
/// This is named `ap` so that [`apply`](crate::apply) remains the helper that
/// calls a function with the fields of a tuple.
pub fn ap<FF, FA, B>(ff: FF, fa: FA) -> Rebound<FA, B>
where
    FA: Kinded,
    FF: Kinded,
    FA::Kind: Applicative + Kind<Rebind<FF::Value> = FF>,
    FF::Value: FnOnce(FA::Value) -> B,
{
    <FA::Kind as Applicative>::apply::<FA::Value, B, FF::Value>(ff, fa)
}

/// Proxy for [`Monad::bind`] that infers the witness from `fa`.
pub fn bind<FA, FB, K>(fa: FA, k: K) -> FB
where
    FA: Kinded,
    FB: Kinded,
    FA::Kind: Monad + Kind<Rebind<FB::Value> = FB>,
    K: FnOnce(FA::Value) -> FB,
{
    <FA::Kind as Monad>::bind::<FA::Value, FB::Value, K>(fa, k)
}
