//! Executable statements of the algebraic laws.
//!
//! Each function evaluates both sides of one law for the supplied inputs and
//! returns whether they agree. They are intended to be driven by a property
//! testing framework with generated inputs, and they are used that way by the
//! tests of every instance in this workspace.
//!
//! | Law | Statement |
//! |-----|-----------|
//! | MONOID-LEFT | `append(id, x) == x` |
//! | MONOID-RIGHT | `append(x, id) == x` |
//! | MONOID-ASSOC | `append(append(x, y), z) == append(x, append(y, z))` |
//! | FUNCTOR-ID | `map(id, fa) == fa` |
//! | FUNCTOR-COMPOSE | `map(g . f, fa) == map(g, map(f, fa))` |
//! | APPLICATIVE-ID | `apply(pure(id), v) == v` |
//! | APPLICATIVE-HOMO | `apply(pure(f), pure(x)) == pure(f(x))` |
//! | APPLICATIVE-INTERCHANGE | `apply(u, pure(y)) == apply(pure(\|g\| g(y)), u)` |
//! | APPLICATIVE-COMPOSE | `apply(apply(apply(pure(.), u), v), w) == apply(u, apply(v, w))` |
//! | MONAD-LEFT | `bind(pure(a), k) == k(a)` |
//! | MONAD-RIGHT | `bind(m, pure) == m` |
//! | MONAD-ASSOC | `bind(bind(m, k), h) == bind(m, \|x\| bind(k(x), h))` |
//!
//! Functor-like checkers take the witness as their first type parameter,
//! e.g. `functor_identity::<MaybeKind, _>(&m)`.

use core::convert::identity;

use crate::{
    functor::{Applicative, Functor, Monad},
    monoid::Monoid,
};

/// MONOID-LEFT
pub fn monoid_left_identity<T>(x: &T) -> bool
where
    T: Monoid + Clone + PartialEq,
{
    T::id().append(x.clone()) == *x
}

/// MONOID-RIGHT
pub fn monoid_right_identity<T>(x: &T) -> bool
where
    T: Monoid + Clone + PartialEq,
{
    x.clone().append(T::id()) == *x
}

/// MONOID-ASSOC
pub fn monoid_associativity<T>(x: &T, y: &T, z: &T) -> bool
where
    T: Monoid + Clone + PartialEq,
{
    let lhs = x.clone().append(y.clone()).append(z.clone());
    let rhs = x.clone().append(y.clone().append(z.clone()));
    lhs == rhs
}

/// FUNCTOR-ID
pub fn functor_identity<K, A>(fa: &K::Rebind<A>) -> bool
where
    K: Functor,
    K::Rebind<A>: Clone + PartialEq,
{
    K::map::<A, A, _>(identity, fa.clone()) == *fa
}

/// FUNCTOR-COMPOSE
pub fn functor_composition<K, A, B, C, F, G>(fa: &K::Rebind<A>, f: F, g: G) -> bool
where
    K: Functor,
    F: FnOnce(A) -> B + Clone,
    G: FnOnce(B) -> C + Clone,
    K::Rebind<A>: Clone,
    K::Rebind<C>: PartialEq,
{
    let (f2, g2) = (f.clone(), g.clone());
    let lhs = K::map::<A, C, _>(move |a| g(f(a)), fa.clone());
    let rhs = K::map::<B, C, G>(g2, K::map::<A, B, F>(f2, fa.clone()));
    lhs == rhs
}

/// APPLICATIVE-ID
pub fn applicative_identity<K, A>(v: &K::Rebind<A>) -> bool
where
    K: Applicative,
    K::Rebind<A>: Clone + PartialEq,
{
    let id = K::pure::<fn(A) -> A>(identity);
    K::apply::<A, A, fn(A) -> A>(id, v.clone()) == *v
}

/// APPLICATIVE-HOMO
pub fn applicative_homomorphism<K, A, B, F>(f: F, x: A) -> bool
where
    K: Applicative,
    A: Clone,
    F: FnOnce(A) -> B + Clone,
    K::Rebind<B>: PartialEq,
{
    let lhs = K::apply::<A, B, F>(K::pure::<F>(f.clone()), K::pure::<A>(x.clone()));
    lhs == K::pure::<B>(f(x))
}

/// APPLICATIVE-INTERCHANGE
pub fn applicative_interchange<K, A, B, F>(u: &K::Rebind<F>, y: A) -> bool
where
    K: Applicative,
    A: Clone,
    F: FnOnce(A) -> B,
    K::Rebind<F>: Clone,
    K::Rebind<B>: PartialEq,
{
    let lhs = K::apply::<A, B, F>(u.clone(), K::pure::<A>(y.clone()));
    let rhs = K::apply::<F, B, _>(K::pure(move |g: F| g(y)), u.clone());
    lhs == rhs
}

/// APPLICATIVE-COMPOSE
pub fn applicative_composition<K, A, B, C, F, G>(
    u: &K::Rebind<G>,
    v: &K::Rebind<F>,
    w: &K::Rebind<A>,
) -> bool
where
    K: Applicative,
    F: FnOnce(A) -> B,
    G: FnOnce(B) -> C,
    K::Rebind<G>: Clone,
    K::Rebind<F>: Clone,
    K::Rebind<A>: Clone,
    K::Rebind<C>: PartialEq,
{
    let compose = |g: G| move |f: F| move |a: A| g(f(a));
    let composed = K::apply::<G, _, _>(K::pure(compose), u.clone());
    let composed = K::apply::<F, _, _>(composed, v.clone());
    let lhs = K::apply::<A, C, _>(composed, w.clone());
    let rhs = K::apply::<B, C, G>(u.clone(), K::apply::<A, B, F>(v.clone(), w.clone()));
    lhs == rhs
}

/// MONAD-LEFT
pub fn monad_left_identity<K, A, B, H>(a: A, k: H) -> bool
where
    K: Monad,
    A: Clone,
    H: FnOnce(A) -> K::Rebind<B> + Clone,
    K::Rebind<B>: PartialEq,
{
    K::bind::<A, B, H>(K::pure::<A>(a.clone()), k.clone()) == k(a)
}

/// MONAD-RIGHT
pub fn monad_right_identity<K, A>(m: &K::Rebind<A>) -> bool
where
    K: Monad,
    K::Rebind<A>: Clone + PartialEq,
{
    K::bind::<A, A, _>(m.clone(), |a| K::pure::<A>(a)) == *m
}

/// MONAD-ASSOC
pub fn monad_associativity<K, A, B, C, H, J>(m: &K::Rebind<A>, k: H, h: J) -> bool
where
    K: Monad,
    H: FnOnce(A) -> K::Rebind<B> + Clone,
    J: FnOnce(B) -> K::Rebind<C> + Clone,
    K::Rebind<A>: Clone,
    K::Rebind<C>: PartialEq,
{
    let lhs = K::bind::<B, C, J>(K::bind::<A, B, H>(m.clone(), k.clone()), h.clone());
    let rhs = K::bind::<A, C, _>(m.clone(), move |x| K::bind::<B, C, J>(k(x), h));
    lhs == rhs
}
