use kinded_core::{Applicative, Functor, Kind, Kinded, Monad, Monoid};

use crate::Maybe;

/// The witness for the [`Maybe`] type constructor.
///
/// This type is uninhabited; it only exists to carry the [`Functor`],
/// [`Applicative`] and [`Monad`] instances of [`Maybe`].
///
/// ```rust
/// # use kinded_core::Monad;
/// # use kinded_maybe::{Maybe, MaybeKind, value};
/// let halve = |x: u32| if x % 2 == 0 { value(x / 2) } else { Maybe::Absent };
/// assert_eq!(MaybeKind::bind(value(8), halve), value(4));
/// assert_eq!(MaybeKind::bind(value(7), halve), Maybe::Absent);
/// ```
pub enum MaybeKind {}

impl Kind for MaybeKind {
    type Rebind<A> = Maybe<A>;
}

impl<A> Kinded for Maybe<A> {
    type Kind = MaybeKind;
    type Value = A;
}

impl Functor for MaybeKind {
    fn map<A, B, F>(f: F, fa: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        fa.map(f)
    }
}

impl Applicative for MaybeKind {
    fn pure<A>(a: A) -> Maybe<A> {
        Maybe::Present(a)
    }

    fn apply<A, B, F>(ff: Maybe<F>, fa: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (ff, fa) {
            (Maybe::Present(f), Maybe::Present(a)) => Maybe::Present(f(a)),
            _ => Maybe::Absent,
        }
    }
}

impl Monad for MaybeKind {
    fn bind<A, B, K>(fa: Maybe<A>, k: K) -> Maybe<B>
    where
        K: FnOnce(A) -> Maybe<B>,
    {
        fa.and_then(k)
    }
}

/// Absent values are skipped, and two present values are combined with the
/// monoid of `A`. This makes absence the identity of the lifted monoid.
impl<A: Monoid> Monoid for Maybe<A> {
    fn id() -> Self {
        Maybe::Absent
    }

    fn append(self, other: Self) -> Self {
        match (self, other) {
            (Maybe::Present(x), Maybe::Present(y)) => Maybe::Present(x.append(y)),
            (Maybe::Present(x), Maybe::Absent) => Maybe::Present(x),
            (Maybe::Absent, other) => other,
        }
    }
}
