//! The [`Monoid`] capability set and instances for common types.
//!
//! A monoid is a type with an associative binary operation and an identity
//! element for it. Unlike the functor hierarchy, monoids are not higher-kinded
//! and so the trait is implemented directly on the carrier type.
//!
//! Many types admit more than one lawful monoid. Integers can be added or
//! multiplied, booleans can be combined with `||` or `&&`. Rather than
//! choosing one arbitrarily, those carriers are wrapped in newtypes that name
//! the operation: [`Sum`], [`Product`], [`Any`] and [`All`].

use core::{
    cmp::Ordering,
    ops::{Add, Mul},
};

use num_traits::{One, Zero};

/// A type with an associative binary operation and an identity element.
///
/// ## Laws
///
/// * Left identity: `T::id().append(x) == x`
/// * Right identity: `x.append(T::id()) == x`
/// * Associativity: `x.append(y).append(z) == x.append(y.append(z))`
pub trait Monoid: Sized {
    /// The identity element of [`append`](Monoid::append).
    fn id() -> Self;

    /// Combines `self` with `other`, in that order.
    fn append(self, other: Self) -> Self;

    /// Combines every element produced by `iter` from left to right, starting
    /// from the identity element.
    fn concat<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter().fold(Self::id(), Self::append)
    }
}

impl Monoid for () {
    fn id() -> Self {}

    fn append(self, _: Self) -> Self {}
}

/// Lexicographic combination: the first non-equal ordering wins.
impl Monoid for Ordering {
    fn id() -> Self {
        Ordering::Equal
    }

    fn append(self, other: Self) -> Self {
        self.then(other)
    }
}

#[cfg(feature = "alloc")]
impl Monoid for alloc::string::String {
    fn id() -> Self {
        alloc::string::String::new()
    }

    fn append(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

#[cfg(feature = "alloc")]
impl<T> Monoid for alloc::vec::Vec<T> {
    fn id() -> Self {
        alloc::vec::Vec::new()
    }

    fn append(mut self, mut other: Self) -> Self {
        alloc::vec::Vec::append(&mut self, &mut other);
        self
    }
}

/// Monoid under addition, with zero as the identity.
///
/// `append` uses `T`'s [`Add`], so overflow behaves as it does for `T`: a
/// fixed-width integer panics on overflow in debug builds. Wrap the carrier
/// in [`core::num::Wrapping`] for modular arithmetic that never panics.
///
/// ```rust
/// # use core::num::Wrapping;
/// # use kinded_core::{Monoid, Sum};
/// let total = Sum(Wrapping(u8::MAX)).append(Sum(Wrapping(2)));
/// assert_eq!(total, Sum(Wrapping(1)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sum<T>(pub T);

impl<T: Zero + Add<Output = T>> Monoid for Sum<T> {
    fn id() -> Self {
        Sum(T::zero())
    }

    fn append(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

/// Monoid under multiplication, with one as the identity.
///
/// As with [`Sum`], overflow follows `T`'s [`Mul`]; use
/// [`core::num::Wrapping`] to multiply modulo the integer width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<T>(pub T);

impl<T: One + Mul<Output = T>> Monoid for Product<T> {
    fn id() -> Self {
        Product(T::one())
    }

    fn append(self, other: Self) -> Self {
        Product(self.0 * other.0)
    }
}

/// Boolean monoid under disjunction (`false` is the identity).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Any(pub bool);

impl Monoid for Any {
    fn id() -> Self {
        Any(false)
    }

    fn append(self, other: Self) -> Self {
        Any(self.0 || other.0)
    }
}

/// Boolean monoid under conjunction (`true` is the identity).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct All(pub bool);

impl Default for All {
    fn default() -> Self {
        All::id()
    }
}

impl Monoid for All {
    fn id() -> Self {
        All(true)
    }

    fn append(self, other: Self) -> Self {
        All(self.0 && other.0)
    }
}

#[cfg(test)]
mod tests {
    use std::{string::String, vec, vec::Vec};

    use proptest::prelude::*;

    use super::*;
    use crate::laws::{monoid_associativity, monoid_left_identity, monoid_right_identity};

    fn arb_ordering() -> impl Strategy<Value = Ordering> {
        prop_oneof![
            Just(Ordering::Less),
            Just(Ordering::Equal),
            Just(Ordering::Greater)
        ]
    }

    #[test]
    fn test_string_concatenation() {
        let s = String::from("ab").append(String::from("cd"));
        assert_eq!(s, "abcd");
        assert_eq!(String::id(), "");
    }

    #[test]
    fn test_concat() {
        assert_eq!(Sum::concat([1, 2, 3, 4].map(Sum)), Sum(10));
        assert_eq!(Product::concat([1, 2, 3, 4].map(Product)), Product(24));
        assert_eq!(Any::concat([]), Any(false));
        assert_eq!(All::concat([]), All(true));
        assert_eq!(
            Vec::concat([vec![1], vec![], vec![2, 3]]),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert_eq!(Ordering::Equal.append(Ordering::Less), Ordering::Less);
        assert_eq!(Ordering::Greater.append(Ordering::Less), Ordering::Greater);
    }

    #[test]
    fn test_wrapping_carriers_never_overflow() {
        use core::num::Wrapping;

        assert_eq!(
            Sum(Wrapping(u8::MAX)).append(Sum(Wrapping(2))),
            Sum(Wrapping(1))
        );
        assert_eq!(
            Product::concat([16u8, 16, 3].map(|n| Product(Wrapping(n)))),
            Product(Wrapping(0))
        );
        assert_eq!(Sum::<Wrapping<i8>>::id(), Sum(Wrapping(0)));
    }

    #[test]
    fn test_all_default_is_identity() {
        assert_eq!(All::default(), All::id());
        assert_eq!(Any::default(), Any::id());
    }

    proptest! {
        #[test]
        fn test_string_laws(x in ".{0,8}", y in ".{0,8}", z in ".{0,8}") {
            prop_assert!(monoid_left_identity(&x));
            prop_assert!(monoid_right_identity(&x));
            prop_assert!(monoid_associativity(&x, &y, &z));
        }

        #[test]
        fn test_vec_laws(
            x in prop::collection::vec(any::<u8>(), 0..6),
            y in prop::collection::vec(any::<u8>(), 0..6),
            z in prop::collection::vec(any::<u8>(), 0..6),
        ) {
            prop_assert!(monoid_left_identity(&x));
            prop_assert!(monoid_right_identity(&x));
            prop_assert!(monoid_associativity(&x, &y, &z));
        }

        #[test]
        fn test_numeric_laws(x in -1000i64..1000, y in -1000i64..1000, z in -1000i64..1000) {
            prop_assert!(monoid_left_identity(&Sum(x)));
            prop_assert!(monoid_right_identity(&Sum(x)));
            prop_assert!(monoid_associativity(&Sum(x), &Sum(y), &Sum(z)));
            prop_assert!(monoid_left_identity(&Product(x)));
            prop_assert!(monoid_right_identity(&Product(x)));
            prop_assert!(monoid_associativity(&Product(x), &Product(y), &Product(z)));
        }

        #[test]
        fn test_boolean_laws(x in any::<bool>(), y in any::<bool>(), z in any::<bool>()) {
            prop_assert!(monoid_associativity(&Any(x), &Any(y), &Any(z)));
            prop_assert!(monoid_associativity(&All(x), &All(y), &All(z)));
            prop_assert!(monoid_left_identity(&Any(x)) && monoid_right_identity(&All(x)));
        }

        #[test]
        fn test_ordering_laws(x in arb_ordering(), y in arb_ordering(), z in arb_ordering()) {
            prop_assert!(monoid_left_identity(&x));
            prop_assert!(monoid_right_identity(&x));
            prop_assert!(monoid_associativity(&x, &y, &z));
        }
    }
}
