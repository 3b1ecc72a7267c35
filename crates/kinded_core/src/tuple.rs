//! Algebra instances for tuples.
//!
//! ## Overview
//!
//! A tuple `(A, R1, ..., Rk)` is treated as a context whose first element is
//! the "value" and whose remaining elements are _accumulators_. The witness
//! [`Tuple<R>`] names the type constructor obtained by fixing the tail
//! `R = (R1, ..., Rk)`:
//!
//! * [`Functor`]: `map(f, (a, r1, ..., rk)) = (f(a), r1, ..., rk)`. Only the
//!   head is transformed; the tail is moved into the result unchanged.
//! * [`Applicative`], when every `Ri` is a [`Monoid`]:
//!   `pure(a) = (a, id, ..., id)` and
//!   `apply((f, r1, ...), (a, s1, ...)) = (f(a), r1 ++ s1, ...)`.
//!   This is the "writer" applicative: the accumulators are combined
//!   positionally while the heads are applied.
//!
//! Independently of the witness, every tuple of monoids is a [`Monoid`] whose
//! identity and combination are taken component-wise, and [`apply`] calls an
//! n-ary function with the fields of a tuple.
//!
//! Instances are provided for tuples with up to eight fields.

use core::marker::PhantomData;

use crate::{
    functor::{Applicative, Functor},
    kind::{Kind, Kinded},
    monoid::Monoid,
};

/// Witness for the tuple type constructor with tail `R`.
///
/// `R` must itself be a tuple: `Tuple<()>` rebinds to `(A,)`, and
/// `Tuple<(String, u8)>` rebinds to `(A, String, u8)`. This type is never
/// instantiated.
pub struct Tuple<R>(PhantomData<R>);

/// Calls a function with the fields of a tuple as its arguments, in
/// positional order.
///
/// This is implemented for every function whose parameter list matches the
/// field types of the tuple. It is usually invoked through [`apply`].
pub trait TupleCall<F> {
    /// The return type of the function.
    type Output;

    /// Consumes the tuple, passing its fields to `f`.
    fn call(self, f: F) -> Self::Output;
}

/// Invokes `f` with the elements of `t` as its arguments.
///
/// ```rust
/// # use kinded_core::apply;
/// assert_eq!(apply(|a: u8, b: u8, c: u8| a * 100 + b * 10 + c, (1, 2, 3)), 123);
/// ```
pub fn apply<F, T: TupleCall<F>>(f: F, t: T) -> T::Output {
    t.call(f)
}

macro_rules! impl_tuple_kind {
    ($(($R:ident, $r:ident, $s:ident)),*) => {
        impl<$($R),*> Kind for Tuple<($($R,)*)> {
            type Rebind<A> = (A, $($R,)*);
        }

        impl<$($R),*> Functor for Tuple<($($R,)*)> {
            fn map<A, B, F>(f: F, fa: Self::Rebind<A>) -> Self::Rebind<B>
            where
                F: FnOnce(A) -> B,
            {
                let (a, $($r,)*) = fa;
                (f(a), $($r,)*)
            }
        }

        impl<$($R: Monoid),*> Applicative for Tuple<($($R,)*)> {
            fn pure<A>(a: A) -> Self::Rebind<A> {
                (a, $($R::id(),)*)
            }

            fn apply<A, B, F>(ff: Self::Rebind<F>, fa: Self::Rebind<A>) -> Self::Rebind<B>
            where
                F: FnOnce(A) -> B,
            {
                let (f, $($r,)*) = ff;
                let (a, $($s,)*) = fa;
                (f(a), $($r.append($s),)*)
            }
        }

        impl<A, $($R),*> Kinded for (A, $($R,)*) {
            type Kind = Tuple<($($R,)*)>;
            type Value = A;
        }
    };
}

impl_tuple_kind!();
impl_tuple_kind!((R1, r1, s1));
impl_tuple_kind!((R1, r1, s1), (R2, r2, s2));
impl_tuple_kind!((R1, r1, s1), (R2, r2, s2), (R3, r3, s3));
impl_tuple_kind!((R1, r1, s1), (R2, r2, s2), (R3, r3, s3), (R4, r4, s4));
impl_tuple_kind!((R1, r1, s1), (R2, r2, s2), (R3, r3, s3), (R4, r4, s4), (R5, r5, s5));
impl_tuple_kind!(
    (R1, r1, s1),
    (R2, r2, s2),
    (R3, r3, s3),
    (R4, r4, s4),
    (R5, r5, s5),
    (R6, r6, s6)
);
impl_tuple_kind!(
    (R1, r1, s1),
    (R2, r2, s2),
    (R3, r3, s3),
    (R4, r4, s4),
    (R5, r5, s5),
    (R6, r6, s6),
    (R7, r7, s7)
);

macro_rules! impl_tuple_monoid {
    ($(($T:ident, $x:ident, $y:ident)),+) => {
        impl<$($T: Monoid),+> Monoid for ($($T,)+) {
            fn id() -> Self {
                ($($T::id(),)+)
            }

            fn append(self, other: Self) -> Self {
                let ($($x,)+) = self;
                let ($($y,)+) = other;
                ($($x.append($y),)+)
            }
        }
    };
}

impl_tuple_monoid!((T1, x1, y1));
impl_tuple_monoid!((T1, x1, y1), (T2, x2, y2));
impl_tuple_monoid!((T1, x1, y1), (T2, x2, y2), (T3, x3, y3));
impl_tuple_monoid!((T1, x1, y1), (T2, x2, y2), (T3, x3, y3), (T4, x4, y4));
impl_tuple_monoid!((T1, x1, y1), (T2, x2, y2), (T3, x3, y3), (T4, x4, y4), (T5, x5, y5));
impl_tuple_monoid!(
    (T1, x1, y1),
    (T2, x2, y2),
    (T3, x3, y3),
    (T4, x4, y4),
    (T5, x5, y5),
    (T6, x6, y6)
);
impl_tuple_monoid!(
    (T1, x1, y1),
    (T2, x2, y2),
    (T3, x3, y3),
    (T4, x4, y4),
    (T5, x5, y5),
    (T6, x6, y6),
    (T7, x7, y7)
);
impl_tuple_monoid!(
    (T1, x1, y1),
    (T2, x2, y2),
    (T3, x3, y3),
    (T4, x4, y4),
    (T5, x5, y5),
    (T6, x6, y6),
    (T7, x7, y7),
    (T8, x8, y8)
);

macro_rules! impl_tuple_call {
    ($(($T:ident, $x:ident)),*) => {
        impl<F, O, $($T),*> TupleCall<F> for ($($T,)*)
        where
            F: FnOnce($($T),*) -> O,
        {
            type Output = O;

            fn call(self, f: F) -> O {
                let ($($x,)*) = self;
                f($($x),*)
            }
        }
    };
}

impl_tuple_call!();
impl_tuple_call!((T1, x1));
impl_tuple_call!((T1, x1), (T2, x2));
impl_tuple_call!((T1, x1), (T2, x2), (T3, x3));
impl_tuple_call!((T1, x1), (T2, x2), (T3, x3), (T4, x4));
impl_tuple_call!((T1, x1), (T2, x2), (T3, x3), (T4, x4), (T5, x5));
impl_tuple_call!((T1, x1), (T2, x2), (T3, x3), (T4, x4), (T5, x5), (T6, x6));
impl_tuple_call!((T1, x1), (T2, x2), (T3, x3), (T4, x4), (T5, x5), (T6, x6), (T7, x7));
impl_tuple_call!(
    (T1, x1),
    (T2, x2),
    (T3, x3),
    (T4, x4),
    (T5, x5),
    (T6, x6),
    (T7, x7),
    (T8, x8)
);

#[cfg(test)]
mod tests {
    use std::{
        string::{String, ToString},
        vec,
        vec::Vec,
    };

    use proptest::prelude::*;

    use super::*;
    use crate::{
        ap,
        functor::{Applicative, Functor},
        laws, map,
        monoid::Sum,
        pure,
    };

    type Writer = Tuple<(String, Vec<i32>)>;

    fn inc(x: i32) -> i32 {
        x + 1
    }

    #[test]
    fn test_apply_accumulates_tail() {
        let ff = (inc as fn(i32) -> i32, "hi".to_string(), vec![1]);
        let fa = (7, "!".to_string(), vec![2]);
        assert_eq!(
            <Writer as Applicative>::apply(ff, fa),
            (8, "hi!".to_string(), vec![1, 2])
        );
    }

    #[test]
    fn test_free_ap_infers_witness() {
        let ff = (|x: i32| x * 2, Sum(3u32));
        let fa = (21, Sum(4u32));
        assert_eq!(ap(ff, fa), (42, Sum(7)));
    }

    #[test]
    fn test_map_transforms_head_only() {
        let t = (41, "tail".to_string(), vec![1, 2]);
        assert_eq!(
            map(|x: i32| x.to_string(), t),
            ("41".to_string(), "tail".to_string(), vec![1, 2])
        );
        assert_eq!(<Tuple<()> as Functor>::map(|x: u8| x + 1, (1,)), (2,));
    }

    #[test]
    fn test_pure_fills_identities() {
        assert_eq!(
            pure::<Writer, _>('x'),
            ('x', String::new(), Vec::<i32>::new())
        );
        assert_eq!(pure::<Tuple<()>, _>(5), (5,));
    }

    #[test]
    fn test_lift2() {
        let sum = <Tuple<(String,)> as Applicative>::lift2(
            |a: i32, b: i32| a + b,
            (1, "a".to_string()),
            (2, "b".to_string()),
        );
        assert_eq!(sum, (3, "ab".to_string()));
    }

    #[test]
    fn test_tuple_monoid() {
        let x = (Sum(1), "a".to_string(), vec![1]);
        let y = (Sum(2), "b".to_string(), vec![2]);
        assert_eq!(x.append(y), (Sum(3), "ab".to_string(), vec![1, 2]));
        assert_eq!(
            <(Sum<i32>, String)>::id(),
            (Sum(0), String::new())
        );
    }

    #[test]
    fn test_tuple_call() {
        assert_eq!(apply(|| 7, ()), 7);
        assert_eq!(apply(|a: i32| a, (1,)), 1);
        assert_eq!(
            apply(|a: &str, b: String, c: usize| a.len() + b.len() + c, ("ab", "cde".to_string(), 10)),
            15
        );
        assert_eq!(
            apply(
                |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8| {
                    [a, b, c, d, e, f, g, h]
                },
                (1, 2, 3, 4, 5, 6, 7, 8)
            ),
            [1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    fn arb_writer() -> impl Strategy<Value = (i32, String, Vec<i32>)> {
        (
            -1000i32..1000,
            "[a-z]{0,4}",
            prop::collection::vec(-10i32..10, 0..4),
        )
    }

    proptest! {
        #[test]
        fn test_tuple_monoid_laws(x in arb_writer(), y in arb_writer(), z in arb_writer()) {
            let lift = |(n, s, v): (i32, String, Vec<i32>)| (Sum(n), s, v);
            let (x, y, z) = (lift(x), lift(y), lift(z));
            prop_assert!(laws::monoid_left_identity(&x));
            prop_assert!(laws::monoid_right_identity(&x));
            prop_assert!(laws::monoid_associativity(&x, &y, &z));
        }

        #[test]
        fn test_functor_laws(t in arb_writer(), k in -10i32..10) {
            prop_assert!(laws::functor_identity::<Writer, _>(&t));
            prop_assert!(laws::functor_composition::<Writer, _, _, _, _, _>(
                &t,
                move |x: i32| x.wrapping_mul(k),
                |x: i32| x.to_string(),
            ));
        }

        #[test]
        fn test_applicative_laws(
            u in arb_writer(),
            v in arb_writer(),
            w in arb_writer(),
            y in -1000i32..1000,
        ) {
            prop_assert!(laws::applicative_identity::<Writer, _>(&w));
            prop_assert!(laws::applicative_homomorphism::<Writer, _, _, _>(inc, y));

            let (un, us, uv) = u;
            let (vn, vs, vv) = v;
            let g = (move |x: i32| x.wrapping_sub(un), us, uv);
            let f = (move |x: i32| x.wrapping_mul(vn), vs, vv);
            prop_assert!(laws::applicative_interchange::<Writer, _, _, _>(&f, y));
            prop_assert!(laws::applicative_composition::<Writer, _, _, _, _, _>(&g, &f, &w));
        }
    }
}
