//! Closed N-ary tagged unions with exhaustive matching.
//!
//! One enum per arity, [`Union1`] through [`Union8`]. The variant
//! constructors are the per-alternative factories, and
//! `match_with(h1, .., hN)` requires exactly one handler per alternative —
//! the arity is part of the method signature, so a match with too few or too
//! many handlers does not compile. There is no conversion between unions of
//! different arity.
//!
//! # Examples
//!
//! ```rust
//! use outcome::Union3;
//!
//! let u: Union3<u8, &str, f64> = Union3::Second("hello");
//! let len = u.match_with(|b| b as usize, |s| s.len(), |f| f as usize);
//! assert_eq!(len, 5);
//! ```

use either::Either;

macro_rules! define_unions {
    ($(
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident : $ty:ident => $handler:ident : $hty:ident ),+ $(,)?
        }
    )+) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name< $($ty),+ > {
            $(
                #[doc = concat!("Alternative holding a `", stringify!($ty), "`.")]
                $variant($ty),
            )+
        }

        impl< $($ty),+ > $name< $($ty),+ > {
            /// Exhaustive dispatch: invokes the single handler matching the
            /// populated alternative and returns its result. One handler per
            /// alternative, enforced at compile time.
            #[inline]
            pub fn match_with<MatchOut, $($hty),+ >(self, $( $handler: $hty ),+ ) -> MatchOut
            where
                $( $hty: FnOnce($ty) -> MatchOut, )+
            {
                match self {
                    $( $name::$variant(value) => $handler(value), )+
                }
            }
        }
    )+};
}

define_unions! {
    /// Closed union over a single alternative.
    ///
    /// Degenerate but valid: matching requires exactly one handler.
    Union1 {
        First: T1 => h1: H1,
    }

    /// Closed union over two alternatives.
    ///
    /// Converts losslessly to and from [`either::Either`].
    Union2 {
        First: T1 => h1: H1,
        Second: T2 => h2: H2,
    }

    /// Closed union over three alternatives.
    Union3 {
        First: T1 => h1: H1,
        Second: T2 => h2: H2,
        Third: T3 => h3: H3,
    }

    /// Closed union over four alternatives.
    Union4 {
        First: T1 => h1: H1,
        Second: T2 => h2: H2,
        Third: T3 => h3: H3,
        Fourth: T4 => h4: H4,
    }

    /// Closed union over five alternatives.
    Union5 {
        First: T1 => h1: H1,
        Second: T2 => h2: H2,
        Third: T3 => h3: H3,
        Fourth: T4 => h4: H4,
        Fifth: T5 => h5: H5,
    }

    /// Closed union over six alternatives.
    Union6 {
        First: T1 => h1: H1,
        Second: T2 => h2: H2,
        Third: T3 => h3: H3,
        Fourth: T4 => h4: H4,
        Fifth: T5 => h5: H5,
        Sixth: T6 => h6: H6,
    }

    /// Closed union over seven alternatives.
    Union7 {
        First: T1 => h1: H1,
        Second: T2 => h2: H2,
        Third: T3 => h3: H3,
        Fourth: T4 => h4: H4,
        Fifth: T5 => h5: H5,
        Sixth: T6 => h6: H6,
        Seventh: T7 => h7: H7,
    }

    /// Closed union over eight alternatives.
    Union8 {
        First: T1 => h1: H1,
        Second: T2 => h2: H2,
        Third: T3 => h3: H3,
        Fourth: T4 => h4: H4,
        Fifth: T5 => h5: H5,
        Sixth: T6 => h6: H6,
        Seventh: T7 => h7: H7,
        Eighth: T8 => h8: H8,
    }
}

impl<T1, T2> From<Either<T1, T2>> for Union2<T1, T2> {
    #[inline]
    fn from(value: Either<T1, T2>) -> Self {
        match value {
            Either::Left(first) => Union2::First(first),
            Either::Right(second) => Union2::Second(second),
        }
    }
}

impl<T1, T2> From<Union2<T1, T2>> for Either<T1, T2> {
    #[inline]
    fn from(value: Union2<T1, T2>) -> Self {
        match value {
            Union2::First(first) => Either::Left(first),
            Union2::Second(second) => Either::Right(second),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_union1_round_trip() {
        let u: Union1<u8> = Union1::First(10);
        assert_eq!(u.match_with(|b| b as u32 + 1), 11);
    }

    #[test]
    fn test_union2_round_trip_each_alternative() {
        let first: Union2<u8, &str> = Union2::First(3);
        assert_eq!(first.match_with(|b| b as usize, |s| s.len()), 3);

        let second: Union2<u8, &str> = Union2::Second("four");
        assert_eq!(second.match_with(|b| b as usize, |s| s.len()), 4);
    }

    #[test]
    fn test_union3_round_trip_each_alternative() {
        let cases: [(Union3<u8, i16, u32>, usize); 3] = [
            (Union3::First(1), 0),
            (Union3::Second(2), 1),
            (Union3::Third(3), 2),
        ];
        for (union, expected_tag) in cases {
            let tag = union.match_with(|_| 0, |_| 1, |_| 2);
            assert_eq!(tag, expected_tag);
        }
    }

    #[test]
    fn test_union8_round_trip_each_alternative() {
        type U8Wide = Union8<u8, i8, u16, i16, u32, i32, u64, i64>;
        let cases: [(U8Wide, usize); 8] = [
            (Union8::First(1), 0),
            (Union8::Second(2), 1),
            (Union8::Third(3), 2),
            (Union8::Fourth(4), 3),
            (Union8::Fifth(5), 4),
            (Union8::Sixth(6), 5),
            (Union8::Seventh(7), 6),
            (Union8::Eighth(8), 7),
        ];
        for (union, expected_tag) in cases {
            let tag =
                union.match_with(|_| 0, |_| 1, |_| 2, |_| 3, |_| 4, |_| 5, |_| 6, |_| 7);
            assert_eq!(tag, expected_tag);
        }
    }

    #[test]
    fn test_match_invokes_handler_exactly_once_with_payload() {
        let calls = Cell::new(0);
        let u: Union3<u8, &str, f64> = Union3::Second("payload");
        let seen = u.match_with(
            |_| unreachable!("first handler must not run"),
            |s| {
                calls.set(calls.get() + 1);
                s
            },
            |_| unreachable!("third handler must not run"),
        );
        assert_eq!(calls.get(), 1);
        assert_eq!(seen, "payload");
    }

    #[test]
    fn test_equality_requires_same_tag_and_payload() {
        let a: Union2<u8, u8> = Union2::First(1);
        let b: Union2<u8, u8> = Union2::Second(1);
        let c: Union2<u8, u8> = Union2::First(1);
        let d: Union2<u8, u8> = Union2::First(2);

        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_ne!(a, d);
    }

    #[test]
    fn test_union2_either_interop() {
        let u: Union2<u8, &str> = Either::<u8, &str>::Right("two").into();
        assert_eq!(u, Union2::Second("two"));

        let e: Either<u8, &str> = Union2::First(7).into();
        assert_eq!(e, Either::Left(7));
    }
}
