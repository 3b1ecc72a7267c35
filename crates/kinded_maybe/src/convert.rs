use crate::Maybe;

impl<A> From<A> for Maybe<A> {
    fn from(a: A) -> Self {
        Maybe::Present(a)
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(o: Option<A>) -> Self {
        match o {
            Some(a) => Maybe::Present(a),
            None => Maybe::Absent,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(m: Maybe<A>) -> Self {
        match m {
            Maybe::Present(a) => Some(a),
            Maybe::Absent => None,
        }
    }
}

/// Presence test, equivalent to [`Maybe::is_present`].
impl<A> From<&Maybe<A>> for bool {
    fn from(m: &Maybe<A>) -> Self {
        m.is_present()
    }
}

#[test]
fn test_option_round_trip() {
    assert_eq!(Maybe::<i32>::from(Some(3)), Maybe::Present(3));
    assert_eq!(Maybe::<u8>::from(None), Maybe::Absent);
    assert_eq!(Option::<char>::from(Maybe::Present('a')), Some('a'));
    assert_eq!(Option::<char>::from(Maybe::Absent), None);
}

#[test]
fn test_truthiness() {
    assert!(bool::from(&Maybe::Present(())));
    assert!(!bool::from(&Maybe::<()>::Absent));
    assert_eq!(Maybe::<u8>::from(5u8), Maybe::Present(5));
}
