use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::num::ParseIntError;

/// Type-safe integer identifier. The phantom type parameter `T` prevents
/// mixing IDs from different entity types (e.g., member ID vs contract ID).
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    pub value: i64,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Parse from a decimal string, e.g. a URL path segment.
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        Ok(Self::new(s.trim().parse()?))
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Foo;

    #[test]
    fn ids_with_same_value_are_equal() {
        assert_eq!(Id::<Foo>::new(7), Id::<Foo>::new(7));
        assert_ne!(Id::<Foo>::new(7), Id::<Foo>::new(8));
    }

    #[test]
    fn parse_accepts_padded_digits() {
        assert_eq!(Id::<Foo>::parse(" 42 ").unwrap(), Id::new(42));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert!(Id::<Foo>::parse("abc").is_err());
        assert!(Id::<Foo>::parse("").is_err());
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&Id::<Foo>::new(5)).unwrap();
        assert_eq!(json, "5");
        let back: Id<Foo> = serde_json::from_str("5").unwrap();
        assert_eq!(back, Id::new(5));
    }
}
