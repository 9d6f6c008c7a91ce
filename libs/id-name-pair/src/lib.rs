//! An id/name pair.
//!
//! This is the minimal shape downstream consumers (selection lists, API responses) need out of any
//! entity that has an identifier and a display name.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]

use std::fmt::{self, Display, Formatter};

/// An identifier and a display name.
///
/// The identifier type is opaque to this crate, it defaults to `String`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdNamePair<I = String> {
    /// The identifier.
    pub id: I,

    /// The display name.
    pub name: String,
}

impl<I> IdNamePair<I> {
    /// Construct a new pair.
    pub fn new(id: I, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }

    /// Decompose this pair into its id and name.
    pub fn into_parts(self) -> (I, String) {
        (self.id, self.name)
    }
}

impl<I: Display> Display for IdNamePair<I> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

impl<I> From<(I, String)> for IdNamePair<I> {
    fn from((id, name): (I, String)) -> Self {
        Self { id, name }
    }
}

impl<I> From<(I, &str)> for IdNamePair<I> {
    fn from((id, name): (I, &str)) -> Self {
        Self::new(id, name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn construction() {
        let pair = IdNamePair::new(1, "Alice");
        assert_eq!(pair.id, 1);
        assert_eq!(pair.name, "Alice");
        assert_eq!(pair, IdNamePair::from((1, "Alice")));
        assert_eq!(pair, IdNamePair::from((1, "Alice".to_string())));
    }

    #[test]
    fn default_id_is_string() {
        let pair: IdNamePair = IdNamePair::new("a1".to_string(), "Alice");
        assert_eq!(pair.into_parts(), ("a1".to_string(), "Alice".to_string()));
    }

    #[test]
    fn display() {
        assert_eq!(IdNamePair::new(42, "Bob").to_string(), "Bob (42)");
    }

    #[test]
    fn ordering_is_by_id_first() {
        let mut pairs = vec![IdNamePair::new(2, "A"), IdNamePair::new(1, "B"), IdNamePair::new(1, "A")];
        pairs.sort();
        assert_eq!(pairs, vec![IdNamePair::new(1, "A"), IdNamePair::new(1, "B"), IdNamePair::new(2, "A")]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_shape() {
        let pair = IdNamePair::new(7, "Carol");
        let json = serde_json::to_value(&pair).expect("serialization failed");
        assert_eq!(json, serde_json::json!({ "id": 7, "name": "Carol" }));

        let decoded: IdNamePair<u32> = serde_json::from_value(json).expect("deserialization failed");
        assert_eq!(decoded, pair);
    }
}
