//! Named entities and their projection into id/name pairs.
//!
//! Any type implementing [NamedEntity] can be projected, one element at a time through
//! [NamedEntity::to_id_name_pair] or a whole sequence at once through [ToIdNamePairs]:
//!
//! ```
//! use named_entities::{id_name_pairs, IdNamePair, NamedEntity, ToIdNamePairs};
//!
//! struct User {
//!     id: u64,
//!     name: String,
//!     email: String,
//! }
//!
//! impl NamedEntity for User {
//!     type Id = u64;
//!
//!     fn id(&self) -> &u64 {
//!         &self.id
//!     }
//!
//!     fn name(&self) -> &str {
//!         &self.name
//!     }
//! }
//!
//! let users = vec![
//!     User { id: 1, name: "Alice".into(), email: "alice@example.com".into() },
//!     User { id: 2, name: "Bob".into(), email: "bob@example.com".into() },
//! ];
//! let pairs = users.iter().to_id_name_pairs();
//! assert_eq!(pairs, vec![IdNamePair::new(1, "Alice"), IdNamePair::new(2, "Bob")]);
//!
//! let missing: Option<&Vec<User>> = None;
//! assert!(id_name_pairs(missing).is_empty());
//! ```

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

pub mod entity;
pub mod errors;
pub mod projector;

pub use entity::NamedEntity;
pub use errors::ProjectionError;
pub use id_name_pair::IdNamePair;
pub use projector::{id_name_pairs, try_id_name_pairs, ToIdNamePairs, TryToIdNamePairs};
