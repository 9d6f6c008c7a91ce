//! Projection of entity sequences into id/name pairs.
//!
//! Every sequence shape goes through the same single forward pass. The only thing that changes
//! between shapes is how much room the output gets up front: sequences that know their exact length
//! (arrays, slices, vectors, deques, any [ExactSizeIterator]) get exactly that, the rest start from
//! their lower bound and grow as they go.

use crate::{entity::NamedEntity, errors::ProjectionError};
use id_name_pair::IdNamePair;
use tracing::{debug, trace};

/// Projects a sequence of named entities into id/name pairs.
///
/// This is implemented for anything that can be iterated into named entities, so it works the same
/// on owned collections, borrowed collections and lazy iterators.
pub trait ToIdNamePairs {
    /// The identifier type of the projected entities.
    type Id;

    /// Build one pair per entity, in iteration order.
    fn to_id_name_pairs(self) -> Vec<IdNamePair<Self::Id>>;
}

impl<S> ToIdNamePairs for S
where
    S: IntoIterator,
    S::Item: NamedEntity,
{
    type Id = <S::Item as NamedEntity>::Id;

    fn to_id_name_pairs(self) -> Vec<IdNamePair<Self::Id>> {
        let entities = self.into_iter();
        let mut pairs = Vec::with_capacity(initial_capacity(&entities));
        for entity in entities {
            pairs.push(entity.to_id_name_pair());
        }
        pairs
    }
}

/// Projects a sequence of optional named entities into id/name pairs.
///
/// The first absent entity aborts the projection. Nothing past it is read and no partial output is
/// returned.
pub trait TryToIdNamePairs {
    /// The identifier type of the projected entities.
    type Id;

    /// Build one pair per entity, in iteration order, failing on the first absent entity.
    fn try_to_id_name_pairs(self) -> Result<Vec<IdNamePair<Self::Id>>, ProjectionError>;
}

impl<S, T> TryToIdNamePairs for S
where
    S: IntoIterator<Item = Option<T>>,
    T: NamedEntity,
{
    type Id = T::Id;

    fn try_to_id_name_pairs(self) -> Result<Vec<IdNamePair<Self::Id>>, ProjectionError> {
        let entities = self.into_iter();
        let mut pairs = Vec::with_capacity(initial_capacity(&entities));
        for (index, entity) in entities.enumerate() {
            let Some(entity) = entity else {
                debug!(index, "Entity sequence has a hole");
                return Err(ProjectionError::MissingEntity { index });
            };
            pairs.push(entity.to_id_name_pair());
        }
        Ok(pairs)
    }
}

/// Project a possibly absent sequence. An absent sequence projects to an empty list.
pub fn id_name_pairs<S: ToIdNamePairs>(source: Option<S>) -> Vec<IdNamePair<S::Id>> {
    match source {
        Some(source) => source.to_id_name_pairs(),
        None => Vec::new(),
    }
}

/// Project a possibly absent sequence of optional entities. An absent sequence projects to an empty
/// list.
pub fn try_id_name_pairs<S: TryToIdNamePairs>(source: Option<S>) -> Result<Vec<IdNamePair<S::Id>>, ProjectionError> {
    match source {
        Some(source) => source.try_to_id_name_pairs(),
        None => Ok(Vec::new()),
    }
}

fn initial_capacity<I: Iterator>(iter: &I) -> usize {
    let (lower, upper) = iter.size_hint();
    let exact = upper == Some(lower);
    trace!(capacity = lower, exact, "Projecting named entities");
    lower
}
