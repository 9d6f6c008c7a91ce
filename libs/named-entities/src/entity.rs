//! The named entity capability.

use id_name_pair::IdNamePair;
use std::{rc::Rc, sync::Arc};

/// An entity that exposes an identifier and a display name.
///
/// Nothing else about the entity is ever read when projecting it.
pub trait NamedEntity {
    /// The identifier type.
    type Id: Clone;

    /// The identifier of this entity.
    fn id(&self) -> &Self::Id;

    /// The display name of this entity.
    fn name(&self) -> &str;

    /// Copy this entity's id and name into a new pair.
    fn to_id_name_pair(&self) -> IdNamePair<Self::Id> {
        IdNamePair { id: self.id().clone(), name: self.name().to_owned() }
    }
}

macro_rules! forward_named_entity {
    ($($wrapper:ty),*) => {
        $(
            impl<T: NamedEntity + ?Sized> NamedEntity for $wrapper {
                type Id = T::Id;

                fn id(&self) -> &Self::Id {
                    (**self).id()
                }

                fn name(&self) -> &str {
                    (**self).name()
                }
            }
        )*
    };
}

forward_named_entity!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<I: Clone> NamedEntity for IdNamePair<I> {
    type Id = I;

    fn id(&self) -> &I {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
