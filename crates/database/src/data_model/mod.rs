use std::fmt::Debug;

use model::WithId;
use serde::Serialize;
use utility::id::{HasId, Id};

pub mod image;
pub mod localized_info;
pub mod location;

/// A table row that converts into a domain model value plus its id.
pub trait DatabaseRow {
    type Model: HasId;

    fn get_id(&self) -> Id<Self::Model>;
    fn to_model(self) -> Self::Model;
}

pub fn with_ids<R: DatabaseRow>(rows: Vec<R>) -> Vec<WithId<R::Model>>
where
    <R::Model as HasId>::IdType: Debug + Clone + Serialize,
{
    rows.into_iter().map(|row| with_id(row)).collect::<Vec<_>>()
}

pub fn with_id<R: DatabaseRow>(row: R) -> WithId<R::Model>
where
    <R::Model as HasId>::IdType: Debug + Clone + Serialize,
{
    WithId::new(row.get_id(), row.to_model())
}
