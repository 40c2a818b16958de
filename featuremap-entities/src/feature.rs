use crate::{geo::MapPoint, id::Id};

/// A named and categorized point of interest.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: Id,
    pub name: String,
    pub pos: MapPoint,
    pub category: String,
}
