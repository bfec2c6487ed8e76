//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod birthdate;
mod element;
mod fortune_tier;
mod gender;
mod relationship;
mod star_family;

pub use birthdate::{Birthdate, EARTHLY_BRANCHES};
pub use element::{Element, ElementRelation, Polarity};
pub use fortune_tier::FortuneTier;
pub use gender::Gender;
pub use relationship::RelationshipType;
pub use star_family::{StarFamily, StarPolarity};
