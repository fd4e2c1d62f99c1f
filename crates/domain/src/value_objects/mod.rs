//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod resolved_location;

pub use coordinate::Coordinate;
pub use resolved_location::ResolvedLocation;
