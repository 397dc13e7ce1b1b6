//! Domain modules (vertical slices): types, wire types, conversions, state.

pub mod curve;
pub mod order;
