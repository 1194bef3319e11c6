//! Entity to model mappers
//!
//! `From<Model> for Entity` conversions turn database rows into the domain
//! objects defined in accounts-core.

mod token;
mod user;
