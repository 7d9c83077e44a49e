//! Data structures representing a parsed molecular topology.
//!
//! - [`atom`] - individual particle records with coordinates and labels
//! - [`bond`] - edges between two atoms, identified by atom id
//! - [`types`] - per-type entries (masses, bond coefficients) and the
//!   simulation box bounds
//! - [`topology`] - the complete aggregate returned by the loader
//! - [`builder`] - incremental construction of a `Topology` during parsing

pub mod atom;
pub mod bond;
pub mod builder;
pub mod topology;
pub mod types;
