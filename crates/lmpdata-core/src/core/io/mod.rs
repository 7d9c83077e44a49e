//! Input/output for molecular topology file formats.
//!
//! The [`traits::TopologyFile`] trait is the seam between the data model
//! and concrete formats; [`lammps`] implements it for the LAMMPS data
//! file format.

pub mod lammps;
pub mod traits;
