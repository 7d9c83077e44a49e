//! Core data model and file I/O for LAMMPS molecular topologies.
//!
//! - **Molecular Representation** ([`models`]) - atoms, bonds and the
//!   `Topology` aggregate produced by a successful parse
//! - **File I/O** ([`io`]) - the format trait and the LAMMPS data-file
//!   reader/writer

pub mod io;
pub mod models;
