//! # lmpdata
//!
//! A library for reading and writing the LAMMPS "data file" text format,
//! restricted to the sections that describe a bonded molecular topology:
//! the header counts and box bounds, `Masses`, `Bond Coeffs`, `Atoms` and
//! `Bonds`.
//!
//! The library is split into two layers:
//!
//! - **[`core::models`]** - the parsed representation: [`Atom`](core::models::atom::Atom),
//!   [`Bond`](core::models::bond::Bond) and the [`Topology`](core::models::topology::Topology)
//!   aggregate they live in.
//! - **[`core::io`]** - the format layer: the [`TopologyFile`](core::io::traits::TopologyFile)
//!   trait and its LAMMPS data-file implementation,
//!   [`LammpsDataFile`](core::io::lammps::LammpsDataFile).
//!
//! Parsing is atomic: a call to `read_from` either yields a complete
//! `Topology` or a descriptive error, never a partial result.

pub mod core;
