//! Reader and writer for the LAMMPS `write_data` text format, restricted
//! to the sections describing a bonded topology: the header counts and
//! box bounds, `Masses`, `Bond Coeffs`, `Atoms` (full style) and `Bonds`.
//!
//! Format asymmetries to be aware of:
//!
//! - The loader never populates [`Atom::charge`](crate::core::models::atom::Atom);
//!   the writer emits the stored field, so a read/write round trip does
//!   not preserve the input's charge column.
//! - The writer's bond lines are comma separated (`1, 1, 1, 2`); the
//!   loader accepts both that variant and the plain space-separated form.

mod loader;
mod writer;

use crate::core::io::traits::TopologyFile;
use crate::core::models::topology::Topology;
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub(crate) const HEADER_COMMENT: &str =
    "LAMMPS data file via write_data, version 24 Dec 2020, timestep = 40000000";
pub(crate) const MASSES_HEADER: &str = "Masses";
pub(crate) const BOND_COEFFS_HEADER: &str = "Bond Coeffs # harmonic";
pub(crate) const ATOMS_HEADER: &str = "Atoms # full";
pub(crate) const BONDS_HEADER: &str = "Bonds";

#[derive(Debug, Error)]
pub enum LammpsDataError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("section '{0}' not found")]
    SectionNotFound(&'static str),
    #[error("could not find the {0} count in the header")]
    CountNotFound(&'static str),
    #[error("malformed line in the {section} section (line {position} in the section): {kind}")]
    MalformedLine {
        section: &'static str,
        position: usize,
        kind: LammpsParseErrorKind,
    },
}

#[derive(Debug, Error)]
pub enum LammpsParseErrorKind {
    #[error("expected {expected} fields, found {found}")]
    WrongFieldCount {
        expected: &'static str,
        found: usize,
    },
    #[error("invalid integer in the {field} field (value: '{value}')")]
    InvalidInt { field: String, value: String },
    #[error("invalid float in the {field} field (value: '{value}')")]
    InvalidFloat { field: String, value: String },
}

/// The LAMMPS data file format.
pub struct LammpsDataFile;

impl TopologyFile for LammpsDataFile {
    type Error = LammpsDataError;

    fn read_from(reader: &mut impl BufRead) -> Result<Topology, Self::Error> {
        loader::Loader::new(reader).load()
    }

    fn write_to(topology: &Topology, writer: &mut impl Write) -> Result<(), Self::Error> {
        writer::write_topology(topology, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::bond::Bond;
    use crate::core::models::builder::TopologyBuilder;
    use crate::core::models::types::{BondCoeff, BoxBounds, MassRecord};
    use nalgebra::Point3;

    fn small_topology() -> Topology {
        let mut builder = TopologyBuilder::new();
        builder
            .set_bounds(BoxBounds {
                x: [-2.0, 12.0],
                y: [-2.0, 12.0],
                z: [-2.0, 12.0],
            })
            .add_atom_type(MassRecord {
                type_key: "1".to_string(),
                mass: 15.999,
                label: "O".to_string(),
            })
            .add_bond_type(BondCoeff {
                type_key: "1".to_string(),
                stiffness: 30,
                length: 1.5,
            })
            .add_atom(Atom::new("C", 1, 1, 1, Point3::new(0.0, 0.0, 0.0)))
            .add_atom(Atom::new("C", 2, 1, 1, Point3::new(1.0, 1.0, 1.0)))
            .add_bond(Bond::new(1, 1, [1, 2]));
        builder.build()
    }

    #[test]
    fn write_then_read_round_trips_counts_and_coordinates() {
        let original = small_topology();
        let text = LammpsDataFile::write_string(&original).unwrap();
        let reloaded = LammpsDataFile::read_str(&text).unwrap();

        assert_eq!(reloaded.atoms().len(), original.atoms().len());
        assert_eq!(reloaded.bonds().len(), original.bonds().len());
        for (reread, written) in reloaded.atoms().iter().zip(original.atoms()) {
            assert_eq!(reread.atom_id, written.atom_id);
            assert_eq!(reread.molecule_id, written.molecule_id);
            assert_eq!(reread.position, written.position);
        }
        assert_eq!(reloaded.bonds()[0], original.bonds()[0]);
        assert_eq!(reloaded.bounds(), original.bounds());
    }

    #[test]
    fn path_round_trip_attaches_the_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("globule.data");

        let original = small_topology();
        LammpsDataFile::write_to_path(&original, &path).unwrap();
        let reloaded = LammpsDataFile::read_from_path(&path).unwrap();

        assert_eq!(reloaded.file_name(), Some(path.display().to_string().as_str()));
        assert_eq!(reloaded.atoms().len(), 2);
        assert_eq!(reloaded.bonds().len(), 1);
    }

    #[test]
    fn topology_serializes_to_json() {
        let topology = small_topology();
        let json = serde_json::to_value(&topology).unwrap();
        assert_eq!(json["atoms"].as_array().unwrap().len(), 2);
        assert_eq!(json["bonds"][0]["ends"], serde_json::json!([1, 2]));
        assert_eq!(json["atom_types"][0]["label"], "O");
    }
}
