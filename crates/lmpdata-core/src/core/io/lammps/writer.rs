use super::{
    ATOMS_HEADER, BOND_COEFFS_HEADER, BONDS_HEADER, HEADER_COMMENT, LammpsDataError, MASSES_HEADER,
};
use crate::core::models::topology::Topology;
use std::io::Write;

/// Emits the five sections in fixed order, blank-line separated. Output
/// goes through sequential appends; there is no streaming mode.
pub(super) fn write_topology(
    topology: &Topology,
    writer: &mut impl Write,
) -> Result<(), LammpsDataError> {
    write_header(topology, writer)?;
    writeln!(writer)?;
    write_masses(topology, writer)?;
    writeln!(writer)?;
    write_bond_coeffs(topology, writer)?;
    writeln!(writer)?;
    write_atoms(topology, writer)?;
    writeln!(writer)?;
    write_bonds(topology, writer)?;
    Ok(())
}

fn write_header(topology: &Topology, writer: &mut impl Write) -> Result<(), LammpsDataError> {
    writeln!(writer, "{HEADER_COMMENT}")?;
    writeln!(writer, "{} atoms", topology.atoms().len())?;
    writeln!(writer, "{} atom types", topology.atom_types().len())?;
    writeln!(writer, "{} bonds", topology.bonds().len())?;
    writeln!(writer, "{} bond types", topology.bond_types().len())?;
    writeln!(writer)?;
    for (range, axis) in topology.bounds().axes() {
        writeln!(writer, "{:.6} {:.6} {axis}lo {axis}hi", range[0], range[1])?;
    }
    Ok(())
}

fn write_masses(topology: &Topology, writer: &mut impl Write) -> Result<(), LammpsDataError> {
    writeln!(writer, "{MASSES_HEADER}")?;
    writeln!(writer)?;
    for atom_type in topology.atom_types() {
        writeln!(writer, "{} {:.6}", atom_type.type_key, atom_type.mass)?;
    }
    Ok(())
}

fn write_bond_coeffs(topology: &Topology, writer: &mut impl Write) -> Result<(), LammpsDataError> {
    writeln!(writer, "{BOND_COEFFS_HEADER}")?;
    writeln!(writer)?;
    for bond_type in topology.bond_types() {
        writeln!(
            writer,
            "{} {} {:.6}",
            bond_type.type_key, bond_type.stiffness, bond_type.length
        )?;
    }
    Ok(())
}

fn write_atoms(topology: &Topology, writer: &mut impl Write) -> Result<(), LammpsDataError> {
    writeln!(writer, "{ATOMS_HEADER}")?;
    writeln!(writer)?;
    for atom in topology.atoms() {
        // The charge column reproduces the stored field, which the loader
        // leaves at zero.
        writeln!(
            writer,
            "{} {} {} {:.6} {:.6} {:.6} {:.6} 0 0 0",
            atom.atom_id,
            atom.molecule_id,
            atom.type_id,
            atom.charge,
            atom.position.x,
            atom.position.y,
            atom.position.z,
        )?;
    }
    Ok(())
}

fn write_bonds(topology: &Topology, writer: &mut impl Write) -> Result<(), LammpsDataError> {
    writeln!(writer, "{BONDS_HEADER}")?;
    writeln!(writer)?;
    for bond in topology.bonds() {
        writeln!(
            writer,
            "{}, {}, {}, {}",
            bond.bond_id, bond.connection_type, bond.ends[0], bond.ends[1]
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::core::io::lammps::LammpsDataFile;
    use crate::core::io::traits::TopologyFile;
    use crate::core::models::atom::Atom;
    use crate::core::models::bond::Bond;
    use crate::core::models::builder::TopologyBuilder;
    use crate::core::models::types::{BondCoeff, BoxBounds, MassRecord};
    use nalgebra::Point3;

    #[test]
    fn output_matches_the_fixed_section_layout() {
        let mut builder = TopologyBuilder::new();
        builder
            .set_bounds(BoxBounds {
                x: [0.0, 10.0],
                y: [0.0, 10.0],
                z: [0.0, 10.0],
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
            .add_atom(Atom::new("O", 1, 1, 1, Point3::new(0.0, 0.0, 0.0)))
            .add_atom(Atom::new("O", 2, 1, 1, Point3::new(1.0, 1.0, 1.0)))
            .add_bond(Bond::new(1, 1, [1, 2]));
        let topology = builder.build();

        let text = LammpsDataFile::write_string(&topology).unwrap();
        let expected = "\
LAMMPS data file via write_data, version 24 Dec 2020, timestep = 40000000
2 atoms
1 atom types
1 bonds
1 bond types

0.000000 10.000000 xlo xhi
0.000000 10.000000 ylo yhi
0.000000 10.000000 zlo zhi

Masses

1 15.999000

Bond Coeffs # harmonic

1 30 1.500000

Atoms # full

1 1 1 0.000000 0.000000 0.000000 0.000000 0 0 0
2 1 1 0.000000 1.000000 1.000000 1.000000 0 0 0

Bonds

1, 1, 1, 2
";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_topology_still_emits_every_section() {
        let topology = TopologyBuilder::new().build();
        let text = LammpsDataFile::write_string(&topology).unwrap();
        assert!(text.contains("0 atoms\n"));
        assert!(text.contains("0 bond types\n"));
        assert!(text.contains("\nMasses\n"));
        assert!(text.contains("\nBond Coeffs # harmonic\n"));
        assert!(text.contains("\nAtoms # full\n"));
        assert!(text.contains("\nBonds\n"));
    }

    #[test]
    fn stored_charge_is_emitted_verbatim() {
        let mut builder = TopologyBuilder::new();
        let mut atom = Atom::new("O", 1, 1, 1, Point3::origin());
        atom.charge = -0.5;
        builder.add_atom(atom);
        let text = LammpsDataFile::write_string(&builder.build()).unwrap();
        assert!(text.contains("1 1 1 -0.500000 0.000000 0.000000 0.000000 0 0 0"));
    }
}
