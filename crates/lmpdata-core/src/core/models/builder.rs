use super::atom::Atom;
use super::bond::Bond;
use super::topology::Topology;
use super::types::{BondCoeff, BoxBounds, MassRecord};
use std::collections::HashMap;

/// Accumulates the pieces of a [`Topology`] during parsing and assembles
/// the final value in one step.
pub struct TopologyBuilder {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    atom_types: Vec<MassRecord>,
    bond_types: Vec<BondCoeff>,
    bounds: BoxBounds,

    // Builder-specific state: atom id -> position in `atoms`.
    atom_index: HashMap<usize, usize>,
}

impl Default for TopologyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self {
            atoms: Vec::new(),
            bonds: Vec::new(),
            atom_types: Vec::new(),
            bond_types: Vec::new(),
            bounds: BoxBounds::default(),
            atom_index: HashMap::new(),
        }
    }

    /// Pre-allocates for the counts declared in a data-file header.
    pub fn with_capacity(atoms: usize, bonds: usize) -> Self {
        let mut builder = Self::new();
        builder.atoms.reserve(atoms);
        builder.atom_index.reserve(atoms);
        builder.bonds.reserve(bonds);
        builder
    }

    pub fn set_bounds(&mut self, bounds: BoxBounds) -> &mut Self {
        self.bounds = bounds;
        self
    }

    pub fn add_atom_type(&mut self, record: MassRecord) -> &mut Self {
        self.atom_types.push(record);
        self
    }

    pub fn add_bond_type(&mut self, coeff: BondCoeff) -> &mut Self {
        self.bond_types.push(coeff);
        self
    }

    /// Appends an atom and indexes it by id for later bond resolution.
    pub fn add_atom(&mut self, atom: Atom) -> &mut Self {
        self.atom_index.insert(atom.atom_id, self.atoms.len());
        self.atoms.push(atom);
        self
    }

    pub fn add_bond(&mut self, bond: Bond) -> &mut Self {
        self.bonds.push(bond);
        self
    }

    pub fn build(self) -> Topology {
        Topology::from_parts(
            self.atoms,
            self.bonds,
            self.atom_types,
            self.bond_types,
            self.bounds,
            self.atom_index,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn build_carries_every_section_over() {
        let mut builder = TopologyBuilder::with_capacity(1, 1);
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
            .add_atom(Atom::new("O", 1, 1, 1, Point3::origin()))
            .add_bond(Bond::new(1, 1, [1, 1]));

        let topology = builder.build();
        assert_eq!(topology.atoms().len(), 1);
        assert_eq!(topology.bonds().len(), 1);
        assert_eq!(topology.atom_types().len(), 1);
        assert_eq!(topology.bond_types().len(), 1);
        assert_eq!(topology.bounds().x, [0.0, 10.0]);
        assert!(topology.atom_by_id(1).is_some());
    }

    #[test]
    fn later_atom_with_same_id_wins_the_index() {
        let mut builder = TopologyBuilder::new();
        builder
            .add_atom(Atom::new("O", 1, 1, 1, Point3::origin()))
            .add_atom(Atom::new("N", 1, 2, 2, Point3::new(1.0, 0.0, 0.0)));

        let topology = builder.build();
        assert_eq!(topology.atoms().len(), 2);
        assert_eq!(topology.atom_by_id(1).unwrap().label, "N");
    }
}
