use super::atom::Atom;
use super::bond::Bond;
use super::types::{BondCoeff, BoxBounds, MassRecord};
use serde::Serialize;
use std::collections::HashMap;

/// The complete parsed representation of a molecular system.
///
/// A `Topology` is assembled once, atomically, by a
/// [`TopologyBuilder`](super::builder::TopologyBuilder) at the end of a
/// successful parse. It is immutable afterwards except for the file-name
/// provenance, which the surrounding application may attach.
///
/// Atom identifiers need not be dense or start at 1; lookups go through
/// an id-keyed index rather than treating ids as positions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Topology {
    file_name: Option<String>,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    atom_types: Vec<MassRecord>,
    bond_types: Vec<BondCoeff>,
    bounds: BoxBounds,
    #[serde(skip)]
    atom_index: HashMap<usize, usize>,
}

impl Topology {
    pub(crate) fn from_parts(
        atoms: Vec<Atom>,
        bonds: Vec<Bond>,
        atom_types: Vec<MassRecord>,
        bond_types: Vec<BondCoeff>,
        bounds: BoxBounds,
        atom_index: HashMap<usize, usize>,
    ) -> Self {
        Self {
            file_name: None,
            atoms,
            bonds,
            atom_types,
            bond_types,
            bounds,
            atom_index,
        }
    }

    /// The name of the file this topology was read from, when known.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Attaches the name of the file this topology originated from.
    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.file_name = Some(file_name.into());
    }

    /// The atoms in file order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// The bonds in file order.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// The Masses-section entries in file order.
    pub fn atom_types(&self) -> &[MassRecord] {
        &self.atom_types
    }

    /// The Bond Coeffs-section entries in file order.
    pub fn bond_types(&self) -> &[BondCoeff] {
        &self.bond_types
    }

    /// The simulation box bounds.
    pub fn bounds(&self) -> &BoxBounds {
        &self.bounds
    }

    /// Looks up an atom by its identifier.
    pub fn atom_by_id(&self, atom_id: usize) -> Option<&Atom> {
        self.atom_index.get(&atom_id).map(|&index| &self.atoms[index])
    }

    /// Resolves the two endpoints of a bond.
    ///
    /// Resolution is lenient: an endpoint id with no matching atom yields
    /// `None` in its slot rather than an error.
    pub fn bond_endpoints(&self, bond: &Bond) -> [Option<&Atom>; 2] {
        [self.atom_by_id(bond.ends[0]), self.atom_by_id(bond.ends[1])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::builder::TopologyBuilder;
    use nalgebra::Point3;

    fn two_atom_topology() -> Topology {
        let mut builder = TopologyBuilder::new();
        builder
            .add_atom(Atom::new("O", 1, 1, 1, Point3::new(0.0, 0.0, 0.0)))
            .add_atom(Atom::new("C", 5, 1, 3, Point3::new(1.0, 1.0, 1.0)))
            .add_bond(Bond::new(1, 1, [1, 5]))
            .add_bond(Bond::new(2, 1, [5, 42]));
        builder.build()
    }

    #[test]
    fn atom_by_id_tolerates_sparse_identifiers() {
        let topology = two_atom_topology();
        assert_eq!(topology.atom_by_id(1).unwrap().label, "O");
        assert_eq!(topology.atom_by_id(5).unwrap().label, "C");
        assert!(topology.atom_by_id(2).is_none());
    }

    #[test]
    fn bond_endpoints_resolve_leniently() {
        let topology = two_atom_topology();

        let [first, second] = topology.bond_endpoints(&topology.bonds()[0]);
        assert_eq!(first.unwrap().atom_id, 1);
        assert_eq!(second.unwrap().atom_id, 5);

        // Dangling endpoint id resolves to None, not an error.
        let [first, dangling] = topology.bond_endpoints(&topology.bonds()[1]);
        assert_eq!(first.unwrap().atom_id, 5);
        assert!(dangling.is_none());
    }

    #[test]
    fn file_name_can_be_attached_after_construction() {
        let mut topology = two_atom_topology();
        assert!(topology.file_name().is_none());
        topology.set_file_name("globule.data");
        assert_eq!(topology.file_name(), Some("globule.data"));
    }
}
