use nalgebra::Point3;
use serde::Serialize;

/// Represents one simulation particle read from a LAMMPS data file.
///
/// Atoms are identified by `atom_id`, which bonds use as their
/// cross-reference key. The chemical `label` is either taken verbatim from
/// the Masses section or derived from the numeric atom type via the
/// built-in element table.
#[derive(Debug, Clone, Serialize)]
pub struct Atom {
    /// Short chemical symbol (e.g. "O", "C"), derived from the atom type
    /// when the input does not name it explicitly.
    pub label: String,
    /// Positive identifier, unique within a topology.
    pub atom_id: usize,
    /// Identifier grouping atoms into the same molecule or chain.
    /// Carries no uniqueness constraint.
    pub molecule_id: isize,
    /// The numeric atom type as written in the Atoms section.
    pub type_id: u32,
    /// The partial atomic charge in elementary charge units. The loader
    /// leaves this at 0.0; see the format notes on
    /// [`LammpsDataFile`](crate::core::io::lammps::LammpsDataFile).
    pub charge: f64,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` with an unset charge.
    ///
    /// # Arguments
    ///
    /// * `label` - The chemical symbol for the atom.
    /// * `atom_id` - The identifier bonds reference.
    /// * `molecule_id` - The molecule this atom belongs to.
    /// * `type_id` - The numeric atom type.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(
        label: &str,
        atom_id: usize,
        molecule_id: isize,
        type_id: u32,
        position: Point3<f64>,
    ) -> Self {
        Self {
            label: label.to_string(),
            atom_id,
            molecule_id,
            type_id,
            charge: 0.0,
            position,
        }
    }
}

impl PartialEq for Atom {
    /// Structural equality over label, identifiers and coordinates.
    /// `charge` and `type_id` do not participate.
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.atom_id == other.atom_id
            && self.molecule_id == other.molecule_id
            && self.position == other.position
    }
}
