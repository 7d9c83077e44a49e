use phf::{Map, phf_map};
use serde::Serialize;

/// Element symbols assumed for the small numeric atom types used by the
/// coarse-grained inputs this format targets.
static ELEMENT_LABELS: Map<u32, &'static str> = phf_map! {
    1u32 => "O",
    2u32 => "N",
    3u32 => "C",
    4u32 => "S",
};

const FALLBACK_LABEL: &str = "C";

/// Returns the built-in element label for an atom-type key as it appears
/// in the file. Unknown or non-numeric keys fall back to carbon.
pub fn element_label(type_key: &str) -> &'static str {
    type_key
        .parse::<u32>()
        .ok()
        .and_then(|n| ELEMENT_LABELS.get(&n).copied())
        .unwrap_or(FALLBACK_LABEL)
}

/// One entry of the Masses section: an atom type with its mass and the
/// label atoms of that type receive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MassRecord {
    /// The type number exactly as written in the file.
    pub type_key: String,
    /// The atomic mass in g/mol.
    pub mass: f64,
    /// Element symbol for atoms of this type.
    pub label: String,
}

/// One entry of the Bond Coeffs section: the two coefficients of a
/// harmonic bond type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondCoeff {
    /// The type number exactly as written in the file.
    pub type_key: String,
    /// The spring constant, kept integral as the format writes it.
    pub stiffness: i64,
    /// The equilibrium bond length.
    pub length: f64,
}

/// The axis-aligned simulation box: lo/hi ranges for x, y and z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoxBounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub z: [f64; 2],
}

impl BoxBounds {
    /// The three ranges paired with their axis names, in x, y, z order.
    pub fn axes(&self) -> [([f64; 2], char); 3] {
        [(self.x, 'x'), (self.y, 'y'), (self.z, 'z')]
    }

    pub(crate) fn axis_mut(&mut self, index: usize) -> &mut [f64; 2] {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => &mut self.z,
        }
    }
}
