use serde::Serialize;

/// Represents an edge between exactly two atoms.
///
/// The endpoints are stored as atom identifiers, not indices; they are
/// resolved against a [`Topology`](super::topology::Topology) on demand.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Bond {
    /// Positive identifier of the bond record.
    pub bond_id: usize,
    /// The bond type this bond refers to.
    pub connection_type: u32,
    /// The identifiers of the two atoms this bond connects, as an
    /// unordered pair.
    pub ends: [usize; 2],
}

impl Bond {
    pub fn new(bond_id: usize, connection_type: u32, ends: [usize; 2]) -> Self {
        Self {
            bond_id,
            connection_type,
            ends,
        }
    }

    /// Returns `true` if `atom_id` is one of the two endpoints.
    pub fn contains(&self, atom_id: usize) -> bool {
        self.ends[0] == atom_id || self.ends[1] == atom_id
    }
}

impl PartialEq for Bond {
    /// Structural equality; `ends` compares as an unordered pair, so the
    /// bond {1,2} equals the bond {2,1}.
    fn eq(&self, other: &Self) -> bool {
        self.bond_id == other.bond_id
            && self.connection_type == other.connection_type
            && (self.ends == other.ends || self.ends == [other.ends[1], other.ends[0]])
    }
}

impl Eq for Bond {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_compare_as_an_unordered_pair() {
        let forward = Bond::new(1, 1, [1, 2]);
        let reversed = Bond::new(1, 1, [2, 1]);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn differing_fields_break_equality() {
        let bond = Bond::new(1, 1, [1, 2]);
        assert_ne!(bond, Bond::new(2, 1, [1, 2]));
        assert_ne!(bond, Bond::new(1, 2, [1, 2]));
        assert_ne!(bond, Bond::new(1, 1, [1, 3]));
    }

    #[test]
    fn contains_checks_both_endpoints() {
        let bond = Bond::new(7, 1, [3, 9]);
        assert!(bond.contains(3));
        assert!(bond.contains(9));
        assert!(!bond.contains(7));
    }
}
