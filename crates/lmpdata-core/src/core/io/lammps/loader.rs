use super::{
    ATOMS_HEADER, BOND_COEFFS_HEADER, BONDS_HEADER, LammpsDataError, LammpsParseErrorKind,
    MASSES_HEADER,
};
use crate::core::models::atom::Atom;
use crate::core::models::bond::Bond;
use crate::core::models::builder::TopologyBuilder;
use crate::core::models::topology::Topology;
use crate::core::models::types::{BondCoeff, BoxBounds, MassRecord, element_label};
use nalgebra::Point3;
use std::collections::HashMap;
use std::io::{self, BufRead};
use std::str::FromStr;

/// Extracts the run of ASCII digits at the start of `s` as an integer.
///
/// Stops at the first non-digit character; fails when the line does not
/// begin with a digit.
pub(crate) fn leading_integer(s: &str) -> Option<usize> {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    s[..end].parse().ok()
}

fn starts_with_digit(line: &str) -> bool {
    line.as_bytes().first().is_some_and(|b| b.is_ascii_digit())
}

fn int_field<T: FromStr>(
    section: &'static str,
    position: usize,
    field: &str,
    token: &str,
) -> Result<T, LammpsDataError> {
    token.parse().map_err(|_| LammpsDataError::MalformedLine {
        section,
        position,
        kind: LammpsParseErrorKind::InvalidInt {
            field: field.into(),
            value: token.into(),
        },
    })
}

fn float_field(
    section: &'static str,
    position: usize,
    field: &str,
    token: &str,
) -> Result<f64, LammpsDataError> {
    token.parse().map_err(|_| LammpsDataError::MalformedLine {
        section,
        position,
        kind: LammpsParseErrorKind::InvalidFloat {
            field: field.into(),
            value: token.into(),
        },
    })
}

/// One-shot parser for a LAMMPS data file.
///
/// Holds a forward-only line cursor over the input and the accumulators
/// of each phase; every `load` call owns a fresh `Loader`, so concurrent
/// parses never share state. The phases run strictly in file order:
/// header counts, box bounds, Masses, Bond Coeffs, Atoms, Bonds.
pub(super) struct Loader<'a, R: BufRead> {
    lines: io::Lines<&'a mut R>,
    builder: TopologyBuilder,
    atoms_count: usize,
    atom_types_count: usize,
    bonds_count: usize,
    bond_types_count: usize,
    // Atom-type key -> label, resolved while reading the Atoms section
    // and discarded afterwards.
    type_labels: HashMap<String, String>,
}

impl<'a, R: BufRead> Loader<'a, R> {
    pub(super) fn new(reader: &'a mut R) -> Self {
        Self {
            lines: reader.lines(),
            builder: TopologyBuilder::new(),
            atoms_count: 0,
            atom_types_count: 0,
            bonds_count: 0,
            bond_types_count: 0,
            type_labels: HashMap::new(),
        }
    }

    pub(super) fn load(mut self) -> Result<Topology, LammpsDataError> {
        self.read_counts()?;
        self.read_bounds()?;
        self.read_masses()?;
        self.read_bond_coeffs()?;
        self.read_atoms()?;
        self.read_bonds()?;
        Ok(self.builder.build())
    }

    fn next_line(&mut self) -> Result<Option<String>, LammpsDataError> {
        match self.lines.next() {
            Some(line) => Ok(Some(line?)),
            None => Ok(None),
        }
    }

    /// Consumes lines until one equals `header`, then skips the blank
    /// separator line that follows it.
    fn skip_to_section(&mut self, header: &'static str) -> Result<(), LammpsDataError> {
        loop {
            match self.next_line()? {
                Some(line) if line == header => break,
                Some(_) => continue,
                None => return Err(LammpsDataError::SectionNotFound(header)),
            }
        }
        self.next_line()?;
        Ok(())
    }

    /// Reads the four declared counts from the header. The atoms count may
    /// be preceded by arbitrary comment or blank lines; the three counts
    /// after it must follow on consecutive lines.
    fn read_counts(&mut self) -> Result<(), LammpsDataError> {
        loop {
            let Some(line) = self.next_line()? else {
                return Err(LammpsDataError::CountNotFound("atoms"));
            };
            if !starts_with_digit(&line) {
                continue;
            }
            if let Some(count) = leading_integer(&line) {
                self.atoms_count = count;
                break;
            }
        }
        self.atom_types_count = self.read_count("atom types")?;
        self.bonds_count = self.read_count("bonds")?;
        self.bond_types_count = self.read_count("bond types")?;

        self.builder = TopologyBuilder::with_capacity(self.atoms_count, self.bonds_count);
        Ok(())
    }

    fn read_count(&mut self, what: &'static str) -> Result<usize, LammpsDataError> {
        let line = self
            .next_line()?
            .ok_or(LammpsDataError::CountNotFound(what))?;
        if !starts_with_digit(&line) {
            return Err(LammpsDataError::CountNotFound(what));
        }
        leading_integer(&line).ok_or(LammpsDataError::CountNotFound(what))
    }

    /// Reads the three axis-range lines (x, y, z). Blank lines before each
    /// range are skipped; running out of input leaves the remaining axes
    /// at their default.
    fn read_bounds(&mut self) -> Result<(), LammpsDataError> {
        let mut bounds = BoxBounds::default();
        for (index, axis) in ['x', 'y', 'z'].into_iter().enumerate() {
            let line = loop {
                match self.next_line()? {
                    Some(line) if line.trim().is_empty() => continue,
                    Some(line) => break line,
                    None => {
                        self.builder.set_bounds(bounds);
                        return Ok(());
                    }
                }
            };
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 2 {
                return Err(LammpsDataError::MalformedLine {
                    section: "box bounds",
                    position: index + 1,
                    kind: LammpsParseErrorKind::WrongFieldCount {
                        expected: "at least 2",
                        found: fields.len(),
                    },
                });
            }
            let lo = float_field("box bounds", index + 1, &format!("{axis}lo"), fields[0])?;
            let hi = float_field("box bounds", index + 1, &format!("{axis}hi"), fields[1])?;
            *bounds.axis_mut(index) = [lo, hi];
        }
        self.builder.set_bounds(bounds);
        Ok(())
    }

    /// Reads up to the declared number of Masses lines. A blank line ends
    /// the section early; that is tolerated, not an error.
    fn read_masses(&mut self) -> Result<(), LammpsDataError> {
        self.skip_to_section(MASSES_HEADER)?;
        for position in 1..=self.atom_types_count {
            let Some(line) = self.next_line()? else {
                break;
            };
            if line.trim().is_empty() {
                break;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 2 || fields.len() > 4 {
                return Err(LammpsDataError::MalformedLine {
                    section: "Masses",
                    position,
                    kind: LammpsParseErrorKind::WrongFieldCount {
                        expected: "between 2 and 4",
                        found: fields.len(),
                    },
                });
            }
            let type_key = fields[0].to_string();
            let mass = float_field("Masses", position, "mass", fields[1])?;
            let label = if fields.len() == 4 {
                fields[3].to_string()
            } else {
                element_label(&type_key).to_string()
            };
            self.type_labels.insert(type_key.clone(), label.clone());
            self.builder.add_atom_type(MassRecord {
                type_key,
                mass,
                label,
            });
        }
        Ok(())
    }

    fn read_bond_coeffs(&mut self) -> Result<(), LammpsDataError> {
        self.skip_to_section(BOND_COEFFS_HEADER)?;
        for position in 1..=self.bond_types_count {
            let Some(line) = self.next_line()? else {
                break;
            };
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 3 {
                return Err(LammpsDataError::MalformedLine {
                    section: "Bond Coeffs",
                    position,
                    kind: LammpsParseErrorKind::WrongFieldCount {
                        expected: "exactly 3",
                        found: fields.len(),
                    },
                });
            }
            let stiffness = int_field("Bond Coeffs", position, "stiffness", fields[1])?;
            let length = float_field("Bond Coeffs", position, "length", fields[2])?;
            self.builder.add_bond_type(BondCoeff {
                type_key: fields[0].to_string(),
                stiffness,
                length,
            });
        }
        Ok(())
    }

    fn read_atoms(&mut self) -> Result<(), LammpsDataError> {
        self.skip_to_section(ATOMS_HEADER)?;
        for position in 1..=self.atoms_count {
            let Some(line) = self.next_line()? else {
                break;
            };
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 10 {
                return Err(LammpsDataError::MalformedLine {
                    section: "Atoms",
                    position,
                    kind: LammpsParseErrorKind::WrongFieldCount {
                        expected: "exactly 10",
                        found: fields.len(),
                    },
                });
            }
            let atom_id: usize = int_field("Atoms", position, "atom id", fields[0])?;
            let molecule_id: isize = int_field("Atoms", position, "molecule id", fields[1])?;
            let type_key = fields[2];
            let type_id: u32 = type_key.parse().unwrap_or(0);
            // fields[3] is the charge column; the loader does not carry
            // it over (see the module docs).
            let x = float_field("Atoms", position, "x", fields[4])?;
            let y = float_field("Atoms", position, "y", fields[5])?;
            let z = float_field("Atoms", position, "z", fields[6])?;
            // fields[7..10] are image flags, not interpreted.

            // Lenient lookup: an unknown type key yields an empty label.
            let label = self.type_labels.get(type_key).cloned().unwrap_or_default();
            self.builder.add_atom(Atom::new(
                &label,
                atom_id,
                molecule_id,
                type_id,
                Point3::new(x, y, z),
            ));
        }
        Ok(())
    }

    fn read_bonds(&mut self) -> Result<(), LammpsDataError> {
        self.skip_to_section(BONDS_HEADER)?;
        for position in 1..=self.bonds_count {
            let Some(line) = self.next_line()? else {
                break;
            };
            // The writer's bond lines carry a trailing comma per field.
            let fields: Vec<&str> = line
                .split_whitespace()
                .map(|field| field.trim_end_matches(','))
                .collect();
            if fields.len() != 4 {
                return Err(LammpsDataError::MalformedLine {
                    section: "Bonds",
                    position,
                    kind: LammpsParseErrorKind::WrongFieldCount {
                        expected: "exactly 4",
                        found: fields.len(),
                    },
                });
            }
            let bond_id: usize = int_field("Bonds", position, "bond id", fields[0])?;
            let connection_type: u32 =
                int_field("Bonds", position, "connection type", fields[1])?;
            let first: usize = int_field("Bonds", position, "first atom id", fields[2])?;
            let second: usize = int_field("Bonds", position, "second atom id", fields[3])?;
            self.builder
                .add_bond(Bond::new(bond_id, connection_type, [first, second]));
        }
        Ok(())
    }
}
