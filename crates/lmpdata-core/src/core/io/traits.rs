use crate::core::models::topology::Topology;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing molecular topology file
/// formats.
///
/// Implementors handle format-specific parsing and serialization; the
/// provided methods add string and file-path conveniences on top.
pub trait TopologyFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a topology from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter
    /// issues. Parsing is atomic; no partial topology is ever returned.
    fn read_from(reader: &mut impl BufRead) -> Result<Topology, Self::Error>;

    /// Writes a topology to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(topology: &Topology, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a topology from in-memory file content.
    fn read_str(content: &str) -> Result<Topology, Self::Error> {
        Self::read_from(&mut content.as_bytes())
    }

    /// Serializes a topology into an owned string.
    fn write_string(topology: &Topology) -> Result<String, Self::Error> {
        let mut buffer = Vec::new();
        Self::write_to(topology, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }

    /// Reads a topology from a file path, attaching the path as the
    /// topology's file name.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Topology, Self::Error> {
        let file = File::open(&path)?;
        let mut reader = BufReader::new(file);
        let mut topology = Self::read_from(&mut reader)?;
        topology.set_file_name(path.as_ref().display().to_string());
        Ok(topology)
    }

    /// Writes a topology to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(topology: &Topology, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(topology, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
