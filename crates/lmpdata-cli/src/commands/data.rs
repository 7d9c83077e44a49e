use crate::cli::ConvertArgs;
use crate::error::Result;
use lmpdata::core::io::lammps::LammpsDataFile;
use lmpdata::core::io::traits::TopologyFile;
use tracing::info;

pub fn run(args: ConvertArgs) -> Result<()> {
    info!("Reading LAMMPS data file from {:?}", args.input);
    let topology = LammpsDataFile::read_from_path(&args.input)?;
    info!(
        "Parsed {} atoms and {} bonds",
        topology.atoms().len(),
        topology.bonds().len()
    );

    LammpsDataFile::write_to_path(&topology, &args.output)?;
    info!("Wrote normalized data file to {:?}", args.output);
    Ok(())
}
