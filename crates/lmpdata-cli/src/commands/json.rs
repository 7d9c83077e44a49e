use crate::cli::ConvertArgs;
use crate::error::Result;
use lmpdata::core::io::lammps::LammpsDataFile;
use lmpdata::core::io::traits::TopologyFile;
use std::fs;
use tracing::info;

pub fn run(args: ConvertArgs) -> Result<()> {
    info!("Reading LAMMPS data file from {:?}", args.input);
    let topology = LammpsDataFile::read_from_path(&args.input)?;
    info!(
        "Parsed {} atoms and {} bonds",
        topology.atoms().len(),
        topology.bonds().len()
    );

    let encoded = serde_json::to_string_pretty(&topology)?;
    fs::write(&args.output, encoded)?;
    info!("Wrote JSON topology to {:?}", args.output);
    Ok(())
}
