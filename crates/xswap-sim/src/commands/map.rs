use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::info;
use xswap_formats::{load_str_edges, map_str_edges, write_edges, write_mapping};

#[derive(Args, Debug)]
pub struct MapArgs {
    /// Delimited file of `source,target` labels.
    #[arg(long)]
    pub edges: PathBuf,
    /// Field delimiter of the input file.
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
    /// Map sources and targets independently.
    #[arg(long)]
    pub bipartite: bool,
    /// Directory receiving `edges.csv` and the mapping files.
    #[arg(long)]
    pub out_dir: PathBuf,
}

pub fn run(args: &MapArgs) -> Result<(), Box<dyn Error>> {
    let delimiter = u8::try_from(args.delimiter)
        .map_err(|_| format!("delimiter `{}` is not a single byte", args.delimiter))?;
    let labelled = load_str_edges(&args.edges, delimiter)?;
    let mapped = map_str_edges(&labelled, args.bipartite)?;

    fs::create_dir_all(&args.out_dir)?;
    write_edges(&args.out_dir.join("edges.csv"), &mapped.edges, b',')?;
    if args.bipartite {
        write_mapping(&args.out_dir.join("source_mapping.csv"), &mapped.source_map)?;
        write_mapping(&args.out_dir.join("target_mapping.csv"), &mapped.target_map)?;
    } else {
        write_mapping(&args.out_dir.join("mapping.csv"), &mapped.source_map)?;
    }
    info!(
        edges = mapped.edges.len(),
        sources = mapped.source_map.len(),
        targets = mapped.target_map.len(),
        "mapped string edges"
    );
    Ok(())
}
