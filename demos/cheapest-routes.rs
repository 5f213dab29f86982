// Usage: cargo run --example cheapest-routes -- [path_to_listing] [--hub <stop>]
//
// Set RUST_LOG=debug (or trace) to follow graph building and Kruskal's choices.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use humantime::format_duration;
use hubroute::{DEFAULT_HUB, FuelNetwork, input::read_network};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Route listing to read
    #[arg(default_value = "input.txt")]
    path: PathBuf,

    /// Stop that routes leave from and return to
    #[arg(long, default_value = DEFAULT_HUB)]
    hub: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let started = Instant::now();
    let graph = read_network(&args.path, &args.hub)
        .with_context(|| format!("reading {}", args.path.display()))?;

    let mst = graph.kruskal();
    let selection = graph.select_routes(&mst);
    info!(
        "{} of {} edges spanned in {}",
        mst.len(),
        graph.edge_count(),
        format_duration(started.elapsed())
    );

    println!("{selection}");

    Ok(())
}
