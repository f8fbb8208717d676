use clap::Parser;
use std::sync::mpsc;

use graphview_core::{NavigationEvent, RenderEndpoint};
use graphview_gui::{run_viewer, ViewerConfig};

#[derive(Parser)]
#[command(name = "graphview", version, about = "Graph artifact viewer panel")]
struct Cli {
    /// Base URL of the rendering service's data endpoint,
    /// e.g. http://localhost:6006/data/plugin/graph_viewer/data
    #[arg(long)]
    endpoint: String,
    /// Profiling run to query
    #[arg(long)]
    run: Option<String>,
    /// Tool tag; defaults to graph_viewer
    #[arg(long)]
    tag: Option<String>,
    /// Host, interpreted as the module identifier
    #[arg(long)]
    host: Option<String>,
    /// Operation name to select initially
    #[arg(long)]
    op: Option<String>,
    /// Window title
    #[arg(long, default_value = "Graph Viewer")]
    title: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let endpoint = RenderEndpoint::parse(&cli.endpoint)?;

    let (navigation_tx, navigation_rx) = mpsc::channel();
    let _ = navigation_tx.send(NavigationEvent {
        run: cli.run,
        tag: cli.tag,
        host: cli.host,
        params_op_name: cli.op,
    });
    log::debug!("seeded initial navigation event");

    let config = ViewerConfig {
        title: cli.title,
        ..Default::default()
    };
    run_viewer(config, endpoint, navigation_rx)?;
    Ok(())
}
