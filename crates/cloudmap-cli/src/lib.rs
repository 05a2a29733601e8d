//! cloudmap command-line interface.
//!
pub mod inventory;
pub mod output;
pub mod pipeline;

use cloudmap_error::Result;
use cloudmap_render::ReportDepth;

pub use pipeline::discover_account;

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented text report (depth-controlled)
    #[default]
    Text,
    /// PlantUML diagram document
    PlantUml,
    /// JSON dump of the assembled account topology
    Json,
}

/// Options for running cloudmap.
pub struct CloudmapOptions {
    pub inventory: String,
    pub region: Option<String>,
    pub vpc_id: Option<String>,
    pub format: OutputFormat,
    pub report_depth: ReportDepth,
    pub keep_unplaced_nat_gateways: bool,
}

/// Main entry point
pub fn run_main(opts: &CloudmapOptions) -> Result<String> {
    let inventory = inventory::load_inventory(&opts.inventory)?;
    let region = inventory::resolve_region(opts, &inventory)?;
    pipeline::process_inventory(opts, &region, &inventory)
}
