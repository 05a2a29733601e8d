use std::time::Instant;

use clap::Parser;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use cloudmap::CloudmapOptions;
use cloudmap::OutputFormat;
use cloudmap::run_main;
use cloudmap_error::Result;
use cloudmap_render::ReportDepth;

#[derive(Parser, Debug)]
#[command(
    name = "cloudmap",
    about = "cloudmap: map a cloud account, render its network topology",
    version
)]
pub struct Cli {
    /// Resource inventory document (JSON) to map
    #[arg(short = 'i', long = "inventory", value_name = "FILE")]
    inventory: String,

    /// Region label override (defaults to the inventory's region field)
    #[arg(long, value_name = "REGION")]
    region: Option<String>,

    /// Map only this VPC (no match yields an empty topology)
    #[arg(long = "vpc", value_name = "VPC_ID")]
    vpc_id: Option<String>,

    /// Output format: 'text', 'plantuml' (or 'puml'), 'json'
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    format: String,

    /// Text report depth (0=account, 1=vpc, 2=subnet, 3=full)
    #[arg(long = "depth", default_value = "3")]
    report_depth: usize,

    /// Drop NAT gateways with no resolvable subnet instead of keeping them
    /// attached to their VPC
    #[arg(long = "drop-unplaced-nat", default_value_t = false)]
    drop_unplaced_nat: bool,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let format = match args.format.as_str() {
        "text" => OutputFormat::Text,
        "plantuml" | "puml" => OutputFormat::PlantUml,
        "json" => OutputFormat::Json,
        _ => {
            return Err(format!(
                "Unknown format: {}. Use 'text', 'plantuml', or 'json'",
                args.format
            )
            .into());
        }
    };

    let opts = CloudmapOptions {
        inventory: args.inventory,
        region: args.region,
        vpc_id: args.vpc_id,
        format,
        report_depth: ReportDepth::from_number(args.report_depth),
        keep_unplaced_nat_gateways: !args.drop_unplaced_nat,
    };

    match run_main(&opts) {
        Ok(output) => {
            if let Some(ref path) = args.output {
                std::fs::write(path, &output)?;
                tracing::info!(path, "output written");
            } else {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            std::process::exit(1);
        }
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
