//! Core processing pipeline: discover → organize → render.

use std::time::Instant;

use tracing::info;

use cloudmap_error::Result;
use cloudmap_model::{
    ComputeDiscoverer, InventorySource, NetworkDiscoverer, NetworkUtilitiesDiscoverer,
    ResourceInventory, ServerlessDiscoverer,
};
use cloudmap_topo::{AccountTopology, OrganizeOptions, assemble_account, organize};

use crate::CloudmapOptions;
use crate::output::generate_output;

/// Process a loaded inventory into rendered output.
///
/// This is the core pipeline:
/// 1. Gather resource lists through the discovery boundary
/// 2. Organize them into per-VPC network topologies
/// 3. Assemble the account topology
/// 4. Render the requested format
pub fn process_inventory(
    opts: &CloudmapOptions,
    region: &str,
    inventory: &ResourceInventory,
) -> Result<String> {
    let organize_options = OrganizeOptions {
        keep_unplaced_nat_gateways: opts.keep_unplaced_nat_gateways,
    };

    let organize_start = Instant::now();
    let source = InventorySource::new(inventory);
    let account = discover_account(
        &source,
        region,
        opts.vpc_id.as_deref(),
        &organize_options,
    )?;
    info!(
        "Discovery & organize: {:.2}s ({} networks)",
        organize_start.elapsed().as_secs_f64(),
        account.networks.len()
    );

    let render_start = Instant::now();
    let output = generate_output(opts, &account)?;
    info!("Rendering: {:.2}s", render_start.elapsed().as_secs_f64());

    Ok(output)
}

/// Orchestrate one account discovery through the trait boundary and join the
/// results.
///
/// A VPC filter that matches nothing yields an empty account topology, not
/// an error. Discovery failures from any collaborator propagate unchanged.
pub fn discover_account<D>(
    source: &D,
    region: &str,
    vpc_filter: Option<&str>,
    organize_options: &OrganizeOptions,
) -> Result<AccountTopology>
where
    D: NetworkDiscoverer + ComputeDiscoverer + ServerlessDiscoverer + NetworkUtilitiesDiscoverer,
{
    let mut vpcs = source.discover_vpcs()?;
    if let Some(vpc_id) = vpc_filter {
        vpcs.retain(|vpc| vpc.resource_id == vpc_id);
    }

    let mut subnets = Vec::new();
    let mut route_tables = Vec::new();
    let mut internet_gateways = Vec::new();
    for vpc in &vpcs {
        subnets.extend(source.discover_subnets(&vpc.resource_id)?);
        route_tables.extend(source.discover_route_tables(&vpc.resource_id)?);
        internet_gateways.extend(source.discover_internet_gateways(&vpc.resource_id)?);
    }

    let mut instances = source.discover_instances(None)?;
    if let Some(vpc_id) = vpc_filter {
        instances.retain(|instance| instance.vpc_id == vpc_id);
    }

    let functions = source.discover_functions(vpc_filter)?;
    let hosted_zones = source.discover_hosted_zones(vpc_filter)?;
    let api_gateways = source.discover_api_gateways(vpc_filter)?;
    let nat_gateways = source.discover_nat_gateways(vpc_filter)?;

    let networks = organize(
        &vpcs,
        &subnets,
        &route_tables,
        &internet_gateways,
        &nat_gateways,
        &instances,
        &functions,
        &hosted_zones,
        &api_gateways,
        organize_options,
    );

    Ok(assemble_account(region, networks))
}
