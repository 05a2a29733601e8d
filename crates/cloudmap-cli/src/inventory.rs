//! Inventory loading for cloudmap.

use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use tracing::info;

use cloudmap_error::{Error, ErrorKind, Result};
use cloudmap_model::ResourceInventory;

use crate::CloudmapOptions;

/// Load a resource inventory document from disk.
///
/// Display names are normalized by the deserializer; the returned value is
/// ready for the organizer.
pub fn load_inventory(path: &str) -> Result<ResourceInventory> {
    let load_start = Instant::now();

    let file = File::open(path).map_err(|e| Error::from(e).with_context("path", path))?;
    let inventory = ResourceInventory::from_reader(BufReader::new(file))
        .map_err(|e| e.with_operation("inventory::load").with_context("path", path))?;

    info!(
        "Inventory load: {:.2}s ({} VPCs, {} subnets, {} instances)",
        load_start.elapsed().as_secs_f64(),
        inventory.vpcs.len(),
        inventory.subnets.len(),
        inventory.instances.len()
    );

    Ok(inventory)
}

/// Pick the region label: explicit option first, inventory field second.
pub fn resolve_region(opts: &CloudmapOptions, inventory: &ResourceInventory) -> Result<String> {
    if let Some(region) = &opts.region {
        return Ok(region.clone());
    }
    if !inventory.region.is_empty() {
        return Ok(inventory.region.clone());
    }
    Err(Error::new(
        ErrorKind::ConfigInvalid,
        "no region: pass --region or set the region field in the inventory",
    )
    .with_operation("inventory::resolve_region"))
}
