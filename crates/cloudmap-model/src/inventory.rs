//! The resource inventory document.
//!
//! An inventory is the flat, per-kind set of resource lists handed to the
//! organizer: one JSON document per region, produced by whatever ran the
//! discovery. [`InventorySource`] re-exposes a loaded inventory through the
//! discovery traits so orchestration code is independent of where the
//! records came from.

use std::io::Read;

use serde::{Deserialize, Serialize};

use cloudmap_error::{Error, ErrorKind, Result};

use crate::discover::{
    ComputeDiscoverer, NetworkDiscoverer, NetworkUtilitiesDiscoverer, ServerlessDiscoverer,
};
use crate::resource::{
    ApiGateway, Ec2Instance, HostedZone, InternetGateway, LambdaFunction, NatGateway, RouteTable,
    Subnet, Vpc,
};

/// Flat resource lists for one region.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceInventory {
    pub region: String,
    pub vpcs: Vec<Vpc>,
    pub subnets: Vec<Subnet>,
    pub route_tables: Vec<RouteTable>,
    pub internet_gateways: Vec<InternetGateway>,
    pub nat_gateways: Vec<NatGateway>,
    pub instances: Vec<Ec2Instance>,
    pub functions: Vec<LambdaFunction>,
    pub hosted_zones: Vec<HostedZone>,
    pub api_gateways: Vec<ApiGateway>,
}

impl ResourceInventory {
    /// Parse an inventory from JSON text and normalize display names.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut inventory: Self = serde_json::from_str(json).map_err(|e| {
            Error::new(ErrorKind::DeserializeFailed, "invalid inventory document")
                .with_operation("inventory::from_json")
                .set_source(e)
        })?;
        inventory.resolve_names();
        Ok(inventory)
    }

    /// Parse an inventory from a reader and normalize display names.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut inventory: Self = serde_json::from_reader(reader).map_err(|e| {
            Error::new(ErrorKind::DeserializeFailed, "invalid inventory document")
                .with_operation("inventory::from_reader")
                .set_source(e)
        })?;
        inventory.resolve_names();
        Ok(inventory)
    }

    /// One-time name normalization for deserialized records.
    ///
    /// Constructors derive a display name from the `Name` tag; records that
    /// arrived through serde get the same treatment here, exactly once.
    pub fn resolve_names(&mut self) {
        self.vpcs.iter_mut().for_each(Vpc::resolve_name);
        self.subnets.iter_mut().for_each(Subnet::resolve_name);
        self.route_tables.iter_mut().for_each(RouteTable::resolve_name);
        self.internet_gateways
            .iter_mut()
            .for_each(InternetGateway::resolve_name);
        self.nat_gateways.iter_mut().for_each(NatGateway::resolve_name);
        self.instances.iter_mut().for_each(Ec2Instance::resolve_name);
        self.functions.iter_mut().for_each(LambdaFunction::resolve_name);
        self.hosted_zones.iter_mut().for_each(HostedZone::resolve_name);
        self.api_gateways.iter_mut().for_each(ApiGateway::resolve_name);
    }

    /// Narrow the inventory to a single VPC.
    ///
    /// Keeps only the matching VPC and the instances inside it. Remaining
    /// children of other VPCs become orphans and are dropped by the
    /// organizer's joins. A filter that matches nothing leaves empty lists,
    /// which assemble into an empty account topology rather than an error.
    pub fn retain_vpc(&mut self, vpc_id: &str) {
        self.vpcs.retain(|vpc| vpc.resource_id == vpc_id);
        self.instances.retain(|instance| instance.vpc_id == vpc_id);
    }

    /// True when no VPC survived discovery or filtering.
    pub fn is_empty(&self) -> bool {
        self.vpcs.is_empty()
    }
}

/// Discovery-trait view over an already-loaded inventory.
pub struct InventorySource<'a> {
    inventory: &'a ResourceInventory,
}

impl<'a> InventorySource<'a> {
    pub fn new(inventory: &'a ResourceInventory) -> Self {
        Self { inventory }
    }

    fn vpc_subnet_ids(&self, vpc_id: &str) -> Vec<&str> {
        self.inventory
            .subnets
            .iter()
            .filter(|subnet| subnet.vpc_id == vpc_id)
            .map(|subnet| subnet.resource_id.as_str())
            .collect()
    }
}

impl NetworkDiscoverer for InventorySource<'_> {
    fn discover_vpcs(&self) -> Result<Vec<Vpc>> {
        Ok(self.inventory.vpcs.clone())
    }

    fn discover_subnets(&self, vpc_id: &str) -> Result<Vec<Subnet>> {
        Ok(self
            .inventory
            .subnets
            .iter()
            .filter(|subnet| subnet.vpc_id == vpc_id)
            .cloned()
            .collect())
    }

    fn discover_route_tables(&self, vpc_id: &str) -> Result<Vec<RouteTable>> {
        Ok(self
            .inventory
            .route_tables
            .iter()
            .filter(|rt| rt.vpc_id == vpc_id)
            .cloned()
            .collect())
    }

    fn discover_internet_gateways(&self, vpc_id: &str) -> Result<Vec<InternetGateway>> {
        Ok(self
            .inventory
            .internet_gateways
            .iter()
            .filter(|igw| igw.vpc_id.as_deref() == Some(vpc_id))
            .cloned()
            .collect())
    }
}

impl ComputeDiscoverer for InventorySource<'_> {
    fn discover_instances(&self, subnet_id: Option<&str>) -> Result<Vec<Ec2Instance>> {
        Ok(self
            .inventory
            .instances
            .iter()
            .filter(|instance| subnet_id.is_none_or(|id| instance.subnet_id == id))
            .cloned()
            .collect())
    }
}

impl ServerlessDiscoverer for InventorySource<'_> {
    fn discover_functions(&self, vpc_id: Option<&str>) -> Result<Vec<LambdaFunction>> {
        let Some(vpc_id) = vpc_id else {
            return Ok(self.inventory.functions.clone());
        };
        let subnet_ids = self.vpc_subnet_ids(vpc_id);
        Ok(self
            .inventory
            .functions
            .iter()
            .filter(|func| {
                func.subnet_ids
                    .iter()
                    .any(|id| subnet_ids.contains(&id.as_str()))
            })
            .cloned()
            .collect())
    }
}

impl NetworkUtilitiesDiscoverer for InventorySource<'_> {
    fn discover_hosted_zones(&self, vpc_id: Option<&str>) -> Result<Vec<HostedZone>> {
        Ok(self
            .inventory
            .hosted_zones
            .iter()
            .filter(|zone| {
                vpc_id.is_none_or(|id| zone.vpc_associations.iter().any(|vpc| vpc == id))
            })
            .cloned()
            .collect())
    }

    fn discover_api_gateways(&self, vpc_id: Option<&str>) -> Result<Vec<ApiGateway>> {
        Ok(self
            .inventory
            .api_gateways
            .iter()
            .filter(|api| vpc_id.is_none_or(|id| api.vpc_links.iter().any(|vpc| vpc == id)))
            .cloned()
            .collect())
    }

    fn discover_nat_gateways(&self, vpc_id: Option<&str>) -> Result<Vec<NatGateway>> {
        Ok(self
            .inventory
            .nat_gateways
            .iter()
            .filter(|nat| vpc_id.is_none_or(|id| nat.vpc_id == id))
            .cloned()
            .collect())
    }
}
