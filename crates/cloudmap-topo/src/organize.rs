//! The join pipeline: flat lists in, per-VPC topologies out.

use std::collections::HashSet;

use tracing::debug;

use cloudmap_model::{
    ApiGateway, Ec2Instance, HostedZone, InternetGateway, LambdaFunction, NatGateway, Resource,
    ResourceInventory, RouteTable, Subnet, Vpc,
};

use crate::account::AccountTopology;
use crate::network::NetworkTopology;

/// Options for topology assembly.
#[derive(Debug, Clone)]
pub struct OrganizeOptions {
    /// Keep NAT gateways whose subnet cannot be resolved, attaching them to
    /// their VPC by `vpc_id` (visible account-wide, excluded from per-subnet
    /// grouping). When false such gateways are dropped entirely.
    pub keep_unplaced_nat_gateways: bool,
}

impl Default for OrganizeOptions {
    fn default() -> Self {
        Self {
            keep_unplaced_nat_gateways: true,
        }
    }
}

/// Join flat resource lists into one [`NetworkTopology`] per VPC, in VPC
/// input order.
///
/// Joins preserve the relative order of each child list and deduplicate by
/// `resource_id`, keeping the first occurrence. Children referencing a VPC
/// absent from `vpcs` are dropped: discovery scoped to one VPC legitimately
/// produces such orphans. Hosted zones and API gateways join many-to-many
/// and may appear under several VPCs.
#[allow(clippy::too_many_arguments)]
pub fn organize(
    vpcs: &[Vpc],
    subnets: &[Subnet],
    route_tables: &[RouteTable],
    internet_gateways: &[InternetGateway],
    nat_gateways: &[NatGateway],
    instances: &[Ec2Instance],
    functions: &[LambdaFunction],
    hosted_zones: &[HostedZone],
    api_gateways: &[ApiGateway],
    options: &OrganizeOptions,
) -> Vec<NetworkTopology> {
    vpcs.iter()
        .map(|vpc| {
            let vpc_id = vpc.resource_id.as_str();

            let vpc_subnets = join_by_id(subnets, |s| s.vpc_id == vpc_id);
            let subnet_ids: HashSet<&str> = vpc_subnets
                .iter()
                .map(|s| s.resource_id.as_str())
                .collect();

            let vpc_route_tables = join_by_id(route_tables, |rt| rt.vpc_id == vpc_id);
            let vpc_gateways =
                join_by_id(internet_gateways, |igw| igw.vpc_id.as_deref() == Some(vpc_id));
            let vpc_instances = join_by_id(instances, |i| i.vpc_id == vpc_id);

            let vpc_nat_gateways = join_by_id(nat_gateways, |nat| {
                let placed = nat
                    .subnet_id
                    .as_deref()
                    .is_some_and(|id| subnet_ids.contains(id));
                placed || (options.keep_unplaced_nat_gateways && nat.vpc_id == vpc_id)
            });

            let vpc_functions = join_by_id(functions, |func| {
                func.subnet_ids.iter().any(|id| subnet_ids.contains(id.as_str()))
            });

            let vpc_zones = join_by_id(hosted_zones, |zone| {
                zone.vpc_associations.iter().any(|id| id == vpc_id)
            });
            let vpc_apis = join_by_id(api_gateways, |api| {
                api.vpc_links.iter().any(|id| id == vpc_id)
            });

            debug!(
                vpc_id,
                subnets = vpc_subnets.len(),
                route_tables = vpc_route_tables.len(),
                internet_gateways = vpc_gateways.len(),
                nat_gateways = vpc_nat_gateways.len(),
                instances = vpc_instances.len(),
                functions = vpc_functions.len(),
                "joined network topology"
            );

            NetworkTopology {
                vpc: vpc.clone(),
                subnets: vpc_subnets,
                route_tables: vpc_route_tables,
                internet_gateways: vpc_gateways,
                nat_gateways: vpc_nat_gateways,
                instances: vpc_instances,
                functions: vpc_functions,
                hosted_zones: vpc_zones,
                api_gateways: vpc_apis,
            }
        })
        .collect()
}

/// Convenience join over a whole inventory document.
pub fn organize_inventory(
    inventory: &ResourceInventory,
    options: &OrganizeOptions,
) -> Vec<NetworkTopology> {
    organize(
        &inventory.vpcs,
        &inventory.subnets,
        &inventory.route_tables,
        &inventory.internet_gateways,
        &inventory.nat_gateways,
        &inventory.instances,
        &inventory.functions,
        &inventory.hosted_zones,
        &inventory.api_gateways,
        options,
    )
}

/// Gather per-VPC networks into the account-level topology.
pub fn assemble_account(
    region: impl Into<String>,
    networks: Vec<NetworkTopology>,
) -> AccountTopology {
    AccountTopology {
        region: region.into(),
        networks,
    }
}

/// Order-preserving filter that deduplicates by `resource_id`, keeping the
/// first occurrence.
fn join_by_id<T: Clone + Resource>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut joined = Vec::new();
    for item in items {
        if predicate(item) && seen.insert(item.id()) {
            joined.push(item.clone());
        }
    }
    joined
}
