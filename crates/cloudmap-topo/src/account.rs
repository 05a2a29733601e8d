//! Account-level topology.

use serde::Serialize;

use cloudmap_model::{Ec2Instance, Subnet};

use crate::network::NetworkTopology;

/// A region plus its ordered networks.
///
/// Network order is VPC discovery order; it carries no priority. Like
/// [`NetworkTopology`], the value is read-only after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountTopology {
    pub region: String,
    pub networks: Vec<NetworkTopology>,
}

impl AccountTopology {
    /// Look up the network topology for a VPC id.
    pub fn network(&self, vpc_id: &str) -> Option<&NetworkTopology> {
        self.networks
            .iter()
            .find(|network| network.vpc.resource_id == vpc_id)
    }

    /// All instances across the account, flattening network order.
    pub fn all_instances(&self) -> Vec<&Ec2Instance> {
        self.networks
            .iter()
            .flat_map(|network| network.instances.iter())
            .collect()
    }

    /// All subnets across the account, flattening network order.
    pub fn all_subnets(&self) -> Vec<&Subnet> {
        self.networks
            .iter()
            .flat_map(|network| network.subnets.iter())
            .collect()
    }
}
