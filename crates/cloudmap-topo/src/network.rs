//! Per-VPC network topology.

use serde::Serialize;

use cloudmap_model::{
    ApiGateway, Ec2Instance, HostedZone, InternetGateway, LambdaFunction, NatGateway, RouteTable,
    Subnet, Vpc,
};

/// One VPC and every resource joined under it.
///
/// A read-only view constructed once per discovery run by
/// [`organize`](crate::organize()); never mutated afterwards. Child lists
/// preserve the relative order of the input lists they were joined from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkTopology {
    pub vpc: Vpc,
    pub subnets: Vec<Subnet>,
    pub route_tables: Vec<RouteTable>,
    pub internet_gateways: Vec<InternetGateway>,
    pub nat_gateways: Vec<NatGateway>,
    pub instances: Vec<Ec2Instance>,
    pub functions: Vec<LambdaFunction>,
    pub hosted_zones: Vec<HostedZone>,
    pub api_gateways: Vec<ApiGateway>,
}

impl NetworkTopology {
    /// A topology holding only the VPC itself, children empty.
    pub fn new(vpc: Vpc) -> Self {
        Self {
            vpc,
            subnets: Vec::new(),
            route_tables: Vec::new(),
            internet_gateways: Vec::new(),
            nat_gateways: Vec::new(),
            instances: Vec::new(),
            functions: Vec::new(),
            hosted_zones: Vec::new(),
            api_gateways: Vec::new(),
        }
    }

    /// Look up a subnet by id.
    pub fn subnet(&self, subnet_id: &str) -> Option<&Subnet> {
        self.subnets
            .iter()
            .find(|subnet| subnet.resource_id == subnet_id)
    }

    /// Instances placed in a specific subnet, in join order.
    pub fn instances_in_subnet(&self, subnet_id: &str) -> Vec<&Ec2Instance> {
        self.instances
            .iter()
            .filter(|instance| instance.subnet_id == subnet_id)
            .collect()
    }

    /// Functions attached to a specific subnet, in join order.
    pub fn functions_in_subnet(&self, subnet_id: &str) -> Vec<&LambdaFunction> {
        self.functions
            .iter()
            .filter(|func| func.subnet_ids.iter().any(|id| id == subnet_id))
            .collect()
    }

    /// NAT gateways placed in a specific subnet.
    ///
    /// Gateways kept account-wide without a resolvable subnet never appear
    /// here.
    pub fn nat_gateways_in_subnet(&self, subnet_id: &str) -> Vec<&NatGateway> {
        self.nat_gateways
            .iter()
            .filter(|nat| nat.subnet_id.as_deref() == Some(subnet_id))
            .collect()
    }

    /// Subnets that map public IPs on launch.
    pub fn public_subnets(&self) -> Vec<&Subnet> {
        self.subnets.iter().filter(|s| s.is_public()).collect()
    }

    /// Subnets that don't map public IPs on launch.
    pub fn private_subnets(&self) -> Vec<&Subnet> {
        self.subnets.iter().filter(|s| !s.is_public()).collect()
    }
}
