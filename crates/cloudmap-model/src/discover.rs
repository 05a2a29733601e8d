//! Discovery trait boundary.
//!
//! The organizer never calls a cloud API itself: it consumes already-fetched
//! lists. These traits are the contract discovery collaborators satisfy.
//! Implementations live outside this workspace (live cloud clients) or in
//! [`crate::InventorySource`] for pre-fetched inventories.
//!
//! Every method reports failure as [`ErrorKind::DiscoveryFailed`] carrying
//! the resource kind in context and the underlying cause as source.
//!
//! [`ErrorKind::DiscoveryFailed`]: cloudmap_error::ErrorKind::DiscoveryFailed

use cloudmap_error::Result;

use crate::resource::{
    ApiGateway, Ec2Instance, HostedZone, InternetGateway, LambdaFunction, NatGateway, RouteTable,
    Subnet, Vpc,
};

/// Discovery of core network resources, scoped per VPC after the initial
/// VPC listing.
pub trait NetworkDiscoverer {
    fn discover_vpcs(&self) -> Result<Vec<Vpc>>;

    fn discover_subnets(&self, vpc_id: &str) -> Result<Vec<Subnet>>;

    fn discover_route_tables(&self, vpc_id: &str) -> Result<Vec<RouteTable>>;

    fn discover_internet_gateways(&self, vpc_id: &str) -> Result<Vec<InternetGateway>>;
}

/// Discovery of compute resources, optionally scoped to one subnet.
pub trait ComputeDiscoverer {
    fn discover_instances(&self, subnet_id: Option<&str>) -> Result<Vec<Ec2Instance>>;
}

/// Discovery of serverless functions, optionally scoped to one VPC.
pub trait ServerlessDiscoverer {
    fn discover_functions(&self, vpc_id: Option<&str>) -> Result<Vec<LambdaFunction>>;
}

/// Discovery of network utilities (DNS zones, API endpoints, NAT gateways),
/// optionally scoped to one VPC.
pub trait NetworkUtilitiesDiscoverer {
    fn discover_hosted_zones(&self, vpc_id: Option<&str>) -> Result<Vec<HostedZone>>;

    fn discover_api_gateways(&self, vpc_id: Option<&str>) -> Result<Vec<ApiGateway>>;

    fn discover_nat_gateways(&self, vpc_id: Option<&str>) -> Result<Vec<NatGateway>>;
}
