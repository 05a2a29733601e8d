//! Resource records, one variant per resource kind.
//!
//! Every record is an immutable value: a unique `resource_id` (scoped to
//! its kind and region), the owning `region`, a tag map, and kind-specific
//! payload. The kind discriminator is a method, fixed per type, so it can
//! never diverge from the record it describes. Display names resolve from
//! the `Name` tag exactly once, inside the constructor.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};

use crate::tags::{Tags, name_from_tags};

/// Kind discriminator shared by all resource records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Vpc,
    Subnet,
    RouteTable,
    InternetGateway,
    NatGateway,
    Ec2Instance,
    LambdaFunction,
    HostedZone,
    ApiGateway,
}

impl ResourceKind {
    /// Kind as a static string (e.g. `"route_table"`).
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Common accessor set shared by every resource record.
///
/// One flat trait instead of an inheritance chain: records expose their
/// identity, kind, region, tags and optional display name; payload fields
/// stay on the concrete types.
pub trait Resource {
    fn id(&self) -> &str;
    fn kind(&self) -> ResourceKind;
    fn region(&self) -> &str;
    fn tags(&self) -> &Tags;
    fn name(&self) -> Option<&str>;

    /// Display name with the resource id as fallback.
    fn display_name(&self) -> &str {
        self.name().unwrap_or_else(|| self.id())
    }
}

macro_rules! impl_resource {
    ($ty:ty, $kind:expr) => {
        impl Resource for $ty {
            fn id(&self) -> &str {
                &self.resource_id
            }

            fn kind(&self) -> ResourceKind {
                $kind
            }

            fn region(&self) -> &str {
                &self.region
            }

            fn tags(&self) -> &Tags {
                &self.tags
            }

            fn name(&self) -> Option<&str> {
                self.name.as_deref()
            }
        }

        impl $ty {
            /// Fill a missing display name from the `Name` tag.
            ///
            /// Applied once by [`ResourceInventory::resolve_names`] after
            /// deserialization, mirroring the constructor-time derivation.
            ///
            /// [`ResourceInventory::resolve_names`]: crate::ResourceInventory::resolve_names
            pub(crate) fn resolve_name(&mut self) {
                if self.name.is_none() {
                    self.name = name_from_tags(&self.tags);
                }
            }

            /// Override the derived display name.
            pub fn with_name(mut self, name: impl Into<String>) -> Self {
                self.name = Some(name.into());
                self
            }
        }
    };
}

/// VPC record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vpc {
    pub resource_id: String,
    pub region: String,
    #[serde(default)]
    pub tags: Tags,
    pub cidr_block: String,
    pub state: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Vpc {
    pub fn new(
        resource_id: impl Into<String>,
        region: impl Into<String>,
        tags: Tags,
        cidr_block: impl Into<String>,
        state: impl Into<String>,
        is_default: bool,
    ) -> Self {
        let name = name_from_tags(&tags);
        Self {
            resource_id: resource_id.into(),
            region: region.into(),
            tags,
            cidr_block: cidr_block.into(),
            state: state.into(),
            is_default,
            name,
        }
    }
}

impl_resource!(Vpc, ResourceKind::Vpc);

/// Subnet record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subnet {
    pub resource_id: String,
    pub region: String,
    #[serde(default)]
    pub tags: Tags,
    pub vpc_id: String,
    pub cidr_block: String,
    pub availability_zone: String,
    pub state: String,
    #[serde(default)]
    pub map_public_ip_on_launch: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Subnet {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        resource_id: impl Into<String>,
        region: impl Into<String>,
        tags: Tags,
        vpc_id: impl Into<String>,
        cidr_block: impl Into<String>,
        availability_zone: impl Into<String>,
        state: impl Into<String>,
        map_public_ip_on_launch: bool,
    ) -> Self {
        let name = name_from_tags(&tags);
        Self {
            resource_id: resource_id.into(),
            region: region.into(),
            tags,
            vpc_id: vpc_id.into(),
            cidr_block: cidr_block.into(),
            availability_zone: availability_zone.into(),
            state: state.into(),
            map_public_ip_on_launch,
            name,
        }
    }

    /// Subnets that map public IPs on launch are rendered as public.
    pub fn is_public(&self) -> bool {
        self.map_public_ip_on_launch
    }
}

impl_resource!(Subnet, ResourceKind::Subnet);

/// A single route inside a route table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub state: String,
}

/// Route table record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    pub resource_id: String,
    pub region: String,
    #[serde(default)]
    pub tags: Tags,
    pub vpc_id: String,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub subnet_associations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteTable {
    pub fn new(
        resource_id: impl Into<String>,
        region: impl Into<String>,
        tags: Tags,
        vpc_id: impl Into<String>,
        routes: Vec<Route>,
        subnet_associations: Vec<String>,
    ) -> Self {
        let name = name_from_tags(&tags);
        Self {
            resource_id: resource_id.into(),
            region: region.into(),
            tags,
            vpc_id: vpc_id.into(),
            routes,
            subnet_associations,
            name,
        }
    }
}

impl_resource!(RouteTable, ResourceKind::RouteTable);

/// Internet gateway record. Detached gateways carry no VPC id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternetGateway {
    pub resource_id: String,
    pub region: String,
    #[serde(default)]
    pub tags: Tags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl InternetGateway {
    pub fn new(
        resource_id: impl Into<String>,
        region: impl Into<String>,
        tags: Tags,
        vpc_id: Option<String>,
        state: impl Into<String>,
    ) -> Self {
        let name = name_from_tags(&tags);
        Self {
            resource_id: resource_id.into(),
            region: region.into(),
            tags,
            vpc_id,
            state: state.into(),
            name,
        }
    }
}

impl_resource!(InternetGateway, ResourceKind::InternetGateway);

/// NAT gateway record. The parent subnet may be unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatGateway {
    pub resource_id: String,
    pub region: String,
    #[serde(default)]
    pub tags: Tags,
    pub vpc_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NatGateway {
    pub fn new(
        resource_id: impl Into<String>,
        region: impl Into<String>,
        tags: Tags,
        vpc_id: impl Into<String>,
        subnet_id: Option<String>,
        state: impl Into<String>,
    ) -> Self {
        let name = name_from_tags(&tags);
        Self {
            resource_id: resource_id.into(),
            region: region.into(),
            tags,
            vpc_id: vpc_id.into(),
            subnet_id,
            state: state.into(),
            name,
        }
    }
}

impl_resource!(NatGateway, ResourceKind::NatGateway);

/// EC2 instance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ec2Instance {
    pub resource_id: String,
    pub region: String,
    #[serde(default)]
    pub tags: Tags,
    pub vpc_id: String,
    pub subnet_id: String,
    pub instance_type: String,
    pub state: String,
    pub private_ip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
    #[serde(default)]
    pub security_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Ec2Instance {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        resource_id: impl Into<String>,
        region: impl Into<String>,
        tags: Tags,
        vpc_id: impl Into<String>,
        subnet_id: impl Into<String>,
        instance_type: impl Into<String>,
        state: impl Into<String>,
        private_ip: impl Into<String>,
        public_ip: Option<String>,
        security_groups: Vec<String>,
    ) -> Self {
        let name = name_from_tags(&tags);
        Self {
            resource_id: resource_id.into(),
            region: region.into(),
            tags,
            vpc_id: vpc_id.into(),
            subnet_id: subnet_id.into(),
            instance_type: instance_type.into(),
            state: state.into(),
            private_ip: private_ip.into(),
            public_ip,
            security_groups,
            name,
        }
    }
}

impl_resource!(Ec2Instance, ResourceKind::Ec2Instance);

/// Serverless function record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LambdaFunction {
    pub resource_id: String,
    pub region: String,
    #[serde(default)]
    pub tags: Tags,
    pub function_name: String,
    pub runtime: String,
    pub state: String,
    #[serde(default)]
    pub subnet_ids: Vec<String>,
    #[serde(default)]
    pub security_group_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl LambdaFunction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        resource_id: impl Into<String>,
        region: impl Into<String>,
        tags: Tags,
        function_name: impl Into<String>,
        runtime: impl Into<String>,
        state: impl Into<String>,
        subnet_ids: Vec<String>,
        security_group_ids: Vec<String>,
    ) -> Self {
        let name = name_from_tags(&tags);
        Self {
            resource_id: resource_id.into(),
            region: region.into(),
            tags,
            function_name: function_name.into(),
            runtime: runtime.into(),
            state: state.into(),
            subnet_ids,
            security_group_ids,
            name,
        }
    }
}

impl_resource!(LambdaFunction, ResourceKind::LambdaFunction);

/// DNS hosted zone record. A zone may be associated with several VPCs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedZone {
    pub resource_id: String,
    pub region: String,
    #[serde(default)]
    pub tags: Tags,
    pub zone_name: String,
    #[serde(default)]
    pub private_zone: bool,
    #[serde(default)]
    pub record_count: u64,
    #[serde(default)]
    pub vpc_associations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl HostedZone {
    pub fn new(
        resource_id: impl Into<String>,
        region: impl Into<String>,
        tags: Tags,
        zone_name: impl Into<String>,
        private_zone: bool,
        record_count: u64,
        vpc_associations: Vec<String>,
    ) -> Self {
        let name = name_from_tags(&tags);
        Self {
            resource_id: resource_id.into(),
            region: region.into(),
            tags,
            zone_name: zone_name.into(),
            private_zone,
            record_count,
            vpc_associations,
            name,
        }
    }
}

impl_resource!(HostedZone, ResourceKind::HostedZone);

/// API gateway endpoint record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiGateway {
    pub resource_id: String,
    pub region: String,
    #[serde(default)]
    pub tags: Tags,
    pub api_name: String,
    pub api_type: String,
    #[serde(default)]
    pub protocol_type: String,
    #[serde(default)]
    pub endpoint_type: String,
    #[serde(default)]
    pub vpc_links: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ApiGateway {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        resource_id: impl Into<String>,
        region: impl Into<String>,
        tags: Tags,
        api_name: impl Into<String>,
        api_type: impl Into<String>,
        protocol_type: impl Into<String>,
        endpoint_type: impl Into<String>,
        vpc_links: Vec<String>,
    ) -> Self {
        let name = name_from_tags(&tags);
        Self {
            resource_id: resource_id.into(),
            region: region.into(),
            tags,
            api_name: api_name.into(),
            api_type: api_type.into(),
            protocol_type: protocol_type.into(),
            endpoint_type: endpoint_type.into(),
            vpc_links,
            name,
        }
    }
}

impl_resource!(ApiGateway, ResourceKind::ApiGateway);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tags(pairs: &[(&str, &str)]) -> Tags {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_name_derived_from_tags_at_construction() {
        let vpc = Vpc::new(
            "vpc-1",
            "us-east-1",
            tags(&[("Name", "prod-vpc")]),
            "10.0.0.0/16",
            "available",
            false,
        );
        assert_eq!(vpc.name(), Some("prod-vpc"));
        assert_eq!(vpc.display_name(), "prod-vpc");
    }

    #[test]
    fn test_missing_name_falls_back_to_id() {
        let vpc = Vpc::new(
            "vpc-1",
            "us-east-1",
            Tags::new(),
            "10.0.0.0/16",
            "available",
            true,
        );
        assert_eq!(vpc.name(), None);
        assert_eq!(vpc.display_name(), "vpc-1");
    }

    #[test]
    fn test_explicit_name_wins_over_tag() {
        let subnet = Subnet::new(
            "subnet-1",
            "us-east-1",
            tags(&[("Name", "tagged")]),
            "vpc-1",
            "10.0.1.0/24",
            "us-east-1a",
            "available",
            true,
        )
        .with_name("explicit");
        assert_eq!(subnet.name(), Some("explicit"));
    }

    #[test]
    fn test_kind_is_fixed_per_type() {
        let igw = InternetGateway::new("igw-1", "us-east-1", Tags::new(), None, "detached");
        assert_eq!(igw.kind(), ResourceKind::InternetGateway);
        assert_eq!(igw.kind().as_str(), "internet_gateway");

        let nat = NatGateway::new("nat-1", "us-east-1", Tags::new(), "vpc-1", None, "available");
        assert_eq!(nat.kind(), ResourceKind::NatGateway);
        assert_eq!(nat.kind().as_str(), "nat_gateway");
    }

    #[test]
    fn test_resource_kind_display() {
        assert_eq!(ResourceKind::Ec2Instance.to_string(), "ec2_instance");
        assert_eq!(ResourceKind::HostedZone.to_string(), "hosted_zone");
    }

    #[test]
    fn test_subnet_classification() {
        let public = Subnet::new(
            "subnet-1",
            "us-east-1",
            Tags::new(),
            "vpc-1",
            "10.0.1.0/24",
            "us-east-1a",
            "available",
            true,
        );
        let private = Subnet::new(
            "subnet-2",
            "us-east-1",
            Tags::new(),
            "vpc-1",
            "10.0.2.0/24",
            "us-east-1a",
            "available",
            false,
        );
        assert!(public.is_public());
        assert!(!private.is_public());
    }
}
