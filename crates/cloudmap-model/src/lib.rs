//! Typed resource records for cloud account mapping.
//!
//! This crate defines the flat, immutable resource records produced by
//! discovery (VPCs, subnets, route tables, gateways, instances, functions,
//! hosted zones, API gateways), the inventory document that carries them,
//! and the trait boundary discovery collaborators must satisfy.
//!
//! # Module Structure
//!
//! - [`resource`]: One record struct per resource kind plus the common
//!   [`Resource`] accessor trait and [`ResourceKind`] discriminator
//! - [`inventory`]: The serializable [`ResourceInventory`] document and the
//!   in-memory [`InventorySource`] discovery implementation
//! - [`discover`]: Discovery trait interfaces (external collaborators)

mod discover;
mod inventory;
mod resource;
mod tags;

pub use discover::{
    ComputeDiscoverer, NetworkDiscoverer, NetworkUtilitiesDiscoverer, ServerlessDiscoverer,
};
pub use inventory::{InventorySource, ResourceInventory};
pub use resource::{
    ApiGateway, Ec2Instance, HostedZone, InternetGateway, LambdaFunction, NatGateway, Resource,
    ResourceKind, Route, RouteTable, Subnet, Vpc,
};
pub use tags::{Tags, name_from_tags};
