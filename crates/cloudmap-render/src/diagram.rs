//! PlantUML diagram document generation.
//!
//! Transforms an `AccountTopology` into a nested PlantUML document using the
//! AWS icon groups: an outer cloud group wrapping a VPC group per network,
//! availability-zone containers in first-seen order, subnet containers with
//! instance nodes batched into fixed-size rows, and flow edges describing
//! the egress path (instance → NAT → internet gateway). Row batching and
//! extra-NAT edges are layout hints only and are emitted as hidden edges.

use tracing::debug;

use cloudmap_model::{Resource, Subnet};
use cloudmap_topo::{AccountTopology, NetworkTopology};

use crate::puml::{PumlBuilder, sanitize_id};

/// AWS icon distribution consumed by the generated document.
const ICON_DIST: &str =
    "https://raw.githubusercontent.com/awslabs/aws-icons-for-plantuml/v20.0/dist";

/// Instances per visual row inside a subnet container.
const INSTANCE_ROW_WIDTH: usize = 3;

/// Routing-table note caps. Summarization keeps the document readable;
/// anything beyond these limits is deliberately omitted.
const NOTE_MAX_TABLES: usize = 5;
const NOTE_MAX_ROUTES: usize = 3;
const NOTE_NAME_WIDTH: usize = 20;
const NOTE_DEST_WIDTH: usize = 18;
const NOTE_TARGET_WIDTH: usize = 18;
const NOTE_STATUS_WIDTH: usize = 10;

/// Render the account topology as a PlantUML document.
pub fn render_diagram(account: &AccountTopology) -> String {
    debug!(
        region = account.region.as_str(),
        networks = account.networks.len(),
        "rendering diagram document"
    );

    let mut puml = PumlBuilder::new();
    preamble(&mut puml, &account.region);

    for network in &account.networks {
        render_network(&mut puml, network);
    }

    let has_routes = account
        .networks
        .iter()
        .flat_map(|network| network.route_tables.iter())
        .any(|rt| !rt.routes.is_empty());
    if has_routes {
        render_route_note(&mut puml, account);
    }

    puml.build()
}

fn preamble(puml: &mut PumlBuilder, region: &str) {
    puml.define("AWSPuml", ICON_DIST);
    puml.include("AWSPuml/AWSCommon.puml");
    puml.include("AWSPuml/AWSSimplified.puml");
    puml.include("AWSPuml/Compute/EC2.puml");
    puml.include("AWSPuml/Compute/EC2Instance.puml");
    puml.include("AWSPuml/Compute/Lambda.puml");
    puml.include("AWSPuml/NetworkingContentDelivery/VPCNATGateway.puml");
    puml.include("AWSPuml/NetworkingContentDelivery/VPCInternetGateway.puml");
    puml.include("AWSPuml/NetworkingContentDelivery/APIGateway.puml");
    puml.include("AWSPuml/NetworkingContentDelivery/Route53.puml");
    puml.include("AWSPuml/Groups/AWSCloud.puml");
    puml.include("AWSPuml/Groups/VPC.puml");
    puml.include("AWSPuml/Groups/PublicSubnet.puml");
    puml.include("AWSPuml/Groups/PrivateSubnet.puml");
    puml.include("AWSPuml/Groups/AvailabilityZone.puml");
    puml.blank();
    puml.directive("hide stereotype");
    puml.directive("skinparam linetype ortho");
    puml.blank();
    puml.title(&format!("AWS Infrastructure - {region}"));
    puml.blank();
}

/// Subnets of one availability zone, partitioned by classification with
/// relative order preserved.
#[derive(Default)]
struct AzGroup<'a> {
    public: Vec<&'a Subnet>,
    private: Vec<&'a Subnet>,
}

/// Partition subnets by availability zone, keeping first-seen AZ order.
fn group_subnets_by_az(subnets: &[Subnet]) -> Vec<(&str, AzGroup<'_>)> {
    let mut groups: Vec<(&str, AzGroup)> = Vec::new();
    for subnet in subnets {
        let az = subnet.availability_zone.as_str();
        let idx = match groups.iter().position(|(name, _)| *name == az) {
            Some(idx) => idx,
            None => {
                groups.push((az, AzGroup::default()));
                groups.len() - 1
            }
        };
        let group = &mut groups[idx].1;
        if subnet.is_public() {
            group.public.push(subnet);
        } else {
            group.private.push(subnet);
        }
    }
    groups
}

fn render_network(puml: &mut PumlBuilder, network: &NetworkTopology) {
    let vpc_sid = sanitize_id(&network.vpc.resource_id);
    puml.start_group("AWSCloudGroup", &format!("cloud_{vpc_sid}"));
    puml.start_group_labeled(
        "VPCGroup",
        &network.vpc.resource_id,
        network.vpc.display_name(),
    );

    let mut igw_ids: Vec<String> = Vec::new();
    for igw in &network.internet_gateways {
        igw_ids.push(sanitize_id(igw.id()));
        puml.node("VPCInternetGateway", igw.id(), "Internet Gateway");
    }

    let mut nat_ids: Vec<String> = Vec::new();
    let mut private_instance_ids: Vec<String> = Vec::new();

    for (az, group) in group_subnets_by_az(&network.subnets) {
        puml.blank();
        puml.start_group_labeled("AvailabilityZoneGroup", az, &format!("\t{az}\t"));

        for subnet in group.public {
            puml.start_group_labeled(
                "PublicSubnetGroup",
                &subnet.resource_id,
                &format!("Public subnet\n{}", subnet.cidr_block),
            );
            for nat in network.nat_gateways_in_subnet(&subnet.resource_id) {
                nat_ids.push(sanitize_id(nat.id()));
                puml.node_transparent(
                    "VPCNATGateway",
                    nat.id(),
                    nat.name().unwrap_or("NAT Gateway"),
                );
            }
            render_instance_rows(puml, network, subnet, None);
            puml.end_group();
        }

        for subnet in group.private {
            puml.start_group_labeled(
                "PrivateSubnetGroup",
                &subnet.resource_id,
                &format!("Private subnet\n{}", subnet.cidr_block),
            );
            render_instance_rows(puml, network, subnet, Some(&mut private_instance_ids));
            puml.end_group();
        }

        puml.end_group();
    }

    puml.end_group();
    puml.end_group();

    // DNS zones and API endpoints live outside the cloud group.
    for zone in &network.hosted_zones {
        let class = if zone.private_zone { "Private" } else { "Public" };
        puml.node(
            "Route53",
            zone.id(),
            &format!("{}\n{} Zone", zone.zone_name, class),
        );
    }
    for api in &network.api_gateways {
        puml.node(
            "APIGateway",
            api.id(),
            &format!("{}\n{}", api.api_name, api.api_type),
        );
    }
    puml.blank();

    // Egress path: NAT gateways drain to the first internet gateway,
    // private instances drain to the first NAT gateway.
    if !nat_ids.is_empty() && !igw_ids.is_empty() {
        puml.comment("Network Flow Connections");
        for nat_id in &nat_ids {
            puml.flow_edge(nat_id, &igw_ids[0]);
        }
    }
    if !nat_ids.is_empty() {
        for instance_id in &private_instance_ids {
            puml.flow_edge(instance_id, &nat_ids[0]);
        }
    }
    // Extra NAT gateways keep a layout constraint to the gateway without
    // cluttering the drawing.
    if nat_ids.len() > 1 && !igw_ids.is_empty() {
        for nat_id in &nat_ids[1..] {
            puml.hidden_flow_edge(nat_id, &igw_ids[0]);
        }
    }
    puml.blank();
}

/// Emit instance nodes batched into rows of [`INSTANCE_ROW_WIDTH`], with
/// hidden same-row alignment edges between consecutive nodes of a row.
fn render_instance_rows(
    puml: &mut PumlBuilder,
    network: &NetworkTopology,
    subnet: &Subnet,
    mut collect: Option<&mut Vec<String>>,
) {
    let instances = network.instances_in_subnet(&subnet.resource_id);
    for row in instances.chunks(INSTANCE_ROW_WIDTH) {
        let mut row_ids: Vec<String> = Vec::with_capacity(row.len());
        for instance in row {
            let id = sanitize_id(instance.id());
            puml.node_transparent(
                "EC2Instance",
                instance.id(),
                &format!(
                    "{}\n{}",
                    instance.name().unwrap_or("Instance"),
                    instance.instance_type
                ),
            );
            if let Some(ids) = collect.as_mut() {
                ids.push(id.clone());
            }
            row_ids.push(id);
        }
        for pair in row_ids.windows(2) {
            puml.hidden_row_edge(&pair[0], &pair[1]);
        }
    }
}

/// Trailing routing-table note: first [`NOTE_MAX_TABLES`] tables
/// account-wide, first [`NOTE_MAX_ROUTES`] routes per table, every column
/// truncated to its fixed width.
fn render_route_note(puml: &mut PumlBuilder, account: &AccountTopology) {
    puml.blank();
    puml.start_note_bottom();
    puml.note_line("<size:12><b>Routing Tables</b></size>");
    puml.note_line("<#lightblue,#black>|= Route Table |= Destination |= Target |= Status |");

    let tables = account
        .networks
        .iter()
        .flat_map(|network| network.route_tables.iter())
        .take(NOTE_MAX_TABLES);
    for rt in tables {
        let name = truncate(rt.display_name(), NOTE_NAME_WIDTH);
        for route in rt.routes.iter().take(NOTE_MAX_ROUTES) {
            let dest = truncate(or_default(&route.destination, "N/A"), NOTE_DEST_WIDTH);
            let target = truncate(or_default(&route.target, "local"), NOTE_TARGET_WIDTH);
            let status = truncate(or_default(&route.state, "active"), NOTE_STATUS_WIDTH);
            puml.note_line(&format!("| {name} | {dest} | {target} | {status} |"));
        }
    }

    puml.end_note();
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn or_default<'a>(s: &'a str, fallback: &'a str) -> &'a str {
    if s.is_empty() { fallback } else { s }
}
