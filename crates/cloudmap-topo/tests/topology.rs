use cloudmap_model::{
    Ec2Instance, HostedZone, InternetGateway, LambdaFunction, NatGateway, Resource,
    ResourceInventory, Subnet, Tags, Vpc,
};
use cloudmap_topo::{OrganizeOptions, assemble_account, organize, organize_inventory};
use pretty_assertions::assert_eq;

const REGION: &str = "us-east-1";

fn vpc(id: &str) -> Vpc {
    Vpc::new(id, REGION, Tags::new(), "10.0.0.0/16", "available", false)
}

fn subnet(id: &str, vpc_id: &str, az: &str, public: bool) -> Subnet {
    Subnet::new(
        id,
        REGION,
        Tags::new(),
        vpc_id,
        "10.0.1.0/24",
        az,
        "available",
        public,
    )
}

fn instance(id: &str, vpc_id: &str, subnet_id: &str) -> Ec2Instance {
    Ec2Instance::new(
        id,
        REGION,
        Tags::new(),
        vpc_id,
        subnet_id,
        "t3.micro",
        "running",
        "10.0.1.5",
        None,
        vec![],
    )
}

fn igw(id: &str, vpc_id: Option<&str>) -> InternetGateway {
    InternetGateway::new(
        id,
        REGION,
        Tags::new(),
        vpc_id.map(str::to_string),
        "available",
    )
}

fn nat(id: &str, vpc_id: &str, subnet_id: Option<&str>) -> NatGateway {
    NatGateway::new(
        id,
        REGION,
        Tags::new(),
        vpc_id,
        subnet_id.map(str::to_string),
        "available",
    )
}

fn function(id: &str, subnet_ids: &[&str]) -> LambdaFunction {
    LambdaFunction::new(
        id,
        REGION,
        Tags::new(),
        id,
        "python3.12",
        "Active",
        subnet_ids.iter().map(|s| s.to_string()).collect(),
        vec![],
    )
}

fn zone(id: &str, vpc_ids: &[&str]) -> HostedZone {
    HostedZone::new(
        id,
        REGION,
        Tags::new(),
        "internal.example.com.",
        true,
        4,
        vpc_ids.iter().map(|s| s.to_string()).collect(),
    )
}

#[test]
fn children_join_to_exactly_one_network() {
    let vpcs = vec![vpc("vpc-a"), vpc("vpc-b")];
    let subnets = vec![
        subnet("subnet-a1", "vpc-a", "us-east-1a", true),
        subnet("subnet-b1", "vpc-b", "us-east-1a", false),
        subnet("subnet-orphan", "vpc-gone", "us-east-1a", false),
    ];
    let instances = vec![
        instance("i-a", "vpc-a", "subnet-a1"),
        instance("i-orphan", "vpc-gone", "subnet-orphan"),
    ];
    let gateways = vec![igw("igw-a", Some("vpc-a")), igw("igw-detached", None)];

    let networks = organize(
        &vpcs,
        &subnets,
        &[],
        &gateways,
        &[],
        &instances,
        &[],
        &[],
        &[],
        &OrganizeOptions::default(),
    );

    assert_eq!(networks.len(), 2);
    let a = &networks[0];
    let b = &networks[1];

    assert_eq!(a.vpc.resource_id, "vpc-a");
    assert_eq!(a.subnets.len(), 1);
    assert_eq!(a.subnets[0].resource_id, "subnet-a1");
    assert_eq!(a.instances.len(), 1);
    assert_eq!(a.internet_gateways.len(), 1);

    assert_eq!(b.subnets.len(), 1);
    assert_eq!(b.subnets[0].resource_id, "subnet-b1");
    assert!(b.instances.is_empty(), "orphan must not leak into vpc-b");
    assert!(b.internet_gateways.is_empty());
}

#[test]
fn duplicate_inputs_are_deduplicated_keeping_first() {
    let vpcs = vec![vpc("vpc-a")];
    let first = subnet("subnet-1", "vpc-a", "us-east-1a", true);
    let duplicate = subnet("subnet-1", "vpc-a", "us-east-1b", false);
    let subnets = vec![first.clone(), duplicate];

    let networks = organize(
        &vpcs,
        &subnets,
        &[],
        &[],
        &[],
        &[],
        &[],
        &[],
        &[],
        &OrganizeOptions::default(),
    );

    assert_eq!(networks[0].subnets.len(), 1);
    assert_eq!(networks[0].subnets[0], first, "first occurrence wins");
}

#[test]
fn vpc_with_no_children_yields_empty_collections() {
    let networks = organize(
        &[vpc("vpc-a")],
        &[],
        &[],
        &[],
        &[],
        &[],
        &[],
        &[],
        &[],
        &OrganizeOptions::default(),
    );

    assert_eq!(networks.len(), 1);
    assert!(networks[0].subnets.is_empty());
    assert!(networks[0].route_tables.is_empty());
    assert!(networks[0].instances.is_empty());
}

#[test]
fn nat_gateways_place_by_subnet_membership() {
    let vpcs = vec![vpc("vpc-a")];
    let subnets = vec![subnet("subnet-1", "vpc-a", "us-east-1a", true)];
    let nats = vec![
        nat("nat-placed", "vpc-a", Some("subnet-1")),
        nat("nat-unplaced", "vpc-a", None),
        nat("nat-foreign", "vpc-b", Some("subnet-other")),
    ];

    let networks = organize(
        &vpcs,
        &subnets,
        &[],
        &[],
        &nats,
        &[],
        &[],
        &[],
        &[],
        &OrganizeOptions::default(),
    );

    let net = &networks[0];
    let ids: Vec<&str> = net.nat_gateways.iter().map(|n| n.id()).collect();
    assert_eq!(ids, vec!["nat-placed", "nat-unplaced"]);

    // Only the resolvable gateway shows up in per-subnet grouping.
    let in_subnet: Vec<&str> = net
        .nat_gateways_in_subnet("subnet-1")
        .iter()
        .map(|n| n.id())
        .collect();
    assert_eq!(in_subnet, vec!["nat-placed"]);
}

#[test]
fn unplaced_nat_gateways_can_be_dropped() {
    let vpcs = vec![vpc("vpc-a")];
    let subnets = vec![subnet("subnet-1", "vpc-a", "us-east-1a", true)];
    let nats = vec![
        nat("nat-placed", "vpc-a", Some("subnet-1")),
        nat("nat-unplaced", "vpc-a", None),
    ];

    let options = OrganizeOptions {
        keep_unplaced_nat_gateways: false,
    };
    let networks = organize(
        &vpcs, &subnets, &[], &[], &nats, &[], &[], &[], &[], &options,
    );

    let ids: Vec<&str> = networks[0].nat_gateways.iter().map(|n| n.id()).collect();
    assert_eq!(ids, vec!["nat-placed"]);
}

#[test]
fn functions_join_by_subnet_intersection() {
    let vpcs = vec![vpc("vpc-a"), vpc("vpc-b")];
    let subnets = vec![
        subnet("subnet-a1", "vpc-a", "us-east-1a", false),
        subnet("subnet-b1", "vpc-b", "us-east-1a", false),
    ];
    let functions = vec![
        function("fn-a", &["subnet-a1", "subnet-unknown"]),
        function("fn-both", &["subnet-a1", "subnet-b1"]),
        function("fn-nowhere", &["subnet-unknown"]),
        function("fn-detached", &[]),
    ];

    let networks = organize(
        &vpcs,
        &subnets,
        &[],
        &[],
        &[],
        &[],
        &functions,
        &[],
        &[],
        &OrganizeOptions::default(),
    );

    let a_ids: Vec<&str> = networks[0].functions.iter().map(|f| f.id()).collect();
    let b_ids: Vec<&str> = networks[1].functions.iter().map(|f| f.id()).collect();
    assert_eq!(a_ids, vec!["fn-a", "fn-both"]);
    assert_eq!(b_ids, vec!["fn-both"]);
}

#[test]
fn hosted_zones_join_many_to_many() {
    let vpcs = vec![vpc("vpc-a"), vpc("vpc-b"), vpc("vpc-c")];
    let zones = vec![
        zone("Z1", &["vpc-a", "vpc-b"]),
        zone("Z2", &["vpc-c"]),
        zone("Z3", &[]),
    ];

    let networks = organize(
        &vpcs,
        &[],
        &[],
        &[],
        &[],
        &[],
        &[],
        &zones,
        &[],
        &OrganizeOptions::default(),
    );

    assert_eq!(networks[0].hosted_zones.len(), 1);
    assert_eq!(networks[1].hosted_zones.len(), 1);
    assert_eq!(networks[0].hosted_zones[0].resource_id, "Z1");
    assert_eq!(networks[1].hosted_zones[0].resource_id, "Z1");
    assert_eq!(networks[2].hosted_zones[0].resource_id, "Z2");
}

#[test]
fn query_accessors_partition_and_look_up() {
    let vpcs = vec![vpc("vpc-a")];
    let subnets = vec![
        subnet("subnet-pub", "vpc-a", "us-east-1a", true),
        subnet("subnet-priv", "vpc-a", "us-east-1b", false),
    ];
    let instances = vec![
        instance("i-1", "vpc-a", "subnet-pub"),
        instance("i-2", "vpc-a", "subnet-priv"),
        instance("i-3", "vpc-a", "subnet-priv"),
    ];

    let networks = organize(
        &vpcs,
        &subnets,
        &[],
        &[],
        &[],
        &instances,
        &[],
        &[],
        &[],
        &OrganizeOptions::default(),
    );
    let net = &networks[0];

    assert!(net.subnet("subnet-pub").is_some());
    assert!(net.subnet("subnet-404").is_none());
    assert_eq!(net.instances_in_subnet("subnet-priv").len(), 2);
    assert_eq!(net.public_subnets().len(), 1);
    assert_eq!(net.private_subnets().len(), 1);
}

#[test]
fn account_accessors_flatten_in_network_order() {
    let vpcs = vec![vpc("vpc-a"), vpc("vpc-b")];
    let subnets = vec![
        subnet("subnet-a1", "vpc-a", "us-east-1a", true),
        subnet("subnet-b1", "vpc-b", "us-east-1a", false),
    ];
    let instances = vec![
        instance("i-b", "vpc-b", "subnet-b1"),
        instance("i-a", "vpc-a", "subnet-a1"),
    ];

    let networks = organize(
        &vpcs,
        &subnets,
        &[],
        &[],
        &[],
        &instances,
        &[],
        &[],
        &[],
        &OrganizeOptions::default(),
    );
    let account = assemble_account(REGION, networks);

    assert_eq!(account.region, REGION);
    assert!(account.network("vpc-b").is_some());
    assert!(account.network("vpc-404").is_none());

    let instance_ids: Vec<&str> = account.all_instances().iter().map(|i| i.id()).collect();
    assert_eq!(instance_ids, vec!["i-a", "i-b"], "flattened network order");
    assert_eq!(account.all_subnets().len(), 2);
}

#[test]
fn organize_inventory_matches_per_list_join() {
    let inventory = ResourceInventory {
        region: REGION.to_string(),
        vpcs: vec![vpc("vpc-a")],
        subnets: vec![subnet("subnet-a1", "vpc-a", "us-east-1a", true)],
        instances: vec![instance("i-1", "vpc-a", "subnet-a1")],
        ..Default::default()
    };

    let from_inventory = organize_inventory(&inventory, &OrganizeOptions::default());
    let from_lists = organize(
        &inventory.vpcs,
        &inventory.subnets,
        &[],
        &[],
        &[],
        &inventory.instances,
        &[],
        &[],
        &[],
        &OrganizeOptions::default(),
    );

    assert_eq!(from_inventory, from_lists);
}

#[test]
fn organize_is_deterministic() {
    let vpcs = vec![vpc("vpc-a"), vpc("vpc-b")];
    let subnets = vec![
        subnet("subnet-a1", "vpc-a", "us-east-1a", true),
        subnet("subnet-b1", "vpc-b", "us-east-1b", false),
    ];
    let instances = vec![instance("i-1", "vpc-a", "subnet-a1")];

    let run = || {
        organize(
            &vpcs,
            &subnets,
            &[],
            &[],
            &[],
            &instances,
            &[],
            &[],
            &[],
            &OrganizeOptions::default(),
        )
    };

    assert_eq!(run(), run());
}
