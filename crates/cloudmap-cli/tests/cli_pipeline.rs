use std::io::Write;

use cloudmap::{CloudmapOptions, OutputFormat, run_main};
use cloudmap_error::ErrorKind;
use cloudmap_render::ReportDepth;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

const SAMPLE_INVENTORY: &str = r#"{
    "region": "eu-west-1",
    "vpcs": [
        {
            "resource_id": "vpc-1",
            "region": "eu-west-1",
            "tags": {"Name": "prod"},
            "cidr_block": "10.0.0.0/16",
            "state": "available",
            "is_default": false
        }
    ],
    "subnets": [
        {
            "resource_id": "subnet-pub",
            "region": "eu-west-1",
            "vpc_id": "vpc-1",
            "cidr_block": "10.0.1.0/24",
            "availability_zone": "eu-west-1a",
            "state": "available",
            "map_public_ip_on_launch": true
        },
        {
            "resource_id": "subnet-priv",
            "region": "eu-west-1",
            "vpc_id": "vpc-1",
            "cidr_block": "10.0.2.0/24",
            "availability_zone": "eu-west-1a",
            "state": "available",
            "map_public_ip_on_launch": false
        }
    ],
    "internet_gateways": [
        {
            "resource_id": "igw-1",
            "region": "eu-west-1",
            "vpc_id": "vpc-1",
            "state": "available"
        }
    ],
    "nat_gateways": [
        {
            "resource_id": "nat-1",
            "region": "eu-west-1",
            "vpc_id": "vpc-1",
            "subnet_id": "subnet-pub",
            "state": "available"
        },
        {
            "resource_id": "nat-unplaced",
            "region": "eu-west-1",
            "vpc_id": "vpc-1",
            "state": "available"
        }
    ],
    "instances": [
        {
            "resource_id": "i-1",
            "region": "eu-west-1",
            "tags": {"Name": "web-1"},
            "vpc_id": "vpc-1",
            "subnet_id": "subnet-priv",
            "instance_type": "t3.micro",
            "state": "running",
            "private_ip": "10.0.2.5"
        }
    ],
    "route_tables": [
        {
            "resource_id": "rtb-1",
            "region": "eu-west-1",
            "vpc_id": "vpc-1",
            "routes": [
                {"destination": "0.0.0.0/0", "target": "igw-1", "state": "active"}
            ],
            "subnet_associations": ["subnet-pub"]
        }
    ]
}"#;

fn inventory_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn options(path: &str, format: OutputFormat) -> CloudmapOptions {
    CloudmapOptions {
        inventory: path.to_string(),
        region: None,
        vpc_id: None,
        format,
        report_depth: ReportDepth::Full,
        keep_unplaced_nat_gateways: true,
    }
}

#[test]
fn text_pipeline_end_to_end() {
    let file = inventory_file(SAMPLE_INVENTORY);
    let opts = options(file.path().to_str().unwrap(), OutputFormat::Text);

    let output = run_main(&opts).unwrap();
    assert!(output.contains("AWS CLOUD INFRASTRUCTURE MAP"));
    assert!(output.contains("AWS Account - Region: eu-west-1"));
    assert!(output.contains("VPC: prod"));
    assert!(output.contains("web-1"));
    assert!(output.contains("Private IP: 10.0.2.5"));
}

#[test]
fn region_override_wins() {
    let file = inventory_file(SAMPLE_INVENTORY);
    let mut opts = options(file.path().to_str().unwrap(), OutputFormat::Text);
    opts.region = Some("us-gov-west-1".to_string());

    let output = run_main(&opts).unwrap();
    assert!(output.contains("AWS Account - Region: us-gov-west-1"));
}

#[test]
fn missing_region_is_config_error() {
    let file = inventory_file(r#"{"vpcs": []}"#);
    let opts = options(file.path().to_str().unwrap(), OutputFormat::Text);

    let err = run_main(&opts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}

#[test]
fn vpc_filter_without_match_yields_empty_topology() {
    let file = inventory_file(SAMPLE_INVENTORY);
    let mut opts = options(file.path().to_str().unwrap(), OutputFormat::Text);
    opts.vpc_id = Some("vpc-404".to_string());
    opts.report_depth = ReportDepth::Account;

    let output = run_main(&opts).unwrap();
    assert!(output.contains("Total VPCs: 0"));
    assert!(!output.contains("VPC: prod"));
}

#[test]
fn plantuml_pipeline_end_to_end() {
    let file = inventory_file(SAMPLE_INVENTORY);
    let opts = options(file.path().to_str().unwrap(), OutputFormat::PlantUml);

    let output = run_main(&opts).unwrap();
    assert!(output.starts_with("@startuml"));
    assert!(output.contains("VPCGroup(vpc_1, \"prod\") {"));
    assert!(output.contains("PublicSubnetGroup(subnet_pub"));
    assert!(output.contains("VPCNATGateway(nat_1"));
    assert!(output.contains("nat_1 .u.> igw_1"));
    assert!(output.contains("i_1 .u.> nat_1"));
    assert!(output.contains("| rtb-1 | 0.0.0.0/0 | igw-1 | active |"));
}

#[test]
fn json_dump_round_trips() {
    let file = inventory_file(SAMPLE_INVENTORY);
    let opts = options(file.path().to_str().unwrap(), OutputFormat::Json);

    let output = run_main(&opts).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["region"], "eu-west-1");
    assert_eq!(value["networks"][0]["vpc"]["resource_id"], "vpc-1");
    assert_eq!(value["networks"][0]["subnets"].as_array().unwrap().len(), 2);
}

#[test]
fn unplaced_nat_gateway_policy() {
    let file = inventory_file(SAMPLE_INVENTORY);
    let path = file.path().to_str().unwrap().to_string();

    let kept = run_main(&options(&path, OutputFormat::Json)).unwrap();
    assert!(kept.contains("nat-unplaced"));

    let mut opts = options(&path, OutputFormat::Json);
    opts.keep_unplaced_nat_gateways = false;
    let dropped = run_main(&opts).unwrap();
    assert!(!dropped.contains("nat-unplaced"));
    assert!(dropped.contains("nat-1"), "placed gateway survives");
}

#[test]
fn missing_inventory_file_fails() {
    let opts = options("/nonexistent/inventory.json", OutputFormat::Text);
    let err = run_main(&opts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
}

#[test]
fn malformed_inventory_fails_with_deserialize_error() {
    let file = inventory_file("{ this is not json");
    let opts = options(file.path().to_str().unwrap(), OutputFormat::Text);

    let err = run_main(&opts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DeserializeFailed);
}
