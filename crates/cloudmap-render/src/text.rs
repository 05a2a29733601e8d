//! Indented text reports.
//!
//! Three increasing levels of detail plus the full report, all writing
//! UTF-8 lines to any `io::Write` sink. Zero-valued sections are suppressed
//! entirely rather than printed as `0`.

use std::io;

use cloudmap_error::{Error, ErrorKind, Result};
use cloudmap_model::Resource;
use cloudmap_topo::{AccountTopology, NetworkTopology};

/// Width of the `=` banner around the full-report title.
const BANNER_WIDTH: usize = 60;
/// Width of the `-` rule between report sections.
const RULE_WIDTH: usize = 30;

/// Report depth selector for text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportDepth {
    /// Account totals plus one VPC summary per network
    Account,
    /// VPC summaries only
    Vpc,
    /// Per-subnet detail for every network
    Subnet,
    /// Banner, account summary and detailed breakdown (default)
    #[default]
    Full,
}

impl ReportDepth {
    /// Convert from numeric depth (for CLI compatibility)
    pub fn from_number(n: usize) -> Self {
        match n {
            0 => Self::Account,
            1 => Self::Vpc,
            2 => Self::Subnet,
            _ => Self::Full,
        }
    }

    /// Convert to numeric depth
    pub fn as_number(&self) -> usize {
        match self {
            Self::Account => 0,
            Self::Vpc => 1,
            Self::Subnet => 2,
            Self::Full => 3,
        }
    }
}

/// Renders text reports of an account topology.
pub struct TextRenderer {
    indent_size: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { indent_size: 2 }
    }
}

impl TextRenderer {
    pub fn new(indent_size: usize) -> Self {
        Self { indent_size }
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(level * self.indent_size)
    }

    /// Render the report selected by `depth`.
    pub fn render<W: io::Write>(
        &self,
        depth: ReportDepth,
        account: &AccountTopology,
        out: &mut W,
    ) -> Result<()> {
        match depth {
            ReportDepth::Account => self.account_summary(account, out),
            ReportDepth::Vpc => {
                for network in &account.networks {
                    self.vpc_summary(network, out)?;
                }
                Ok(())
            }
            ReportDepth::Subnet => {
                for network in &account.networks {
                    self.subnet_report(network, out)?;
                }
                Ok(())
            }
            ReportDepth::Full => self.full_report(account, out),
        }
    }

    /// Subnet-level report for one network: VPC header, then each subnet
    /// with classification, CIDR, AZ and its instances.
    pub fn subnet_report<W: io::Write>(
        &self,
        network: &NetworkTopology,
        out: &mut W,
    ) -> Result<()> {
        writeln!(
            out,
            "VPC: {} ({})",
            network.vpc.display_name(),
            network.vpc.cidr_block
        )
        .map_err(sink_error)?;

        for subnet in &network.subnets {
            let class = if subnet.is_public() { "Public" } else { "Private" };
            writeln!(
                out,
                "{}{} Subnet: {}",
                self.indent(1),
                class,
                subnet.display_name()
            )
            .map_err(sink_error)?;
            writeln!(out, "{}CIDR: {}", self.indent(2), subnet.cidr_block).map_err(sink_error)?;
            writeln!(out, "{}AZ: {}", self.indent(2), subnet.availability_zone)
                .map_err(sink_error)?;

            let instances = network.instances_in_subnet(&subnet.resource_id);
            if !instances.is_empty() {
                writeln!(out, "{}EC2 Instances:", self.indent(2)).map_err(sink_error)?;
                for instance in instances {
                    writeln!(out, "{}{}", self.indent(3), instance.display_name())
                        .map_err(sink_error)?;
                    writeln!(out, "{}Type: {}", self.indent(4), instance.instance_type)
                        .map_err(sink_error)?;
                    writeln!(out, "{}State: {}", self.indent(4), instance.state)
                        .map_err(sink_error)?;
                    writeln!(out, "{}Private IP: {}", self.indent(4), instance.private_ip)
                        .map_err(sink_error)?;
                    if let Some(public_ip) = &instance.public_ip {
                        writeln!(out, "{}Public IP: {}", self.indent(4), public_ip)
                            .map_err(sink_error)?;
                    }
                }
            }
            writeln!(out).map_err(sink_error)?;
        }
        Ok(())
    }

    /// VPC-level summary: header, state, gateways and child counts.
    pub fn vpc_summary<W: io::Write>(&self, network: &NetworkTopology, out: &mut W) -> Result<()> {
        writeln!(out, "VPC: {}", network.vpc.display_name()).map_err(sink_error)?;
        writeln!(out, "{}CIDR: {}", self.indent(1), network.vpc.cidr_block).map_err(sink_error)?;
        writeln!(out, "{}State: {}", self.indent(1), network.vpc.state).map_err(sink_error)?;
        writeln!(out, "{}Default: {}", self.indent(1), network.vpc.is_default)
            .map_err(sink_error)?;

        if !network.internet_gateways.is_empty() {
            writeln!(out, "{}Internet Gateways:", self.indent(1)).map_err(sink_error)?;
            for igw in &network.internet_gateways {
                writeln!(out, "{}{} ({})", self.indent(2), igw.id(), igw.state)
                    .map_err(sink_error)?;
            }
        }

        let public = network.public_subnets().len();
        let private = network.private_subnets().len();
        if public > 0 {
            writeln!(out, "{}Public Subnets: {}", self.indent(1), public).map_err(sink_error)?;
        }
        if private > 0 {
            writeln!(out, "{}Private Subnets: {}", self.indent(1), private).map_err(sink_error)?;
        }

        let total_instances = network.instances.len();
        if total_instances > 0 {
            writeln!(
                out,
                "{}Total EC2 Instances: {}",
                self.indent(1),
                total_instances
            )
            .map_err(sink_error)?;
        }

        writeln!(out).map_err(sink_error)?;
        Ok(())
    }

    /// Account-level summary: region header and totals, then one VPC
    /// summary per network in account order.
    pub fn account_summary<W: io::Write>(
        &self,
        account: &AccountTopology,
        out: &mut W,
    ) -> Result<()> {
        writeln!(out, "AWS Account - Region: {}", account.region).map_err(sink_error)?;
        writeln!(out, "Total VPCs: {}", account.networks.len()).map_err(sink_error)?;
        writeln!(out, "Total Instances: {}", account.all_instances().len())
            .map_err(sink_error)?;
        writeln!(out, "Total Subnets: {}", account.all_subnets().len()).map_err(sink_error)?;
        writeln!(out).map_err(sink_error)?;

        for network in &account.networks {
            self.vpc_summary(network, out)?;
        }
        Ok(())
    }

    /// Complete detailed report: banner, account summary, per-network
    /// breakdown with separator rules.
    pub fn full_report<W: io::Write>(&self, account: &AccountTopology, out: &mut W) -> Result<()> {
        let banner = "=".repeat(BANNER_WIDTH);
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(out, "{banner}").map_err(sink_error)?;
        writeln!(out, "AWS CLOUD INFRASTRUCTURE MAP").map_err(sink_error)?;
        writeln!(out, "{banner}").map_err(sink_error)?;
        writeln!(out).map_err(sink_error)?;

        self.account_summary(account, out)?;

        writeln!(out, "DETAILED VPC BREAKDOWN:").map_err(sink_error)?;
        writeln!(out, "{rule}").map_err(sink_error)?;
        writeln!(out).map_err(sink_error)?;

        for network in &account.networks {
            self.subnet_report(network, out)?;
            writeln!(out, "{rule}").map_err(sink_error)?;
        }
        Ok(())
    }
}

/// Sink failures propagate unchanged as `WriteFailed`; rendering is never
/// retried.
fn sink_error(err: io::Error) -> Error {
    Error::new(ErrorKind::WriteFailed, err.to_string())
        .with_operation("render::text")
        .set_source(err)
}
