//! Rendering of assembled account topologies.
//!
//! This crate projects an [`AccountTopology`] into its output forms: plain
//! indented text reports at increasing depth, and a PlantUML document with
//! layout hints (grouping, row-wrapping, alignment, hidden edges). All
//! renderers are pure single-pass functions over the topology tree; the only
//! side effect is writing to the caller's sink.
//!
//! # Module Structure
//!
//! - [`puml`]: PlantUML format utilities and the [`PumlBuilder`]
//! - [`text`]: Indented text reports ([`TextRenderer`], [`ReportDepth`])
//! - [`diagram`]: The PlantUML diagram document ([`render_diagram`])
//!
//! [`AccountTopology`]: cloudmap_topo::AccountTopology

mod diagram;
mod puml;
mod text;

pub use diagram::render_diagram;
pub use puml::{PumlBuilder, escape_label, sanitize_id};
pub use text::{ReportDepth, TextRenderer};
