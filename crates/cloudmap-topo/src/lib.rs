//! Topology assembly for cloudmap.
//!
//! This crate joins the flat, independently-fetched resource lists of an
//! inventory into a two-level hierarchy: one [`NetworkTopology`] per VPC,
//! gathered into an [`AccountTopology`] per region. Everything here is a
//! pure in-memory relational join: no I/O, no concurrency, no shared state.
//! Malformed relationships degrade to empty collections, never to errors.
//!
//! # Module Structure
//!
//! - `organize`: The join pipeline ([`organize()`] / [`assemble_account`])
//!   and its [`OrganizeOptions`]
//! - `network`: [`NetworkTopology`] and its query accessors
//! - `account`: [`AccountTopology`] and account-wide flattening accessors

mod account;
mod network;
mod organize;

pub use account::AccountTopology;
pub use network::NetworkTopology;
pub use organize::{OrganizeOptions, assemble_account, organize, organize_inventory};
