//! donation_campaign
//!
//! A CosmWasm donation campaign contract supporting:
//! - Block-height phased lifecycle: a fundraising window, then an open voting window
//! - Per-donor contribution ledger plus a campaign-wide running total
//! - Commit-reveal spending proposals (opaque commitment hash, description set at reveal)
//! - Weighted one-vote-per-address ballots over revealed proposals
//! - Creator-only escrow/distributor rotation and a one-way advisory cancel flag
pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::contract::{execute, instantiate, migrate, query};
pub use crate::error::ContractError;
