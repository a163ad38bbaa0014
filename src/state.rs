use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Campaign aggregate (stored once): creator and collaborator addresses,
/// fundraising target, phase boundaries, running total, cancel flag and
/// the sequential proposal id counter.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub creator: Addr,
    pub escrow: Addr,
    pub distributor: Addr,
    pub goal: Uint128,
    /// Block height at instantiation; phase math is relative to it.
    pub start_height: u64,
    /// Fundraising length in blocks; voting opens at `start_height + duration`.
    pub duration: u64,
    /// Advertised voting length in blocks. Stored and reported, not enforced
    /// by `CastVote`; collaborators decide when to stop honoring ballots.
    pub vote_window: u64,
    pub total_raised: Uint128,
    pub cancelled: bool,
    pub next_proposal_id: u64,
}

/// Lifecycle phase derived from block height, never stored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub enum CampaignPhase {
    Fundraising,
    Voting,
}

/// Spending proposal: opaque commitment at submission, description and the
/// revealed flag set at reveal, ballot weight accumulated during voting.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Proposal {
    pub commitment: String,
    pub amount: Uint128,
    pub revealed: bool,
    pub description: Option<String>,
    pub vote_weight: Uint128,
}

/// Accumulated contribution per donor address.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Contribution {
    pub amount: Uint128,
}

/// Single-instance campaign config
pub const CONFIG: Item<Config> = Item::new("config");
/// Sequential id → proposal
pub const PROPOSALS: Map<u64, Proposal> = Map::new("proposals");
/// Donor address → accumulated contribution
pub const CONTRIBUTIONS: Map<Addr, Contribution> = Map::new("contributions");
/// Voter address → proposal id; a key appears at most once per campaign
pub const VOTES: Map<Addr, u64> = Map::new("votes");
