use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::state::CampaignPhase;

/// Instantiation parameters: fundraising target, phase lengths in blocks and
/// the collaborator addresses. The sender becomes the campaign creator.
#[cw_serde]
pub struct InstantiateMsg {
    pub goal: Uint128,
    pub duration: u64,
    pub vote_window: u64,
    pub escrow: String,
    pub distributor: String,
}

/// Execute entry points: contributions, proposal commit/reveal, ballots and
/// creator-only administration.
#[cw_serde]
pub enum ExecuteMsg {
    /// Record a contribution for the sender. Amounts are abstract balances;
    /// custody of actual funds is the escrow collaborator's concern.
    Contribute { amount: Uint128 },
    /// Append an unrevealed proposal under the next sequential id. The
    /// commitment is stored as an opaque token, never verified here.
    SubmitProposal { commitment: String, amount: Uint128 },
    /// Mark a proposal revealed and store its description. Revealing again
    /// re-sets the description.
    RevealProposal { proposal_id: u64, description: String },
    /// Add the caller-supplied weight to a revealed proposal. One ballot per
    /// address for the lifetime of the campaign.
    CastVote { proposal_id: u64, weight: Uint128 },
    // creator-only
    UpdateEscrow { escrow: String },
    UpdateDistributor { distributor: String },
    Cancel {},
}

/// Query entry points: configuration, phase, contributions and ballots.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(PhaseResponse)]
    Phase {},
    #[returns(ContributionResponse)]
    ContributionOf { address: String },
    #[returns(TotalRaisedResponse)]
    TotalRaised {},
    #[returns(ProposalResponse)]
    Proposal { proposal_id: u64 },
    #[returns(VotesResponse)]
    Votes { proposal_id: u64 },
    #[returns(VoteOfResponse)]
    VoteOf { address: String },
}

/// Migration parameters: empty, reserved for future upgrades
#[cw_serde]
pub struct MigrateMsg {}

/// Config query response: addresses, target, phase boundaries and totals
#[cw_serde]
pub struct ConfigResponse {
    pub creator: String,
    pub escrow: String,
    pub distributor: String,
    pub goal: Uint128,
    pub start_height: u64,
    pub duration: u64,
    pub vote_window: u64,
    pub total_raised: Uint128,
    pub cancelled: bool,
    pub proposal_count: u64,
}

/// Phase query response: derived phase plus the height it was derived from
#[cw_serde]
pub struct PhaseResponse {
    pub phase: CampaignPhase,
    pub height: u64,
}

/// Accumulated contribution of one donor (zero if the donor never gave)
#[cw_serde]
pub struct ContributionResponse {
    pub amount: Uint128,
}

/// Campaign-wide contribution total
#[cw_serde]
pub struct TotalRaisedResponse {
    pub total: Uint128,
}

/// Full proposal record
#[cw_serde]
pub struct ProposalResponse {
    pub proposal_id: u64,
    pub commitment: String,
    pub amount: Uint128,
    pub revealed: bool,
    pub description: Option<String>,
    pub vote_weight: Uint128,
}

/// Accumulated ballot weight (zero for unknown proposal ids)
#[cw_serde]
pub struct VotesResponse {
    pub weight: Uint128,
}

/// Proposal id an address voted for, if it voted at all
#[cw_serde]
pub struct VoteOfResponse {
    pub proposal_id: Option<u64>,
}
