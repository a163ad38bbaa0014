use cosmwasm_std::{attr, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult, Uint128};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ConfigResponse, ContributionResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, PhaseResponse, ProposalResponse, QueryMsg, TotalRaisedResponse, VoteOfResponse, VotesResponse};
use crate::state::{CampaignPhase, Config, Contribution, Proposal, CONFIG, CONTRIBUTIONS, PROPOSALS, VOTES};

/// Contract name and version (used for migration safety checks)
const CONTRACT_NAME: &str = "crates.io:donation-campaign";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the campaign: the sender becomes the creator, the current block
/// height anchors the fundraising window. A zero goal aborts instantiation.
pub fn instantiate(deps: DepsMut, env: Env, info: MessageInfo, msg: InstantiateMsg) -> Result<Response, ContractError> {
    if msg.goal.is_zero() {
        return Err(ContractError::InvalidState);
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let escrow = deps.api.addr_validate(&msg.escrow)?;
    let distributor = deps.api.addr_validate(&msg.distributor)?;

    let config = Config {
        creator: info.sender.clone(),
        escrow: escrow.clone(),
        distributor: distributor.clone(),
        goal: msg.goal,
        start_height: env.block.height,
        duration: msg.duration,
        vote_window: msg.vote_window,
        total_raised: Uint128::zero(),
        cancelled: false,
        next_proposal_id: 0,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "instantiate"),
        attr("creator", info.sender),
        attr("goal", msg.goal),
        attr("duration", msg.duration.to_string()),
        attr("vote_window", msg.vote_window.to_string()),
        attr("escrow", escrow),
        attr("distributor", distributor),
    ]))
}

/// Execute entry: dispatch to the concrete handler
pub fn execute(deps: DepsMut, env: Env, info: MessageInfo, msg: ExecuteMsg) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Contribute { amount } => exec_contribute(deps, env, info, amount),
        ExecuteMsg::SubmitProposal { commitment, amount } => exec_submit_proposal(deps, env, info, commitment, amount),
        ExecuteMsg::RevealProposal { proposal_id, description } => exec_reveal_proposal(deps, info, proposal_id, description),
        ExecuteMsg::CastVote { proposal_id, weight } => exec_cast_vote(deps, env, info, proposal_id, weight),
        ExecuteMsg::UpdateEscrow { escrow } => exec_update_escrow(deps, info, escrow),
        ExecuteMsg::UpdateDistributor { distributor } => exec_update_distributor(deps, info, distributor),
        ExecuteMsg::Cancel {} => exec_cancel(deps, info),
    }
}

/// Assert the sender is the campaign creator, returning the latest config
fn must_creator(deps: &DepsMut, sender: &cosmwasm_std::Addr) -> Result<Config, ContractError> {
    let cfg: Config = CONFIG.load(deps.storage)?;
    if cfg.creator != *sender {
        return Err(ContractError::NotCreator);
    }
    Ok(cfg)
}

/// Height at which fundraising closes and voting opens
fn voting_open_height(cfg: &Config) -> u64 {
    cfg.start_height + cfg.duration
}

/// Fundraising is open while the current height is below the boundary
fn in_fundraising(env: &Env, cfg: &Config) -> bool {
    env.block.height < voting_open_height(cfg)
}

/// Record a contribution for the sender during the fundraising window.
/// The amount check comes first so a zero amount reports `ZeroAmount`
/// even after the window has closed.
fn exec_contribute(deps: DepsMut, env: Env, info: MessageInfo, amount: Uint128) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    let mut cfg = CONFIG.load(deps.storage)?;
    if !in_fundraising(&env, &cfg) {
        return Err(ContractError::CampaignEnded);
    }

    let existing = CONTRIBUTIONS
        .may_load(deps.storage, info.sender.clone())?
        .unwrap_or(Contribution { amount: Uint128::zero() });
    let updated = Contribution { amount: existing.amount + amount };
    CONTRIBUTIONS.save(deps.storage, info.sender.clone(), &updated)?;

    cfg.total_raised += amount;
    CONFIG.save(deps.storage, &cfg)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "contribute"),
        attr("donor", info.sender),
        attr("amount", amount),
        attr("total_raised", cfg.total_raised),
    ]))
}

/// Append an unrevealed proposal under the next sequential id. The
/// commitment is opaque data; duplicates are structurally permitted.
fn exec_submit_proposal(deps: DepsMut, env: Env, info: MessageInfo, commitment: String, amount: Uint128) -> Result<Response, ContractError> {
    let mut cfg = CONFIG.load(deps.storage)?;
    if !in_fundraising(&env, &cfg) {
        return Err(ContractError::CampaignEnded);
    }

    let proposal_id = cfg.next_proposal_id;
    let proposal = Proposal {
        commitment: commitment.clone(),
        amount,
        revealed: false,
        description: None,
        vote_weight: Uint128::zero(),
    };
    PROPOSALS.save(deps.storage, proposal_id, &proposal)?;

    cfg.next_proposal_id = proposal_id + 1;
    CONFIG.save(deps.storage, &cfg)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "submit_proposal"),
        attr("proposal_id", proposal_id.to_string()),
        attr("proposer", info.sender),
        attr("commitment", commitment),
        attr("amount", amount),
    ]))
}

/// Mark a proposal revealed and store its description. Not phase-gated;
/// revealing an already revealed proposal re-sets the description.
fn exec_reveal_proposal(deps: DepsMut, info: MessageInfo, proposal_id: u64, description: String) -> Result<Response, ContractError> {
    let mut proposal = PROPOSALS
        .may_load(deps.storage, proposal_id)?
        .ok_or(ContractError::InvalidState)?;

    proposal.revealed = true;
    proposal.description = Some(description.clone());
    PROPOSALS.save(deps.storage, proposal_id, &proposal)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "reveal_proposal"),
        attr("proposal_id", proposal_id.to_string()),
        attr("revealer", info.sender),
        attr("description", description),
    ]))
}

/// Cast the sender's one ballot. Checks run in order: voting must have
/// opened, the proposal must exist and be revealed, the sender must not
/// already appear in the vote ledger. The weight is trusted verbatim; a
/// balance oracle outside this contract is expected to bound it.
fn exec_cast_vote(deps: DepsMut, env: Env, info: MessageInfo, proposal_id: u64, weight: Uint128) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    if in_fundraising(&env, &cfg) {
        return Err(ContractError::CampaignNotStarted);
    }

    let mut proposal = PROPOSALS
        .may_load(deps.storage, proposal_id)?
        .ok_or(ContractError::NotRevealed)?;
    if !proposal.revealed {
        return Err(ContractError::NotRevealed);
    }

    if VOTES.has(deps.storage, info.sender.clone()) {
        return Err(ContractError::VoteAlreadyCast);
    }

    VOTES.save(deps.storage, info.sender.clone(), &proposal_id)?;
    proposal.vote_weight += weight;
    PROPOSALS.save(deps.storage, proposal_id, &proposal)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "cast_vote"),
        attr("voter", info.sender),
        attr("proposal_id", proposal_id.to_string()),
        attr("weight", weight),
        attr("vote_weight", proposal.vote_weight),
    ]))
}

/// Creator only: rotate the escrow address, callable in any phase
fn exec_update_escrow(deps: DepsMut, info: MessageInfo, escrow: String) -> Result<Response, ContractError> {
    let mut cfg = must_creator(&deps, &info.sender)?;
    let escrow = deps.api.addr_validate(&escrow)?;
    cfg.escrow = escrow.clone();
    CONFIG.save(deps.storage, &cfg)?;
    Ok(Response::new().add_attributes(vec![attr("action", "update_escrow"), attr("escrow", escrow)]))
}

/// Creator only: rotate the distributor address, callable in any phase
fn exec_update_distributor(deps: DepsMut, info: MessageInfo, distributor: String) -> Result<Response, ContractError> {
    let mut cfg = must_creator(&deps, &info.sender)?;
    let distributor = deps.api.addr_validate(&distributor)?;
    cfg.distributor = distributor.clone();
    CONFIG.save(deps.storage, &cfg)?;
    Ok(Response::new().add_attributes(vec![attr("action", "update_distributor"), attr("distributor", distributor)]))
}

/// Creator only: set the one-way cancel flag. Advisory state for the escrow
/// and distributor to consult; totals, proposals and ballots stay intact.
fn exec_cancel(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut cfg = must_creator(&deps, &info.sender)?;
    cfg.cancelled = true;
    CONFIG.save(deps.storage, &cfg)?;
    Ok(Response::new().add_attributes(vec![attr("action", "cancel"), attr("cancelled", "true")]))
}

/// Query entry: dispatch and serialize the response
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Phase {} => to_json_binary(&query_phase(deps, env)?),
        QueryMsg::ContributionOf { address } => to_json_binary(&query_contribution_of(deps, address)?),
        QueryMsg::TotalRaised {} => to_json_binary(&query_total_raised(deps)?),
        QueryMsg::Proposal { proposal_id } => to_json_binary(&query_proposal(deps, proposal_id)?),
        QueryMsg::Votes { proposal_id } => to_json_binary(&query_votes(deps, proposal_id)?),
        QueryMsg::VoteOf { address } => to_json_binary(&query_vote_of(deps, address)?),
    }
}

/// Full configuration plus running totals and the proposal count
fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        creator: cfg.creator.to_string(),
        escrow: cfg.escrow.to_string(),
        distributor: cfg.distributor.to_string(),
        goal: cfg.goal,
        start_height: cfg.start_height,
        duration: cfg.duration,
        vote_window: cfg.vote_window,
        total_raised: cfg.total_raised,
        cancelled: cfg.cancelled,
        proposal_count: cfg.next_proposal_id,
    })
}

/// Phase derived from the current block height
fn query_phase(deps: Deps, env: Env) -> StdResult<PhaseResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    let phase = if in_fundraising(&env, &cfg) { CampaignPhase::Fundraising } else { CampaignPhase::Voting };
    Ok(PhaseResponse { phase, height: env.block.height })
}

/// Accumulated contribution of one donor (zero if the donor never gave)
fn query_contribution_of(deps: Deps, address: String) -> StdResult<ContributionResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let c = CONTRIBUTIONS
        .may_load(deps.storage, addr)?
        .unwrap_or(Contribution { amount: Uint128::zero() });
    Ok(ContributionResponse { amount: c.amount })
}

/// Campaign-wide contribution total
fn query_total_raised(deps: Deps) -> StdResult<TotalRaisedResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(TotalRaisedResponse { total: cfg.total_raised })
}

/// Full proposal record; unknown ids are a query error
fn query_proposal(deps: Deps, proposal_id: u64) -> StdResult<ProposalResponse> {
    let p = PROPOSALS
        .may_load(deps.storage, proposal_id)?
        .ok_or_else(|| StdError::not_found(format!("proposal {}", proposal_id)))?;
    Ok(ProposalResponse {
        proposal_id,
        commitment: p.commitment,
        amount: p.amount,
        revealed: p.revealed,
        description: p.description,
        vote_weight: p.vote_weight,
    })
}

/// Accumulated ballot weight; unknown ids report zero rather than failing
fn query_votes(deps: Deps, proposal_id: u64) -> StdResult<VotesResponse> {
    let weight = PROPOSALS
        .may_load(deps.storage, proposal_id)?
        .map(|p| p.vote_weight)
        .unwrap_or_else(Uint128::zero);
    Ok(VotesResponse { weight })
}

/// Proposal id an address voted for, if it voted at all
fn query_vote_of(deps: Deps, address: String) -> StdResult<VoteOfResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let proposal_id = VOTES.may_load(deps.storage, addr)?;
    Ok(VoteOfResponse { proposal_id })
}

/// Migration: no state changes, re-stamp the contract version for upgrades
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("action", "migrate"))
}
