#![allow(dead_code)]

use cosmwasm_std::{
    from_json,
    testing::{mock_dependencies, mock_env, MockApi, MockQuerier},
    Env, MemoryStorage, MessageInfo, OwnedDeps, Uint128,
};
use donation_campaign::{
    contract::{instantiate, query},
    error::ContractError,
    msg::{
        ConfigResponse, ContributionResponse, ExecuteMsg, InstantiateMsg, PhaseResponse,
        ProposalResponse, QueryMsg, TotalRaisedResponse, VoteOfResponse, VotesResponse,
    },
};

pub type TestDeps = OwnedDeps<MemoryStorage, MockApi, MockQuerier>;

/// Test constants
pub const CREATOR: &str = "creator";
pub const ESCROW: &str = "escrow";
pub const DISTRIBUTOR: &str = "distributor";
pub const DONOR1: &str = "donor1";
pub const DONOR2: &str = "donor2";
pub const VOTER1: &str = "voter1";
pub const VOTER2: &str = "voter2";
pub const GOAL: u128 = 1000;
pub const DURATION: u64 = 2;
pub const VOTE_WINDOW: u64 = 5;

/// Create the test environment
pub fn setup_test_env() -> (TestDeps, Env) {
    let deps = mock_dependencies();
    let env = mock_env();
    (deps, env)
}

/// Move the mock chain clock forward by `n` blocks
pub fn advance_blocks(env: &mut Env, n: u64) {
    env.block.height += n;
}

/// Build a MessageInfo for an arbitrary sender
pub fn info_for(sender: &str) -> MessageInfo {
    MessageInfo {
        sender: cosmwasm_std::Addr::unchecked(sender),
        funds: vec![],
    }
}

/// Instantiate the campaign with the default test parameters
pub fn instantiate_campaign(
    deps: &mut TestDeps,
    env: &Env,
    goal: u128,
) -> Result<cosmwasm_std::Response, ContractError> {
    let msg = InstantiateMsg {
        goal: Uint128::from(goal),
        duration: DURATION,
        vote_window: VOTE_WINDOW,
        escrow: ESCROW.to_string(),
        distributor: DISTRIBUTOR.to_string(),
    };
    instantiate(deps.as_mut(), env.clone(), info_for(CREATOR), msg)
}

/// Create a contribution message for the given donor
pub fn create_contribute_msg(sender: &str, amount: u128) -> (ExecuteMsg, MessageInfo) {
    let msg = ExecuteMsg::Contribute { amount: Uint128::from(amount) };
    (msg, info_for(sender))
}

/// Create a proposal submission message
pub fn create_submit_msg(sender: &str, commitment: &str, amount: u128) -> (ExecuteMsg, MessageInfo) {
    let msg = ExecuteMsg::SubmitProposal {
        commitment: commitment.to_string(),
        amount: Uint128::from(amount),
    };
    (msg, info_for(sender))
}

/// Create a proposal reveal message
pub fn create_reveal_msg(sender: &str, proposal_id: u64, description: &str) -> (ExecuteMsg, MessageInfo) {
    let msg = ExecuteMsg::RevealProposal {
        proposal_id,
        description: description.to_string(),
    };
    (msg, info_for(sender))
}

/// Create a ballot message for the given voter
pub fn create_vote_msg(sender: &str, proposal_id: u64, weight: u128) -> (ExecuteMsg, MessageInfo) {
    let msg = ExecuteMsg::CastVote {
        proposal_id,
        weight: Uint128::from(weight),
    };
    (msg, info_for(sender))
}

/// Compute a realistic commitment hash the way an off-chain client would.
/// The contract treats it as an opaque token.
pub fn calculate_commitment(proposer: &str, description: &str, salt: &str) -> String {
    use sha2::{Digest, Sha256};
    let preimage = format!("{}|{}|{}", proposer, description, salt);
    let hash = Sha256::digest(preimage.as_bytes());
    hex::encode(hash)
}

/// Query the campaign configuration
pub fn query_config(deps: &TestDeps) -> ConfigResponse {
    let res = query(deps.as_ref(), mock_env(), QueryMsg::Config {}).unwrap();
    from_json(res).unwrap()
}

/// Query the derived phase at the given env
pub fn query_phase(deps: &TestDeps, env: &Env) -> PhaseResponse {
    let res = query(deps.as_ref(), env.clone(), QueryMsg::Phase {}).unwrap();
    from_json(res).unwrap()
}

/// Query one donor's accumulated contribution
pub fn query_contribution_of(deps: &TestDeps, address: &str) -> ContributionResponse {
    let msg = QueryMsg::ContributionOf { address: address.to_string() };
    let res = query(deps.as_ref(), mock_env(), msg).unwrap();
    from_json(res).unwrap()
}

/// Query the campaign-wide total
pub fn query_total_raised(deps: &TestDeps) -> TotalRaisedResponse {
    let res = query(deps.as_ref(), mock_env(), QueryMsg::TotalRaised {}).unwrap();
    from_json(res).unwrap()
}

/// Query a full proposal record
pub fn query_proposal(deps: &TestDeps, proposal_id: u64) -> ProposalResponse {
    let msg = QueryMsg::Proposal { proposal_id };
    let res = query(deps.as_ref(), mock_env(), msg).unwrap();
    from_json(res).unwrap()
}

/// Query the accumulated weight of a proposal (zero for unknown ids)
pub fn query_votes(deps: &TestDeps, proposal_id: u64) -> VotesResponse {
    let msg = QueryMsg::Votes { proposal_id };
    let res = query(deps.as_ref(), mock_env(), msg).unwrap();
    from_json(res).unwrap()
}

/// Query which proposal an address voted for
pub fn query_vote_of(deps: &TestDeps, address: &str) -> VoteOfResponse {
    let msg = QueryMsg::VoteOf { address: address.to_string() };
    let res = query(deps.as_ref(), mock_env(), msg).unwrap();
    from_json(res).unwrap()
}

/// Pull an attribute value out of a Response by key
pub fn attr_value(res: &cosmwasm_std::Response, key: &str) -> String {
    res.attributes
        .iter()
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
        .unwrap_or_else(|| panic!("attribute {} not found", key))
}
