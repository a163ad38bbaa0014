use cosmwasm_std::StdError;
use thiserror::Error;

/// donation_campaign contract errors
#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Voting has not started yet")]
    CampaignNotStarted,

    #[error("Fundraising window has closed")]
    CampaignEnded,

    #[error("Caller is not the campaign creator")]
    NotCreator,

    #[error("Invalid state for this action")]
    InvalidState,

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Proposal has not been revealed")]
    NotRevealed,

    #[error("Vote already cast for this campaign")]
    VoteAlreadyCast,
}
