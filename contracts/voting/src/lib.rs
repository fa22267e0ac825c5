//! Single-election voting contract.
//!
//! The owner whitelists voters, opens and closes proposal registration and
//! the voting session, then tallies. Registered voters submit proposals and
//! cast one ballot each; the winner is the proposal with the most votes, the
//! lowest ID winning ties.
//!
//! Workflow: RegisteringVoters → ProposalsRegistrationStarted →
//! ProposalsRegistrationEnded → VotingSessionStarted → VotingSessionEnded →
//! VotesTallied

#![no_std]

mod contract;
mod errors;
mod events;
mod storage;
mod tally;
mod types;
mod validation;

pub use contract::{VotingContract, VotingContractClient};
pub use errors::VotingError;
pub use tally::plurality_winner;
pub use types::{Proposal, Voter, WorkflowStatus, GENESIS_DESCRIPTION};
pub use validation::MAX_DESCRIPTION_LEN;
