//! Error codes returned by the voting contract.
//!
//! Codes are part of the contract ABI and must stay stable:
//! - 1-2: access control
//! - 3-4: workflow gating
//! - 5-11: registry, proposal and ballot preconditions

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    /// Caller is not the owner for an owner-only operation
    Unauthorized = 1,

    /// Caller is not a registered voter
    NotAVoter = 2,

    /// Registration window (voters or proposals) is not open
    PhaseNotOpen = 3,

    /// Workflow transition attempted from the wrong phase.
    ///
    /// The code alone does not say which phase was expected: that text
    /// comes from `WorkflowStatus::describe()` on the required predecessor
    /// and is only written to the contract log, which the `release` profile
    /// compiles out (use `release-with-logs` to keep it).
    InvalidPhaseTransition = 4,

    /// Address already has a voter record
    AlreadyRegistered = 5,

    /// Proposal description is empty or whitespace only
    EmptyProposal = 6,

    /// Caller already cast a ballot
    AlreadyVoted = 7,

    /// Proposal ID outside the registered range
    ProposalNotFound = 8,

    /// Ballots are only accepted while the voting session is open
    VotingNotOpen = 9,

    /// Proposal description exceeds `MAX_DESCRIPTION_LEN`
    DescriptionTooLong = 10,

    /// Winner requested before the tally ran
    VotesNotTallied = 11,
}

impl VotingError {
    pub fn message(&self) -> &'static str {
        match self {
            VotingError::Unauthorized => "Caller is not the owner",
            VotingError::NotAVoter => "You're not a voter",
            VotingError::PhaseNotOpen => "Registration is not open",
            VotingError::InvalidPhaseTransition => "Invalid workflow transition",
            VotingError::AlreadyRegistered => "Already registered",
            VotingError::EmptyProposal => "Proposal description cannot be empty",
            VotingError::AlreadyVoted => "You have already voted",
            VotingError::ProposalNotFound => "Proposal not found",
            VotingError::VotingNotOpen => "Voting session havent started yet",
            VotingError::DescriptionTooLong => "Proposal description is too long",
            VotingError::VotesNotTallied => "Votes have not been tallied yet",
        }
    }
}
