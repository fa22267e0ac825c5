use soroban_sdk::{contracttype, Address, String};

/// Description stored at proposal index 0 when proposal registration opens.
pub const GENESIS_DESCRIPTION: &str = "GENESIS";

/// Phases of the election, in the only order they can be visited.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

impl WorkflowStatus {
    /// The phase that directly follows this one, if any.
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => Some(WorkflowStatus::VotingSessionStarted),
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }

    /// Human-readable reason used when an operation needs this phase and
    /// the election is somewhere else.
    pub fn describe(self) -> &'static str {
        match self {
            WorkflowStatus::RegisteringVoters => "Voters registration is not open",
            WorkflowStatus::ProposalsRegistrationStarted => {
                "Registering proposals havent started yet"
            }
            WorkflowStatus::ProposalsRegistrationEnded => {
                "Registering proposals phase is not finished"
            }
            WorkflowStatus::VotingSessionStarted => "Voting session havent started yet",
            WorkflowStatus::VotingSessionEnded => "Voting session phase is not finished",
            WorkflowStatus::VotesTallied => "Votes have not been tallied yet",
        }
    }
}

/// Registry entry for a whitelisted address.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Only meaningful once `has_voted` is set.
    pub voted_proposal_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    // instance
    Owner,
    Status,
    WinningProposalId,
    ProposalCount,
    // persistent
    Voter(Address),
    Proposal(u32),
    VoterCount,
    VotesCast,
}
