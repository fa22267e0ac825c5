use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

use crate::{
    errors::VotingError,
    events, storage,
    tally::plurality_winner,
    types::{Proposal, Voter, WorkflowStatus, GENESIS_DESCRIPTION},
    validation::validate_description,
};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Creation ─────────────────────────────────────────────────────────────

    /// Deploys the election with `owner` as its administrator. The owner is
    /// fixed for the lifetime of the contract.
    pub fn __constructor(env: Env, owner: Address) {
        storage::set_owner(&env, &owner);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);
        storage::set_winning_proposal_id(&env, 0);
        storage::bump_instance(&env);
    }

    // ── Voter Registry ───────────────────────────────────────────────────────

    /// Whitelist `voter`. Owner only, while voters are being registered.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        Self::require_owner(&env, &caller)?;

        if storage::get_voter(&env, &voter).is_some() {
            return Err(Self::reject(&env, VotingError::AlreadyRegistered));
        }
        if storage::get_status(&env) != WorkflowStatus::RegisteringVoters {
            return Err(Self::reject(&env, VotingError::PhaseNotOpen));
        }

        let record = Voter {
            is_registered: true,
            has_voted: false,
            voted_proposal_id: 0,
        };
        storage::save_voter(&env, &voter, &record);
        storage::increment_voter_count(&env);
        storage::bump_instance(&env);

        log!(&env, "voter registered", voter);
        events::voter_registered(&env, &voter);

        Ok(())
    }

    /// Read any voter record. Only registered voters may read the registry;
    /// unknown addresses come back as an empty record.
    pub fn get_voter(env: Env, caller: Address, voter: Address) -> Result<Voter, VotingError> {
        Self::require_voter(&env, &caller)?;
        Ok(storage::get_voter(&env, &voter).unwrap_or_default())
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Register a proposal and return its ID.
    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, VotingError> {
        Self::require_voter(&env, &caller)?;

        if storage::get_status(&env) != WorkflowStatus::ProposalsRegistrationStarted {
            return Err(Self::reject(&env, VotingError::PhaseNotOpen));
        }
        validate_description(&description).map_err(|error| Self::reject(&env, error))?;

        let proposal_id = storage::push_proposal(
            &env,
            &Proposal {
                description,
                vote_count: 0,
            },
        );
        storage::bump_instance(&env);

        log!(&env, "proposal registered", proposal_id, caller);
        events::proposal_registered(&env, proposal_id);

        Ok(proposal_id)
    }

    pub fn get_one_proposal(
        env: Env,
        caller: Address,
        proposal_id: u32,
    ) -> Result<Proposal, VotingError> {
        Self::require_voter(&env, &caller)?;
        storage::get_proposal(&env, proposal_id)
            .ok_or_else(|| Self::reject(&env, VotingError::ProposalNotFound))
    }

    // ── Ballot ───────────────────────────────────────────────────────────────

    /// Cast the caller's single ballot for `proposal_id`.
    pub fn set_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        caller.require_auth();
        let mut voter = storage::get_voter(&env, &caller)
            .filter(|voter| voter.is_registered)
            .ok_or_else(|| Self::reject(&env, VotingError::NotAVoter))?;

        if storage::get_status(&env) != WorkflowStatus::VotingSessionStarted {
            return Err(Self::reject(&env, VotingError::VotingNotOpen));
        }
        if voter.has_voted {
            return Err(Self::reject(&env, VotingError::AlreadyVoted));
        }
        let mut proposal = storage::get_proposal(&env, proposal_id)
            .ok_or_else(|| Self::reject(&env, VotingError::ProposalNotFound))?;

        proposal.vote_count += 1;
        storage::save_proposal(&env, proposal_id, &proposal);

        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;
        storage::save_voter(&env, &caller, &voter);
        storage::increment_votes_cast(&env);
        storage::bump_instance(&env);

        log!(&env, "vote cast", caller, proposal_id);
        events::vote_cast(&env, &caller, proposal_id);

        Ok(())
    }

    // ── Workflow ─────────────────────────────────────────────────────────────

    /// Opens proposal registration and seeds the GENESIS placeholder at ID 0.
    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        Self::require_transition(&env, &caller, WorkflowStatus::RegisteringVoters)?;

        storage::push_proposal(
            &env,
            &Proposal {
                description: String::from_str(&env, GENESIS_DESCRIPTION),
                vote_count: 0,
            },
        );

        Self::advance(&env, WorkflowStatus::RegisteringVoters);
        Ok(())
    }

    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        Self::require_transition(&env, &caller, WorkflowStatus::ProposalsRegistrationStarted)?;
        Self::advance(&env, WorkflowStatus::ProposalsRegistrationStarted);
        Ok(())
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        Self::require_transition(&env, &caller, WorkflowStatus::ProposalsRegistrationEnded)?;
        Self::advance(&env, WorkflowStatus::ProposalsRegistrationEnded);
        Ok(())
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        Self::require_transition(&env, &caller, WorkflowStatus::VotingSessionStarted)?;
        Self::advance(&env, WorkflowStatus::VotingSessionStarted);
        Ok(())
    }

    /// Close the election: pick the plurality winner and move to
    /// `VotesTallied`. With no ballots at all the winner is the placeholder.
    pub fn tally_votes(env: Env, caller: Address) -> Result<(), VotingError> {
        Self::require_transition(&env, &caller, WorkflowStatus::VotingSessionEnded)?;

        let count = storage::get_proposal_count(&env);
        let winner = plurality_winner((0..count).map(|proposal_id| {
            storage::get_proposal(&env, proposal_id)
                .map(|proposal| proposal.vote_count)
                .unwrap_or(0)
        }));
        storage::set_winning_proposal_id(&env, winner);
        log!(&env, "votes tallied", winner, storage::get_votes_cast(&env));

        Self::advance(&env, WorkflowStatus::VotingSessionEnded);
        Ok(())
    }

    // ── Read-only Queries ────────────────────────────────────────────────────

    /// Stored winner. Reads 0 until the tally runs; check
    /// `workflow_status` or use `winning_proposal` to tell the cases apart.
    pub fn winning_proposal_id(env: Env) -> u32 {
        storage::get_winning_proposal_id(&env)
    }

    /// The winning proposal, available to voters once votes are tallied.
    pub fn winning_proposal(env: Env, caller: Address) -> Result<Proposal, VotingError> {
        Self::require_voter(&env, &caller)?;
        if storage::get_status(&env) != WorkflowStatus::VotesTallied {
            return Err(Self::reject(&env, VotingError::VotesNotTallied));
        }
        storage::get_proposal(&env, storage::get_winning_proposal_id(&env))
            .ok_or_else(|| Self::reject(&env, VotingError::ProposalNotFound))
    }

    pub fn workflow_status(env: Env) -> WorkflowStatus {
        storage::get_status(&env)
    }

    pub fn owner(env: Env) -> Option<Address> {
        storage::get_owner(&env)
    }

    /// Number of proposals, the GENESIS placeholder included.
    pub fn proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }

    pub fn voter_count(env: Env) -> u32 {
        storage::get_voter_count(&env)
    }

    pub fn votes_cast(env: Env) -> u32 {
        storage::get_votes_cast(&env)
    }

    // ── Internal Helpers ─────────────────────────────────────────────────────

    fn require_owner(env: &Env, caller: &Address) -> Result<(), VotingError> {
        caller.require_auth();
        match storage::get_owner(env) {
            Some(owner) if owner == *caller => Ok(()),
            _ => Err(Self::reject(env, VotingError::Unauthorized)),
        }
    }

    fn require_voter(env: &Env, caller: &Address) -> Result<(), VotingError> {
        caller.require_auth();
        if !storage::is_voter(env, caller) {
            return Err(Self::reject(env, VotingError::NotAVoter));
        }
        Ok(())
    }

    fn require_transition(
        env: &Env,
        caller: &Address,
        required: WorkflowStatus,
    ) -> Result<(), VotingError> {
        Self::require_owner(env, caller)?;

        let current = storage::get_status(env);
        if current != required {
            let expected = String::from_str(env, required.describe());
            log!(env, "invalid workflow transition", current, required, expected);
            return Err(Self::reject(env, VotingError::InvalidPhaseTransition));
        }
        Ok(())
    }

    /// Moves `from` to its successor. Only called after `require_transition`.
    fn advance(env: &Env, from: WorkflowStatus) {
        let Some(next) = from.next() else {
            return;
        };
        storage::set_status(env, next);
        storage::bump_instance(env);

        log!(env, "workflow status changed", from, next);
        events::workflow_changed(env, from, next);
    }

    fn reject(env: &Env, error: VotingError) -> VotingError {
        let reason = String::from_str(env, error.message());
        log!(env, "operation rejected", error as u32, reason, storage::get_status(env));
        error
    }
}
