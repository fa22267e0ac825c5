use soroban_sdk::{Address, Env};

use crate::types::{DataKey, Proposal, Voter, WorkflowStatus};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// ~5s per ledger. Entries are bumped back to 30 days whenever they drop
// below 29 days so an election cannot expire between phases.
const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_record(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

// ── Owner ────────────────────────────────────────────────────────────────────

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

// ── Workflow ─────────────────────────────────────────────────────────────────

pub fn get_status(env: &Env) -> WorkflowStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
}

pub fn get_winning_proposal_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::WinningProposalId)
        .unwrap_or(0u32)
}

pub fn set_winning_proposal_id(env: &Env, proposal_id: u32) {
    env.storage()
        .instance()
        .set(&DataKey::WinningProposalId, &proposal_id);
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn get_voter(env: &Env, address: &Address) -> Option<Voter> {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(address.clone()))
}

pub fn is_voter(env: &Env, address: &Address) -> bool {
    get_voter(env, address)
        .map(|voter| voter.is_registered)
        .unwrap_or(false)
}

pub fn save_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    bump_record(env, &key);
}

pub fn get_voter_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::VoterCount)
        .unwrap_or(0u32)
}

pub fn increment_voter_count(env: &Env) -> u32 {
    let count = get_voter_count(env) + 1;
    env.storage().persistent().set(&DataKey::VoterCount, &count);
    bump_record(env, &DataKey::VoterCount);
    count
}

pub fn get_votes_cast(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::VotesCast)
        .unwrap_or(0u32)
}

pub fn increment_votes_cast(env: &Env) -> u32 {
    let count = get_votes_cast(env) + 1;
    env.storage().persistent().set(&DataKey::VotesCast, &count);
    bump_record(env, &DataKey::VotesCast);
    count
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u32)
}

/// Appends at the next dense index and returns that index.
pub fn push_proposal(env: &Env, proposal: &Proposal) -> u32 {
    let proposal_id = get_proposal_count(env);
    save_proposal(env, proposal_id, proposal);
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &(proposal_id + 1));
    proposal_id
}

pub fn get_proposal(env: &Env, proposal_id: u32) -> Option<Proposal> {
    if proposal_id >= get_proposal_count(env) {
        return None;
    }
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}

pub fn save_proposal(env: &Env, proposal_id: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal_id);
    env.storage().persistent().set(&key, proposal);
    bump_record(env, &key);
}
