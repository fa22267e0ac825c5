//! Notifications published for off-chain observers. The contract never reads
//! them back.
#![allow(deprecated)]

use soroban_sdk::{symbol_short, Address, Env};

use crate::types::WorkflowStatus;

pub fn workflow_changed(env: &Env, previous: WorkflowStatus, next: WorkflowStatus) {
    env.events()
        .publish((symbol_short!("workflow"),), (previous, next));
}

pub fn voter_registered(env: &Env, voter: &Address) {
    env.events()
        .publish((symbol_short!("voter"), symbol_short!("added")), voter.clone());
}

pub fn proposal_registered(env: &Env, proposal_id: u32) {
    env.events()
        .publish((symbol_short!("proposal"), symbol_short!("added")), proposal_id);
}

pub fn vote_cast(env: &Env, voter: &Address, proposal_id: u32) {
    env.events().publish(
        (symbol_short!("vote"), symbol_short!("cast")),
        (voter.clone(), proposal_id),
    );
}
