use anchor_lang::prelude::*;

use crate::state::CompetitionPolicy;

#[event]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub resolver: Pubkey,
    pub competition_policy: CompetitionPolicy,
}

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub pool_lp_mint: Pubkey,
    pub activation_th: u64,
}

#[event]
pub struct PoolUpdated {
    pub pool: Pubkey,
    pub is_open: bool,
    pub activation_th: u64,
}

#[event]
pub struct Deposited {
    pub pool: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub shares: u64,
}

#[event]
pub struct Withdrawn {
    pub pool: Pubkey,
    pub withdrawer: Pubkey,
    pub shares: u64,
    pub amount: u64,
}

#[event]
pub struct CompetitionCreated {
    pub competition: Pubkey,
    pub owner: Pubkey,
    pub pool_a: Pubkey,
    pub pool_b: Pubkey,
}

#[event]
pub struct CompetitionResolved {
    pub competition: Pubkey,
    pub is_a_winner: bool,
    pub winning_pool: Pubkey,
    pub losing_pool: Pubkey,
    pub settled_amount: u64,
    pub next_lp_mint: Pubkey,
}
