use anchor_lang::prelude::*;

use crate::constants::DISCRIMINATOR_SIZE;
use crate::errors::MemefightError;

#[account]
pub struct Competition {
    pub owner: Pubkey,
    /// Owner of pool B; equal to `owner` under the shared-owner policy
    pub co_owner: Pubkey,

    pub pool_a: Pubkey,
    pub pool_b: Pubkey,

    // LP mints at lock time
    pub pool_a_lp_mint: Pubkey,
    pub pool_b_lp_mint: Pubkey,

    /// Only key allowed to declare the winner
    pub resolver: Pubkey,

    pub is_a_winner: Option<bool>,

    /// Treasury balance moved from the losing pool on resolution
    pub settled_amount: u64,
}

impl Competition {
    pub const LEN: usize = DISCRIMINATOR_SIZE +
        32 + // owner
        32 + // co_owner
        32 + // pool_a
        32 + // pool_b
        32 + // pool_a_lp_mint
        32 + // pool_b_lp_mint
        32 + // resolver
        1 + 1 + // is_a_winner
        8; // settled_amount

    pub fn is_initialized(&self) -> bool {
        self.pool_a != Pubkey::default()
    }

    pub fn is_pending(&self) -> bool {
        self.is_a_winner.is_none()
    }

    pub fn winning_pool(&self, is_a_winner: bool) -> Pubkey {
        if is_a_winner {
            self.pool_a
        } else {
            self.pool_b
        }
    }

    pub fn losing_pool(&self, is_a_winner: bool) -> Pubkey {
        self.winning_pool(!is_a_winner)
    }

    pub fn resolve(&mut self, is_a_winner: bool) -> Result<()> {
        require!(self.is_pending(), MemefightError::CompetitionAlreadyResolved);
        self.is_a_winner = Some(is_a_winner);
        Ok(())
    }
}
