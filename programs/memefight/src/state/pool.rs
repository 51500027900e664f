use anchor_lang::prelude::*;

use crate::constants::DISCRIMINATOR_SIZE;
use crate::errors::MemefightError;
use crate::ledger::Authority;

/// Deposit vault for one mint, issuing LP tokens against its treasury.
///
/// The treasury and the LP mint are both controlled by the pool authority
/// PDA, seeds `[b"authority", pool]`. Nobody holding a private key can move
/// treasury funds or mint LP tokens.
#[account]
pub struct Pool {
    /// Allowed to open/close the pool and change the threshold
    pub owner: Pubkey,
    /// Mint accepted by the treasury
    pub mint: Pubkey,
    /// Current LP mint; replaced when the pool loses a competition
    pub pool_lp_mint: Pubkey,
    pub treasury: Pubkey,
    /// Treasury tokens the LP supply has a claim on. Tokens sent to the
    /// treasury outside deposits are not counted.
    pub total_assets: u64,
    /// Accounted assets required before the pool can enter a competition
    pub activation_th: u64,
    pub is_open: bool,
    /// Competition holding this pool locked, if any
    pub competition: Option<Pubkey>,
    /// LP mint generation
    pub cycle: u64,
    pub authority_bump: u8,
    pub treasury_bump: u8,
}

impl Pool {
    pub const LEN: usize = DISCRIMINATOR_SIZE +
        32 + // owner
        32 + // mint
        32 + // pool_lp_mint
        32 + // treasury
        8 + // total_assets
        8 + // activation_th
        1 + // is_open
        1 + 32 + // competition
        8 + // cycle
        1 + // authority_bump
        1; // treasury_bump

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn signer(&self, pool: Pubkey) -> Authority {
        Authority::Pool {
            pool,
            bump: self.authority_bump,
        }
    }

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *caller, MemefightError::Unauthorized);
        Ok(())
    }

    pub fn require_open(&self) -> Result<()> {
        require!(self.is_open, MemefightError::PoolIsClosed);
        Ok(())
    }

    pub fn require_unlocked(&self) -> Result<()> {
        require!(self.competition.is_none(), MemefightError::PoolLocked);
        Ok(())
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn update(&mut self, is_open: bool, activation_th: u64) {
        self.is_open = is_open;
        self.activation_th = activation_th;
    }

    pub fn is_eligible(&self) -> bool {
        self.is_open && self.competition.is_none() && self.total_assets >= self.activation_th
    }

    pub fn lock(&mut self, competition: Pubkey) {
        self.is_open = false;
        self.competition = Some(competition);
    }

    pub fn release(&mut self) {
        self.is_open = true;
        self.competition = None;
    }

    /// Outstanding LP tokens of the old mint keep their balance but no
    /// longer redeem anything: the pool only recognises `lp_mint` from now on.
    pub fn rotate_lp_mint(&mut self, lp_mint: Pubkey, cycle: u64) {
        self.cycle = cycle;
        self.pool_lp_mint = lp_mint;
    }

    pub fn next_cycle(&self) -> Result<u64> {
        self.cycle
            .checked_add(1)
            .ok_or_else(|| error!(MemefightError::MathOverflow))
    }
}
