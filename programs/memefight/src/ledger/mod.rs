//! Token ledger the pools settle against.
//!
//! Instruction logic is written against [`Ledger`] so the same rules run
//! on-chain through token-program CPIs ([`TokenLedger`]) and in unit tests
//! against an in-memory fake.

use anchor_lang::prelude::*;

use crate::pda;

pub mod token;

#[cfg(test)]
pub mod memory;

pub use token::TokenLedger;

/// Who authorizes a ledger movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Authority {
    /// A key that signed the transaction
    Signer(Pubkey),
    /// A pool's derived authority; the ledger signs with its seeds
    Pool { pool: Pubkey, bump: u8 },
}

impl Authority {
    pub fn address(&self, program_id: &Pubkey) -> Result<Pubkey> {
        match self {
            Authority::Signer(key) => Ok(*key),
            Authority::Pool { pool, bump } => pda::pool_authority_address(pool, *bump, program_id),
        }
    }
}

pub trait Ledger {
    fn program_id(&self) -> &Pubkey;

    fn balance(&self, account: &Pubkey) -> Result<u64>;

    fn supply(&self, mint: &Pubkey) -> Result<u64>;

    fn mint_authority(&self, mint: &Pubkey) -> Result<Option<Pubkey>>;

    fn freeze_authority(&self, mint: &Pubkey) -> Result<Option<Pubkey>>;

    fn transfer(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        authority: &Authority,
        amount: u64,
    ) -> Result<()>;

    fn mint_to(
        &mut self,
        mint: &Pubkey,
        to: &Pubkey,
        authority: &Authority,
        amount: u64,
    ) -> Result<()>;

    fn burn(
        &mut self,
        mint: &Pubkey,
        from: &Pubkey,
        authority: &Authority,
        amount: u64,
    ) -> Result<()>;
}
