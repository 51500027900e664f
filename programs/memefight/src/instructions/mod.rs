pub mod create_competition;
pub mod deposit;
pub mod initialize_config;
pub mod initialize_pool;
pub mod resolve_competition;
pub mod toggle_pool;
pub mod update_config;
pub mod update_pool;
pub mod withdraw;

pub use create_competition::*;
pub use deposit::*;
pub use initialize_config::*;
pub use initialize_pool::*;
pub use resolve_competition::*;
pub use toggle_pool::*;
pub use update_config::*;
pub use update_pool::*;
pub use withdraw::*;

use anchor_lang::prelude::*;

use crate::errors::MemefightError;
use crate::ledger::Ledger;
use crate::pda;
use crate::state::Pool;

/// Token accounts of the user depositing into or withdrawing from a pool.
#[derive(Clone, Copy, Debug)]
pub struct UserAccounts {
    pub owner: Pubkey,
    pub token_account: Pubkey,
    pub lp_token_account: Pubkey,
}

/// A pool account together with its address.
pub struct PoolRef<'a> {
    pub key: Pubkey,
    pub pool: &'a mut Pool,
}

/// An LP mint can only back a pool if the pool authority is its sole
/// minter, nobody else can freeze its accounts and nothing has been minted
/// yet.
pub(crate) fn require_fresh_lp_mint<L: Ledger>(
    ledger: &L,
    pool: &Pubkey,
    authority_bump: u8,
    lp_mint: &Pubkey,
) -> Result<()> {
    let authority = pda::pool_authority_address(pool, authority_bump, ledger.program_id())?;
    require!(
        ledger.mint_authority(lp_mint)? == Some(authority),
        MemefightError::InvalidMintAuthority
    );
    let freeze_authority = ledger.freeze_authority(lp_mint)?;
    require!(
        freeze_authority.is_none() || freeze_authority == Some(authority),
        MemefightError::InvalidFreezeAuthority
    );
    require!(ledger.supply(lp_mint)? == 0, MemefightError::LpMintNotEmpty);
    Ok(())
}
