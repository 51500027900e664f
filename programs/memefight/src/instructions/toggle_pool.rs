use anchor_lang::prelude::*;

use crate::errors::MemefightError;
use crate::events::PoolUpdated;
use crate::state::Pool;

#[derive(Accounts)]
pub struct TogglePool<'info> {
    #[account(mut, has_one = owner @ MemefightError::Unauthorized)]
    pub pool: Account<'info, Pool>,

    pub owner: Signer<'info>,
}

pub fn toggle_pool(ctx: Context<TogglePool>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;

    process_toggle_pool(pool, &owner)?;

    msg!("pool {} is_open = {}", pool_key, pool.is_open);
    emit!(PoolUpdated {
        pool: pool_key,
        is_open: pool.is_open,
        activation_th: pool.activation_th,
    });
    Ok(())
}

pub fn process_toggle_pool(pool: &mut Pool, caller: &Pubkey) -> Result<()> {
    pool.require_owner(caller)?;
    pool.require_unlocked()?;
    pool.toggle();
    Ok(())
}
