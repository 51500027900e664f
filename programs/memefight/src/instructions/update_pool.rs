use anchor_lang::prelude::*;

use crate::errors::MemefightError;
use crate::events::PoolUpdated;
use crate::state::Pool;

#[derive(Accounts)]
pub struct UpdatePool<'info> {
    #[account(mut, has_one = owner @ MemefightError::Unauthorized)]
    pub pool: Account<'info, Pool>,

    pub owner: Signer<'info>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Default, Clone, Copy, Debug)]
pub struct UpdatePoolArgs {
    pub activation_th: u64,
    pub is_open: bool,
}

pub fn update_pool(ctx: Context<UpdatePool>, args: UpdatePoolArgs) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;

    process_update_pool(pool, &owner, args)?;

    msg!(
        "pool {} is_open = {} activation_th = {}",
        pool_key,
        pool.is_open,
        pool.activation_th
    );
    emit!(PoolUpdated {
        pool: pool_key,
        is_open: pool.is_open,
        activation_th: pool.activation_th,
    });
    Ok(())
}

pub fn process_update_pool(pool: &mut Pool, caller: &Pubkey, args: UpdatePoolArgs) -> Result<()> {
    pool.require_owner(caller)?;
    pool.require_unlocked()?;
    pool.update(args.is_open, args.activation_th);
    Ok(())
}
