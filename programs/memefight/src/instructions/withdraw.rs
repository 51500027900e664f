use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::AUTHORITY_SEED;
use crate::errors::MemefightError;
use crate::events::Withdrawn;
use crate::instructions::UserAccounts;
use crate::ledger::{Authority, Ledger, TokenLedger};
use crate::math;
use crate::state::Pool;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub withdrawer: Signer<'info>,

    #[account(mut)]
    pub pool: Box<Account<'info, Pool>>,

    #[account(mut, address = pool.pool_lp_mint @ MemefightError::LpMintMismatch)]
    pub pool_lp_mint: Box<Account<'info, Mint>>,

    #[account(mut, address = pool.treasury @ MemefightError::InvalidTreasury)]
    pub pool_treasury: Box<Account<'info, TokenAccount>>,

    /// CHECK: PDA that owns the treasury
    #[account(seeds = [AUTHORITY_SEED, pool.key().as_ref()], bump = pool.authority_bump)]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = user_token_account.mint == pool.mint @ MemefightError::MintMismatch,
        constraint = user_token_account.owner == withdrawer.key() @ MemefightError::Unauthorized
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = user_lp_token_account.mint == pool.pool_lp_mint @ MemefightError::LpMintMismatch,
        constraint = user_lp_token_account.owner == withdrawer.key() @ MemefightError::Unauthorized
    )]
    pub user_lp_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    msg!("pool withdrawal of {} lp tokens", amount);

    let mut ledger = TokenLedger::new(
        *ctx.program_id,
        ctx.accounts.token_program.to_account_info(),
        vec![
            ctx.accounts.withdrawer.to_account_info(),
            ctx.accounts.pool_lp_mint.to_account_info(),
            ctx.accounts.pool_treasury.to_account_info(),
            ctx.accounts.pool_authority.to_account_info(),
            ctx.accounts.user_token_account.to_account_info(),
            ctx.accounts.user_lp_token_account.to_account_info(),
        ],
    );
    let user = UserAccounts {
        owner: ctx.accounts.withdrawer.key(),
        token_account: ctx.accounts.user_token_account.key(),
        lp_token_account: ctx.accounts.user_lp_token_account.key(),
    };
    let pool_key = ctx.accounts.pool.key();

    let payout = process_withdraw(
        &mut ledger,
        &pool_key,
        &mut ctx.accounts.pool,
        &user,
        amount,
    )?;

    msg!("paid {} to {}", payout, user.owner);
    emit!(Withdrawn {
        pool: pool_key,
        withdrawer: user.owner,
        shares: amount,
        amount: payout,
    });
    Ok(())
}

/// Burns `amount` LP tokens of the user and pays their share of the
/// treasury back. Returns the amount paid out.
pub fn process_withdraw<L: Ledger>(
    ledger: &mut L,
    pool_key: &Pubkey,
    pool: &mut Pool,
    user: &UserAccounts,
    amount: u64,
) -> Result<u64> {
    require!(amount > 0, MemefightError::InvalidAmount);
    pool.require_open()?;
    require!(
        ledger.balance(&user.lp_token_account)? >= amount,
        MemefightError::InsufficientShares
    );

    let supply = ledger.supply(&pool.pool_lp_mint)?;
    let payout = math::assets_for_withdraw(amount, pool.total_assets, supply)?;
    let total_assets = pool
        .total_assets
        .checked_sub(payout)
        .ok_or(MemefightError::MathOverflow)?;

    ledger.burn(
        &pool.pool_lp_mint,
        &user.lp_token_account,
        &Authority::Signer(user.owner),
        amount,
    )?;
    if payout > 0 {
        ledger.transfer(
            &pool.treasury,
            &user.token_account,
            &pool.signer(*pool_key),
            payout,
        )?;
    }

    pool.total_assets = total_assets;
    Ok(payout)
}
