use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::AUTHORITY_SEED;
use crate::errors::MemefightError;
use crate::events::Deposited;
use crate::instructions::UserAccounts;
use crate::ledger::{Authority, Ledger, TokenLedger};
use crate::math;
use crate::state::Pool;

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(mut)]
    pub pool: Box<Account<'info, Pool>>,

    #[account(mut, address = pool.pool_lp_mint @ MemefightError::LpMintMismatch)]
    pub pool_lp_mint: Box<Account<'info, Mint>>,

    #[account(mut, address = pool.treasury @ MemefightError::InvalidTreasury)]
    pub pool_treasury: Box<Account<'info, TokenAccount>>,

    /// CHECK: PDA that mints LP tokens
    #[account(seeds = [AUTHORITY_SEED, pool.key().as_ref()], bump = pool.authority_bump)]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = user_token_account.mint == pool.mint @ MemefightError::MintMismatch,
        constraint = user_token_account.owner == depositor.key() @ MemefightError::Unauthorized
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = pool_lp_mint,
        associated_token::authority = depositor
    )]
    pub user_lp_token_account: Box<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    msg!("pool deposit of {}", amount);

    let mut ledger = TokenLedger::new(
        *ctx.program_id,
        ctx.accounts.token_program.to_account_info(),
        vec![
            ctx.accounts.depositor.to_account_info(),
            ctx.accounts.pool_lp_mint.to_account_info(),
            ctx.accounts.pool_treasury.to_account_info(),
            ctx.accounts.pool_authority.to_account_info(),
            ctx.accounts.user_token_account.to_account_info(),
            ctx.accounts.user_lp_token_account.to_account_info(),
        ],
    );
    let user = UserAccounts {
        owner: ctx.accounts.depositor.key(),
        token_account: ctx.accounts.user_token_account.key(),
        lp_token_account: ctx.accounts.user_lp_token_account.key(),
    };
    let pool_key = ctx.accounts.pool.key();

    let shares = process_deposit(
        &mut ledger,
        &pool_key,
        &mut ctx.accounts.pool,
        &user,
        amount,
    )?;

    msg!("minted {} lp tokens to {}", shares, user.owner);
    emit!(Deposited {
        pool: pool_key,
        depositor: user.owner,
        amount,
        shares,
    });
    Ok(())
}

/// Moves `amount` from the user into the treasury and mints LP tokens at
/// the current share price. Returns the LP tokens minted.
///
/// The share price is `total_assets / supply`. Tokens sent straight to the
/// treasury do not move it.
pub fn process_deposit<L: Ledger>(
    ledger: &mut L,
    pool_key: &Pubkey,
    pool: &mut Pool,
    user: &UserAccounts,
    amount: u64,
) -> Result<u64> {
    require!(amount > 0, MemefightError::InvalidAmount);
    pool.require_open()?;

    let supply = ledger.supply(&pool.pool_lp_mint)?;
    let shares = math::shares_for_deposit(amount, pool.total_assets, supply)?;
    let total_assets = pool
        .total_assets
        .checked_add(amount)
        .ok_or(MemefightError::MathOverflow)?;

    ledger.transfer(
        &user.token_account,
        &pool.treasury,
        &Authority::Signer(user.owner),
        amount,
    )?;
    ledger.mint_to(
        &pool.pool_lp_mint,
        &user.lp_token_account,
        &pool.signer(*pool_key),
        shares,
    )?;

    pool.total_assets = total_assets;
    Ok(shares)
}
