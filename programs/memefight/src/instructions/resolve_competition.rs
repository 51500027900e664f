use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{AUTHORITY_SEED, LP_MINT_SEED};
use crate::errors::MemefightError;
use crate::events::CompetitionResolved;
use crate::instructions::{require_fresh_lp_mint, PoolRef};
use crate::ledger::{Ledger, TokenLedger};
use crate::state::{Competition, Pool};

/// Declares the winner and settles the competition.
///
/// The losing treasury is emptied into the winning one and the losing pool
/// moves on to the LP mint of its next cycle, created here.
#[derive(Accounts)]
#[instruction(is_a_winner: bool)]
pub struct ResolveCompetition<'info> {
    #[account(mut)]
    pub resolver: Signer<'info>,

    #[account(
        mut,
        has_one = resolver @ MemefightError::Unauthorized,
        constraint = competition.is_pending() @ MemefightError::CompetitionAlreadyResolved
    )]
    pub competition: Box<Account<'info, Competition>>,

    #[account(
        mut,
        constraint = winning_pool.key() == competition.winning_pool(is_a_winner) @ MemefightError::PoolMismatch
    )]
    pub winning_pool: Box<Account<'info, Pool>>,

    #[account(mut, address = winning_pool.treasury @ MemefightError::InvalidTreasury)]
    pub winning_treasury: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = losing_pool.key() == competition.losing_pool(is_a_winner) @ MemefightError::PoolMismatch
    )]
    pub losing_pool: Box<Account<'info, Pool>>,

    #[account(mut, address = losing_pool.treasury @ MemefightError::InvalidTreasury)]
    pub losing_treasury: Box<Account<'info, TokenAccount>>,

    /// CHECK: PDA that owns the losing treasury and mints its LP tokens
    #[account(
        seeds = [AUTHORITY_SEED, losing_pool.key().as_ref()],
        bump = losing_pool.authority_bump
    )]
    pub losing_pool_authority: UncheckedAccount<'info>,

    #[account(address = losing_pool.mint @ MemefightError::MintMismatch)]
    pub pool_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = resolver,
        seeds = [
            LP_MINT_SEED,
            losing_pool.key().as_ref(),
            losing_pool.cycle.wrapping_add(1).to_le_bytes().as_ref()
        ],
        bump,
        mint::decimals = pool_mint.decimals,
        mint::authority = losing_pool_authority
    )]
    pub next_lp_mint: Box<Account<'info, Mint>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn resolve_competition(ctx: Context<ResolveCompetition>, is_a_winner: bool) -> Result<()> {
    msg!("resolve competition, pool a wins: {}", is_a_winner);

    let mut ledger = TokenLedger::new(
        *ctx.program_id,
        ctx.accounts.token_program.to_account_info(),
        vec![
            ctx.accounts.winning_treasury.to_account_info(),
            ctx.accounts.losing_treasury.to_account_info(),
            ctx.accounts.losing_pool_authority.to_account_info(),
            ctx.accounts.next_lp_mint.to_account_info(),
        ],
    );
    let resolver = ctx.accounts.resolver.key();
    let competition_key = ctx.accounts.competition.key();
    let next_lp_mint = ctx.accounts.next_lp_mint.key();
    let winner = PoolRef {
        key: ctx.accounts.winning_pool.key(),
        pool: &mut ctx.accounts.winning_pool,
    };
    let loser = PoolRef {
        key: ctx.accounts.losing_pool.key(),
        pool: &mut ctx.accounts.losing_pool,
    };
    let winning_pool = winner.key;
    let losing_pool = loser.key;

    let settled_amount = process_resolve_competition(
        &mut ledger,
        &resolver,
        &competition_key,
        &mut ctx.accounts.competition,
        is_a_winner,
        winner,
        loser,
        &next_lp_mint,
    )?;

    msg!(
        "pool {} takes {} from pool {}, next lp mint {}",
        winning_pool,
        settled_amount,
        losing_pool,
        next_lp_mint
    );
    emit!(CompetitionResolved {
        competition: competition_key,
        is_a_winner,
        winning_pool,
        losing_pool,
        settled_amount,
        next_lp_mint,
    });
    Ok(())
}

/// Returns the amount moved from the losing treasury to the winning one:
/// the loser's accounted assets.
#[allow(clippy::too_many_arguments)]
pub fn process_resolve_competition<L: Ledger>(
    ledger: &mut L,
    resolver: &Pubkey,
    competition_key: &Pubkey,
    competition: &mut Competition,
    is_a_winner: bool,
    winner: PoolRef,
    loser: PoolRef,
    next_lp_mint: &Pubkey,
) -> Result<u64> {
    require_keys_eq!(competition.resolver, *resolver, MemefightError::Unauthorized);
    require!(
        competition.is_pending(),
        MemefightError::CompetitionAlreadyResolved
    );

    require_keys_eq!(
        winner.key,
        competition.winning_pool(is_a_winner),
        MemefightError::PoolMismatch
    );
    require_keys_eq!(
        loser.key,
        competition.losing_pool(is_a_winner),
        MemefightError::PoolMismatch
    );
    for side in [&winner, &loser] {
        require!(
            side.pool.competition == Some(*competition_key),
            MemefightError::PoolMismatch
        );
    }

    require_keys_neq!(
        *next_lp_mint,
        loser.pool.pool_lp_mint,
        MemefightError::LpMintMismatch
    );
    require_fresh_lp_mint(ledger, &loser.key, loser.pool.authority_bump, next_lp_mint)?;
    let next_cycle = loser.pool.next_cycle()?;

    let settled_amount = loser.pool.total_assets;
    let winner_assets = winner
        .pool
        .total_assets
        .checked_add(settled_amount)
        .ok_or(MemefightError::MathOverflow)?;
    if settled_amount > 0 {
        ledger.transfer(
            &loser.pool.treasury,
            &winner.pool.treasury,
            &loser.pool.signer(loser.key),
            settled_amount,
        )?;
    }

    competition.resolve(is_a_winner)?;
    competition.settled_amount = settled_amount;
    winner.pool.total_assets = winner_assets;
    loser.pool.total_assets = 0;
    loser.pool.rotate_lp_mint(*next_lp_mint, next_cycle);
    winner.pool.release();
    loser.pool.release();
    Ok(settled_amount)
}
