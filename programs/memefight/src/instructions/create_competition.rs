use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::CONFIG_SEED;
use crate::errors::MemefightError;
use crate::events::CompetitionCreated;
use crate::state::{Competition, CompetitionPolicy, Pool, ProgramConfig};

/// Locks two pools into a competition.
///
/// `co_owner` signs for pool B. Under the shared-owner policy it is the same
/// key as `owner`.
#[derive(Accounts)]
pub struct CreateCompetition<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Box<Account<'info, ProgramConfig>>,

    #[account(mut)]
    pub pool_a: Box<Account<'info, Pool>>,

    pub pool_a_lp_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        constraint = pool_b.key() != pool_a.key() @ MemefightError::SelfCompetitionNotAllowed
    )]
    pub pool_b: Box<Account<'info, Pool>>,

    pub pool_b_lp_mint: Box<Account<'info, Mint>>,

    #[account(init, payer = owner, space = Competition::LEN)]
    pub competition: Box<Account<'info, Competition>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub co_owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Clone, Copy, Debug)]
pub struct CompetitionSigners {
    pub owner: Pubkey,
    pub co_owner: Pubkey,
}

/// One side of a competition: the pool and the LP mint the caller named
/// for it.
pub struct Contender<'a> {
    pub key: Pubkey,
    pub pool: &'a mut Pool,
    pub lp_mint: Pubkey,
}

pub fn create_competition(ctx: Context<CreateCompetition>) -> Result<()> {
    msg!("create competition");

    let signers = CompetitionSigners {
        owner: ctx.accounts.owner.key(),
        co_owner: ctx.accounts.co_owner.key(),
    };
    let competition_key = ctx.accounts.competition.key();
    let pool_a = Contender {
        key: ctx.accounts.pool_a.key(),
        lp_mint: ctx.accounts.pool_a_lp_mint.key(),
        pool: &mut ctx.accounts.pool_a,
    };
    let pool_b = Contender {
        key: ctx.accounts.pool_b.key(),
        lp_mint: ctx.accounts.pool_b_lp_mint.key(),
        pool: &mut ctx.accounts.pool_b,
    };

    process_create_competition(
        &ctx.accounts.config,
        &signers,
        &competition_key,
        &mut ctx.accounts.competition,
        pool_a,
        pool_b,
    )?;

    let competition = &ctx.accounts.competition;
    msg!(
        "competition {} locks pools {} and {}",
        competition_key,
        competition.pool_a,
        competition.pool_b
    );
    emit!(CompetitionCreated {
        competition: competition_key,
        owner: competition.owner,
        pool_a: competition.pool_a,
        pool_b: competition.pool_b,
    });
    Ok(())
}

pub fn process_create_competition(
    config: &ProgramConfig,
    signers: &CompetitionSigners,
    competition_key: &Pubkey,
    competition: &mut Competition,
    a: Contender,
    b: Contender,
) -> Result<()> {
    require_keys_neq!(a.key, b.key, MemefightError::SelfCompetitionNotAllowed);

    if config.competition_policy == CompetitionPolicy::SharedOwner {
        require_keys_eq!(
            a.pool.owner,
            b.pool.owner,
            MemefightError::PoolAuthoritiesMismatch
        );
    }
    a.pool.require_owner(&signers.owner)?;
    b.pool.require_owner(&signers.co_owner)?;

    require_keys_eq!(a.pool.mint, b.pool.mint, MemefightError::MintMismatch);
    require_keys_eq!(a.lp_mint, a.pool.pool_lp_mint, MemefightError::LpMintMismatch);
    require_keys_eq!(b.lp_mint, b.pool.pool_lp_mint, MemefightError::LpMintMismatch);

    for contender in [&a, &b] {
        if !contender.pool.is_eligible() {
            msg!(
                "pool {} not eligible: open {}, assets {} of {}",
                contender.key,
                contender.pool.is_open,
                contender.pool.total_assets,
                contender.pool.activation_th
            );
            return err!(MemefightError::PoolNotEligible);
        }
    }
    require!(!competition.is_initialized(), MemefightError::AlreadyInitialized);

    competition.owner = signers.owner;
    competition.co_owner = signers.co_owner;
    competition.pool_a = a.key;
    competition.pool_b = b.key;
    competition.pool_a_lp_mint = a.lp_mint;
    competition.pool_b_lp_mint = b.lp_mint;
    competition.resolver = config.resolver;
    competition.is_a_winner = None;
    competition.settled_amount = 0;

    a.pool.lock(*competition_key);
    b.pool.lock(*competition_key);
    Ok(())
}
