use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{AUTHORITY_SEED, GENESIS_CYCLE, LP_MINT_SEED, TREASURY_SEED};
use crate::errors::MemefightError;
use crate::events::PoolInitialized;
use crate::instructions::require_fresh_lp_mint;
use crate::ledger::{Ledger, TokenLedger};
use crate::state::Pool;

/// Creates a pool whose LP mint is derived from the pool address.
#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(init, payer = owner, space = Pool::LEN)]
    pub pool: Box<Account<'info, Pool>>,

    pub pool_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = owner,
        seeds = [LP_MINT_SEED, pool.key().as_ref(), GENESIS_CYCLE.to_le_bytes().as_ref()],
        bump,
        mint::decimals = pool_mint.decimals,
        mint::authority = pool_authority
    )]
    pub pool_lp_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = owner,
        seeds = [TREASURY_SEED, pool.key().as_ref(), pool_mint.key().as_ref()],
        bump,
        token::mint = pool_mint,
        token::authority = pool_authority
    )]
    pub pool_treasury: Box<Account<'info, TokenAccount>>,

    /// CHECK: PDA that owns the treasury and mints LP tokens
    #[account(seeds = [AUTHORITY_SEED, pool.key().as_ref()], bump)]
    pub pool_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

/// Creates a pool around an LP mint created beforehand.
///
/// The mint must already name the pool authority as its mint authority and
/// have nothing minted.
#[derive(Accounts)]
pub struct InitializePoolWithMint<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(init, payer = owner, space = Pool::LEN)]
    pub pool: Box<Account<'info, Pool>>,

    pub pool_mint: Box<Account<'info, Mint>>,

    pub pool_lp_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = owner,
        seeds = [TREASURY_SEED, pool.key().as_ref(), pool_mint.key().as_ref()],
        bump,
        token::mint = pool_mint,
        token::authority = pool_authority
    )]
    pub pool_treasury: Box<Account<'info, TokenAccount>>,

    /// CHECK: PDA that owns the treasury and mints LP tokens
    #[account(seeds = [AUTHORITY_SEED, pool.key().as_ref()], bump)]
    pub pool_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub struct PoolSetup {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub pool_lp_mint: Pubkey,
    pub treasury: Pubkey,
    pub activation_th: u64,
    pub authority_bump: u8,
    pub treasury_bump: u8,
}

pub fn initialize_pool(ctx: Context<InitializePool>, activation_th: u64) -> Result<()> {
    msg!("pool initialization, derived lp mint");

    let ledger = TokenLedger::new(
        *ctx.program_id,
        ctx.accounts.token_program.to_account_info(),
        vec![ctx.accounts.pool_lp_mint.to_account_info()],
    );
    let setup = PoolSetup {
        owner: ctx.accounts.owner.key(),
        mint: ctx.accounts.pool_mint.key(),
        pool_lp_mint: ctx.accounts.pool_lp_mint.key(),
        treasury: ctx.accounts.pool_treasury.key(),
        activation_th,
        authority_bump: ctx.bumps.pool_authority,
        treasury_bump: ctx.bumps.pool_treasury,
    };
    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;

    process_initialize_pool(&ledger, &pool_key, pool, setup)?;
    emit_initialized(&pool_key, pool);
    Ok(())
}

pub fn initialize_pool_with_mint(
    ctx: Context<InitializePoolWithMint>,
    activation_th: u64,
) -> Result<()> {
    msg!("pool initialization, supplied lp mint");

    let ledger = TokenLedger::new(
        *ctx.program_id,
        ctx.accounts.token_program.to_account_info(),
        vec![ctx.accounts.pool_lp_mint.to_account_info()],
    );
    let setup = PoolSetup {
        owner: ctx.accounts.owner.key(),
        mint: ctx.accounts.pool_mint.key(),
        pool_lp_mint: ctx.accounts.pool_lp_mint.key(),
        treasury: ctx.accounts.pool_treasury.key(),
        activation_th,
        authority_bump: ctx.bumps.pool_authority,
        treasury_bump: ctx.bumps.pool_treasury,
    };
    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;

    process_initialize_pool(&ledger, &pool_key, pool, setup)?;
    emit_initialized(&pool_key, pool);
    Ok(())
}

fn emit_initialized(pool_key: &Pubkey, pool: &Pool) {
    msg!("pool {} owner {} threshold {}", pool_key, pool.owner, pool.activation_th);
    emit!(PoolInitialized {
        pool: *pool_key,
        owner: pool.owner,
        mint: pool.mint,
        pool_lp_mint: pool.pool_lp_mint,
        activation_th: pool.activation_th,
    });
}

pub fn process_initialize_pool<L: Ledger>(
    ledger: &L,
    pool_key: &Pubkey,
    pool: &mut Pool,
    setup: PoolSetup,
) -> Result<()> {
    require!(!pool.is_initialized(), MemefightError::AlreadyInitialized);
    require_fresh_lp_mint(ledger, pool_key, setup.authority_bump, &setup.pool_lp_mint)?;

    pool.owner = setup.owner;
    pool.mint = setup.mint;
    pool.pool_lp_mint = setup.pool_lp_mint;
    pool.treasury = setup.treasury;
    pool.total_assets = 0;
    pool.activation_th = setup.activation_th;
    pool.is_open = true;
    pool.competition = None;
    pool.cycle = GENESIS_CYCLE;
    pool.authority_bump = setup.authority_bump;
    pool.treasury_bump = setup.treasury_bump;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::testing::{empty_pool, Market};
    use crate::ledger::Authority;
    use crate::pda;

    fn setup_for(market: &Market, key: &Pubkey, lp_mint: Pubkey) -> PoolSetup {
        let (_, authority_bump) = pda::pool_authority(key, &crate::ID);
        let (treasury, treasury_bump) = pda::pool_treasury(key, &market.mint, &crate::ID);
        PoolSetup {
            owner: Pubkey::new_unique(),
            mint: market.mint,
            pool_lp_mint: lp_mint,
            treasury,
            activation_th: 1234,
            authority_bump,
            treasury_bump,
        }
    }

    #[test]
    fn initializes_an_open_pool() {
        let mut market = Market::new();
        let owner = Pubkey::new_unique();
        let (key, pool) = market.open_pool(owner, 1234);

        assert!(pool.is_open);
        assert_eq!(pool.activation_th, 1234);
        assert_eq!(pool.owner, owner);
        assert_eq!(pool.mint, market.mint);
        assert_eq!(pool.pool_lp_mint, pda::pool_lp_mint(&key, GENESIS_CYCLE, &crate::ID).0);
        assert_eq!(pool.competition, None);
        assert_eq!(market.ledger.balance(&pool.treasury).unwrap(), 0);
        assert_eq!(
            market.ledger.mint_authority(&pool.pool_lp_mint).unwrap(),
            Some(pda::pool_authority(&key, &crate::ID).0)
        );
    }

    #[test]
    fn rejects_an_initialized_pool() {
        let mut market = Market::new();
        let (key, mut pool) = market.open_pool(Pubkey::new_unique(), 10);
        let setup = setup_for(&market, &key, pool.pool_lp_mint);
        let owner = pool.owner;

        let err = process_initialize_pool(&market.ledger, &key, &mut pool, setup).unwrap_err();
        assert_eq!(err, MemefightError::AlreadyInitialized.into());
        assert_eq!(pool.owner, owner);
    }

    #[test]
    fn supplied_mint_needs_the_pool_authority() {
        let mut market = Market::new();
        let key = Pubkey::new_unique();
        let lp_mint = Pubkey::new_unique();
        market.ledger.create_mint(lp_mint, Some(Pubkey::new_unique())).unwrap();
        let setup = setup_for(&market, &key, lp_mint);

        let mut pool = empty_pool();
        let err = process_initialize_pool(&market.ledger, &key, &mut pool, setup).unwrap_err();
        assert_eq!(err, MemefightError::InvalidMintAuthority.into());
        assert!(!pool.is_initialized());
    }

    #[test]
    fn supplied_mint_must_be_empty() {
        let mut market = Market::new();
        let key = Pubkey::new_unique();
        let (authority, bump) = pda::pool_authority(&key, &crate::ID);
        let lp_mint = Pubkey::new_unique();
        market.ledger.create_mint(lp_mint, Some(authority)).unwrap();
        let stray = Pubkey::new_unique();
        market.ledger.create_account(stray, lp_mint, Pubkey::new_unique()).unwrap();
        market
            .ledger
            .mint_to(&lp_mint, &stray, &Authority::Pool { pool: key, bump }, 1)
            .unwrap();
        let setup = setup_for(&market, &key, lp_mint);

        let mut pool = empty_pool();
        let err = process_initialize_pool(&market.ledger, &key, &mut pool, setup).unwrap_err();
        assert_eq!(err, MemefightError::LpMintNotEmpty.into());
    }

    #[test]
    fn supplied_mint_cannot_be_frozen_by_someone_else() {
        let mut market = Market::new();
        let key = Pubkey::new_unique();
        let (authority, _) = pda::pool_authority(&key, &crate::ID);
        let lp_mint = Pubkey::new_unique();
        market.ledger.create_mint(lp_mint, Some(authority)).unwrap();
        market
            .ledger
            .set_freeze_authority(&lp_mint, Some(Pubkey::new_unique()))
            .unwrap();
        let setup = setup_for(&market, &key, lp_mint);

        let mut pool = empty_pool();
        let err = process_initialize_pool(&market.ledger, &key, &mut pool, setup).unwrap_err();
        assert_eq!(err, MemefightError::InvalidFreezeAuthority.into());
        assert!(!pool.is_initialized());

        market.ledger.set_freeze_authority(&lp_mint, Some(authority)).unwrap();
        let setup = setup_for(&market, &key, lp_mint);
        process_initialize_pool(&market.ledger, &key, &mut pool, setup).unwrap();
        assert_eq!(pool.pool_lp_mint, lp_mint);
    }

    #[test]
    fn accepts_a_prepared_mint() {
        let mut market = Market::new();
        let key = Pubkey::new_unique();
        let (authority, _) = pda::pool_authority(&key, &crate::ID);
        let lp_mint = Pubkey::new_unique();
        market.ledger.create_mint(lp_mint, Some(authority)).unwrap();
        let setup = setup_for(&market, &key, lp_mint);

        let mut pool = empty_pool();
        process_initialize_pool(&market.ledger, &key, &mut pool, setup).unwrap();
        assert!(pool.is_open);
        assert_eq!(pool.pool_lp_mint, lp_mint);
    }
}
