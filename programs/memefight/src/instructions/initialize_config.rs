use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::errors::MemefightError;
use crate::events::ConfigUpdated;
use crate::state::{CompetitionPolicy, ProgramConfig};

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(
        init,
        payer = admin,
        space = ProgramConfig::LEN,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        constraint = program.programdata_address()? == Some(program_data.key())
            @ MemefightError::InvalidProgramData
    )]
    pub program: Program<'info, crate::program::Memefight>,

    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_config(
    ctx: Context<InitializeConfig>,
    competition_policy: CompetitionPolicy,
    resolver: Pubkey,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let upgrade_authority = ctx.accounts.program_data.upgrade_authority_address;
    let config = &mut ctx.accounts.config;

    process_initialize_config(
        config,
        admin,
        upgrade_authority,
        resolver,
        competition_policy,
        ctx.bumps.config,
    )?;

    msg!("config initialized, admin {} resolver {}", admin, resolver);
    emit!(ConfigUpdated {
        admin,
        resolver,
        competition_policy,
    });
    Ok(())
}

/// Only the program's upgrade authority may create the config.
pub fn process_initialize_config(
    config: &mut ProgramConfig,
    admin: Pubkey,
    upgrade_authority: Option<Pubkey>,
    resolver: Pubkey,
    competition_policy: CompetitionPolicy,
    bump: u8,
) -> Result<()> {
    require!(
        config.admin == Pubkey::default(),
        MemefightError::AlreadyInitialized
    );
    require!(
        upgrade_authority == Some(admin),
        MemefightError::Unauthorized
    );

    config.admin = admin;
    config.resolver = resolver;
    config.competition_policy = competition_policy;
    config.bump = bump;
    Ok(())
}
