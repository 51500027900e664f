use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::errors::MemefightError;
use crate::events::ConfigUpdated;
use crate::state::{CompetitionPolicy, ProgramConfig};

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ MemefightError::Unauthorized
    )]
    pub config: Account<'info, ProgramConfig>,
}

/// Fields left as `None` keep their current value.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct UpdateConfigArgs {
    pub competition_policy: Option<CompetitionPolicy>,
    /// Applies to competitions created from now on
    pub resolver: Option<Pubkey>,
    pub admin: Option<Pubkey>,
}

pub fn update_config(ctx: Context<UpdateConfig>, args: UpdateConfigArgs) -> Result<()> {
    let caller = ctx.accounts.admin.key();
    let config = &mut ctx.accounts.config;

    process_update_config(config, &caller, args)?;

    msg!(
        "config updated, admin {} resolver {} policy {:?}",
        config.admin,
        config.resolver,
        config.competition_policy
    );
    emit!(ConfigUpdated {
        admin: config.admin,
        resolver: config.resolver,
        competition_policy: config.competition_policy,
    });
    Ok(())
}

pub fn process_update_config(
    config: &mut ProgramConfig,
    caller: &Pubkey,
    args: UpdateConfigArgs,
) -> Result<()> {
    require_keys_eq!(config.admin, *caller, MemefightError::Unauthorized);

    if let Some(competition_policy) = args.competition_policy {
        config.competition_policy = competition_policy;
    }
    if let Some(resolver) = args.resolver {
        config.resolver = resolver;
    }
    if let Some(admin) = args.admin {
        config.admin = admin;
    }
    Ok(())
}
