use anchor_lang::prelude::*;

declare_id!("DXJSshXdu3wWyXppn8P8rgam48A2Xjj5W9QRweDLe4si");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod math;
pub mod pda;
pub mod state;

pub use instructions::*;
pub use state::*;

#[program]
pub mod memefight {
    use super::*;

    /// Create the program config; the upgrade authority signs and becomes its
    /// admin
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        competition_policy: CompetitionPolicy,
        resolver: Pubkey,
    ) -> Result<()> {
        instructions::initialize_config(ctx, competition_policy, resolver)
    }

    pub fn update_config(ctx: Context<UpdateConfig>, args: UpdateConfigArgs) -> Result<()> {
        instructions::update_config(ctx, args)
    }

    /// Create a pool together with its derived LP mint and treasury
    pub fn initialize_pool(ctx: Context<InitializePool>, activation_th: u64) -> Result<()> {
        instructions::initialize_pool(ctx, activation_th)
    }

    /// Create a pool around an existing, empty LP mint already minted by
    /// the pool authority
    pub fn initialize_pool_with_mint(
        ctx: Context<InitializePoolWithMint>,
        activation_th: u64,
    ) -> Result<()> {
        instructions::initialize_pool_with_mint(ctx, activation_th)
    }

    pub fn toggle_pool(ctx: Context<TogglePool>) -> Result<()> {
        instructions::toggle_pool(ctx)
    }

    pub fn update_pool(ctx: Context<UpdatePool>, args: UpdatePoolArgs) -> Result<()> {
        instructions::update_pool(ctx, args)
    }

    /// Deposit pool tokens and receive LP tokens
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Burn `amount` LP tokens and receive their share of the treasury
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    /// Lock two eligible pools into a competition
    pub fn create_competition(ctx: Context<CreateCompetition>) -> Result<()> {
        instructions::create_competition(ctx)
    }

    /// Only the competition's resolver can call this, and only once
    pub fn resolve_competition(ctx: Context<ResolveCompetition>, is_a_winner: bool) -> Result<()> {
        instructions::resolve_competition(ctx, is_a_winner)
    }
}
