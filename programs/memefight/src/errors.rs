use anchor_lang::prelude::*;

#[error_code]
pub enum MemefightError {
    #[msg("Account is already initialized")]
    AlreadyInitialized,

    #[msg("LP mint authority must be the pool authority")]
    InvalidMintAuthority,

    #[msg("LP mint can only be frozen by the pool authority")]
    InvalidFreezeAuthority,

    #[msg("LP mint must have zero supply")]
    LpMintNotEmpty,

    #[msg("Signer is not allowed to perform this action")]
    Unauthorized,

    #[msg("Program data account does not belong to this program")]
    InvalidProgramData,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("A pool cannot compete against itself")]
    SelfCompetitionNotAllowed,

    #[msg("Pool is closed")]
    PoolIsClosed,

    #[msg("Pool is locked in a competition")]
    PoolLocked,

    #[msg("Pool is not eligible for a competition")]
    PoolNotEligible,

    #[msg("Competition is already resolved")]
    CompetitionAlreadyResolved,

    #[msg("LP balance insufficient")]
    InsufficientShares,

    #[msg("Pool has outstanding shares but an empty treasury")]
    PoolInsolvent,

    #[msg("Pools have different owners")]
    PoolAuthoritiesMismatch,

    #[msg("Pools accept different mints")]
    MintMismatch,

    #[msg("LP mint does not match the pool")]
    LpMintMismatch,

    #[msg("Pool does not belong to this competition")]
    PoolMismatch,

    #[msg("Treasury does not match the pool")]
    InvalidTreasury,

    #[msg("Stored bump does not derive a valid pool authority")]
    InvalidPoolAuthority,

    #[msg("Account was not provided to the ledger")]
    MissingLedgerAccount,

    #[msg("Math operation overflow")]
    MathOverflow,
}
