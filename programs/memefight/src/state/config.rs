use anchor_lang::prelude::*;

use crate::constants::DISCRIMINATOR_SIZE;

/// Who has to sign for two pools to be locked into a competition.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompetitionPolicy {
    /// Both pools have the same owner, who signs alone
    SharedOwner,
    /// Pools may have different owners; each owner signs
    CoSigned,
}

#[account]
pub struct ProgramConfig {
    pub admin: Pubkey,
    /// Recorded on every new competition as the key allowed to resolve it
    pub resolver: Pubkey,
    pub competition_policy: CompetitionPolicy,
    pub bump: u8,
}

impl ProgramConfig {
    pub const LEN: usize = DISCRIMINATOR_SIZE + 32 + 32 + 1 + 1;
}
