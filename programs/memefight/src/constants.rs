pub const AUTHORITY_SEED: &[u8] = b"authority";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const LP_MINT_SEED: &[u8] = b"lp";
pub const CONFIG_SEED: &[u8] = b"config";

/// LP mint generation a pool starts with. Bumped each time the pool loses a competition.
pub const GENESIS_CYCLE: u64 = 0;

pub const DISCRIMINATOR_SIZE: usize = 8;
