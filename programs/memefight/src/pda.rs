use anchor_lang::prelude::*;

use crate::constants::{AUTHORITY_SEED, CONFIG_SEED, LP_MINT_SEED, TREASURY_SEED};
use crate::errors::MemefightError;

/// Signing identity that owns a pool's treasury and mints its LP tokens.
pub fn pool_authority(pool: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[AUTHORITY_SEED, pool.as_ref()], program_id)
}

/// Re-derives the pool authority from the bump stored on the pool.
pub fn pool_authority_address(pool: &Pubkey, bump: u8, program_id: &Pubkey) -> Result<Pubkey> {
    Pubkey::create_program_address(&[AUTHORITY_SEED, pool.as_ref(), &[bump]], program_id)
        .map_err(|_| error!(MemefightError::InvalidPoolAuthority))
}

pub fn pool_treasury(pool: &Pubkey, mint: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY_SEED, pool.as_ref(), mint.as_ref()], program_id)
}

pub fn pool_lp_mint(pool: &Pubkey, cycle: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[LP_MINT_SEED, pool.as_ref(), cycle.to_le_bytes().as_ref()],
        program_id,
    )
}

pub fn config(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED], program_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let pool = Pubkey::new_unique();
        assert_eq!(pool_authority(&pool, &crate::ID), pool_authority(&pool, &crate::ID));
        assert_eq!(pool_lp_mint(&pool, 3, &crate::ID), pool_lp_mint(&pool, 3, &crate::ID));
    }

    #[test]
    fn tags_and_pools_do_not_collide() {
        let pool = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let addresses = [
            pool_authority(&pool, &crate::ID).0,
            pool_authority(&other, &crate::ID).0,
            pool_treasury(&pool, &mint, &crate::ID).0,
            pool_treasury(&other, &mint, &crate::ID).0,
            pool_lp_mint(&pool, 0, &crate::ID).0,
            pool_lp_mint(&pool, 1, &crate::ID).0,
            pool_lp_mint(&other, 0, &crate::ID).0,
            config(&crate::ID).0,
        ];
        for (i, a) in addresses.iter().enumerate() {
            for b in &addresses[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn stored_bump_rederives_authority() {
        let pool = Pubkey::new_unique();
        let (authority, bump) = pool_authority(&pool, &crate::ID);
        assert_eq!(pool_authority_address(&pool, bump, &crate::ID).unwrap(), authority);
    }
}
