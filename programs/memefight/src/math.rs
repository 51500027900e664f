use anchor_lang::prelude::*;

use crate::errors::MemefightError;

/// LP tokens minted for `amount` deposited into a treasury holding `vault`
/// against `supply` outstanding LP tokens.
///
/// An empty pool mints 1:1. Otherwise the depositor buys in at the current
/// share price, rounded down in favour of existing holders.
pub fn shares_for_deposit(amount: u64, vault: u64, supply: u64) -> Result<u64> {
    require!(amount > 0, MemefightError::InvalidAmount);

    if supply == 0 {
        return Ok(amount);
    }
    require!(vault > 0, MemefightError::PoolInsolvent);

    let shares = mul_div(amount, supply, vault)?;
    require!(shares > 0, MemefightError::InvalidAmount);
    Ok(shares)
}

/// Treasury tokens paid out for burning `shares` LP tokens.
pub fn assets_for_withdraw(shares: u64, vault: u64, supply: u64) -> Result<u64> {
    require!(shares > 0, MemefightError::InvalidAmount);
    require!(shares <= supply, MemefightError::InsufficientShares);

    if shares == supply {
        // last holder out takes the rounding dust too
        return Ok(vault);
    }
    mul_div(shares, vault, supply)
}

fn mul_div(a: u64, b: u64, denominator: u64) -> Result<u64> {
    let value = (a as u128)
        .checked_mul(b as u128)
        .ok_or(MemefightError::MathOverflow)?
        .checked_div(denominator as u128)
        .ok_or(MemefightError::MathOverflow)?;
    u64::try_from(value).map_err(|_| error!(MemefightError::MathOverflow))
}
