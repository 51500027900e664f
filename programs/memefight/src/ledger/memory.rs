//! In-memory stand-in for the token program.

use std::collections::HashMap;

use anchor_lang::prelude::*;

use super::{Authority, Ledger};

#[derive(Clone, Debug)]
struct MintState {
    authority: Option<Pubkey>,
    freeze_authority: Option<Pubkey>,
    supply: u64,
}

#[derive(Clone, Debug)]
struct AccountState {
    mint: Pubkey,
    owner: Pubkey,
    amount: u64,
}

/// Mints and token accounts kept in hash maps, enforcing the same owner,
/// mint-authority and balance rules as the token program.
#[derive(Clone, Debug)]
pub struct MemoryLedger {
    program_id: Pubkey,
    mints: HashMap<Pubkey, MintState>,
    accounts: HashMap<Pubkey, AccountState>,
}

impl MemoryLedger {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            mints: HashMap::new(),
            accounts: HashMap::new(),
        }
    }

    pub fn create_mint(&mut self, mint: Pubkey, authority: Option<Pubkey>) -> Result<()> {
        if self.mints.contains_key(&mint) || self.accounts.contains_key(&mint) {
            return Err(ProgramError::AccountAlreadyInitialized.into());
        }
        self.mints.insert(
            mint,
            MintState {
                authority,
                freeze_authority: None,
                supply: 0,
            },
        );
        Ok(())
    }

    pub fn set_freeze_authority(&mut self, mint: &Pubkey, authority: Option<Pubkey>) -> Result<()> {
        self.mint_state_mut(mint)?.freeze_authority = authority;
        Ok(())
    }

    pub fn create_account(&mut self, account: Pubkey, mint: Pubkey, owner: Pubkey) -> Result<()> {
        if self.mints.contains_key(&account) || self.accounts.contains_key(&account) {
            return Err(ProgramError::AccountAlreadyInitialized.into());
        }
        if !self.mints.contains_key(&mint) {
            return Err(ProgramError::UninitializedAccount.into());
        }
        self.accounts.insert(account, AccountState { mint, owner, amount: 0 });
        Ok(())
    }

    /// Runs `f` the way a transaction runs: if it fails, every ledger change
    /// it made is discarded.
    pub fn transact<R>(&mut self, f: impl FnOnce(&mut Self) -> Result<R>) -> Result<R> {
        let snapshot = self.clone();
        let result = f(self);
        if result.is_err() {
            *self = snapshot;
        }
        result
    }

    fn mint_state(&self, mint: &Pubkey) -> Result<&MintState> {
        self.mints
            .get(mint)
            .ok_or_else(|| ProgramError::UninitializedAccount.into())
    }

    fn account_state(&self, account: &Pubkey) -> Result<&AccountState> {
        self.accounts
            .get(account)
            .ok_or_else(|| ProgramError::UninitializedAccount.into())
    }

    fn account_state_mut(&mut self, account: &Pubkey) -> Result<&mut AccountState> {
        self.accounts
            .get_mut(account)
            .ok_or_else(|| ProgramError::UninitializedAccount.into())
    }

    fn mint_state_mut(&mut self, mint: &Pubkey) -> Result<&mut MintState> {
        self.mints
            .get_mut(mint)
            .ok_or_else(|| ProgramError::UninitializedAccount.into())
    }

    fn require_account_owner(&self, account: &Pubkey, authority: &Authority) -> Result<()> {
        if self.account_state(account)?.owner != authority.address(&self.program_id)? {
            return Err(ProgramError::IllegalOwner.into());
        }
        Ok(())
    }
}

impl Ledger for MemoryLedger {
    fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    fn balance(&self, account: &Pubkey) -> Result<u64> {
        Ok(self.account_state(account)?.amount)
    }

    fn supply(&self, mint: &Pubkey) -> Result<u64> {
        Ok(self.mint_state(mint)?.supply)
    }

    fn mint_authority(&self, mint: &Pubkey) -> Result<Option<Pubkey>> {
        Ok(self.mint_state(mint)?.authority)
    }

    fn freeze_authority(&self, mint: &Pubkey) -> Result<Option<Pubkey>> {
        Ok(self.mint_state(mint)?.freeze_authority)
    }

    fn transfer(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        authority: &Authority,
        amount: u64,
    ) -> Result<()> {
        self.require_account_owner(from, authority)?;
        let source = self.account_state(from)?;
        if source.mint != self.account_state(to)?.mint {
            return Err(ProgramError::InvalidAccountData.into());
        }
        if source.amount < amount {
            return Err(ProgramError::InsufficientFunds.into());
        }

        self.account_state_mut(from)?.amount -= amount;
        let destination = self.account_state_mut(to)?;
        destination.amount = destination
            .amount
            .checked_add(amount)
            .ok_or(ProgramError::ArithmeticOverflow)?;
        Ok(())
    }

    fn mint_to(
        &mut self,
        mint: &Pubkey,
        to: &Pubkey,
        authority: &Authority,
        amount: u64,
    ) -> Result<()> {
        if self.mint_state(mint)?.authority != Some(authority.address(&self.program_id)?) {
            return Err(ProgramError::IllegalOwner.into());
        }
        if self.account_state(to)?.mint != *mint {
            return Err(ProgramError::InvalidAccountData.into());
        }

        let state = self.mint_state_mut(mint)?;
        state.supply = state
            .supply
            .checked_add(amount)
            .ok_or(ProgramError::ArithmeticOverflow)?;
        self.account_state_mut(to)?.amount += amount;
        Ok(())
    }

    fn burn(
        &mut self,
        mint: &Pubkey,
        from: &Pubkey,
        authority: &Authority,
        amount: u64,
    ) -> Result<()> {
        self.require_account_owner(from, authority)?;
        let source = self.account_state(from)?;
        if source.mint != *mint {
            return Err(ProgramError::InvalidAccountData.into());
        }
        if source.amount < amount {
            return Err(ProgramError::InsufficientFunds.into());
        }

        self.account_state_mut(from)?.amount -= amount;
        self.mint_state_mut(mint)?.supply -= amount;
        Ok(())
    }
}
