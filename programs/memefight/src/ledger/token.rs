use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Burn, Mint, MintTo, TokenAccount, Transfer};

use super::{Authority, Ledger};
use crate::constants::AUTHORITY_SEED;
use crate::errors::MemefightError;

/// [`Ledger`] backed by the SPL token program.
///
/// Every account the instruction may touch has to be handed over up front.
/// Balances are read from the live account data, so they already reflect
/// CPIs made earlier in the same instruction.
pub struct TokenLedger<'info> {
    program_id: Pubkey,
    token_program: AccountInfo<'info>,
    accounts: Vec<AccountInfo<'info>>,
}

impl<'info> TokenLedger<'info> {
    pub fn new(
        program_id: Pubkey,
        token_program: AccountInfo<'info>,
        accounts: Vec<AccountInfo<'info>>,
    ) -> Self {
        Self {
            program_id,
            token_program,
            accounts,
        }
    }

    fn account(&self, key: &Pubkey) -> Result<AccountInfo<'info>> {
        self.accounts
            .iter()
            .find(|info| info.key == key)
            .cloned()
            .ok_or_else(|| error!(MemefightError::MissingLedgerAccount))
    }

    fn authority_account(&self, authority: &Authority) -> Result<AccountInfo<'info>> {
        self.account(&authority.address(&self.program_id)?)
    }

    fn token_account(&self, key: &Pubkey) -> Result<TokenAccount> {
        let info = self.account(key)?;
        let data = info.try_borrow_data()?;
        let account = TokenAccount::try_deserialize(&mut &data[..])?;
        Ok(account)
    }

    fn mint(&self, key: &Pubkey) -> Result<Mint> {
        let info = self.account(key)?;
        let data = info.try_borrow_data()?;
        let mint = Mint::try_deserialize(&mut &data[..])?;
        Ok(mint)
    }
}

/// Runs `f` with the seeds the program signs with for `authority`: none for
/// a transaction signer, the authority PDA seeds for a pool.
fn with_signer_seeds<R>(authority: &Authority, f: impl FnOnce(&[&[&[u8]]]) -> R) -> R {
    match authority {
        Authority::Signer(_) => f(&[]),
        Authority::Pool { pool, bump } => {
            let bump = [*bump];
            let seeds: [&[u8]; 3] = [AUTHORITY_SEED, pool.as_ref(), &bump];
            let signer: &[&[&[u8]]] = &[&seeds[..]];
            f(signer)
        }
    }
}

impl<'info> Ledger for TokenLedger<'info> {
    fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    fn balance(&self, account: &Pubkey) -> Result<u64> {
        Ok(self.token_account(account)?.amount)
    }

    fn supply(&self, mint: &Pubkey) -> Result<u64> {
        Ok(self.mint(mint)?.supply)
    }

    fn mint_authority(&self, mint: &Pubkey) -> Result<Option<Pubkey>> {
        Ok(match self.mint(mint)?.mint_authority {
            COption::Some(authority) => Some(authority),
            COption::None => None,
        })
    }

    fn freeze_authority(&self, mint: &Pubkey) -> Result<Option<Pubkey>> {
        Ok(match self.mint(mint)?.freeze_authority {
            COption::Some(authority) => Some(authority),
            COption::None => None,
        })
    }

    fn transfer(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        authority: &Authority,
        amount: u64,
    ) -> Result<()> {
        let accounts = Transfer {
            from: self.account(from)?,
            to: self.account(to)?,
            authority: self.authority_account(authority)?,
        };
        let program = self.token_program.clone();

        with_signer_seeds(authority, |signer| {
            token::transfer(CpiContext::new_with_signer(program, accounts, signer), amount)
        })
    }

    fn mint_to(
        &mut self,
        mint: &Pubkey,
        to: &Pubkey,
        authority: &Authority,
        amount: u64,
    ) -> Result<()> {
        let accounts = MintTo {
            mint: self.account(mint)?,
            to: self.account(to)?,
            authority: self.authority_account(authority)?,
        };
        let program = self.token_program.clone();

        with_signer_seeds(authority, |signer| {
            token::mint_to(CpiContext::new_with_signer(program, accounts, signer), amount)
        })
    }

    fn burn(
        &mut self,
        mint: &Pubkey,
        from: &Pubkey,
        authority: &Authority,
        amount: u64,
    ) -> Result<()> {
        let accounts = Burn {
            mint: self.account(mint)?,
            from: self.account(from)?,
            authority: self.authority_account(authority)?,
        };
        let program = self.token_program.clone();

        with_signer_seeds(authority, |signer| {
            token::burn(CpiContext::new_with_signer(program, accounts, signer), amount)
        })
    }
}
