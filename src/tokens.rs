//! # Asset Provisioner
//!
//! Creates token mints and distributes balances to test actors under either
//! the legacy SPL Token program or Token-2022.
//!
//! Token accounts are always associated token accounts, created idempotently
//! in the same transaction as the first mint to them. Calls that touch
//! different (mint, owner) pairs may run concurrently; calls for the same
//! pair must be awaited one after the other by the caller.

use log::debug;
use solana_program::program_pack::Pack;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer, system_instruction};
use spl_associated_token_account::{
    get_associated_token_address_with_program_id,
    instruction::create_associated_token_account_idempotent,
};
use spl_token_2022::{
    extension::StateWithExtensions,
    state::{Account as TokenAccountState, Mint as MintState},
};

use crate::{
    error::{HarnessError, HarnessResult},
    gateway::build_and_process,
    ledger::Ledger,
};

/// Token standard used for a mint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenProgram {
    /// SPL Token
    Legacy,
    /// SPL Token-2022 (extensions enabled)
    Token2022,
}

impl TokenProgram {
    pub fn from_extensions(use_extensions: bool) -> Self {
        if use_extensions {
            TokenProgram::Token2022
        } else {
            TokenProgram::Legacy
        }
    }

    pub fn uses_extensions(&self) -> bool {
        matches!(self, TokenProgram::Token2022)
    }

    /// On-chain program id
    pub fn id(&self) -> Pubkey {
        match self {
            TokenProgram::Legacy => spl_token::id(),
            TokenProgram::Token2022 => spl_token_2022::id(),
        }
    }
}

/// Decoded mint state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintInfo {
    pub address: Pubkey,
    pub token_program: Pubkey,
    pub mint_authority: Option<Pubkey>,
    pub freeze_authority: Option<Pubkey>,
    pub supply: u64,
    pub decimals: u8,
}

/// Decoded token account state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAccountInfo {
    pub address: Pubkey,
    pub token_program: Pubkey,
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub is_native: bool,
}

/// Scale a whole-unit amount to raw units
///
/// # Examples
/// ```
/// use cp_amm_test_harness::tokens::ui_to_raw;
/// assert_eq!(ui_to_raw(1_000_000, 6).unwrap(), 1_000_000_000_000);
/// ```
pub fn ui_to_raw(amount: u64, decimals: u8) -> HarnessResult<u64> {
    10u64
        .checked_pow(decimals as u32)
        .and_then(|scale| amount.checked_mul(scale))
        .ok_or(HarnessError::AmountOverflow { amount, decimals })
}

/// Associated token account of `owner` for `mint`
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey, token_program: TokenProgram) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, &token_program.id())
}

/// Create a mint whose mint and freeze authority is `authority`
///
/// # Arguments
/// * `payer` - Pays rent and fees
/// * `mint` - Keypair of the new mint account
/// * `authority` - Mint and freeze authority
/// * `decimals` - Decimal places
/// * `token_program` - Token standard
pub async fn create_mint(
    ledger: &Ledger,
    payer: &Keypair,
    mint: &Keypair,
    authority: &Pubkey,
    decimals: u8,
    token_program: TokenProgram,
) -> HarnessResult<()> {
    let rent = ledger.get_rent().await?;
    let program_id = token_program.id();

    let create_account_ix = system_instruction::create_account(
        &payer.pubkey(),
        &mint.pubkey(),
        rent.minimum_balance(MintState::LEN),
        MintState::LEN as u64,
        &program_id,
    );

    let initialize_mint_ix = match token_program {
        TokenProgram::Legacy => spl_token::instruction::initialize_mint2(
            &program_id,
            &mint.pubkey(),
            authority,
            Some(authority),
            decimals,
        )?,
        TokenProgram::Token2022 => spl_token_2022::instruction::initialize_mint2(
            &program_id,
            &mint.pubkey(),
            authority,
            Some(authority),
            decimals,
        )?,
    };

    build_and_process(ledger, &[create_account_ix, initialize_mint_ix], payer, &[mint]).await?;

    debug!("Created mint {} ({:?}, {} decimals)", mint.pubkey(), token_program, decimals);
    Ok(())
}

/// Mint `raw_amount` to the associated token account of `destination`,
/// creating it if absent. Returns the token account address.
pub async fn mint_to(
    ledger: &Ledger,
    payer: &Keypair,
    mint: &Pubkey,
    authority: &Keypair,
    destination: &Pubkey,
    raw_amount: u64,
    token_program: TokenProgram,
) -> HarnessResult<Pubkey> {
    let program_id = token_program.id();
    let token_account = associated_token_address(destination, mint, token_program);

    let create_ata_ix =
        create_associated_token_account_idempotent(&payer.pubkey(), destination, mint, &program_id);

    let mint_to_ix = match token_program {
        TokenProgram::Legacy => spl_token::instruction::mint_to(
            &program_id,
            mint,
            &token_account,
            &authority.pubkey(),
            &[],
            raw_amount,
        )?,
        TokenProgram::Token2022 => spl_token_2022::instruction::mint_to(
            &program_id,
            mint,
            &token_account,
            &authority.pubkey(),
            &[],
            raw_amount,
        )?,
    };

    build_and_process(ledger, &[create_ata_ix, mint_to_ix], payer, &[authority]).await?;

    debug!("Minted {} of {} to {}", raw_amount, mint, destination);
    Ok(token_account)
}

/// Wrap `lamports` of `owner`'s SOL into their native-mint token account
pub async fn wrap_native(ledger: &Ledger, owner: &Keypair, lamports: u64) -> HarnessResult<Pubkey> {
    let native_mint = spl_token::native_mint::id();
    let token_account = associated_token_address(&owner.pubkey(), &native_mint, TokenProgram::Legacy);

    let instructions = [
        create_associated_token_account_idempotent(
            &owner.pubkey(),
            &owner.pubkey(),
            &native_mint,
            &spl_token::id(),
        ),
        system_instruction::transfer(&owner.pubkey(), &token_account, lamports),
        spl_token::instruction::sync_native(&spl_token::id(), &token_account)?,
    ];

    build_and_process(ledger, &instructions, owner, &[]).await?;
    Ok(token_account)
}

/// Fetch and decode a mint
pub async fn get_mint(ledger: &Ledger, mint: &Pubkey) -> HarnessResult<MintInfo> {
    let account = ledger
        .get_account(mint)
        .await?
        .ok_or(HarnessError::AccountNotFound(*mint))?;

    let state = StateWithExtensions::<MintState>::unpack(&account.data).map_err(|e| {
        HarnessError::InvalidAccountData {
            account: *mint,
            reason: e.to_string(),
        }
    })?;

    Ok(MintInfo {
        address: *mint,
        token_program: account.owner,
        mint_authority: state.base.mint_authority.into(),
        freeze_authority: state.base.freeze_authority.into(),
        supply: state.base.supply,
        decimals: state.base.decimals,
    })
}

/// Fetch and decode a token account
pub async fn get_token_account(ledger: &Ledger, address: &Pubkey) -> HarnessResult<TokenAccountInfo> {
    let account = ledger
        .get_account(address)
        .await?
        .ok_or(HarnessError::AccountNotFound(*address))?;

    let state = StateWithExtensions::<TokenAccountState>::unpack(&account.data).map_err(|e| {
        HarnessError::InvalidAccountData {
            account: *address,
            reason: e.to_string(),
        }
    })?;

    Ok(TokenAccountInfo {
        address: *address,
        token_program: account.owner,
        mint: state.base.mint,
        owner: state.base.owner,
        amount: state.base.amount,
        is_native: state.base.is_native(),
    })
}

/// Balance of `owner`'s associated token account, 0 if it does not exist
pub async fn get_token_balance(
    ledger: &Ledger,
    owner: &Pubkey,
    mint: &Pubkey,
    token_program: TokenProgram,
) -> HarnessResult<u64> {
    let address = associated_token_address(owner, mint, token_program);
    match get_token_account(ledger, &address).await {
        Ok(info) => Ok(info.amount),
        Err(HarnessError::AccountNotFound(_)) => Ok(0),
        Err(e) => Err(e),
    }
}
