//! # Funding Service
//!
//! Moves native balance from a funded source to a destination with a signed
//! system transfer. Every call fetches its own blockhash and signs its own
//! transaction, so concurrent calls drawing on the same source are
//! independent requests; the ledger's sequential processing is what keeps
//! the source balance consistent.

use futures::future::try_join_all;
use log::debug;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer, system_instruction};

use crate::{
    error::HarnessResult,
    gateway::{process_or_fail, signed_transaction},
    ledger::Ledger,
};

/// Transfer `lamports` from `source` to `destination`.
///
/// `source` signs and pays the fee. Any failure is a fatal setup error.
pub async fn fund(
    ledger: &Ledger,
    source: &Keypair,
    destination: &Pubkey,
    lamports: u64,
) -> HarnessResult<()> {
    let transfer_ix = system_instruction::transfer(&source.pubkey(), destination, lamports);
    let transaction = signed_transaction(ledger, &[transfer_ix], source, &[]).await?;
    process_or_fail(ledger, transaction).await?;

    debug!("Funded {} with {} lamports from {}", destination, lamports, source.pubkey());
    Ok(())
}

/// Fund every destination concurrently and wait for all of them.
///
/// Destinations must be distinct; the first failure is returned.
pub async fn fund_many(
    ledger: &Ledger,
    source: &Keypair,
    destinations: &[Pubkey],
    lamports: u64,
) -> HarnessResult<()> {
    try_join_all(
        destinations
            .iter()
            .map(|destination| fund(ledger, source, destination, lamports)),
    )
    .await?;
    Ok(())
}
