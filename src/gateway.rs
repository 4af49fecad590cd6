/*
MIT License

Copyright (c) 2024 Davinci

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! # Transaction Submission Gateway
//!
//! Two ways into the ledger:
//!
//! - [`process_or_fail`] turns a rejected transaction into
//!   `HarnessError::TransactionFailed`, carrying the ledger's raw result
//!   string and the program logs.
//! - [`submit`] hands back the raw [`TransactionOutcome`] so a test can
//!   inspect the failure itself.
//!
//! Neither retries. The transaction must already carry a fresh blockhash and
//! every signature; both paths verify signatures before anything is sent.

use log::debug;
use solana_sdk::{
    instruction::Instruction,
    sanitize::Sanitize,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::{Transaction, TransactionError},
};

use crate::{
    error::{HarnessError, HarnessResult},
    ledger::Ledger,
};

/// Raw result of a processed transaction
#[derive(Debug, Clone)]
pub struct TransactionOutcome {
    pub signature: Signature,
    pub result: Result<(), TransactionError>,
    pub logs: Vec<String>,
    pub compute_units_consumed: u64,
}

impl TransactionOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// The ledger's result string, if the transaction failed
    pub fn error_message(&self) -> Option<String> {
        self.result.as_ref().err().map(|e| e.to_string())
    }

    /// True if any log line contains `fragment`
    pub fn logs_contain(&self, fragment: &str) -> bool {
        self.logs.iter().any(|line| line.contains(fragment))
    }
}

/// Signature and shape checks the banks server skips on this path
fn verify_signatures(transaction: &Transaction) -> Result<(), TransactionError> {
    transaction.sanitize()?;
    transaction
        .verify()
        .map_err(|_| TransactionError::SignatureFailure)
}

/// Submit a transaction and return the raw outcome.
///
/// Only transport failures are errors here; a transaction the ledger rejects
/// comes back as an outcome with `result` set to the error. A transaction
/// whose signatures do not verify is rejected before it reaches the ledger.
pub async fn submit(ledger: &Ledger, transaction: Transaction) -> HarnessResult<TransactionOutcome> {
    let signature = transaction.signatures.first().copied().unwrap_or_default();

    if let Err(err) = verify_signatures(&transaction) {
        debug!("Transaction {} rejected before submission: {}", signature, err);
        return Ok(TransactionOutcome {
            signature,
            result: Err(err),
            logs: Vec::new(),
            compute_units_consumed: 0,
        });
    }

    let mut banks = ledger.banks_client();
    let processed = banks.process_transaction_with_metadata(transaction).await?;

    let (logs, compute_units_consumed) = processed
        .metadata
        .map(|meta| (meta.log_messages, meta.compute_units_consumed))
        .unwrap_or_default();

    Ok(TransactionOutcome {
        signature,
        result: processed.result,
        logs,
        compute_units_consumed,
    })
}

/// Submit a transaction and fail if the ledger rejects it
pub async fn process_or_fail(
    ledger: &Ledger,
    transaction: Transaction,
) -> HarnessResult<TransactionOutcome> {
    let outcome = submit(ledger, transaction).await?;

    if let Err(err) = &outcome.result {
        let result = err.to_string();
        debug!("Transaction {} failed: {}", outcome.signature, result);
        return Err(HarnessError::TransactionFailed {
            result,
            logs: outcome.logs,
        });
    }

    Ok(outcome)
}

/// Sign `instructions` against a blockhash fetched right now
pub async fn signed_transaction(
    ledger: &Ledger,
    instructions: &[Instruction],
    payer: &Keypair,
    extra_signers: &[&Keypair],
) -> HarnessResult<Transaction> {
    let recent_blockhash = ledger.latest_blockhash().await?;

    let mut signers: Vec<&Keypair> = Vec::with_capacity(extra_signers.len() + 1);
    signers.push(payer);
    signers.extend_from_slice(extra_signers);

    Ok(Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        signers.as_slice(),
        recent_blockhash,
    ))
}

/// Build, sign and process `instructions`, failing on rejection
pub async fn build_and_process(
    ledger: &Ledger,
    instructions: &[Instruction],
    payer: &Keypair,
    extra_signers: &[&Keypair],
) -> HarnessResult<TransactionOutcome> {
    let transaction = signed_transaction(ledger, instructions, payer, extra_signers).await?;
    process_or_fail(ledger, transaction).await
}
