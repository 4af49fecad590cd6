use solana_program::{program_error::ProgramError, pubkey::Pubkey};
use solana_program_test::{BanksClientError, ProgramTestError};
use thiserror::Error;

/// Result alias used by every harness operation.
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Error types for the test harness.
///
/// Variants fall into three groups: fatal setup errors (bootstrap, funding,
/// minting), failures reported by the ledger for a submitted transaction,
/// and assertion errors raised by the harness itself.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Program id string is not a valid address
    #[error("Invalid program id for {name}: {program_id}")]
    InvalidProgramId { name: String, program_id: String },

    /// Program fixture could not be read
    #[error("Failed to load program {name} from {path}: {reason}")]
    ProgramLoad {
        name: String,
        path: String,
        reason: String,
    },

    /// Secret key bytes do not form a valid keypair
    #[error("Invalid keypair: {0}")]
    InvalidKeypair(String),

    /// Transport-level failure talking to the banks server
    #[error("Banks client error: {0}")]
    Banks(#[from] BanksClientError),

    /// Ledger refused a warp request
    #[error("Warp failed: {0:?}")]
    Warp(ProgramTestError),

    /// Target slot is not ahead of the current slot
    #[error("Invalid warp: target slot {target} is not after current slot {current}")]
    InvalidWarp { current: u64, target: u64 },

    /// Instruction could not be built
    #[error("Instruction build failed: {0}")]
    Instruction(#[from] ProgramError),

    /// Expected account is missing from the ledger
    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    /// Account exists but its data does not decode
    #[error("Invalid account data for {account}: {reason}")]
    InvalidAccountData { account: Pubkey, reason: String },

    /// Scaled amount does not fit in u64
    #[error("Amount overflow: {amount} with {decimals} decimals")]
    AmountOverflow { amount: u64, decimals: u8 },

    /// Ledger processed the transaction and rejected it
    #[error("{result}; logs: {logs:?}")]
    TransactionFailed { result: String, logs: Vec<String> },

    /// An action expected to fail succeeded
    #[error("Expected an error but didn't get one")]
    MissingFailure,

    /// An action failed with the wrong message
    #[error("Unexpected error: {actual}. Expected error: {expected}")]
    UnexpectedError { actual: String, expected: String },
}

impl From<ProgramTestError> for HarnessError {
    fn from(e: ProgramTestError) -> Self {
        HarnessError::Warp(e)
    }
}
