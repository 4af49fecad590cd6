//! # Probe Program
//!
//! A minimal native program registered in place of a compiled fixture when a
//! test needs *some* program under test: it succeeds, rejects with a custom
//! error, or gates on the clock, which is enough to exercise the gateway,
//! the assertion utility and the time controller end to end.

use borsh::{BorshDeserialize, BorshSerialize};
use num_derive::FromPrimitive;
use solana_program::{
    account_info::AccountInfo,
    clock::Clock,
    entrypoint::ProgramResult,
    instruction::Instruction,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
    sysvar::Sysvar,
};
use solana_program_test::{processor, ProgramTest};
use thiserror::Error;

use crate::{constants::DEFAULT_LOG_FILTER, logging::init_logging};

solana_program::declare_id!("ProbeHarness1111111111111111111111111111111");

/// Fixture name the probe is registered under
pub const PROBE_PROGRAM_NAME: &str = "harness_probe";

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum ProbeInstruction {
    /// Always succeeds
    Ping,
    /// Always fails with `ProbeError::Rejected`
    Reject,
    /// Fails until the clock reaches `min_slot`
    RequireSlot { min_slot: u64 },
    /// Fails until the clock reaches `min_timestamp`
    RequireTimestamp { min_timestamp: i64 },
}

/// Errors returned by the probe program
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum ProbeError {
    #[error("Probe rejected the instruction")]
    Rejected = 6000,

    #[error("Required slot not reached")]
    SlotNotReached = 6001,

    #[error("Required timestamp not reached")]
    TimestampNotReached = 6002,
}

impl ProbeError {
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Decode a custom program error code
    pub fn from_code(code: u32) -> Option<Self> {
        num_traits::FromPrimitive::from_u32(code)
    }
}

impl From<ProbeError> for ProgramError {
    fn from(e: ProbeError) -> Self {
        ProgramError::Custom(e.code())
    }
}

/// Build a probe instruction (no accounts)
pub fn probe_instruction(instruction: &ProbeInstruction) -> Result<Instruction, ProgramError> {
    let data = instruction
        .try_to_vec()
        .map_err(|e| ProgramError::BorshIoError(e.to_string()))?;
    Ok(Instruction {
        program_id: id(),
        accounts: vec![],
        data,
    })
}

pub fn process_instruction(
    _program_id: &Pubkey,
    _accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = ProbeInstruction::try_from_slice(instruction_data)
        .map_err(|_| ProgramError::InvalidInstructionData)?;

    match instruction {
        ProbeInstruction::Ping => {
            msg!("Probe: ping");
            Ok(())
        }
        ProbeInstruction::Reject => {
            msg!("Probe: rejected");
            Err(ProbeError::Rejected.into())
        }
        ProbeInstruction::RequireSlot { min_slot } => {
            let clock = Clock::get()?;
            if clock.slot < min_slot {
                msg!("Probe: slot {} is before required slot {}", clock.slot, min_slot);
                return Err(ProbeError::SlotNotReached.into());
            }
            msg!("Probe: slot {} reached", clock.slot);
            Ok(())
        }
        ProbeInstruction::RequireTimestamp { min_timestamp } => {
            let clock = Clock::get()?;
            if clock.unix_timestamp < min_timestamp {
                msg!(
                    "Probe: timestamp {} is before required timestamp {}",
                    clock.unix_timestamp,
                    min_timestamp
                );
                return Err(ProbeError::TimestampNotReached.into());
            }
            Ok(())
        }
    }
}

/// A `ProgramTest` with the probe registered as a native program
pub fn program_test() -> ProgramTest {
    init_logging(DEFAULT_LOG_FILTER);
    let mut program_test = ProgramTest::default();
    program_test.prefer_bpf(false);
    program_test.add_program(PROBE_PROGRAM_NAME, id(), processor!(process_instruction));
    program_test
}
