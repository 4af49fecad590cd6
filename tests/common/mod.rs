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

//! # Common Test Utilities
//!
//! Shared helpers for the harness integration tests:
//!
//! - Ledger starters with the probe program registered
//! - Token balance assertions
//! - Test constants

pub mod setup;
pub mod tokens;

#[allow(unused_imports)]
pub use setup::*;
#[allow(unused_imports)]
pub use tokens::*;

#[allow(unused_imports)]
pub use cp_amm_test_harness::{
    assertions::*, clock::*, config::*, context::*, error::*, funding::*, gateway::*,
    identity::*, ledger::*, probe, tokens::*, utils::*,
};
#[allow(unused_imports)]
pub use solana_sdk::{
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction,
    transaction::Transaction,
};

/// Test result type alias for convenience
pub type TestResult = Result<(), HarnessError>;

/// Common test constants
pub mod constants {
    /// Raw units of the default one-million-unit supply at 6 decimals
    #[allow(dead_code)]
    pub const DEFAULT_RAW_SUPPLY: u64 = 1_000_000_000_000;

    /// Lamports used when funding ad-hoc actors (0.25 SOL)
    #[allow(dead_code)]
    pub const SMALL_FUNDING: u64 = 250_000_000;
}
