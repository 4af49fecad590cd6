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

//! # Test Environment Setup Utilities
//!
//! Starts ledgers with the probe program standing in for the program under
//! test, so nothing here depends on a compiled fixture.

use cp_amm_test_harness::{
    config::HarnessConfig,
    error::HarnessResult,
    ledger::{start_ledger, Ledger, SeedAccount},
    probe,
};

/// Start a ledger with the probe program and the root identity
#[allow(dead_code)]
pub async fn start_probe_ledger() -> HarnessResult<Ledger> {
    start_probe_ledger_with(Vec::new()).await
}

/// Start a probe ledger with extra seeded accounts
#[allow(dead_code)]
pub async fn start_probe_ledger_with(seed_accounts: Vec<SeedAccount>) -> HarnessResult<Ledger> {
    start_ledger(
        probe::program_test(),
        &HarnessConfig::without_programs(),
        seed_accounts,
    )
    .await
}
