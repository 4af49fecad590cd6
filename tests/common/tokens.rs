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

//! # Token Balance Assertions

use cp_amm_test_harness::{
    error::HarnessResult,
    ledger::Ledger,
    tokens::{get_token_balance, TokenProgram},
};
use solana_sdk::pubkey::Pubkey;

/// Assert `owner` holds exactly `expected` raw units of `mint`
#[allow(dead_code)]
pub async fn assert_token_balance(
    ledger: &Ledger,
    owner: &Pubkey,
    mint: &Pubkey,
    token_program: TokenProgram,
    expected: u64,
) -> HarnessResult<()> {
    let actual = get_token_balance(ledger, owner, mint, token_program).await?;
    assert_eq!(
        actual, expected,
        "Balance mismatch for owner {} on mint {}: expected {}, got {}",
        owner, mint, expected, actual
    );
    Ok(())
}
