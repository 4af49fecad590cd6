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

//! # Test Context Setup
//!
//! Provisions the standard cast of actors and assets that AMM tests start
//! from:
//!
//! - admin, payer, user and funder funded with one SOL each from the root
//! - pool creator generated but left unfunded
//! - token A, token B and reward mints with the root as authority
//! - one million units of A and B to payer and user
//! - one million units of the reward token to funder and user
//!
//! Independent steps run as joined futures. Every minting call inside a
//! join targets a distinct (mint, owner) pair.

use futures::future::{try_join, try_join_all};
use log::info;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};

use crate::{
    config::HarnessConfig,
    constants::ACTOR_FUNDING_LAMPORTS,
    error::HarnessResult,
    funding::{fund, fund_many},
    identity::new_actor,
    ledger::Ledger,
    tokens::{create_mint, mint_to, ui_to_raw, TokenProgram},
};

/// Actors and mints handed to a test body
#[derive(Debug)]
pub struct TestContext {
    pub admin: Keypair,
    pub payer: Keypair,
    pub pool_creator: Keypair,
    pub user: Keypair,
    pub funder: Keypair,
    pub token_a_mint: Pubkey,
    pub token_b_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub token_program: TokenProgram,
}

/// Provision the standard test context with default amounts
pub async fn setup_test_context(
    ledger: &Ledger,
    root: &Keypair,
    token_program: TokenProgram,
) -> HarnessResult<TestContext> {
    setup_test_context_with(ledger, root, token_program, &HarnessConfig::default()).await
}

/// Provision the standard test context using `config`'s funding, decimals
/// and supply
pub async fn setup_test_context_with(
    ledger: &Ledger,
    root: &Keypair,
    token_program: TokenProgram,
    config: &HarnessConfig,
) -> HarnessResult<TestContext> {
    let [admin, payer, pool_creator, user, funder]: [Keypair; 5] =
        std::array::from_fn(|_| new_actor());

    fund_many(
        ledger,
        root,
        &[admin.pubkey(), payer.pubkey(), user.pubkey(), funder.pubkey()],
        config.actor_lamports,
    )
    .await?;

    let token_a = new_actor();
    let token_b = new_actor();
    let reward = new_actor();

    let root_address = root.pubkey();
    try_join_all([&token_a, &token_b, &reward].into_iter().map(|mint| {
        create_mint(ledger, root, mint, &root_address, config.decimals, token_program)
    }))
    .await?;

    let raw_amount = ui_to_raw(config.initial_supply_units, config.decimals)?;
    let mint_pair = |mint: Pubkey, owners: [Pubkey; 2]| async move {
        try_join(
            mint_to(ledger, root, &mint, root, &owners[0], raw_amount, token_program),
            mint_to(ledger, root, &mint, root, &owners[1], raw_amount, token_program),
        )
        .await
    };

    mint_pair(token_a.pubkey(), [payer.pubkey(), user.pubkey()]).await?;
    mint_pair(token_b.pubkey(), [payer.pubkey(), user.pubkey()]).await?;
    mint_pair(reward.pubkey(), [funder.pubkey(), user.pubkey()]).await?;

    info!(
        "Test context ready: token A {}, token B {}, reward {} ({:?})",
        token_a.pubkey(),
        token_b.pubkey(),
        reward.pubkey(),
        token_program
    );

    Ok(TestContext {
        admin,
        payer,
        pool_creator,
        user,
        funder,
        token_a_mint: token_a.pubkey(),
        token_b_mint: token_b.pubkey(),
        reward_mint: reward.pubkey(),
        token_program,
    })
}

/// Fund `user` (or a fresh actor when `None`) with one SOL from `payer`
pub async fn create_users_and_fund(
    ledger: &Ledger,
    payer: &Keypair,
    user: Option<Keypair>,
) -> HarnessResult<Keypair> {
    let user = user.unwrap_or_else(new_actor);
    fund(ledger, payer, &user.pubkey(), ACTOR_FUNDING_LAMPORTS).await?;
    Ok(user)
}
