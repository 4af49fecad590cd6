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

//! Identity and Ledger Bootstrap Tests
//!
//! Covers the fixed root identity, seeded accounts and the fatal setup
//! errors raised while loading program fixtures.

mod common;

use common::*;
use serial_test::serial;
use std::fs;

#[tokio::test]
async fn test_root_identity_is_seeded_with_large_balance() -> TestResult {
    println!("🧪 Testing root identity seeding...");

    let ledger = start_probe_ledger().await?;
    let root = local_admin_keypair();

    assert_eq!(ledger.root_address(), root.pubkey(), "Ledger root must be the fixed identity");
    assert_eq!(ledger.root().pubkey(), ledger.root_address());
    assert_eq!(root.pubkey().to_string(), "bossj3JvwiNK7pvjr149DqdtJxf2gdygbcmEPTkb2F1");

    let balance = ledger.get_balance(&root.pubkey()).await?;
    assert_eq!(balance, 100 * LAMPORTS_PER_SOL, "Root should start with 100 SOL");

    println!("✅ Root identity {} seeded with {} lamports", root.pubkey(), balance);
    Ok(())
}

#[tokio::test]
async fn test_seed_accounts_are_present() -> TestResult {
    println!("🧪 Testing extra seeded accounts...");

    let wallet = new_actor();
    let data_owner = Pubkey::new_unique();
    let data_account = Pubkey::new_unique();

    let ledger = start_probe_ledger_with(vec![
        SeedAccount::wallet(wallet.pubkey(), 3 * LAMPORTS_PER_SOL),
        SeedAccount {
            address: data_account,
            owner: data_owner,
            executable: false,
            lamports: LAMPORTS_PER_SOL,
            data: vec![7u8; 16],
        },
    ])
    .await?;

    assert_eq!(ledger.get_balance(&wallet.pubkey()).await?, 3 * LAMPORTS_PER_SOL);

    let account = ledger
        .get_account(&data_account)
        .await?
        .expect("Seeded data account should exist");
    assert_eq!(account.owner, data_owner);
    assert_eq!(account.lamports, LAMPORTS_PER_SOL);
    assert_eq!(account.data, vec![7u8; 16]);
    assert!(!account.executable);

    println!("✅ Seeded accounts present with requested balances");
    Ok(())
}

#[tokio::test]
async fn test_fresh_actor_has_no_ledger_footprint() -> TestResult {
    let ledger = start_probe_ledger().await?;
    let actor = new_actor();

    assert!(ledger.get_account(&actor.pubkey()).await?.is_none());
    assert_eq!(ledger.get_balance(&actor.pubkey()).await?, 0);
    Ok(())
}

#[test]
fn test_malformed_program_id_is_fatal() {
    let config = HarnessConfig::without_programs()
        .with_program(ProgramFixture::new("cp_amm", "not-a-valid-address"));

    match program_test_for(&config) {
        Err(HarnessError::InvalidProgramId { name, program_id }) => {
            assert_eq!(name, "cp_amm");
            assert_eq!(program_id, "not-a-valid-address");
        }
        Err(other) => panic!("Expected InvalidProgramId, got {:?}", other),
        Ok(_) => panic!("Expected InvalidProgramId, got a ProgramTest"),
    }
}

#[test]
fn test_missing_fixture_is_fatal() {
    let config = HarnessConfig::default().with_fixtures_dir("/nonexistent/harness/fixtures");

    match program_test_for(&config) {
        Err(HarnessError::ProgramLoad { name, path, .. }) => {
            assert_eq!(name, "cp_amm");
            assert!(path.ends_with("cp_amm.so"));
        }
        Err(other) => panic!("Expected ProgramLoad, got {:?}", other),
        Ok(_) => panic!("Expected ProgramLoad, got a ProgramTest"),
    }
}

#[test]
fn test_fixture_file_is_loaded() {
    let dir = std::env::temp_dir().join(format!("harness-fixtures-{}", random_id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("cp_amm.so"), [0u8; 64]).unwrap();

    let config = HarnessConfig::default().with_fixtures_dir(&dir);
    let result = program_test_for(&config);

    fs::remove_dir_all(&dir).unwrap();
    assert!(result.is_ok(), "Fixture present on disk should load");
}

#[tokio::test]
#[serial]
async fn test_start_test_uses_environment_fixtures_dir() {
    std::env::set_var(FIXTURES_DIR_ENV, "/nonexistent/env/fixtures");

    let config = HarnessConfig::from_env();
    assert_eq!(config.fixtures_dir, std::path::PathBuf::from("/nonexistent/env/fixtures"));

    let result = start_test().await;
    std::env::remove_var(FIXTURES_DIR_ENV);

    match result {
        Err(HarnessError::ProgramLoad { path, .. }) => {
            assert!(path.starts_with("/nonexistent/env/fixtures"));
        }
        Err(other) => panic!("Expected ProgramLoad, got {:?}", other),
        Ok(_) => panic!("Bootstrap must fail without the program fixture"),
    }
}

#[tokio::test]
async fn test_harness_log_filter_quiets_runtime() -> TestResult {
    let _ledger = start_probe_ledger().await?;

    if std::env::var("RUST_LOG").is_ok() {
        println!("⚠️ RUST_LOG is set, skipping default filter check");
        return Ok(());
    }

    assert!(!log::log_enabled!(
        target: "solana_runtime::message_processor::stable_log",
        log::Level::Debug
    ));
    assert!(!log::log_enabled!(
        target: "solana_runtime::message_processor",
        log::Level::Debug
    ));
    assert!(log::log_enabled!(
        target: "solana_runtime::message_processor::stable_log",
        log::Level::Error
    ));
    Ok(())
}
