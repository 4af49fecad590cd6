//! Constants for the cp-amm test harness
//!
//! This module contains the program identifiers, funding amounts, token
//! defaults and the embedded root identity used throughout the harness.

use solana_program::native_token::LAMPORTS_PER_SOL;

/// On-chain address of the constant-product AMM program under test
pub const CP_AMM_PROGRAM_ID: &str = "cpamdpZCGKUy5JxQXB4dcpGPiikHawvSWAd6mEn1sGG";

/// Fixture name of the AMM program (`<name>.so` inside the fixtures directory)
pub const CP_AMM_PROGRAM_NAME: &str = "cp_amm";

/// Default directory searched for compiled program fixtures
pub const DEFAULT_FIXTURES_DIR: &str = "tests/fixtures";

/// Decimal places used for every test mint
pub const DECIMALS: u8 = 6;

/// Whole-unit supply minted to each provisioned actor (1 million)
pub const INITIAL_SUPPLY_UNITS: u64 = 1_000_000;

/// Balance of the root identity at bootstrap, in SOL
pub const ROOT_FUNDING_SOL: u64 = 100;

/// Lamports handed to every synthetic actor
pub const ACTOR_FUNDING_LAMPORTS: u64 = LAMPORTS_PER_SOL;

/// Lower bound of `random_id`
pub const RANDOM_ID_MIN: u64 = 0;

/// Upper bound (exclusive) of `random_id`
pub const RANDOM_ID_MAX: u64 = 10_000;

/// Runtime log filter applied when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "error,solana_runtime::message_processor::stable_log=error";

/// Public address of the fixed root identity
pub const LOCAL_ADMIN_ADDRESS: &str = "bossj3JvwiNK7pvjr149DqdtJxf2gdygbcmEPTkb2F1";

/// Secret key of the fixed root identity.
///
/// Test-only material: this key is public and must never hold value on a
/// real cluster. Changing a single byte changes `LOCAL_ADMIN_ADDRESS` and
/// breaks every fixture that hard-codes it.
pub const LOCAL_ADMIN_SECRET: [u8; 64] = [
    230, 207, 238, 109, 95, 154, 47, 93, 183, 250, 147, 189, 87, 15, 117, 184,
    44, 91, 94, 231, 126, 140, 238, 134, 29, 58, 8, 182, 88, 22, 113, 234,
    8, 234, 192, 109, 87, 125, 190, 55, 129, 173, 227, 8, 104, 201, 104, 13,
    31, 178, 74, 80, 54, 14, 77, 78, 226, 57, 47, 122, 166, 165, 57, 144,
];
