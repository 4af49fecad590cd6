//! # cp-amm Test Harness
//!
//! Deterministic setup and submission helpers for exercising the
//! constant-product AMM program against a `solana-program-test` ledger.
//!
//! A typical test:
//!
//! ```rust,no_run
//! use cp_amm_test_harness::{
//!     setup_test_context, start_test, warp_by_slots, HarnessResult, TokenProgram,
//! };
//!
//! # async fn run() -> HarnessResult<()> {
//! let mut ledger = start_test().await?;
//! let root = cp_amm_test_harness::local_admin_keypair();
//! let ctx = setup_test_context(&ledger, &root, TokenProgram::Legacy).await?;
//! warp_by_slots(&mut ledger, 100).await?;
//! # let _ = ctx;
//! # Ok(())
//! # }
//! ```

pub mod assertions;
pub mod clock;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod funding;
pub mod gateway;
pub mod identity;
pub mod ledger;
pub mod logging;
pub mod probe;
pub mod tokens;
pub mod utils;

pub use assertions::{assert_error_contains, expect_failure};
pub use clock::{advance_clock_by_seconds, current_slot, warp_by_slots};
pub use config::{HarnessConfig, ProgramFixture};
pub use context::{create_users_and_fund, setup_test_context, setup_test_context_with, TestContext};
pub use error::{HarnessError, HarnessResult};
pub use funding::{fund, fund_many};
pub use gateway::{build_and_process, process_or_fail, signed_transaction, submit, TransactionOutcome};
pub use identity::{local_admin_keypair, new_actor, new_actors, root_keypair};
pub use ledger::{program_test_for, start_ledger, start_test, start_test_with, Ledger, SeedAccount};
pub use tokens::{
    create_mint, get_mint, get_token_account, get_token_balance, mint_to, wrap_native, TokenProgram,
};
pub use utils::{random_id, random_int};
