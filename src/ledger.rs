//! # Ledger Bootstrap
//!
//! Builds a fresh simulated ledger with the programs under test and the
//! seeded accounts in place, and wraps the resulting program-test context in
//! a [`Ledger`] handle that the rest of the harness talks to.
//!
//! The root identity is always seeded, so every later funding operation has
//! a supply source that does not depend on any test's random actors.

use std::{fs, str::FromStr};

use log::{debug, info};
use solana_program_test::{BanksClient, ProgramTest, ProgramTestContext};
use solana_sdk::{
    account::Account,
    bpf_loader,
    clock::Clock,
    hash::Hash,
    pubkey::Pubkey,
    rent::Rent,
    signature::Keypair,
    signer::Signer,
    system_program,
};

use crate::{
    config::{HarnessConfig, ProgramFixture},
    error::{HarnessError, HarnessResult},
    identity::root_keypair,
    logging::init_logging,
};

/// An account present in the ledger from genesis
#[derive(Debug, Clone)]
pub struct SeedAccount {
    pub address: Pubkey,
    pub owner: Pubkey,
    pub executable: bool,
    pub lamports: u64,
    pub data: Vec<u8>,
}

impl SeedAccount {
    /// A plain system-owned wallet with no data
    pub fn wallet(address: Pubkey, lamports: u64) -> Self {
        Self {
            address,
            owner: system_program::id(),
            executable: false,
            lamports,
            data: Vec::new(),
        }
    }
}

impl From<SeedAccount> for Account {
    fn from(seed: SeedAccount) -> Self {
        Account {
            lamports: seed.lamports,
            data: seed.data,
            owner: seed.owner,
            executable: seed.executable,
            rent_epoch: 0,
        }
    }
}

/// Handle to a running simulated ledger
pub struct Ledger {
    context: ProgramTestContext,
    root: Keypair,
}

impl Ledger {
    /// A client for a single round trip. Every caller gets its own clone so
    /// concurrent requests never share a borrow.
    pub fn banks_client(&self) -> BanksClient {
        self.context.banks_client.clone()
    }

    pub fn context(&self) -> &ProgramTestContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ProgramTestContext {
        &mut self.context
    }

    /// The seeded root identity
    pub fn root(&self) -> &Keypair {
        &self.root
    }

    pub fn root_address(&self) -> Pubkey {
        self.root.pubkey()
    }

    /// The program-test genesis payer
    pub fn payer(&self) -> &Keypair {
        &self.context.payer
    }

    pub async fn latest_blockhash(&self) -> HarnessResult<Hash> {
        let mut banks = self.banks_client();
        Ok(banks.get_latest_blockhash().await?)
    }

    pub async fn get_clock(&self) -> HarnessResult<Clock> {
        let mut banks = self.banks_client();
        Ok(banks.get_sysvar::<Clock>().await?)
    }

    pub async fn get_rent(&self) -> HarnessResult<Rent> {
        let mut banks = self.banks_client();
        Ok(banks.get_rent().await?)
    }

    pub async fn get_account(&self, address: &Pubkey) -> HarnessResult<Option<Account>> {
        let mut banks = self.banks_client();
        Ok(banks.get_account(*address).await?)
    }

    /// Native balance in lamports, 0 for accounts that do not exist
    pub async fn get_balance(&self, address: &Pubkey) -> HarnessResult<u64> {
        let mut banks = self.banks_client();
        Ok(banks.get_balance(*address).await?)
    }

    /// Move the ledger to an absolute slot. The slot must be in the future.
    pub fn warp_to_slot(&mut self, slot: u64) -> HarnessResult<()> {
        self.context.warp_to_slot(slot)?;
        Ok(())
    }

    /// Override the clock sysvar
    pub fn set_clock(&mut self, clock: &Clock) {
        self.context.set_sysvar(clock);
    }
}

fn parse_program_id(fixture: &ProgramFixture) -> HarnessResult<Pubkey> {
    Pubkey::from_str(&fixture.program_id).map_err(|_| HarnessError::InvalidProgramId {
        name: fixture.name.clone(),
        program_id: fixture.program_id.clone(),
    })
}

/// Create a `ProgramTest` with every configured program fixture loaded
///
/// # Errors
/// * `InvalidProgramId` - a fixture's address does not parse
/// * `ProgramLoad` - a fixture's `.so` file cannot be read
pub fn program_test_for(config: &HarnessConfig) -> HarnessResult<ProgramTest> {
    // Must precede `ProgramTest::default()`, which installs its own logger
    init_logging(&config.log_filter);
    let mut program_test = ProgramTest::default();

    for fixture in &config.programs {
        let program_id = parse_program_id(fixture)?;
        let path = config.fixture_path(fixture);
        let data = fs::read(&path).map_err(|e| HarnessError::ProgramLoad {
            name: fixture.name.clone(),
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        debug!("Loading program {} ({}) from {}", fixture.name, program_id, path.display());
        program_test.add_account(
            program_id,
            Account {
                lamports: Rent::default().minimum_balance(data.len()).max(1),
                data,
                owner: bpf_loader::id(),
                executable: true,
                rent_epoch: 0,
            },
        );
    }

    Ok(program_test)
}

/// Start a ledger from a prepared `ProgramTest`
///
/// Seeds the root identity with `config.root_lamports`, then every entry of
/// `seed_accounts`, and starts the program-test context. Callers building
/// their own `ProgramTest` call [`init_logging`] before constructing it.
pub async fn start_ledger(
    mut program_test: ProgramTest,
    config: &HarnessConfig,
    seed_accounts: Vec<SeedAccount>,
) -> HarnessResult<Ledger> {
    let root = root_keypair(config)?;
    program_test.add_account(
        root.pubkey(),
        SeedAccount::wallet(root.pubkey(), config.root_lamports).into(),
    );

    let seeded = seed_accounts.len();
    for seed in seed_accounts {
        program_test.add_account(seed.address, seed.into());
    }

    if let Some(units) = config.compute_max_units {
        program_test.set_compute_max_units(units);
    }

    let context = program_test.start_with_context().await;
    info!(
        "Ledger started: root {} with {} lamports, {} extra seeded accounts",
        root.pubkey(),
        config.root_lamports,
        seeded
    );

    Ok(Ledger { context, root })
}

/// Start a ledger with the given configuration's programs and no extra
/// seeded accounts
pub async fn start_test_with(config: &HarnessConfig) -> HarnessResult<Ledger> {
    let program_test = program_test_for(config)?;
    start_ledger(program_test, config, Vec::new()).await
}

/// Start the standard test ledger (AMM program from fixtures, environment
/// overrides applied)
pub async fn start_test() -> HarnessResult<Ledger> {
    start_test_with(&HarnessConfig::from_env()).await
}
