//! # Harness Configuration
//!
//! Everything a test run can tune lives in [`HarnessConfig`]. The defaults
//! reproduce the standard AMM test environment; `from_env` lets CI point the
//! harness at a different fixtures directory or log filter without code
//! changes.

use std::{env, path::PathBuf};

use solana_program::native_token::LAMPORTS_PER_SOL;

use crate::constants::{
    ACTOR_FUNDING_LAMPORTS, CP_AMM_PROGRAM_ID, CP_AMM_PROGRAM_NAME, DECIMALS,
    DEFAULT_FIXTURES_DIR, DEFAULT_LOG_FILTER, INITIAL_SUPPLY_UNITS, LOCAL_ADMIN_SECRET,
    ROOT_FUNDING_SOL,
};

/// Environment variable overriding the fixtures directory
pub const FIXTURES_DIR_ENV: &str = "HARNESS_FIXTURES_DIR";

/// A compiled program to preload into the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramFixture {
    /// File stem of the `.so` inside the fixtures directory
    pub name: String,
    /// Base58 program address
    pub program_id: String,
}

impl ProgramFixture {
    pub fn new(name: impl Into<String>, program_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            program_id: program_id.into(),
        }
    }

    /// The AMM program fixture
    pub fn cp_amm() -> Self {
        Self::new(CP_AMM_PROGRAM_NAME, CP_AMM_PROGRAM_ID)
    }
}

/// Test run configuration
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Programs loaded from `fixtures_dir` at bootstrap
    pub programs: Vec<ProgramFixture>,
    pub fixtures_dir: PathBuf,
    /// Secret of the root identity; test-only, never a real key
    pub root_secret: [u8; 64],
    /// Lamports seeded into the root identity
    pub root_lamports: u64,
    /// Lamports transferred to each synthetic actor
    pub actor_lamports: u64,
    pub decimals: u8,
    /// Whole units minted to each provisioned actor
    pub initial_supply_units: u64,
    pub compute_max_units: Option<u64>,
    pub log_filter: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            programs: vec![ProgramFixture::cp_amm()],
            fixtures_dir: PathBuf::from(DEFAULT_FIXTURES_DIR),
            root_secret: LOCAL_ADMIN_SECRET,
            root_lamports: LAMPORTS_PER_SOL * ROOT_FUNDING_SOL,
            actor_lamports: ACTOR_FUNDING_LAMPORTS,
            decimals: DECIMALS,
            initial_supply_units: INITIAL_SUPPLY_UNITS,
            compute_max_units: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl HarnessConfig {
    /// Default configuration with environment overrides applied.
    ///
    /// The fixtures directory comes from `HARNESS_FIXTURES_DIR`, then
    /// `SBF_OUT_DIR`, then `BPF_OUT_DIR`. `RUST_LOG` replaces the log filter.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = [FIXTURES_DIR_ENV, "SBF_OUT_DIR", "BPF_OUT_DIR"]
            .iter()
            .find_map(|key| env::var(key).ok())
        {
            config.fixtures_dir = PathBuf::from(dir);
        }
        if let Ok(filter) = env::var("RUST_LOG") {
            config.log_filter = filter;
        }

        config
    }

    /// Configuration that preloads no programs; callers register their own
    /// program on the `ProgramTest` before starting the ledger.
    pub fn without_programs() -> Self {
        Self {
            programs: Vec::new(),
            ..Self::default()
        }
    }

    pub fn with_program(mut self, fixture: ProgramFixture) -> Self {
        self.programs.push(fixture);
        self
    }

    pub fn with_fixtures_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fixtures_dir = dir.into();
        self
    }

    /// Location of a fixture's compiled program
    pub fn fixture_path(&self, fixture: &ProgramFixture) -> PathBuf {
        self.fixtures_dir.join(format!("{}.so", fixture.name))
    }
}
