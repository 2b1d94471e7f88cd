//! Report harness configuration, defaults, and environment overrides.
//!
//! [`ReportConfig`] drives the `sort_report` harness in `sortprov-bench`:
//! which algorithms run, over which input sizes, how many runs per cell,
//! how long a cell may take, and the seed that makes inputs reproducible.
//! The sort contract itself has no configuration.

use std::time::Duration;

use crate::algorithm::Algorithm;
use crate::error::SortError;

/// Environment variable: comma-separated algorithm names.
pub const ENV_ALGORITHMS: &str = "SORTPROV_ALGORITHMS";
/// Environment variable: largest input size (sizes grow by x10 from 10).
pub const ENV_MAX_SIZE: &str = "SORTPROV_MAX_SIZE";
/// Environment variable: base RNG seed.
pub const ENV_SEED: &str = "SORTPROV_SEED";
/// Environment variable: timed runs per (algorithm, size) cell.
pub const ENV_RUNS: &str = "SORTPROV_RUNS";
/// Environment variable: summed runtime budget per cell, in milliseconds.
pub const ENV_TIME_BUDGET_MS: &str = "SORTPROV_TIME_BUDGET_MS";

/// Fewest samples a cell needs to be reported. Cells that run out of
/// time budget before reaching this are shown as missing.
pub const MIN_RUNS: usize = 31;

const MIN_SIZE: usize = 10;

// ── ReportConfig ───────────────────────────────────────────────────

/// Settings for a benchmark report run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Algorithms to compare. Default: all of them.
    pub algorithms: Vec<Algorithm>,
    /// Input sizes, ascending. Default: 10, 100, ..., 1 000 000.
    pub sizes: Vec<usize>,
    /// Base seed for input generation. Default: 2222.
    pub seed: u64,
    /// Timed runs per cell. Default: 200.
    pub runs: usize,
    /// Once a cell's summed runtime reaches this, it stops sampling.
    /// Default: 10 s.
    pub time_budget: Duration,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            sizes: decade_sizes(1_000_000),
            seed: 2222,
            runs: 200,
            time_budget: Duration::from_secs(10),
        }
    }
}

impl ReportConfig {
    /// Defaults overridden by `SORTPROV_*` environment variables.
    pub fn from_env() -> Result<Self, SortError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each
    /// `SORTPROV_*` key. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SortError> {
        let mut config = Self::default();

        if let Some(list) = lookup(ENV_ALGORITHMS) {
            config.algorithms = list
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(str::parse::<Algorithm>)
                .collect::<Result<Vec<_>, _>>()?;
        }
        if let Some(raw) = lookup(ENV_MAX_SIZE) {
            config.sizes = decade_sizes(parse_number(ENV_MAX_SIZE, &raw)?);
        }
        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = parse_number(ENV_SEED, &raw)?;
        }
        if let Some(raw) = lookup(ENV_RUNS) {
            config.runs = parse_number(ENV_RUNS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TIME_BUDGET_MS) {
            config.time_budget = Duration::from_millis(parse_number(ENV_TIME_BUDGET_MS, &raw)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), SortError> {
        if self.algorithms.is_empty() {
            return Err(invalid("at least one algorithm is required"));
        }
        if self.sizes.is_empty() {
            return Err(invalid(format!(
                "no input sizes; max size must be at least {MIN_SIZE}"
            )));
        }
        if self.sizes.contains(&0) {
            return Err(invalid("input sizes must be non-zero"));
        }
        if self.runs < MIN_RUNS {
            return Err(invalid(format!("runs must be at least {MIN_RUNS}")));
        }
        if self.time_budget.is_zero() {
            return Err(invalid("time budget must be non-zero"));
        }
        Ok(())
    }

    /// Sizes `algorithm` should run at, honouring its size limit.
    pub fn sizes_for(&self, algorithm: Algorithm) -> impl Iterator<Item = usize> + '_ {
        let limit = algorithm.size_limit().unwrap_or(usize::MAX);
        self.sizes.iter().copied().filter(move |&n| n <= limit)
    }
}

/// 10, 100, 1000, ... up to and including `max`.
pub fn decade_sizes(max: usize) -> Vec<usize> {
    std::iter::successors(Some(MIN_SIZE), |n| n.checked_mul(10))
        .take_while(|&n| n <= max)
        .collect()
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, SortError> {
    raw.trim()
        .replace('_', "")
        .parse()
        .map_err(|_| invalid(format!("{key}={raw:?} is not a valid number")))
}

fn invalid(reason: impl Into<String>) -> SortError {
    SortError::InvalidConfig {
        reason: reason.into(),
    }
}
