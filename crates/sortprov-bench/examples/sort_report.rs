//! Timing report across algorithms and input sizes.
//!
//! Configured through environment variables:
//!
//! - `SORTPROV_ALGORITHMS`: comma-separated names (default: all)
//! - `SORTPROV_MAX_SIZE`: largest input size (default: 1,000,000)
//! - `SORTPROV_SEED`: base seed (default: 2222)
//! - `SORTPROV_RUNS`: runs per cell, at least 31 (default: 200)
//! - `SORTPROV_TIME_BUDGET_MS`: summed runtime after which a cell stops
//!   sampling (default: 10000)
//!
//! Log verbosity follows `RUST_LOG` (default `info`).
//!
//! ```text
//! SORTPROV_MAX_SIZE=10000 SORTPROV_RUNS=20 cargo run --release -p sortprov-bench --example sort_report
//! ```

use std::process::ExitCode;

use sortprov_bench::run_report;
use sortprov_core::ReportConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match ReportConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    for &algorithm in &config.algorithms {
        let sizes: Vec<usize> = config.sizes_for(algorithm).collect();
        log::debug!("{algorithm} ({}): sizes {sizes:?}", algorithm.complexity());
    }
    log::info!(
        "running {} algorithms x {} sizes, {} runs each, {:?} per cell, seed {}",
        config.algorithms.len(),
        config.sizes.len(),
        config.runs,
        config.time_budget,
        config.seed
    );

    match run_report(&config) {
        Ok(report) => {
            println!("\nmean ± 98% confidence interval in ms");
            println!("  * = within 5% of the fastest at that size");
            println!("  s = not significantly different from the fastest (Welch, p >= 0.001)\n");
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("report failed: {e}");
            ExitCode::FAILURE
        }
    }
}
