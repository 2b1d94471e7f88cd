//! Timing reports for sortprov algorithms.
//!
//! Provides the measurement loop behind the `sort_report` example:
//!
//! - [`measure`]: time one algorithm at one input size over many seeded runs
//! - [`run_report`]: fill a table of [`Stats`] for every configured cell
//! - [`stats`]: Tukey outlier removal, t intervals, Welch's t-test
//!
//! Every timed run is verified with `check_sorted`; a wrong answer aborts
//! the report rather than producing a fast but meaningless number.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod stats;

use std::fmt;
use std::time::{Duration, Instant};

use sortprov_core::config::MIN_RUNS;
use sortprov_core::verify::check_sorted;
use sortprov_core::{Algorithm, ReportConfig, SortError};
use sortprov_test_utils::{case_seed, random_vec};

pub use stats::{Stats, ALPHA, OUTLIER_COEFFICIENT};

/// Cells whose mean is within this fraction of the column's fastest mean
/// are marked fastest too.
pub const DIFF_THRESHOLD: f64 = 0.05;

/// Sort a copy of `input` with `algorithm`, returning the elapsed time.
///
/// The output is verified; an incorrect sort is reported as an error.
pub fn time_run(algorithm: Algorithm, input: &[i32]) -> Result<Duration, SortError> {
    let mut data = input.to_vec();
    let start = Instant::now();
    algorithm.sort(&mut data);
    let elapsed = start.elapsed();
    check_sorted(input, &data)?;
    Ok(elapsed)
}

/// Time `algorithm` on up to `runs` random inputs of length `len`,
/// returning nanoseconds per run.
///
/// Sampling stops early once the summed runtime reaches `budget`. Inputs
/// are derived from `seed`, so the same arguments replay the same inputs.
pub fn sample(
    algorithm: Algorithm,
    len: usize,
    runs: usize,
    seed: u64,
    budget: Duration,
) -> Result<Vec<f64>, SortError> {
    let mut samples = Vec::with_capacity(runs);
    let mut spent = Duration::ZERO;
    for run in 0..runs {
        if spent >= budget {
            log::debug!("{algorithm} n={len}: budget {budget:?} spent after {run} runs");
            break;
        }
        let input = random_vec(len, case_seed(seed ^ len as u64, run));
        let elapsed = time_run(algorithm, &input)?;
        spent += elapsed;
        samples.push(elapsed.as_nanos() as f64);
    }
    Ok(samples)
}

/// Measure one cell of the report.
///
/// `Ok(None)` when the time budget ran out before [`MIN_RUNS`] samples
/// were taken.
pub fn measure(
    algorithm: Algorithm,
    len: usize,
    config: &ReportConfig,
) -> Result<Option<Stats>, SortError> {
    let samples = sample(algorithm, len, config.runs, config.seed, config.time_budget)?;
    if samples.len() < MIN_RUNS {
        log::warn!(
            "{algorithm} n={}: only {} of {} runs fit in {:?}, dropping cell",
            commafy(len),
            samples.len(),
            config.runs,
            config.time_budget
        );
        return Ok(None);
    }
    Ok(Stats::from_samples(&samples))
}

/// One row of a [`Report`]: an algorithm and its per-size results.
#[derive(Clone, Debug)]
pub struct ReportRow {
    /// Algorithm measured.
    pub algorithm: Algorithm,
    /// One entry per report size; `None` where the size exceeds the
    /// algorithm's limit or the cell ran out of time budget.
    pub cells: Vec<Option<Stats>>,
}

/// Timing table: algorithms down, sizes across.
#[derive(Clone, Debug)]
pub struct Report {
    /// Column sizes.
    pub sizes: Vec<usize>,
    /// One row per algorithm, in configuration order.
    pub rows: Vec<ReportRow>,
}

/// Per-cell markers shown next to the timing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Marks {
    /// Mean within [`DIFF_THRESHOLD`] of the column's fastest.
    pub fastest: bool,
    /// Welch's t-test cannot separate this cell from the fastest at
    /// [`ALPHA`].
    pub indistinguishable: bool,
}

impl Report {
    fn min_at(&self, col: usize) -> Option<(Algorithm, Stats)> {
        self.rows
            .iter()
            .filter_map(|r| r.cells.get(col).copied().flatten().map(|s| (r.algorithm, s)))
            .min_by(|a, b| a.1.mean_ns.total_cmp(&b.1.mean_ns))
    }

    /// Algorithm with the lowest mean at column `col`, if any cell there
    /// was measured.
    pub fn fastest_at(&self, col: usize) -> Option<Algorithm> {
        self.min_at(col).map(|(a, _)| a)
    }

    /// Markers for the cell at `row`, `col`. Missing cells get none.
    pub fn marks(&self, row: usize, col: usize) -> Marks {
        let cell = self.rows.get(row).and_then(|r| r.cells.get(col).copied().flatten());
        let (Some(stats), Some((_, min))) = (cell, self.min_at(col)) else {
            return Marks::default();
        };
        Marks {
            fastest: stats.mean_ns <= min.mean_ns * (1.0 + DIFF_THRESHOLD),
            indistinguishable: stats.welch_p_value(&min) >= ALPHA,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12}", "algorithm")?;
        for &n in &self.sizes {
            write!(f, " {:>28}", commafy(n))?;
        }
        writeln!(f)?;
        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "{:<12}", row.algorithm.name())?;
            for (col, cell) in row.cells.iter().enumerate() {
                match cell {
                    Some(stats) => {
                        let marks = self.marks(i, col);
                        let s = if marks.indistinguishable { "s" } else { " " };
                        let star = if marks.fastest { "*" } else { " " };
                        write!(f, " {:>24} {s} {star}", stats.to_string())?;
                    }
                    None => write!(f, " {:>24}    ", "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Measure every (algorithm, size) cell in `config`.
pub fn run_report(config: &ReportConfig) -> Result<Report, SortError> {
    config.validate()?;
    let mut rows = Vec::with_capacity(config.algorithms.len());
    for &algorithm in &config.algorithms {
        let limit = algorithm.size_limit().unwrap_or(usize::MAX);
        let mut cells = Vec::with_capacity(config.sizes.len());
        for &len in &config.sizes {
            if len > limit {
                log::debug!("skipping {algorithm} at {len}: above limit {limit}");
                cells.push(None);
                continue;
            }
            let stats = measure(algorithm, len, config)?;
            if let Some(stats) = &stats {
                log::info!(
                    "{algorithm} n={}: {stats} ms over {} runs",
                    commafy(len),
                    stats.count
                );
            }
            cells.push(stats);
        }
        rows.push(ReportRow { algorithm, cells });
    }
    Ok(Report {
        sizes: config.sizes.clone(),
        rows,
    })
}

/// Format `n` with comma thousands separators: `1000000` -> `"1,000,000"`.
pub fn commafy(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commafy_groups() {
        assert_eq!(commafy(0), "0");
        assert_eq!(commafy(123), "123");
        assert_eq!(commafy(1234), "1,234");
        assert_eq!(commafy(123456), "123,456");
        assert_eq!(commafy(123456789), "123,456,789");
    }

    #[test]
    fn time_run_verifies() {
        let input = random_vec(100, 1);
        assert!(time_run(Algorithm::Heap, &input).is_ok());
    }

    fn quick_config(algorithms: Vec<Algorithm>, sizes: Vec<usize>) -> ReportConfig {
        ReportConfig {
            algorithms,
            sizes,
            seed: 1,
            runs: MIN_RUNS,
            ..ReportConfig::default()
        }
    }

    fn stats(mean_ns: f64, stdev_ns: f64) -> Option<Stats> {
        Some(Stats {
            mean_ns,
            stdev_ns,
            count: 200,
        })
    }

    #[test]
    fn sample_stops_at_budget() {
        let samples = sample(Algorithm::Heap, 1_000, 100, 1, Duration::from_nanos(1)).unwrap();
        assert_eq!(samples.len(), 1);

        let samples = sample(Algorithm::Heap, 10, 20, 1, Duration::from_secs(60)).unwrap();
        assert_eq!(samples.len(), 20);
    }

    #[test]
    fn measure_counts_runs() {
        let config = quick_config(vec![Algorithm::Shell], vec![50]);
        let stats = measure(Algorithm::Shell, 50, &config).unwrap().unwrap();
        assert!(stats.count <= MIN_RUNS && stats.count > 0);
        assert!(stats.mean_ns >= 0.0);
    }

    #[test]
    fn measure_drops_cells_short_of_min_runs() {
        let config = ReportConfig {
            time_budget: Duration::from_nanos(1),
            ..quick_config(vec![Algorithm::Heap], vec![1_000])
        };
        assert_eq!(measure(Algorithm::Heap, 1_000, &config), Ok(None));
    }

    #[test]
    fn report_skips_capped_sizes() {
        let config = quick_config(
            vec![Algorithm::Insertion, Algorithm::Unstable],
            vec![10, 20_000],
        );
        let report = run_report(&config).unwrap();
        assert_eq!(report.rows.len(), 2);
        assert!(report.rows[0].cells[0].is_some());
        assert!(report.rows[0].cells[1].is_none());
        assert!(report.rows[1].cells[1].is_some());
        assert_eq!(report.fastest_at(1), Some(Algorithm::Unstable));
        assert!(report.marks(1, 1).fastest);
        assert_eq!(report.marks(0, 1), Marks::default());

        let text = report.to_string();
        assert!(text.contains("20,000"));
        assert!(text.contains("insertion"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn marks_within_threshold_and_significance() {
        let report = Report {
            sizes: vec![1_000],
            rows: vec![
                ReportRow {
                    algorithm: Algorithm::Unstable,
                    cells: vec![stats(100.0, 1.0)],
                },
                ReportRow {
                    algorithm: Algorithm::Heap,
                    cells: vec![stats(104.0, 1.0)],
                },
                ReportRow {
                    algorithm: Algorithm::Quick,
                    cells: vec![stats(100.01, 5.0)],
                },
                ReportRow {
                    algorithm: Algorithm::Shell,
                    cells: vec![stats(200.0, 1.0)],
                },
                ReportRow {
                    algorithm: Algorithm::Insertion,
                    cells: vec![None],
                },
            ],
        };
        assert_eq!(report.fastest_at(0), Some(Algorithm::Unstable));
        let both = Marks {
            fastest: true,
            indistinguishable: true,
        };
        assert_eq!(report.marks(0, 0), both);
        assert_eq!(
            report.marks(1, 0),
            Marks {
                fastest: true,
                indistinguishable: false,
            }
        );
        assert_eq!(report.marks(2, 0), both);
        assert_eq!(report.marks(3, 0), Marks::default());
        assert_eq!(report.marks(4, 0), Marks::default());
        assert_eq!(report.marks(9, 0), Marks::default());

        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].ends_with("s *"));
        assert!(lines[2].ends_with("  *"));
        assert!(lines[5].trim_end().ends_with('-'));
    }

    #[test]
    fn report_rejects_invalid_config() {
        let config = ReportConfig {
            algorithms: vec![],
            ..ReportConfig::default()
        };
        assert!(run_report(&config).is_err());
    }
}
