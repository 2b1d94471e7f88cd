//! Summary statistics for timing samples.
//!
//! Outliers are removed with Tukey fences rather than a sigma rule: a single
//! spike inflates the standard deviation enough to hide itself when the
//! sample is small, but it cannot move the quartiles.

use std::fmt;

use statrs::distribution::{ContinuousCDF, StudentsT};

/// Tukey fence multiplier: samples beyond `Q1 - k·IQR` or `Q3 + k·IQR` are
/// discarded.
pub const OUTLIER_COEFFICIENT: f64 = 3.0;

/// Confidence level of the interval printed for each cell.
pub const CONFIDENCE: f64 = 0.98;

/// Significance level for Welch's t-test. A p-value at or above this means
/// two cells cannot be told apart.
pub const ALPHA: f64 = 0.001;

/// Lower quartile, median, and upper quartile of a sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quartiles {
    /// First quartile.
    pub q1: f64,
    /// Median.
    pub q2: f64,
    /// Third quartile.
    pub q3: f64,
}

impl Quartiles {
    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Whether `x` lies inside the fences at `coefficient` IQRs.
    pub fn admits(&self, x: f64, coefficient: f64) -> bool {
        let reach = coefficient * self.iqr();
        x >= self.q1 - reach && x <= self.q3 + reach
    }
}

fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Quartiles by the median-of-halves method. For odd counts the median is
/// left out of both halves. `None` for an empty sample.
pub fn quartiles(samples: &[f64]) -> Option<Quartiles> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    match sorted.len() {
        0 => None,
        1 => Some(Quartiles {
            q1: sorted[0],
            q2: sorted[0],
            q3: sorted[0],
        }),
        n => {
            let half = n / 2;
            Some(Quartiles {
                q1: median(&sorted[..half]),
                q2: median(&sorted),
                q3: median(&sorted[n - half..]),
            })
        }
    }
}

/// Keep only the samples inside the Tukey fences, in their original order.
pub fn tukey_filter(samples: &[f64], coefficient: f64) -> Vec<f64> {
    let Some(q) = quartiles(samples) else {
        return Vec::new();
    };
    samples
        .iter()
        .copied()
        .filter(|&x| q.admits(x, coefficient))
        .collect()
}

/// Mean and sample standard deviation. `None` if `samples` is empty.
///
/// A single sample has a standard deviation of zero.
pub fn mean_stdev(samples: &[f64]) -> Option<(f64, f64)> {
    if samples.is_empty() {
        return None;
    }
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    if samples.len() == 1 {
        return Some((mean, 0.0));
    }
    let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some((mean, var.sqrt()))
}

/// Two-sided critical value of Student's t at [`CONFIDENCE`] with `df`
/// degrees of freedom. NaN when `df` is zero.
pub fn t_critical(df: usize) -> f64 {
    match StudentsT::new(0.0, 1.0, df as f64) {
        Ok(t) => t.inverse_cdf(1.0 - (1.0 - CONFIDENCE) / 2.0),
        Err(_) => f64::NAN,
    }
}

/// Summary of a set of timing samples, in nanoseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    /// Mean runtime.
    pub mean_ns: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub stdev_ns: f64,
    /// Samples kept after outlier removal.
    pub count: usize,
}

impl Stats {
    /// Summarise `samples` after discarding outliers.
    ///
    /// Returns `None` for an empty sample set.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let kept = tukey_filter(samples, OUTLIER_COEFFICIENT);
        let (mean, stdev) = mean_stdev(&kept)?;
        Some(Self {
            mean_ns: mean,
            stdev_ns: stdev,
            count: kept.len(),
        })
    }

    /// Half-width of the [`CONFIDENCE`] t interval around the mean.
    pub fn ci_ns(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        t_critical(self.count - 1) * self.stdev_ns / (self.count as f64).sqrt()
    }

    /// Two-tailed p-value of Welch's t-test between `self` and `other`.
    ///
    /// Equal means give 1. If either side has zero spread the test is
    /// undefined and 0 is returned.
    pub fn welch_p_value(&self, other: &Stats) -> f64 {
        if self.mean_ns == other.mean_ns {
            return 1.0;
        }
        if self.stdev_ns == 0.0 || other.stdev_ns == 0.0 {
            return 0.0;
        }
        let (na, nb) = (self.count as f64, other.count as f64);
        let va = self.stdev_ns.powi(2) / na;
        let vb = other.stdev_ns.powi(2) / nb;
        let se2 = va + vb;
        let t = (self.mean_ns - other.mean_ns).abs() / se2.sqrt();
        // Welch-Satterthwaite degrees of freedom.
        let df = se2.powi(2) / (va.powi(2) / (na - 1.0) + vb.powi(2) / (nb - 1.0));
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t))).clamp(0.0, 1.0),
            Err(_) => 0.0,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mean = self.mean_ns / 1e6;
        let ci = self.ci_ns() / 1e6;
        let pct = if mean > 0.0 { ci / mean * 100.0 } else { 0.0 };
        write!(f, "{mean:.5} ± {ci:.5} ({pct:.0}%)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64, margin: f64) {
        assert!(
            (actual - expected).abs() <= margin,
            "{actual} not within {margin} of {expected}"
        );
    }

    fn stats(mean_ns: f64, stdev_ns: f64, count: usize) -> Stats {
        Stats {
            mean_ns,
            stdev_ns,
            count,
        }
    }

    #[test]
    fn mean_stdev_known_values() {
        assert_eq!(mean_stdev(&[]), None);
        assert_eq!(mean_stdev(&[4.0]), Some((4.0, 0.0)));

        let (m, s) = mean_stdev(&[6.0, 2.0, 3.0, 1.0]).unwrap();
        assert_eq!(m, 3.0);
        close(s, 2.16, 0.005);
        close(mean_stdev(&[2.0, 2.0, 5.0, 7.0]).unwrap().1, 2.45, 0.005);
        close(
            mean_stdev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap().1,
            2.14,
            0.005,
        );
    }

    #[test]
    fn quartiles_odd_and_even() {
        let odd = [1.0, 2.0, 5.0, 6.0, 7.0, 9.0, 12.0, 15.0, 18.0, 19.0, 27.0];
        let q = quartiles(&odd).unwrap();
        assert_eq!((q.q1, q.q2, q.q3, q.iqr()), (5.0, 9.0, 18.0, 13.0));

        let even = [3.0, 5.0, 7.0, 8.0, 9.0, 11.0, 15.0, 16.0, 20.0, 21.0];
        let q = quartiles(&even).unwrap();
        assert_eq!((q.q1, q.q2, q.q3, q.iqr()), (7.0, 10.0, 16.0, 9.0));
    }

    #[test]
    fn quartiles_ignore_input_order() {
        let q = quartiles(&[21.0, 3.0, 16.0, 5.0, 11.0, 7.0, 9.0, 8.0, 20.0, 15.0]).unwrap();
        assert_eq!((q.q1, q.q2, q.q3), (7.0, 10.0, 16.0));
    }

    #[test]
    fn quartiles_degenerate() {
        assert_eq!(quartiles(&[]), None);
        let q = quartiles(&[4.0]).unwrap();
        assert_eq!((q.q1, q.q2, q.q3), (4.0, 4.0, 4.0));
    }

    #[test]
    fn fences() {
        let q = Quartiles {
            q1: -2.0,
            q2: 0.0,
            q3: 2.0,
        };
        assert!(q.admits(3.0, 3.0));
        assert!(q.admits(14.0, 3.0));
        assert!(!q.admits(15.0, 3.0));
        assert!(!q.admits(-15.0, 3.0));
    }

    #[test]
    fn single_spike_removed_from_small_sample() {
        let mut samples = vec![2_200.0; 9];
        samples.push(112_600.0);
        let kept = tukey_filter(&samples, OUTLIER_COEFFICIENT);
        assert_eq!(kept.len(), 9);
        assert!(kept.iter().all(|&x| x == 2_200.0));

        let s = Stats::from_samples(&samples).unwrap();
        assert_eq!(s.count, 9);
        assert_eq!(s.mean_ns, 2_200.0);
        assert_eq!(s.stdev_ns, 0.0);
    }

    #[test]
    fn spread_samples_kept() {
        let samples: Vec<f64> = (0..50).map(|i| 1_000.0 + i as f64).collect();
        assert_eq!(tukey_filter(&samples, OUTLIER_COEFFICIENT).len(), 50);
    }

    #[test]
    fn critical_values_match_tables() {
        close(t_critical(4), 3.747, 0.005);
        close(t_critical(12), 2.681, 0.005);
        close(t_critical(30), 2.457, 0.005);
        close(t_critical(1_000_000), 2.326, 0.005);
        assert!(t_critical(0).is_nan());
    }

    #[test]
    fn confidence_interval_width() {
        close(stats(1e6, 1e5, 5).ci_ns(), 3.747 * 1e5 / 5f64.sqrt(), 500.0);
        assert_eq!(stats(1e6, 1e5, 1).ci_ns(), 0.0);
    }

    #[test]
    fn welch_known_values() {
        close(stats(10.0, 0.5, 5).welch_p_value(&stats(11.0, 0.5, 4)), 0.022, 0.005);
        close(stats(10.0, 4.0, 5).welch_p_value(&stats(12.0, 3.0, 4)), 0.42, 0.005);
        assert_eq!(stats(10.0, 0.5, 5).welch_p_value(&stats(10.0, 0.5, 4)), 1.0);
    }

    #[test]
    fn welch_large_samples_distinguished() {
        let pairs = [
            (stats(2962.44, 121.26, 197), stats(1323.74, 110.34, 198)),
            (stats(1036.68, 84.75, 199), stats(978.28, 85.40, 198)),
            (stats(1018.0, 121.86, 200), stats(904.52, 114.28, 199)),
        ];
        for (a, b) in pairs {
            let p = a.welch_p_value(&b);
            assert!(p < 1e-4, "p = {p}");
            assert_eq!(p, b.welch_p_value(&a));
        }
    }

    #[test]
    fn welch_zero_spread() {
        assert_eq!(stats(10.0, 0.0, 5).welch_p_value(&stats(11.0, 1.0, 5)), 0.0);
    }

    #[test]
    fn display_shows_interval_in_ms() {
        let text = stats(2_000_000.0, 0.0, 40).to_string();
        assert_eq!(text, "2.00000 ± 0.00000 (0%)");
    }
}
