//! Two-sided Wilcoxon signed-rank test for paired samples.
//!
//! Zero differences are discarded before ranking and no continuity
//! correction is applied. The exact null distribution is used for up to
//! [`EXACT_MAX_N`] pairs when no zeros were discarded and no absolute
//! differences tie; otherwise the tie-corrected normal approximation is used.

use std::fmt;

use super::normal::normal_sf;

/// Largest sample size for which the exact distribution is enumerated.
pub const EXACT_MAX_N: usize = 50;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("paired samples differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("samples are empty")]
    Empty,

    #[error("sample value at index {index} is not finite")]
    NonFinite { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PValueMethod {
    Exact,
    Normal,
    /// Every difference was zero; no test statistic distribution exists.
    Degenerate,
}

impl fmt::Display for PValueMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PValueMethod::Exact => f.write_str("exact"),
            PValueMethod::Normal => f.write_str("normal approximation"),
            PValueMethod::Degenerate => f.write_str("degenerate"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WilcoxonResult {
    /// `min(R+, R-)`.
    pub statistic: f64,
    /// Two-sided p-value; NaN when the test is degenerate.
    pub p_value: f64,
    /// Number of non-zero differences that were ranked.
    pub n: usize,
    pub method: PValueMethod,
}

/// Run the test on paired samples `x` and `y` (differences `x - y`).
pub fn wilcoxon_signed_rank(x: &[f64], y: &[f64]) -> Result<WilcoxonResult, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.is_empty() {
        return Err(StatsError::Empty);
    }
    if let Some(index) = x
        .iter()
        .zip(y)
        .position(|(a, b)| !a.is_finite() || !b.is_finite())
    {
        return Err(StatsError::NonFinite { index });
    }

    let diffs: Vec<f64> = x
        .iter()
        .zip(y)
        .map(|(a, b)| a - b)
        .filter(|d| *d != 0.0)
        .collect();
    let had_zeros = diffs.len() < x.len();
    let n = diffs.len();

    if n == 0 {
        return Ok(WilcoxonResult {
            statistic: 0.0,
            p_value: f64::NAN,
            n: 0,
            method: PValueMethod::Degenerate,
        });
    }

    let abs: Vec<f64> = diffs.iter().map(|d| d.abs()).collect();
    let (ranks, tie_sizes) = average_ranks(&abs);

    let r_plus: f64 = diffs
        .iter()
        .zip(&ranks)
        .filter(|(d, _)| **d > 0.0)
        .map(|(_, r)| r)
        .sum();
    let total = (n * (n + 1)) as f64 / 2.0;
    let r_minus = total - r_plus;
    let statistic = r_plus.min(r_minus);

    let has_ties = !tie_sizes.is_empty();
    let (p_value, method) = if n <= EXACT_MAX_N && !had_zeros && !has_ties {
        (exact_p_value(n, statistic), PValueMethod::Exact)
    } else {
        (
            normal_p_value(n, statistic, &tie_sizes),
            PValueMethod::Normal,
        )
    };

    log::debug!("signed-rank test: n={n}, T={statistic}, p={p_value:e} ({method})");

    Ok(WilcoxonResult {
        statistic,
        p_value,
        n,
        method,
    })
}

/// Average (mid) ranks of `values`, 1-based, plus the sizes of every tie
/// group with more than one member.
fn average_ranks(values: &[f64]) -> (Vec<f64>, Vec<usize>) {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut ties = Vec::new();
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // Positions start..end share the mean of ranks start+1..=end.
        let rank = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = rank;
        }
        if end - start > 1 {
            ties.push(end - start);
        }
        start = end;
    }
    (ranks, ties)
}

/// `min(1, 2 * P(T <= t))` under the exact null distribution of the
/// signed-rank sum for `n` untied, non-zero differences.
fn exact_p_value(n: usize, statistic: f64) -> f64 {
    let max_sum = n * (n + 1) / 2;
    // counts[s] = number of subsets of {1..n} whose elements sum to s
    let mut counts = vec![0u64; max_sum + 1];
    counts[0] = 1;
    for k in 1..=n {
        for s in (k..=max_sum).rev() {
            counts[s] += counts[s - k];
        }
    }

    let t = statistic.round() as usize;
    let below: u64 = counts[..=t.min(max_sum)].iter().sum();
    let p = 2.0 * below as f64 / 2f64.powi(n as i32);
    p.min(1.0)
}

fn normal_p_value(n: usize, statistic: f64, tie_sizes: &[usize]) -> f64 {
    let n = n as f64;
    let mean = n * (n + 1.0) / 4.0;
    let tie_term: f64 = tie_sizes
        .iter()
        .map(|&t| {
            let t = t as f64;
            t * t * t - t
        })
        .sum();
    let variance = n * (n + 1.0) * (2.0 * n + 1.0) / 24.0 - tie_term / 48.0;
    if variance <= 0.0 {
        return f64::NAN;
    }
    let z = (statistic - mean) / variance.sqrt();
    (2.0 * normal_sf(z.abs())).min(1.0)
}
