//! Benchmark result reporting.

use std::time::Duration;

/// Outcome of one scenario case.
#[derive(Debug, Clone, Copy)]
pub struct CaseResult {
    pub index: usize,
    pub cost: f64,
    pub optimal: f64,
}

impl CaseResult {
    /// Signed deviation from the reference optimal cost.
    pub fn error(&self) -> f64 {
        self.cost - self.optimal
    }
}

/// Print the per-case table, summary statistics and any cases whose
/// absolute error exceeds `threshold`.
pub fn print_report(results: &[CaseResult], threshold: f64, elapsed: Duration) {
    println!(
        "{:>4} | {:>10} | {:>10} | {:>10}",
        "Case", "dist", "optimal", "err"
    );
    println!("{}", "-".repeat(48));
    for r in results {
        println!(
            "{:4} | {:10.6} | {:10.6} | {:10.6}",
            r.index,
            r.cost,
            r.optimal,
            r.error()
        );
    }

    println!();
    println!("--- SUMMARY ---");
    println!(
        "{} cases | mean|err|={:.3e} | max|err|={:.3e} | {:.2}s",
        results.len(),
        mean_abs_error(results),
        max_abs_error(results),
        elapsed.as_secs_f64()
    );

    let bad: Vec<&CaseResult> = results
        .iter()
        .filter(|r| r.error().abs() > threshold)
        .collect();
    if !bad.is_empty() {
        println!();
        println!("Cases with |err| > {threshold}: {}", bad.len());
        println!("{:>4} | {:>10}", "Idx", "err");
        for r in bad {
            println!("{:4} | {:10.6}", r.index, r.error());
        }
    }
}

fn mean_abs_error(results: &[CaseResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    results.iter().map(|r| r.error().abs()).sum::<f64>() / results.len() as f64
}

fn max_abs_error(results: &[CaseResult]) -> f64 {
    results
        .iter()
        .map(|r| r.error().abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_signed_deviation() {
        let r = CaseResult {
            index: 0,
            cost: 3.5,
            optimal: 4.0,
        };
        assert_eq!(r.error(), -0.5);
    }

    #[test]
    fn summary_stats() {
        let results = [
            CaseResult {
                index: 0,
                cost: 1.0,
                optimal: 1.0,
            },
            CaseResult {
                index: 1,
                cost: 2.5,
                optimal: 2.0,
            },
        ];
        assert_eq!(mean_abs_error(&results), 0.25);
        assert_eq!(max_abs_error(&results), 0.5);
        assert_eq!(mean_abs_error(&[]), 0.0);
    }
}
