//! Statistics shared by the timing tests

use std::time::Duration;

/// Pearson correlation coefficient between a boolean class (whether the inputs of a run
/// were equal) and the run time of that run.
///
/// Expects exactly half of the samples to belong to each class.
pub(crate) fn correlation(tests: &[(bool, Duration)]) -> f64 {
    let n = tests.len();
    let tests = tests
        .iter()
        .map(|t| (if t.0 { 1_f64 } else { 0_f64 }, t.1.as_nanos() as f64))
        .collect::<Vec<_>>();
    // averages
    let (avg_x, avg_y): (f64, f64) = (
        tests.iter().map(|t| t.0).sum::<f64>() / n as f64,
        tests.iter().map(|t| t.1).sum::<f64>() / n as f64,
    );
    assert!((avg_x - 0.5).abs() < 1E-12);
    // standard deviations
    let sd_x = 0.5;
    let sd_y = (1_f64 / n as f64
        * tests
            .iter()
            .map(|t| {
                let difference = t.1 - avg_y;
                difference * difference
            })
            .sum::<f64>())
    .sqrt();
    // covariance
    let cv = 1_f64 / n as f64
        * tests
            .iter()
            .map(|t| (t.0 - avg_x) * (t.1 - avg_y))
            .sum::<f64>();
    cv / (sd_x * sd_y)
}
