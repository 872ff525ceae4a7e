//! Statistical calculations over latency samples
//!
//! Every function returns `None` for an empty input instead of inventing a
//! value, so callers can treat "no data" as absence.

use std::cmp::Ordering;

/// Descriptive statistics over millisecond samples
pub struct StatisticsCalculator;

impl StatisticsCalculator {
    /// Arithmetic mean, kept within [min, max] despite summation rounding
    pub fn mean(values: &[f64]) -> Option<f64> {
        let min = Self::min(values)?;
        let max = Self::max(values)?;
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Some(mean.clamp(min, max))
    }

    pub fn min(values: &[f64]) -> Option<f64> {
        values.iter().copied().reduce(f64::min)
    }

    pub fn max(values: &[f64]) -> Option<f64> {
        values.iter().copied().reduce(f64::max)
    }

    /// Median; the mean of the two middle values for an even count
    pub fn median(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            Some((sorted[mid - 1] + sorted[mid]) / 2.0)
        } else {
            Some(sorted[mid])
        }
    }

    /// Sample standard deviation (n - 1 denominator), 0 for a single value
    pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
        let mean = Self::mean(values)?;
        if values.len() < 2 {
            return Some(0.0);
        }

        let sum_squared_diff: f64 = values.iter().map(|&x| (x - mean).powi(2)).sum();
        Some((sum_squared_diff / (values.len() - 1) as f64).sqrt())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(StatisticsCalculator::mean(&[]), None);
        assert_eq!(StatisticsCalculator::min(&[]), None);
        assert_eq!(StatisticsCalculator::max(&[]), None);
        assert_eq!(StatisticsCalculator::median(&[]), None);
        assert_eq!(StatisticsCalculator::sample_std_dev(&[]), None);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(StatisticsCalculator::median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(StatisticsCalculator::median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_sample_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let std_dev = StatisticsCalculator::sample_std_dev(&values).unwrap();
        // population stdev is 2.0, sample stdev is sqrt(32 / 7)
        assert!((std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);

        assert_eq!(StatisticsCalculator::sample_std_dev(&[12.5]), Some(0.0));
    }

    #[test]
    fn test_mean_of_identical_samples_is_exact() {
        let values = [0.1, 0.1, 0.1];
        let mean = StatisticsCalculator::mean(&values).unwrap();
        assert_eq!(mean, 0.1);
        assert!(mean <= StatisticsCalculator::max(&values).unwrap());
    }

    #[test]
    fn test_min_max() {
        let values = [12.0, 3.5, 99.0, 7.25];
        assert_eq!(StatisticsCalculator::min(&values), Some(3.5));
        assert_eq!(StatisticsCalculator::max(&values), Some(99.0));
    }
}
