use crate::error::{FilterError, Result};
use std::f64::consts::LN_2;

/// What `add` does once the filter holds `expected_items` items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverloadPolicy {
    /// Refuse the insert with [`FilterError::Overload`].
    #[default]
    Error,
    /// Accept the insert and log a warning the first time it happens.
    Warn,
}

/// Construction parameters of a [`BloomFilter`](crate::BloomFilter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig {
    /// number of elements to insert (n)
    pub expected_items: u32,
    /// the target false positive rate (p)
    pub false_positive_rate: f64,
    pub overload: OverloadPolicy,
}

impl FilterConfig {
    pub fn new(expected_items: u32, false_positive_rate: f64) -> Self {
        Self {
            expected_items,
            false_positive_rate,
            overload: OverloadPolicy::default(),
        }
    }

    pub fn with_overload_policy(mut self, overload: OverloadPolicy) -> Self {
        self.overload = overload;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.expected_items == 0 {
            return Err(FilterError::InvalidParameter {
                name: "expected_items",
                expected: "n > 0",
                found: self.expected_items.to_string(),
            });
        }
        // written so that NaN is rejected too
        if !(self.false_positive_rate > 0.0 && self.false_positive_rate < 1.0) {
            return Err(FilterError::InvalidParameter {
                name: "false_positive_rate",
                expected: "0 < p < 1",
                found: self.false_positive_rate.to_string(),
            });
        }
        Ok(())
    }

    /// m = ceil(-n * ln(p) / (ln2)^2)
    pub fn bits(&self) -> u64 {
        calculate_m(self.false_positive_rate, self.expected_items)
    }

    /// k = ceil(-log2(p))
    pub fn hashes(&self) -> u64 {
        calculate_k(self.false_positive_rate)
    }
}

pub(crate) fn calculate_m(f: f64, n: u32) -> u64 {
    (-(n as f64) * f.ln() / LN_2.powi(2)).ceil() as u64
}

pub(crate) fn calculate_k(f: f64) -> u64 {
    (-f.log2()).ceil() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_parameters() {
        for (n, p) in [(0, 0.5), (10, 0.0), (10, 1.0), (10, 1.5), (10, -0.1), (10, f64::NAN)] {
            let res = FilterConfig::new(n, p).validate();
            assert!(
                matches!(res, Err(FilterError::InvalidParameter { .. })),
                "n={} p={} was accepted",
                n,
                p
            );
        }
        assert!(FilterConfig::new(1, 0.5).validate().is_ok());
    }

    #[test]
    fn derived_sizes() {
        let cfg = FilterConfig::new(100, 0.001);
        // 100 * 6.9078 / 0.48045 = 1437.76
        assert_eq!(cfg.bits(), 1438);
        assert_eq!(cfg.hashes(), 10);

        let cfg = FilterConfig::new(3, 0.01);
        assert_eq!(cfg.bits(), 29);
        assert_eq!(cfg.hashes(), 7);

        assert_eq!(FilterConfig::new(1, 0.5).hashes(), 1);
    }

    #[test]
    fn default_policy_is_hard_stop() {
        let cfg = FilterConfig::new(10, 0.1);
        assert_eq!(cfg.overload, OverloadPolicy::Error);
        let cfg = cfg.with_overload_policy(OverloadPolicy::Warn);
        assert_eq!(cfg.overload, OverloadPolicy::Warn);
    }
}
