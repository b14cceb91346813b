use crate::bloom_filters::Filter;
use crate::config::FilterConfig;
use crate::error::{FilterError, Result};
use crate::OverloadPolicy;
use bit_vec::BitVec;
use log::{debug, warn};
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// A Bloom filter sized for `n` items at false positive rate `p` that
/// refuses to take more than `n` items (see [`OverloadPolicy`]).
///
/// Bit positions come from one seeded hash, xxh3 with seeds `0..k`, so the
/// layout for a given key is the same on every run and platform.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    config: FilterConfig,
    /// number of bits in a Bloom filter
    m: u64,
    /// number of hash functions
    k: u64,
    /// number of items recorded by `add`
    count: u32,
    overload_warned: bool,

    storage: BitVec,
}

impl Filter for BloomFilter {
    fn new(n: u32, f: f64) -> Result<Self> {
        Self::with_config(FilterConfig::new(n, f))
    }

    fn add<K: AsRef<[u8]> + ?Sized>(&mut self, value: &K) -> Result<bool> {
        let value = value.as_ref();
        if self.indexes(value).all(|idx| self.is_set(idx)) {
            return Ok(false);
        }

        if self.count >= self.config.expected_items {
            match self.config.overload {
                OverloadPolicy::Error => {
                    return Err(FilterError::Overload {
                        capacity: self.config.expected_items,
                    })
                }
                OverloadPolicy::Warn if !self.overload_warned => {
                    warn!(
                        "bloom filter sized for {} items is over capacity, false positive rate will exceed {}",
                        self.config.expected_items, self.config.false_positive_rate
                    );
                    self.overload_warned = true;
                }
                OverloadPolicy::Warn => {}
            }
        }

        for i in 0..self.k {
            let idx = self.index(value, i);
            self.storage.set(idx, true);
        }
        self.count = self.count.saturating_add(1);
        Ok(true)
    }

    fn contains<K: AsRef<[u8]> + ?Sized>(&self, value: &K) -> bool {
        let value = value.as_ref();
        self.indexes(value).all(|idx| self.is_set(idx))
    }

    fn get_size(&self) -> usize {
        self.storage.len()
    }
}

impl BloomFilter {
    pub fn with_config(config: FilterConfig) -> Result<Self> {
        config.validate()?;
        let m = config.bits();
        let k = config.hashes();
        let nbits = usize::try_from(m).map_err(|_| FilterError::InvalidParameter {
            name: "false_positive_rate",
            expected: "a bit vector that fits in memory",
            found: format!("{} bits", m),
        })?;

        debug!(
            "bloom filter: n={} p={} m={} k={}",
            config.expected_items, config.false_positive_rate, m, k
        );

        Ok(Self {
            config,
            m,
            k,
            count: 0,
            overload_warned: false,
            storage: BitVec::from_elem(nbits, false),
        })
    }

    /// Adds every key in order and returns how many of them were new.
    /// Stops at the first error; keys before it stay recorded.
    pub fn add_all<I, K>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        let mut added = 0;
        for value in values {
            if self.add(&value)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Number of items recorded so far.
    pub fn len(&self) -> usize {
        self.count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn expected_items(&self) -> u32 {
        self.config.expected_items
    }

    pub fn false_positive_rate(&self) -> f64 {
        self.config.false_positive_rate
    }

    pub fn overload_policy(&self) -> OverloadPolicy {
        self.config.overload
    }

    /// Number of hash functions (k).
    pub fn hashes(&self) -> usize {
        self.k as usize
    }

    /// How many more new items fit before the overload policy kicks in.
    pub fn remaining(&self) -> usize {
        self.config.expected_items.saturating_sub(self.count) as usize
    }

    pub fn count_ones(&self) -> usize {
        self.storage.iter().filter(|bit| *bit).count()
    }

    pub fn fill_ratio(&self) -> f64 {
        self.count_ones() as f64 / self.m as f64
    }

    /// Probability that a key never added is reported present, given the
    /// bits set right now.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.fill_ratio().powi(self.k as i32)
    }

    /// Approximate number of distinct keys behind the set bits,
    /// n* = -(m/k) * ln(1 - X/m). Saturates to `usize::MAX` once every bit is set.
    pub fn estimated_count(&self) -> usize {
        let m = self.m as f64;
        let k = self.k as f64;
        let ones = self.count_ones() as f64;
        (-(m / k) * (1.0 - ones / m).ln()).round() as usize
    }

    fn index(&self, value: &[u8], seed: u64) -> usize {
        (xxh3_64_with_seed(value, seed) % self.m) as usize
    }

    fn indexes<'a>(&'a self, value: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
        (0..self.k).map(move |i| self.index(value, i))
    }

    fn is_set(&self, idx: usize) -> bool {
        self.storage.get(idx) == Some(true)
    }
}
