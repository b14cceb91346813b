//! A Bloom filter with a hard item limit.
//!
//! The filter is sized from the number of items you expect to insert (`n`)
//! and the false positive rate you can live with (`p`):
//!
//! * m = ceil(-n * ln(p) / (ln2)^2) bits
//! * k = ceil(-log2(p)) hash functions
//!
//! Once `n` distinct items are in, further inserts fail with
//! [`FilterError::Overload`] instead of quietly pushing the false positive
//! rate past `p`. [`OverloadPolicy::Warn`] relaxes that to a log line.
//!
//! ```
//! use setfilter::{BloomFilter, Filter};
//!
//! let mut bf = BloomFilter::new(100, 0.001)?;
//! assert!(bf.add("apple")?);
//! assert!(!bf.add("apple")?);
//! assert!(bf.contains("apple"));
//! assert_eq!(bf.len(), 1);
//! # Ok::<(), setfilter::FilterError>(())
//! ```

mod bloom_filters;
mod config;
mod error;

pub use bloom_filters::{BloomFilter, Filter};
pub use config::{FilterConfig, OverloadPolicy};
pub use error::{FilterError, Result};

pub type ProbabilisticSetFilter = BloomFilter;
