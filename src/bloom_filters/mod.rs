mod base;
mod bloom_filter;

pub use self::base::Filter;
pub use self::bloom_filter::BloomFilter;
