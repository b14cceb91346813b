use crate::error::Result;

pub trait Filter {
    /// n -- number of elements to insert
    /// f -- the false positive rate
    fn new(n: u32, f: f64) -> Result<Self>
    where
        Self: Sized;

    /// Returns `Ok(false)` when every bit of `value` was already set, i.e.
    /// nothing new was recorded and the item counter did not move.
    fn add<K: AsRef<[u8]> + ?Sized>(&mut self, value: &K) -> Result<bool>;

    fn contains<K: AsRef<[u8]> + ?Sized>(&self, value: &K) -> bool;

    /// Number of bits (m).
    fn get_size(&self) -> usize;
}
