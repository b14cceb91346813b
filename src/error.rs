use thiserror::Error;

/// An error returned by the filter constructors and by `add`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A construction parameter is out of range.
    #[error("invalid parameter `{name}` (expected {expected}, found: {found})")]
    InvalidParameter {
        name: &'static str,
        expected: &'static str,
        found: String,
    },
    /// The filter already holds as many items as it was sized for.
    #[error("filter is at capacity ({capacity} items)")]
    Overload { capacity: u32 },
}

pub type Result<T> = std::result::Result<T, FilterError>;
