//! Input feature space.
//!
//! Target attributes are encoded into indicator (one-hot) column groups
//! before the search starts. Encoding fails fast on missing cells; the
//! search itself assumes complete, finite data.

mod column;
mod dataset;

pub use column::ColumnGroup;
pub use dataset::Dataset;
