//! Hash collections used on the aggregation hot path.

pub use rustc_hash::FxHashMap;
