//! Core data types.

pub mod category;
pub mod collections;
pub mod granularity;
pub mod record;

pub use category::{Sentiment, Topic};
pub use granularity::Granularity;
pub use record::{DateRange, RawReview, ReviewRecord};
