//! 도메인 타입.

mod frequency;
mod quote;
mod series;
mod transform;

pub use frequency::Frequency;
pub use quote::{DailyClose, QuoteHistory, QuoteResult};
pub use series::{RawObservation, RawSeries, SeriesResult, TimeSeriesPoint};
pub use transform::Transform;
