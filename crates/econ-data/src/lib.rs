//! 업스트림 데이터 수집 및 변환.
//!
//! 이 crate는 다음을 제공합니다:
//! - FRED 매크로 시계열 클라이언트
//! - Yahoo Finance 일별 종가 Provider
//! - 시계열 어댑터 (날짜 정규화, 전년 대비 변환, 최근 N개 유지)
//! - 시세 어댑터 (연초 대비 변동률)

pub mod provider;
pub mod quote;
pub mod series;
pub mod transform;

pub use provider::{FredClient, QuoteSource, SeriesSource, YahooQuoteProvider};
pub use quote::{build_quote_result, QuoteAdapter};
pub use series::{build_series_result, MacroSeriesAdapter};
