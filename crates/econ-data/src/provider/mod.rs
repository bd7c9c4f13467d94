//! 업스트림 데이터 Provider 모듈.
//!
//! ## FRED
//! - `FredClient`: FRED REST API 클라이언트 (API 키 필요)
//! - 관측치(`series/observations`)와 주기 메타데이터(`series`) 조회
//!
//! ## Yahoo Finance
//! - `YahooQuoteProvider`: 일별 종가 이력 조회

pub mod fred;
pub mod yahoo;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use econ_core::{DailyClose, EconResult, RawSeries};

pub use fred::FredClient;
pub use yahoo::YahooQuoteProvider;

/// 매크로 시계열 소스 트레잇.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// 시계열의 원본 관측치와 주기 메타데이터를 조회합니다.
    ///
    /// 관측치가 없으면 빈 `RawSeries`를 반환할 수 있으며,
    /// 비어 있는지 판단은 어댑터가 합니다.
    async fn fetch_series(&self, series_id: &str) -> EconResult<RawSeries>;
}

/// 일별 종가 소스 트레잇.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// `start`일부터 `end`까지의 일별 종가를 조회합니다.
    async fn fetch_daily_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: DateTime<Utc>,
    ) -> EconResult<Vec<DailyClose>>;
}
