//! 주식 시세 타입.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 인덱스 정렬된 종가 이력.
///
/// `dates`와 `values`는 길이가 같고 같은 인덱스끼리 대응합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct QuoteHistory {
    /// 거래일 (YYYY-MM-DD)
    pub dates: Vec<NaiveDate>,
    /// 종가 (소수점 5자리 반올림)
    pub values: Vec<f64>,
}

impl QuoteHistory {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// 시세 응답.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct QuoteResult {
    /// 티커 심볼 (예: "AAPL")
    pub symbol: String,
    /// 최신 종가
    pub latest: f64,
    /// 연초 대비 변동률 (%)
    pub ytd_change: f64,
    /// 연초 이후 종가 이력
    pub history: QuoteHistory,
}

/// 업스트림 일별 종가.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyClose {
    pub date: NaiveDate,
    pub close: f64,
}

impl DailyClose {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}
