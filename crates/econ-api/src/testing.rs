//! 라우터 테스트용 가짜 데이터 소스와 상태 헬퍼.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use econ_core::{
    AppConfig, DailyClose, EconError, EconResult, Frequency, ManualClock, RawObservation,
    RawSeries,
};
use econ_data::{QuoteSource, SeriesSource};

use crate::state::AppState;

/// 호출 횟수를 세는 가짜 시계열 소스. 등록되지 않은 ID는 빈 시계열.
#[derive(Default)]
pub struct FakeSeriesSource {
    series: HashMap<String, RawSeries>,
    failing: bool,
    calls: AtomicUsize,
}

impl FakeSeriesSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, series_id: &str, raw: RawSeries) -> Self {
        self.series.insert(series_id.to_string(), raw);
        self
    }

    /// 모든 호출이 `Upstream` 에러로 실패.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SeriesSource for FakeSeriesSource {
    async fn fetch_series(&self, series_id: &str) -> EconResult<RawSeries> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(EconError::Upstream("FRED API error: 503".to_string()));
        }
        Ok(self.series.get(series_id).cloned().unwrap_or_default())
    }
}

/// 호출 횟수를 세는 가짜 시세 소스. 등록되지 않은 심볼은 빈 결과.
#[derive(Default)]
pub struct FakeQuoteSource {
    closes: HashMap<String, Vec<DailyClose>>,
    calls: AtomicUsize,
}

impl FakeQuoteSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_closes(mut self, symbol: &str, closes: Vec<DailyClose>) -> Self {
        self.closes.insert(symbol.to_string(), closes);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteSource for FakeQuoteSource {
    async fn fetch_daily_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        _end: DateTime<Utc>,
    ) -> EconResult<Vec<DailyClose>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .closes
            .get(symbol)
            .map(|closes| closes.iter().copied().filter(|c| c.date >= start).collect())
            .unwrap_or_default())
    }
}

/// 2024-06-15 12:00 UTC에 고정된 시계.
pub fn test_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
    ))
}

/// `start_year` 1월부터 `count`개월의 월간 시계열 (값: 100, 101, ...).
pub fn monthly_series(count: usize, start_year: i32) -> RawSeries {
    let observations = (0..count)
        .map(|i| {
            let year = start_year + (i / 12) as i32;
            let month = (i % 12) + 1;
            RawObservation::new(format!("{}-{:02}-01", year, month), Some(100.0 + i as f64))
        })
        .collect();
    RawSeries::new(observations, Some(Frequency::Monthly))
}

/// 2024년 첫 거래일부터의 종가 (100 → 110).
pub fn closes_2024() -> Vec<DailyClose> {
    vec![
        DailyClose::new(NaiveDate::from_ymd_opt(2023, 12, 29).unwrap(), 90.0),
        DailyClose::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 100.0),
        DailyClose::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 105.123456789),
        DailyClose::new(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(), 110.0),
    ]
}

/// 가짜 소스와 수동 시계로 기본 설정의 상태를 생성합니다.
pub fn create_test_state(
    series: Arc<FakeSeriesSource>,
    quotes: Arc<FakeQuoteSource>,
    clock: Arc<ManualClock>,
) -> AppState {
    AppState::new(series, quotes, clock, &AppConfig::default())
}
