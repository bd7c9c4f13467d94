//! 전체 라우터 통합 테스트 (가짜 데이터 소스 사용).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use econ_api::{create_router, ApiErrorResponse, AppState, RootResponse};
use econ_core::{
    AppConfig, DailyClose, EconResult, Frequency, ManualClock, QuoteResult, RawObservation,
    RawSeries, SeriesResult, ServerConfig,
};
use econ_data::{QuoteSource, SeriesSource};
use tower::ServiceExt;

/// 분기 GDP 시계열만 아는 소스.
#[derive(Default)]
struct QuarterlySeries {
    calls: AtomicUsize,
}

#[async_trait]
impl SeriesSource for QuarterlySeries {
    async fn fetch_series(&self, series_id: &str) -> EconResult<RawSeries> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if series_id != "GDP" {
            return Ok(RawSeries::default());
        }
        let observations = (0..8)
            .map(|i| {
                let year = 2022 + i / 4;
                let month = (i % 4) * 3 + 1;
                RawObservation::new(
                    format!("{}-{:02}-01", year, month),
                    Some(200.0 + 10.0 * i as f64),
                )
            })
            .collect();
        Ok(RawSeries::new(observations, Some(Frequency::Quarterly)))
    }
}

/// SPY 종가만 아는 소스.
#[derive(Default)]
struct SpyQuotes {
    calls: AtomicUsize,
}

#[async_trait]
impl QuoteSource for SpyQuotes {
    async fn fetch_daily_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        _end: DateTime<Utc>,
    ) -> EconResult<Vec<DailyClose>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if symbol != "SPY" {
            return Ok(Vec::new());
        }
        Ok(vec![
            DailyClose::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 470.0),
            DailyClose::new(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(), 517.0),
        ]
        .into_iter()
        .filter(|c| c.date >= start)
        .collect())
    }
}

struct Harness {
    app: Router,
    clock: Arc<ManualClock>,
    series: Arc<QuarterlySeries>,
    quotes: Arc<SpyQuotes>,
}

fn harness() -> Harness {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
    ));
    let series = Arc::new(QuarterlySeries::default());
    let quotes = Arc::new(SpyQuotes::default());
    let state = AppState::new(
        series.clone(),
        quotes.clone(),
        clock.clone(),
        &AppConfig::default(),
    );
    let app = create_router(Arc::new(state), &ServerConfig::default(), None);

    Harness {
        app,
        clock,
        series,
        quotes,
    }
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Bytes) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body)
}

#[tokio::test]
async fn test_root_message() {
    let h = harness();

    let (status, body) = get(&h.app, "/").await;
    assert_eq!(status, StatusCode::OK);

    let root: RootResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(root.message, "Economic Dashboard Backend is running");
}

#[tokio::test]
async fn test_quote_served_from_cache_until_expiry() {
    let h = harness();

    let (status, first) = get(&h.app, "/quote/SPY").await;
    assert_eq!(status, StatusCode::OK);

    let quote: QuoteResult = serde_json::from_slice(&first).unwrap();
    assert_eq!(quote.latest, 517.0);
    assert!((quote.ytd_change - 10.0).abs() < 1e-9);
    assert_eq!(quote.history.len(), 2);

    h.clock.advance(Duration::minutes(10));
    let (_, second) = get(&h.app, "/quote/SPY").await;
    assert_eq!(first, second);
    assert_eq!(h.quotes.calls.load(Ordering::SeqCst), 1);

    h.clock.advance(Duration::minutes(25));
    get(&h.app, "/quote/SPY").await;
    assert_eq!(h.quotes.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_quarterly_yoy_uses_four_period_lag() {
    let h = harness();

    let (status, body) = get(&h.app, "/fred/GDP?transform=yoy").await;
    assert_eq!(status, StatusCode::OK);

    let result: SeriesResult = serde_json::from_slice(&body).unwrap();
    assert_eq!(result.series_id, "GDP");
    assert_eq!(result.history.len(), 4);
    // 2023Q1 240 vs 2022Q1 200
    assert!((result.history[0].value - 20.0).abs() < 1e-9);
    assert_eq!(result.latest, result.history[3].value);
    assert_eq!(h.series.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_errors_use_json_body() {
    let h = harness();

    let (status, body) = get(&h.app, "/fred/NOPE").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: ApiErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "No data returned for FRED series NOPE");

    let (status, body) = get(&h.app, "/quote/NOPE").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: ApiErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "No data returned for NOPE");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let h = harness();

    let (status, body) = get(&h.app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(doc["paths"]["/fred/{series_id}"].is_object());
    assert!(doc["paths"]["/quote/{symbol}"].is_object());
}

#[tokio::test]
async fn test_metrics_route_absent_without_recorder() {
    let h = harness();

    let (status, _) = get(&h.app, "/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
