//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! 시계열/시세 어댑터와 TTL 캐시를 한 번 생성해 Arc로 공유합니다.

use std::future::Future;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use econ_core::{AppConfig, Clock, EconError, EconResult, SystemClock};
use econ_data::{FredClient, MacroSeriesAdapter, QuoteAdapter, QuoteSource, SeriesSource, YahooQuoteProvider};
use tracing::debug;

use crate::cache::{Payload, TtlCache};
use crate::error::{to_api_error, ApiErrorResponse};
use crate::metrics::record_cache_lookup;

/// 애플리케이션 공유 상태.
#[derive(Clone)]
pub struct AppState {
    /// 매크로 시계열 어댑터 (FRED)
    pub series: Arc<MacroSeriesAdapter>,

    /// 시세 어댑터 (Yahoo Finance)
    pub quotes: Arc<QuoteAdapter>,

    /// 응답 캐시
    pub cache: Arc<TtlCache<Payload>>,

    /// 캐시 만료와 업타임 계산에 쓰는 시계
    pub clock: Arc<dyn Clock>,

    /// 에러 종류별 상태 코드 구분 여부
    pub distinct_error_status: bool,

    /// FRED API 키 설정 여부
    pub fred_configured: bool,

    /// 서버 시작 시간 (업타임 계산용)
    pub started_at: DateTime<Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 데이터 소스와 시계로 상태를 생성합니다.
    ///
    /// 캐시 TTL과 최대 관측치 수는 `config`에서 읽습니다.
    pub fn new(
        series_source: Arc<dyn SeriesSource>,
        quote_source: Arc<dyn QuoteSource>,
        clock: Arc<dyn Clock>,
        config: &AppConfig,
    ) -> Self {
        Self {
            series: Arc::new(MacroSeriesAdapter::new(series_source, config.fred.max_points)),
            quotes: Arc::new(QuoteAdapter::new(quote_source, clock.clone())),
            cache: Arc::new(TtlCache::new(config.cache.ttl(), clock.clone())),
            started_at: clock.now(),
            clock,
            distinct_error_status: config.server.distinct_error_status,
            fred_configured: true,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 실제 FRED/Yahoo 클라이언트로 상태를 생성합니다.
    pub fn from_config(config: &AppConfig) -> EconResult<Self> {
        let fred = FredClient::from_config(&config.fred)?;
        let fred_configured = fred.has_api_key();
        let yahoo = YahooQuoteProvider::new()?;

        Ok(Self::new(Arc::new(fred), Arc::new(yahoo), Arc::new(SystemClock), config)
            .with_fred_configured(fred_configured))
    }

    pub fn with_fred_configured(mut self, configured: bool) -> Self {
        self.fred_configured = configured;
        self
    }

    pub fn with_distinct_error_status(mut self, distinct: bool) -> Self {
        self.distinct_error_status = distinct;
        self
    }

    /// 서버 업타임(초) 반환.
    pub fn uptime_secs(&self) -> i64 {
        self.clock
            .now()
            .signed_duration_since(self.started_at)
            .num_seconds()
    }

    /// 도메인 에러를 현재 상태 코드 정책에 따라 변환합니다.
    pub fn api_error(&self, err: &EconError) -> (StatusCode, Json<ApiErrorResponse>) {
        to_api_error(err, self.distinct_error_status)
    }

    /// 캐시에서 값을 조회하거나, 없으면 `fetch`를 호출하여 저장 후 반환합니다.
    ///
    /// 실패한 결과는 캐시하지 않습니다. 같은 키로 동시에 미스가 나면
    /// 둘 다 조회하며 나중에 저장한 값이 남습니다.
    pub async fn cache_get_or_fetch<T, F, Fut>(&self, key: &str, fetch: F) -> EconResult<T>
    where
        T: Clone + Into<Payload> + TryFrom<Payload>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = EconResult<T>>,
    {
        let kind = key.split(':').next().unwrap_or_default();

        if let Some(value) = self
            .cache
            .get(key)
            .await
            .and_then(|payload| T::try_from(payload).ok())
        {
            debug!(cache_key = key, "캐시 적중");
            record_cache_lookup(kind, true);
            return Ok(value);
        }

        debug!(cache_key = key, "캐시 미스");
        record_cache_lookup(kind, false);

        let value = fetch().await?;
        self.cache.set(key, value.clone().into()).await;
        Ok(value)
    }
}
