//! FRED (Federal Reserve Economic Data) REST API 클라이언트.
//!
//! # 사용 예시
//!
//! ```rust,ignore
//! use econ_data::provider::{FredClient, SeriesSource};
//!
//! let client = FredClient::from_config(&config.fred)?;
//! let raw = client.fetch_series("CPIAUCSL").await?;
//! ```
//!
//! API 키는 환경 변수 `FRED_API_KEY`에서 읽습니다. 키가 없어도 클라이언트는
//! 생성되며, 요청 시점에 `Upstream` 에러를 반환합니다.

use std::time::Duration;

use async_trait::async_trait;
use econ_core::{EconError, EconResult, FredConfig, Frequency, RawObservation, RawSeries};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::SeriesSource;

/// FRED API 키 환경 변수 이름.
pub const FRED_API_KEY_ENV: &str = "FRED_API_KEY";

/// `series/observations` 응답.
#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    #[serde(default)]
    observations: Vec<FredObservation>,
}

#[derive(Debug, Deserialize)]
struct FredObservation {
    date: String,
    value: String,
}

/// `series` 응답. FRED는 필드 이름을 `seriess`로 씁니다.
#[derive(Debug, Deserialize)]
struct SeriesInfoResponse {
    #[serde(default)]
    seriess: Vec<FredSeriesInfo>,
}

#[derive(Debug, Deserialize)]
struct FredSeriesInfo {
    #[serde(default)]
    frequency_short: Option<String>,
    #[serde(default)]
    frequency: Option<String>,
}

/// 에러 응답 본문.
#[derive(Debug, Deserialize)]
struct FredErrorBody {
    error_message: String,
}

/// FRED REST API 클라이언트.
pub struct FredClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl FredClient {
    /// 새 클라이언트를 생성합니다.
    ///
    /// # Arguments
    /// * `base_url` - API 기본 URL (테스트에서는 mock 서버 주소)
    /// * `api_key` - FRED API 키 (`None`이면 모든 요청이 실패)
    /// * `timeout` - 요청 타임아웃
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<SecretString>,
        timeout: Duration,
    ) -> EconResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EconError::Upstream(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// 설정과 `FRED_API_KEY` 환경 변수로 클라이언트를 생성합니다.
    pub fn from_config(config: &FredConfig) -> EconResult<Self> {
        let api_key = std::env::var(FRED_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(SecretString::from);

        if api_key.is_none() {
            warn!("{} is not set; FRED requests will fail", FRED_API_KEY_ENV);
        }

        Self::new(config.base_url.clone(), api_key, config.timeout())
    }

    /// API 키가 설정되어 있는지 확인합니다.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// API 요청 실행.
    ///
    /// 요청 URL에 API 키가 포함되므로 전송 에러에서는 URL을 제거합니다.
    async fn request<T: DeserializeOwned>(&self, path: &str, series_id: &str) -> EconResult<T> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| EconError::Upstream(format!("{} is not set", FRED_API_KEY_ENV)))?;

        let url = format!("{}/fred/{}", self.base_url, path);
        debug!(series_id = series_id, path = path, "FRED API 요청");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("series_id", series_id),
                ("api_key", api_key.expose_secret()),
                ("file_type", "json"),
            ])
            .send()
            .await
            .map_err(|e| EconError::from(e.without_url()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<FredErrorBody>(&body)
                .map(|b| b.error_message)
                .unwrap_or(body);

            if status == StatusCode::BAD_REQUEST && message.contains("does not exist") {
                return Err(EconError::NotFound(format!(
                    "No data returned for FRED series {}",
                    series_id
                )));
            }

            return Err(EconError::Upstream(format!(
                "FRED API error [{}]: {} - {}",
                series_id, status, message
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| EconError::from(e.without_url()))?;
        Ok(serde_json::from_str(&body)?)
    }

    /// 시계열 관측치를 조회합니다. FRED의 결측치 `"."`는 `None`이 됩니다.
    pub async fn fetch_observations(&self, series_id: &str) -> EconResult<Vec<RawObservation>> {
        let response: ObservationsResponse =
            self.request("series/observations", series_id).await?;

        let observations: Vec<RawObservation> = response
            .observations
            .into_iter()
            .map(|o| RawObservation::new(o.date, parse_value(&o.value)))
            .collect();

        debug!(series_id = series_id, count = observations.len(), "FRED 관측치 수신");
        Ok(observations)
    }

    /// 시계열 메타데이터에서 샘플링 주기를 조회합니다.
    pub async fn fetch_frequency(&self, series_id: &str) -> EconResult<Option<Frequency>> {
        let response: SeriesInfoResponse = self.request("series", series_id).await?;

        Ok(response
            .seriess
            .into_iter()
            .next()
            .and_then(|info| info.frequency_short.or(info.frequency))
            .map(|f| Frequency::from_metadata(&f)))
    }
}

#[async_trait]
impl SeriesSource for FredClient {
    async fn fetch_series(&self, series_id: &str) -> EconResult<RawSeries> {
        info!(series_id = series_id, "FRED 시계열 조회");

        let (observations, frequency) = tokio::join!(
            self.fetch_observations(series_id),
            self.fetch_frequency(series_id)
        );

        let observations = observations?;

        // 메타데이터 조회 실패는 주기 추정으로 대체
        let frequency = match frequency {
            Ok(frequency) => frequency,
            Err(e) => {
                warn!(series_id = series_id, error = %e, "FRED 주기 메타데이터 조회 실패");
                None
            }
        };

        Ok(RawSeries::new(observations, frequency))
    }
}

/// 관측값 문자열 파싱. 숫자가 아니면 결측치.
fn parse_value(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
