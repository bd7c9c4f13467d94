//! Prometheus 메트릭 설정 및 유틸리티.
//!
//! HTTP 요청 메트릭과 캐시/업스트림 메트릭을 수집하고 `/metrics` 엔드포인트로 노출합니다.

use std::time::Duration;

use econ_core::EconResult;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};

const LATENCY_BUCKETS: &[f64] = &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];

/// Prometheus 메트릭 레코더를 설치하고 핸들을 반환합니다.
///
/// 레코더는 프로세스당 한 번만 설치할 수 있습니다.
pub fn setup_metrics_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            LATENCY_BUCKETS,
        )?
        .set_buckets_for_metric(
            Matcher::Full("upstream_request_duration_seconds".to_string()),
            LATENCY_BUCKETS,
        )?
        .install_recorder()
}

// ============================================================================
// HTTP 메트릭 헬퍼 함수
// ============================================================================

/// HTTP 요청 카운터 증가.
pub fn record_http_request(method: &str, path: &str) {
    counter!("http_requests_total", "method" => method.to_string(), "path" => path.to_string())
        .increment(1);
}

/// HTTP 응답 카운터 증가.
pub fn record_http_response(method: &str, path: &str, status: u16) {
    counter!(
        "http_responses_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// HTTP 요청 지속 시간 기록.
pub fn record_http_duration(method: &str, path: &str, duration_secs: f64) {
    histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration_secs);
}

// ============================================================================
// 캐시/업스트림 메트릭
// ============================================================================

/// 캐시 조회 결과 기록 (`kind`: "quote" | "fred").
pub fn record_cache_lookup(kind: &str, hit: bool) {
    counter!(
        "cache_lookups_total",
        "kind" => kind.to_string(),
        "result" => if hit { "hit" } else { "miss" }
    )
    .increment(1);
}

/// 업스트림 호출 결과와 소요 시간 기록.
///
/// 실패 시 결과 라벨은 에러 코드의 소문자 형태입니다 (예: "not_found").
pub fn record_upstream<T>(source: &'static str, result: &EconResult<T>, elapsed: Duration) {
    let outcome = match result {
        Ok(_) => "success".to_string(),
        Err(e) => e.code().to_lowercase(),
    };

    counter!("upstream_requests_total", "source" => source, "outcome" => outcome).increment(1);
    histogram!("upstream_request_duration_seconds", "source" => source)
        .record(elapsed.as_secs_f64());
}

// ============================================================================
// 경로 정규화 유틸리티
// ============================================================================

/// 경로의 심볼/시계열 ID를 라우트 패턴으로 바꿉니다.
///
/// 예: `/quote/AAPL` → `/quote/{symbol}`, `/fred/UNRATE` → `/fred/{series_id}`
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.trim_end_matches('/').split('/').collect();
    match segments.as_slice() {
        ["", "quote", _] => "/quote/{symbol}".to_string(),
        ["", "fred", _] => "/fred/{series_id}".to_string(),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_quote() {
        assert_eq!(normalize_path("/quote/AAPL"), "/quote/{symbol}");
        assert_eq!(normalize_path("/quote/BRK-B/"), "/quote/{symbol}");
    }

    #[test]
    fn test_normalize_path_fred() {
        assert_eq!(normalize_path("/fred/CPIAUCSL"), "/fred/{series_id}");
    }

    #[test]
    fn test_normalize_path_static() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/health/ready"), "/health/ready");
        assert_eq!(normalize_path("/metrics"), "/metrics");
    }
}
