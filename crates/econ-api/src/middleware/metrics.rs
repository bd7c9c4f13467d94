//! 요청 단위 HTTP 메트릭.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

use crate::metrics::{
    normalize_path, record_http_duration, record_http_request, record_http_response,
};

/// 대시보드 API 요청마다 요청 수, 응답 상태, 처리 시간을 기록합니다.
///
/// `/quote/AAPL`, `/fred/UNRATE`처럼 심볼이나 시계열 ID가 들어간 경로는
/// 라우트 패턴(`/quote/{symbol}`, `/fred/{series_id}`)으로 라벨링하므로
/// 조회한 티커 수만큼 시계열이 늘어나지 않습니다.
pub async fn metrics_layer(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = normalize_path(request.uri().path());

    record_http_request(&method, &path);

    let response = next.run(request).await;

    record_http_response(&method, &path, response.status().as_u16());
    record_http_duration(&method, &path, start.elapsed().as_secs_f64());

    response
}
