//! 주식 시세 endpoint.
//!
//! `GET /quote/{symbol}`: 연초 이후 일별 종가와 연초 대비 변동률.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use econ_core::QuoteResult;
use tracing::{error, warn};

use crate::cache::quote_key;
use crate::error::{ApiErrorResponse, ApiResult};
use crate::metrics::record_upstream;
use crate::state::AppState;

/// 시세 조회.
#[utoipa::path(
    get,
    path = "/quote/{symbol}",
    params(
        ("symbol" = String, Path, description = "티커 심볼 (예: AAPL, ^GSPC)")
    ),
    responses(
        (status = 200, description = "연초 이후 시세", body = QuoteResult),
        (status = 500, description = "데이터 없음 또는 업스트림 오류", body = ApiErrorResponse)
    ),
    tag = "quote"
)]
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<QuoteResult>> {
    let key = quote_key(&symbol);

    let result = state
        .cache_get_or_fetch(&key, || async {
            let start = Instant::now();
            let result = state.quotes.fetch(&symbol).await;
            record_upstream("yahoo", &result, start.elapsed());
            result
        })
        .await;

    match result {
        Ok(quote) => Ok(Json(quote)),
        Err(e) => {
            if e.is_upstream() {
                error!(symbol = %symbol, cache_key = %key, error = %e, "시세 조회 실패");
            } else {
                warn!(symbol = %symbol, cache_key = %key, error = %e, "시세 데이터 없음");
            }
            Err(state.api_error(&e))
        }
    }
}

/// 시세 라우터 생성.
pub fn quote_router() -> Router<Arc<AppState>> {
    Router::new().route("/{symbol}", get(get_quote))
}
