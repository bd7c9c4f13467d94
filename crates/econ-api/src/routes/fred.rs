//! FRED 매크로 시계열 endpoint.
//!
//! `GET /fred/{series_id}?transform=yoy`: 시계열 조회 (변환 선택).

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use econ_core::{SeriesResult, Transform};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::IntoParams;

use crate::cache::series_key;
use crate::error::{ApiErrorResponse, ApiResult};
use crate::metrics::record_upstream;
use crate::state::AppState;

/// 시계열 조회 쿼리.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FredQuery {
    /// 변환 종류. `yoy`면 전년 대비 %, 그 외 값이나 생략은 원본 값
    pub transform: Option<String>,
}

/// 매크로 시계열 조회.
#[utoipa::path(
    get,
    path = "/fred/{series_id}",
    params(
        ("series_id" = String, Path, description = "FRED 시계열 ID (예: CPIAUCSL, UNRATE)"),
        FredQuery
    ),
    responses(
        (status = 200, description = "날짜 오름차순 시계열", body = SeriesResult),
        (status = 500, description = "데이터 없음 또는 업스트림 오류", body = ApiErrorResponse)
    ),
    tag = "fred"
)]
pub async fn get_fred_series(
    State(state): State<Arc<AppState>>,
    Path(series_id): Path<String>,
    Query(query): Query<FredQuery>,
) -> ApiResult<Json<SeriesResult>> {
    let transform = Transform::from_query(query.transform.as_deref());
    let key = series_key(&series_id, query.transform.as_deref());

    let result = state
        .cache_get_or_fetch(&key, || async {
            let start = Instant::now();
            let result = state.series.fetch(&series_id, transform).await;
            record_upstream("fred", &result, start.elapsed());
            result
        })
        .await;

    match result {
        Ok(series) => Ok(Json(series)),
        Err(e) => {
            if e.is_upstream() {
                error!(series_id = %series_id, cache_key = %key, error = %e, "FRED 조회 실패");
            } else {
                warn!(series_id = %series_id, cache_key = %key, error = %e, "FRED 데이터 없음");
            }
            Err(state.api_error(&e))
        }
    }
}

/// FRED 라우터 생성.
pub fn fred_router() -> Router<Arc<AppState>> {
    Router::new().route("/{series_id}", get(get_fred_series))
}
