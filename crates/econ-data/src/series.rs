//! 매크로 시계열 어댑터.
//!
//! 업스트림 원본 관측치를 정규화하고, 요청된 변환을 적용한 뒤
//! 최근 `max_points`개로 잘라 `SeriesResult`를 만듭니다.

use std::sync::Arc;

use econ_core::{EconError, EconResult, RawSeries, SeriesResult, Transform};
use tracing::debug;

use crate::provider::SeriesSource;
use crate::transform::{keep_last, levels, normalize_observations, resolve_frequency, year_over_year};

/// 매크로 시계열 어댑터.
pub struct MacroSeriesAdapter {
    source: Arc<dyn SeriesSource>,
    max_points: usize,
}

impl MacroSeriesAdapter {
    pub fn new(source: Arc<dyn SeriesSource>, max_points: usize) -> Self {
        Self { source, max_points }
    }

    /// 시계열을 조회하고 변환합니다.
    pub async fn fetch(&self, series_id: &str, transform: Transform) -> EconResult<SeriesResult> {
        let raw = self.source.fetch_series(series_id).await?;
        build_series_result(series_id, &raw, transform, self.max_points)
    }
}

/// 원본 시계열에서 응답을 만듭니다.
///
/// # Errors
/// - `NotFound`: 원본 관측치가 비어 있음
/// - `EmptyResult`: 정규화/변환 후 남은 관측치가 없음
pub fn build_series_result(
    series_id: &str,
    raw: &RawSeries,
    transform: Transform,
    max_points: usize,
) -> EconResult<SeriesResult> {
    if raw.is_empty() {
        return Err(EconError::NotFound(format!(
            "No data returned for FRED series {}",
            series_id
        )));
    }

    let frequency = resolve_frequency(raw);
    let points = normalize_observations(raw);

    let history = match transform {
        Transform::None => levels(&points),
        Transform::Yoy => year_over_year(&points, frequency.yoy_lag()),
    };
    let history = keep_last(history, max_points);

    debug!(
        series_id = series_id,
        frequency = %frequency,
        transform = %transform,
        count = history.len(),
        "시계열 변환 완료"
    );

    let latest = match history.last() {
        Some(point) => point.value,
        None => {
            return Err(EconError::EmptyResult(format!(
                "No observations left for FRED series {} after applying transform {}",
                series_id, transform
            )))
        }
    };

    Ok(SeriesResult {
        series_id: series_id.to_string(),
        history,
        latest,
    })
}
