//! 시계열 정규화 및 변환 유틸리티.
//!
//! 날짜 정규화, 전년 대비 변동률, 최근 N개 유지, 반올림을 제공합니다.

use chrono::NaiveDate;
use econ_core::{Frequency, RawSeries, TimeSeriesPoint};

/// 관측치 인덱스 문자열을 달력 날짜로 변환합니다.
///
/// - `"YYYY-MM-DD"`: 그대로 (시각 부분은 무시)
/// - `"YYYY-MM"`: 해당 월의 마지막 날
/// - `"YYYY-Qn"`: 해당 분기의 마지막 날
/// - `"YYYY"`: 해당 연도의 마지막 날
///
/// 해석할 수 없으면 `None`.
pub fn parse_observation_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    // 타임스탬프가 붙은 경우 날짜 부분만 사용
    let date_part = raw.split(['T', ' ']).next().unwrap_or(raw);
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return Some(date);
    }

    if let Some((year, quarter)) = raw.split_once("-Q") {
        let year: i32 = year.parse().ok()?;
        let quarter: u32 = quarter.parse().ok()?;
        if !(1..=4).contains(&quarter) {
            return None;
        }
        let start = NaiveDate::from_ymd_opt(year, quarter * 3, 1)?;
        return Some(Frequency::Quarterly.period_end(start));
    }

    if let Some((year, month)) = raw.split_once('-') {
        if month.len() != 2 {
            return None;
        }
        let start = NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)?;
        return Some(Frequency::Monthly.period_end(start));
    }

    if raw.len() == 4 {
        let start = NaiveDate::from_ymd_opt(raw.parse().ok()?, 1, 1)?;
        return Some(Frequency::Annual.period_end(start));
    }

    None
}

/// 시계열의 주기를 결정합니다.
///
/// 메타데이터가 있으면 그대로 쓰고, 없거나 `Unknown`이면 날짜 간격으로 추정합니다.
pub fn resolve_frequency(raw: &RawSeries) -> Frequency {
    match raw.frequency {
        Some(frequency) if frequency != Frequency::Unknown => frequency,
        _ => {
            let mut dates: Vec<NaiveDate> = raw
                .observations
                .iter()
                .filter_map(|o| parse_observation_date(&o.date))
                .collect();
            dates.sort_unstable();
            Frequency::infer(&dates)
        }
    }
}

/// 원본 관측치를 날짜 오름차순의 `(날짜, 값)` 목록으로 정규화합니다.
///
/// 날짜를 해석할 수 없는 관측치는 제외하고, 유한하지 않은 값은 결측치로 둡니다.
/// 결측치는 여기서 제거하지 않습니다 (전년 대비 시차 계산에 위치가 필요).
pub fn normalize_observations(raw: &RawSeries) -> Vec<(NaiveDate, Option<f64>)> {
    let mut points: Vec<(NaiveDate, Option<f64>)> = raw
        .observations
        .iter()
        .filter_map(|o| match parse_observation_date(&o.date) {
            Some(date) => Some((date, o.value.filter(|v| v.is_finite()))),
            None => {
                tracing::debug!(date = %o.date, "해석할 수 없는 관측일 제외");
                None
            }
        })
        .collect();

    points.sort_by_key(|(date, _)| *date);
    points
}

/// 결측치를 제거하고 원본 값 그대로의 관측치를 반환합니다.
pub fn levels(points: &[(NaiveDate, Option<f64>)]) -> Vec<TimeSeriesPoint> {
    points
        .iter()
        .filter_map(|(date, value)| value.map(|v| TimeSeriesPoint::new(*date, v)))
        .collect()
}

/// 전년 대비 변동률 (%).
///
/// 각 위치의 값을 `lag`개 앞의 값과 비교합니다. 처음 `lag`개,
/// 자신 또는 비교 대상이 결측인 위치, 비교 대상이 0인 위치는 제외됩니다.
pub fn year_over_year(points: &[(NaiveDate, Option<f64>)], lag: usize) -> Vec<TimeSeriesPoint> {
    if lag == 0 || points.len() <= lag {
        return Vec::new();
    }

    points
        .iter()
        .zip(points.iter().skip(lag))
        .filter_map(|((_, prev), (date, curr))| {
            let (prev, curr) = ((*prev)?, (*curr)?);
            if prev == 0.0 {
                return None;
            }
            let change = (curr - prev) / prev * 100.0;
            change.is_finite().then(|| TimeSeriesPoint::new(*date, change))
        })
        .collect()
}

/// 최근 `max_points`개만 유지합니다.
pub fn keep_last<T>(mut items: Vec<T>, max_points: usize) -> Vec<T> {
    if items.len() > max_points {
        items.drain(..items.len() - max_points);
    }
    items
}

/// 소수점 5자리 반올림.
pub fn round5(value: f64) -> f64 {
    (value * 1e5).round() / 1e5
}
