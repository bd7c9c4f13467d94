//! 매크로 시계열 타입.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Frequency;

/// 시계열의 단일 관측치.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct TimeSeriesPoint {
    /// 관측일 (YYYY-MM-DD)
    pub date: NaiveDate,
    /// 관측값
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// 매크로 시계열 응답.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct SeriesResult {
    /// 시계열 ID (예: "CPIAUCSL")
    pub series_id: String,
    /// 날짜 오름차순 관측치
    pub history: Vec<TimeSeriesPoint>,
    /// 마지막 관측값
    pub latest: f64,
}

/// 업스트림 원본 관측치.
///
/// 날짜는 제공자가 돌려준 인덱스 문자열 그대로입니다
/// (예: "2024-01-01", "2024-01", "2024-Q1").
#[derive(Debug, Clone, PartialEq)]
pub struct RawObservation {
    pub date: String,
    /// 결측치는 `None`
    pub value: Option<f64>,
}

impl RawObservation {
    pub fn new(date: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// 업스트림 원본 시계열.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSeries {
    pub observations: Vec<RawObservation>,
    /// 제공자 메타데이터의 주기 (조회 실패 시 `None`)
    pub frequency: Option<Frequency>,
}

impl RawSeries {
    pub fn new(observations: Vec<RawObservation>, frequency: Option<Frequency>) -> Self {
        Self {
            observations,
            frequency,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_result_json_shape() {
        let result = SeriesResult {
            series_id: "UNRATE".to_string(),
            history: vec![TimeSeriesPoint::new(
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
                3.7,
            )],
            latest: 3.7,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["series_id"], "UNRATE");
        assert_eq!(json["history"][0]["date"], "2024-01-31");
        assert_eq!(json["history"][0]["value"], 3.7);
        assert_eq!(json["latest"], 3.7);
    }
}
