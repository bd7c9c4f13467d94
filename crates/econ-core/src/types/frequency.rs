//! 시계열 샘플링 주기.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// 매크로 시계열의 샘플링 주기.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
    Unknown,
}

impl Frequency {
    /// 제공자 메타데이터(예: FRED `frequency_short`)에서 주기를 파싱합니다.
    ///
    /// 접두어로 판정합니다: "Q" 분기, "M" 월, "SA" 반기, "A" 연,
    /// "W"/"BW" 주, "D" 일. 그 외는 `Unknown`.
    pub fn from_metadata(value: &str) -> Self {
        let v = value.trim().to_uppercase();
        if v.starts_with('Q') {
            Frequency::Quarterly
        } else if v.starts_with('M') {
            Frequency::Monthly
        } else if v.starts_with("SA") || v.starts_with("SEMI") {
            Frequency::SemiAnnual
        } else if v.starts_with('A') || v.starts_with('Y') {
            Frequency::Annual
        } else if v.starts_with('W') || v.starts_with("BW") {
            Frequency::Weekly
        } else if v.starts_with('D') {
            Frequency::Daily
        } else {
            Frequency::Unknown
        }
    }

    /// 관측일 간격의 중앙값으로 주기를 추정합니다.
    ///
    /// 관측치가 2개 미만이면 `Unknown`.
    pub fn infer(dates: &[NaiveDate]) -> Self {
        if dates.len() < 2 {
            return Frequency::Unknown;
        }

        let mut gaps: Vec<i64> = dates
            .windows(2)
            .map(|w| (w[1] - w[0]).num_days().abs())
            .collect();
        gaps.sort_unstable();
        let median = gaps[gaps.len() / 2];

        match median {
            0 => Frequency::Unknown,
            1..=4 => Frequency::Daily,
            5..=16 => Frequency::Weekly,
            25..=35 => Frequency::Monthly,
            85..=95 => Frequency::Quarterly,
            178..=186 => Frequency::SemiAnnual,
            360..=370 => Frequency::Annual,
            _ => Frequency::Unknown,
        }
    }

    /// 전년 대비 계산에 사용할 시차(관측치 개수).
    ///
    /// 분기는 4, 그 외(월, 미확인 포함)는 12.
    pub fn yoy_lag(&self) -> usize {
        match self {
            Frequency::Quarterly => 4,
            _ => 12,
        }
    }

    /// 날짜가 속한 기간의 마지막 날을 반환합니다.
    ///
    /// `"YYYY-MM"`, `"YYYY-Qn"` 같은 기간 라벨을 날짜로 바꿀 때만 사용합니다.
    /// 기간 단위가 아닌 주기는 날짜를 그대로 반환합니다.
    pub fn period_end(&self, date: NaiveDate) -> NaiveDate {
        let year = date.year();
        let end_month = match self {
            Frequency::Monthly => date.month(),
            Frequency::Quarterly => (date.month() - 1) / 3 * 3 + 3,
            Frequency::SemiAnnual => {
                if date.month() <= 6 {
                    6
                } else {
                    12
                }
            }
            Frequency::Annual => 12,
            _ => return date,
        };
        last_day_of_month(year, end_month).unwrap_or(date)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::SemiAnnual => "semiannual",
            Frequency::Annual => "annual",
            Frequency::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// 해당 월의 마지막 날.
pub(crate) fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).and_then(|d| d.pred_opt())
}
