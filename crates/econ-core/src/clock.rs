//! 시계 추상화.
//!
//! 캐시 만료 판정과 연초(YTD) 기준일 계산은 현재 시각에 의존합니다.
//! 현재 시각을 `Clock` trait으로 주입받아 테스트에서 시간을 제어할 수 있습니다.

use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

/// 현재 시각 제공자.
pub trait Clock: Send + Sync {
    /// 현재 UTC 시각.
    fn now(&self) -> DateTime<Utc>;
}

/// 시스템 시계.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 수동으로 조작하는 시계.
///
/// 테스트나 시뮬레이션에서 시간 경과를 결정적으로 재현할 때 사용합니다.
#[derive(Debug)]
pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    /// 주어진 시각에 고정된 시계 생성.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(start),
        }
    }

    /// 시각을 지정한 값으로 설정합니다.
    pub fn set(&self, at: DateTime<Utc>) {
        let mut now = self.now.write().unwrap_or_else(|e| e.into_inner());
        *now = at;
    }

    /// 시각을 `by`만큼 앞으로 이동합니다.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.write().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(|e| e.into_inner())
    }
}
