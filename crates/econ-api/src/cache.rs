//! 프로세스 내 TTL 응답 캐시.
//!
//! 키별로 `{data, timestamp}`를 보관하며, 저장 후 TTL 이상 지난 항목은
//! 없는 것으로 취급합니다. 만료된 항목을 미리 지우지는 않고, 다음 저장 시
//! 통째로 교체됩니다.
//!
//! # 키 형식
//!
//! - `quote:{symbol}`
//! - `fred:{series_id}:{transform}` (쿼리 값 그대로, 생략 시 `None`)

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use econ_core::{Clock, QuoteResult, SeriesResult};
use serde::Serialize;
use tokio::sync::RwLock;

/// 시세 캐시 키.
pub fn quote_key(symbol: &str) -> String {
    format!("quote:{}", symbol)
}

/// 매크로 시계열 캐시 키.
///
/// `transform`은 요청 쿼리 문자열 그대로 사용합니다.
pub fn series_key(series_id: &str, transform: Option<&str>) -> String {
    format!("fred:{}:{}", series_id, transform.unwrap_or("None"))
}

/// 캐시에 저장되는 응답.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Series(SeriesResult),
    Quote(QuoteResult),
}

impl From<SeriesResult> for Payload {
    fn from(value: SeriesResult) -> Self {
        Payload::Series(value)
    }
}

impl From<QuoteResult> for Payload {
    fn from(value: QuoteResult) -> Self {
        Payload::Quote(value)
    }
}

impl TryFrom<Payload> for SeriesResult {
    type Error = Payload;

    fn try_from(value: Payload) -> Result<Self, Self::Error> {
        match value {
            Payload::Series(series) => Ok(series),
            other => Err(other),
        }
    }
}

impl TryFrom<Payload> for QuoteResult {
    type Error = Payload;

    fn try_from(value: Payload) -> Result<Self, Self::Error> {
        match value {
            Payload::Quote(quote) => Ok(quote),
            other => Err(other),
        }
    }
}

/// 캐시 항목.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub data: V,
    /// 저장 시각
    pub timestamp: DateTime<Utc>,
}

/// TTL 캐시.
pub struct TtlCache<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// 유효한 항목을 조회합니다. `now - timestamp >= ttl`이면 `None`.
    pub async fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;

        if self.clock.now() - entry.timestamp < self.ttl {
            Some(entry.data.clone())
        } else {
            None
        }
    }

    /// 항목을 현재 시각으로 저장합니다. 기존 항목은 교체됩니다.
    pub async fn set(&self, key: impl Into<String>, data: V) {
        let entry = CacheEntry {
            data,
            timestamp: self.clock.now(),
        };
        self.entries.write().await.insert(key.into(), entry);
    }

    /// 저장된 항목 수 (만료 항목 포함).
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use econ_core::ManualClock;

    fn setup() -> (Arc<ManualClock>, TtlCache<String>) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        ));
        let cache = TtlCache::new(Duration::minutes(30), clock.clone());
        (clock, cache)
    }

    #[test]
    fn test_cache_keys() {
        assert_eq!(quote_key("AAPL"), "quote:AAPL");
        assert_eq!(series_key("UNRATE", None), "fred:UNRATE:None");
        assert_eq!(series_key("CPIAUCSL", Some("yoy")), "fred:CPIAUCSL:yoy");
        assert_eq!(series_key("CPIAUCSL", Some("YOY")), "fred:CPIAUCSL:YOY");
    }

    #[tokio::test]
    async fn test_get_within_ttl() {
        let (clock, cache) = setup();
        cache.set("quote:AAPL", "v1".to_string()).await;

        clock.advance(Duration::minutes(29));
        assert_eq!(cache.get("quote:AAPL").await, Some("v1".to_string()));
        assert_eq!(cache.get("quote:MSFT").await, None);
    }

    #[tokio::test]
    async fn test_entry_expires_at_ttl() {
        let (clock, cache) = setup();
        cache.set("quote:AAPL", "v1".to_string()).await;

        clock.advance(Duration::minutes(30));
        assert_eq!(cache.get("quote:AAPL").await, None);

        // 만료 항목은 남아 있음
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_set_replaces_and_resets_timestamp() {
        let (clock, cache) = setup();
        cache.set("k", "old".to_string()).await;

        clock.advance(Duration::minutes(31));
        cache.set("k", "new".to_string()).await;
        clock.advance(Duration::minutes(10));

        assert_eq!(cache.get("k").await, Some("new".to_string()));
        assert_eq!(cache.len().await, 1);
    }

    #[test]
    fn test_payload_conversion() {
        let series = SeriesResult {
            series_id: "UNRATE".to_string(),
            history: Vec::new(),
            latest: 3.7,
        };
        let payload = Payload::from(series.clone());

        assert_eq!(SeriesResult::try_from(payload.clone()), Ok(series));
        assert!(QuoteResult::try_from(payload).is_err());
    }
}
