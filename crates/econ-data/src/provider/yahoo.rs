//! Yahoo Finance 일별 종가 Provider.

use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use econ_core::{DailyClose, EconError, EconResult};
use time::OffsetDateTime;
use tracing::{debug, info};
use yahoo_finance_api as yahoo;

use super::QuoteSource;

/// Yahoo Finance 기반 시세 Provider.
pub struct YahooQuoteProvider {
    connector: yahoo::YahooConnector,
}

impl YahooQuoteProvider {
    pub fn new() -> EconResult<Self> {
        let connector = yahoo::YahooConnector::new()
            .map_err(|e| EconError::Upstream(format!("Yahoo Finance connection failed: {}", e)))?;

        Ok(Self { connector })
    }
}

#[async_trait]
impl QuoteSource for YahooQuoteProvider {
    async fn fetch_daily_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: DateTime<Utc>,
    ) -> EconResult<Vec<DailyClose>> {
        let start_time = naive_date_to_offset_datetime(start)?;
        let end_time = OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| EconError::Upstream(format!("invalid end time: {}", e)))?;

        info!(symbol = symbol, start = %start, "Yahoo Finance 종가 조회");

        let response = self
            .connector
            .get_quote_history(symbol, start_time, end_time)
            .await
            .map_err(|e| map_yahoo_error(symbol, e))?;

        let quotes = response.quotes().map_err(|e| map_yahoo_error(symbol, e))?;

        let mut closes: Vec<DailyClose> = quotes
            .iter()
            .filter_map(|q| {
                Utc.timestamp_opt(q.timestamp, 0)
                    .single()
                    .map(|t| DailyClose::new(t.date_naive(), q.close))
            })
            .collect();
        closes.sort_by_key(|c| c.date);

        debug!(symbol = symbol, count = closes.len(), "Yahoo Finance 종가 수신");
        Ok(closes)
    }
}

/// Yahoo 에러를 도메인 에러로 변환합니다.
///
/// 알 수 없는 심볼(API 에러)과 빈 데이터는 `NotFound`, 그 외는 `Upstream`.
fn map_yahoo_error(symbol: &str, err: yahoo::YahooError) -> EconError {
    match err {
        yahoo::YahooError::ApiError(_) | yahoo::YahooError::NoResult | yahoo::YahooError::NoQuotes => {
            debug!(symbol = symbol, error = %err, "Yahoo Finance 데이터 없음");
            EconError::NotFound(format!("No data returned for {}", symbol))
        }
        other => EconError::Upstream(format!("Yahoo Finance error for {}: {}", symbol, other)),
    }
}

/// NaiveDate를 UTC 자정의 OffsetDateTime으로 변환.
fn naive_date_to_offset_datetime(date: NaiveDate) -> EconResult<OffsetDateTime> {
    let month = time::Month::try_from(date.month() as u8)
        .map_err(|e| EconError::Upstream(format!("invalid start date {}: {}", date, e)))?;
    let day = time::Date::from_calendar_date(date.year(), month, date.day() as u8)
        .map_err(|e| EconError::Upstream(format!("invalid start date {}: {}", date, e)))?;
    Ok(day.midnight().assume_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_date_to_offset_datetime() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let converted = naive_date_to_offset_datetime(date).unwrap();
        assert_eq!(converted.unix_timestamp(), 1_704_067_200);
    }

    #[test]
    fn test_unknown_symbol_maps_to_not_found() {
        // 알 수 없는 심볼에 대해 chart API가 돌려주는 에러 본문
        let message = serde_json::from_value(serde_json::json!({
            "code": "Not Found",
            "description": "No data found, symbol may be delisted"
        }))
        .unwrap();
        let api_error = yahoo::YahooError::ApiError(message);

        for err in [api_error, yahoo::YahooError::NoResult, yahoo::YahooError::NoQuotes] {
            assert_eq!(
                map_yahoo_error("ZZZZ", err),
                EconError::NotFound("No data returned for ZZZZ".to_string())
            );
        }
    }

    #[test]
    fn test_transport_and_data_faults_map_to_upstream() {
        let errors = [
            yahoo::YahooError::FetchFailed("503".to_string()),
            yahoo::YahooError::DataInconsistency,
            yahoo::YahooError::TooManyRequests("chart".to_string()),
        ];

        for err in errors {
            let mapped = map_yahoo_error("AAPL", err);
            assert!(mapped.is_upstream());
            assert!(mapped.message().contains("AAPL"));
        }
    }

    #[tokio::test]
    #[ignore] // 실제 네트워크 호출
    async fn test_fetch_daily_closes_live() {
        let provider = YahooQuoteProvider::new().unwrap();
        let now = Utc::now();
        let start = NaiveDate::from_ymd_opt(now.year(), 1, 1).unwrap();

        let closes = provider.fetch_daily_closes("AAPL", start, now).await.unwrap();
        assert!(!closes.is_empty());
        assert!(closes.windows(2).all(|w| w[0].date <= w[1].date));
    }
}
