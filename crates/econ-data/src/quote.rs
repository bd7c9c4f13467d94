//! 주식 시세 어댑터.
//!
//! 올해 1월 1일(UTC)부터 현재까지의 일별 종가로 연초 대비 변동률을 계산합니다.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use econ_core::{Clock, DailyClose, EconError, EconResult, QuoteHistory, QuoteResult};
use tracing::debug;

use crate::provider::QuoteSource;
use crate::transform::round5;

/// 주식 시세 어댑터.
pub struct QuoteAdapter {
    source: Arc<dyn QuoteSource>,
    clock: Arc<dyn Clock>,
}

impl QuoteAdapter {
    pub fn new(source: Arc<dyn QuoteSource>, clock: Arc<dyn Clock>) -> Self {
        Self { source, clock }
    }

    /// 연초 이후 시세를 조회합니다.
    pub async fn fetch(&self, symbol: &str) -> EconResult<QuoteResult> {
        let now = self.clock.now();
        let start = year_start(now.date_naive());

        let closes = self.source.fetch_daily_closes(symbol, start, now).await?;
        build_quote_result(symbol, &closes)
    }
}

/// 해당 연도의 1월 1일.
fn year_start(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(1).unwrap_or(date)
}

/// 일별 종가에서 응답을 만듭니다.
///
/// 유한하지 않은 종가는 제외합니다. 남은 종가가 없으면 `NotFound`.
pub fn build_quote_result(symbol: &str, closes: &[DailyClose]) -> EconResult<QuoteResult> {
    let mut closes: Vec<DailyClose> = closes
        .iter()
        .copied()
        .filter(|c| c.close.is_finite())
        .collect();
    closes.sort_by_key(|c| c.date);

    let (first, last) = match (closes.first(), closes.last()) {
        (Some(first), Some(last)) => (first.close, last.close),
        _ => {
            return Err(EconError::NotFound(format!(
                "No data returned for {}",
                symbol
            )))
        }
    };

    let ytd_change = if first == 0.0 {
        0.0
    } else {
        (last - first) / first * 100.0
    };

    let history = QuoteHistory {
        dates: closes.iter().map(|c| c.date).collect(),
        values: closes.iter().map(|c| round5(c.close)).collect(),
    };

    debug!(symbol = symbol, count = history.len(), ytd_change = ytd_change, "시세 변환 완료");

    Ok(QuoteResult {
        symbol: symbol.to_string(),
        latest: last,
        ytd_change,
        history,
    })
}
