//! 대시보드 백엔드의 에러 타입.
//!
//! 업스트림 어댑터에서 발생하는 모든 실패는 이 모듈의 닫힌 에러 집합으로
//! 표현되며, HTTP 경계에서 상태 코드로 명시적으로 매핑됩니다.

use thiserror::Error;

/// 핵심 에러.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EconError {
    /// 업스트림이 요청한 식별자에 대해 데이터를 반환하지 않음
    #[error("{0}")]
    NotFound(String),

    /// 데이터는 존재했지만 필터링 후 남은 데이터가 없음
    #[error("{0}")]
    EmptyResult(String),

    /// 외부 제공자 호출 실패 (네트워크, 인증, 파싱)
    #[error("{0}")]
    Upstream(String),
}

/// 대시보드 작업을 위한 Result 타입.
pub type EconResult<T> = Result<T, EconError>;

impl EconError {
    /// 에러 코드 문자열 반환 (예: "NOT_FOUND").
    pub fn code(&self) -> &'static str {
        match self {
            EconError::NotFound(_) => "NOT_FOUND",
            EconError::EmptyResult(_) => "EMPTY_RESULT",
            EconError::Upstream(_) => "UPSTREAM_ERROR",
        }
    }

    /// 에러 메시지 반환.
    pub fn message(&self) -> &str {
        match self {
            EconError::NotFound(msg) | EconError::EmptyResult(msg) | EconError::Upstream(msg) => msg,
        }
    }

    /// 업스트림 장애로 인한 에러인지 확인합니다.
    pub fn is_upstream(&self) -> bool {
        matches!(self, EconError::Upstream(_))
    }
}

impl From<reqwest::Error> for EconError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            EconError::Upstream(format!("upstream request timed out: {}", err))
        } else if err.is_connect() {
            EconError::Upstream(format!("upstream connection failed: {}", err))
        } else {
            EconError::Upstream(err.to_string())
        }
    }
}

impl From<serde_json::Error> for EconError {
    fn from(err: serde_json::Error) -> Self {
        EconError::Upstream(format!("failed to parse upstream response: {}", err))
    }
}
