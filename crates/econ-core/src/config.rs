//! 설정 관리.
//!
//! 기본값 → 설정 파일(선택) → 환경 변수(`ECON__SECTION__KEY`) 순서로
//! 덮어쓰며 애플리케이션 설정을 로드합니다.
//!
//! FRED API 키는 설정 파일에 두지 않고 `FRED_API_KEY` 환경 변수에서만 읽습니다.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 캐시 TTL 기본값 (30분).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 30 * 60;

/// 시계열 최대 관측치 수 기본값.
pub const DEFAULT_MAX_POINTS: usize = 240;

/// FRED API 기본 URL.
pub const DEFAULT_FRED_BASE_URL: &str = "https://api.stlouisfed.org";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// 서버 설정
    pub server: ServerConfig,
    /// FRED 설정
    pub fred: FredConfig,
    /// 캐시 설정
    pub cache: CacheConfig,
    /// 로깅 설정
    pub logging: LoggingConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
    /// 허용할 CORS origin 목록 (비어 있으면 모든 origin 허용)
    pub cors_origins: Vec<String>,
    /// 전역 요청 타임아웃 (초)
    pub request_timeout_secs: u64,
    /// 에러 종류별로 상태 코드를 구분할지 여부 (기본: 모두 500)
    pub distinct_error_status: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            cors_origins: Vec::new(),
            request_timeout_secs: 60,
            distinct_error_status: false,
        }
    }
}

impl ServerConfig {
    /// `host:port` 형식의 바인딩 주소.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 전역 요청 타임아웃.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// FRED 매크로 데이터 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FredConfig {
    /// REST API 기본 URL
    pub base_url: String,
    /// 응답에 포함할 최대 관측치 수 (최근 값부터 유지)
    pub max_points: usize,
    /// 업스트림 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl Default for FredConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FRED_BASE_URL.to_string(),
            max_points: DEFAULT_MAX_POINTS,
            timeout_secs: 30,
        }
    }
}

impl FredConfig {
    /// 업스트림 요청 타임아웃.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 응답 캐시 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// 캐시 TTL (초)
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl CacheConfig {
    /// 캐시 TTL.
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.ttl_secs as i64)
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "econ_api=info,econ_data=info,tower_http=info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값과 환경 변수만 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            // 파일에서 로드 (선택)
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("ECON")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 설정 값의 유효성을 검사합니다.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.fred.max_points == 0 {
            return Err(config::ConfigError::Message(
                "fred.max_points must be greater than 0".to_string(),
            ));
        }
        if self.cache.ttl_secs == 0 {
            return Err(config::ConfigError::Message(
                "cache.ttl_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.cache.ttl_secs, 1800);
        assert_eq!(config.cache.ttl(), chrono::Duration::minutes(30));
        assert_eq!(config.fred.max_points, 240);
        assert_eq!(config.fred.base_url, "https://api.stlouisfed.org");
        assert!(config.server.cors_origins.is_empty());
        assert!(!config.server.distinct_error_status);
        assert_eq!(config.server.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(config.fred.max_points, DEFAULT_MAX_POINTS);
        assert_eq!(config.cache.ttl_secs, DEFAULT_CACHE_TTL_SECS);
    }

    #[test]
    fn test_validate_rejects_zero_max_points() {
        let mut config = AppConfig::default();
        config.fred.max_points = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_ttl() {
        let mut config = AppConfig::default();
        config.cache.ttl_secs = 0;
        assert!(config.validate().is_err());
    }
}
