//! # Econ Core
//!
//! 경제 대시보드 백엔드의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 워크스페이스 전반에서 사용되는 기본 타입을 제공합니다:
//! - 매크로 시계열/시세 응답 타입
//! - 샘플링 주기(Frequency) 및 변환(Transform) 정의
//! - 에러 분류 체계
//! - 시계 추상화 (테스트용 수동 시계 포함)
//! - 설정 관리
//! - 로깅 인프라

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::*;
pub use error::*;
pub use logging::*;
pub use types::*;
