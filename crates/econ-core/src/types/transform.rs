//! 시계열 변환 종류.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 매크로 시계열에 적용할 변환.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    /// 원본 값 그대로
    #[default]
    None,
    /// 전년 동기 대비 변동률 (%)
    Yoy,
}

impl Transform {
    /// 쿼리 파라미터에서 변환을 결정합니다.
    ///
    /// 정확히 `"yoy"`일 때만 `Yoy`이고, 생략을 포함한 그 외 값은 모두 `None`.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("yoy") => Transform::Yoy,
            _ => Transform::None,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::None => write!(f, "None"),
            Transform::Yoy => write!(f, "yoy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_from_query() {
        assert_eq!(Transform::from_query(None), Transform::None);
        assert_eq!(Transform::from_query(Some("yoy")), Transform::Yoy);
        assert_eq!(Transform::from_query(Some("")), Transform::None);
    }

    #[test]
    fn test_unrecognized_transform_means_no_transform() {
        assert_eq!(Transform::from_query(Some("mom")), Transform::None);
        assert_eq!(Transform::from_query(Some("YOY")), Transform::None);
        assert_eq!(Transform::from_query(Some(" yoy")), Transform::None);
    }
}
