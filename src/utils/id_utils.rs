//! # 식별자 유틸리티
//!
//! 라우트 경로의 `{id}` 문자열을 저장소 식별자(`Uuid`)로 변환합니다.

use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};

/// 라우트 식별자를 `Uuid`로 해석합니다.
///
/// 형식이 맞지 않으면 `AppError::InvalidIdentifier`를 반환합니다.
/// 형식은 맞지만 엔티티가 없는 경우(`NotFound`)는 호출자가 판단합니다.
///
/// # 인자
/// * `raw` - 경로에서 추출한 식별자 문자열
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::id_utils::resolve_id;
///
/// assert!(resolve_id("6f1c1b7e-8a0d-4d4b-9c53-0b8f8f3f1c2a").is_ok());
/// assert!(resolve_id("not-a-uuid").is_err());
/// ```
pub fn resolve_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::InvalidIdentifier(format!("'{}'은(는) 올바른 사용자 ID가 아닙니다", raw)))
}
