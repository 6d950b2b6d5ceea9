//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON을 구조화된 Rust 타입으로 변환하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`, 실패 시 400)
//! 2. **구조 검증**: 필수 필드, 길이, 범위 (`validator`, 실패 시 422)
//! 3. **의미 검증**: 로그인 문자 규칙 (`validator` custom, 실패 시 422)

pub mod create_user;
pub mod update_user;
pub mod patch_user;

pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;
pub use patch_user::{apply_patch, PatchError, PatchOperation, UserField};

use crate::core::errors::{AppError, AppResult};
use crate::core::validation::FieldErrors;

/// 검증을 통과했어야 하는 필드를 꺼냅니다.
///
/// 비어 있으면 해당 필드에 대한 `ValidationFailed`를 반환합니다.
pub(crate) fn required<T>(field: &str, value: Option<T>) -> AppResult<T> {
    value.ok_or_else(|| {
        let mut errors = FieldErrors::new();
        errors.add(field, format!("{}은(는) 필수입니다", field));
        AppError::ValidationFailed(errors)
    })
}
