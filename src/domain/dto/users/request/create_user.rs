//! # 사용자 생성 요청 DTO
//!
//! `POST /api/v1/users` 본문을 표현합니다.
//!
//! ## 검증 규칙
//!
//! ### 로그인 (`login`)
//! - 필수, 1-50자
//! - 허용 문자: 영문자, 숫자 (빈 문자열은 길이 규칙이 처리)
//!
//! ### 이름 (`name`)
//! - 필수, 1-100자
//!
//! ### 성별 (`gender`)
//! - 필수, `male` / `female` / `other`
//!
//! ### 나이 (`age`)
//! - 필수, 0-150
//!
//! 모든 필드는 와이어에서 `Option`이며, 누락은 역직렬화 실패(400)가 아니라
//! `required` 검증 실패(422)로 보고됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::entities::users::user::{Gender, User};
use crate::domain::dto::users::request::required;
use crate::utils::string_utils::validate_login;

/// 새로운 사용자 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "login": "neo",
///   "name": "Thomas Anderson",
///   "gender": "male",
///   "age": 37
/// }
/// ```
///
/// # 에러 응답 예제
///
/// ```json
/// {
///   "error": "Validation failed: login: 로그인은 영문자와 숫자만 사용할 수 있습니다",
///   "details": {
///     "login": ["로그인은 영문자와 숫자만 사용할 수 있습니다"]
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// 로그인 ID
    #[validate(
        required(message = "로그인은 필수입니다"),
        length(min = 1, max = 50, message = "로그인은 1-50자 사이여야 합니다"),
        custom(function = "validate_login")
    )]
    pub login: Option<String>,

    /// 이름
    #[validate(
        required(message = "이름은 필수입니다"),
        length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다")
    )]
    pub name: Option<String>,

    /// 성별
    #[validate(required(message = "성별은 필수입니다"))]
    pub gender: Option<Gender>,

    /// 나이
    #[validate(
        required(message = "나이는 필수입니다"),
        range(max = 150, message = "나이는 0-150 사이여야 합니다")
    )]
    pub age: Option<u32>,
}

impl User {
    /// 검증을 통과한 생성 요청으로 새 엔티티를 만듭니다.
    ///
    /// ID는 비어 있으며 저장소가 할당합니다.
    pub fn from_create(request: CreateUserRequest) -> AppResult<Self> {
        Ok(User::new(
            required("login", request.login)?,
            required("name", request.name)?,
            required("gender", request.gender)?,
            required("age", request.age)?,
        ))
    }
}
