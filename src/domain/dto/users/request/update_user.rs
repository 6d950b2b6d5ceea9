//! # 사용자 전체 교체 요청 DTO
//!
//! `PUT /api/v1/users/{id}` 본문이자, `PATCH`가 연산을 적용하는 변경 가능한 뷰입니다.
//! 검증 규칙은 [`CreateUserRequest`](super::create_user::CreateUserRequest)와 같습니다.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::entities::users::user::{Gender, User};
use crate::domain::dto::users::request::required;
use crate::utils::string_utils::validate_login;

/// 사용자 전체 교체(upsert) 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "login": "trinity",
///   "name": "Trinity",
///   "gender": "female",
///   "age": 35
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(
        required(message = "로그인은 필수입니다"),
        length(min = 1, max = 50, message = "로그인은 1-50자 사이여야 합니다"),
        custom(function = "validate_login")
    )]
    pub login: Option<String>,

    #[validate(
        required(message = "이름은 필수입니다"),
        length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다")
    )]
    pub name: Option<String>,

    #[validate(required(message = "성별은 필수입니다"))]
    pub gender: Option<Gender>,

    #[validate(
        required(message = "나이는 필수입니다"),
        range(max = 150, message = "나이는 0-150 사이여야 합니다")
    )]
    pub age: Option<u32>,
}

/// 기존 엔티티를 PATCH용 변경 가능한 뷰로 투영합니다.
impl From<&User> for UpdateUserRequest {
    fn from(user: &User) -> Self {
        Self {
            login: Some(user.login.clone()),
            name: Some(user.name.clone()),
            gender: Some(user.gender),
            age: Some(user.age),
        }
    }
}

impl User {
    /// 호출자가 지정한 ID와 교체 요청으로 완전한 엔티티를 만듭니다.
    pub fn from_update(id: Uuid, request: UpdateUserRequest) -> AppResult<Self> {
        Ok(User::new(
            required("login", request.login)?,
            required("name", request.name)?,
            required("gender", request.gender)?,
            required("age", request.age)?,
        )
        .with_id(id))
    }

    /// 검증된 뷰를 기존 엔티티에 병합합니다.
    ///
    /// `id`와 `created_at`은 그대로 두고 `updated_at`을 갱신합니다.
    /// 필드가 하나라도 비어 있으면 엔티티는 변경되지 않습니다.
    pub fn merge_view(&mut self, view: UpdateUserRequest) -> AppResult<()> {
        let login = required("login", view.login)?;
        let name = required("name", view.name)?;
        let gender = required("gender", view.gender)?;
        let age = required("age", view.age)?;

        self.login = login;
        self.name = name;
        self.gender = gender;
        self.age = age;
        self.updated_at = Utc::now();
        Ok(())
    }
}
