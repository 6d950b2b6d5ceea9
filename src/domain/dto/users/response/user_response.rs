use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::{Gender, User};

/// 사용자 응답 DTO
///
/// 외부에 노출되는 사용자 뷰입니다. 생성/수정 시각 같은 내부 필드는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub login: String,
    pub name: String,
    pub gender: Gender,
    pub age: u32,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            login: user.login.clone(),
            name: user.name.clone(),
            gender: user.gender,
            age: user.age,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
