//! # 사용자 부분 수정(PATCH) 요청 DTO
//!
//! RFC 6902 JSON Patch 와이어 형식을 타입이 있는 연산으로 역직렬화하고,
//! 스키마가 알려진 뷰([`UpdateUserRequest`])에 순서대로 적용합니다.
//!
//! ## 지원 경로
//!
//! `/login`, `/name`, `/gender`, `/age` (대소문자 무시)
//!
//! ## 적용 규칙
//!
//! - 연산은 순서대로 적용되며 앞선 연산의 결과가 뒤 연산에 보입니다.
//! - 알 수 없는 경로, 실패한 `test`, 값이 없는 필드의 `remove`/`move`/`copy`,
//!   타입이 맞지 않는 값은 전체 적용을 실패시킵니다 (부분 적용 없음).
//! - `add`/`replace`에 `null`을 넣으면 필드가 비워지며, 이후 `required` 검증에서 걸립니다.
//!
//! ```json
//! [
//!   { "op": "test", "path": "/login", "value": "neo" },
//!   { "op": "replace", "path": "/login", "value": "neo2" },
//!   { "op": "copy", "from": "/login", "path": "/name" }
//! ]
//! ```

use std::fmt;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::domain::dto::users::request::update_user::UpdateUserRequest;

/// 단일 패치 연산
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

/// 패치가 가리킬 수 있는 뷰의 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Login,
    Name,
    Gender,
    Age,
}

impl UserField {
    /// JSON Pointer 경로를 필드로 해석합니다. 알 수 없는 경로는 `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let segment = path.strip_prefix('/')?;
        match segment.to_ascii_lowercase().as_str() {
            "login" => Some(UserField::Login),
            "name" => Some(UserField::Name),
            "gender" => Some(UserField::Gender),
            "age" => Some(UserField::Age),
            _ => None,
        }
    }
}

/// 패치 적용 실패
///
/// `path`는 실패한 연산의 경로이며 422 응답의 필드 키로 사용됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchError {
    pub path: String,
    pub message: String,
}

impl PatchError {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self { path: path.to_string(), message: message.into() }
    }
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl UpdateUserRequest {
    /// 필드의 현재 값 (비어 있으면 `Value::Null`)
    pub fn read_field(&self, field: UserField) -> Value {
        match field {
            UserField::Login => self.login.clone().map(Value::String).unwrap_or(Value::Null),
            UserField::Name => self.name.clone().map(Value::String).unwrap_or(Value::Null),
            UserField::Gender => self
                .gender
                .map(|g| Value::String(g.as_str().to_string()))
                .unwrap_or(Value::Null),
            UserField::Age => self.age.map(Value::from).unwrap_or(Value::Null),
        }
    }

    /// 필드에 JSON 값을 씁니다. 타입이 맞지 않으면 에러 메시지를 반환합니다.
    pub fn write_field(&mut self, field: UserField, value: Value) -> Result<(), String> {
        match field {
            UserField::Login => self.login = convert(value)?,
            UserField::Name => self.name = convert(value)?,
            UserField::Gender => self.gender = convert(value)?,
            UserField::Age => self.age = convert(value)?,
        }
        Ok(())
    }

    pub fn clear_field(&mut self, field: UserField) {
        match field {
            UserField::Login => self.login = None,
            UserField::Name => self.name = None,
            UserField::Gender => self.gender = None,
            UserField::Age => self.age = None,
        }
    }
}

fn convert<T: DeserializeOwned>(value: Value) -> Result<Option<T>, String> {
    serde_json::from_value(value).map_err(|e| format!("값의 형식이 올바르지 않습니다: {}", e))
}

fn resolve(path: &str) -> Result<UserField, PatchError> {
    UserField::parse(path).ok_or_else(|| PatchError::new(path, "존재하지 않는 경로입니다"))
}

fn read_existing(view: &UpdateUserRequest, path: &str) -> Result<(UserField, Value), PatchError> {
    let field = resolve(path)?;
    let value = view.read_field(field);
    if value.is_null() {
        return Err(PatchError::new(path, "값이 없는 경로입니다"));
    }
    Ok((field, value))
}

/// 연산들을 순서대로 뷰에 적용합니다.
///
/// 첫 번째 실패에서 멈추고 에러를 반환합니다. 호출자는 실패 시
/// 뷰를 버려야 합니다 (이미 적용된 앞쪽 연산이 남아 있을 수 있음).
///
/// # 인자
/// * `view` - 기존 엔티티에서 투영한 작업용 뷰
/// * `operations` - 적용할 연산 목록
pub fn apply_patch(view: &mut UpdateUserRequest, operations: &[PatchOperation]) -> Result<(), PatchError> {
    for operation in operations {
        match operation {
            PatchOperation::Add { path, value } | PatchOperation::Replace { path, value } => {
                let field = resolve(path)?;
                view.write_field(field, value.clone())
                    .map_err(|message| PatchError::new(path, message))?;
            }
            PatchOperation::Remove { path } => {
                let (field, _) = read_existing(view, path)?;
                view.clear_field(field);
            }
            PatchOperation::Move { from, path } => {
                let (source, value) = read_existing(view, from)?;
                let target = resolve(path)?;
                if source != target {
                    view.write_field(target, value)
                        .map_err(|message| PatchError::new(path, message))?;
                    view.clear_field(source);
                }
            }
            PatchOperation::Copy { from, path } => {
                let (_, value) = read_existing(view, from)?;
                let target = resolve(path)?;
                view.write_field(target, value)
                    .map_err(|message| PatchError::new(path, message))?;
            }
            PatchOperation::Test { path, value } => {
                let field = resolve(path)?;
                if !values_equal(&view.read_field(field), value) {
                    return Err(PatchError::new(path, "test 연산의 값이 현재 값과 일치하지 않습니다"));
                }
            }
        }
    }
    Ok(())
}

/// `test` 연산의 비교: 숫자는 표기(`4`, `4.0`)와 상관없이 값으로 비교합니다.
fn values_equal(current: &Value, expected: &Value) -> bool {
    match (current, expected) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
        _ => current == expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::domain::entities::users::user::Gender;

    fn view() -> UpdateUserRequest {
        UpdateUserRequest {
            login: Some("neo".to_string()),
            name: Some("Thomas".to_string()),
            gender: Some(Gender::Male),
            age: Some(37),
        }
    }

    fn ops(document: Value) -> Vec<PatchOperation> {
        serde_json::from_value(document).unwrap()
    }

    #[test]
    fn test_deserialize_rfc6902_document() {
        let operations = ops(json!([
            { "op": "replace", "path": "/login", "value": "neo2" },
            { "op": "move", "from": "/name", "path": "/login" },
            { "op": "remove", "path": "/age" }
        ]));

        assert_eq!(operations.len(), 3);
        assert_eq!(
            operations[1],
            PatchOperation::Move { from: "/name".to_string(), path: "/login".to_string() }
        );
    }

    #[test]
    fn test_malformed_operations_fail_to_deserialize() {
        assert!(serde_json::from_value::<Vec<PatchOperation>>(json!([{ "op": "replace", "path": "/login" }])).is_err());
        assert!(serde_json::from_value::<Vec<PatchOperation>>(json!([{ "op": "frobnicate", "path": "/login" }])).is_err());
    }

    #[test]
    fn test_parse_path_is_case_insensitive() {
        assert_eq!(UserField::parse("/Login"), Some(UserField::Login));
        assert_eq!(UserField::parse("/AGE"), Some(UserField::Age));
        assert_eq!(UserField::parse("login"), None);
        assert_eq!(UserField::parse("/email"), None);
    }

    #[test]
    fn test_operations_apply_in_sequence() {
        let mut target = view();
        let operations = ops(json!([
            { "op": "replace", "path": "/login", "value": "neo2" },
            { "op": "copy", "from": "/login", "path": "/name" },
            { "op": "test", "path": "/name", "value": "neo2" }
        ]));

        apply_patch(&mut target, &operations).unwrap();
        assert_eq!(target.login.as_deref(), Some("neo2"));
        assert_eq!(target.name.as_deref(), Some("neo2"));
    }

    #[test]
    fn test_move_clears_source() {
        let mut target = view();
        apply_patch(&mut target, &ops(json!([{ "op": "move", "from": "/name", "path": "/login" }]))).unwrap();

        assert_eq!(target.login.as_deref(), Some("Thomas"));
        assert!(target.name.is_none());
    }

    #[test]
    fn test_unknown_path_fails_closed() {
        let mut target = view();
        let error = apply_patch(&mut target, &ops(json!([{ "op": "replace", "path": "/email", "value": "x" }]))).unwrap_err();

        assert_eq!(error.path, "/email");
    }

    #[test]
    fn test_failed_test_operation() {
        let mut target = view();
        let error = apply_patch(&mut target, &ops(json!([{ "op": "test", "path": "/age", "value": 38 }]))).unwrap_err();

        assert_eq!(error.path, "/age");
    }

    #[test]
    fn test_test_operation_compares_numbers_by_value() {
        let mut target = view();
        let operations = ops(json!([
            { "op": "replace", "path": "/age", "value": 4 },
            { "op": "test", "path": "/age", "value": 4.0 }
        ]));

        apply_patch(&mut target, &operations).unwrap();
        assert_eq!(target.age, Some(4));

        let error = apply_patch(&mut target, &ops(json!([{ "op": "test", "path": "/age", "value": 4.5 }]))).unwrap_err();
        assert_eq!(error.path, "/age");
    }

    #[test]
    fn test_type_mismatch_is_reported_at_path() {
        let mut target = view();
        let error = apply_patch(&mut target, &ops(json!([{ "op": "replace", "path": "/age", "value": "old" }]))).unwrap_err();

        assert_eq!(error.path, "/age");
        assert_eq!(target.age, Some(37));
    }

    #[test]
    fn test_remove_twice_fails() {
        let mut target = view();
        let operations = ops(json!([
            { "op": "remove", "path": "/name" },
            { "op": "remove", "path": "/name" }
        ]));

        assert_eq!(apply_patch(&mut target, &operations).unwrap_err().path, "/name");
    }

    #[test]
    fn test_test_only_document_leaves_view_unchanged() {
        let mut target = view();
        let operations = ops(json!([
            { "op": "test", "path": "/login", "value": "neo" },
            { "op": "test", "path": "/gender", "value": "male" }
        ]));

        apply_patch(&mut target, &operations).unwrap();
        assert_eq!(target, view());
    }
}
