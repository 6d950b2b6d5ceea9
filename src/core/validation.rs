//! # 요청 단위 검증 에러 수집기
//!
//! 검증 에러를 전역 상태에 쌓지 않고, 요청마다 새로 만든 [`FieldErrors`]를
//! `&mut`로 호출 체인에 넘겨 누적한 뒤 마지막에 한 번만 검사합니다.
//!
//! ```rust,ignore
//! let mut errors = FieldErrors::new();
//! match apply_patch(&mut view, &operations) {
//!     Ok(()) => {
//!         if let Err(validation) = view.validate() {
//!             errors.merge_validation(&validation);
//!         }
//!     }
//!     Err(e) => errors.add(e.path, e.message),
//! }
//! errors.into_result()?; // 에러가 있으면 422
//! ```

use std::collections::BTreeMap;
use std::fmt;
use serde::Serialize;
use validator::ValidationErrors;
use crate::core::errors::{AppError, AppResult};

/// 필드 이름 → 에러 메시지 목록
///
/// JSON으로 직렬화하면 `{"login": ["..."], "age": ["..."]}` 형태가 됩니다.
/// 필드 순서가 항상 같도록 `BTreeMap`을 사용합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 필드에 에러 메시지를 하나 추가합니다.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// `validator`가 만든 필드 에러를 모두 옮겨 담습니다.
    ///
    /// 메시지가 지정되지 않은 규칙은 에러 코드를 메시지로 사용합니다.
    pub fn merge_validation(&mut self, errors: &ValidationErrors) {
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                self.add(field.to_string(), message);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 특정 필드의 에러 메시지들
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// 에러가 기록된 필드 이름들
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// 누적된 에러가 없으면 `Ok(())`, 있으면 `AppError::ValidationFailed`
    pub fn into_result(self) -> AppResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationFailed(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}
