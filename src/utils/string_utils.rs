//! # 문자열 유틸리티
//!
//! 로그인 ID 규칙처럼 여러 요청 DTO가 공유하는 문자열 검증 함수들입니다.

use validator::ValidationError;

/// 로그인 ID 문자 규칙 위반 시 에러 코드
pub const INVALID_LOGIN_CODE: &str = "invalid_login";

/// 로그인 ID의 모든 문자가 영문자 또는 숫자인지 확인합니다.
///
/// 빈 문자열은 이 규칙의 대상이 아니므로 `true`를 반환합니다.
/// 비어 있는 로그인은 `required`/`length` 규칙이 따로 잡아냅니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_alphanumeric;
///
/// assert!(is_alphanumeric("abc123"));
/// assert!(!is_alphanumeric("abc 123"));
/// assert!(!is_alphanumeric("abc-123"));
/// ```
pub fn is_alphanumeric(value: &str) -> bool {
    value.chars().all(char::is_alphanumeric)
}

/// `validator`의 `custom` 규칙으로 사용하는 로그인 ID 검증 함수
///
/// 위반 시 필드 하나당 정확히 하나의 에러를 만듭니다.
///
/// # 인자
/// * `login` - 검증할 로그인 ID
///
/// # 반환값
/// * `Ok(())` - 모든 문자가 영문자/숫자
/// * `Err(ValidationError)` - 허용되지 않은 문자가 포함된 경우
pub fn validate_login(login: &str) -> Result<(), ValidationError> {
    if !is_alphanumeric(login) {
        return Err(ValidationError::new(INVALID_LOGIN_CODE)
            .with_message("로그인은 영문자와 숫자만 사용할 수 있습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alphanumeric() {
        assert!(is_alphanumeric("abc123"));
        assert!(is_alphanumeric("ABCxyz"));
        assert!(is_alphanumeric(""));
        assert!(!is_alphanumeric("abc 123"));
        assert!(!is_alphanumeric("abc-123"));
        assert!(!is_alphanumeric("abc_123"));
    }

    #[test]
    fn test_validate_login() {
        assert!(validate_login("abc123").is_ok());
        assert!(validate_login("").is_ok());

        let error = validate_login("abc-123").unwrap_err();
        assert_eq!(error.code, INVALID_LOGIN_CODE);
        assert!(error.message.is_some());
    }
}
