//! 서버, 환경, 페이지네이션 설정 관리 모듈
//!
//! 서버 바인딩, 실행 환경, Rate Limiting, 페이지네이션 기본값을 관리합니다.

use std::env;
use log::{error, info};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 상세 로깅
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별 기본 로그 필터
    ///
    /// `RUST_LOG`가 설정되어 있으면 그 값이 우선합니다.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug,actix_web=debug",
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// HTTP 워커 스레드 수
    ///
    /// # Environment Variables
    ///
    /// - `SERVER_WORKERS`: 워커 수 (기본값: 4, 0은 무시)
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(4)
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 파싱에 실패하면 에러 로그를 남기고 기본값을 사용합니다.
    pub fn load() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        let config = Self { per_second, burst_size };
        info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

/// 목록 조회 페이지네이션 기본값
///
/// 요청 사이에 바뀌지 않는 상수입니다. 범위를 벗어난 클라이언트 값은
/// 거부하지 않고 이 경계로 보정합니다.
pub struct PaginationConfig;

impl PaginationConfig {
    /// 가장 작은 페이지 번호
    pub const MIN_PAGE: u32 = 1;
    /// `pageNumber`가 없을 때 사용하는 페이지 번호
    pub const DEFAULT_PAGE: u32 = 1;
    /// `pageSize`가 없을 때 사용하는 페이지 크기
    pub const DEFAULT_SIZE: u32 = 10;
    /// 허용하는 최대 페이지 크기
    pub const MAX_SIZE: u32 = 20;
}
