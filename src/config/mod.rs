//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, Rate Limiting, 페이지네이션 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 실행 프로필 (.env.dev / .env.prod 선택)
//! export PROFILE="dev"
//!
//! # 환경 설정 (로그 레벨 기본값에 영향)
//! export ENVIRONMENT="development"  # development, test, staging, production
//!
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```
//!
//! 페이지네이션 기본값(`PaginationConfig`)은 상수이며 환경 변수로 바꾸지 않습니다.

pub mod data_config;

pub use data_config::*;
