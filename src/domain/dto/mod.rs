//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/              # 사용자 리소스 DTO
//! │   ├── request/        # 요청 DTO (클라이언트 → 서버)
//! │   └── response/       # 응답 DTO (서버 → 클라이언트)
//! └── common/             # 공통 DTO
//!     └── pagination.rs   # 페이지 쿼리, X-Pagination 헤더
//! ```
//!
//! ## 설계 원칙
//!
//! - **내부 표현 vs 외부 표현**: Entity와 DTO의 명확한 분리
//! - **안정적인 필드 이름**: 모든 와이어 필드는 camelCase로 고정
//! - **검증 내장**: `validator` derive로 요청 DTO에 규칙을 선언

pub mod common;
pub mod users;
