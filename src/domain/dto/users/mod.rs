//! # User Data Transfer Objects Module
//!
//! 사용자 리소스 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                # 클라이언트 → 서버
//! │   ├── create_user.rs     # POST 본문
//! │   ├── update_user.rs     # PUT 본문, PATCH 작업용 뷰
//! │   └── patch_user.rs      # PATCH 연산 (RFC 6902)
//! └── response/               # 서버 → 클라이언트
//!     └── user_response.rs   # 사용자 뷰
//! ```

pub mod request;
pub mod response;
