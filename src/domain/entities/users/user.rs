//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 외부로 노출되는 필드(로그인, 이름, 성별, 나이)와
//! 내부 전용 필드(생성/수정 시각)를 함께 가집니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 성별
///
/// JSON에서는 소문자 문자열(`"male"`, `"female"`, `"other"`)로 표현됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// JSON 표현과 같은 소문자 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
///
/// # 식별자
///
/// `id`는 저장소가 삽입 시점에 할당하거나, PUT(upsert)에서 호출자가 지정합니다.
/// 한 번 할당된 이후에는 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Option<Uuid>,
    /// 로그인 ID (영문자/숫자)
    pub login: String,
    /// 이름
    pub name: String,
    /// 성별
    pub gender: Gender,
    /// 나이
    pub age: u32,
    /// 생성 시간 (내부 전용)
    pub created_at: DateTime<Utc>,
    /// 수정 시간 (내부 전용)
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 아직 저장되지 않은 새 사용자를 생성합니다.
    ///
    /// `id`는 비어 있으며, 저장소의 `insert`가 할당합니다.
    pub fn new(login: String, name: String, gender: Gender, age: u32) -> Self {
        let now = Utc::now();

        Self {
            id: None,
            login,
            name,
            gender,
            age,
            created_at: now,
            updated_at: now,
        }
    }

    /// 호출자가 지정한 ID를 부여합니다 (upsert-by-ID).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(Uuid::to_string)
    }
}
