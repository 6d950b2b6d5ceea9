//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//! 서비스는 [`UserStore`] trait에만 의존하며, 기본 구현으로
//! 프로세스 내 저장소인 [`InMemoryUserStore`]를 제공합니다.
//!
//! ## 계약
//!
//! | 메서드 | 동작 |
//! |--------|------|
//! | `find_by_id` | 없으면 `Ok(None)` |
//! | `get_page` | `(created_at, id)` 순서로 윈도우만큼 반환 |
//! | `insert` | 새 ID 할당 후 저장 |
//! | `update_or_insert` | `(저장된 엔티티, 삽입 여부)` |
//! | `update` | 없으면 `NotFound` |
//! | `delete` | 삭제 여부 반환 |

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::domain::models::page::{Page, PageWindow};

/// 사용자 저장소 추상화
///
/// 요청 사이의 일관성(동시 수정 등)은 구현체가 책임집니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    async fn get_page(&self, window: PageWindow) -> AppResult<Page<User>>;

    /// 새 ID를 할당하여 저장합니다. 엔티티에 있던 ID는 무시됩니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// 엔티티의 ID로 교체하거나, 없으면 삽입합니다.
    ///
    /// # 반환값
    /// * `(User, true)` - 삽입됨
    /// * `(User, false)` - 기존 엔티티를 교체함
    async fn update_or_insert(&self, user: User) -> AppResult<(User, bool)>;

    /// 기존 엔티티를 교체합니다. 없으면 `AppError::NotFound`.
    async fn update(&self, user: User) -> AppResult<User>;

    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// 프로세스 내 사용자 저장소
///
/// `RwLock<HashMap>` 하나로 모든 요청이 공유하며, 동시 쓰기는 마지막 쓰기가 이깁니다.
/// 교체 시에도 `created_at`은 최초 값을 유지합니다.
///
/// # 사용 예제
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::repositories::users::user_repo::{InMemoryUserStore, UserStore};
///
/// let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
/// let created = store.insert(user).await?;
/// let found = store.find_by_id(created.id.unwrap()).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, HashMap<Uuid, User>>> {
        self.users
            .read()
            .map_err(|e| AppError::Unhandled(format!("사용자 저장소 잠금 실패: {}", e)))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, HashMap<Uuid, User>>> {
        self.users
            .write()
            .map_err(|e| AppError::Unhandled(format!("사용자 저장소 잠금 실패: {}", e)))
    }

    /// 교체 시 최초 생성 시각을 이어받고 수정 시각을 갱신합니다.
    fn replace(users: &mut HashMap<Uuid, User>, id: Uuid, mut user: User) -> Option<User> {
        let previous = users.get(&id)?;
        user.id = Some(id);
        user.created_at = previous.created_at;
        user.updated_at = Utc::now();
        users.insert(id, user.clone());
        Some(user)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn get_page(&self, window: PageWindow) -> AppResult<Page<User>> {
        let users = self.read()?;

        let mut ordered: Vec<&User> = users.values().collect();
        ordered.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));

        let offset = usize::try_from(window.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(window.limit()).unwrap_or(usize::MAX);
        let items: Vec<User> = ordered.into_iter().skip(offset).take(limit).cloned().collect();

        debug!("사용자 페이지 조회: page={}, size={}, items={}", window.page_number, window.page_size, items.len());
        Ok(Page::new(items, users.len() as u64, window))
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let id = Uuid::new_v4();
        user.id = Some(id);

        self.write()?.insert(id, user.clone());
        Ok(user)
    }

    async fn update_or_insert(&self, user: User) -> AppResult<(User, bool)> {
        let id = user
            .id
            .ok_or_else(|| AppError::Unhandled("ID 없는 사용자는 upsert할 수 없습니다".to_string()))?;

        let mut users = self.write()?;
        if let Some(replaced) = Self::replace(&mut users, id, user.clone()) {
            return Ok((replaced, false));
        }

        users.insert(id, user.clone());
        Ok((user, true))
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let id = user
            .id
            .ok_or_else(|| AppError::Unhandled("ID 없는 사용자는 수정할 수 없습니다".to_string()))?;

        let mut users = self.write()?;
        Self::replace(&mut users, id, user)
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.write()?.remove(&id).is_some())
    }
}
