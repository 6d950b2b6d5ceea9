//! # 사용자 리소스 서비스 구현
//!
//! 사용자 리소스에 대한 모든 연산의 비즈니스 로직을 구현합니다.
//! 핸들러는 HTTP 변환만 담당하고, 검증/ID 해석/저장소 호출/DTO 투영은 여기서 처리합니다.
//!
//! ## 연산별 정책
//!
//! | 연산 | 잘못된 ID | 없는 ID | 본문 없음 | 검증 실패 |
//! |------|-----------|---------|-----------|-----------|
//! | `get_user` | 404 | 404 | - | - |
//! | `create_user` | - | - | 400 | 422 |
//! | `upsert_user` | 400 | 201 (생성) | 400 | 422 |
//! | `patch_user` | 404 | 404 | 400 | 422 |
//! | `delete_user` | 404 | 404 | - | - |
//!
//! 읽기/패치/삭제 경로는 잘못된 형식의 ID를 "없음"으로 접고,
//! 쓰기 경로(PUT)만 형식 오류를 그대로 드러냅니다.
//!
//! ## 검증 에러 누적
//!
//! 요청마다 새 [`FieldErrors`]를 만들어 `&mut`로 넘기며 누적하고,
//! 마지막에 한 번만 검사하여 모든 필드 에러를 함께 돌려줍니다.

use std::sync::Arc;
use log::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;
use crate::{
    core::{
        errors::{AppError, AppResult},
        validation::FieldErrors,
    },
    domain::{
        dto::{
            common::pagination::{PageQuery, PaginationMetadata},
            users::{
                request::{apply_patch, CreateUserRequest, PatchOperation, UpdateUserRequest},
                response::UserResponse,
            },
        },
        entities::users::user::User,
        models::page::PageWindow,
    },
    repositories::users::user_repo::UserStore,
    services::{
        links::{LinkBuilder, USER_ROUTE},
        users::pagination_links::pagination_metadata,
    },
    utils::id_utils::resolve_id,
};

/// 목록 조회 결과: 현재 페이지의 사용자들과 `X-Pagination` 메타데이터
#[derive(Debug, Clone, PartialEq)]
pub struct UserPage {
    pub users: Vec<UserResponse>,
    pub pagination: PaginationMetadata,
}

/// 새로 만들어진 사용자의 ID와 `Location` URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub id: Uuid,
    pub location: String,
}

/// PUT 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// 해당 ID가 없어서 새로 삽입됨 (201)
    Created(Created),
    /// 기존 사용자를 교체함 (204)
    Replaced,
}

/// 사용자 리소스 서비스
///
/// 요청 사이에 가변 상태를 갖지 않습니다. 공유되는 것은 저장소 핸들뿐이며,
/// `web::Data<UserService>`로 모든 워커에 주입됩니다.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// ID로 사용자 조회 (GET, HEAD)
    ///
    /// 잘못된 형식의 ID도 `NotFound`로 응답합니다.
    pub async fn get_user(&self, raw_id: &str) -> AppResult<UserResponse> {
        let user = self.find_existing(raw_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// 페이지 단위 사용자 목록
    ///
    /// 범위를 벗어난 `pageNumber`/`pageSize`는 거부하지 않고 보정합니다.
    ///
    /// # Arguments
    ///
    /// * `query` - 클라이언트가 보낸 쿼리 파라미터
    /// * `links` - 이전/다음 페이지 링크 생성기
    pub async fn list_users(&self, query: PageQuery, links: &dyn LinkBuilder) -> AppResult<UserPage> {
        let window = PageWindow::normalize(query.page_number, query.page_size);
        debug!("사용자 목록 조회: {:?} → {:?}", query, window);

        let page = self.store.get_page(window).await?.map(UserResponse::from);
        let pagination = pagination_metadata(&page, links)?;

        Ok(UserPage { users: page.items, pagination })
    }

    /// 사용자 생성 (POST)
    ///
    /// # Errors
    ///
    /// * `MissingPayload` - 본문이 `null`
    /// * `ValidationFailed` - 필수 필드 누락, 길이/범위 위반, 로그인 문자 규칙 위반
    pub async fn create_user(
        &self,
        request: Option<CreateUserRequest>,
        links: &dyn LinkBuilder,
    ) -> AppResult<Created> {
        let request = request.ok_or_else(|| AppError::MissingPayload("사용자 생성 요청 본문이 없습니다".to_string()))?;

        let mut errors = FieldErrors::new();
        collect_validation(&request, &mut errors);
        errors.into_result()?;

        let created = self.store.insert(User::from_create(request)?).await?;
        let id = created
            .id
            .ok_or_else(|| AppError::Unhandled("저장소가 사용자 ID를 할당하지 않았습니다".to_string()))?;

        info!("✅ 사용자 생성: {} ({})", created.login, id);
        Ok(Created { id, location: user_location(links, id)? })
    }

    /// 사용자 전체 교체 또는 생성 (PUT)
    ///
    /// 같은 ID와 본문으로 다시 호출하면 같은 최종 상태와 `Replaced`를 돌려줍니다.
    ///
    /// # Errors
    ///
    /// * `InvalidIdentifier` - ID 형식 오류 (읽기 경로와 달리 404로 접지 않음)
    /// * `MissingPayload` - 본문이 `null`
    /// * `ValidationFailed` - 검증 실패
    pub async fn upsert_user(
        &self,
        raw_id: &str,
        request: Option<UpdateUserRequest>,
        links: &dyn LinkBuilder,
    ) -> AppResult<UpsertOutcome> {
        let id = resolve_id(raw_id)?;
        let request = request.ok_or_else(|| AppError::MissingPayload("사용자 교체 요청 본문이 없습니다".to_string()))?;

        let mut errors = FieldErrors::new();
        collect_validation(&request, &mut errors);
        errors.into_result()?;

        let (user, inserted) = self.store.update_or_insert(User::from_update(id, request)?).await?;

        if inserted {
            info!("✅ 사용자 생성 (PUT): {} ({})", user.login, id);
            Ok(UpsertOutcome::Created(Created { id, location: user_location(links, id)? }))
        } else {
            info!("🔄 사용자 교체: {} ({})", user.login, id);
            Ok(UpsertOutcome::Replaced)
        }
    }

    /// 사용자 부분 수정 (PATCH)
    ///
    /// 연산은 기존 사용자에서 투영한 작업용 뷰에 순서대로 적용되고,
    /// 적용 후 구조/의미 검증을 다시 거칩니다. 어느 단계든 실패하면
    /// 저장소는 전혀 건드리지 않습니다.
    ///
    /// # Errors
    ///
    /// * `MissingPayload` - 패치 문서가 `null` (사용자 조회보다 먼저 검사)
    /// * `NotFound` - 잘못된 ID 또는 없는 사용자
    /// * `ValidationFailed` - 적용 실패(경로 키) 또는 적용 후 검증 실패(필드 키)
    pub async fn patch_user(&self, raw_id: &str, operations: Option<Vec<PatchOperation>>) -> AppResult<()> {
        let operations = operations.ok_or_else(|| AppError::MissingPayload("패치 문서가 없습니다".to_string()))?;
        let mut user = self.find_existing(raw_id).await?;

        let mut view = UpdateUserRequest::from(&user);
        let mut errors = FieldErrors::new();

        match apply_patch(&mut view, &operations) {
            Ok(()) => collect_validation(&view, &mut errors),
            Err(e) => {
                warn!("⚠️ 패치 적용 실패: {}", e);
                errors.add(e.path, e.message);
            }
        }
        errors.into_result()?;

        user.merge_view(view)?;
        self.store.update(user).await?;

        info!("🔄 사용자 부분 수정: {} ({}개 연산)", raw_id, operations.len());
        Ok(())
    }

    /// 사용자 삭제 (DELETE)
    ///
    /// 이미 없는 사용자 삭제는 성공이 아니라 `NotFound`입니다.
    pub async fn delete_user(&self, raw_id: &str) -> AppResult<()> {
        let user = self.find_existing(raw_id).await?;
        let id = user
            .id
            .ok_or_else(|| AppError::Unhandled("저장된 사용자에 ID가 없습니다".to_string()))?;

        if !self.store.delete(id).await? {
            return Err(not_found(raw_id));
        }

        info!("🗑️ 사용자 삭제: {} ({})", user.login, id);
        Ok(())
    }

    /// 읽기 경로 조회: 잘못된 형식의 ID와 없는 ID를 모두 `NotFound`로 처리합니다.
    async fn find_existing(&self, raw_id: &str) -> AppResult<User> {
        let id = match resolve_id(raw_id) {
            Ok(id) => id,
            Err(_) => {
                debug!("잘못된 형식의 사용자 ID: {}", raw_id);
                return Err(not_found(raw_id));
            }
        };

        self.store.find_by_id(id).await?.ok_or_else(|| not_found(raw_id))
    }
}

fn not_found(raw_id: &str) -> AppError {
    AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", raw_id))
}

fn user_location(links: &dyn LinkBuilder, id: Uuid) -> AppResult<String> {
    links.link(USER_ROUTE, &[&id.to_string()], &[])
}

fn collect_validation<T: Validate>(target: &T, errors: &mut FieldErrors) {
    if let Err(validation) = target.validate() {
        errors.merge_validation(&validation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::domain::entities::users::user::Gender;
    use crate::repositories::users::user_repo::InMemoryUserStore;
    use crate::services::users::pagination_links::tests::StaticLinks;

    fn service() -> (UserService, Arc<InMemoryUserStore>) {
        let store = Arc::new(InMemoryUserStore::new());
        (UserService::new(store.clone()), store)
    }

    fn create_request(login: &str) -> CreateUserRequest {
        CreateUserRequest {
            login: Some(login.to_string()),
            name: Some("Thomas Anderson".to_string()),
            gender: Some(Gender::Male),
            age: Some(37),
        }
    }

    fn update_request(login: &str) -> UpdateUserRequest {
        UpdateUserRequest {
            login: Some(login.to_string()),
            name: Some("Trinity".to_string()),
            gender: Some(Gender::Female),
            age: Some(35),
        }
    }

    fn patch(document: serde_json::Value) -> Option<Vec<PatchOperation>> {
        Some(serde_json::from_value(document).unwrap())
    }

    #[actix_web::test]
    async fn test_create_then_get() {
        let (service, _) = service();

        let created = service.create_user(Some(create_request("neo")), &StaticLinks).await.unwrap();
        assert_eq!(created.location, format!("http://test/get_user/{}", created.id));

        let user = service.get_user(&created.id.to_string()).await.unwrap();
        assert_eq!(user.login, "neo");
        assert_eq!(user.id, created.id.to_string());
    }

    #[actix_web::test]
    async fn test_create_rejects_missing_body_and_invalid_login() {
        let (service, store) = service();

        let missing = service.create_user(None, &StaticLinks).await;
        assert!(matches!(missing, Err(AppError::MissingPayload(_))));

        let invalid = service.create_user(Some(create_request("abc-123")), &StaticLinks).await;
        match invalid {
            Err(AppError::ValidationFailed(errors)) => assert_eq!(errors.get("login").unwrap().len(), 1),
            other => panic!("expected validation failure, got {:?}", other),
        }

        let page = store.get_page(PageWindow::default()).await.unwrap();
        assert_eq!(page.total_count, 0);
    }

    #[actix_web::test]
    async fn test_absent_and_malformed_ids_on_read_paths() {
        let (service, _) = service();
        let absent = Uuid::new_v4().to_string();

        for raw in [absent.as_str(), "not-a-uuid"] {
            assert!(matches!(service.get_user(raw).await, Err(AppError::NotFound(_))));
            assert!(matches!(service.delete_user(raw).await, Err(AppError::NotFound(_))));
            assert!(matches!(
                service.patch_user(raw, patch(json!([]))).await,
                Err(AppError::NotFound(_))
            ));
        }
    }

    #[actix_web::test]
    async fn test_upsert_malformed_id_is_invalid_identifier() {
        let (service, _) = service();

        let result = service.upsert_user("not-a-uuid", Some(update_request("neo")), &StaticLinks).await;
        assert!(matches!(result, Err(AppError::InvalidIdentifier(_))));
    }

    #[actix_web::test]
    async fn test_upsert_is_idempotent() {
        let (service, _) = service();
        let id = Uuid::new_v4();
        let raw = id.to_string();

        let first = service.upsert_user(&raw, Some(update_request("trinity")), &StaticLinks).await.unwrap();
        assert_eq!(
            first,
            UpsertOutcome::Created(Created { id, location: format!("http://test/get_user/{}", id) })
        );
        let after_first = service.get_user(&raw).await.unwrap();

        let second = service.upsert_user(&raw, Some(update_request("trinity")), &StaticLinks).await.unwrap();
        assert_eq!(second, UpsertOutcome::Replaced);
        assert_eq!(service.get_user(&raw).await.unwrap(), after_first);
    }

    #[actix_web::test]
    async fn test_upsert_missing_body() {
        let (service, _) = service();
        let result = service.upsert_user(&Uuid::new_v4().to_string(), None, &StaticLinks).await;

        assert!(matches!(result, Err(AppError::MissingPayload(_))));
    }

    #[actix_web::test]
    async fn test_patch_null_document_is_checked_before_lookup() {
        let (service, _) = service();
        let result = service.patch_user(&Uuid::new_v4().to_string(), None).await;

        assert!(matches!(result, Err(AppError::MissingPayload(_))));
    }

    #[actix_web::test]
    async fn test_patch_replace_login() {
        let (service, _) = service();
        let id = service.create_user(Some(create_request("neo")), &StaticLinks).await.unwrap().id.to_string();

        service
            .patch_user(&id, patch(json!([{ "op": "replace", "path": "/login", "value": "neo2" }])))
            .await
            .unwrap();

        assert_eq!(service.get_user(&id).await.unwrap().login, "neo2");
    }

    #[actix_web::test]
    async fn test_patch_test_only_leaves_user_unchanged() {
        let (service, _) = service();
        let id = service.create_user(Some(create_request("neo")), &StaticLinks).await.unwrap().id.to_string();
        let before = service.get_user(&id).await.unwrap();

        service
            .patch_user(&id, patch(json!([{ "op": "test", "path": "/login", "value": "neo" }])))
            .await
            .unwrap();

        assert_eq!(service.get_user(&id).await.unwrap(), before);
    }

    #[actix_web::test]
    async fn test_patch_is_all_or_nothing() {
        let (service, _) = service();
        let id = service.create_user(Some(create_request("neo")), &StaticLinks).await.unwrap().id.to_string();

        let unknown_path = service
            .patch_user(
                &id,
                patch(json!([
                    { "op": "replace", "path": "/login", "value": "changed" },
                    { "op": "replace", "path": "/email", "value": "x@y.z" }
                ])),
            )
            .await;
        match unknown_path {
            Err(AppError::ValidationFailed(errors)) => assert!(errors.get("/email").is_some()),
            other => panic!("expected validation failure, got {:?}", other),
        }

        let invalid_result = service
            .patch_user(&id, patch(json!([{ "op": "replace", "path": "/login", "value": "abc 123" }])))
            .await;
        match invalid_result {
            Err(AppError::ValidationFailed(errors)) => assert_eq!(errors.get("login").unwrap().len(), 1),
            other => panic!("expected validation failure, got {:?}", other),
        }

        let removed_required = service
            .patch_user(&id, patch(json!([{ "op": "remove", "path": "/name" }])))
            .await;
        assert!(matches!(removed_required, Err(AppError::ValidationFailed(_))));

        assert_eq!(service.get_user(&id).await.unwrap().login, "neo");
    }

    #[actix_web::test]
    async fn test_delete_then_not_found() {
        let (service, _) = service();
        let id = service.create_user(Some(create_request("neo")), &StaticLinks).await.unwrap().id.to_string();

        service.delete_user(&id).await.unwrap();
        assert!(matches!(service.delete_user(&id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.get_user(&id).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_list_users_normalizes_window_and_builds_links() {
        let (service, _) = service();
        for n in 0..25 {
            service.create_user(Some(create_request(&format!("user{}", n))), &StaticLinks).await.unwrap();
        }

        let clamped = service
            .list_users(PageQuery { page_number: Some(0), page_size: Some(100) }, &StaticLinks)
            .await
            .unwrap();
        assert_eq!(clamped.pagination.current_page, 1);
        assert_eq!(clamped.pagination.page_size, 20);
        assert_eq!(clamped.users.len(), 20);

        let first = service
            .list_users(PageQuery { page_number: Some(-5), page_size: Some(5) }, &StaticLinks)
            .await
            .unwrap();
        assert_eq!((first.pagination.current_page, first.pagination.page_size), (1, 5));
        assert!(first.pagination.previous_page_link.is_none());
        assert!(first.pagination.next_page_link.is_some());

        let last = service
            .list_users(PageQuery { page_number: Some(5), page_size: Some(5) }, &StaticLinks)
            .await
            .unwrap();
        assert!(last.pagination.previous_page_link.is_some());
        assert!(last.pagination.next_page_link.is_none());
        assert_eq!(last.pagination.total_pages, 5);
    }
}
