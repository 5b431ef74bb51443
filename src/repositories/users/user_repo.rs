//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 문서 ID는 프로바이더가 발급한 사용자 ID(카카오 회원번호)를 그대로 사용합니다.
//!
//! ## 특징
//!
//! - **트레이트 경계**: 서비스는 [`UserRepository`] 에만 의존하고, 테스트는 메모리 구현을 주입합니다.
//! - **부분 갱신**: [`UserChanges`] 의 `None` 필드는 `$set` 에 포함되지 않습니다.
//! - **중복 삽입 허용**: 동시 로그인으로 같은 ID가 두 번 삽입되면 `false` 를 반환합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, warn};
use mongodb::{
    bson::{self, doc},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};

use crate::core::errors::{AppError, ErrorContext, StoreErrorCode};
use crate::db::Database;
use crate::domain::entities::users::user::{User, UserChanges};

/// 사용자 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// 모든 메서드는 `Result<T, AppError>` 타입을 반환합니다.
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **InternalError**: 변경 내용 직렬화 실패
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
/// if let Some(user) = repo.find_by_id("4012345678").await? {
///     println!("{}", user.nickname);
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ID로 사용자를 조회합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 프로바이더 사용자 ID
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 여러 ID를 한 번에 조회합니다. 없는 ID는 결과에서 빠집니다.
    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<User>, AppError>;

    /// 새 사용자를 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 새로 저장됨
    /// * `Ok(false)` - 같은 ID의 문서가 이미 있음
    async fn insert(&self, user: &User) -> Result<bool, AppError>;

    /// 부분 갱신 후 갱신된 문서를 반환합니다.
    async fn update(&self, id: &str, changes: &UserChanges) -> Result<Option<User>, AppError>;

    /// 가입일 내림차순
    async fn list_recent(&self, limit: i64) -> Result<Vec<User>, AppError>;

    async fn count(&self) -> Result<u64, AppError>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self { collection: database.users() }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(AppError::from_store)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(AppError::from_store)
    }

    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<User>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.collection
            .find(doc! { "_id": { "$in": ids } })
            .await
            .map_err(AppError::from_store)?
            .try_collect()
            .await
            .map_err(AppError::from_store)
    }

    async fn insert(&self, user: &User) -> Result<bool, AppError> {
        match self.collection.insert_one(user).await {
            Ok(_) => {
                debug!("사용자 저장: {}", user.id);
                Ok(true)
            }
            Err(e) if StoreErrorCode::from_mongo(&e) == StoreErrorCode::AlreadyExists => {
                warn!("이미 존재하는 사용자 ID: {}", user.id);
                Ok(false)
            }
            Err(e) => Err(AppError::from_store(e)),
        }
    }

    async fn update(&self, id: &str, changes: &UserChanges) -> Result<Option<User>, AppError> {
        let set = bson::to_document(changes).context("사용자 수정 내용 직렬화 실패")?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .with_options(options)
            .await
            .map_err(AppError::from_store)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<User>, AppError> {
        self.collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await
            .map_err(AppError::from_store)?
            .try_collect()
            .await
            .map_err(AppError::from_store)
    }

    async fn count(&self) -> Result<u64, AppError> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(AppError::from_store)
    }
}
