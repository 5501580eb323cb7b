//! # 학생 리포지토리 구현
//!
//! 학생 엔티티의 데이터 액세스 계층입니다. MongoDB `students` 컬렉션에 대한
//! 모든 연산을 담당합니다.
//!
//! ## 소프트 삭제 가시성 규칙
//!
//! 기본 조회 경로(`find_many`, `find_one`, `aggregate`)는 모두 명시적인
//! 데코레이터([`scoped_filter`], [`scoped_pipeline`])를 거칩니다. 데코레이터는
//! `isDeleted != true` 술어를 호출자 필터 **앞에** 결합하므로, 호출자가 같은
//! 필드로 필터를 덮어쓸 수 없습니다. 삭제된 레코드가 필요한 호출자는
//! 데코레이터를 거치지 않는 별도 연산([`StudentRepository::find_one_with_deleted`])을
//! 사용해야 합니다. 숨겨진 전역 인터셉션 대신 데이터 액세스 경계에서 규칙을
//! 눈에 보이게 적용하는 방식입니다.
//!
//! ## 유니크 제약
//!
//! `id`(학번)와 `email`은 유니크 인덱스로 보장됩니다. 인덱스는 삭제 여부와
//! 무관하게 **모든** 문서에 적용됩니다. 동시 삽입 경쟁은 저장소의 인덱스가
//! 해소하며, 패배한 쪽은 `DuplicateKey`를 받습니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    Collection, IndexModel,
    bson::{Document, doc},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
};

use crate::db::Database;
use crate::domain::entities::students::student::Student;
use crate::errors::AppError;

/// 학생 컬렉션 이름
const COLLECTION_NAME: &str = "students";

/// 기본 조회 경로의 소프트 삭제 데코레이터
///
/// 호출자 필터에 `isDeleted != true` 술어를 `$and`로 결합합니다. 소프트 삭제
/// 술어가 항상 첫 번째 항목이며, 호출자 필터가 같은 필드를 조건으로 걸어도
/// 병합되거나 덮어써지지 않습니다.
pub(crate) fn scoped_filter(filter: Document) -> Document {
    doc! {
        "$and": [
            { "isDeleted": { "$ne": true } },
            filter,
        ]
    }
}

/// 집계 파이프라인용 소프트 삭제 데코레이터
///
/// 호출자가 제공한 모든 스테이지 앞에 `$match` 스테이지를 삽입합니다.
pub(crate) fn scoped_pipeline(stages: Vec<Document>) -> Vec<Document> {
    let mut pipeline = Vec::with_capacity(stages.len() + 1);
    pipeline.push(doc! { "$match": { "isDeleted": { "$ne": true } } });
    pipeline.extend(stages);
    pipeline
}

/// 유니크 인덱스 위반 메시지에서 충돌한 필드명을 추출합니다.
///
/// MongoDB의 duplicate key 에러 메시지는 위반된 인덱스 이름을 포함합니다
/// (예: `E11000 duplicate key error ... index: id_unique ...`).
fn duplicate_key_field(message: &str) -> String {
    for field in ["id", "email"] {
        if message.contains(&format!("{}_unique", field)) {
            return field.to_string();
        }
    }
    "unknown".to_string()
}

/// 학생 데이터 액세스 리포지토리
///
/// MongoDB 컬렉션에 대한 CRUD, 집계, 인덱스 관리를 담당합니다.
/// 의존성은 명시적으로 주입됩니다.
pub struct StudentRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl StudentRepository {
    /// 새 리포지토리 인스턴스를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// `students` 컬렉션 핸들을 반환합니다.
    fn collection(&self) -> Collection<Student> {
        self.db.get_database().collection(COLLECTION_NAME)
    }

    /// 새 학생 레코드 생성
    ///
    /// 전달된 엔티티를 그대로 저장합니다. `password`는 호출 전에 이미 해시되어
    /// 있어야 합니다 (서비스 계층의 책임). 유니크 인덱스 위반은
    /// `DuplicateKey { field }`로 변환됩니다.
    ///
    /// # 반환값
    /// * `Ok(Student)` - 저장된 엔티티 (저장소 내부 키 포함)
    /// * `Err(AppError::DuplicateKey)` - `id` 또는 `email` 충돌
    /// * `Err(AppError::DatabaseError)` - 그 외 데이터베이스 오류
    pub async fn create(&self, mut student: Student) -> Result<Student, AppError> {
        let result = self
            .collection()
            .insert_one(&student)
            .await
            .map_err(|e| match e.kind.as_ref() {
                ErrorKind::Write(WriteFailure::WriteError(write_error))
                    if write_error.code == 11000 =>
                {
                    AppError::DuplicateKey {
                        field: duplicate_key_field(&write_error.message),
                    }
                }
                _ => AppError::DatabaseError(e.to_string()),
            })?;

        student.object_id = result.inserted_id.as_object_id();

        Ok(student)
    }

    /// 소프트 삭제되지 않은 학생들을 조회합니다.
    pub async fn find_many(&self, filter: Document) -> Result<Vec<Student>, AppError> {
        let cursor = self
            .collection()
            .find(scoped_filter(filter))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 소프트 삭제되지 않은 학생 단건을 조회합니다.
    pub async fn find_one(&self, filter: Document) -> Result<Option<Student>, AppError> {
        self.collection()
            .find_one(scoped_filter(filter))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 소프트 삭제 필터를 우회하는 명시적 단건 조회
    ///
    /// 삭제된 레코드까지 조회해야 하는 호출자를 위한 별도 계약입니다.
    /// 기본 경로가 아니므로 데코레이터를 적용하지 않습니다.
    pub async fn find_one_with_deleted(
        &self,
        filter: Document,
    ) -> Result<Option<Student>, AppError> {
        self.collection()
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 비즈니스 키(학번)로 학생을 조회합니다.
    ///
    /// 등록 흐름에서 사전 중복 확인용으로 사용됩니다. 소프트 삭제 필터를
    /// 거치므로 삭제된 레코드는 "존재하지 않음"으로 취급됩니다. 삭제된
    /// 학번과의 충돌은 이 확인을 통과한 뒤 저장소 유니크 인덱스에서
    /// `DuplicateKey`로 드러납니다 (의도된 정책).
    pub async fn find_by_student_id(&self, student_id: &str) -> Result<Option<Student>, AppError> {
        self.find_one(doc! { "id": student_id }).await
    }

    /// 집계 파이프라인 실행
    ///
    /// 호출자 스테이지 앞에 소프트 삭제 `$match` 스테이지가 항상 삽입됩니다.
    pub async fn aggregate(&self, stages: Vec<Document>) -> Result<Vec<Document>, AppError> {
        let pipeline = scoped_pipeline(stages);
        debug!("학생 집계 파이프라인 실행: {}개 스테이지", pipeline.len());

        let cursor = self
            .collection()
            .aggregate(pipeline)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 학생 레코드 소프트 삭제
    ///
    /// `isDeleted` 플래그만 세웁니다. 레코드는 물리적으로 남지만 기본 조회
    /// 경로에서는 보이지 않게 됩니다. 이미 삭제된 레코드는 대상 필터에서
    /// 제외되므로 `false`를 반환합니다.
    ///
    /// # 반환값
    /// * `Ok(true)` - 플래그가 설정됨
    /// * `Ok(false)` - 보이는 레코드 중 해당 학번이 없음
    pub async fn soft_delete(&self, student_id: &str) -> Result<bool, AppError> {
        let result = self
            .collection()
            .update_one(
                scoped_filter(doc! { "id": student_id }),
                doc! { "$set": { "isDeleted": true } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count > 0)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// `id`와 `email`에 유니크 인덱스를 생성합니다. 애플리케이션 초기화
    /// 시점에 한 번 실행합니다. 유일성은 삭제된 문서를 포함한 전역 범위입니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection();

        // 학번 유니크 인덱스
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([id_index, email_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
