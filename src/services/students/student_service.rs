//! # 학생 관리 서비스 구현
//!
//! 학생 레코드의 전체 생명주기를 관리하는 비즈니스 로직입니다.
//! 생성 경로는 스펙상 하나뿐이며, 다음 단계를 명시적으로 합성합니다:
//!
//! 1. **검증**: 구조적/의미적 규칙 위반을 데이터로 수집
//! 2. **사전 중복 확인**: 저장소 인덱스 위반보다 친절한 충돌 신호 제공
//! 3. **해싱**: 전달받은 [`HashConfig`]로 비밀번호를 단방향 변환 (순수 단계)
//! 4. **저장**: 유니크 제약은 저장소가 최종 판정 (동시 경쟁 포함)
//! 5. **스크럽**: 반환 문서의 비밀번호를 빈 문자열로 대체
//!
//! 검증, 기본값 적용, 해싱이 모두 성공하기 전에는 어떤 부분 레코드도
//! 저장소에 보이지 않습니다.

use std::sync::Arc;

use log::info;
use mongodb::bson::Document;

use crate::config::HashConfig;
use crate::db::Database;
use crate::domain::dto::students::request::CreateStudentRequest;
use crate::domain::dto::students::response::StudentResponse;
use crate::errors::AppError;
use crate::repositories::students::StudentRepository;
use crate::utils::password::hash_password;

/// 학생 생명주기 관리 서비스
pub struct StudentService {
    /// 학생 데이터 액세스 리포지토리
    student_repo: StudentRepository,
}

impl StudentService {
    /// 새 서비스 인스턴스를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            student_repo: StudentRepository::new(db),
        }
    }

    /// 기존 리포지토리로 서비스를 구성합니다.
    pub fn with_repository(student_repo: StudentRepository) -> Self {
        Self { student_repo }
    }

    /// 새 학생 레코드 생성
    ///
    /// 해싱 비용은 전역 상태에서 읽지 않고 `hash_config`로 전달받습니다.
    ///
    /// # 반환값
    /// * `Ok(StudentResponse)` - 저장된 레코드 (비밀번호는 빈 문자열)
    /// * `Err(AppError::ValidationError)` - 필드 위반 목록 (생성은 진행되지 않음)
    /// * `Err(AppError::ConflictError)` - 사전 확인에서 학번 중복 발견
    /// * `Err(AppError::DuplicateKey)` - 저장소 유니크 인덱스 위반.
    ///   소프트 삭제된 레코드와의 학번/이메일 충돌은 사전 확인에 걸리지 않고
    ///   여기서 드러납니다 (유일성은 삭제 여부와 무관한 전역 범위).
    /// * `Err(AppError::HashingError)` - 해싱 실패. 아무것도 저장되지 않음.
    pub async fn create_student(
        &self,
        request: CreateStudentRequest,
        hash_config: &HashConfig,
    ) -> Result<StudentResponse, AppError> {
        let start_time = std::time::Instant::now();

        // 검증 및 정규화 (트리밍, 기본값 적용)
        let mut student = request.validated().map_err(AppError::ValidationError)?;

        // 사전 중복 확인: 저장소의 duplicate key 실패보다 친절한 신호.
        // 소프트 삭제 필터를 거치므로 삭제된 학번은 여기서 걸리지 않는다.
        if self
            .student_repo
            .find_by_student_id(&student.id)
            .await?
            .is_some()
        {
            return Err(AppError::ConflictError(format!(
                "이미 등록된 학번입니다: {}",
                student.id
            )));
        }

        // 비밀번호 해싱 (저장 전, 락 없이 수행되는 비용이 큰 단계)
        let hash_start = std::time::Instant::now();
        student.password = hash_password(&student.password, hash_config.cost)?;
        info!("Password hashing took: {:?}", hash_start.elapsed());

        // 저장 (동시 경쟁은 유니크 인덱스가 해소)
        let created = self.student_repo.create(student).await?;

        info!(
            "학생 레코드 생성됨: id={}, _id={}",
            created.id,
            created.object_id_string().unwrap_or_default()
        );
        info!("Total student creation took: {:?}", start_time.elapsed());

        Ok(StudentResponse::from(created))
    }

    /// 전체 학생 목록 조회 (소프트 삭제 제외)
    pub async fn get_all_students(&self) -> Result<Vec<StudentResponse>, AppError> {
        let students = self.student_repo.find_many(Document::new()).await?;

        Ok(students.into_iter().map(StudentResponse::from).collect())
    }

    /// 학번으로 학생 단건 조회
    ///
    /// 소프트 삭제된 레코드는 존재하지 않는 것으로 취급됩니다.
    pub async fn get_student_by_id(&self, student_id: &str) -> Result<StudentResponse, AppError> {
        let student = self
            .student_repo
            .find_by_student_id(student_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("학생을 찾을 수 없습니다: {}", student_id)))?;

        Ok(StudentResponse::from(student))
    }

    /// 학생 컬렉션에 대한 집계 실행
    ///
    /// 소프트 삭제 `$match` 스테이지가 호출자 스테이지 앞에 항상 삽입됩니다.
    pub async fn aggregate_students(
        &self,
        stages: Vec<Document>,
    ) -> Result<Vec<Document>, AppError> {
        self.student_repo.aggregate(stages).await
    }

    /// 학생 레코드 소프트 삭제
    ///
    /// 레코드는 물리적으로 남고 기본 조회 경로에서만 사라집니다.
    pub async fn delete_student(&self, student_id: &str) -> Result<(), AppError> {
        let deleted = self.student_repo.soft_delete(student_id).await?;

        if !deleted {
            return Err(AppError::NotFound(format!(
                "학생을 찾을 수 없습니다: {}",
                student_id
            )));
        }

        info!("학생 레코드 소프트 삭제됨: {}", student_id);
        Ok(())
    }
}
