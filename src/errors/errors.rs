//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 학생 레코드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! - 입력 검증 실패는 예외가 아니라 **데이터**입니다. 필드 단위 위반 목록
//!   (`Vec<FieldViolation>`)이 한 번에 모여서 반환됩니다.
//! - 유니크 제약 위반은 저장소 계층에서 올라오는 `DuplicateKey`로 표현됩니다.
//! - 단건 조회에서 레코드가 없는 것은 정상적인 결과이며, 서비스 계층에서만
//!   `NotFound`로 변환됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn create_student(request: CreateStudentRequest) -> Result<Student, AppError> {
//!     let student = request.validated().map_err(AppError::ValidationError)?;
//!
//!     let created = student_repo.create(student).await?;
//!
//!     Ok(created)
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// 단일 필드에 대한 검증 위반
///
/// 중첩 필드는 점(.)으로 연결된 경로로 표현됩니다 (예: `name.firstName`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// 위반이 발생한 필드 경로
    pub field: String,
    /// 위반 사유
    pub reason: String,
}

impl FieldViolation {
    /// 새 검증 위반을 생성합니다.
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// 위반 목록을 에러 메시지 한 줄로 합칩니다.
fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// 애플리케이션 전역 에러 타입
///
/// 학생 레코드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (필드 단위 위반 목록)
    #[error("Validation error: {}", join_violations(.0))]
    ValidationError(Vec<FieldViolation>),

    /// 유니크 제약 위반 에러 (저장소 계층에서 발생)
    #[error("Duplicate key on field '{field}'")]
    DuplicateKey { field: String },

    /// 비밀번호 해싱 실패 에러 (해당 쓰기 작업은 진행되지 않음)
    #[error("Password hashing failed: {0}")]
    HashingError(String),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (저장소 제약 이전의 사전 확인 단계에서 발생)
    #[error("Conflict error: {0}")]
    ConflictError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_joins_all_violations() {
        let error = AppError::ValidationError(vec![
            FieldViolation::new("name.firstName", "First Name is required."),
            FieldViolation::new("email", "is not a valid email."),
        ]);

        let message = error.to_string();
        assert!(message.contains("name.firstName: First Name is required."));
        assert!(message.contains("email: is not a valid email."));
    }

    #[test]
    fn test_duplicate_key_names_the_field() {
        let error = AppError::DuplicateKey {
            field: "id".to_string(),
        };

        assert_eq!(error.to_string(), "Duplicate key on field 'id'");
    }

    #[test]
    fn test_field_violation_display() {
        let violation = FieldViolation::new("gender", "'dog' is not a valid gender.");
        assert_eq!(violation.to_string(), "gender: 'dog' is not a valid gender.");
    }
}
