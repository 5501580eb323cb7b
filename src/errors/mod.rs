//! 에러 처리 모듈
//!
//! 애플리케이션 전역 에러 타입과 필드 단위 검증 위반 타입을 제공합니다.

pub mod errors;

pub use errors::{AppError, FieldViolation};
