//! 학생 응답 DTO 모듈

pub mod student_response;

pub use student_response::StudentResponse;
