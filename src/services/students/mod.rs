//! 학생 서비스 모듈

pub mod student_service;

pub use student_service::StudentService;
