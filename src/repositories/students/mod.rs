//! 학생 리포지토리 모듈

pub mod student_repo;

pub use student_repo::StudentRepository;
