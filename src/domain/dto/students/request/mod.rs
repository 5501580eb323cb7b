//! 학생 요청 DTO 모듈

pub mod create_student_request;

pub use create_student_request::{
    CreateStudentRequest, GuardianInput, LocalGuardianInput, UserNameInput, collect_violations,
};
