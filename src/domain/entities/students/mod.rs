//! 학생 엔티티 모듈

pub mod student;

pub use student::{ActiveStatus, BloodGroup, Gender, Guardian, LocalGuardian, Student, UserName};
