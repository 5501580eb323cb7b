//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 학생 레코드의 생명주기(검증, 해싱, 저장, 조회, 소프트 삭제)를 관리합니다.

pub mod students;
