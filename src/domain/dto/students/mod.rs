//! # Student Data Transfer Objects Module
//!
//! 학생 레코드의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! - [`request`] - 생성 요청 DTO와 검증 규칙
//! - [`response`] - 비밀번호가 스크럽된 응답 DTO

pub mod request;
pub mod response;
