//! # Data Transfer Objects (DTO) Module
//!
//! 서비스 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 요청 DTO는 `validator` crate 기반의 검증 스키마를 겸하며,
//! 응답 DTO는 민감 필드 스크럽과 파생 필드 투영을 담당합니다.

pub mod students;
