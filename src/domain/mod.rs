//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 엔티티와 DTO를 담당합니다.
//!
//! ## 구성
//!
//! - [`entities`] - 저장 문서 형태의 핵심 도메인 객체
//! - [`dto`] - 요청/응답 데이터 전송 객체 (검증 스키마 포함)

pub mod dto;
pub mod entities;
