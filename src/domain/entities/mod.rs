//! # Domain Entities Module
//!
//! 저장소에 기록되는 핵심 도메인 엔티티들을 정의합니다.

pub mod students;
