//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 비밀번호 해싱, 문자열 처리 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`password`] - bcrypt 기반 비밀번호 해싱/검증 (순수 함수)
//! - [`string_utils`] - 문자열 정리, 변환 유틸리티

pub mod password;
pub mod string_utils;
