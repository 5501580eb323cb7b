//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경 감지, 비밀번호 해싱 비용 설정

pub mod data_config;

pub use data_config::{Environment, HashConfig, PasswordConfig};
