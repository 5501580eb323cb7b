//! 학생 레코드 서비스 백엔드
//!
//! 단일 엔티티 타입("학생")에 대한 레코드 검증 및 영속 생명주기 계층입니다.
//! 신뢰할 수 없는 입력을 받아 구조적/의미적 제약을 검증하고, 파생 필드를
//! 계산하며, 데이터 액세스 경계에서 유일성과 소프트 삭제 가시성 규칙을
//! 적용하고, 민감 필드(비밀번호)를 저장 전 단방향 변환/조회 후 스크럽으로
//! 보호합니다.
//!
//! # Features
//!
//! - **검증 스키마**: 필드 단위 위반을 데이터로 모아 반환 (예외 없음)
//! - **소프트 삭제**: 모든 기본 조회 경로에서 삭제 레코드를 명시적
//!   데코레이터로 제외
//! - **비밀번호 보호**: bcrypt 단방향 해싱 후 저장, 반환 시 빈 문자열로 스크럽
//! - **전역 유일성**: `id`/`email` 유니크 인덱스 (삭제 레코드 포함)
//! - **파생 필드**: `fullName`은 접근 시 계산되며 저장되지 않음
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Services     │ ← 생명주기 합성 (검증 → 해싱 → 저장 → 스크럽)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 + 소프트 삭제 데코레이터
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소 (유니크 인덱스가 동시 경쟁 해소)
//! └─────────────────┘
//! ```
//!
//! HTTP 라우팅/서버 부트스트랩은 이 코어의 범위 밖이며, 외부 요청 처리
//! 계층이 서비스 연산을 직접 호출합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use student_service_backend::config::HashConfig;
//! use student_service_backend::db::Database;
//! use student_service_backend::services::students::StudentService;
//!
//! let database = Arc::new(Database::new().await?);
//! let service = StudentService::new(database);
//!
//! let created = service.create_student(request, &HashConfig::from_env()).await?;
//! assert_eq!(created.password, "");
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod utils;
