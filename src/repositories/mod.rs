//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하며, 소프트 삭제 가시성 규칙과 유니크 제약을
//! 이 계층에서 적용합니다. 의존성은 명시적으로 주입됩니다.

pub mod students;
