//! # 비밀번호 해싱 유틸리티
//!
//! bcrypt 기반의 단방향 비밀번호 해싱을 순수 함수 형태로 제공합니다.
//! 해싱 비용(cost)은 호출자가 명시적으로 전달하며, 함수 내부에서
//! 전역 상태나 환경 변수를 읽지 않습니다.
//!
//! 해싱은 계산 비용이 큰 작업이므로, 레코드가 다른 호출자에게 보이기
//! 전(저장 전)에 수행되어야 하며 어떤 락도 잡은 채 호출해서는 안 됩니다.

use crate::errors::AppError;

/// 평문 비밀번호를 bcrypt 해시로 변환합니다.
///
/// # 인자
/// * `plain` - 평문 비밀번호
/// * `cost` - bcrypt cost (4-15 권장, [`crate::config::HashConfig`] 참고)
///
/// # 반환값
/// * `Ok(String)` - bcrypt 해시 문자열 (솔트 포함, 평문과 절대 같지 않음)
/// * `Err(AppError::HashingError)` - 해싱 실패. 호출한 쓰기 작업은 진행되면 안 됩니다.
pub fn hash_password(plain: &str, cost: u32) -> Result<String, AppError> {
    bcrypt::hash(plain, cost).map_err(|e| AppError::HashingError(e.to_string()))
}

/// 평문 비밀번호가 저장된 해시와 일치하는지 검증합니다.
pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, AppError> {
    bcrypt::verify(plain, hashed).map_err(|e| AppError::HashingError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 테스트에서는 빠른 처리를 위해 최소 cost 사용
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_is_never_the_plaintext() {
        let hashed = hash_password("Secret1", TEST_COST).unwrap();
        assert_ne!(hashed, "Secret1");
        assert!(hashed.starts_with("$2"));
    }

    #[test]
    fn test_verify_accepts_original_plaintext() {
        let hashed = hash_password("Secret1", TEST_COST).unwrap();
        assert!(verify_password("Secret1", &hashed).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hashed = hash_password("Secret1", TEST_COST).unwrap();
        assert!(!verify_password("Secret2", &hashed).unwrap());
    }

    #[test]
    fn test_same_plaintext_hashes_differently() {
        // bcrypt는 해시마다 고유 솔트를 생성함
        let first = hash_password("Secret1", TEST_COST).unwrap();
        let second = hash_password("Secret1", TEST_COST).unwrap();
        assert_ne!(first, second);
    }
}
