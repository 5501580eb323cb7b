//! 학생 레코드 서비스 부트스트랩
//!
//! 환경 설정과 로깅을 초기화하고 MongoDB에 연결한 뒤, 학생 컬렉션의
//! 유니크 인덱스를 보장합니다. HTTP 계층은 이 코어의 범위 밖이므로
//! 서버를 띄우지 않습니다. 외부 요청 처리 계층이 라이브러리의 서비스
//! 연산을 직접 호출합니다.

use std::sync::Arc;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use student_service_backend::config::{Environment, HashConfig};
use student_service_backend::db::Database;
use student_service_backend::repositories::students::StudentRepository;

/// 실행 환경에 맞는 .env 파일을 로드합니다.
fn load_env_file() {
    match std::env::var("RUN_ENV").as_deref() {
        Ok("prod") => {
            if dotenv::from_filename(".env.prod").is_err() {
                dotenv().ok();
            }
        }
        Ok("dev") => {
            if dotenv::from_filename(".env.dev").is_err() {
                dotenv().ok();
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    info!("🚀 학생 레코드 서비스 초기화 중...");
    info!("실행 환경: {:?}", Environment::current());

    // 데이터 스토어 초기화
    let database = match Database::new().await {
        Ok(database) => Arc::new(database),
        Err(e) => {
            error!("MongoDB 연결 실패: {}", e);
            return Err(e);
        }
    };

    // 유니크 인덱스 보장 (id, email — 삭제 레코드 포함 전역 범위)
    let student_repo = StudentRepository::new(Arc::clone(&database));
    student_repo.create_indexes().await?;
    info!("✅ 학생 컬렉션 인덱스 생성 완료");

    let hash_config = HashConfig::from_env();
    info!("비밀번호 해싱 cost: {}", hash_config.cost);

    info!("✅ 초기화 완료. 서비스 연산은 라이브러리 API를 통해 호출됩니다.");

    Ok(())
}
