//! 학생 응답 DTO
//!
//! 저장된 학생 엔티티를 호출자에게 돌려줄 때 사용하는 형태입니다.
//! 민감 필드인 `password`는 항상 빈 문자열로 스크럽되며, 해시도 평문도
//! 절대 외부로 나가지 않습니다. `fullName`은 저장되지 않는 파생 값으로
//! 변환 시점에 계산되어 투영됩니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::students::student::{
    ActiveStatus, BloodGroup, Gender, Guardian, LocalGuardian, Student, UserName,
};

/// 학생 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: String,

    /// 항상 빈 문자열 (쓰기 후 반환 경로에서 스크럽됨)
    pub password: String,

    pub name: UserName,
    pub gender: Gender,
    pub email: String,
    pub date_of_birth: Option<String>,
    pub contact_no: String,
    pub emergency_contact_no: String,
    pub blood_group: Option<BloodGroup>,
    pub present_address: String,
    pub guardian: Guardian,
    pub local_guardian: LocalGuardian,
    pub profile_img: Option<String>,
    pub is_active: ActiveStatus,
    pub is_deleted: bool,

    /// 파생 필드: 이름 세그먼트를 공백으로 연결한 전체 이름 (저장되지 않음)
    pub full_name: String,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        let full_name = student.full_name();

        let Student {
            id,
            name,
            gender,
            email,
            date_of_birth,
            contact_no,
            emergency_contact_no,
            blood_group,
            present_address,
            guardian,
            local_guardian,
            profile_img,
            is_active,
            is_deleted,
            ..
        } = student;

        Self {
            id,
            // 민감 필드 스크럽: 해시조차 노출하지 않음
            password: String::new(),
            name,
            gender,
            email,
            date_of_birth,
            contact_no,
            emergency_contact_no,
            blood_group,
            present_address,
            guardian,
            local_guardian,
            profile_img,
            is_active,
            is_deleted,
            full_name,
        }
    }
}
