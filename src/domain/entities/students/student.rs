//! Student Entity Implementation
//!
//! 학생 엔티티의 핵심 구현체입니다. `students` 컬렉션에 저장되는 문서의
//! 구조를 정의하며, 중첩 하위 레코드(이름, 보호자, 현지 보호자)는 독립적인
//! 생명주기 없이 부모 문서에 임베드됩니다.
//!
//! 저장 필드명은 camelCase이며, `id`(학번)와 `email`은 저장소 계층의
//! 유니크 인덱스로 전역 유일성이 보장됩니다. `_id`는 저장소 내부 키로,
//! 비즈니스 키인 `id`와는 구분됩니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 학생 이름 하위 레코드
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserName {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
}

/// 보호자 정보 하위 레코드 (모든 필드 필수)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    pub father_name: String,
    pub father_occupation: String,
    pub father_contact_no: String,
    pub mother_name: String,
    pub mother_occupation: String,
    pub mother_contact_no: String,
}

/// 현지 보호자 정보 하위 레코드 (모든 필드 필수)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocalGuardian {
    pub name: String,
    pub occupation: String,
    pub contact_no: String,
    pub address: String,
}

/// 성별
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// 허용되는 리터럴 값들
    pub const VALUES: [&'static str; 3] = ["male", "female", "other"];

    /// 문자열 리터럴에서 성별을 파싱합니다. 허용되지 않는 값이면 None.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// 혈액형
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
}

impl BloodGroup {
    /// 허용되는 리터럴 값들
    pub const VALUES: [&'static str; 8] = ["A+", "A-", "B+", "B-", "O+", "O-", "AB+", "AB-"];

    /// 문자열 리터럴에서 혈액형을 파싱합니다. 허용되지 않는 값이면 None.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "A+" => Some(BloodGroup::APositive),
            "A-" => Some(BloodGroup::ANegative),
            "B+" => Some(BloodGroup::BPositive),
            "B-" => Some(BloodGroup::BNegative),
            "O+" => Some(BloodGroup::OPositive),
            "O-" => Some(BloodGroup::ONegative),
            "AB+" => Some(BloodGroup::AbPositive),
            "AB-" => Some(BloodGroup::AbNegative),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
        }
    }
}

/// 계정 활성화 상태
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActiveStatus {
    /// 활성 상태 (기본값)
    #[default]
    Active,
    /// 차단됨
    Blocked,
}

impl ActiveStatus {
    /// 허용되는 리터럴 값들
    pub const VALUES: [&'static str; 2] = ["active", "blocked"];

    /// 문자열 리터럴에서 상태를 파싱합니다. 허용되지 않는 값이면 None.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(ActiveStatus::Active),
            "blocked" => Some(ActiveStatus::Blocked),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveStatus::Active => "active",
            ActiveStatus::Blocked => "blocked",
        }
    }
}

/// 학생 엔티티
///
/// `students` 컬렉션에 저장되는 문서의 전체 형태입니다.
///
/// - `password`는 저장 시점에 이미 bcrypt 해시여야 합니다. 평문은 절대
///   저장되지 않습니다.
/// - `is_deleted`는 소프트 삭제 마커입니다. 기본 조회 경로는 이 플래그가
///   true인 문서를 모두 제외합니다.
/// - 전체 이름은 저장되지 않으며 [`Student::full_name`]으로만 계산됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// 저장소 내부 키 (비즈니스 키 `id`와 구분됨)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,
    /// 학번 (비즈니스 키, unique)
    pub id: String,
    /// bcrypt 해시된 비밀번호
    pub password: String,
    pub name: UserName,
    pub gender: Gender,
    /// 이메일 주소 (unique)
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    pub contact_no: String,
    pub emergency_contact_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<BloodGroup>,
    pub present_address: String,
    pub guardian: Guardian,
    pub local_guardian: LocalGuardian,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_img: Option<String>,
    /// 계정 상태 (기본값: active)
    #[serde(default)]
    pub is_active: ActiveStatus,
    /// 소프트 삭제 마커 (기본값: false)
    #[serde(default)]
    pub is_deleted: bool,
}

impl Student {
    /// 전체 이름을 계산합니다.
    ///
    /// `firstName`, `middleName`, `lastName`을 공백으로 연결한 파생 값으로,
    /// 저장소에는 절대 기록되지 않습니다. 미들네임이 없으면 빈 세그먼트가
    /// 들어가 공백이 두 개가 됩니다. 원본 동작을 그대로 유지한 것으로,
    /// 의도된 정책입니다.
    pub fn full_name(&self) -> String {
        format!(
            "{} {} {}",
            self.name.first_name,
            self.name.middle_name.as_deref().unwrap_or(""),
            self.name.last_name
        )
    }

    /// 저장소 내부 키의 16진수 문자열 표현을 반환합니다.
    pub fn object_id_string(&self) -> Option<String> {
        self.object_id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    fn sample_student() -> Student {
        Student {
            object_id: None,
            id: "S-01".to_string(),
            password: "$2b$04$hashhashhashhashhashha".to_string(),
            name: UserName {
                first_name: "Jamal".to_string(),
                middle_name: None,
                last_name: "Uddin".to_string(),
            },
            gender: Gender::Male,
            email: "a@b.com".to_string(),
            date_of_birth: None,
            contact_no: "1".to_string(),
            emergency_contact_no: "2".to_string(),
            blood_group: None,
            present_address: "X".to_string(),
            guardian: Guardian {
                father_name: "F".to_string(),
                father_occupation: "FO".to_string(),
                father_contact_no: "FC".to_string(),
                mother_name: "M".to_string(),
                mother_occupation: "MO".to_string(),
                mother_contact_no: "MC".to_string(),
            },
            local_guardian: LocalGuardian {
                name: "L".to_string(),
                occupation: "LO".to_string(),
                contact_no: "LC".to_string(),
                address: "LA".to_string(),
            },
            profile_img: None,
            is_active: ActiveStatus::Active,
            is_deleted: false,
        }
    }

    #[test]
    fn test_full_name_without_middle_name_keeps_double_space() {
        // 미들네임이 없으면 빈 세그먼트가 들어감 (의도된 동작)
        let student = sample_student();
        assert_eq!(student.full_name(), "Jamal  Uddin");
    }

    #[test]
    fn test_full_name_with_middle_name() {
        let mut student = sample_student();
        student.name.middle_name = Some("Hossain".to_string());
        assert_eq!(student.full_name(), "Jamal Hossain Uddin");
    }

    #[test]
    fn test_document_uses_camel_case_field_names() {
        let student = sample_student();
        let doc = bson::to_document(&student).unwrap();

        assert!(doc.contains_key("emergencyContactNo"));
        assert!(doc.contains_key("presentAddress"));
        assert!(doc.contains_key("isDeleted"));
        assert!(doc.contains_key("localGuardian"));
        assert_eq!(
            doc.get_document("name").unwrap().get_str("firstName").unwrap(),
            "Jamal"
        );
    }

    #[test]
    fn test_full_name_is_never_serialized() {
        let student = sample_student();
        let doc = bson::to_document(&student).unwrap();
        assert!(!doc.contains_key("fullName"));
    }

    #[test]
    fn test_absent_object_id_and_optionals_are_omitted() {
        let student = sample_student();
        let doc = bson::to_document(&student).unwrap();

        assert!(!doc.contains_key("_id"));
        assert!(!doc.contains_key("dateOfBirth"));
        assert!(!doc.contains_key("bloodGroup"));
        assert!(!doc.contains_key("profileImg"));
    }

    #[test]
    fn test_storage_defaults_applied_on_deserialize() {
        // isActive / isDeleted가 없는 문서는 저장 계층 기본값으로 채워짐
        let mut doc = bson::to_document(&sample_student()).unwrap();
        doc.remove("isActive");
        doc.remove("isDeleted");

        let student: Student = bson::from_document(doc).unwrap();
        assert_eq!(student.is_active, ActiveStatus::Active);
        assert!(!student.is_deleted);
    }

    #[test]
    fn test_enum_wire_values() {
        assert_eq!(bson::to_bson(&Gender::Male).unwrap(), bson::Bson::String("male".into()));
        assert_eq!(
            bson::to_bson(&BloodGroup::AbNegative).unwrap(),
            bson::Bson::String("AB-".into())
        );
        assert_eq!(
            bson::to_bson(&ActiveStatus::Blocked).unwrap(),
            bson::Bson::String("blocked".into())
        );
        assert_eq!(Gender::parse("female"), Some(Gender::Female));
        assert_eq!(Gender::parse("unknown"), None);
        assert_eq!(BloodGroup::parse("O+"), Some(BloodGroup::OPositive));
        assert_eq!(ActiveStatus::parse("active"), Some(ActiveStatus::Active));
    }
}
