//! 학생 생성 요청 DTO
//!
//! 신뢰할 수 없는 입력을 받아 구조적/의미적 제약을 검증하는 검증 스키마입니다.
//! 검증 실패는 제어 흐름이 아니라 데이터입니다. 모든 위반이 필드 경로와 함께
//! 한 번에 모여 반환되며, 중첩 필드는 `name.firstName`처럼 점으로 연결된
//! 경로로 보고됩니다.
//!
//! 이 모듈은 순수하며 저장소에 대한 의존이 전혀 없습니다.

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::domain::entities::students::student::{
    ActiveStatus, BloodGroup, Gender, Guardian, LocalGuardian, Student, UserName,
};
use crate::errors::FieldViolation;
use crate::utils::string_utils::{clean_optional_string, to_camel_case};

/// 학생 이름 입력
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UserNameInput {
    /// 이름 (필수, 20자 이하, 첫 글자만 대문자)
    #[validate(length(min = 1, max = 20, message = "이름은 1-20자 사이여야 합니다"))]
    #[validate(custom(function = "validate_capitalized"))]
    pub first_name: String,

    /// 미들네임 (선택, 20자 이하)
    #[validate(length(max = 20, message = "미들네임은 20자 이하여야 합니다"))]
    pub middle_name: Option<String>,

    /// 성 (필수, 20자 이하, 알파벳만 허용)
    #[validate(length(min = 1, max = 20, message = "성은 1-20자 사이여야 합니다"))]
    #[validate(custom(function = "validate_alphabetic"))]
    pub last_name: String,
}

/// 보호자 정보 입력 (모든 필드 필수)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct GuardianInput {
    #[validate(length(min = 1, message = "아버지 성함은 필수입니다"))]
    pub father_name: String,
    #[validate(length(min = 1, message = "아버지 직업은 필수입니다"))]
    pub father_occupation: String,
    #[validate(length(min = 1, message = "아버지 연락처는 필수입니다"))]
    pub father_contact_no: String,
    #[validate(length(min = 1, message = "어머니 성함은 필수입니다"))]
    pub mother_name: String,
    #[validate(length(min = 1, message = "어머니 직업은 필수입니다"))]
    pub mother_occupation: String,
    #[validate(length(min = 1, message = "어머니 연락처는 필수입니다"))]
    pub mother_contact_no: String,
}

/// 현지 보호자 정보 입력 (모든 필드 필수)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalGuardianInput {
    #[validate(length(min = 1, message = "현지 보호자 성함은 필수입니다"))]
    pub name: String,
    #[validate(length(min = 1, message = "현지 보호자 직업은 필수입니다"))]
    pub occupation: String,
    #[validate(length(min = 1, message = "현지 보호자 연락처는 필수입니다"))]
    pub contact_no: String,
    #[validate(length(min = 1, message = "현지 보호자 주소는 필수입니다"))]
    pub address: String,
}

/// 새로운 학생 레코드 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 수행합니다. 누락된 필드는 기본값(빈 문자열)으로
/// 채워진 뒤 검증 단계에서 필수 필드 위반으로 보고됩니다. 역직렬화 실패가 아닌
/// 위반 데이터로 처리하기 위한 장치입니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateStudentRequest {
    /// 학번 (필수, 전역 유일)
    #[validate(length(min = 1, message = "학번은 필수입니다"))]
    pub id: String,

    /// 비밀번호 (필수, 입력 기준 20자 이하 — 저장 시 해시로 대체됨)
    #[validate(length(min = 1, max = 20, message = "비밀번호는 1-20자 사이여야 합니다"))]
    pub password: String,

    #[validate(nested)]
    pub name: UserNameInput,

    /// 성별 리터럴 (male, female, other)
    pub gender: String,

    /// 이메일 주소 (필수, 전역 유일)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    pub date_of_birth: Option<String>,

    #[validate(length(min = 1, message = "연락처는 필수입니다"))]
    pub contact_no: String,

    #[validate(length(min = 1, message = "비상 연락처는 필수입니다"))]
    pub emergency_contact_no: String,

    /// 혈액형 리터럴 (선택: A+, A-, B+, B-, O+, O-, AB+, AB-)
    pub blood_group: Option<String>,

    #[validate(length(min = 1, message = "현재 주소는 필수입니다"))]
    pub present_address: String,

    #[validate(nested)]
    pub guardian: GuardianInput,

    #[validate(nested)]
    pub local_guardian: LocalGuardianInput,

    pub profile_img: Option<String>,

    /// 계정 상태 리터럴 (선택, 기본값 active)
    pub is_active: Option<String>,

    /// 소프트 삭제 플래그 (선택, 기본값 false)
    pub is_deleted: Option<bool>,
}

/// 이름 형식 검증: 첫 글자는 대문자, 나머지는 소문자 알파벳만 허용
///
/// 빈 문자열은 필수 필드 검증이 따로 보고하므로 여기서는 통과시킵니다.
fn validate_capitalized(value: &str) -> Result<(), ValidationError> {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return Ok(());
    };

    if !first.is_ascii_uppercase() || !chars.all(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::new("not_capitalized").with_message(
            format!("'{}'은(는) 첫 글자만 대문자인 형식이 아닙니다", value).into(),
        ));
    }

    Ok(())
}

/// 성 형식 검증: 알파벳(대소문자)만 허용
fn validate_alphabetic(value: &str) -> Result<(), ValidationError> {
    if !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::new("not_alphabetic").with_message(
            format!("'{}'은(는) 알파벳으로만 구성되어야 합니다", value).into(),
        ));
    }

    Ok(())
}

/// `validator`의 중첩 에러 트리를 평탄한 위반 목록으로 변환합니다.
///
/// Rust 필드명(snake_case)은 저장 문서 필드명(camelCase) 경로로 변환됩니다.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    collect_into(errors, "", &mut violations);
    violations
}

fn collect_into(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let path = format!("{}{}", prefix, to_camel_case(field));
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let reason = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("'{}' 규칙 검증에 실패했습니다", error.code));
                    out.push(FieldViolation::new(path.clone(), reason));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_into(nested, &format!("{}.", path), out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_into(nested, &format!("{}[{}].", path, index), out);
                }
            }
        }
    }
}

impl CreateStudentRequest {
    /// 요청을 검증하고 정규화된 학생 엔티티로 변환합니다.
    ///
    /// 1. 모든 문자열 필드의 앞뒤 공백 제거
    /// 2. 구조적 규칙 검증 (필수/길이/형식/이메일)
    /// 3. 열거형 리터럴 검증 및 타입 변환 (위반 시 해당 값을 명시)
    /// 4. 기본값 적용 (`isActive = active`, `isDeleted = false`)
    ///
    /// 반환된 엔티티의 `password`는 아직 **평문**입니다. 저장 전에 반드시
    /// 해싱 단계를 거쳐야 합니다 (서비스 계층의 생성 연산이 담당).
    ///
    /// # 반환값
    /// * `Ok(Student)` - 정규화된 엔티티
    /// * `Err(Vec<FieldViolation>)` - 필드 경로 순으로 정렬된 전체 위반 목록
    pub fn validated(self) -> Result<Student, Vec<FieldViolation>> {
        let request = self.trimmed();

        let mut violations = match request.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => collect_violations(&errors),
        };

        // 열거형 리터럴은 변환 단계에서 검증함. 위반 메시지에 원본 값을 명시.
        let gender = match Gender::parse(&request.gender) {
            Some(gender) => gender,
            None => {
                violations.push(FieldViolation::new(
                    "gender",
                    format!(
                        "'{}'은(는) 유효한 성별이 아닙니다. {} 중 하나여야 합니다",
                        request.gender,
                        Gender::VALUES.join(", ")
                    ),
                ));
                // 플레이스홀더. 위반이 기록되었으므로 아래에서 Err로 반환됨.
                Gender::Other
            }
        };

        let blood_group = match request.blood_group.as_deref() {
            Some(value) => match BloodGroup::parse(value) {
                Some(blood_group) => Some(blood_group),
                None => {
                    violations.push(FieldViolation::new(
                        "bloodGroup",
                        format!("'{}'은(는) 유효한 혈액형이 아닙니다", value),
                    ));
                    None
                }
            },
            None => None,
        };

        let is_active = match request.is_active.as_deref() {
            Some(value) => match ActiveStatus::parse(value) {
                Some(status) => status,
                None => {
                    violations.push(FieldViolation::new(
                        "isActive",
                        format!(
                            "'{}'은(는) 유효한 상태가 아닙니다. {} 중 하나여야 합니다",
                            value,
                            ActiveStatus::VALUES.join(", ")
                        ),
                    ));
                    ActiveStatus::default()
                }
            },
            None => ActiveStatus::default(),
        };

        if !violations.is_empty() {
            violations.sort_by(|a, b| a.field.cmp(&b.field));
            return Err(violations);
        }

        Ok(Student {
            object_id: None,
            id: request.id,
            password: request.password,
            name: UserName {
                first_name: request.name.first_name,
                middle_name: clean_optional_string(request.name.middle_name),
                last_name: request.name.last_name,
            },
            gender,
            email: request.email,
            date_of_birth: request.date_of_birth,
            contact_no: request.contact_no,
            emergency_contact_no: request.emergency_contact_no,
            blood_group,
            present_address: request.present_address,
            guardian: Guardian {
                father_name: request.guardian.father_name,
                father_occupation: request.guardian.father_occupation,
                father_contact_no: request.guardian.father_contact_no,
                mother_name: request.guardian.mother_name,
                mother_occupation: request.guardian.mother_occupation,
                mother_contact_no: request.guardian.mother_contact_no,
            },
            local_guardian: LocalGuardian {
                name: request.local_guardian.name,
                occupation: request.local_guardian.occupation,
                contact_no: request.local_guardian.contact_no,
                address: request.local_guardian.address,
            },
            profile_img: clean_optional_string(request.profile_img),
            is_active,
            is_deleted: request.is_deleted.unwrap_or(false),
        })
    }

    /// 모든 문자열 필드의 앞뒤 공백을 제거한 사본을 반환합니다.
    fn trimmed(self) -> Self {
        Self {
            id: self.id.trim().to_string(),
            password: self.password.trim().to_string(),
            name: UserNameInput {
                first_name: self.name.first_name.trim().to_string(),
                middle_name: self.name.middle_name.map(|s| s.trim().to_string()),
                last_name: self.name.last_name.trim().to_string(),
            },
            gender: self.gender.trim().to_string(),
            email: self.email.trim().to_string(),
            date_of_birth: clean_optional_string(self.date_of_birth),
            contact_no: self.contact_no.trim().to_string(),
            emergency_contact_no: self.emergency_contact_no.trim().to_string(),
            blood_group: clean_optional_string(self.blood_group),
            present_address: self.present_address.trim().to_string(),
            guardian: GuardianInput {
                father_name: self.guardian.father_name.trim().to_string(),
                father_occupation: self.guardian.father_occupation.trim().to_string(),
                father_contact_no: self.guardian.father_contact_no.trim().to_string(),
                mother_name: self.guardian.mother_name.trim().to_string(),
                mother_occupation: self.guardian.mother_occupation.trim().to_string(),
                mother_contact_no: self.guardian.mother_contact_no.trim().to_string(),
            },
            local_guardian: LocalGuardianInput {
                name: self.local_guardian.name.trim().to_string(),
                occupation: self.local_guardian.occupation.trim().to_string(),
                contact_no: self.local_guardian.contact_no.trim().to_string(),
                address: self.local_guardian.address.trim().to_string(),
            },
            profile_img: self.profile_img.map(|s| s.trim().to_string()),
            is_active: self.is_active.map(|s| s.trim().to_string()),
            is_deleted: self.is_deleted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_request_json() -> serde_json::Value {
        json!({
            "id": "S-01",
            "password": "Secret1",
            "name": { "firstName": "Jamal", "lastName": "Uddin" },
            "gender": "male",
            "email": "a@b.com",
            "contactNo": "1",
            "emergencyContactNo": "2",
            "presentAddress": "X",
            "guardian": {
                "fatherName": "Kabir",
                "fatherOccupation": "Teacher",
                "fatherContactNo": "111",
                "motherName": "Rahima",
                "motherOccupation": "Doctor",
                "motherContactNo": "222"
            },
            "localGuardian": {
                "name": "Shafiq",
                "occupation": "Business",
                "contactNo": "333",
                "address": "Dhaka"
            }
        })
    }

    fn request_from(value: serde_json::Value) -> CreateStudentRequest {
        serde_json::from_value(value).unwrap()
    }

    fn fields_of(violations: &[FieldViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn test_valid_request_produces_normalized_student() {
        let student = request_from(valid_request_json()).validated().unwrap();

        assert_eq!(student.id, "S-01");
        assert_eq!(student.name.first_name, "Jamal");
        assert_eq!(student.name.middle_name, None);
        assert_eq!(student.gender, Gender::Male);
        // 기본값 적용 확인
        assert_eq!(student.is_active, ActiveStatus::Active);
        assert!(!student.is_deleted);
        assert_eq!(student.blood_group, None);
    }

    #[test]
    fn test_strings_are_trimmed_before_validation() {
        let mut value = valid_request_json();
        value["id"] = json!("  S-01  ");
        value["email"] = json!(" a@b.com ");
        value["name"]["firstName"] = json!("  Jamal ");

        let student = request_from(value).validated().unwrap();
        assert_eq!(student.id, "S-01");
        assert_eq!(student.email, "a@b.com");
        assert_eq!(student.name.first_name, "Jamal");
    }

    #[test]
    fn test_missing_required_fields_are_violations_not_errors() {
        // 필수 필드가 통째로 빠져도 역직렬화는 성공하고 위반 데이터로 보고됨
        let value = json!({ "gender": "male" });
        let violations = request_from(value).validated().unwrap_err();

        let fields = fields_of(&violations);
        assert!(fields.contains(&"id"));
        assert!(fields.contains(&"password"));
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"name.firstName"));
        assert!(fields.contains(&"name.lastName"));
        assert!(fields.contains(&"guardian.fatherName"));
        assert!(fields.contains(&"localGuardian.address"));
    }

    #[test]
    fn test_nested_violation_paths_are_dotted_camel_case() {
        let mut value = valid_request_json();
        value["guardian"]["motherContactNo"] = json!("   ");

        let violations = request_from(value).validated().unwrap_err();
        assert!(fields_of(&violations).contains(&"guardian.motherContactNo"));
    }

    #[test]
    fn test_first_name_must_be_capitalized() {
        let mut value = valid_request_json();
        value["name"]["firstName"] = json!("jamal");

        let violations = request_from(value).validated().unwrap_err();
        let violation = violations
            .iter()
            .find(|v| v.field == "name.firstName")
            .unwrap();
        assert!(violation.reason.contains("jamal"));
    }

    #[test]
    fn test_first_name_rejects_inner_uppercase_and_digits() {
        for bad in ["JaMal", "Jam4l", "Ja mal"] {
            let mut value = valid_request_json();
            value["name"]["firstName"] = json!(bad);

            let violations = request_from(value).validated().unwrap_err();
            assert!(
                fields_of(&violations).contains(&"name.firstName"),
                "expected violation for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_last_name_must_be_alphabetic() {
        let mut value = valid_request_json();
        value["name"]["lastName"] = json!("Udd1n");

        let violations = request_from(value).validated().unwrap_err();
        assert!(fields_of(&violations).contains(&"name.lastName"));

        // 대소문자 혼합은 허용됨
        let mut value = valid_request_json();
        value["name"]["lastName"] = json!("UdDin");
        assert!(request_from(value).validated().is_ok());
    }

    #[test]
    fn test_first_name_max_length() {
        let mut value = valid_request_json();
        value["name"]["firstName"] = json!(format!("J{}", "a".repeat(25))); // 26자

        let violations = request_from(value).validated().unwrap_err();
        assert!(fields_of(&violations).contains(&"name.firstName"));
    }

    #[test]
    fn test_password_longer_than_20_chars_is_rejected() {
        let mut value = valid_request_json();
        value["password"] = json!("aaaaaaaaaaaaaaaaaaaaa"); // 21자

        let violations = request_from(value).validated().unwrap_err();
        assert!(fields_of(&violations).contains(&"password"));
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let mut value = valid_request_json();
        value["email"] = json!("not-an-email");

        let violations = request_from(value).validated().unwrap_err();
        assert!(fields_of(&violations).contains(&"email"));
    }

    #[test]
    fn test_invalid_enum_values_name_the_offending_value() {
        let mut value = valid_request_json();
        value["gender"] = json!("dog");
        value["bloodGroup"] = json!("C+");
        value["isActive"] = json!("frozen");

        let violations = request_from(value).validated().unwrap_err();

        let gender = violations.iter().find(|v| v.field == "gender").unwrap();
        assert!(gender.reason.contains("dog"));

        let blood = violations.iter().find(|v| v.field == "bloodGroup").unwrap();
        assert!(blood.reason.contains("C+"));

        let active = violations.iter().find(|v| v.field == "isActive").unwrap();
        assert!(active.reason.contains("frozen"));
    }

    #[test]
    fn test_valid_optional_enums_are_converted() {
        let mut value = valid_request_json();
        value["bloodGroup"] = json!("AB-");
        value["isActive"] = json!("blocked");

        let student = request_from(value).validated().unwrap();
        assert_eq!(student.blood_group, Some(BloodGroup::AbNegative));
        assert_eq!(student.is_active, ActiveStatus::Blocked);
    }

    #[test]
    fn test_violations_are_sorted_by_field_path() {
        let value = json!({});
        let violations = request_from(value).validated().unwrap_err();

        let fields = fields_of(&violations);
        let mut sorted = fields.clone();
        sorted.sort();
        assert_eq!(fields, sorted);
    }

    #[test]
    fn test_validated_password_is_still_plaintext() {
        // 해싱은 서비스 계층의 생성 연산이 수행함
        let student = request_from(valid_request_json()).validated().unwrap();
        assert_eq!(student.password, "Secret1");
    }
}
