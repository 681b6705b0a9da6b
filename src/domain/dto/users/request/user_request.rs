//! 사용자 생성/교체/부분 수정 요청 DTO
//!
//! 클라이언트 입력의 필드 단위 제약은 여기서 `validator`로 검증합니다.
//! 서비스 계층은 검증을 통과한 값만 받으며, 연령/중복 같은 비즈니스 규칙만 확인합니다.

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::entities::users::User;
use crate::utils::string_utils::deserialize_optional_string;

/// 전화번호 형식: 11-14자리 숫자
static PHONE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{11,14}$").expect("phone number pattern is valid"));

/// `{ "data": ... }` 요청 봉투
///
/// `data`가 없거나 `null`인 요청도 역직렬화는 성공하며,
/// 누락 여부는 서비스 계층이 `InvalidInput`으로 판단합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataRequest<T> {
    pub data: Option<T>,
}

impl<T: Validate> DataRequest<T> {
    /// 페이로드가 있으면 검증합니다. 누락된 페이로드는 그대로 통과시킵니다.
    pub fn validate_data(&self) -> Result<(), validator::ValidationErrors> {
        match &self.data {
            Some(data) => data.validate(),
            None => Ok(()),
        }
    }
}

/// 사용자 전체 정보 요청 (생성 및 교체)
///
/// 생성 시 `id`는 무시되고 새로 부여됩니다. 교체 시에는 필수입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default)]
    pub id: Option<Uuid>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "성은 1-50자 사이여야 합니다"))]
    pub last_name: String,

    #[validate(custom(function = "validate_birth_date"))]
    pub birth_date: NaiveDate,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub address: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: Option<String>,
}

impl UserRequest {
    /// 주어진 식별자로 엔티티를 만듭니다. 요청의 `id`는 사용하지 않습니다.
    pub fn into_user_with_id(self, id: Uuid) -> User {
        User {
            id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            address: self.address,
            phone_number: self.phone_number,
        }
    }

    /// 요청에 담긴 `id`로 엔티티를 만듭니다. `id`가 없으면 `None`입니다.
    pub fn into_user(self) -> Option<User> {
        let id = self.id?;
        Some(self.into_user_with_id(id))
    }
}

impl From<User> for UserRequest {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            birth_date: user.birth_date,
            address: user.address,
            phone_number: user.phone_number,
        }
    }
}

/// 부분 수정 요청
///
/// 비어 있는 필드는 "기존 값 유지"를 의미합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchUserRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "성은 1-50자 사이여야 합니다"))]
    pub last_name: Option<String>,

    #[validate(custom(function = "validate_birth_date"))]
    pub birth_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub address: Option<String>,

    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: Option<String>,
}

impl PatchUserRequest {
    /// 원본에 패치를 적용한 새 레코드를 만듭니다.
    ///
    /// 설정된 필드만 교체하고, 식별자는 항상 원본 값을 유지합니다.
    pub fn apply_to(&self, original: &User) -> User {
        User {
            id: original.id,
            email: self.email.clone().unwrap_or_else(|| original.email.clone()),
            first_name: self
                .first_name
                .clone()
                .unwrap_or_else(|| original.first_name.clone()),
            last_name: self
                .last_name
                .clone()
                .unwrap_or_else(|| original.last_name.clone()),
            birth_date: self.birth_date.unwrap_or(original.birth_date),
            address: self.address.clone().or_else(|| original.address.clone()),
            phone_number: self
                .phone_number
                .clone()
                .or_else(|| original.phone_number.clone()),
        }
    }
}

/// 생년월일은 오늘보다 이전이어야 함
fn validate_birth_date(birth_date: &NaiveDate) -> Result<(), ValidationError> {
    if *birth_date >= Utc::now().date_naive() {
        return Err(ValidationError::new("birth_date_not_past")
            .with_message("생년월일은 오늘 이전 날짜여야 합니다".into()));
    }
    Ok(())
}

/// 전화번호는 11-14자리 숫자
fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    if !PHONE_NUMBER_REGEX.is_match(phone_number) {
        return Err(ValidationError::new("invalid_phone_number")
            .with_message("전화번호는 11-14자리 숫자여야 합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> UserRequest {
        UserRequest {
            id: None,
            email: "bob@gmail.com".to_string(),
            first_name: "Bob".to_string(),
            last_name: "Washington".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1996, 6, 13).unwrap(),
            address: None,
            phone_number: Some("48123456789".to_string()),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_fields_are_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.first_name = String::new();
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.last_name = "x".repeat(51);
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.birth_date = Utc::now().date_naive();
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.phone_number = Some("12345".to_string());
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.phone_number = Some("123456789012a".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_deserialize_envelope_and_blank_address() {
        let json = r#"{"data":{"email":"a@b.com","firstName":"A","lastName":"B","birthDate":"1990-01-02","address":"   "}}"#;
        let request: DataRequest<UserRequest> = serde_json::from_str(json).unwrap();
        let data = request.data.unwrap();

        assert_eq!(data.birth_date, NaiveDate::from_ymd_opt(1990, 1, 2).unwrap());
        assert_eq!(data.address, None);
        assert_eq!(data.id, None);
    }

    #[test]
    fn test_missing_payload_deserializes_to_none() {
        let request: DataRequest<UserRequest> = serde_json::from_str("{}").unwrap();
        assert!(request.data.is_none());
        assert!(request.validate_data().is_ok());
    }

    #[test]
    fn test_into_user_requires_id() {
        assert!(valid_request().into_user().is_none());

        let id = Uuid::new_v4();
        let mut request = valid_request();
        request.id = Some(id);
        assert_eq!(request.into_user().unwrap().id, id);
    }

    #[test]
    fn test_patch_changes_only_set_fields() {
        let original = valid_request()
            .into_user_with_id(Uuid::new_v4())
            .with_address("Main St. 1");
        let patch = PatchUserRequest {
            last_name: Some("Adams".to_string()),
            ..Default::default()
        };

        let patched = patch.apply_to(&original);

        assert_eq!(patched.last_name, "Adams");
        assert_eq!(
            User { last_name: original.last_name.clone(), ..patched.clone() },
            original
        );
    }

    #[test]
    fn test_patch_blank_address_deserializes_to_none() {
        let json = r#"{"data":{"address":"   "}}"#;
        let request: DataRequest<PatchUserRequest> = serde_json::from_str(json).unwrap();
        assert_eq!(request.data.unwrap().address, None);

        let json = r#"{"data":{"address":"  Main St. 2  "}}"#;
        let request: DataRequest<PatchUserRequest> = serde_json::from_str(json).unwrap();
        assert_eq!(request.data.unwrap().address.as_deref(), Some("Main St. 2"));
    }

    #[test]
    fn test_patch_validation_skips_absent_fields() {
        assert!(PatchUserRequest::default().validate().is_ok());

        let patch = PatchUserRequest {
            email: Some("broken".to_string()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }
}
