//! User Entity Implementation
//!
//! 저장소에 보관되는 사용자 레코드입니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 엔티티
///
/// 식별자는 생성 시 저장소가 부여하며 이후 변경되지 않습니다.
/// 이메일은 모든 레코드 사이에서 유일합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    /// 사용자 이메일 (unique, 대소문자 구분)
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl User {
    /// 필수 필드만으로 사용자 생성
    pub fn new(
        id: Uuid,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            address: None,
            phone_number: None,
        }
    }

    /// 주소 설정 (builder 스타일)
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_and_skips_empty_optionals() {
        let user = User::new(
            Uuid::nil(),
            "bob@gmail.com",
            "Bob",
            "Washington",
            NaiveDate::from_ymd_opt(1996, 6, 13).unwrap(),
        );

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["firstName"], "Bob");
        assert_eq!(json["birthDate"], "1996-06-13");
        assert!(json.get("address").is_none());
        assert!(json.get("phoneNumber").is_none());
    }
}
