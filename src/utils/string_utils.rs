//! # 문자열 유틸리티
//!
//! 요청 역직렬화에서 사용하는 문자열 정리 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Main St.  ".to_string())), Some("Main St.".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용합니다.
///
/// * `{"address": "  Main St.  "}` → `Some("Main St.")`
/// * `{"address": ""}` / `{"address": "   "}` / `{"address": null}` → `None`
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("\t\n".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  Hello  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("Hello".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "   "}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);
    }
}
