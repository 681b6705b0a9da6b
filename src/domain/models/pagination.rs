//! 페이지네이션 모델
//!
//! 정렬된 컬렉션을 제한된 크기의 페이지로 나눈 결과와
//! 이전/다음 페이지로 이동하기 위한 링크를 표현합니다.

use serde::{Deserialize, Serialize};

/// 페이지 위치 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// 0부터 시작하는 첫 항목의 위치
    pub offset: usize,
    /// 이 페이지에 실제로 담긴 최대 항목 수 (유효 limit)
    pub limit: usize,
    /// 조회 시점의 전체 레코드 수
    pub total: usize,
}

/// 이전/다음 페이지 링크
///
/// 해당 방향의 페이지가 없으면 필드가 비어 있습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// 항목과 위치 정보, 탐색 링크를 포함한 한 페이지
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
    pub links: PaginationLinks,
}

/// 목록 조회 결과
///
/// 범위를 벗어난 요청은 페이지 정보 없는 `Empty`로 구분됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResult<T> {
    Page(Page<T>),
    Empty,
}

impl<T> PageResult<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, PageResult::Empty)
    }

    /// 페이지가 있으면 참조를 반환합니다.
    pub fn as_page(&self) -> Option<&Page<T>> {
        match self {
            PageResult::Page(page) => Some(page),
            PageResult::Empty => None,
        }
    }
}

/// 페이지 링크 생성
///
/// 기준 위치(base)에 `offset`, `limit` 쿼리를 붙여 호출자가 그대로 요청할 수 있는
/// 주소를 만듭니다.
///
/// ```rust,ignore
/// assert_eq!(page_url("/api/v1/users", 20, 10), "/api/v1/users?offset=20&limit=10");
/// ```
pub fn page_url(base: &str, offset: usize, limit: usize) -> String {
    format!("{}?offset={}&limit={}", base, offset, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url() {
        assert_eq!(
            page_url("http://localhost:8080/api/v1/users", 4, 2),
            "http://localhost:8080/api/v1/users?offset=4&limit=2"
        );
    }

    #[test]
    fn test_links_skip_missing_directions() {
        let links = PaginationLinks {
            next: Some(page_url("/users", 2, 2)),
            prev: None,
        };

        let json = serde_json::to_value(&links).unwrap();
        assert_eq!(json["next"], "/users?offset=2&limit=2");
        assert!(json.get("prev").is_none());
    }
}
