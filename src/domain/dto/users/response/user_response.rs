use serde::{Deserialize, Serialize};

use crate::domain::models::pagination::{Page, PageResult, PaginationInfo, PaginationLinks};

/// `{ "data": [...] }` 응답 봉투
///
/// 단건 조회도 배열로 감싸서 응답합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: Vec<T>,
}

impl<T> DataResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn single(item: T) -> Self {
        Self { data: vec![item] }
    }

    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }
}

/// 페이지 응답 (`data` + `pagination` + `links`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
    pub links: PaginationLinks,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            data: page.items,
            pagination: page.pagination,
            links: page.links,
        }
    }
}

/// 목록 조회 응답
///
/// 범위를 벗어난 요청은 `pagination`/`links` 없이 빈 `data`만 응답합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Page(PageResponse<T>),
    Empty(DataResponse<T>),
}

impl<T> From<PageResult<T>> for ListResponse<T> {
    fn from(result: PageResult<T>) -> Self {
        match result {
            PageResult::Page(page) => ListResponse::Page(page.into()),
            PageResult::Empty => ListResponse::Empty(DataResponse::empty()),
        }
    }
}

/// 에러 응답의 단일 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub status: u16,
    pub detail: String,
}

/// `{ "errors": [...] }` 에러 응답 봉투
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<ApiError>,
}

impl ErrorResponse {
    pub fn single(status: u16, detail: impl Into<String>) -> Self {
        Self {
            errors: vec![ApiError {
                status,
                detail: detail.into(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_response_has_only_data() {
        let response: ListResponse<u32> = PageResult::Empty.into();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "data": [] }));
    }

    #[test]
    fn test_page_list_response_shape() {
        let page = Page {
            items: vec![1u32, 2],
            pagination: PaginationInfo { offset: 2, limit: 2, total: 6 },
            links: PaginationLinks {
                next: Some("/users?offset=4&limit=2".to_string()),
                prev: Some("/users?offset=0&limit=2".to_string()),
            },
        };

        let json = serde_json::to_value(ListResponse::from(PageResult::Page(page))).unwrap();
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert_eq!(json["pagination"]["offset"], 2);
        assert_eq!(json["pagination"]["total"], 6);
        assert_eq!(json["links"]["next"], "/users?offset=4&limit=2");
    }
}
