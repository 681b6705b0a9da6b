//! # User Management HTTP Handlers
//!
//! 사용자 관리 HTTP 엔드포인트입니다. 요청 파싱과 필드 검증만 담당하고
//! 비즈니스 규칙은 모두 [`UserService`]에 위임합니다.
//!
//! ## 엔드포인트 (`/api/v1/users`)
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `` | 페이지 단위 목록 (`offset`, `limit`) | 200 OK |
//! | `GET` | `/search` | 생년월일 구간 검색 (`minDate`, `maxDate`) | 200 OK |
//! | `GET` | `/{userId}` | 사용자 조회 | 200 OK |
//! | `POST` | `` | 사용자 생성 | 201 Created |
//! | `PUT` | `` | 사용자 전체 교체 | 200 OK |
//! | `PATCH` | `/{userId}` | 사용자 부분 수정 | 200 OK |
//! | `DELETE` | `/{userId}` | 사용자 삭제 | 200 OK |
//!
//! 요청 본문은 `{"data": {...}}`, 응답 본문은 `{"data": [...]}` 형식입니다.

use actix_web::{HttpRequest, HttpResponse, delete, get, patch, post, put, web};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{DataRequest, PatchUserRequest, UserRequest};
use crate::domain::dto::users::response::{DataResponse, ListResponse};
use crate::services::users::UserService;

/// 목록 조회 쿼리
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

/// 생년월일 검색 쿼리 (ISO 8601 날짜)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub min_date: NaiveDate,
    pub max_date: Option<NaiveDate>,
}

/// 쿼리 문자열을 제외한 요청 주소
///
/// 페이지 링크의 기준 주소로 사용됩니다.
fn request_base_url(req: &HttpRequest) -> String {
    let conn = req.connection_info();
    format!("{}://{}{}", conn.scheme(), conn.host(), req.path())
}

#[get("")]
pub async fn get_page(
    req: HttpRequest,
    query: web::Query<PageQuery>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let PageQuery { offset, limit } = query.into_inner();
    let base_url = request_base_url(&req);

    let page = service.list(offset, limit, &base_url)?;

    Ok(HttpResponse::Ok().json(ListResponse::from(page)))
}

#[get("/search")]
pub async fn find_by_birth_date(
    query: web::Query<SearchQuery>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let SearchQuery { min_date, max_date } = query.into_inner();

    let users = service.search_by_birth_date(min_date, max_date)?;

    Ok(HttpResponse::Ok().json(DataResponse::new(users)))
}

#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<Uuid>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_one(user_id.into_inner())?;
    Ok(HttpResponse::Ok().json(DataResponse::single(user)))
}

#[post("")]
pub async fn create_user(
    payload: web::Json<DataRequest<UserRequest>>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate_data()?;

    let user = service.create(payload.into_inner().data)?;

    Ok(HttpResponse::Created().json(DataResponse::single(user)))
}

#[put("")]
pub async fn replace_user(
    payload: web::Json<DataRequest<UserRequest>>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate_data()?;

    service.replace(payload.into_inner().data)?;

    Ok(HttpResponse::Ok().finish())
}

#[patch("/{user_id}")]
pub async fn patch_user(
    user_id: web::Path<Uuid>,
    payload: web::Json<DataRequest<PatchUserRequest>>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate_data()?;

    service.patch(Some(user_id.into_inner()), payload.into_inner().data)?;

    Ok(HttpResponse::Ok().finish())
}

#[delete("/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<Uuid>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    service.delete(user_id.into_inner())?;
    Ok(HttpResponse::Ok().finish())
}
