//! # 사용자 관리 서비스 구현
//!
//! 사용자 레코드 저장소 위에서 동작하는 비즈니스 규칙을 구현합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │   Registration  │  │     Update      │  │     Query       │  │
//! │  │                 │  │                 │  │                 │  │
//! │  │ • Age Check     │  │ • Target Resolve│  │ • By ID         │  │
//! │  │ • Email Unique  │  │ • Email Conflict│  │ • Birth Range   │  │
//! │  │ • ID Assign     │  │ • Patch Merge   │  │ • Paging/Links  │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//!                    ┌─────────────────────────┐
//!                    │  RwLock<impl UserStore> │
//!                    └─────────────────────────┘
//! ```
//!
//! ## 동시성
//!
//! 조회 후 변경하는 연산(생성, 교체, 부분 수정, 삭제)은 하나의 쓰기 잠금 안에서
//! 수행됩니다. 같은 이메일로 동시에 들어온 두 생성 요청이 모두 중복 검사를
//! 통과하는 일은 없습니다.
//!
//! ## 에러 처리
//!
//! | 상황 | 에러 |
//! |------|------|
//! | 페이로드/ID 누락, 미래 생년월일, 잘못된 날짜 범위 | `AppError::InvalidInput` |
//! | 최소 연령 미달 | `AppError::AgeNotEligible` |
//! | 다른 사용자의 이메일 사용 | `AppError::EmailConflict` |
//! | 해당 ID 없음 | `AppError::NotFound` |
//! | 저장소 잠금 실패 등 | `AppError::InternalError` |

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, Utc};
use log::{debug, info, warn};
use uuid::Uuid;

use crate::{
    config::UsersConfig,
    core::errors::{AppError, AppResult, ErrorContext},
    domain::{
        dto::users::request::{PatchUserRequest, UserRequest},
        entities::users::User,
        models::pagination::{page_url, Page, PageResult, PaginationInfo, PaginationLinks},
    },
    repositories::users::{InMemoryUserStore, UserStore},
};

const USER_NOT_FOUND: &str = "사용자를 찾을 수 없습니다";
const EMAIL_IN_USE: &str = "이미 사용 중인 이메일입니다";

/// 교체 대상 위치 탐색 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateTarget {
    /// 식별자가 일치하는 레코드의 위치
    Found(usize),
    /// 다른 레코드가 이미 같은 이메일을 사용 중
    EmailConflict,
    /// 식별자가 일치하는 레코드 없음
    NotFound,
}

/// 교체할 레코드의 위치를 찾고 이메일 충돌을 판정합니다.
///
/// 컬렉션을 한 번만 순회하며 두 위치를 추적합니다.
/// - 식별자가 처음 일치한 위치
/// - 이메일이 처음 일치한 위치 (찾는 즉시 순회 종료)
///
/// 이메일 일치 위치가 있고 식별자 일치 위치와 다르면 충돌입니다.
/// 자기 자신의 이메일을 유지하는 것은 충돌이 아닙니다.
///
/// 이메일 일치 이후에 나오는 식별자 일치는 보지 않습니다.
/// 따라서 다른 레코드의 이메일이 먼저 발견되면 식별자 존재 여부와 무관하게 충돌로 판정됩니다.
pub fn resolve_update_target<'a>(
    users: impl IntoIterator<Item = &'a User>,
    candidate: &User,
) -> UpdateTarget {
    let mut id_match: Option<usize> = None;
    let mut email_match: Option<usize> = None;

    for (index, user) in users.into_iter().enumerate() {
        if id_match.is_none() && user.id == candidate.id {
            id_match = Some(index);
        }

        if user.email == candidate.email {
            email_match = Some(index);
            break;
        }
    }

    if email_match.is_some() && email_match != id_match {
        return UpdateTarget::EmailConflict;
    }

    match id_match {
        Some(index) => UpdateTarget::Found(index),
        None => UpdateTarget::NotFound,
    }
}

/// 오늘 기준 만 나이. 생년월일이 미래이면 `None`입니다.
pub fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(birth_date)
}

/// 페이지 구간 계산
///
/// 반환값은 `(offset, 유효 limit)`이며, 반환할 항목이 없으면 `None`입니다.
/// 유효 limit = min(요청 limit, 최대 limit, total - offset)
pub fn page_window(total: usize, offset: usize, limit: i64, max_limit: i64) -> Option<(usize, usize)> {
    if total == 0 || offset >= total {
        return None;
    }

    let remaining = i64::try_from(total - offset).unwrap_or(i64::MAX);
    let effective = limit.min(max_limit).min(remaining);
    if effective <= 0 {
        return None;
    }

    let effective = usize::try_from(effective).ok()?;
    Some((offset, effective))
}

/// 사용자 관리 서비스
///
/// 저장소 인스턴스를 직접 소유하며, 프로세스 수명 동안 `web::Data`로 공유됩니다.
pub struct UserService<S: UserStore = InMemoryUserStore> {
    store: RwLock<S>,
    config: UsersConfig,
}

impl UserService<InMemoryUserStore> {
    /// 빈 메모리 저장소로 서비스를 생성합니다.
    pub fn in_memory(config: UsersConfig) -> Self {
        Self::new(InMemoryUserStore::new(), config)
    }
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S, config: UsersConfig) -> Self {
        Self {
            store: RwLock::new(store),
            config,
        }
    }

    pub fn config(&self) -> &UsersConfig {
        &self.config
    }

    /// 현재 저장된 사용자 수
    pub fn count(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    /// 새 사용자를 생성합니다.
    ///
    /// # 처리 과정
    ///
    /// 1. 페이로드 존재 확인
    /// 2. 생년월일로 만 나이 계산 (미래 날짜 → `InvalidInput`, 최소 연령 미달 → `AgeNotEligible`)
    /// 3. 이메일 중복 확인 (대소문자 구분 완전 일치)
    /// 4. 기존 식별자와 겹치지 않는 새 UUID 부여 후 저장
    ///
    /// 요청에 포함된 `id`는 무시됩니다.
    pub fn create(&self, input: Option<UserRequest>) -> AppResult<User> {
        let input = input.ok_or_else(|| {
            AppError::InvalidInput("사용자 데이터가 없어 생성할 수 없습니다".to_string())
        })?;

        self.check_age(input.birth_date)?;

        let mut store = self.write()?;

        if store.scan().any(|user| user.email == input.email) {
            warn!("User creation rejected: email already in use");
            return Err(AppError::EmailConflict(EMAIL_IN_USE.to_string()));
        }

        let id = Self::generate_unique_id(&*store);
        let user = input.into_user_with_id(id);
        store.insert(user.clone())?;

        info!("User created: {}", user.id);
        Ok(user)
    }

    /// 식별자로 사용자를 조회합니다.
    pub fn get_one(&self, id: Uuid) -> AppResult<User> {
        self.read()?
            .find_by_id(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// 요청 레코드로 기존 레코드를 통째로 교체합니다.
    ///
    /// 대상 위치는 [`resolve_update_target`]으로 결정하며,
    /// 찾은 위치에는 요청 레코드가 그대로 저장됩니다.
    pub fn replace(&self, input: Option<UserRequest>) -> AppResult<()> {
        let input = input.ok_or_else(|| {
            AppError::InvalidInput("사용자 데이터가 없어 수정할 수 없습니다".to_string())
        })?;
        let user = input
            .into_user()
            .ok_or_else(|| AppError::InvalidInput("사용자 ID가 없습니다".to_string()))?;

        let mut store = self.write()?;
        Self::replace_in(&mut *store, user)
    }

    /// 설정된 필드만 변경합니다.
    ///
    /// 식별자로 원본을 직접 조회한 뒤 패치를 적용한 전체 레코드를 만들어
    /// 교체 규칙(이메일 충돌 포함)을 그대로 따릅니다.
    pub fn patch(&self, id: Option<Uuid>, patch: Option<PatchUserRequest>) -> AppResult<()> {
        let id = id.ok_or_else(|| AppError::InvalidInput("사용자 ID가 없습니다".to_string()))?;
        let patch = patch.ok_or_else(|| {
            AppError::InvalidInput("사용자 데이터가 없어 수정할 수 없습니다".to_string())
        })?;

        let mut store = self.write()?;
        let original = store
            .find_by_id(&id)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;
        let candidate = patch.apply_to(original);

        Self::replace_in(&mut *store, candidate)
    }

    /// 사용자를 삭제합니다. 나머지 레코드의 순서는 유지됩니다.
    pub fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut store = self.write()?;
        let index = store
            .position_by_id(&id)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        store.remove_at(index)?;

        info!("User deleted: {}", id);
        Ok(())
    }

    /// 생년월일이 `(min_date, max_date)` 구간에 있는 사용자를 저장 순서대로 반환합니다.
    ///
    /// 양쪽 경계 모두 제외하며, `max_date`가 없으면 오늘 날짜를 사용합니다.
    /// 결과가 비어 있어도 에러가 아닙니다.
    pub fn search_by_birth_date(
        &self,
        min_date: NaiveDate,
        max_date: Option<NaiveDate>,
    ) -> AppResult<Vec<User>> {
        let max_date = max_date.unwrap_or_else(today);

        if min_date > max_date {
            return Err(AppError::InvalidInput(
                "minDate는 maxDate보다 늦을 수 없습니다".to_string(),
            ));
        }

        let users = self
            .read()?
            .scan()
            .filter(|user| user.birth_date > min_date && user.birth_date < max_date)
            .cloned()
            .collect();

        Ok(users)
    }

    /// 사용자 목록을 페이지 단위로 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `offset` - 시작 위치 (없으면 설정 기본값, 음수면 `InvalidInput`)
    /// * `limit` - 요청 페이지 크기 (없으면 설정 기본값, 최대값으로 제한)
    /// * `base_url` - 이전/다음 링크의 기준 주소
    ///
    /// # Returns
    ///
    /// * `PageResult::Page` - 항목, 위치 정보, 링크
    /// * `PageResult::Empty` - 저장소가 비었거나 offset이 범위를 벗어났거나 limit가 0 이하
    pub fn list(
        &self,
        offset: Option<i64>,
        limit: Option<i64>,
        base_url: &str,
    ) -> AppResult<PageResult<User>> {
        let offset = offset.unwrap_or(self.config.pagination_default_offset);
        let limit = limit.unwrap_or(self.config.pagination_default_limit);

        let offset = usize::try_from(offset)
            .map_err(|_| AppError::InvalidInput("offset은 0 이상이어야 합니다".to_string()))?;

        let store = self.read()?;
        let total = store.len();

        let Some((offset, limit)) =
            page_window(total, offset, limit, self.config.pagination_max_limit)
        else {
            debug!("Empty page: offset={}, limit={}, total={}", offset, limit, total);
            return Ok(PageResult::Empty);
        };

        let last_index = offset + limit;
        let items = store.slice(offset..last_index)?;

        let links = PaginationLinks {
            next: (last_index < total).then(|| page_url(base_url, last_index, limit)),
            prev: (offset > 0).then(|| page_url(base_url, offset.saturating_sub(limit), limit)),
        };

        debug!("Page built: offset={}, limit={}, total={}", offset, limit, total);

        Ok(PageResult::Page(Page {
            items,
            pagination: PaginationInfo { offset, limit, total },
            links,
        }))
    }

    fn check_age(&self, birth_date: NaiveDate) -> AppResult<()> {
        match age_in_years(birth_date, today()) {
            None => Err(AppError::InvalidInput(format!("잘못된 생년월일입니다: {}", birth_date))),
            Some(age) if age < self.config.user_min_age => {
                warn!("User creation rejected: age {} below minimum {}", age, self.config.user_min_age);
                Err(AppError::AgeNotEligible(format!("가입할 수 없는 연령입니다: {}", age)))
            }
            Some(_) => Ok(()),
        }
    }

    fn replace_in(store: &mut S, user: User) -> AppResult<()> {
        match resolve_update_target(store.scan(), &user) {
            UpdateTarget::EmailConflict => {
                warn!("User update rejected: email already in use");
                Err(AppError::EmailConflict(EMAIL_IN_USE.to_string()))
            }
            UpdateTarget::NotFound => Err(AppError::NotFound(USER_NOT_FOUND.to_string())),
            UpdateTarget::Found(index) => {
                let id = user.id;
                store.replace_at(index, user)?;
                info!("User updated: {}", id);
                Ok(())
            }
        }
    }

    fn generate_unique_id(store: &S) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if store.find_by_id(&id).is_none() {
                return id;
            }
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, S>> {
        self.store.read().context("사용자 저장소 읽기 잠금 실패")
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, S>> {
        self.store.write().context("사용자 저장소 쓰기 잠금 실패")
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
