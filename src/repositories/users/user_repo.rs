//! 사용자 레코드 저장소
//!
//! 삽입 순서를 유지하는 사용자 컬렉션과, 서비스 계층이 의존하는 저장소 인터페이스입니다.
//! 저장소는 비즈니스 검증을 하지 않으며 모든 변경은 즉시 이후 조회에 반영됩니다.

use std::ops::Range;

use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;

/// 사용자 저장소 인터페이스
///
/// 영속 저장소로 교체하더라도 서비스 계층의 비즈니스 규칙은 바뀌지 않도록
/// 순서가 있는 컬렉션에 필요한 기본 연산만 노출합니다.
/// 위치(index)는 삽입 순서 기준이며 페이지네이션에 그대로 사용됩니다.
pub trait UserStore: Send + Sync {
    /// 저장된 레코드 수
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 저장 순서대로 모든 레코드를 순회합니다.
    fn scan(&self) -> impl Iterator<Item = &User>;

    /// 식별자로 레코드를 찾습니다.
    fn find_by_id(&self, id: &Uuid) -> Option<&User> {
        self.scan().find(|user| user.id == *id)
    }

    /// 식별자가 일치하는 첫 레코드의 위치
    fn position_by_id(&self, id: &Uuid) -> Option<usize> {
        self.scan().position(|user| user.id == *id)
    }

    /// `[start, end)` 구간의 레코드 복사본
    fn slice(&self, range: Range<usize>) -> AppResult<Vec<User>>;

    /// 컬렉션 끝에 레코드를 추가합니다.
    fn insert(&mut self, user: User) -> AppResult<()>;

    /// 지정 위치의 레코드를 교체하고 이전 레코드를 반환합니다.
    fn replace_at(&mut self, index: usize, user: User) -> AppResult<User>;

    /// 지정 위치의 레코드를 제거합니다. 나머지 레코드의 상대 순서는 유지됩니다.
    fn remove_at(&mut self, index: usize) -> AppResult<User>;
}

/// 메모리 기반 사용자 저장소
///
/// 프로세스 수명 동안만 유지되며 재시작 시 내용이 사라집니다.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Vec<User>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 레코드로 저장소를 구성합니다.
    pub fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }

    fn out_of_bounds(&self, index: usize) -> AppError {
        AppError::InternalError(format!(
            "저장소 위치가 범위를 벗어났습니다: index={}, len={}",
            index,
            self.users.len()
        ))
    }
}

impl UserStore for InMemoryUserStore {
    fn len(&self) -> usize {
        self.users.len()
    }

    fn scan(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    fn slice(&self, range: Range<usize>) -> AppResult<Vec<User>> {
        if range.start > range.end || range.end > self.users.len() {
            return Err(AppError::InternalError(format!(
                "저장소 구간이 범위를 벗어났습니다: {:?}, len={}",
                range,
                self.users.len()
            )));
        }
        Ok(self.users[range].to_vec())
    }

    fn insert(&mut self, user: User) -> AppResult<()> {
        self.users.push(user);
        Ok(())
    }

    fn replace_at(&mut self, index: usize, user: User) -> AppResult<User> {
        if index >= self.users.len() {
            return Err(self.out_of_bounds(index));
        }
        Ok(std::mem::replace(&mut self.users[index], user))
    }

    fn remove_at(&mut self, index: usize) -> AppResult<User> {
        if index >= self.users.len() {
            return Err(self.out_of_bounds(index));
        }
        Ok(self.users.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn user(email: &str) -> User {
        User::new(
            Uuid::new_v4(),
            email,
            "First",
            "Last",
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut store = InMemoryUserStore::new();
        assert!(store.is_empty());

        store.insert(user("a@x.com")).unwrap();
        store.insert(user("b@x.com")).unwrap();

        let emails: Vec<_> = store.scan().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_lookup_by_id() {
        let a = user("a@x.com");
        let b = user("b@x.com");
        let store = InMemoryUserStore::with_users(vec![a.clone(), b.clone()]);

        assert_eq!(store.find_by_id(&b.id), Some(&b));
        assert_eq!(store.position_by_id(&b.id), Some(1));
        assert_eq!(store.find_by_id(&Uuid::new_v4()), None);
    }

    #[test]
    fn test_replace_and_remove() {
        let a = user("a@x.com");
        let b = user("b@x.com");
        let c = user("c@x.com");
        let mut store = InMemoryUserStore::with_users(vec![a.clone(), b.clone(), c.clone()]);

        let replacement = user("z@x.com");
        let previous = store.replace_at(1, replacement.clone()).unwrap();
        assert_eq!(previous, b);

        let removed = store.remove_at(0).unwrap();
        assert_eq!(removed, a);
        assert_eq!(store.slice(0..2).unwrap(), vec![replacement, c]);
    }

    #[test]
    fn test_out_of_bounds_is_internal_error() {
        let mut store = InMemoryUserStore::with_users(vec![user("a@x.com")]);

        assert!(matches!(store.replace_at(1, user("b@x.com")), Err(AppError::InternalError(_))));
        assert!(matches!(store.remove_at(5), Err(AppError::InternalError(_))));
        assert!(matches!(store.slice(0..2), Err(AppError::InternalError(_))));
        assert_eq!(store.len(), 1);
    }
}
