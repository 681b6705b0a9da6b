//! 사용자 관리 비즈니스 규칙 설정
//!
//! 가입 가능한 최소 연령과 목록 조회 페이지네이션 기본값/상한을 제공합니다.
//! 서비스 계층은 이 값을 읽기만 합니다.

use super::data_config::env_or;

/// 사용자 관리 설정
///
/// # Environment Variables
///
/// | 변수 | 필드 | 기본값 |
/// |------|------|--------|
/// | `USERS_MIN_AGE` | `user_min_age` | 18 |
/// | `PAGINATION_DEFAULT_OFFSET` | `pagination_default_offset` | 0 |
/// | `PAGINATION_DEFAULT_LIMIT` | `pagination_default_limit` | 10 |
/// | `PAGINATION_MAX_LIMIT` | `pagination_max_limit` | 50 |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersConfig {
    /// 가입 가능한 최소 연령 (만 나이)
    pub user_min_age: u32,
    /// `offset` 미지정 시 사용하는 시작 위치
    pub pagination_default_offset: i64,
    /// `limit` 미지정 시 사용하는 페이지 크기
    pub pagination_default_limit: i64,
    /// 한 페이지에 반환할 수 있는 최대 항목 수
    pub pagination_max_limit: i64,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            user_min_age: 18,
            pagination_default_offset: 0,
            pagination_default_limit: 10,
            pagination_max_limit: 50,
        }
    }
}

impl UsersConfig {
    /// 환경 변수에서 설정을 로드합니다.
    ///
    /// 값이 없거나 파싱할 수 없는 항목은 [`Default`] 값을 사용합니다.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            user_min_age: env_or("USERS_MIN_AGE", defaults.user_min_age),
            pagination_default_offset: env_or(
                "PAGINATION_DEFAULT_OFFSET",
                defaults.pagination_default_offset,
            ),
            pagination_default_limit: env_or(
                "PAGINATION_DEFAULT_LIMIT",
                defaults.pagination_default_limit,
            ),
            pagination_max_limit: env_or("PAGINATION_MAX_LIMIT", defaults.pagination_max_limit),
        };

        log::info!("사용자 설정 로드됨: {:?}", config);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UsersConfig::default();
        assert_eq!(config.user_min_age, 18);
        assert_eq!(config.pagination_default_offset, 0);
        assert_eq!(config.pagination_default_limit, 10);
        assert_eq!(config.pagination_max_limit, 50);
    }
}
