//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩 주소, 요청 속도 제한 설정을 관리합니다.

use std::env;
use std::str::FromStr;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_name(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. (대소문자 무관)
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// ```bash
    /// # .env.dev (개발 환경)
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn from_env() -> Self {
        let config = Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200),
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

/// 환경 변수를 파싱하고, 없거나 파싱에 실패하면 기본값을 사용합니다.
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    parse_or(key, env::var(key).ok().as_deref(), default)
}

/// 원시 설정 값을 파싱합니다. 값이 없거나 파싱에 실패하면 기본값을 사용합니다.
///
/// 파싱 실패는 설정 오류이므로 `error` 레벨로 기록합니다.
pub(crate) fn parse_or<T>(key: &str, raw: Option<&str>, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("DEV"), Environment::Development);
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("stage"), Environment::Staging);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_parse_or_falls_back_on_missing_and_invalid() {
        assert_eq!(parse_or("PORT", None, 42u16), 42);
        assert_eq!(parse_or("RATE_LIMIT_BURST_SIZE", Some("not-a-number"), 7u32), 7);
        assert_eq!(parse_or("RATE_LIMIT_BURST_SIZE", Some(" 15 "), 7u32), 15);
        assert_eq!(parse_or("PORT", Some("70000"), 8080u16), 8080);
    }

    #[test]
    fn test_env_or_uses_default_for_unset_key() {
        assert_eq!(env_or("USERS_REST_SERVICE_TEST_MISSING_KEY", 42u16), 42);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }
}
