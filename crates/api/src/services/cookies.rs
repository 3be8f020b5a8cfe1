//! Cookie helper for the login credential.
//!
//! Provides utilities for setting, reading, and clearing the httpOnly
//! cookie that carries the login token for browser clients.

use axum::http::{header::SET_COOKIE, HeaderMap, HeaderValue};

use crate::config::CookieConfig;

/// Cookie helper for managing the httpOnly credential cookie.
#[derive(Debug, Clone)]
pub struct CookieHelper {
    config: CookieConfig,
    /// Token expiry in seconds (from JWT config)
    token_expiry_secs: i64,
}

impl CookieHelper {
    pub fn new(config: CookieConfig, token_expiry_secs: i64) -> Self {
        Self {
            config,
            token_expiry_secs,
        }
    }

    /// Build a Set-Cookie header value for the login token.
    pub fn build_token_cookie(&self, token: &str) -> String {
        self.build_cookie(
            &format!("{}={}", self.config.name, token),
            &format!("Max-Age={}", self.token_expiry_secs),
        )
    }

    /// Build a Set-Cookie header that clears the credential cookie.
    pub fn build_clear_cookie(&self) -> String {
        self.build_cookie(
            &format!("{}=", self.config.name),
            "Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
        )
    }

    /// Add the token cookie to a HeaderMap.
    pub fn add_token_cookie(&self, headers: &mut HeaderMap, token: &str) {
        if let Ok(value) = HeaderValue::from_str(&self.build_token_cookie(token)) {
            headers.append(SET_COOKIE, value);
        }
    }

    /// Add the clearing cookie to a HeaderMap (for logout).
    pub fn add_clear_cookie(&self, headers: &mut HeaderMap) {
        if let Ok(value) = HeaderValue::from_str(&self.build_clear_cookie()) {
            headers.append(SET_COOKIE, value);
        }
    }

    /// Extract a cookie value from request headers by name.
    pub fn extract_cookie<'a>(&self, headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
        headers
            .get_all(axum::http::header::COOKIE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .flat_map(|cookie_header| cookie_header.split(';'))
            .map(|s| s.trim())
            .find_map(|cookie| {
                let (cookie_name, cookie_value) = cookie.split_once('=')?;
                (cookie_name == name).then_some(cookie_value)
            })
    }

    /// Extract the login token from the credential cookie.
    ///
    /// An empty value (left behind by a cleared cookie) counts as absent.
    pub fn extract_token<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        self.extract_cookie(headers, &self.config.name)
            .filter(|token| !token.is_empty())
    }

    /// Build a cookie string with all security attributes.
    fn build_cookie(&self, pair: &str, lifetime: &str) -> String {
        let mut cookie = format!("{}; Path={}; {}", pair, self.config.path, lifetime);

        cookie.push_str("; HttpOnly");

        if self.config.secure {
            cookie.push_str("; Secure");
        }

        cookie.push_str(&format!("; SameSite={}", self.config.same_site));

        if !self.config.domain.is_empty() {
            cookie.push_str(&format!("; Domain={}", self.config.domain));
        }

        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> CookieConfig {
        CookieConfig {
            name: "Authorization".to_string(),
            path: "/".to_string(),
            secure: true,
            same_site: "Strict".to_string(),
            domain: String::new(),
        }
    }

    #[test]
    fn test_build_token_cookie() {
        let helper = CookieHelper::new(test_config(), 86400);
        let cookie = helper.build_token_cookie("test_token");

        assert!(cookie.starts_with("Authorization=test_token;"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Strict"));
    }

    #[test]
    fn test_build_clear_cookie() {
        let helper = CookieHelper::new(test_config(), 86400);
        let cookie = helper.build_clear_cookie();

        assert!(cookie.starts_with("Authorization=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
        assert!(cookie.contains("HttpOnly"));
    }

    #[test]
    fn test_extract_token() {
        let helper = CookieHelper::new(test_config(), 86400);
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("theme=dark; Authorization=abc123; lang=id"),
        );

        assert_eq!(helper.extract_token(&headers), Some("abc123"));
        assert_eq!(helper.extract_cookie(&headers, "lang"), Some("id"));
    }

    #[test]
    fn test_extract_token_not_found() {
        let helper = CookieHelper::new(test_config(), 86400);
        let headers = HeaderMap::new();

        assert_eq!(helper.extract_token(&headers), None);
    }

    #[test]
    fn test_extract_token_cleared_value() {
        let helper = CookieHelper::new(test_config(), 86400);
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("Authorization="),
        );

        assert_eq!(helper.extract_token(&headers), None);
    }

    #[test]
    fn test_cookie_with_domain() {
        let mut config = test_config();
        config.domain = "filkom.ub.ac.id".to_string();

        let helper = CookieHelper::new(config, 86400);
        let cookie = helper.build_token_cookie("test");

        assert!(cookie.contains("Domain=filkom.ub.ac.id"));
    }

    #[test]
    fn test_cookie_without_secure() {
        let mut config = test_config();
        config.secure = false;

        let helper = CookieHelper::new(config, 86400);
        let cookie = helper.build_token_cookie("test");

        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_add_token_cookie_sets_header() {
        let helper = CookieHelper::new(test_config(), 60);
        let mut headers = HeaderMap::new();
        helper.add_token_cookie(&mut headers, "tok");

        let value = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(value.contains("Authorization=tok"));
        assert!(value.contains("Max-Age=60"));
    }
}
