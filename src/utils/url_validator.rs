//! 目标 URL 验证模块
//!
//! 注册表本身存储任意非空字符串；目标 URL 的把关在 HTTP 层完成。
//! 解析交给 `url` crate，协议按白名单检查。

use url::Url;

/// 允许的跳转协议
const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// 已知注入向量协议，单独报错
const BLOCKED_SCHEMES: &[&str] = &["javascript", "data", "file", "vbscript", "about", "blob"];

/// URL 验证错误
#[derive(Debug)]
pub enum UrlValidationError {
    Empty,
    BlockedScheme(String),
    UnsupportedScheme(String),
    Malformed(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL cannot be empty"),
            Self::BlockedScheme(scheme) => {
                write!(f, "URL scheme '{}:' is not allowed", scheme)
            }
            Self::UnsupportedScheme(scheme) => write!(
                f,
                "Unsupported URL scheme '{}:'. Only http:// and https:// targets are accepted",
                scheme
            ),
            Self::Malformed(msg) => write!(f, "Invalid URL: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 验证跳转目标 URL
///
/// 空串和纯空白直接拒绝；其余交给 `Url::parse`，再按协议白名单过滤。
/// `Url::parse` 会把协议归一化为小写，因此这里不需要自己做大小写处理。
pub fn validate_url(raw: &str) -> Result<(), UrlValidationError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let parsed = Url::parse(raw).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;

    let scheme = parsed.scheme();
    if BLOCKED_SCHEMES.contains(&scheme) {
        return Err(UrlValidationError::BlockedScheme(scheme.to_string()));
    }
    if !ALLOWED_SCHEMES.contains(&scheme) {
        return Err(UrlValidationError::UnsupportedScheme(scheme.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_http_urls() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com/path?q=1").is_ok());
        assert!(validate_url("http://localhost:8080").is_ok());
        assert!(validate_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        assert!(matches!(validate_url(""), Err(UrlValidationError::Empty)));
        assert!(matches!(
            validate_url("   "),
            Err(UrlValidationError::Empty)
        ));
    }

    #[test]
    fn test_blocked_schemes() {
        for raw in [
            "javascript:alert(1)",
            "JAVASCRIPT:alert(1)",
            "data:text/html,hello",
            "file:///etc/passwd",
            "vbscript:msgbox(1)",
        ] {
            assert!(
                matches!(validate_url(raw), Err(UrlValidationError::BlockedScheme(_))),
                "{:?} should be blocked",
                raw
            );
        }
    }

    #[test]
    fn test_unsupported_schemes() {
        assert!(matches!(
            validate_url("ftp://example.com"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            validate_url("mailto:test@example.com"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_malformed_urls() {
        assert!(matches!(
            validate_url("http://"),
            Err(UrlValidationError::Malformed(_))
        ));
        assert!(matches!(
            validate_url("not a url"),
            Err(UrlValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_uppercase_scheme_normalized() {
        assert!(validate_url("HTTP://example.com").is_ok());
        assert!(validate_url("HTTPS://example.com").is_ok());
    }
}
