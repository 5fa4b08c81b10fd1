pub mod url_validator;

/// 生成指定长度的随机字母数字别名
pub fn generate_random_alias(length: usize) -> String {
    use rand::distr::{Alphanumeric, SampleString};

    Alphanumeric.sample_string(&mut rand::rng(), length)
}

/// Check whether a path segment is a plausible alias.
///
/// Aliases are restricted to alphanumerics plus `_`, `-` and `.` so the
/// redirect edge can reject junk paths before touching storage.
pub fn is_valid_alias(alias: &str) -> bool {
    !alias.is_empty()
        && alias
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b'.')
}
