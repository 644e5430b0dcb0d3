//! 标识（Identifier）
//!
//! 实体与事件的标识均为经过校验的不可变字符串，按值比较相等。
//! 具体标识类型通常由 `#[entity_id]` 宏生成，并在构造时强制各自的格式（前缀、非空）。
//!
use crate::error::{DomainError, DomainResult};
use std::fmt;
use std::hash::Hash;
use uuid::Uuid;

/// 标识能力：可比较、可哈希、可显示，并暴露底层字符串
pub trait Identifier:
    Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    fn as_str(&self) -> &str;
}

/// 校验标识格式：非空、以 `prefix` 开头、前缀后至少一个合法字符
///
/// `label` 用于错误信息，例如 `Bank account id cannot be empty`。
pub fn validate_identifier(value: &str, prefix: &str, label: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::invalid_value(format!("{label} cannot be empty")));
    }

    let Some(suffix) = value.strip_prefix(prefix) else {
        return Err(DomainError::invalid_value(format!(
            "{label} must start with \"{prefix}\""
        )));
    };

    let valid_suffix = !suffix.is_empty()
        && suffix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'));
    if !valid_suffix {
        return Err(DomainError::invalid_value(format!(
            "{label} contains invalid characters"
        )));
    }

    Ok(())
}

/// 生成带前缀的新标识（前缀 + UUID v4）
pub fn generate_identifier(prefix: &str) -> String {
    format!("{prefix}{}", Uuid::new_v4())
}
