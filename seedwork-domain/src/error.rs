//! 领域层统一错误定义
//!
//! 聚焦值/标识校验、领域规则、仓储与工作单元等最小必要集合，
//! 便于在应用层统一转换为 `AppError`。
//!
use std::fmt::Display;
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 值对象/标识校验 ---
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    // --- 领域规则 ---
    #[error("insufficient funds: balance {available}, requested {requested}")]
    InsufficientFunds { available: i64, requested: i64 },
    #[error("currency mismatch: account uses {expected}, operation uses {actual}")]
    CurrencyMismatch { expected: String, actual: String },
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    // --- 仓储/持久化 ---
    #[error("{}", not_found_message(.resource, .id))]
    NotFound {
        resource: String,
        id: Option<String>,
    },
    #[error("repository error: {reason}")]
    Repository { reason: String },
    #[error("unit of work error: {reason}")]
    UnitOfWork { reason: String },

    // --- 序列化 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
}

impl DomainError {
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// 资源不存在（携带资源名与标识，用于诊断）
    pub fn not_found(resource: impl Into<String>, id: impl Display) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: Some(id.to_string()),
        }
    }

    pub fn repository(reason: impl Into<String>) -> Self {
        Self::Repository {
            reason: reason.into(),
        }
    }

    pub fn unit_of_work(reason: impl Into<String>) -> Self {
        Self::UnitOfWork {
            reason: reason.into(),
        }
    }

    /// 是否属于领域规则违例（余额不足、币种不一致、非法值等）
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidValue { .. }
                | Self::InsufficientFunds { .. }
                | Self::CurrencyMismatch { .. }
                | Self::InvalidState { .. }
        )
    }
}

fn not_found_message(resource: &str, id: &Option<String>) -> String {
    match id {
        Some(id) => format!("Resource '{resource}' not found for id '{id}'"),
        None => format!("Resource '{resource}' not found"),
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
