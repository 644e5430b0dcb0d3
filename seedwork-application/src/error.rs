use seedwork_domain::error::DomainError;

/// 应用层统一错误
///
/// 配置类错误（处理器缺失、解析失败、契约不符、上下文缺少事件总线）属于编程错误，
/// 不应重试；其余错误原样向调用方传播。
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("validation: {0}")]
    Validation(String),

    #[error("infra: {0}")]
    Infra(String),

    #[error("no handler registered for {kind} {name}")]
    HandlerNotFound { kind: &'static str, name: String },

    #[error("handler for {kind} {name} is not a valid handler")]
    InvalidHandler { kind: &'static str, name: String },

    #[error("failed to resolve '{id}': {reason}")]
    Resolve { id: String, reason: String },

    #[error("application context carries no domain event bus")]
    MissingEventBus,
}

impl AppError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    pub fn infra(reason: impl Into<String>) -> Self {
        Self::Infra(reason.into())
    }

    /// 是否为配置错误（布线问题，重试无意义）
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::HandlerNotFound { .. }
                | Self::InvalidHandler { .. }
                | Self::Resolve { .. }
                | Self::MissingEventBus
        )
    }

    /// 内部领域错误（若有）
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            _ => None,
        }
    }
}
