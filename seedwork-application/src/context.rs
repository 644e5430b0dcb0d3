use crate::{error::AppError, event_bus::DomainEventBus};
use bon::Builder;
use std::fmt;
use std::sync::Arc;

/// 应用层上下文（Application Context）
///
/// 承载一次应用层调用（命令/查询）所需的横切信息：
/// - 关联追踪 `correlation_id`、因果链 `causation_id`、执行者 `actor_id`；
/// - 幂等键 `idempotency_key`：供基础设施层实现请求幂等；
/// - 本次请求范围内的领域事件总线 `events`：命令处理器向其发布事件，
///   事件冲刷装饰器在命令成功后对其执行 `flush`。
///
/// 典型用法：
/// ```rust
/// use seedwork_application::context::AppContext;
///
/// let ctx = AppContext::builder()
///     .correlation_id("cor-123")
///     .actor_id("u-1")
///     .idempotency_key("idem-xyz")
///     .build();
/// assert!(ctx.events().is_err());
/// ```
#[derive(Builder, Clone, Default)]
pub struct AppContext {
    #[builder(into)]
    pub correlation_id: Option<String>,
    #[builder(into)]
    pub causation_id: Option<String>,
    #[builder(into)]
    pub actor_id: Option<String>,
    #[builder(into)]
    pub idempotency_key: Option<String>,
    pub events: Option<Arc<dyn DomainEventBus>>,
}

impl AppContext {
    /// 绑定请求范围的事件总线
    pub fn with_events(mut self, events: Arc<dyn DomainEventBus>) -> Self {
        self.events = Some(events);
        self
    }

    /// 当前请求的事件总线；未绑定属于配置错误
    pub fn events(&self) -> Result<&Arc<dyn DomainEventBus>, AppError> {
        self.events.as_ref().ok_or(AppError::MissingEventBus)
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("correlation_id", &self.correlation_id)
            .field("causation_id", &self.causation_id)
            .field("actor_id", &self.actor_id)
            .field("idempotency_key", &self.idempotency_key)
            .field("events", &self.events.as_ref().map(|bus| bus.pending()))
            .finish()
    }
}
