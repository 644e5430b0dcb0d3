use crate::error::AppError;
use async_trait::async_trait;
use seedwork_domain::domain_event::DomainEvent;
use std::sync::Arc;

/// 领域事件处理器
///
/// 按事件类型（`DomainEvent::event_type`）订阅；需要具体事件时通过
/// `event.downcast_ref::<E>()` 还原。
#[async_trait]
pub trait DomainEventHandler: Send + Sync {
    async fn handle(&self, event: &dyn DomainEvent) -> Result<(), AppError>;
}

/// 领域事件总线
///
/// `publish` 只负责接收事件；何时投递给订阅者由实现决定
/// （延迟实现在 `flush` 时才投递）。
#[async_trait]
pub trait DomainEventBus: Send + Sync {
    /// 发布事件（按给定顺序）
    fn publish(&self, events: &[Arc<dyn DomainEvent>]) -> Result<(), AppError>;

    /// 为事件类型追加一个处理器标识
    fn subscribe(&self, event_type: &str, handler_id: &str);

    /// 投递已缓冲的事件
    async fn flush(&self) -> Result<(), AppError>;

    /// 丢弃已缓冲的事件，返回丢弃数量
    fn discard(&self) -> usize;

    /// 当前缓冲的事件数量
    fn pending(&self) -> usize;
}
