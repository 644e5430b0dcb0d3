//! 延迟投递的领域事件总线（DeferredDomainEventBus）
//!
//! `publish` 只写入缓冲，`flush` 时才按“缓冲顺序 × 订阅顺序”投递给处理器。
//! `flush` 先原子地取出并清空缓冲再开始投递：处理器在投递过程中发布的新事件
//! 留待下一次 `flush`。
//!
//! 失败语义：处理器解析失败、契约不符或处理器返回错误都会中止本次剩余投递
//! 并返回该错误；已投递的事件不回滚，未投递的事件随本批次一起丢弃。
//!
use crate::{
    container::{Container, resolve_handler},
    error::AppError,
    event_bus::{DomainEventBus, DomainEventHandler},
};
use async_trait::async_trait;
use dashmap::DashMap;
use seedwork_domain::domain_event::DomainEvent;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Buffer = Vec<Arc<dyn DomainEvent>>;

pub struct DeferredDomainEventBus {
    container: Arc<dyn Container>,
    subscriptions: Arc<DashMap<String, Vec<String>>>,
    buffer: Mutex<Buffer>,
}

impl DeferredDomainEventBus {
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self {
            container,
            subscriptions: Arc::new(DashMap::new()),
            buffer: Mutex::new(Vec::new()),
        }
    }

    /// 新的请求范围总线：缓冲为空，共享订阅表与容器
    pub fn scoped(&self) -> Self {
        Self {
            container: self.container.clone(),
            subscriptions: self.subscriptions.clone(),
            buffer: Mutex::new(Vec::new()),
        }
    }

    /// 某事件类型的订阅者标识（按订阅顺序）
    pub fn subscribers(&self, event_type: &str) -> Vec<String> {
        self.subscriptions
            .get(event_type)
            .map(|ids| ids.value().clone())
            .unwrap_or_default()
    }

    // 缓冲只做整体追加/取出，中毒时内容仍然完整
    fn lock(&self) -> MutexGuard<'_, Buffer> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl DomainEventBus for DeferredDomainEventBus {
    fn publish(&self, events: &[Arc<dyn DomainEvent>]) -> Result<(), AppError> {
        self.lock().extend(events.iter().cloned());
        tracing::trace!(published = events.len(), "domain events buffered");
        Ok(())
    }

    fn subscribe(&self, event_type: &str, handler_id: &str) {
        self.subscriptions
            .entry(event_type.to_owned())
            .or_default()
            .push(handler_id.to_owned());
    }

    async fn flush(&self) -> Result<(), AppError> {
        let batch = std::mem::take(&mut *self.lock());
        if batch.is_empty() {
            return Ok(());
        }
        tracing::debug!(events = batch.len(), "flushing domain events");

        for event in &batch {
            let handler_ids = self.subscribers(event.event_type());
            if handler_ids.is_empty() {
                tracing::trace!(event_type = event.event_type(), "no subscribers, skipped");
                continue;
            }

            for handler_id in &handler_ids {
                let handler = resolve_handler::<Arc<dyn DomainEventHandler>>(
                    self.container.as_ref(),
                    handler_id,
                    "event",
                    event.event_type(),
                )?;
                handler.handle(event.as_ref()).await?;
            }
        }

        Ok(())
    }

    fn discard(&self) -> usize {
        let dropped = std::mem::take(&mut *self.lock()).len();
        if dropped > 0 {
            tracing::debug!(events = dropped, "discarded buffered domain events");
        }
        dropped
    }

    fn pending(&self) -> usize {
        self.lock().len()
    }
}
